//! `OrbitSystem`: overflow orchestration over a chain of orbits.

use gyre_core::{ObjectId, OrbitId, Placeable, Point};
use gyre_observe::{Callback, ObserverId, ObserverRegistry};
use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::config::{validate_padding, LayoutConfig};
use crate::error::LayoutError;
use crate::event::{LayoutEvent, OrbitGeometry};
use crate::layout::{LayoutSystem, Positioning};
use crate::orbit::Orbit;

/// Concentric orbits packed around a shared origin.
///
/// The system always holds at least the core orbit. New objects go to
/// the outermost orbit; when it refuses, a new ring is opened just
/// outside it (`previous radius + padding`) and the object is placed
/// there. An insertion opens at most one ring.
///
/// Orbits are only discarded by [`remove_all_objects`](Self::remove_all_objects).
/// Removing individual objects leaves empty orbits in place and
/// re-chains the orbits outside the changed one.
///
/// # Examples
///
/// ```
/// use gyre_core::{Placeable, Point};
/// use gyre_layout::{OrbitSystem, Positioning};
///
/// struct Dot { r: f64, at: Point }
///
/// impl Placeable for Dot {
///     fn radius(&self) -> f64 { self.r }
///     fn position(&self) -> Point { self.at }
///     fn set_position(&mut self, p: Point) { self.at = p; }
///     fn invalidate(&mut self) {}
/// }
///
/// let mut system = OrbitSystem::new(2.0).unwrap();
/// for _ in 0..7 {
///     system.add_object(Dot { r: 10.0, at: Point::ORIGIN }, Positioning::Immediate).unwrap();
/// }
/// // One in the core, six around it.
/// assert_eq!(system.orbit_count(), 2);
/// assert_eq!(system.radius(), 10.0 + 2.0 + 20.0);
/// ```
#[derive(Debug)]
pub struct OrbitSystem<P> {
    config: LayoutConfig,
    orbits: SmallVec<[Orbit<P>; 4]>,
    /// Owning orbit index per placed object, in insertion order.
    membership: IndexMap<ObjectId, usize>,
    observers: ObserverRegistry<Callback<LayoutEvent>>,
    origin: Point,
}

impl<P: Placeable> OrbitSystem<P> {
    /// Create an empty system with the given inter-orbit padding.
    pub fn new(orbit_padding: f64) -> Result<Self, LayoutError> {
        Self::with_config(LayoutConfig::new().with_orbit_padding(orbit_padding))
    }

    /// Create an empty system from a full configuration.
    pub fn with_config(config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        let mut orbits = SmallVec::new();
        orbits.push(Orbit::core(config.angle_tolerance));
        Ok(Self {
            config,
            orbits,
            membership: IndexMap::new(),
            observers: ObserverRegistry::new(),
            origin: Point::ORIGIN,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Radial gap between consecutive orbits.
    pub fn orbit_padding(&self) -> f64 {
        self.config.orbit_padding
    }

    /// Change the radial gap between consecutive orbits.
    ///
    /// Every orbit from the second outward gets its inner radius
    /// reassigned and its objects repositioned. Setting the current value
    /// again does nothing. Positions depend only on the padding and the
    /// membership, so restoring a previous padding restores every
    /// position exactly.
    ///
    /// Fails, keeping the old padding, if the padding is invalid or a
    /// placed object's radius has become invalid.
    pub fn set_orbit_padding(&mut self, padding: f64) -> Result<(), LayoutError> {
        validate_padding(padding)?;
        if padding == self.config.orbit_padding {
            return Ok(());
        }
        self.validate_radii()?;
        debug!(
            from = self.config.orbit_padding,
            to = padding,
            orbits = self.orbits.len(),
            "orbit padding changed"
        );
        self.config.orbit_padding = padding;
        self.relayout(1, self.config.animate_transitions, true);
        self.emit_geometry_changed();
        Ok(())
    }

    /// Radius of the outermost orbit. 0 for an empty system.
    pub fn radius(&self) -> f64 {
        self.orbits.last().map_or(0.0, Orbit::radius)
    }

    /// Number of placed objects.
    pub fn object_count(&self) -> usize {
        self.membership.len()
    }

    /// Whether no objects are placed.
    pub fn is_empty(&self) -> bool {
        self.membership.is_empty()
    }

    /// Number of orbits, including empty ones. Always at least 1.
    pub fn orbit_count(&self) -> usize {
        self.orbits.len()
    }

    /// Orbits, innermost first.
    pub fn orbits(&self) -> &[Orbit<P>] {
        &self.orbits
    }

    /// Geometry snapshot of every orbit, innermost first.
    pub fn orbit_geometry(&self) -> Vec<OrbitGeometry> {
        self.orbits
            .iter()
            .enumerate()
            .map(|(index, orbit)| orbit.geometry(index))
            .collect()
    }

    /// Look up a placed object.
    pub fn get(&self, id: ObjectId) -> Option<&P> {
        let index = *self.membership.get(&id)?;
        self.orbits.get(index)?.get(id)
    }

    /// The orbit holding `id`.
    pub fn orbit_of(&self, id: ObjectId) -> Option<&Orbit<P>> {
        let index = *self.membership.get(&id)?;
        self.orbits.get(index)
    }

    /// Whether `id` is placed in this system.
    pub fn contains_object(&self, id: ObjectId) -> bool {
        self.membership.contains_key(&id)
    }

    /// Placed objects, innermost orbit first, placement order within an
    /// orbit.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &P)> {
        self.orbits.iter().flat_map(|orbit| orbit.iter())
    }

    /// Visit every placed object exactly once, in [`iter`](Self::iter)
    /// order.
    pub fn for_each(&self, mut f: impl FnMut(ObjectId, &P)) {
        for orbit in &self.orbits {
            orbit.for_each(&mut f);
        }
    }

    /// Where this system sits when nested in an outer layout.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Place `object` in the outermost orbit, opening a new ring if it
    /// does not fit.
    ///
    /// With [`Positioning::Deferred`] only membership and radii change;
    /// finish a batch with [`position_objects`](Self::position_objects).
    pub fn add_object(&mut self, object: P, positioning: Positioning) -> Result<ObjectId, LayoutError> {
        let radius = object.radius();
        if !radius.is_finite() || radius < 0.0 {
            return Err(LayoutError::InvalidRadius { radius });
        }

        let id = ObjectId::next();
        let animated = self.config.animate_transitions;
        let mut opened: SmallVec<[usize; 1]> = SmallVec::new();
        let mut pending = object;
        loop {
            let index = self.orbits.len() - 1;
            match self.orbits[index].try_add(id, pending, positioning, animated) {
                Ok(()) => {
                    self.membership.insert(id, index);
                    break;
                }
                Err(rejected) => {
                    pending = rejected;
                    let inner = self.orbits[index].radius() + self.config.orbit_padding;
                    let ring = Orbit::ring(inner, self.config.angle_tolerance);
                    debug!(
                        orbit = %ring.id(),
                        index = index + 1,
                        inner_radius = inner,
                        radius,
                        "outermost orbit full, opening ring"
                    );
                    self.orbits.push(ring);
                    opened.push(index + 1);
                }
            }
        }

        if !self.observers.is_empty() {
            for index in opened {
                let orbit = self.orbits[index].geometry(index);
                self.emit(LayoutEvent::OrbitAttached { orbit });
            }
        }
        self.emit_geometry_changed();
        Ok(id)
    }

    /// Remove a placed object and hand it back.
    ///
    /// The owning orbit shrinks to its remaining members; orbits outside
    /// it are re-chained and repositioned. Empty orbits are kept.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<P> {
        let index = self.membership.shift_remove(&id)?;
        let object = self.orbits.get_mut(index)?.remove_object(id)?;
        self.relayout(index, self.config.animate_transitions, false);
        self.emit_geometry_changed();
        Some(object)
    }

    /// Remove every object, discard every orbit, and start over with a
    /// single empty core. Padding and observers are kept.
    ///
    /// Returns the removed objects, innermost orbit first.
    pub fn remove_all_objects(&mut self) -> Vec<P> {
        let detached: SmallVec<[OrbitId; 8]> = self.orbits.iter().rev().map(Orbit::id).collect();
        let mut objects = Vec::with_capacity(self.membership.len());
        for orbit in &mut self.orbits {
            objects.extend(orbit.remove_all_objects().into_iter().map(|(_, object)| object));
        }
        self.orbits.clear();
        self.membership.clear();
        self.orbits.push(Orbit::core(self.config.angle_tolerance));
        debug!(
            removed = objects.len(),
            orbits = detached.len(),
            "layout reset"
        );

        if !self.observers.is_empty() {
            for id in detached {
                self.emit(LayoutEvent::OrbitDetached { id });
            }
            let orbit = self.orbits[0].geometry(0);
            self.emit(LayoutEvent::OrbitAttached { orbit });
        }
        self.emit_geometry_changed();
        objects
    }

    /// Recompute every orbit's radii and move every object to its slot.
    ///
    /// Fails without moving anything if a placed object's radius has
    /// become negative or non-finite since it was added.
    pub fn position_objects(&mut self, animated: bool) -> Result<(), LayoutError> {
        self.validate_radii()?;
        self.relayout(0, animated, true);
        self.emit_geometry_changed();
        Ok(())
    }

    /// Check every placed object's current radius.
    ///
    /// Radii are validated on insertion; this catches objects whose
    /// radius was changed afterwards through a shared handle.
    pub fn validate_radii(&self) -> Result<(), LayoutError> {
        match self.orbits.iter().find_map(Orbit::invalid_radius) {
            Some(radius) => Err(LayoutError::InvalidRadius { radius }),
            None => Ok(()),
        }
    }

    /// Forward invalidation to every placed object.
    pub fn invalidate(&mut self) {
        for orbit in &mut self.orbits {
            orbit.invalidate();
        }
    }

    /// Register a layout observer.
    pub fn subscribe(&mut self, callback: impl FnMut(&LayoutEvent) + 'static) -> ObserverId {
        self.observers.observe(callback)
    }

    /// Remove a layout observer. Returns `false` for an unknown handle.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unobserve(id)
    }

    /// Re-chain orbits `from..` and reposition each one visited.
    ///
    /// Without `force`, stops at the first orbit past `from` whose inner
    /// radius is already correct: nothing outside it can have changed.
    fn relayout(&mut self, from: usize, animated: bool, force: bool) {
        let padding = self.config.orbit_padding;
        for i in from..self.orbits.len() {
            let inner = if i == 0 {
                0.0
            } else {
                self.orbits[i - 1].radius() + padding
            };
            if i > from && !force && inner.to_bits() == self.orbits[i].inner_radius().to_bits() {
                break;
            }
            let orbit = &mut self.orbits[i];
            orbit.set_inner_radius(inner);
            orbit.position_objects(animated);
        }
    }

    fn emit(&mut self, event: LayoutEvent) {
        self.observers.notify(&event);
    }

    fn emit_geometry_changed(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let orbits = self.orbit_geometry();
        self.emit(LayoutEvent::GeometryChanged { orbits });
    }
}

impl<P: Placeable> LayoutSystem<P> for OrbitSystem<P> {
    fn add_object(&mut self, object: P, positioning: Positioning) -> Result<ObjectId, LayoutError> {
        OrbitSystem::add_object(self, object, positioning)
    }

    fn remove_object(&mut self, id: ObjectId) -> Option<P> {
        OrbitSystem::remove_object(self, id)
    }

    fn remove_all_objects(&mut self) -> Vec<P> {
        OrbitSystem::remove_all_objects(self)
    }

    fn contains_object(&self, id: ObjectId) -> bool {
        OrbitSystem::contains_object(self, id)
    }

    fn for_each_object(&self, f: &mut dyn FnMut(ObjectId, &P)) {
        self.for_each(f);
    }

    fn object_count(&self) -> usize {
        OrbitSystem::object_count(self)
    }

    fn radius(&self) -> f64 {
        OrbitSystem::radius(self)
    }

    fn position_objects(&mut self, animated: bool) -> Result<(), LayoutError> {
        OrbitSystem::position_objects(self, animated)
    }

    fn invalidate(&mut self) {
        OrbitSystem::invalidate(self);
    }

    fn subscribe(&mut self, callback: Callback<LayoutEvent>) -> ObserverId {
        self.observers.insert(callback)
    }

    fn unsubscribe(&mut self, id: ObserverId) -> bool {
        OrbitSystem::unsubscribe(self, id)
    }
}

/// A whole system can be placed as one object in an outer layout: its
/// radius is the system radius and its position is the system origin.
impl<P: Placeable> Placeable for OrbitSystem<P> {
    fn radius(&self) -> f64 {
        OrbitSystem::radius(self)
    }

    fn position(&self) -> Point {
        self.origin
    }

    fn set_position(&mut self, position: Point) {
        self.origin = position;
    }

    fn invalidate(&mut self) {
        OrbitSystem::invalidate(self);
    }
}
