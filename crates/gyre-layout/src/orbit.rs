//! A single ring of packed objects.

use std::f64::consts::TAU;

use gyre_core::geom::arc;
use gyre_core::{ObjectId, OrbitId, Placeable, Point};
use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::event::OrbitGeometry;
use crate::layout::Positioning;

/// Role of an orbit in its system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrbitKind {
    /// Innermost orbit. Holds a single object centered on the origin.
    Core,
    /// Any outer orbit. Objects are centered on a circle around the
    /// origin, each taking the angle its circle subtends there.
    Ring,
}

#[derive(Debug)]
struct Member<P> {
    id: ObjectId,
    object: P,
}

/// One concentric ring of an [`OrbitSystem`](crate::OrbitSystem).
///
/// # Geometry
///
/// - `inner_radius`: set by the owning system (previous orbit's radius
///   plus padding; 0 for the core).
/// - `center_radius`: where object centers sit. For a ring it is
///   `inner_radius + r_max`, where `r_max` is the largest member radius,
///   widened only if the members' arcs would otherwise exceed a full
///   revolution (after padding shrinks or the largest member leaves).
/// - `radius`: `center_radius + r_max`, the boundary the next orbit must
///   clear.
///
/// All three are recomputed from the current membership on every
/// structural change. An empty orbit collapses to its inner radius.
///
/// # Capacity
///
/// A ring accepts an object if, at the center radius it would have with
/// that object added, the sum of every member's subtended arc stays
/// within one revolution. Because the center radius follows the largest
/// member, one large object makes room for many small ones.
#[derive(Debug)]
pub struct Orbit<P> {
    id: OrbitId,
    kind: OrbitKind,
    inner_radius: f64,
    center_radius: f64,
    radius: f64,
    angle_tolerance: f64,
    members: Vec<Member<P>>,
}

impl<P: Placeable> Orbit<P> {
    /// Create the innermost orbit.
    pub(crate) fn core(angle_tolerance: f64) -> Self {
        Self::with_kind(OrbitKind::Core, 0.0, angle_tolerance)
    }

    /// Create an outer ring starting at `inner_radius`.
    pub(crate) fn ring(inner_radius: f64, angle_tolerance: f64) -> Self {
        Self::with_kind(OrbitKind::Ring, inner_radius, angle_tolerance)
    }

    fn with_kind(kind: OrbitKind, inner_radius: f64, angle_tolerance: f64) -> Self {
        Self {
            id: OrbitId::next(),
            kind,
            inner_radius,
            center_radius: inner_radius,
            radius: inner_radius,
            angle_tolerance,
            members: Vec::new(),
        }
    }

    /// This orbit's handle.
    pub fn id(&self) -> OrbitId {
        self.id
    }

    /// Core or ring.
    pub fn kind(&self) -> OrbitKind {
        self.kind
    }

    /// Inner boundary.
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Radius at which object centers are placed.
    pub fn center_radius(&self) -> f64 {
        self.center_radius
    }

    /// Outer boundary.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Number of placed objects.
    pub fn object_count(&self) -> usize {
        self.members.len()
    }

    /// Whether no objects are placed.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `id` is placed on this orbit.
    pub fn contains_object(&self, id: ObjectId) -> bool {
        self.members.iter().any(|m| m.id == id)
    }

    /// Look up a placed object.
    pub fn get(&self, id: ObjectId) -> Option<&P> {
        self.members
            .iter()
            .find(|m| m.id == id)
            .map(|m| &m.object)
    }

    /// Placed objects in placement (angular) order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &P)> {
        self.members.iter().map(|m| (m.id, &m.object))
    }

    /// Visit every placed object once, in placement order.
    pub fn for_each(&self, mut f: impl FnMut(ObjectId, &P)) {
        for member in &self.members {
            f(member.id, &member.object);
        }
    }

    /// Snapshot of this orbit's radii for presentational observers.
    pub fn geometry(&self, index: usize) -> OrbitGeometry {
        OrbitGeometry {
            id: self.id,
            index,
            kind: self.kind,
            inner_radius: self.inner_radius,
            center_radius: self.center_radius,
            radius: self.radius,
            object_count: self.members.len(),
        }
    }

    /// Whether an object of `radius` would be accepted right now.
    pub fn fits(&self, radius: f64) -> bool {
        if self.members.is_empty() {
            return true;
        }
        match self.kind {
            OrbitKind::Core => false,
            OrbitKind::Ring => {
                let largest = self.largest_radius().max(radius);
                let center = self.inner_radius + largest;
                let total = arc::total_span(
                    self.member_radii().chain(std::iter::once(radius)),
                    center,
                );
                arc::fits_revolution(total, self.angle_tolerance)
            }
        }
    }

    /// Place `object` if it fits.
    ///
    /// On success the derived radii are recomputed and, unless
    /// positioning is deferred, every member is moved to its slot. On
    /// rejection the object is handed back untouched and the orbit is
    /// unchanged.
    pub(crate) fn try_add(
        &mut self,
        id: ObjectId,
        object: P,
        positioning: Positioning,
        animated: bool,
    ) -> Result<(), P> {
        let radius = object.radius();
        if !self.fits(radius) {
            trace!(orbit = %self.id, radius, "orbit full, object rejected");
            return Err(object);
        }

        self.members.push(Member { id, object });
        self.settle();
        trace!(
            orbit = %self.id,
            object = %id,
            radius,
            count = self.members.len(),
            "object accepted"
        );
        if positioning == Positioning::Immediate {
            self.position_objects(animated);
        }
        Ok(())
    }

    /// Remove a placed object and recompute the derived radii.
    ///
    /// Does not reposition the remaining members; the owning system
    /// relays out this orbit and the ones outside it. Go through
    /// [`OrbitSystem::remove_object`](crate::OrbitSystem::remove_object).
    pub(crate) fn remove_object(&mut self, id: ObjectId) -> Option<P> {
        let index = self.members.iter().position(|m| m.id == id)?;
        let member = self.members.remove(index);
        self.settle();
        Some(member.object)
    }

    /// Remove every object and collapse to the empty baseline.
    pub(crate) fn remove_all_objects(&mut self) -> Vec<(ObjectId, P)> {
        let drained = self.members.drain(..).map(|m| (m.id, m.object)).collect();
        self.settle();
        drained
    }

    /// Move the inner boundary and recompute the derived radii.
    pub(crate) fn set_inner_radius(&mut self, inner_radius: f64) {
        self.inner_radius = inner_radius;
        self.settle();
    }

    /// Move every member to its slot.
    ///
    /// Slots are laid out counter-clockwise from angle 0 in placement
    /// order. Each member takes its subtended arc; leftover arc is shared
    /// evenly, one share after each member. The result depends only on
    /// `center_radius` and the ordered member radii.
    pub(crate) fn position_objects(&mut self, animated: bool) {
        if self.kind == OrbitKind::Core {
            for member in &mut self.members {
                member.object.move_to(Point::ORIGIN, animated);
            }
            return;
        }

        let center = self.center_radius;
        let spans: SmallVec<[f64; 16]> = self
            .members
            .iter()
            .map(|m| arc::span(m.object.radius(), center))
            .collect();
        let used: f64 = spans.iter().sum();
        let gap = if spans.is_empty() {
            0.0
        } else {
            (TAU - used).max(0.0) / spans.len() as f64
        };

        let mut cursor = 0.0;
        for (member, span) in self.members.iter_mut().zip(spans) {
            let angle = cursor + span / 2.0;
            member.object.move_to(Point::polar(center, angle), animated);
            cursor += span + gap;
        }
    }

    /// Forward invalidation to every member.
    pub(crate) fn invalidate(&mut self) {
        for member in &mut self.members {
            member.object.invalidate();
        }
    }

    /// Recompute `center_radius` and `radius` from the membership.
    fn settle(&mut self) {
        if self.members.is_empty() {
            self.center_radius = self.inner_radius;
            self.radius = self.inner_radius;
            return;
        }

        let largest = self.largest_radius();
        let center = match self.kind {
            OrbitKind::Core => self.inner_radius,
            OrbitKind::Ring => {
                let base = self.inner_radius + largest;
                if let Some(radius) = self.invalid_radius() {
                    warn!(orbit = %self.id, radius, "member radius is invalid, ring not widened");
                    base
                } else {
                    let radii: SmallVec<[f64; 16]> = self.member_radii().collect();
                    let center = arc::fit_distance(&radii, base, self.angle_tolerance);
                    if center > base {
                        warn!(
                            orbit = %self.id,
                            base,
                            center,
                            "members exceed one revolution, widening ring"
                        );
                    }
                    center
                }
            }
        };
        self.center_radius = center;
        self.radius = center + largest;
    }

    /// First member radius that is negative or not finite.
    ///
    /// Radii are checked on insertion, but a shared handle can change one
    /// afterwards.
    pub(crate) fn invalid_radius(&self) -> Option<f64> {
        self.member_radii().find(|r| !r.is_finite() || *r < 0.0)
    }

    fn member_radii(&self) -> impl Iterator<Item = f64> + '_ {
        self.members.iter().map(|m| m.object.radius())
    }

    fn largest_radius(&self) -> f64 {
        self.member_radii().fold(0.0, f64::max)
    }
}
