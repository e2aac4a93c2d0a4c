//! The object-safe `LayoutSystem` trait.

use gyre_core::{ObjectId, Placeable};
use gyre_observe::{Callback, ObserverId};

use crate::error::LayoutError;
use crate::event::LayoutEvent;

/// When a newly placed object (and its orbit-mates) are moved to their
/// slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Positioning {
    /// Reposition the receiving orbit as soon as the object is accepted.
    #[default]
    Immediate,
    /// Only update membership and radii. The caller batches insertions
    /// and finishes with [`LayoutSystem::position_objects`].
    Deferred,
}

/// A container that assigns positions to [`Placeable`] objects.
///
/// # Object Safety
///
/// Designed for use as `dyn LayoutSystem<P>`: closures are taken as
/// `&mut dyn FnMut` and observers as boxed [`Callback`]s.
pub trait LayoutSystem<P: Placeable> {
    /// Place `object` and return its handle.
    ///
    /// Fails only if the object's radius is negative or not finite.
    fn add_object(&mut self, object: P, positioning: Positioning) -> Result<ObjectId, LayoutError>;

    /// Remove a placed object, handing it back to the caller.
    fn remove_object(&mut self, id: ObjectId) -> Option<P>;

    /// Remove every object and return them in placement order.
    fn remove_all_objects(&mut self) -> Vec<P>;

    /// Whether `id` is placed in this system.
    fn contains_object(&self, id: ObjectId) -> bool;

    /// Visit every placed object exactly once.
    fn for_each_object(&self, f: &mut dyn FnMut(ObjectId, &P));

    /// Number of placed objects.
    fn object_count(&self) -> usize;

    /// Radius of the smallest origin-centered circle enclosing every
    /// placed object.
    fn radius(&self) -> f64;

    /// Move every placed object to its computed slot.
    ///
    /// Fails if a placed object's radius is no longer valid.
    fn position_objects(&mut self, animated: bool) -> Result<(), LayoutError>;

    /// Forward invalidation to every placed object.
    fn invalidate(&mut self);

    /// Register a layout observer.
    fn subscribe(&mut self, callback: Callback<LayoutEvent>) -> ObserverId;

    /// Remove a layout observer. Returns `false` for an unknown handle.
    fn unsubscribe(&mut self, id: ObserverId) -> bool;
}
