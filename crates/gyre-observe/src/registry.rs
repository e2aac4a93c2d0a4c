//! Observer registry keyed by stable handles.

use std::fmt;

use indexmap::IndexMap;

/// Handle returned when registering an observer.
///
/// Handles are allocated from a per-registry monotonic counter and are
/// never reused after [`ObserverRegistry::remove`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Boxed notification callback.
pub type Callback<A> = Box<dyn FnMut(&A)>;

/// Map from [`ObserverId`] to an observer slot `S`.
///
/// Iteration and notification follow registration order. Removing an
/// entry does not disturb the handles of the others.
///
/// `S` is usually [`Callback<A>`]; callers that need re-entrant
/// notification store shared slots instead (see
/// [`Observable`](crate::Observable)).
pub struct ObserverRegistry<S> {
    slots: IndexMap<ObserverId, S>,
    next_id: u64,
}

impl<S> ObserverRegistry<S> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            slots: IndexMap::new(),
            next_id: 0,
        }
    }

    /// Register a slot and return its handle.
    pub fn insert(&mut self, slot: S) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.slots.insert(id, slot);
        id
    }

    /// Unregister a handle. Returns the slot if it was registered.
    pub fn remove(&mut self, id: ObserverId) -> Option<S> {
        self.slots.shift_remove(&id)
    }

    /// Whether `id` is currently registered.
    pub fn contains(&self, id: ObserverId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Look up a registered slot.
    pub fn get(&self, id: ObserverId) -> Option<&S> {
        self.slots.get(&id)
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Unregister every observer. Handles issued so far stay retired.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Registered handles and slots, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (ObserverId, &S)> {
        self.slots.iter().map(|(id, slot)| (*id, slot))
    }
}

impl<A> ObserverRegistry<Callback<A>> {
    /// Register a callback.
    pub fn observe(&mut self, callback: impl FnMut(&A) + 'static) -> ObserverId {
        self.insert(Box::new(callback))
    }

    /// Unregister a callback. Returns `true` if it was registered.
    pub fn unobserve(&mut self, id: ObserverId) -> bool {
        self.remove(id).is_some()
    }

    /// Call every registered callback with `arg`, in registration order.
    pub fn notify(&mut self, arg: &A) {
        for callback in self.slots.values_mut() {
            callback(arg);
        }
    }
}

impl<S> Default for ObserverRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for ObserverRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.slots.keys().collect::<Vec<_>>())
            .field("next_id", &self.next_id)
            .finish()
    }
}
