//! Strongly-typed handles for placed objects and orbits.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`ObjectId`] allocation.
static OBJECT_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Counter for unique [`OrbitId`] allocation.
static ORBIT_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identifies an object placed in a layout.
///
/// Allocated from a monotonic atomic counter via [`ObjectId::next`] when
/// the object is accepted. Two placements never share an ID within a
/// process, so an ID issued by one system is never mistaken for a
/// member of another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Allocate a fresh, unique object ID. Thread-safe.
    pub fn next() -> Self {
        Self(OBJECT_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies one orbit (ring) of a layout.
///
/// Orbits are recreated when a system is reset; the new orbits get new
/// IDs, so a scene graph keyed by `OrbitId` never confuses a detached
/// ring with its replacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrbitId(u64);

impl OrbitId {
    /// Allocate a fresh, unique orbit ID. Thread-safe.
    pub fn next() -> Self {
        Self(ORBIT_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrbitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
