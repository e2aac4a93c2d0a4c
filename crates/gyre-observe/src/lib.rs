//! Change observation for Gyre.
//!
//! - [`ObserverRegistry`]: a map from stable [`ObserverId`] handles to
//!   callbacks. Unregistering removes the entry; handles are never
//!   reused, so a stale handle can never remove someone else's callback.
//! - [`Observable`]: a shared value cell that notifies its observers on
//!   change and can follow another observable.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod observable;
pub mod registry;

pub use observable::Observable;
pub use registry::{Callback, ObserverId, ObserverRegistry};
