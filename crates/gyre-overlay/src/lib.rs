//! Debug guide circles for orbit layouts.
//!
//! An [`OrbitOverlay`] draws one origin-centered circle per orbit on a
//! [`GuideCanvas`], for each enabled [`GuideLayer`] (inner, center or
//! outer radius). It only consumes [`LayoutEvent`](gyre_layout::LayoutEvent)s
//! and never feeds anything back into the layout.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod canvas;
pub mod overlay;
pub mod style;

pub use canvas::GuideCanvas;
pub use overlay::OrbitOverlay;
pub use style::{GuideLayer, GuideStyle, Rgba};
