//! Vitrine Containers
//!
//! Windows and canvases with proportional auto-scaling.
//!
//! # How scaling works
//!
//! Every container captures its size at the first layout pass as an
//! immutable baseline. On each resize it derives per-axis ratios
//! (`current / original`) and recomputes every registered child's geometry
//! from the child's own recorded baseline — a fresh rect is derived each
//! time, nothing accumulates, so identical resizes always produce identical
//! geometry.
//!
//! ```rust
//! use vitrine_canvas::{Canvas, Placement, ZoomOptions};
//! use vitrine_core::{Rect, Size};
//!
//! let mut canvas = Canvas::new(ZoomOptions::default());
//! canvas.layout(Size::new(100.0, 100.0));
//!
//! let child = canvas.place(Placement::new(0.0, 0.0, 100.0, 100.0));
//! canvas.layout(Size::new(50.0, 50.0));
//!
//! assert_eq!(canvas.child_rect(child), Some(Rect::new(0.0, 0.0, 50.0, 50.0)));
//! ```
//!
//! All operations are synchronous on the caller's thread: a resize event is
//! processed to completion before the next event is handled.

pub mod canvas;
pub mod window;
pub mod zoom;

pub use canvas::{Canvas, CanvasItem, ChildId, ItemId, ZoomOptions};
pub use window::{Window, WindowConfig};
pub use zoom::{Placement, ZoomEngine, MIN_RATIO};
