//! Vitrine Core
//!
//! This crate provides the foundational primitives for the Vitrine widget
//! toolkit:
//!
//! - **Colors**: RGBA colors with hex parsing, interpolation and contrast
//! - **Geometry**: points, sizes, rects and anchor-point math
//! - **Events**: the input events containers route to widgets
//! - **Interaction FSMs**: statechart-style machines for widget states
//! - **Configuration**: process-wide environment and font defaults
//!
//! # Example
//!
//! ```rust
//! use vitrine_core::fsm::{pointer_fsm, Interaction, WidgetState};
//!
//! let mut fsm = pointer_fsm();
//! assert_eq!(fsm.current_state(), WidgetState::Normal);
//!
//! fsm.send(Interaction::PointerEnter);
//! fsm.send(Interaction::PointerDown);
//! assert_eq!(fsm.current_state(), WidgetState::Active);
//! ```

pub mod color;
pub mod config;
pub mod events;
pub mod fsm;
pub mod geometry;

pub use color::{Color, ColorParseError};
pub use config::{Env, Font, SystemKind};
pub use events::{Event, EventKind, PointerButton};
pub use fsm::{pointer_fsm, Interaction, InteractionFsm, Transition, WidgetState};
pub use geometry::{Anchor, Point, Rect, Size};
