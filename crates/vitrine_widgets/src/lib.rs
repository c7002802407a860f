//! Vitrine Widget Library
//!
//! Themed virtual widgets with FSM-driven interactions.
//!
//! Widgets are geometry-agnostic: a container owns their placement and
//! derived rect, and the embedder routes events against that rect:
//!
//! ```rust
//! use vitrine_core::{Event, EventKind, Point, Rect, WidgetState};
//! use vitrine_widgets::{Button, Widget};
//!
//! let mut button = Button::new("OK");
//! let bounds = Rect::new(0.0, 0.0, 80.0, 30.0);
//!
//! let hover = Event::new(
//!     EventKind::PointerMove { position: Point::new(10.0, 10.0) },
//!     0,
//! );
//! button.handle_event(bounds, &hover);
//! assert_eq!(button.state(), WidgetState::Hover);
//! ```
//!
//! Colors come from the active theme, resolved per widget state at draw
//! time through each widget's `visuals()`.

pub mod button;
pub mod check_button;
pub mod label;
pub mod progress_bar;
pub mod slider;
pub mod switch;
pub mod widget;

pub use button::{Button, ButtonConfig, ButtonVisuals};
pub use check_button::{CheckButton, CheckButtonConfig, CheckButtonVisuals};
pub use label::{Label, LabelVisuals};
pub use progress_bar::{ProgressBar, ProgressBarVisuals};
pub use slider::{Slider, SliderConfig, SliderVisuals};
pub use switch::{Switch, SwitchVisuals};
pub use widget::Widget;
