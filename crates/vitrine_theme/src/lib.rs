//! Vitrine Theme System
//!
//! Typed per-widget style tables with light/dark bundles and system
//! color-scheme detection.
//!
//! # Overview
//!
//! Every widget kind has a theme struct whose fields are the elements the
//! widget draws (frame, text, knob, ...). Each element carries a
//! [`StateStyles`] table keyed by [`WidgetState`], so a widget resolves its
//! colors with one lookup per element:
//!
//! ```rust
//! use vitrine_core::WidgetState;
//! use vitrine_theme::themes;
//!
//! let theme = themes::light();
//! let hover = theme.button.frame.get(WidgetState::Hover);
//! assert_ne!(hover.fill, theme.button.frame.get(WidgetState::Normal).fill);
//! ```
//!
//! # Global state
//!
//! [`ThemeState`] holds the active bundle and scheme for the whole process;
//! widgets read it at draw time. Scheme switches are instant swaps that set
//! a repaint flag and (when `Env::auto_update` is on) fire the registered
//! redraw callback.
//!
//! # Override files
//!
//! Partial themes can be loaded from TOML and patched over a base theme:
//!
//! ```toml
//! [button.frame.hover]
//! fill = "#E5F1FB"
//! outline = "#288CDB"
//! ```
//!
//! [`WidgetState`]: vitrine_core::WidgetState

pub mod file;
pub mod platform;
pub mod state;
pub mod style;
pub mod themes;

pub use file::{ThemeError, ThemeOverrides};
pub use platform::detect_system_color_scheme;
pub use state::{set_redraw_callback, ThemeState};
pub use style::{
    ButtonTheme, CheckButtonTheme, ColorScheme, ContainerTheme, LabelTheme, ProgressBarTheme,
    SliderTheme, StateStyle, StateStyles, SwitchTheme, Theme, ThemeBundle,
};
