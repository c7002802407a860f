//! Progress bar widget
//!
//! The committed value moves immediately; the displayed value follows it
//! through a smooth tween when animations are enabled.

use vitrine_animation::{Easing, Tween};
use vitrine_core::{Env, Event, Rect, WidgetState};
use vitrine_theme::{ProgressBarTheme, StateStyle};

use crate::widget::{active_theme, Widget};

/// Duration of the value-follow animation.
const FILL_ANIMATION_MS: u32 = 250;

/// Resolved colors for drawing a progress bar in its current state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressBarVisuals {
    pub trough: StateStyle,
    pub bar: StateStyle,
    pub text: StateStyle,
}

/// A determinate progress indicator with a value in `[0, 1]`.
pub struct ProgressBar {
    value: f32,
    displayed: Tween,
    disabled: bool,
    /// Per-widget animation override; `None` follows `Env::default_animation`.
    animate: Option<bool>,
    theme: Option<ProgressBarTheme>,
}

impl ProgressBar {
    pub fn new() -> Self {
        Self {
            value: 0.0,
            displayed: Tween::resting(0.0, FILL_ANIMATION_MS, Easing::Smooth),
            disabled: false,
            animate: None,
            theme: None,
        }
    }

    /// Override the process-wide animation default for this widget.
    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = Some(animate);
        self
    }

    pub fn themed(mut self, theme: ProgressBarTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    fn animations_enabled(&self) -> bool {
        self.animate.unwrap_or_else(|| Env::get().default_animation)
    }

    /// The committed value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The value currently shown, possibly trailing the committed one.
    pub fn displayed_value(&self) -> f32 {
        self.displayed.value().clamp(0.0, 1.0)
    }

    /// Set the value, clamped to `[0, 1]`.
    pub fn set_value(&mut self, value: f32) {
        let value = value.clamp(0.0, 1.0);
        self.value = value;
        if self.animations_enabled() {
            self.displayed.retarget(value);
        } else {
            self.displayed.snap(value);
        }
    }

    /// Width of the filled bar inside a trough rect.
    pub fn bar_width(&self, trough: Rect) -> f32 {
        trough.width * self.displayed_value()
    }

    /// Resolve the colors for the current state.
    pub fn visuals(&self) -> ProgressBarVisuals {
        let theme = self
            .theme
            .unwrap_or_else(|| active_theme().progress_bar);
        let state = self.state();
        ProgressBarVisuals {
            trough: theme.trough.get(state),
            bar: theme.bar.get(state),
            text: theme.text.get(state),
        }
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ProgressBar {
    fn state(&self) -> WidgetState {
        if self.disabled {
            WidgetState::Disabled
        } else {
            WidgetState::Normal
        }
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn handle_event(&mut self, _bounds: Rect, _event: &Event) {
        // Progress bars are display-only
    }

    fn tick(&mut self, dt_ms: f32) {
        self.displayed.tick(dt_ms);
    }
}
