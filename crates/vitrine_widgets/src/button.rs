//! Button widget with FSM-driven interactions
//!
//! The button resolves its colors from the active theme by FSM state and
//! reports a click on the press-release edge.

use vitrine_core::fsm::{disabled_fsm, pointer_fsm};
use vitrine_core::{Event, Interaction, InteractionFsm, Rect, WidgetState};
use vitrine_theme::{ButtonTheme, StateStyle};

use crate::widget::{active_theme, PointerTracker, Widget};

/// Button configuration.
#[derive(Clone, Debug, Default)]
pub struct ButtonConfig {
    /// Button label text.
    pub label: String,
    /// Whether the button starts disabled.
    pub disabled: bool,
    /// Style tables overriding the active theme's button tables.
    pub theme: Option<ButtonTheme>,
}

impl ButtonConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn themed(mut self, theme: ButtonTheme) -> Self {
        self.theme = Some(theme);
        self
    }
}

/// Resolved colors for drawing a button in its current state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonVisuals {
    pub frame: StateStyle,
    pub text: StateStyle,
}

/// A clickable virtual widget.
pub struct Button {
    config: ButtonConfig,
    fsm: InteractionFsm,
    tracker: PointerTracker,
    clicked: bool,
    on_click: Option<Box<dyn FnMut() + Send>>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_config(ButtonConfig::new(label))
    }

    pub fn with_config(config: ButtonConfig) -> Self {
        let fsm = if config.disabled {
            disabled_fsm()
        } else {
            pointer_fsm()
        };
        Self {
            config,
            fsm,
            tracker: PointerTracker::default(),
            clicked: false,
            on_click: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.config.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.config.label = label.into();
    }

    /// Set the click callback.
    pub fn on_click<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    /// Check if the button was clicked (and clear the flag).
    pub fn take_clicked(&mut self) -> bool {
        std::mem::take(&mut self.clicked)
    }

    /// Resolve the colors for the current state.
    pub fn visuals(&self) -> ButtonVisuals {
        let theme = self
            .config
            .theme
            .unwrap_or_else(|| active_theme().button);
        let state = self.state();
        ButtonVisuals {
            frame: theme.frame.get(state),
            text: theme.text.get(state),
        }
    }
}

impl Widget for Button {
    fn state(&self) -> WidgetState {
        self.fsm.current_state()
    }

    fn set_disabled(&mut self, disabled: bool) {
        let event = if disabled {
            Interaction::Disable
        } else {
            Interaction::Enable
        };
        self.fsm.send(event);
    }

    fn handle_event(&mut self, bounds: Rect, event: &Event) {
        if self.disabled() {
            return;
        }

        let old_state = self.fsm.current_state();
        for interaction in self.tracker.update(bounds, event) {
            self.fsm.send(interaction);
        }
        let new_state = self.fsm.current_state();

        // A click is the release edge: pressed, then released inside
        if old_state == WidgetState::Active && new_state == WidgetState::Hover {
            tracing::trace!(label = %self.config.label, "button clicked");
            self.clicked = true;
            if let Some(callback) = &mut self.on_click {
                callback();
            }
        }
    }
}
