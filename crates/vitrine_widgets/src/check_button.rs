//! Check button widget
//!
//! A button that toggles a checked flag on every click. The mark element is
//! only drawn while checked.

use vitrine_core::fsm::{disabled_fsm, pointer_fsm};
use vitrine_core::{Event, Interaction, InteractionFsm, Rect, WidgetState};
use vitrine_theme::{CheckButtonTheme, StateStyle};

use crate::widget::{active_theme, PointerTracker, Widget};

/// Check button configuration.
#[derive(Clone, Debug, Default)]
pub struct CheckButtonConfig {
    pub label: String,
    pub checked: bool,
    pub disabled: bool,
    pub theme: Option<CheckButtonTheme>,
}

impl CheckButtonConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Resolved colors for drawing a check button in its current state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheckButtonVisuals {
    pub frame: StateStyle,
    /// Present only while checked.
    pub mark: Option<StateStyle>,
    pub text: StateStyle,
}

/// A toggleable check box with a label.
pub struct CheckButton {
    config: CheckButtonConfig,
    checked: bool,
    fsm: InteractionFsm,
    tracker: PointerTracker,
    on_toggle: Option<Box<dyn FnMut(bool) + Send>>,
}

impl CheckButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_config(CheckButtonConfig::new(label))
    }

    pub fn with_config(config: CheckButtonConfig) -> Self {
        let fsm = if config.disabled {
            disabled_fsm()
        } else {
            pointer_fsm()
        };
        let checked = config.checked;
        Self {
            config,
            checked,
            fsm,
            tracker: PointerTracker::default(),
            on_toggle: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.config.label
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the checked flag programmatically (fires the toggle callback).
    pub fn set_checked(&mut self, checked: bool) {
        if self.checked != checked {
            self.checked = checked;
            if let Some(callback) = &mut self.on_toggle {
                callback(checked);
            }
        }
    }

    /// Set the toggle callback.
    pub fn on_toggle<F: FnMut(bool) + Send + 'static>(mut self, callback: F) -> Self {
        self.on_toggle = Some(Box::new(callback));
        self
    }

    /// Resolve the colors for the current state.
    pub fn visuals(&self) -> CheckButtonVisuals {
        let theme = self
            .config
            .theme
            .unwrap_or_else(|| active_theme().check_button);
        let state = self.state();
        CheckButtonVisuals {
            frame: theme.frame.get(state),
            mark: self.checked.then(|| theme.mark.get(state)),
            text: theme.text.get(state),
        }
    }
}

impl Widget for CheckButton {
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

        if old_state == WidgetState::Active && new_state == WidgetState::Hover {
            let checked = !self.checked;
            tracing::trace!(label = %self.config.label, checked, "check button toggled");
            self.set_checked(checked);
        }
    }
}
