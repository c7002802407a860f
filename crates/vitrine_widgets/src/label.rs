//! Label widget
//!
//! Labels only react to hover; there is no active state.

use vitrine_core::{Event, Interaction, InteractionFsm, Rect, WidgetState};
use vitrine_theme::{LabelTheme, StateStyle};

use crate::widget::{active_theme, PointerTracker, Widget};

/// Resolved colors for drawing a label in its current state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelVisuals {
    pub frame: StateStyle,
    pub text: StateStyle,
}

/// A static text widget.
pub struct Label {
    text: String,
    fsm: InteractionFsm,
    tracker: PointerTracker,
    theme: Option<LabelTheme>,
}

fn label_fsm() -> InteractionFsm {
    InteractionFsm::builder(WidgetState::Normal)
        .on(WidgetState::Normal, Interaction::PointerEnter, WidgetState::Hover)
        .on(WidgetState::Hover, Interaction::PointerLeave, WidgetState::Normal)
        .on(WidgetState::Normal, Interaction::Disable, WidgetState::Disabled)
        .on(WidgetState::Hover, Interaction::Disable, WidgetState::Disabled)
        .on(WidgetState::Disabled, Interaction::Enable, WidgetState::Normal)
        .build()
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fsm: label_fsm(),
            tracker: PointerTracker::default(),
            theme: None,
        }
    }

    pub fn themed(mut self, theme: LabelTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Resolve the colors for the current state.
    pub fn visuals(&self) -> LabelVisuals {
        let theme = self.theme.unwrap_or_else(|| active_theme().label);
        let state = self.state();
        LabelVisuals {
            frame: theme.frame.get(state),
            text: theme.text.get(state),
        }
    }
}

impl Widget for Label {
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
        for interaction in self.tracker.update(bounds, event) {
            self.fsm.send(interaction);
        }
    }
}
