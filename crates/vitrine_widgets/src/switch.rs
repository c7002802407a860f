//! Switch widget
//!
//! A boolean toggle whose knob slides between the two ends of the track.
//! The knob position is a tweened fraction: 0.0 at the off end, 1.0 at the
//! on end.

use vitrine_animation::{Easing, Tween};
use vitrine_core::fsm::{disabled_fsm, pointer_fsm};
use vitrine_core::{Env, Event, Interaction, InteractionFsm, Rect, WidgetState};
use vitrine_theme::{StateStyle, SwitchTheme};

use crate::widget::{active_theme, PointerTracker, Widget};

/// Duration of the knob slide animation.
const KNOB_ANIMATION_MS: u32 = 200;

/// Resolved colors for drawing a switch in its current state and position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwitchVisuals {
    pub track: StateStyle,
    pub knob: StateStyle,
}

/// A boolean toggle.
pub struct Switch {
    on: bool,
    fsm: InteractionFsm,
    tracker: PointerTracker,
    knob: Tween,
    /// Per-widget animation override; `None` follows `Env::default_animation`.
    animate: Option<bool>,
    theme: Option<SwitchTheme>,
    on_toggle: Option<Box<dyn FnMut(bool) + Send>>,
}

impl Switch {
    pub fn new(on: bool) -> Self {
        Self {
            on,
            fsm: pointer_fsm(),
            tracker: PointerTracker::default(),
            knob: Tween::resting(if on { 1.0 } else { 0.0 }, KNOB_ANIMATION_MS, Easing::Smooth),
            animate: None,
            theme: None,
            on_toggle: None,
        }
    }

    /// Create a disabled switch.
    pub fn disabled(on: bool) -> Self {
        Self {
            fsm: disabled_fsm(),
            ..Self::new(on)
        }
    }

    /// Override the process-wide animation default for this widget.
    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = Some(animate);
        self
    }

    pub fn themed(mut self, theme: SwitchTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Set the toggle callback.
    pub fn on_toggle<F: FnMut(bool) + Send + 'static>(mut self, callback: F) -> Self {
        self.on_toggle = Some(Box::new(callback));
        self
    }

    fn animations_enabled(&self) -> bool {
        self.animate.unwrap_or_else(|| Env::get().default_animation)
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Set the switch programmatically (fires the toggle callback).
    pub fn set_on(&mut self, on: bool) {
        if self.on == on {
            return;
        }
        self.on = on;
        let target = if on { 1.0 } else { 0.0 };
        if self.animations_enabled() {
            self.knob.retarget(target);
        } else {
            self.knob.snap(target);
        }
        if let Some(callback) = &mut self.on_toggle {
            callback(on);
        }
    }

    /// Knob position as a fraction: 0.0 at the off end, 1.0 at the on end.
    pub fn knob_position(&self) -> f32 {
        self.knob.value().clamp(0.0, 1.0)
    }

    /// Center of the knob inside a track rect.
    pub fn knob_center_x(&self, track: Rect) -> f32 {
        let inset = track.height / 2.0;
        let usable = (track.width - track.height).max(0.0);
        track.x + inset + usable * self.knob_position()
    }

    /// Resolve the colors for the current state and position.
    pub fn visuals(&self) -> SwitchVisuals {
        let theme = self.theme.unwrap_or_else(|| active_theme().switch);
        let state = self.state();
        let (track, knob) = if self.on {
            (theme.track_on, theme.knob_on)
        } else {
            (theme.track_off, theme.knob_off)
        };
        SwitchVisuals {
            track: track.get(state),
            knob: knob.get(state),
        }
    }
}

impl Widget for Switch {
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
            let on = !self.on;
            tracing::trace!(on, "switch toggled");
            self.set_on(on);
        }
    }

    fn tick(&mut self, dt_ms: f32) {
        self.knob.tick(dt_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::{EventKind, Point};

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 40.0, 20.0);

    fn click(widget: &mut Switch) {
        widget.handle_event(
            BOUNDS,
            &Event::new(
                EventKind::PointerDown {
                    position: Point::new(20.0, 10.0),
                    button: Default::default(),
                },
                0,
            ),
        );
        widget.handle_event(
            BOUNDS,
            &Event::new(
                EventKind::PointerUp {
                    position: Point::new(20.0, 10.0),
                    button: Default::default(),
                },
                0,
            ),
        );
    }

    #[test]
    fn test_click_toggles() {
        let mut switch = Switch::new(false).with_animation(false);
        click(&mut switch);
        assert!(switch.is_on());
        click(&mut switch);
        assert!(!switch.is_on());
    }

    #[test]
    fn test_knob_snaps_without_animation() {
        let mut switch = Switch::new(false).with_animation(false);
        switch.set_on(true);
        assert!((switch.knob_position() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_knob_slides_with_animation() {
        let mut switch = Switch::new(false).with_animation(true);
        switch.set_on(true);

        assert!(switch.knob_position() < 0.01);
        switch.tick(KNOB_ANIMATION_MS as f32 / 2.0);
        let midway = switch.knob_position();
        assert!(midway > 0.0 && midway < 1.0);

        switch.tick(KNOB_ANIMATION_MS as f32);
        assert!((switch.knob_position() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_toggle_mid_slide_reverses_from_current_position() {
        let mut switch = Switch::new(false).with_animation(true);
        switch.set_on(true);
        switch.tick(KNOB_ANIMATION_MS as f32 / 2.0);
        let midway = switch.knob_position();

        switch.set_on(false);
        assert!((switch.knob_position() - midway).abs() < 1e-5);

        switch.tick(KNOB_ANIMATION_MS as f32 * 2.0);
        assert!(switch.knob_position() < 1e-5);
    }

    #[test]
    fn test_visuals_switch_tables_with_position() {
        let mut switch = Switch::new(false).with_animation(false);
        let off = switch.visuals();
        switch.set_on(true);
        let on = switch.visuals();
        assert_ne!(off.track.fill, on.track.fill);
        assert_ne!(off.knob.fill, on.knob.fill);
    }

    #[test]
    fn test_disabled_switch_ignores_clicks() {
        let mut switch = Switch::disabled(false);
        click(&mut switch);
        assert!(!switch.is_on());
    }

    #[test]
    fn test_knob_center_stays_inside_track() {
        let mut switch = Switch::new(false).with_animation(false);
        assert!((switch.knob_center_x(BOUNDS) - 10.0).abs() < 1e-4);
        switch.set_on(true);
        assert!((switch.knob_center_x(BOUNDS) - 30.0).abs() < 1e-4);
    }
}
