//! Slider widget
//!
//! Dragging the knob (or pressing anywhere on the track) moves the value
//! within a numeric range. The drag keeps following the pointer while the
//! button is held, even outside the track bounds.

use vitrine_core::fsm::{disabled_fsm, pointer_fsm};
use vitrine_core::{Event, EventKind, Interaction, InteractionFsm, Rect, WidgetState};
use vitrine_theme::{SliderTheme, StateStyle};

use crate::widget::{active_theme, PointerTracker, Widget};

/// Slider configuration.
#[derive(Clone, Debug)]
pub struct SliderConfig {
    pub min: f32,
    pub max: f32,
    pub value: f32,
    pub disabled: bool,
    pub theme: Option<SliderTheme>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            value: 0.0,
            disabled: false,
            theme: None,
        }
    }
}

impl SliderConfig {
    pub fn range(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Resolved colors for drawing a slider in its current state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderVisuals {
    pub track: StateStyle,
    pub fill: StateStyle,
    pub knob: StateStyle,
}

/// A draggable value selector.
pub struct Slider {
    min: f32,
    max: f32,
    value: f32,
    fsm: InteractionFsm,
    tracker: PointerTracker,
    dragging: bool,
    theme: Option<SliderTheme>,
    on_change: Option<Box<dyn FnMut(f32) + Send>>,
}

impl Slider {
    pub fn new() -> Self {
        Self::with_config(SliderConfig::default())
    }

    pub fn with_config(config: SliderConfig) -> Self {
        let fsm = if config.disabled {
            disabled_fsm()
        } else {
            pointer_fsm()
        };
        Self {
            min: config.min,
            max: config.max,
            value: config.value.clamp(config.min, config.max),
            fsm,
            tracker: PointerTracker::default(),
            dragging: false,
            theme: config.theme,
            on_change: None,
        }
    }

    /// Set the change callback, fired whenever the value moves.
    pub fn on_change<F: FnMut(f32) + Send + 'static>(mut self, callback: F) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the value, clamped to the range.
    pub fn set_value(&mut self, value: f32) {
        let value = value.clamp(self.min, self.max);
        if (value - self.value).abs() > f32::EPSILON {
            self.value = value;
            if let Some(callback) = &mut self.on_change {
                callback(value);
            }
        }
    }

    /// Position of the value within the range, as a fraction in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        (self.value - self.min) / span
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Center of the knob inside a track rect.
    pub fn knob_center_x(&self, track: Rect) -> f32 {
        track.x + track.width * self.fraction()
    }

    /// Resolve the colors for the current state.
    pub fn visuals(&self) -> SliderVisuals {
        let theme = self.theme.unwrap_or_else(|| active_theme().slider);
        let state = self.state();
        SliderVisuals {
            track: theme.track.get(state),
            fill: theme.fill.get(state),
            knob: theme.knob.get(state),
        }
    }

    fn value_at(&self, bounds: Rect, x: f32) -> f32 {
        if bounds.width <= 0.0 {
            return self.min;
        }
        let fraction = ((x - bounds.x) / bounds.width).clamp(0.0, 1.0);
        self.min + fraction * (self.max - self.min)
    }
}

impl Default for Slider {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Slider {
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
        if disabled {
            self.dragging = false;
        }
    }

    fn handle_event(&mut self, bounds: Rect, event: &Event) {
        if self.disabled() {
            return;
        }

        for interaction in self.tracker.update(bounds, event) {
            self.fsm.send(interaction);
        }

        match event.kind {
            EventKind::PointerDown { position, .. } => {
                if bounds.contains(position) {
                    self.dragging = true;
                    self.set_value(self.value_at(bounds, position.x));
                }
            }
            EventKind::PointerMove { position } => {
                // Drags follow the pointer even outside the bounds
                if self.dragging {
                    self.set_value(self.value_at(bounds, position.x));
                }
            }
            EventKind::PointerUp { .. } => {
                self.dragging = false;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use vitrine_core::Point;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 100.0, 10.0);

    fn press_at(x: f32) -> Event {
        Event::new(
            EventKind::PointerDown {
                position: Point::new(x, 5.0),
                button: Default::default(),
            },
            0,
        )
    }

    fn move_to(x: f32) -> Event {
        Event::new(
            EventKind::PointerMove {
                position: Point::new(x, 5.0),
            },
            0,
        )
    }

    fn release_at(x: f32) -> Event {
        Event::new(
            EventKind::PointerUp {
                position: Point::new(x, 5.0),
                button: Default::default(),
            },
            0,
        )
    }

    #[test]
    fn test_press_jumps_to_position() {
        let mut slider = Slider::with_config(SliderConfig::default().range(0.0, 200.0));
        slider.handle_event(BOUNDS, &press_at(25.0));
        assert!((slider.value() - 50.0).abs() < 1e-4);
        assert!(slider.is_dragging());
    }

    #[test]
    fn test_drag_follows_pointer() {
        let mut slider = Slider::new();
        slider.handle_event(BOUNDS, &press_at(0.0));
        slider.handle_event(BOUNDS, &move_to(75.0));
        assert!((slider.value() - 0.75).abs() < 1e-5);

        slider.handle_event(BOUNDS, &release_at(75.0));
        assert!(!slider.is_dragging());

        // After release, moves no longer change the value
        slider.handle_event(BOUNDS, &move_to(10.0));
        assert!((slider.value() - 0.75).abs() < 1e-5);
    }

    #[test]
    fn test_drag_outside_bounds_clamps() {
        let mut slider = Slider::new();
        slider.handle_event(BOUNDS, &press_at(50.0));
        slider.handle_event(BOUNDS, &move_to(500.0));
        assert!((slider.value() - 1.0).abs() < 1e-5);

        slider.handle_event(BOUNDS, &move_to(-500.0));
        assert!((slider.value() - 0.0).abs() < 1e-5);
    }

    #[test]
    fn test_change_callback_fires_per_move() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();

        let mut slider = Slider::new().on_change(move |value| {
            seen_clone.lock().unwrap().push(value);
        });

        slider.handle_event(BOUNDS, &press_at(50.0));
        slider.handle_event(BOUNDS, &move_to(50.0));
        slider.handle_event(BOUNDS, &move_to(100.0));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!((seen[0] - 0.5).abs() < 1e-5);
        assert!((seen[1] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_disabled_slider_ignores_input() {
        let mut slider =
            Slider::with_config(SliderConfig::default().value(0.5).disabled(true));
        slider.handle_event(BOUNDS, &press_at(90.0));
        assert!((slider.value() - 0.5).abs() < 1e-5);
        assert!(!slider.is_dragging());
    }

    #[test]
    fn test_fraction_and_knob_position() {
        let mut slider = Slider::with_config(SliderConfig::default().range(10.0, 20.0));
        slider.set_value(15.0);
        assert!((slider.fraction() - 0.5).abs() < 1e-5);
        assert!((slider.knob_center_x(BOUNDS) - 50.0).abs() < 1e-4);
    }
}
