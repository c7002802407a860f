//! Base widget trait and shared pointer tracking

use smallvec::SmallVec;

use vitrine_core::{Event, EventKind, Interaction, Rect, WidgetState};
use vitrine_theme::{themes, Theme, ThemeState};

/// Base trait for all widgets.
pub trait Widget {
    /// The widget's current visual state.
    fn state(&self) -> WidgetState;

    /// Enable or disable the widget.
    fn set_disabled(&mut self, disabled: bool);

    fn disabled(&self) -> bool {
        self.state() == WidgetState::Disabled
    }

    /// Handle an event against the widget's current on-screen bounds.
    fn handle_event(&mut self, bounds: Rect, event: &Event);

    /// Advance animations (called each frame). Widgets without motion keep
    /// the default no-op.
    fn tick(&mut self, _dt_ms: f32) {}
}

/// The active theme, falling back to the built-in light theme while the
/// global state is uninitialized.
pub(crate) fn active_theme() -> Theme {
    ThemeState::try_get()
        .map(|state| state.theme())
        .unwrap_or_else(themes::light)
}

/// Derives enter/leave/press/release interactions from raw pointer events
/// and the widget's bounds.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct PointerTracker {
    inside: bool,
}

impl PointerTracker {
    /// Translate an event into the interactions it implies for a widget at
    /// `bounds`.
    pub(crate) fn update(
        &mut self,
        bounds: Rect,
        event: &Event,
    ) -> SmallVec<[Interaction; 2]> {
        let mut interactions = SmallVec::new();
        match event.kind {
            EventKind::PointerMove { position } => {
                let contains = bounds.contains(position);
                if contains && !self.inside {
                    self.inside = true;
                    interactions.push(Interaction::PointerEnter);
                } else if !contains && self.inside {
                    self.inside = false;
                    interactions.push(Interaction::PointerLeave);
                }
            }
            EventKind::PointerDown { position, .. } => {
                if bounds.contains(position) {
                    if !self.inside {
                        // A press can arrive without a preceding move
                        self.inside = true;
                        interactions.push(Interaction::PointerEnter);
                    }
                    interactions.push(Interaction::PointerDown);
                }
            }
            EventKind::PointerUp { position, .. } => {
                if bounds.contains(position) {
                    interactions.push(Interaction::PointerUp);
                } else if self.inside {
                    self.inside = false;
                    interactions.push(Interaction::PointerLeave);
                }
            }
            _ => {}
        }
        interactions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::Point;

    fn move_to(x: f32, y: f32) -> Event {
        Event::new(
            EventKind::PointerMove {
                position: Point::new(x, y),
            },
            0,
        )
    }

    #[test]
    fn test_tracker_enter_and_leave() {
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut tracker = PointerTracker::default();

        let enter = tracker.update(bounds, &move_to(5.0, 5.0));
        assert_eq!(enter.as_slice(), &[Interaction::PointerEnter]);
        assert!(tracker.inside);

        // Moving within the bounds emits nothing further
        assert!(tracker.update(bounds, &move_to(6.0, 6.0)).is_empty());

        let leave = tracker.update(bounds, &move_to(20.0, 20.0));
        assert_eq!(leave.as_slice(), &[Interaction::PointerLeave]);
        assert!(!tracker.inside);
    }

    #[test]
    fn test_press_without_prior_move_enters_first() {
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut tracker = PointerTracker::default();

        let press = tracker.update(
            bounds,
            &Event::new(
                EventKind::PointerDown {
                    position: Point::new(5.0, 5.0),
                    button: Default::default(),
                },
                0,
            ),
        );
        assert_eq!(
            press.as_slice(),
            &[Interaction::PointerEnter, Interaction::PointerDown]
        );
    }
}
