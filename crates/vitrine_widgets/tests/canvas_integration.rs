//! Widgets living on a canvas: placement, zoom, and event routing together.

use vitrine_canvas::{Canvas, Placement};
use vitrine_core::{Anchor, Event, EventKind, Point, Size, WidgetState};
use vitrine_widgets::{Button, Slider, Widget};

fn move_to(x: f32, y: f32) -> Event {
    Event::new(
        EventKind::PointerMove {
            position: Point::new(x, y),
        },
        0,
    )
}

fn press_at(x: f32, y: f32) -> Event {
    Event::new(
        EventKind::PointerDown {
            position: Point::new(x, y),
            button: Default::default(),
        },
        0,
    )
}

fn release_at(x: f32, y: f32) -> Event {
    Event::new(
        EventKind::PointerUp {
            position: Point::new(x, y),
            button: Default::default(),
        },
        0,
    )
}

#[test]
fn button_stays_clickable_after_zoom() {
    let mut canvas = Canvas::default();
    canvas.layout(Size::new(200.0, 100.0));

    let child = canvas.place(
        Placement::new(100.0, 50.0, 80.0, 30.0).with_anchor(Anchor::Center),
    );
    let mut button = Button::new("OK");

    // Click at the original center
    let bounds = canvas.child_rect(child).unwrap();
    button.handle_event(bounds, &press_at(100.0, 50.0));
    button.handle_event(bounds, &release_at(100.0, 50.0));
    assert!(button.take_clicked());

    // Double the canvas; the button's derived rect moves with it
    canvas.layout(Size::new(400.0, 200.0));
    let bounds = canvas.child_rect(child).unwrap();

    // The old center misses now
    button.handle_event(bounds, &move_to(100.0, 50.0));
    assert_eq!(button.state(), WidgetState::Normal);

    // The scaled center hits
    button.handle_event(bounds, &press_at(200.0, 100.0));
    button.handle_event(bounds, &release_at(200.0, 100.0));
    assert!(button.take_clicked());
}

#[test]
fn slider_value_is_scale_invariant() {
    let mut canvas = Canvas::default();
    canvas.layout(Size::new(100.0, 100.0));

    let child = canvas.place(Placement::new(0.0, 80.0, 100.0, 10.0));
    let mut slider = Slider::new();

    // Drag to 60% of the track at 1:1 scale
    let bounds = canvas.child_rect(child).unwrap();
    slider.handle_event(bounds, &press_at(60.0, 85.0));
    slider.handle_event(bounds, &release_at(60.0, 85.0));
    assert!((slider.value() - 0.6).abs() < 1e-4);

    // Halve the canvas and drag to the same fraction of the smaller track
    canvas.layout(Size::new(50.0, 50.0));
    let bounds = canvas.child_rect(child).unwrap();
    slider.handle_event(bounds, &press_at(30.0, 42.0));
    assert!((slider.value() - 0.6).abs() < 1e-4);
}

#[test]
fn canvas_hit_test_routes_to_the_right_widget() {
    let mut canvas = Canvas::default();
    canvas.layout(Size::new(200.0, 100.0));

    let left = canvas.place(Placement::new(10.0, 10.0, 50.0, 30.0));
    let right = canvas.place(Placement::new(120.0, 10.0, 50.0, 30.0));

    assert_eq!(canvas.child_at(Point::new(20.0, 20.0)), Some(left));
    assert_eq!(canvas.child_at(Point::new(130.0, 20.0)), Some(right));
    assert_eq!(canvas.child_at(Point::new(90.0, 20.0)), None);
}
