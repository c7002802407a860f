use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use vitrine_canvas::{Canvas, Placement, Window, WindowConfig, ZoomOptions};
use vitrine_core::{Anchor, Event, EventKind, Point, Rect, Size};

fn assert_rect_close(actual: Rect, expected: Rect) {
    for (a, e) in [
        (actual.x, expected.x),
        (actual.y, expected.y),
        (actual.width, expected.width),
        (actual.height, expected.height),
    ] {
        assert!((a - e).abs() < 1e-4, "expected {expected:?}, got {actual:?}");
    }
}

#[test]
fn window_ratios_follow_resize() {
    let mut window = Window::new(WindowConfig::default().size(1280.0, 720.0));
    assert_eq!(window.ratios(), (1.0, 1.0));

    window.resize(Size::new(640.0, 360.0));
    assert_eq!(window.ratios(), (0.5, 0.5));
}

#[test]
fn resize_events_route_into_containers() {
    let resize = Event::new(
        EventKind::Resize {
            size: Size::new(640.0, 360.0),
        },
        0,
    );

    let mut window = Window::new(WindowConfig::default().size(1280.0, 720.0));
    window.on_event(&resize);
    assert_eq!(window.ratios(), (0.5, 0.5));

    let mut canvas = Canvas::default();
    canvas.layout(Size::new(1280.0, 720.0));
    canvas.on_event(&resize);
    assert_eq!(canvas.ratios(), (0.5, 0.5));
}

#[test]
fn window_alpha_is_clamped() {
    let mut window = Window::new(WindowConfig::default());
    assert_eq!(window.alpha(), 1.0);

    window.set_alpha(0.8);
    assert_eq!(window.alpha(), 0.8);

    window.set_alpha(1.5);
    assert_eq!(window.alpha(), 1.0);
    window.set_alpha(-0.5);
    assert_eq!(window.alpha(), 0.0);
}

#[test]
fn window_topmost_and_fullscreen_toggle() {
    let mut window = Window::new(WindowConfig::default());
    assert!(!window.topmost());
    window.set_topmost(true);
    assert!(window.topmost());

    assert!(!window.fullscreen());
    window.set_fullscreen(true);
    assert!(window.fullscreen());
    window.set_fullscreen(false);
    assert!(!window.fullscreen());
}

#[test]
fn window_centering() {
    let mut window = Window::new(WindowConfig::default().size(400.0, 200.0));
    window.center_within(Size::new(1600.0, 900.0));
    assert_eq!(window.position(), Point::new(600.0, 350.0));

    let mut popup = Window::new(WindowConfig::default().size(200.0, 100.0));
    popup.center_on(&window);
    assert_eq!(popup.position(), Point::new(700.0, 400.0));
}

#[test]
fn window_at_exit_runs_exactly_once() {
    let count = Arc::new(AtomicUsize::new(0));
    let count_clone = count.clone();

    let mut window = Window::new(WindowConfig::default());
    window.at_exit(move || {
        count_clone.fetch_add(1, Ordering::SeqCst);
    });

    window.close();
    window.close();
    drop(window);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn canvas_ratios_follow_layout() {
    let mut canvas = Canvas::default();
    canvas.layout(Size::new(100.0, 100.0));
    assert_eq!(canvas.ratios(), (1.0, 1.0));

    canvas.layout(Size::new(50.0, 50.0));
    assert_eq!(canvas.ratios(), (0.5, 0.5));
}

#[test]
fn child_geometry_halves_with_the_canvas() {
    let mut canvas = Canvas::default();
    canvas.layout(Size::new(100.0, 100.0));

    let child = canvas.place(Placement::new(0.0, 0.0, 100.0, 100.0));
    canvas.layout(Size::new(50.0, 50.0));

    assert_rect_close(
        canvas.child_rect(child).unwrap(),
        Rect::new(0.0, 0.0, 50.0, 50.0),
    );
}

#[test]
fn centered_child_stays_centered() {
    let mut canvas = Canvas::default();
    canvas.layout(Size::new(100.0, 100.0));

    let child = canvas.place(
        Placement::new(50.0, 50.0, 20.0, 20.0).with_anchor(Anchor::Center),
    );

    canvas.layout(Size::new(300.0, 80.0));

    let rect = canvas.child_rect(child).unwrap();
    let canvas_center = Point::new(150.0, 40.0);
    assert!((rect.center().x - canvas_center.x).abs() < 1e-4);
    assert!((rect.center().y - canvas_center.y).abs() < 1e-4);
}

#[test]
fn identical_resizes_are_idempotent() {
    let mut canvas = Canvas::default();
    canvas.layout(Size::new(100.0, 100.0));

    let child = canvas.place(
        Placement::new(30.0, 40.0, 25.0, 15.0).with_anchor(Anchor::Se),
    );

    canvas.layout(Size::new(73.0, 41.0));
    let first = canvas.child_rect(child).unwrap();

    canvas.layout(Size::new(73.0, 41.0));
    let second = canvas.child_rect(child).unwrap();

    assert_eq!(first, second);
}

#[test]
fn all_anchors_scale_consistently() {
    for anchor in Anchor::ALL {
        let mut canvas = Canvas::default();
        canvas.layout(Size::new(100.0, 100.0));

        let child = canvas.place(
            Placement::new(50.0, 50.0, 40.0, 40.0).with_anchor(anchor),
        );
        let baseline_rect = canvas.child_rect(child).unwrap();

        canvas.layout(Size::new(200.0, 200.0));
        let scaled = canvas.child_rect(child).unwrap();

        // Uniform 2x zoom doubles every derived coordinate
        assert_rect_close(
            scaled,
            Rect::new(
                baseline_rect.x * 2.0,
                baseline_rect.y * 2.0,
                baseline_rect.width * 2.0,
                baseline_rect.height * 2.0,
            ),
        );
    }
}

#[test]
fn child_without_baseline_is_skipped() {
    let mut canvas = Canvas::default();
    canvas.layout(Size::new(100.0, 100.0));

    let placed = canvas.place(Placement::new(10.0, 10.0, 20.0, 20.0));
    let unplaced = canvas.insert(Rect::new(10.0, 10.0, 20.0, 20.0));

    canvas.layout(Size::new(200.0, 200.0));

    assert_rect_close(
        canvas.child_rect(placed).unwrap(),
        Rect::new(20.0, 20.0, 40.0, 40.0),
    );
    // No baseline: the rect is left exactly as inserted
    assert_eq!(
        canvas.child_rect(unplaced),
        Some(Rect::new(10.0, 10.0, 20.0, 20.0))
    );
}

#[test]
fn manual_zoom_waits_for_the_explicit_call() {
    let mut canvas = Canvas::new(ZoomOptions {
        auto_zoom: false,
        zoom_items: false,
    });
    canvas.layout(Size::new(100.0, 100.0));

    let child = canvas.place(Placement::new(0.0, 0.0, 50.0, 50.0));
    canvas.layout(Size::new(200.0, 200.0));

    // Resize alone does not move the child
    assert_rect_close(
        canvas.child_rect(child).unwrap(),
        Rect::new(0.0, 0.0, 50.0, 50.0),
    );

    canvas.zoom();
    assert_rect_close(
        canvas.child_rect(child).unwrap(),
        Rect::new(0.0, 0.0, 100.0, 100.0),
    );
}

#[test]
fn items_rescale_only_when_enabled() {
    let mut with_items = Canvas::new(ZoomOptions {
        auto_zoom: true,
        zoom_items: true,
    });
    with_items.layout(Size::new(100.0, 100.0));
    let shape = with_items.draw_shape(vec![Point::new(0.0, 0.0), Point::new(10.0, 20.0)]);
    let text = with_items.draw_text(Point::new(50.0, 50.0), 20.0, "value");

    with_items.layout(Size::new(200.0, 50.0));

    let points = with_items.shape_points(shape).unwrap();
    assert_eq!(points[1], Point::new(20.0, 10.0));

    let (position, font_size, content) = with_items.text_layout(text).unwrap();
    assert_eq!(position, Point::new(100.0, 25.0));
    // Font scales by the geometric mean of (2.0, 0.5)
    assert!((font_size - 20.0).abs() < 1e-4);
    assert_eq!(content, "value");

    let mut without_items = Canvas::default();
    without_items.layout(Size::new(100.0, 100.0));
    let fixed = without_items.draw_shape(vec![Point::new(10.0, 10.0)]);
    without_items.layout(Size::new(200.0, 200.0));
    assert_eq!(
        without_items.shape_points(fixed).unwrap()[0],
        Point::new(10.0, 10.0)
    );
}

#[test]
fn nested_canvas_rescales_with_its_parent() {
    let mut parent = Canvas::default();
    parent.layout(Size::new(100.0, 100.0));

    let mut inner = Canvas::default();
    inner.layout(Size::new(50.0, 50.0));
    let inner_child = inner.place(Placement::new(0.0, 0.0, 50.0, 50.0));

    let index = parent.nest(Placement::new(0.0, 0.0, 50.0, 50.0), inner);

    parent.layout(Size::new(200.0, 200.0));

    let inner = parent.nested(index).unwrap();
    assert_eq!(inner.size(), Size::new(100.0, 100.0));
    assert_rect_close(
        inner.child_rect(inner_child).unwrap(),
        Rect::new(0.0, 0.0, 100.0, 100.0),
    );
}

#[test]
fn window_resize_drives_placed_canvases() {
    let mut window = Window::new(WindowConfig::default().size(1000.0, 500.0));

    let mut canvas = Canvas::default();
    canvas.layout(Size::new(400.0, 250.0));
    let child = canvas.place(Placement::new(0.0, 0.0, 400.0, 250.0));

    let index = window.place_canvas(Placement::new(0.0, 0.0, 400.0, 250.0), canvas);

    window.resize(Size::new(500.0, 250.0));

    assert_eq!(
        window.canvas_rect(index).unwrap(),
        Rect::new(0.0, 0.0, 200.0, 125.0)
    );
    let canvas = window.canvas(index).unwrap();
    assert_rect_close(
        canvas.child_rect(child).unwrap(),
        Rect::new(0.0, 0.0, 200.0, 125.0),
    );
}

#[test]
fn applying_a_theme_reaches_nested_canvases() {
    let mut window = Window::new(WindowConfig::default());
    let mut canvas = Canvas::default();
    canvas.layout(Size::new(100.0, 100.0));

    let mut inner = Canvas::default();
    inner.layout(Size::new(50.0, 50.0));
    let nested_index = canvas.nest(Placement::new(0.0, 0.0, 50.0, 50.0), inner);
    let canvas_index = window.place_canvas(Placement::new(0.0, 0.0, 100.0, 100.0), canvas);

    let dark = vitrine_theme::themes::dark();
    window.apply_theme(&dark, true);

    assert_eq!(window.background(), dark.window.background);
    let canvas = window.canvas(canvas_index).unwrap();
    assert_eq!(canvas.background(), dark.canvas.background);
    assert_eq!(
        canvas.nested(nested_index).unwrap().background(),
        dark.canvas.background
    );
}

#[test]
fn hit_testing_uses_derived_geometry() {
    let mut canvas = Canvas::default();
    canvas.layout(Size::new(100.0, 100.0));

    let child = canvas.place(Placement::new(60.0, 60.0, 30.0, 30.0));
    assert_eq!(canvas.child_at(Point::new(75.0, 75.0)), Some(child));
    assert_eq!(canvas.child_at(Point::new(10.0, 10.0)), None);

    canvas.layout(Size::new(200.0, 200.0));
    // The old position no longer hits; the scaled one does
    assert_eq!(canvas.child_at(Point::new(75.0, 75.0)), None);
    assert_eq!(canvas.child_at(Point::new(150.0, 150.0)), Some(child));
}
