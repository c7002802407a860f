//! Window container
//!
//! A window models the host toplevel's state (title, size, alpha, stacking,
//! fullscreen) and owns placed canvases. The host windowing layer feeds
//! resize events in; the window derives each canvas's new rect from its own
//! scale ratios and lets the canvas rescale its children in turn.

use vitrine_core::{Env, Event, EventKind, Point, Rect, Size};
use vitrine_theme::{Theme, ThemeState};

use crate::canvas::Canvas;
use crate::zoom::{Placement, ZoomEngine};

/// Initial window settings.
#[derive(Clone, Debug)]
pub struct WindowConfig {
    pub title: String,
    pub size: Size,
    pub alpha: f32,
    pub topmost: bool,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "vitrine".to_owned(),
            size: Size::new(1280.0, 720.0),
            alpha: 1.0,
            topmost: false,
            fullscreen: false,
        }
    }
}

impl WindowConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn topmost(mut self, topmost: bool) -> Self {
        self.topmost = topmost;
        self
    }

    pub fn fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }
}

/// A toplevel container.
pub struct Window {
    title: String,
    alpha: f32,
    topmost: bool,
    fullscreen: bool,
    position: Point,
    engine: ZoomEngine,
    canvases: Vec<(Placement, Canvas)>,
    background: vitrine_core::Color,
    at_exit: Option<Box<dyn FnOnce() + Send>>,
    closed: bool,
}

impl Window {
    /// Create a window. Its size baseline is captured here: creation is the
    /// first layout pass.
    pub fn new(config: WindowConfig) -> Self {
        let mut engine = ZoomEngine::new();
        engine.initialize(config.size);
        let background = ThemeState::try_get()
            .map(|state| state.theme().window.background)
            .unwrap_or(vitrine_core::Color::from_hex(0xF1F1F1));
        Self {
            title: config.title,
            alpha: config.alpha.clamp(0.0, 1.0),
            topmost: config.topmost,
            fullscreen: config.fullscreen,
            position: Point::new(0.0, 0.0),
            engine,
            canvases: Vec::new(),
            background,
            at_exit: None,
            closed: false,
        }
    }

    // ========== Window state ==========

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    pub fn topmost(&self) -> bool {
        self.topmost
    }

    pub fn set_topmost(&mut self, topmost: bool) {
        self.topmost = topmost;
    }

    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn size(&self) -> Size {
        self.engine.current()
    }

    /// Per-axis ratios between the current and original window size.
    pub fn ratios(&self) -> (f32, f32) {
        self.engine.ratios()
    }

    pub fn background(&self) -> vitrine_core::Color {
        self.background
    }

    /// Center the window within a screen of the given size.
    pub fn center_within(&mut self, screen: Size) {
        let size = self.size();
        self.position = Point::new(
            (screen.width - size.width) / 2.0,
            (screen.height - size.height) / 2.0,
        );
    }

    /// Center the window over another window.
    pub fn center_on(&mut self, refer: &Window) {
        let size = self.size();
        let refer_size = refer.size();
        self.position = Point::new(
            refer.position.x + (refer_size.width - size.width) / 2.0,
            refer.position.y + (refer_size.height - size.height) / 2.0,
        );
    }

    /// The window's on-screen rect.
    pub fn rect(&self) -> Rect {
        let size = self.size();
        Rect::new(self.position.x, self.position.y, size.width, size.height)
    }

    // ========== Canvases ==========

    /// Place a canvas in the window. It is laid out immediately from its
    /// placement at the current window ratios.
    pub fn place_canvas(&mut self, placement: Placement, mut canvas: Canvas) -> usize {
        let rect = placement.scaled(self.engine.ratios());
        canvas.layout(rect.size());
        self.canvases.push((placement, canvas));
        self.canvases.len() - 1
    }

    pub fn canvas(&self, index: usize) -> Option<&Canvas> {
        self.canvases.get(index).map(|(_, canvas)| canvas)
    }

    pub fn canvas_mut(&mut self, index: usize) -> Option<&mut Canvas> {
        self.canvases.get_mut(index).map(|(_, canvas)| canvas)
    }

    /// The derived on-screen rect of a placed canvas.
    pub fn canvas_rect(&self, index: usize) -> Option<Rect> {
        let ratios = self.engine.ratios();
        self.canvases
            .get(index)
            .map(|(placement, _)| placement.scaled(ratios))
    }

    pub fn canvas_count(&self) -> usize {
        self.canvases.len()
    }

    // ========== Layout & events ==========

    /// Resize the window. Each placed canvas's rect is derived from the new
    /// ratios and pushed down as the canvas's own resize.
    pub fn resize(&mut self, size: Size) {
        self.engine.resize(size);
        let ratios = self.engine.ratios();
        for (placement, canvas) in &mut self.canvases {
            let rect = placement.scaled(ratios);
            canvas.layout(rect.size());
        }
    }

    /// Route an event into the window.
    pub fn on_event(&mut self, event: &Event) {
        if let EventKind::Resize { size } = event.kind {
            self.resize(size);
        }
    }

    // ========== Theme ==========

    /// Apply a theme to the window and, optionally, all its canvases.
    pub fn apply_theme(&mut self, theme: &Theme, include_canvases: bool) {
        self.background = theme.window.background;
        if include_canvases {
            for (_, canvas) in &mut self.canvases {
                canvas.apply_theme(theme);
            }
        }
    }

    /// Pull the active theme from [`ThemeState`] when automatic updates are
    /// enabled, or unconditionally via [`Window::apply_theme`].
    pub fn sync_theme(&mut self) {
        if !Env::get().auto_update {
            return;
        }
        if let Some(state) = ThemeState::try_get() {
            let theme = state.theme();
            self.apply_theme(&theme, true);
        }
    }

    // ========== Lifecycle ==========

    /// Register a callback to run when the window closes. Replaces any
    /// previous callback.
    pub fn at_exit<F: FnOnce() + Send + 'static>(&mut self, callback: F) {
        self.at_exit = Some(Box::new(callback));
    }

    /// Close the window, running the exit callback exactly once.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Some(callback) = self.at_exit.take() {
            callback();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        self.close();
    }
}
