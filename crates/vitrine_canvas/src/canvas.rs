//! Canvas container
//!
//! A canvas owns its children's recorded geometry and rescales it through
//! the zoom engine whenever the canvas itself is resized. Widgets keep a
//! `ChildId` into the canvas and read their derived rect back for hit
//! testing and drawing.

use slotmap::{new_key_type, SlotMap};

use vitrine_core::{Event, EventKind, Point, Rect, Size};
use vitrine_theme::{Theme, ThemeState};

use crate::zoom::{Placement, ZoomEngine};

new_key_type! {
    /// Key of a child geometry record.
    pub struct ChildId;
    /// Key of a drawn item.
    pub struct ItemId;
}

/// Rescaling behavior of a canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoomOptions {
    /// Rescale automatically on every resize event. When off, geometry only
    /// changes on an explicit [`Canvas::zoom`] call.
    pub auto_zoom: bool,
    /// Also rescale drawn items (shapes, text), not just widget children.
    pub zoom_items: bool,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            auto_zoom: true,
            zoom_items: false,
        }
    }
}

/// One child's geometry: the immutable baseline (if registered) and the
/// currently derived on-screen rect.
#[derive(Clone, Copy, Debug)]
struct ChildRecord {
    baseline: Option<Placement>,
    current: Rect,
}

/// A polyline/polygon item drawn on the canvas.
#[derive(Clone, Debug)]
pub struct ShapeItem {
    baseline: Vec<Point>,
    current: Vec<Point>,
}

/// A text item drawn on the canvas.
#[derive(Clone, Debug)]
pub struct TextItem {
    baseline: Point,
    current: Point,
    baseline_font_size: f32,
    font_size: f32,
    content: String,
}

/// A non-widget drawn item.
#[derive(Clone, Debug)]
pub enum CanvasItem {
    Shape(ShapeItem),
    Text(TextItem),
}

/// A themed container that tracks child geometry and rescales it
/// proportionally on resize.
pub struct Canvas {
    engine: ZoomEngine,
    options: ZoomOptions,
    children: SlotMap<ChildId, ChildRecord>,
    items: SlotMap<ItemId, CanvasItem>,
    nested: Vec<(Placement, Canvas)>,
    background: vitrine_core::Color,
}

impl Canvas {
    pub fn new(options: ZoomOptions) -> Self {
        let background = ThemeState::try_get()
            .map(|state| state.theme().canvas.background)
            .unwrap_or(vitrine_core::Color::from_hex(0xF1F1F1));
        Self {
            engine: ZoomEngine::new(),
            options,
            children: SlotMap::with_key(),
            items: SlotMap::with_key(),
            nested: Vec::new(),
            background,
        }
    }

    pub fn options(&self) -> ZoomOptions {
        self.options
    }

    pub fn is_initialized(&self) -> bool {
        self.engine.is_initialized()
    }

    /// Current per-axis scale ratios.
    pub fn ratios(&self) -> (f32, f32) {
        self.engine.ratios()
    }

    /// Current on-screen size.
    pub fn size(&self) -> Size {
        self.engine.current()
    }

    pub fn background(&self) -> vitrine_core::Color {
        self.background
    }

    pub fn set_background(&mut self, color: vitrine_core::Color) {
        self.background = color;
    }

    /// Apply a theme to this canvas and every nested canvas.
    pub fn apply_theme(&mut self, theme: &Theme) {
        self.background = theme.canvas.background;
        for (_, canvas) in &mut self.nested {
            canvas.apply_theme(theme);
        }
    }

    // ========== Children ==========

    /// Register a child with a recorded baseline. Its on-screen rect is
    /// derived immediately from the current ratios.
    pub fn place(&mut self, placement: Placement) -> ChildId {
        let current = placement.scaled(self.engine.ratios());
        self.children.insert(ChildRecord {
            baseline: Some(placement),
            current,
        })
    }

    /// Add a child without a baseline. It keeps the given rect as-is and is
    /// skipped on every rescale.
    pub fn insert(&mut self, rect: Rect) -> ChildId {
        self.children.insert(ChildRecord {
            baseline: None,
            current: rect,
        })
    }

    pub fn remove_child(&mut self, id: ChildId) {
        self.children.remove(id);
    }

    /// The currently derived on-screen rect of a child.
    pub fn child_rect(&self, id: ChildId) -> Option<Rect> {
        self.children.get(id).map(|record| record.current)
    }

    /// The recorded baseline of a child, if it has one.
    pub fn child_placement(&self, id: ChildId) -> Option<Placement> {
        self.children.get(id).and_then(|record| record.baseline)
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Topmost child whose derived rect contains the point.
    pub fn child_at(&self, point: Point) -> Option<ChildId> {
        self.children
            .iter()
            .filter(|(_, record)| record.current.contains(point))
            .map(|(id, _)| id)
            .last()
    }

    // ========== Items ==========

    /// Draw a shape from a list of coordinate points (given in baseline
    /// coordinates).
    pub fn draw_shape(&mut self, points: Vec<Point>) -> ItemId {
        let current = if self.options.zoom_items {
            self.scale_points(&points)
        } else {
            points.clone()
        };
        self.items.insert(CanvasItem::Shape(ShapeItem {
            baseline: points,
            current,
        }))
    }

    /// Draw text anchored at a position (given in baseline coordinates).
    pub fn draw_text(
        &mut self,
        position: Point,
        font_size: f32,
        content: impl Into<String>,
    ) -> ItemId {
        let (current, current_font_size) = if self.options.zoom_items {
            let (rx, ry) = self.engine.ratios();
            (
                Point::new(position.x * rx, position.y * ry),
                font_size * (rx * ry).sqrt(),
            )
        } else {
            (position, font_size)
        };
        self.items.insert(CanvasItem::Text(TextItem {
            baseline: position,
            current,
            baseline_font_size: font_size,
            font_size: current_font_size,
            content: content.into(),
        }))
    }

    pub fn remove_item(&mut self, id: ItemId) {
        self.items.remove(id);
    }

    pub fn item(&self, id: ItemId) -> Option<&CanvasItem> {
        self.items.get(id)
    }

    /// Current coordinates of a shape item.
    pub fn shape_points(&self, id: ItemId) -> Option<&[Point]> {
        match self.items.get(id) {
            Some(CanvasItem::Shape(shape)) => Some(&shape.current),
            _ => None,
        }
    }

    /// Current position and font size of a text item.
    pub fn text_layout(&self, id: ItemId) -> Option<(Point, f32, &str)> {
        match self.items.get(id) {
            Some(CanvasItem::Text(text)) => {
                Some((text.current, text.font_size, text.content.as_str()))
            }
            _ => None,
        }
    }

    /// Remove all children and items.
    pub fn clear(&mut self) {
        self.children.clear();
        self.items.clear();
        self.nested.clear();
    }

    // ========== Nested canvases ==========

    /// Nest a canvas at a placement; it is laid out and rescaled with this
    /// canvas.
    pub fn nest(&mut self, placement: Placement, mut canvas: Canvas) -> usize {
        let rect = placement.scaled(self.engine.ratios());
        canvas.layout(rect.size());
        self.nested.push((placement, canvas));
        self.nested.len() - 1
    }

    pub fn nested(&self, index: usize) -> Option<&Canvas> {
        self.nested.get(index).map(|(_, canvas)| canvas)
    }

    pub fn nested_mut(&mut self, index: usize) -> Option<&mut Canvas> {
        self.nested.get_mut(index).map(|(_, canvas)| canvas)
    }

    // ========== Layout & events ==========

    /// Record a new on-screen size. The first call captures the baseline;
    /// later calls rescale children when `auto_zoom` is on.
    pub fn layout(&mut self, size: Size) {
        let first = !self.engine.is_initialized();
        self.engine.resize(size);
        if first || self.options.auto_zoom {
            self.rescale();
        }
    }

    /// Explicitly rescale children (and items, per options) from the
    /// current ratios. This is the manual trigger for canvases created with
    /// `auto_zoom` off.
    pub fn zoom(&mut self) {
        self.rescale();
    }

    /// Route an event into the canvas. Resize events drive layout; all
    /// other kinds are the embedder's to dispatch against `child_at`.
    pub fn on_event(&mut self, event: &Event) {
        if let EventKind::Resize { size } = event.kind {
            self.layout(size);
        }
    }

    fn rescale(&mut self) {
        let ratios = self.engine.ratios();

        for (id, record) in self.children.iter_mut() {
            match record.baseline {
                Some(placement) => record.current = placement.scaled(ratios),
                // Children registered without a baseline cannot be derived;
                // they are skipped, not treated as an error.
                None => tracing::trace!(?id, "child without baseline skipped on rescale"),
            }
        }

        if self.options.zoom_items {
            let font_ratio = (ratios.0 * ratios.1).sqrt();
            for (_, item) in self.items.iter_mut() {
                match item {
                    CanvasItem::Shape(shape) => {
                        shape.current = shape
                            .baseline
                            .iter()
                            .map(|p| Point::new(p.x * ratios.0, p.y * ratios.1))
                            .collect();
                    }
                    CanvasItem::Text(text) => {
                        text.current =
                            Point::new(text.baseline.x * ratios.0, text.baseline.y * ratios.1);
                        text.font_size = text.baseline_font_size * font_ratio;
                    }
                }
            }
        }

        for (placement, canvas) in &mut self.nested {
            let rect = placement.scaled(ratios);
            canvas.layout(rect.size());
        }
    }

    fn scale_points(&self, points: &[Point]) -> Vec<Point> {
        let (rx, ry) = self.engine.ratios();
        points
            .iter()
            .map(|p| Point::new(p.x * rx, p.y * ry))
            .collect()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(ZoomOptions::default())
    }
}
