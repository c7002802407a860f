//! Geometry primitives
//!
//! Containers record widget geometry as an anchor point plus a size; the
//! anchor names which corner, edge midpoint or center of the widget that
//! point refers to.

use std::str::FromStr;

/// A point in canvas coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle with a top-left origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Reference point of a widget's recorded position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Anchor {
    #[default]
    Nw,
    N,
    Ne,
    W,
    Center,
    E,
    Sw,
    S,
    Se,
}

impl Anchor {
    /// All anchors, in reading order.
    pub const ALL: [Anchor; 9] = [
        Anchor::Nw,
        Anchor::N,
        Anchor::Ne,
        Anchor::W,
        Anchor::Center,
        Anchor::E,
        Anchor::Sw,
        Anchor::S,
        Anchor::Se,
    ];

    /// Offset from the anchor point to the top-left origin for a given size.
    pub fn origin_offset(self, size: Size) -> (f32, f32) {
        let (fx, fy) = self.fractions();
        (-size.width * fx, -size.height * fy)
    }

    /// Top-left origin of a rect whose anchor point sits at `point`.
    pub fn origin(self, point: Point, size: Size) -> Point {
        let (dx, dy) = self.origin_offset(size);
        Point::new(point.x + dx, point.y + dy)
    }

    /// Horizontal/vertical fractions of the size between origin and anchor.
    fn fractions(self) -> (f32, f32) {
        match self {
            Anchor::Nw => (0.0, 0.0),
            Anchor::N => (0.5, 0.0),
            Anchor::Ne => (1.0, 0.0),
            Anchor::W => (0.0, 0.5),
            Anchor::Center => (0.5, 0.5),
            Anchor::E => (1.0, 0.5),
            Anchor::Sw => (0.0, 1.0),
            Anchor::S => (0.5, 1.0),
            Anchor::Se => (1.0, 1.0),
        }
    }
}

impl FromStr for Anchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nw" => Ok(Anchor::Nw),
            "n" => Ok(Anchor::N),
            "ne" => Ok(Anchor::Ne),
            "w" => Ok(Anchor::W),
            "center" => Ok(Anchor::Center),
            "e" => Ok(Anchor::E),
            "sw" => Ok(Anchor::Sw),
            "s" => Ok(Anchor::S),
            "se" => Ok(Anchor::Se),
            other => Err(format!("unknown anchor {other:?}")),
        }
    }
}
