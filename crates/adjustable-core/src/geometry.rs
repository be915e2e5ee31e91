//! Integer geometry primitives for widget placement.
//!
//! Widgets live on a pixel grid, so positions and sizes are `i32`. Hosts that
//! already work with kurbo's `f64` types can convert in both directions;
//! conversions from kurbo round to the nearest pixel.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A pixel position, either widget-local or parent-local.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Sum of the absolute coordinates (taxicab length).
    pub fn manhattan_length(self) -> i32 {
        self.x.abs() + self.y.abs()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size { width: 0, height: 0 };

    /// The "no maximum" sentinel, the largest dimension desktop toolkits accept.
    pub const UNBOUNDED: Size = Size {
        width: MAX_DIMENSION,
        height: MAX_DIMENSION,
    };

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Largest widget dimension, used for unbounded maximum sizes.
pub const MAX_DIMENSION: i32 = 16_777_215;

/// An axis-aligned rectangle stored as its two corners.
///
/// `x2`/`y2` are exclusive: a rectangle at the origin with width 100 has
/// `x1 == 0` and `x2 == 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x1: origin.x,
            y1: origin.y,
            x2: origin.x + size.width,
            y2: origin.y + size.height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// Swap corners where needed so that `x1 <= x2` and `y1 <= y2`.
    pub fn normalized(&self) -> Rect {
        Rect::new(
            self.x1.min(self.x2),
            self.y1.min(self.y2),
            self.x1.max(self.x2),
            self.y1.max(self.y2),
        )
    }

    /// Whether the point lies inside (far edges excluded).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x1 && point.x < self.x2 && point.y >= self.y1 && point.y < self.y2
    }

    /// The same rectangle moved so that its origin is `origin`.
    pub fn with_origin(&self, origin: Point) -> Rect {
        Rect::from_origin_size(origin, self.size())
    }

    /// Whether `other` lies completely inside this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x1 >= self.x1 && other.y1 >= self.y1 && other.x2 <= self.x2 && other.y2 <= self.y2
    }

    /// Clamp the left coordinate of a `width`-wide span into this rectangle.
    ///
    /// The far bound is applied last, so a span wider than the rectangle ends
    /// up flush with the right edge.
    pub fn clamp_x(&self, x: i32, width: i32) -> i32 {
        x.max(self.x1).min(self.x2 - width)
    }

    /// Clamp the top coordinate of a `height`-tall span into this rectangle.
    pub fn clamp_y(&self, y: i32, height: i32) -> i32 {
        y.max(self.y1).min(self.y2 - height)
    }

    /// Clamp a widget origin so a `size`-sized widget stays inside.
    pub fn clamp_origin(&self, origin: Point, size: Size) -> Point {
        Point::new(
            self.clamp_x(origin.x, size.width),
            self.clamp_y(origin.y, size.height),
        )
    }
}

fn to_pixel(value: f64) -> i32 {
    value.round() as i32
}

impl From<Point> for kurbo::Point {
    fn from(point: Point) -> Self {
        kurbo::Point::new(point.x as f64, point.y as f64)
    }
}

impl From<kurbo::Point> for Point {
    fn from(point: kurbo::Point) -> Self {
        Point::new(to_pixel(point.x), to_pixel(point.y))
    }
}

impl From<Size> for kurbo::Size {
    fn from(size: Size) -> Self {
        kurbo::Size::new(size.width as f64, size.height as f64)
    }
}

impl From<kurbo::Size> for Size {
    fn from(size: kurbo::Size) -> Self {
        Size::new(to_pixel(size.width), to_pixel(size.height))
    }
}

impl From<Rect> for kurbo::Rect {
    fn from(rect: Rect) -> Self {
        kurbo::Rect::new(
            rect.x1 as f64,
            rect.y1 as f64,
            rect.x2 as f64,
            rect.y2 as f64,
        )
    }
}

impl From<kurbo::Rect> for Rect {
    fn from(rect: kurbo::Rect) -> Self {
        Rect::new(
            to_pixel(rect.x0),
            to_pixel(rect.y0),
            to_pixel(rect.x1),
            to_pixel(rect.y1),
        )
    }
}
