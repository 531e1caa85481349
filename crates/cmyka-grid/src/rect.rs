/// A point on the integer pixel grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns whether the point is inside `rect`.
    #[inline]
    pub fn is_in(self, rect: Rectangle) -> bool {
        rect.min.x <= self.x && self.x < rect.max.x && rect.min.y <= self.y && self.y < rect.max.y
    }
}

/// An axis-aligned rectangle, `min` inclusive and `max` exclusive on both axes.
///
/// Rectangles built with [`Rectangle::new`] are well-formed, that is `min` never exceeds `max`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
pub struct Rectangle {
    pub min: Point,
    pub max: Point,
}

impl Rectangle {
    /// Creates a rectangle from two corners, swapping coordinates if needed.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    #[inline]
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            min: Point::default(),
            max: Point::new(
                i32::try_from(width).unwrap_or(i32::MAX),
                i32::try_from(height).unwrap_or(i32::MAX),
            ),
        }
    }

    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn dx(self) -> i32 {
        self.max.x.saturating_sub(self.min.x)
    }

    #[inline]
    pub fn dy(self) -> i32 {
        self.max.y.saturating_sub(self.min.y)
    }

    /// Returns width and height, or `None` if the rectangle is not well-formed.
    #[inline]
    pub fn size(self) -> Option<(usize, usize)> {
        let width = usize::try_from(self.dx()).ok()?;
        let height = usize::try_from(self.dy()).ok()?;
        Some((width, height))
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    #[inline]
    pub fn contains(self, point: Point) -> bool {
        point.is_in(self)
    }

    /// Moves the rectangle by `(x, y)`. Coordinates wrap around on overflow.
    pub fn translate(self, x: i32, y: i32) -> Self {
        Self {
            min: Point::new(self.min.x.wrapping_add(x), self.min.y.wrapping_add(y)),
            max: Point::new(self.max.x.wrapping_add(x), self.max.y.wrapping_add(y)),
        }
    }

    /// Returns the largest rectangle contained by both `self` and `rhs`.
    ///
    /// If the two don't overlap, the zero rectangle is returned.
    pub fn intersect(self, rhs: Rectangle) -> Self {
        let ret = Self {
            min: Point::new(self.min.x.max(rhs.min.x), self.min.y.max(rhs.min.y)),
            max: Point::new(self.max.x.min(rhs.max.x), self.max.y.min(rhs.max.y)),
        };

        if ret.is_empty() { Self::empty() } else { ret }
    }
}
