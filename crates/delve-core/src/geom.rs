//! Geometry primitives: [`Point`], [`Position`] and [`Rect`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// All eight neighbours, clockwise starting from north.
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x + 1, self.y - 1),
            Self::new(self.x + 1, self.y),
            Self::new(self.x + 1, self.y + 1),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y + 1),
            Self::new(self.x - 1, self.y),
            Self::new(self.x - 1, self.y - 1),
        ]
    }

    /// Squared Euclidean length of the point taken as a vector.
    #[inline]
    pub fn length_sq(self) -> i64 {
        let (x, y) = (self.x as i64, self.y as i64);
        x * x + y * y
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A grid cell on a given dungeon level.
///
/// [`Position::INVALID`] stands for "no position". A position is only
/// meaningful relative to the bounds of the level it refers to, see
/// [`is_valid`](Self::is_valid).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub level: i32,
}

impl Position {
    /// The "no position" sentinel.
    pub const INVALID: Self = Self {
        x: -1,
        y: -1,
        level: -1,
    };

    /// Create a new position.
    #[inline]
    pub const fn new(x: i32, y: i32, level: i32) -> Self {
        Self { x, y, level }
    }

    /// Position of point `p` on `level`.
    #[inline]
    pub const fn at(p: Point, level: i32) -> Self {
        Self {
            x: p.x,
            y: p.y,
            level,
        }
    }

    /// The planar part of the position.
    #[inline]
    pub const fn point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether this is the sentinel.
    #[inline]
    pub fn is_invalid(self) -> bool {
        self == Self::INVALID
    }

    /// Not the sentinel and inside `bounds`.
    #[inline]
    pub fn is_valid(self, bounds: Rect) -> bool {
        !self.is_invalid() && bounds.contains(self.point())
    }

    /// Whether both positions are on the same level.
    #[inline]
    pub fn same_level(self, other: Position) -> bool {
        self.level == other.level
    }

    /// Planar Manhattan distance, ignoring levels.
    #[inline]
    pub fn manhattan(self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Planar Chebyshev distance, ignoring levels.
    #[inline]
    pub fn chebyshev(self, other: Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invalid() {
            return write!(f, "(nowhere)");
        }
        write!(f, "({}, {})@{}", self.x, self.y, self.level)
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
///
/// All empty rectangles are considered equal.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        (self.min == other.min && self.max == other.max) || (self.is_empty() && other.is_empty())
    }
}

impl Eq for Rect {}

impl Hash for Rect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_empty() {
            // All empty rectangles hash the same.
            Point::ZERO.hash(state);
            Point::ZERO.hash(state);
        } else {
            self.min.hash(state);
            self.max.hash(state);
        }
    }
}

impl Rect {
    /// Create a new rectangle from two corners and auto-canonicalize so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Rectangle of the given size with its corner at the origin.
    #[inline]
    pub fn sized(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// The square of cells within Chebyshev distance `radius` of `center`.
    #[inline]
    pub fn around(center: Point, radius: i32) -> Self {
        Self::new(
            center.x - radius,
            center.y - radius,
            center.x + radius + 1,
            center.y + radius + 1,
        )
    }

    /// Size as a `Point` (width = max.x - min.x, height = max.y - min.y).
    #[inline]
    pub fn size(self) -> Point {
        Point::new(self.max.x - self.min.x, self.max.y - self.min.y)
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Total number of cells in the rectangle.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the rectangle has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open rectangle.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Intersection of two rectangles.
    ///
    /// If the two rectangles do not overlap, the zero (empty) rectangle is
    /// returned.
    #[inline]
    pub fn intersect(self, other: Rect) -> Self {
        let r = Self {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Row-major iterator over every point in the rectangle.
    #[inline]
    pub fn iter(self) -> RectIter {
        RectIter {
            rect: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Rect {
    type Item = Point;
    type IntoIter = RectIter;
    #[inline]
    fn into_iter(self) -> RectIter {
        self.iter()
    }
}


impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

/// Row-major iterator over the points in a [`Rect`].
#[derive(Clone, Debug)]
pub struct RectIter {
    rect: Rect,
    cur: Point,
}

impl Iterator for RectIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.rect.max.y || self.rect.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.rect.max.x {
            self.cur.x = self.rect.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rect.is_empty() || self.cur.y >= self.rect.max.y {
            return (0, Some(0));
        }
        let w = self.rect.width() as usize;
        let remaining_in_row = (self.rect.max.x - self.cur.x) as usize;
        let remaining_rows = (self.rect.max.y - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RectIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(Point::new(3, -4).length_sq(), 25);
    }

    #[test]
    fn neighbors_are_distinct_and_adjacent() {
        let p = Point::new(5, 5);
        let ns = p.neighbors_8();
        let set: HashSet<_> = ns.iter().copied().collect();
        assert_eq!(set.len(), 8);
        assert!(ns.iter().all(|&n| (n - p).x.abs() <= 1 && (n - p).y.abs() <= 1 && n != p));
        assert_eq!(ns[0], Point::new(5, 4));
    }

    #[test]
    fn invalid_position_is_never_valid() {
        // A rectangle reaching into negative coordinates still rejects the
        // sentinel.
        let bounds = Rect::new(-5, -5, 5, 5);
        assert!(!Position::INVALID.is_valid(bounds));
        assert!(Position::new(-1, -1, 0).is_valid(bounds));
        assert!(Position::default().is_invalid());
    }

    #[test]
    fn position_validity_follows_bounds() {
        let bounds = Rect::sized(10, 4);
        assert!(Position::new(0, 0, 2).is_valid(bounds));
        assert!(Position::new(9, 3, 2).is_valid(bounds));
        assert!(!Position::new(10, 3, 2).is_valid(bounds));
        assert!(!Position::new(3, -1, 2).is_valid(bounds));
    }

    #[test]
    fn position_distances() {
        let a = Position::new(1, 1, 0);
        let b = Position::new(4, -1, 0);
        assert_eq!(a.manhattan(b), 5);
        assert_eq!(a.chebyshev(b), 3);
        assert!(a.same_level(b));
        assert!(!a.same_level(Position::new(1, 1, 1)));
        assert_eq!(a.to_string(), "(1, 1)@0");
    }

    #[test]
    fn rect_basics() {
        let r = Rect::new(0, 0, 3, 2);
        assert_eq!(r.size(), Point::new(3, 2));
        assert!(!r.is_empty());
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, 2)));
        assert_eq!(r.len(), 6);
    }

    #[test]
    fn rect_auto_canonicalize() {
        let r = Rect::new(3, 2, 0, 0);
        assert_eq!(r.min, Point::new(0, 0));
        assert_eq!(r.max, Point::new(3, 2));
    }

    #[test]
    fn rect_around() {
        let r = Rect::around(Point::new(5, 5), 2);
        assert_eq!(r, Rect::new(3, 3, 8, 8));
        assert_eq!(r.len(), 25);
        assert_eq!(Rect::around(Point::new(1, 1), 0).len(), 1);
    }

    #[test]
    fn rect_iter_count() {
        let r = Rect::new(0, 0, 3, 2);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[5], Point::new(2, 1));
        assert_eq!(r.iter().len(), 6);
    }

    #[test]
    fn rect_intersect() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, 2, 6, 6);
        assert_eq!(a.intersect(b), Rect::new(2, 2, 4, 4));
        let far = Rect::new(8, 8, 9, 9);
        assert!(a.intersect(far).is_empty());
        assert_eq!(a.intersect(far), Rect::default());
        assert_eq!(b.intersect(a), Rect::new(2, 2, 4, 4));
    }

    #[test]
    fn empty_rects_hash_same() {
        let a = Rect::default();
        let b = Rect {
            min: Point::new(5, 5),
            max: Point::new(5, 5),
        };
        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }
}
