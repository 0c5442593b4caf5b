//! Arbitrarily shaped boolean regions over a rectangular patch of a level.
//!
//! An [`Area`] is how spatial results cross the map boundary: a blast
//! radius, a flood-filled region, a mask of visible obstacles. Cells are
//! addressed either by absolute map point (translated by the area origin)
//! or by local coordinate relative to the origin.

use crate::geom::{Point, Rect};

/// A dense boolean grid anchored at `origin`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Area {
    origin: Point,
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl Area {
    /// Create an empty area of the given size with its top-left corner at
    /// `origin`.
    pub fn new(origin: Point, width: i32, height: i32) -> Self {
        assert!(
            width >= 0 && height >= 0,
            "area: negative size {width}x{height}"
        );
        Self {
            origin,
            width,
            height,
            cells: vec![false; (width * height) as usize],
        }
    }

    /// Create an empty area covering `rect`.
    pub fn from_rect(rect: Rect) -> Self {
        if rect.is_empty() {
            return Self::new(rect.min, 0, 0);
        }
        Self::new(rect.min, rect.width(), rect.height())
    }

    /// Top-left corner in map coordinates.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The map rectangle covered by the area.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.origin.x + self.width,
            self.origin.y + self.height,
        )
    }

    fn local_idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    fn clamped_idx(&self, x: i32, y: i32) -> Option<usize> {
        if self.cells.is_empty() {
            return None;
        }
        let x = x.clamp(0, self.width - 1);
        let y = y.clamp(0, self.height - 1);
        self.local_idx(x, y)
    }

    /// Whether the map point `p` is marked. Points outside the area are not.
    pub fn get(&self, p: Point) -> bool {
        let q = p - self.origin;
        self.local_idx(q.x, q.y).is_some_and(|i| self.cells[i])
    }

    /// Mark the map point `p`. Points outside the area are ignored.
    pub fn set(&mut self, p: Point) {
        let q = p - self.origin;
        if let Some(i) = self.local_idx(q.x, q.y) {
            self.cells[i] = true;
        }
    }

    /// Unmark the map point `p`. Points outside the area are ignored.
    pub fn clear(&mut self, p: Point) {
        let q = p - self.origin;
        if let Some(i) = self.local_idx(q.x, q.y) {
            self.cells[i] = false;
        }
    }

    /// Whether the local coordinate is marked.
    pub fn get_local(&self, x: i32, y: i32) -> bool {
        self.local_idx(x, y).is_some_and(|i| self.cells[i])
    }

    /// Mark a local coordinate, clamping it into the area first.
    pub fn set_local(&mut self, x: i32, y: i32) {
        if let Some(i) = self.clamped_idx(x, y) {
            self.cells[i] = true;
        }
    }

    /// Unmark a local coordinate, clamping it into the area first.
    pub fn clear_local(&mut self, x: i32, y: i32) {
        if let Some(i) = self.clamped_idx(x, y) {
            self.cells[i] = false;
        }
    }

    /// Unmark every cell.
    pub fn clear_all(&mut self) {
        self.cells.fill(false);
    }

    /// Number of marked cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Whether no cell is marked.
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&c| c)
    }

    /// Mark every point that is marked in `other`.
    pub fn union_with(&mut self, other: &Area) {
        for p in other.iter() {
            self.set(p);
        }
    }

    /// Iterate over the marked cells in map coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.bounds()
            .iter()
            .zip(self.cells.iter())
            .filter_map(|(p, &c)| c.then_some(p))
    }
}
