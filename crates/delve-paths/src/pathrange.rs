use delve_core::{Point, Rect};

/// A position with the cumulative cost of reaching it from the search start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

// ---------------------------------------------------------------------------
// Internal node for A* searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    /// Insertion order into the open set during the current search.
    pub(crate) seq: u32,
    pub(crate) generation: u32,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            seq: 0,
            generation: 0,
            closed: false,
        }
    }
}

/// Reference into the node array, ordered for use in a `BinaryHeap`.
///
/// Smallest `f` first; among equal `f`, the node that entered the open set
/// first.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) seq: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel value meaning "unreachable" in flood distance maps.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Central coordinator for searches over a level rectangle.
///
/// `PathRange` owns the node array, distance map, and scratch buffers so
/// that repeated queries on the same level allocate nothing after the first
/// one. A range is bound to a rectangle, usually the bounds of a level;
/// [`find`](Self::find) rebinds it automatically when handed a view of a
/// different size.
pub struct PathRange {
    pub(crate) rng: Rect,
    pub(crate) width: usize,
    // A* caches
    pub(crate) astar_nodes: Vec<Node>,
    pub(crate) astar_generation: u32,
    /// Nodes expanded by the last A* search.
    pub(crate) expanded: usize,
    // flood caches
    pub(crate) flood_map: Vec<i32>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given rectangle.
    pub fn new(rng: Rect) -> Self {
        let w = rng.width().max(0) as usize;
        let len = rng.len();
        Self {
            rng,
            width: w,
            astar_nodes: vec![Node::default(); len],
            astar_generation: 0,
            expanded: 0,
            flood_map: vec![UNREACHABLE; len],
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Replace the underlying rectangle.
    ///
    /// If the new size fits within the existing caches they are kept and
    /// only the generation counter is bumped. Otherwise they are
    /// reallocated.
    pub fn set_range(&mut self, rng: Rect) {
        let new_len = rng.len();
        let old_capacity = self.astar_nodes.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= old_capacity {
            self.astar_generation = self.astar_generation.wrapping_add(1);
            return;
        }

        self.astar_nodes.clear();
        self.astar_nodes.resize(new_len, Node::default());
        self.astar_generation = 0;

        self.flood_map.clear();
        self.flood_map.resize(new_len, UNREACHABLE);
    }

    /// The rectangle being used.
    #[inline]
    pub fn range(&self) -> Rect {
        self.rng
    }

    /// Number of nodes the last A* search expanded.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}
