use delve_core::Point;

/// Minimal search interface: neighbor enumeration.
pub trait Pather {
    /// Append the cells reachable in one step from `p` into `buf`. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) steps.
pub trait WeightedPather: Pather {
    /// Cost of stepping from `from` into the adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Weighted pather with a heuristic, for A*.
pub trait AstarPather: WeightedPather {
    /// Estimated cost from `from` to `to`.
    fn estimate(&self, from: Point, to: Point) -> i32;
}
