use robovac_core::Point;

/// Minimal search interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) steps.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Pather with an admissible heuristic, as needed by A*.
pub trait AstarPather: WeightedPather {
    /// Estimate of the cost from `from` to `to`. Must never overestimate.
    fn estimate(&self, from: Point, to: Point) -> i32;
}
