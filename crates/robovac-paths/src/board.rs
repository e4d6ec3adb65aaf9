use robovac_core::{Point, Range};

use crate::SearchError;
use crate::cost::{Barrier, CostModel};
use crate::distance::heuristic;
use crate::neighbors::push_neighbors;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// The 8x8 board, 1-indexed on both axes.
pub const BOARD: Range = Range {
    min: Point::new(1, 1),
    max: Point::new(9, 9),
};

/// Whether `p` lies on the board.
#[inline]
pub fn in_bounds(p: Point) -> bool {
    BOARD.contains(p)
}

/// Return `p` unchanged if it lies on the board.
pub fn check_in_bounds(p: Point) -> Result<Point, SearchError> {
    if in_bounds(p) {
        Ok(p)
    } else {
        Err(SearchError::InvalidCoordinate(p))
    }
}

/// A board with its barrier cells and step costs.
///
/// This is the [`AstarPather`] both searches run on: neighbors are king
/// moves that stay on the board, and each step costs what its target cell
/// costs under the [`CostModel`].
#[derive(Debug, Clone, Copy)]
pub struct Board<'a> {
    barrier: &'a Barrier,
    costs: CostModel,
}

impl<'a> Board<'a> {
    /// Create a board using the default cost model.
    pub fn new(barrier: &'a Barrier) -> Self {
        Self {
            barrier,
            costs: CostModel::default(),
        }
    }

    /// Replace the cost model after validating it.
    pub fn with_costs(mut self, costs: CostModel) -> Result<Self, SearchError> {
        costs.validate()?;
        self.costs = costs;
        Ok(self)
    }

    /// The barrier cells.
    pub fn barrier(&self) -> &'a Barrier {
        self.barrier
    }

    /// The step costs in use.
    pub fn costs(&self) -> CostModel {
        self.costs
    }
}

impl Pather for Board<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        push_neighbors(p, BOARD, buf);
    }
}

impl WeightedPather for Board<'_> {
    fn cost(&self, _from: Point, to: Point) -> i32 {
        self.costs.move_cost(to, self.barrier)
    }
}

impl AstarPather for Board<'_> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        self.costs.standard * heuristic(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert_eq!(BOARD.len(), 64);
        assert!(in_bounds(Point::new(1, 1)));
        assert!(in_bounds(Point::new(8, 8)));
        assert!(!in_bounds(Point::new(0, 4)));
        assert!(!in_bounds(Point::new(4, 9)));
        assert_eq!(check_in_bounds(Point::new(3, 3)), Ok(Point::new(3, 3)));
        assert_eq!(
            check_in_bounds(Point::new(9, 1)),
            Err(SearchError::InvalidCoordinate(Point::new(9, 1)))
        );
    }

    #[test]
    fn board_costs_follow_model() {
        let barrier = Barrier::from_cells([Point::new(2, 2)]);
        let board = Board::new(&barrier);
        assert_eq!(board.cost(Point::new(1, 1), Point::new(2, 2)), 200);
        assert_eq!(board.cost(Point::new(2, 2), Point::new(1, 1)), 1);

        let cheap = board.with_costs(CostModel::new(3, 7).unwrap()).unwrap();
        assert_eq!(cheap.cost(Point::new(1, 1), Point::new(2, 2)), 7);
        assert_eq!(cheap.estimate(Point::new(1, 1), Point::new(4, 2)), 9);
    }

    #[test]
    fn default_estimate_is_the_heuristic() {
        let barrier = Barrier::default();
        let board = Board::new(&barrier);
        for a in BOARD {
            assert_eq!(board.estimate(a, Point::new(8, 8)), heuristic(a, Point::new(8, 8)));
        }
    }

    #[test]
    fn with_costs_rejects_invalid_model() {
        let barrier = Barrier::default();
        let err = Board::new(&barrier)
            .with_costs(CostModel {
                standard: 10,
                barrier: 1,
            })
            .unwrap_err();
        assert_eq!(
            err,
            SearchError::InvalidCostModel {
                standard: 10,
                barrier: 1
            }
        );
    }

    #[test]
    fn board_neighbors_stay_on_board() {
        let barrier = Barrier::default();
        let board = Board::new(&barrier);
        let mut buf = Vec::new();
        board.neighbors(Point::new(8, 1), &mut buf);
        assert_eq!(
            buf,
            vec![Point::new(7, 1), Point::new(8, 2), Point::new(7, 2)]
        );
    }
}
