use robovac_core::Point;

use crate::SearchError;
use crate::algorithm::Algorithm;
use crate::board::{BOARD, Board, check_in_bounds};
use crate::cost::Barrier;
use crate::search::{SearchResult, SearchSpace};
use crate::traits::AstarPather;

impl Board<'_> {
    /// A* search from `start` to `goal` guided by the Chebyshev estimate.
    ///
    /// Cells are expanded in order of accumulated cost plus estimate, with the
    /// same tie-break as [`Board::ucs`]. The estimate is zero at the goal, so
    /// the returned cost is the goal's accumulated cost.
    pub fn astar(&self, start: Point, goal: Point) -> Result<SearchResult, SearchError> {
        check_in_bounds(start)?;
        check_in_bounds(goal)?;

        log::debug!("astar: searching {start} -> {goal}");
        let result = SearchSpace::new(BOARD).run(self, start, goal, |p, g| {
            g + self.estimate(p, goal)
        })?;
        log::debug!(
            "astar: cost {} over {} steps, {} expanded",
            result.cost,
            result.steps(),
            result.expanded.len()
        );
        Ok(result)
    }

    /// Run the given algorithm.
    pub fn search(
        &self,
        algorithm: Algorithm,
        start: Point,
        goal: Point,
    ) -> Result<SearchResult, SearchError> {
        match algorithm {
            Algorithm::Ucs => self.ucs(start, goal),
            Algorithm::AStar => self.astar(start, goal),
        }
    }
}

/// A* search on the 8x8 board with the default step costs.
pub fn astar_search(
    start: Point,
    goal: Point,
    barrier: &Barrier,
) -> Result<SearchResult, SearchError> {
    Board::new(barrier).astar(start, goal)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn result_round_trip() {
        let barrier = Barrier::new(vec![vec![Point::new(2, 1)]]);
        let r = astar_search(Point::new(1, 1), Point::new(3, 1), &barrier).unwrap();
        let json = serde_json::to_string(&r).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
