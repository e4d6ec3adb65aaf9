use robovac_core::Point;

use crate::SearchError;
use crate::board::{BOARD, Board, check_in_bounds};
use crate::cost::Barrier;
use crate::search::{SearchResult, SearchSpace};

impl Board<'_> {
    /// Uniform-cost search from `start` to `goal`.
    ///
    /// Cells are expanded in order of accumulated cost, ties going to the
    /// smallest cell in `(x, y)` order. The returned cost is the accumulated
    /// cost of the goal.
    pub fn ucs(&self, start: Point, goal: Point) -> Result<SearchResult, SearchError> {
        check_in_bounds(start)?;
        check_in_bounds(goal)?;

        log::debug!("ucs: searching {start} -> {goal}");
        let result = SearchSpace::new(BOARD).run(self, start, goal, |_, g| g)?;
        log::debug!(
            "ucs: cost {} over {} steps, {} expanded",
            result.cost,
            result.steps(),
            result.expanded.len()
        );
        Ok(result)
    }
}

/// Uniform-cost search on the 8x8 board with the default step costs.
pub fn ucs(start: Point, goal: Point, barrier: &Barrier) -> Result<SearchResult, SearchError> {
    Board::new(barrier).ucs(start, goal)
}
