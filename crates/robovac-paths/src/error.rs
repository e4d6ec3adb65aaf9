use std::fmt;

use robovac_core::Point;

/// Errors returned by the board searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier ran empty before the goal was reached.
    SearchExhausted { start: Point, goal: Point },
    /// A start or goal coordinate lies outside the board.
    InvalidCoordinate(Point),
    /// Step costs must satisfy `1 <= standard <= barrier`.
    InvalidCostModel { standard: i32, barrier: i32 },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SearchExhausted { start, goal } => {
                write!(f, "search exhausted: no path from {start} to {goal}")
            }
            Self::InvalidCoordinate(p) => {
                write!(f, "coordinate {p} is outside the 8x8 board")
            }
            Self::InvalidCostModel { standard, barrier } => write!(
                f,
                "invalid cost model: standard cost {standard}, barrier cost {barrier}"
            ),
        }
    }
}

impl std::error::Error for SearchError {}
