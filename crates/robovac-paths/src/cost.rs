use robovac_core::Point;

use crate::SearchError;
use crate::board::BOARD;

/// Cost of stepping onto an ordinary cell.
pub const STANDARD_COST: i32 = 1;

/// Cost of stepping onto a barrier cell.
pub const BARRIER_COST: i32 = 200;

/// Largest step cost a [`CostModel`] accepts: a path visiting every cell at
/// this cost, plus the estimate, still fits in `i32`.
pub const MAX_STEP_COST: i32 = i32::MAX / BOARD.len() as i32;

// ---------------------------------------------------------------------------
// Barrier
// ---------------------------------------------------------------------------

/// Groups of board cells that are expensive, but not forbidden, to enter.
///
/// A cell is a barrier cell if it appears in any group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Barrier {
    groups: Vec<Vec<Point>>,
}

impl Barrier {
    /// Create a barrier from groups of cells.
    pub fn new(groups: Vec<Vec<Point>>) -> Self {
        Self { groups }
    }

    /// Create a barrier made of a single group.
    pub fn from_cells(cells: impl IntoIterator<Item = Point>) -> Self {
        Self {
            groups: vec![cells.into_iter().collect()],
        }
    }

    /// Whether `p` belongs to any group.
    pub fn contains(&self, p: Point) -> bool {
        self.groups.iter().any(|g| g.contains(&p))
    }

    /// Whether no cell is marked at all.
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }

    /// The groups as given.
    pub fn groups(&self) -> &[Vec<Point>] {
        &self.groups
    }

    /// Every marked cell, group by group. Cells listed in several groups are
    /// yielded once per group.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.groups.iter().flatten().copied()
    }
}

impl FromIterator<Vec<Point>> for Barrier {
    fn from_iter<I: IntoIterator<Item = Vec<Point>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// CostModel
// ---------------------------------------------------------------------------

/// Step costs used by the searches.
///
/// The Chebyshev estimate stays admissible and consistent only while
/// `1 <= standard <= barrier`; [`CostModel::validate`] enforces that, and
/// also caps `barrier` so no path cost or priority on the board can
/// overflow `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModel {
    pub standard: i32,
    pub barrier: i32,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            standard: STANDARD_COST,
            barrier: BARRIER_COST,
        }
    }
}

impl CostModel {
    /// Create a validated cost model.
    pub fn new(standard: i32, barrier: i32) -> Result<Self, SearchError> {
        let model = Self { standard, barrier };
        model.validate()?;
        Ok(model)
    }

    /// Check `1 <= standard <= barrier <= MAX_STEP_COST`.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.standard < 1 || self.barrier < self.standard || self.barrier > MAX_STEP_COST {
            return Err(SearchError::InvalidCostModel {
                standard: self.standard,
                barrier: self.barrier,
            });
        }
        Ok(())
    }

    /// Cost of stepping onto `target`.
    #[inline]
    pub fn move_cost(&self, target: Point, barrier: &Barrier) -> i32 {
        if barrier.contains(target) {
            self.barrier
        } else {
            self.standard
        }
    }
}

/// Cost of stepping onto `target` under the default [`CostModel`].
#[inline]
pub fn move_cost(target: Point, barrier: &Barrier) -> i32 {
    CostModel::default().move_cost(target, barrier)
}
