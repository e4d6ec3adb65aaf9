//! Minimum-cost paths for a robot vacuum on an 8x8 board.
//!
//! The vacuum moves like a chess king. Stepping onto an ordinary cell costs
//! [`STANDARD_COST`]; stepping onto a [`Barrier`] cell costs [`BARRIER_COST`].
//! Barrier cells are expensive, not forbidden.
//!
//! Two searches are provided:
//!
//! - **Uniform-cost search** ([`ucs`], [`Board::ucs`])
//! - **A\*** with a Chebyshev-distance estimate ([`astar_search`], [`Board::astar`])
//!
//! Both return a [`SearchResult`] holding the path, the expanded cells and
//! the path cost. Equal-priority frontier cells are taken in ascending
//! `(x, y)` order, so results are reproducible.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | UCS |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod algorithm;
mod astar;
mod board;
mod cost;
mod distance;
mod error;
mod neighbors;
mod search;
mod traits;
mod ucs;

pub use algorithm::Algorithm;
pub use astar::astar_search;
pub use board::{BOARD, Board, check_in_bounds, in_bounds};
pub use cost::{BARRIER_COST, Barrier, CostModel, MAX_STEP_COST, STANDARD_COST, move_cost};
pub use distance::{chebyshev, heuristic};
pub use error::SearchError;
pub use neighbors::{DIRECTIONS, neighbors};
pub use search::SearchResult;
pub use traits::{AstarPather, Pather, WeightedPather};
pub use ucs::ucs;
