//! **robovac-core** — geometry primitives for the robovac board search.
//!
//! Provides the [`Point`] coordinate type and the half-open [`Range`]
//! rectangle used to describe the board.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
