use std::cmp::Ordering;
use std::collections::{BTreeSet, BinaryHeap};

use robovac_core::{Point, Range};

use crate::SearchError;
use crate::traits::WeightedPather;

/// Outcome of a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Cells from start to goal, both included.
    pub path: Vec<Point>,
    /// Cells expanded before the goal was selected. The goal itself is never
    /// in this set.
    pub expanded: BTreeSet<Point>,
    /// Total cost of the path.
    pub cost: i32,
}

impl SearchResult {
    /// Number of moves along the path.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

// ---------------------------------------------------------------------------
// Internal node state for the best-first searches
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, PartialEq, Eq)]
enum NodeState {
    Unseen,
    Open,
    Expanded,
}

#[derive(Clone)]
struct Node {
    g: i32,
    f: i32,
    parent: usize,
    state: NodeState,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            state: NodeState::Unseen,
        }
    }
}

/// Frontier entry, ordered by `f` then by position for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    pos: Point,
    f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and the
        // smallest position among equal f.
        other.f.cmp(&self.f).then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchSpace
// ---------------------------------------------------------------------------

/// State of one best-first search over a rectangle of cells.
///
/// A `SearchSpace` is consumed by [`SearchSpace::run`]; nothing outlives a
/// single query.
pub(crate) struct SearchSpace {
    rng: Range,
    width: usize,
    nodes: Vec<Node>,
    open: BinaryHeap<NodeRef>,
    expanded: BTreeSet<Point>,
}

impl SearchSpace {
    pub(crate) fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: vec![Node::default(); rng.len()],
            open: BinaryHeap::with_capacity(rng.len()),
            expanded: BTreeSet::new(),
        }
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }

    /// Best-first search from `start` to `goal`.
    ///
    /// The frontier is ordered by `priority(cell, g)`, where `g` is the best
    /// known cost from `start`. A cell's cost and parent are only replaced by
    /// a strictly cheaper route, and an expanded cell is never reopened.
    pub(crate) fn run<P, F>(
        mut self,
        pather: &P,
        start: Point,
        goal: Point,
        priority: F,
    ) -> Result<SearchResult, SearchError>
    where
        P: WeightedPather,
        F: Fn(Point, i32) -> i32,
    {
        let start_idx = self.idx(start).ok_or(SearchError::InvalidCoordinate(start))?;
        let goal_idx = self.idx(goal).ok_or(SearchError::InvalidCoordinate(goal))?;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = priority(start, 0);
            node.state = NodeState::Open;
            self.open.push(NodeRef {
                idx: start_idx,
                pos: start,
                f: node.f,
            });
        }

        let mut nbuf = Vec::with_capacity(8);

        while let Some(current) = self.open.pop() {
            let ci = current.idx;

            // Skip stale entries left behind by a later improvement.
            let node = &self.nodes[ci];
            if node.state != NodeState::Open || node.f != current.f {
                continue;
            }

            if ci == goal_idx {
                let path = self.reconstruct(goal_idx);
                let cost = self.nodes[goal_idx].g;
                return Ok(SearchResult {
                    path,
                    expanded: self.expanded,
                    cost,
                });
            }

            let current_g = node.g;
            let cp = current.pos;
            self.nodes[ci].state = NodeState::Expanded;
            self.expanded.insert(cp);
            log::trace!("expand {cp}: g={current_g} f={}", current.f);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + pather.cost(cp, np);

                let n = &mut self.nodes[ni];
                match n.state {
                    NodeState::Expanded => continue,
                    NodeState::Open if tentative_g >= n.g => continue,
                    _ => {}
                }

                n.g = tentative_g;
                n.f = priority(np, tentative_g);
                n.parent = ci;
                n.state = NodeState::Open;

                self.open.push(NodeRef {
                    idx: ni,
                    pos: np,
                    f: n.f,
                });
            }
        }

        log::warn!(
            "frontier exhausted after {} expansions: no path from {start} to {goal}",
            self.expanded.len()
        );
        Err(SearchError::SearchExhausted { start, goal })
    }

    /// Follow parent links from `goal_idx` back to the start.
    fn reconstruct(&self, goal_idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD;
    use crate::traits::Pather;

    /// Moves only along the x axis, one unit per step.
    struct Rail;

    impl Pather for Rail {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            buf.push(p.shift(1, 0));
            buf.push(p.shift(-1, 0));
        }
    }

    impl WeightedPather for Rail {
        fn cost(&self, _from: Point, _to: Point) -> i32 {
            1
        }
    }

    #[test]
    fn index_round_trip() {
        let space = SearchSpace::new(BOARD);
        for p in BOARD {
            let i = space.idx(p).unwrap();
            assert!(i < 64);
            assert_eq!(space.point(i), p);
        }
        assert_eq!(space.idx(Point::new(0, 0)), None);
        assert_eq!(space.idx(Point::new(9, 1)), None);
    }

    #[test]
    fn frontier_pops_lowest_f_then_smallest_point() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef {
            idx: 0,
            pos: Point::new(3, 1),
            f: 2,
        });
        heap.push(NodeRef {
            idx: 1,
            pos: Point::new(2, 5),
            f: 2,
        });
        heap.push(NodeRef {
            idx: 2,
            pos: Point::new(1, 1),
            f: 4,
        });
        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|n| n.pos).collect();
        assert_eq!(
            order,
            vec![Point::new(2, 5), Point::new(3, 1), Point::new(1, 1)]
        );
    }

    #[test]
    fn exhausted_frontier_is_an_error() {
        let start = Point::new(1, 1);
        let goal = Point::new(1, 8);
        let err = SearchSpace::new(BOARD)
            .run(&Rail, start, goal, |_, g| g)
            .unwrap_err();
        assert_eq!(err, SearchError::SearchExhausted { start, goal });
    }

    #[test]
    fn rail_reaches_goal_on_its_row() {
        let result = SearchSpace::new(BOARD)
            .run(&Rail, Point::new(2, 4), Point::new(6, 4), |_, g| g)
            .unwrap();
        assert_eq!(result.cost, 4);
        assert_eq!(result.steps(), 4);
        assert_eq!(result.path.first(), Some(&Point::new(2, 4)));
        assert_eq!(result.path.last(), Some(&Point::new(6, 4)));
        assert!(!result.expanded.contains(&Point::new(6, 4)));
    }

    #[test]
    fn off_range_endpoints_are_rejected() {
        let err = SearchSpace::new(BOARD)
            .run(&Rail, Point::new(0, 1), Point::new(3, 1), |_, g| g)
            .unwrap_err();
        assert_eq!(err, SearchError::InvalidCoordinate(Point::new(0, 1)));
    }
}
