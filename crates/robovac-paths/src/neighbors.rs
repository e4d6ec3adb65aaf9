use robovac_core::{Point, Range};

use crate::board::BOARD;

/// King-move offsets in the order neighbors are generated.
///
/// Both searches visit neighbors in this order, so it is part of their
/// observable behavior.
pub const DIRECTIONS: [Point; 8] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(1, 1),
    Point::new(-1, 1),
    Point::new(1, -1),
    Point::new(-1, -1),
];

/// Append the neighbors of `p` that lie inside `rng` to `buf`.
#[inline]
pub(crate) fn push_neighbors(p: Point, rng: Range, buf: &mut Vec<Point>) {
    for d in DIRECTIONS {
        let n = p + d;
        if rng.contains(n) {
            buf.push(n);
        }
    }
}

/// The up to eight on-board neighbors of `pos`.
pub fn neighbors(pos: Point) -> Vec<Point> {
    let mut buf = Vec::with_capacity(DIRECTIONS.len());
    push_neighbors(pos, BOARD, &mut buf);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three() {
        assert_eq!(
            neighbors(Point::new(1, 1)),
            vec![Point::new(2, 1), Point::new(1, 2), Point::new(2, 2)]
        );
        assert_eq!(neighbors(Point::new(8, 8)).len(), 3);
    }

    #[test]
    fn edge_has_five() {
        let ns = neighbors(Point::new(1, 4));
        assert_eq!(ns.len(), 5);
        assert!(ns.iter().all(|n| n.x >= 1));
    }

    #[test]
    fn interior_has_eight_in_fixed_order() {
        let p = Point::new(4, 5);
        let ns = neighbors(p);
        let expected: Vec<_> = DIRECTIONS.iter().map(|&d| p + d).collect();
        assert_eq!(ns, expected);
    }

    #[test]
    fn neighbors_are_adjacent_and_on_board() {
        for p in BOARD {
            for n in neighbors(p) {
                assert!(p.is_adjacent(n));
                assert!(BOARD.contains(n));
            }
        }
    }
}
