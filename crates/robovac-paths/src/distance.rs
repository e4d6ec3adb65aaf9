use robovac_core::Point;

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Search heuristic: Chebyshev distance from `pos` to `goal`.
///
/// Never overestimates on a board where every king move costs at least
/// [`STANDARD_COST`](crate::STANDARD_COST). [`Board`](crate::Board) scales
/// this by its cost model's standard cost, and A* runs on that estimate.
#[inline]
pub fn heuristic(pos: Point, goal: Point) -> i32 {
    chebyshev(pos, goal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chebyshev_takes_longest_axis() {
        assert_eq!(chebyshev(Point::new(1, 1), Point::new(8, 8)), 7);
        assert_eq!(chebyshev(Point::new(1, 1), Point::new(3, 1)), 2);
        assert_eq!(chebyshev(Point::new(5, 2), Point::new(2, 3)), 3);
        assert_eq!(chebyshev(Point::new(4, 4), Point::new(4, 4)), 0);
    }

    #[test]
    fn heuristic_is_symmetric() {
        let a = Point::new(2, 7);
        let b = Point::new(6, 1);
        assert_eq!(heuristic(a, b), heuristic(b, a));
        assert_eq!(heuristic(a, b), 6);
    }
}
