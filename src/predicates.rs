//! Orientation predicates used by the hull construction.

use glam::DVec2;

/// The number of decimal digits the turn value of [`is_clockwise_turn`] is rounded to
/// before it is compared against zero.
///
/// Turns whose magnitude rounds away at this precision are classified as "not clockwise",
/// so near-collinear points are treated as lying on the line.
pub const TURN_PRECISION_DIGITS: i32 = 4;

/// Gives the orientation of the triangle formed by `a`, `b`, `c`.
///
/// - `orientation > 0`: counterclockwise
/// - `orientation < 0`: clockwise
/// - `orientation == 0`: collinear
///
/// The magnitude is twice the area of the triangle.
#[inline]
pub(crate) fn orient2d(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    use robust::Coord;
    robust::orient2d(
        Coord { x: a.x, y: a.y },
        Coord { x: b.x, y: b.y },
        Coord { x: c.x, y: c.y },
    )
}

/// Returns the signed area of the triangle `p1, p2, p3`.
///
/// Positive for counterclockwise winding, negative for clockwise winding
/// and zero if the points are collinear.
#[inline]
pub fn signed_area(p1: DVec2, p2: DVec2, p3: DVec2) -> f64 {
    orient2d(p1, p2, p3) / 2.0
}

/// Rounds `value` to [`TURN_PRECISION_DIGITS`] decimal digits, resolving ties to even.
#[inline]
pub fn round_to_precision(value: f64) -> f64 {
    let scale = 10f64.powi(TURN_PRECISION_DIGITS);
    (value * scale).round_ties_even() / scale
}

/// Returns `true` if the path `p1 -> p2 -> p3` turns clockwise at `p2`.
///
/// The turn is rounded with [`round_to_precision`] first, so turns smaller than
/// half a unit in the last kept digit count as collinear.
#[inline]
pub fn is_clockwise_turn(p1: DVec2, p2: DVec2, p3: DVec2) -> bool {
    let turn = (p2 - p1).perp_dot(p3 - p2);
    round_to_precision(turn) < 0.0
}

/// Returns `true` if `p` lies inside the triangle `t1, t2, t3` or on its boundary.
///
/// Works for either winding of the triangle.
#[inline]
pub fn point_in_triangle(p: DVec2, t1: DVec2, t2: DVec2, t3: DVec2) -> bool {
    let signs = [orient2d(p, t1, t2), orient2d(p, t2, t3), orient2d(p, t3, t1)];

    let negative = signs.iter().any(|&s| s < 0.0);
    let positive = signs.iter().any(|&s| s > 0.0);
    !(negative && positive)
}

#[cfg(test)]
mod test {
    use glam::dvec2;

    use super::*;

    #[test]
    fn signed_area_sign_follows_winding() {
        let a = dvec2(0.0, 0.0);
        let b = dvec2(4.0, 0.0);
        let c = dvec2(0.0, 3.0);
        assert_eq!(signed_area(a, b, c), 6.0);
        assert_eq!(signed_area(a, c, b), -6.0);
        assert_eq!(signed_area(a, b, dvec2(8.0, 0.0)), 0.0);
    }

    #[test]
    fn clockwise_turns() {
        let a = dvec2(0.0, 0.0);
        let b = dvec2(1.0, 1.0);
        assert!(is_clockwise_turn(a, b, dvec2(2.0, 0.0)));
        assert!(!is_clockwise_turn(a, b, dvec2(0.0, 2.0)));
        assert!(!is_clockwise_turn(a, b, dvec2(2.0, 2.0)));
    }

    #[test]
    fn near_collinear_turn_is_rounded_away() {
        let a = dvec2(0.0, 0.0);
        let b = dvec2(1.0, 0.0);
        // Turn value of -0.00001 rounds to zero at four digits.
        assert!(!is_clockwise_turn(a, b, dvec2(2.0, -0.00001)));
        // Turn value of -0.001 survives the rounding.
        assert!(is_clockwise_turn(a, b, dvec2(2.0, -0.001)));
    }

    #[test]
    fn rounding_precision() {
        assert_eq!(round_to_precision(1.23456), 1.2346);
        assert_eq!(round_to_precision(-0.00004), 0.0);
        assert_eq!(round_to_precision(-0.0002), -0.0002);
    }

    #[test]
    fn point_in_triangle_is_boundary_inclusive() {
        let t1 = dvec2(0.0, 0.0);
        let t2 = dvec2(4.0, 0.0);
        let t3 = dvec2(0.0, 4.0);

        assert!(point_in_triangle(dvec2(1.0, 1.0), t1, t2, t3));
        assert!(point_in_triangle(dvec2(2.0, 0.0), t1, t2, t3));
        assert!(point_in_triangle(dvec2(2.0, 2.0), t1, t2, t3));
        assert!(point_in_triangle(t3, t1, t2, t3));
        assert!(!point_in_triangle(dvec2(3.0, 3.0), t1, t2, t3));
        assert!(!point_in_triangle(dvec2(-0.5, 1.0), t1, t2, t3));

        // Winding of the triangle does not matter.
        assert!(point_in_triangle(dvec2(1.0, 1.0), t1, t3, t2));
        assert!(!point_in_triangle(dvec2(3.0, 3.0), t1, t3, t2));
    }
}
