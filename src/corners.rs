//! Selection of the extreme points that seed the hull.

use glam::DVec2;

use crate::predicates::orient2d;

/// Finds the indices of the points with minimum `x`, maximum `y`, maximum `x` and minimum `y`,
/// in that order, among the points referenced by `indices`.
///
/// When several points share an extreme coordinate, the first one in `indices` is kept.
///
/// Returns `None` if `indices` is empty.
pub fn find_corners(points: &[DVec2], indices: &[usize]) -> Option<[usize; 4]> {
    let (first, rest) = indices.split_first()?;

    let mut corners = [*first; 4];
    for &i in rest {
        let point = points[i];
        if point.x < points[corners[0]].x {
            corners[0] = i;
        }
        if point.y > points[corners[1]].y {
            corners[1] = i;
        }
        if point.x > points[corners[2]].x {
            corners[2] = i;
        }
        if point.y < points[corners[3]].y {
            corners[3] = i;
        }
    }

    Some(corners)
}

/// Removes repeated corners, keeping the first occurrence of each.
pub fn dedup_corners(corners: [usize; 4]) -> Vec<usize> {
    let mut unique = Vec::with_capacity(4);
    for corner in corners {
        if !unique.contains(&corner) {
            unique.push(corner);
        }
    }
    unique
}

/// Computes the initial simplex of the hull: the distinct extreme points of `indices`,
/// ordered clockwise.
///
/// A corner lying strictly inside the segment between its two neighbors adds nothing to the
/// simplex and is dropped, so a collinear point set always reduces to its two endpoints.
///
/// Returns `None` if `indices` is empty.
pub fn simplex_corners(points: &[DVec2], indices: &[usize]) -> Option<Vec<usize>> {
    let mut corners = dedup_corners(find_corners(points, indices)?);

    while corners.len() > 2 {
        let n = corners.len();
        let redundant = (0..n).find(|&i| {
            let prev = points[corners[(i + n - 1) % n]];
            let current = points[corners[i]];
            let next = points[corners[(i + 1) % n]];
            // Collinear endpoints of the run point away from each other, so only a corner
            // passed through on the way from `prev` to `next` is redundant.
            orient2d(prev, current, next) == 0.0 && (current - prev).dot(next - current) > 0.0
        });

        match redundant {
            Some(i) => {
                log::trace!("dropping collinear simplex corner {}", corners[i]);
                corners.remove(i);
            }
            None => break,
        }
    }

    Some(corners)
}
