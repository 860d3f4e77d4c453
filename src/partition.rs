//! Filters that narrow a subset of point indices.
//!
//! None of the filters mutate their input. Each returns a new subset that keeps the relative
//! order of the retained indices.

use glam::DVec2;

use crate::predicates::{is_clockwise_turn, point_in_triangle, signed_area};

/// Returns the indices of the points that lie outside the directed line `a -> b`,
/// that is, the points `p` for which `a -> p -> b` is a clockwise turn.
pub fn outside_line(points: &[DVec2], indices: &[usize], a: usize, b: usize) -> Vec<usize> {
    let (pa, pb) = (points[a], points[b]);
    indices
        .iter()
        .copied()
        .filter(|&i| is_clockwise_turn(pa, points[i], pb))
        .collect()
}

/// Returns the indices of the points that are neither inside the triangle `t1, t2, t3`
/// nor on its boundary.
pub fn outside_triangle(
    points: &[DVec2],
    indices: &[usize],
    t1: usize,
    t2: usize,
    t3: usize,
) -> Vec<usize> {
    let (p1, p2, p3) = (points[t1], points[t2], points[t3]);
    indices
        .iter()
        .copied()
        .filter(|&i| !point_in_triangle(points[i], p1, p2, p3))
        .collect()
}

/// Returns the indices of the points strictly on the outer side of the directed edge `a -> b`,
/// measured by a positive signed area of the triangle `p, a, b`.
pub fn outside_edge(points: &[DVec2], indices: &[usize], a: usize, b: usize) -> Vec<usize> {
    let (pa, pb) = (points[a], points[b]);
    indices
        .iter()
        .copied()
        .filter(|&i| signed_area(points[i], pa, pb) > 0.0)
        .collect()
}
