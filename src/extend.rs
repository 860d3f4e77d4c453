//! Extension of hull edges towards their furthest outside points.
//!
//! Each edge `a -> b` with points outside of it is split at the furthest such point `f` into
//! the edges `a -> f` and `f -> b`, after discarding everything inside the triangle `a, f, b`.
//! An edge with nothing outside of it is a confirmed hull edge.
//!
//! The splitting is driven by an explicit stack of pending edges instead of recursion, so
//! unbalanced inputs (such as points that are nearly collinear) cannot overflow the call stack.
//! Pending edges are processed depth-first with the left edge first, which confirms hull edges
//! in boundary order.

use glam::DVec2;

use crate::partition::{outside_edge, outside_triangle};
use crate::predicates::signed_area;

/// An edge waiting to be extended, along with the points that may lie outside of it.
#[derive(Clone, Debug)]
struct PendingEdge {
    edge: (usize, usize),
    candidates: Vec<usize>,
}

/// The outcome of a single [`Extender::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtendStep {
    /// Nothing lies outside the edge, so it is part of the hull.
    Confirmed {
        /// The confirmed edge.
        edge: (usize, usize),
    },
    /// The edge was split at its furthest outside point, forming the triangle
    /// `edge.0, furthest, edge.1`.
    Split {
        /// The edge that was split.
        edge: (usize, usize),
        /// The index of the point furthest outside of the edge.
        furthest: usize,
    },
}

/// Incremental driver for the edge extension of a chain of directed edges.
///
/// The chain is given in boundary order and must be connected, with each edge starting where
/// the previous one ends. Every confirmed edge contributes its start point to the output, so a
/// closed chain produces a closed polygon without repeated vertices.
#[derive(Clone, Debug)]
pub struct Extender<'a> {
    points: &'a [DVec2],
    /// Edges still to be processed. The top of the stack is the next edge along the boundary.
    pending: Vec<PendingEdge>,
    /// Start points of the confirmed edges, in boundary order.
    confirmed: Vec<usize>,
    /// The end point of the last edge of the chain.
    last: usize,
}

impl<'a> Extender<'a> {
    /// Creates an extender for the given chain of edges and their candidate points.
    ///
    /// Returns `None` if `edges` is empty.
    pub fn new(
        points: &'a [DVec2],
        edges: impl IntoIterator<Item = ((usize, usize), Vec<usize>)>,
    ) -> Option<Self> {
        let mut pending: Vec<PendingEdge> = edges
            .into_iter()
            .map(|(edge, candidates)| PendingEdge { edge, candidates })
            .collect();
        let last = pending.last()?.edge.1;
        pending.reverse();

        Some(Self {
            points,
            pending,
            confirmed: Vec::new(),
            last,
        })
    }

    /// Processes the next pending edge.
    ///
    /// Returns `None` once every edge has been confirmed.
    pub fn step(&mut self) -> Option<ExtendStep> {
        let PendingEdge {
            edge: (a, b),
            candidates,
        } = self.pending.pop()?;

        let outside = outside_edge(self.points, &candidates, a, b);

        let Some(furthest) = furthest_point(self.points, &outside, a, b) else {
            self.confirmed.push(a);
            return Some(ExtendStep::Confirmed { edge: (a, b) });
        };

        log::trace!(
            "splitting edge ({a}, {b}) at {furthest} with {} outside points",
            outside.len()
        );

        // Both halves share the points outside of the new triangle.
        let remaining = outside_triangle(self.points, &outside, a, furthest, b);
        self.pending.push(PendingEdge {
            edge: (furthest, b),
            candidates: remaining.clone(),
        });
        self.pending.push(PendingEdge {
            edge: (a, furthest),
            candidates: remaining,
        });

        Some(ExtendStep::Split {
            edge: (a, b),
            furthest,
        })
    }

    /// Returns `true` if every edge has been confirmed.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }

    /// Writes the current partial hull to `buffer`, replacing its contents.
    ///
    /// The partial hull consists of the confirmed vertices, followed by the start points of the
    /// pending edges in boundary order, followed by the end point of the chain. For a closed
    /// chain, this is the current polygon with its first vertex repeated at the end.
    pub fn write_partial_hull(&self, buffer: &mut Vec<usize>) {
        buffer.clear();
        buffer.extend_from_slice(&self.confirmed);
        buffer.extend(self.pending.iter().rev().map(|pending| pending.edge.0));
        buffer.push(self.last);
    }

    /// Returns the current partial hull. See [`write_partial_hull`](Self::write_partial_hull).
    pub fn partial_hull(&self) -> Vec<usize> {
        let mut buffer = Vec::with_capacity(self.confirmed.len() + self.pending.len() + 1);
        self.write_partial_hull(&mut buffer);
        buffer
    }

    /// Processes all pending edges and returns the start points of the confirmed edges,
    /// in boundary order.
    pub fn run(mut self) -> Vec<usize> {
        while self.step().is_some() {}
        self.confirmed
    }

    /// Returns the start points of the edges confirmed so far, consuming the extender.
    #[inline]
    pub fn into_confirmed(self) -> Vec<usize> {
        self.confirmed
    }
}

/// Extends the directed edge `a -> b` with the points of `candidates` that lie outside of it.
///
/// Returns the resulting chain of hull vertices from `a` to `b`, both included.
pub fn extend(points: &[DVec2], edge: (usize, usize), candidates: Vec<usize>) -> Vec<usize> {
    let extender = Extender {
        points,
        pending: vec![PendingEdge { edge, candidates }],
        confirmed: Vec::new(),
        last: edge.1,
    };

    let mut chain = extender.run();
    chain.push(edge.1);
    chain
}

/// Finds the point of `indices` with the largest signed area relative to the edge `a -> b`.
///
/// Among points with equal area, the first one in `indices` wins.
fn furthest_point(points: &[DVec2], indices: &[usize], a: usize, b: usize) -> Option<usize> {
    let (pa, pb) = (points[a], points[b]);
    let mut best: Option<(usize, f64)> = None;

    for &i in indices {
        let area = signed_area(points[i], pa, pb);
        if best.map_or(true, |(_, best_area)| area > best_area) {
            best = Some((i, area));
        }
    }

    best.map(|(i, _)| i)
}

#[cfg(test)]
mod test {
    use glam::dvec2;

    use super::*;

    #[test]
    fn edge_without_outside_points() {
        let points = vec![dvec2(0.0, 0.0), dvec2(4.0, 0.0), dvec2(2.0, -1.0)];
        assert_eq!(extend(&points, (0, 1), vec![2]), vec![0, 1]);
        assert_eq!(extend(&points, (0, 1), vec![]), vec![0, 1]);
    }

    #[test]
    fn single_outside_point() {
        // (2, 1) lies to the left of (0, 0) -> (4, 0), the outer side of a clockwise boundary.
        let points = vec![dvec2(4.0, 0.0), dvec2(0.0, 0.0), dvec2(2.0, 1.0)];
        assert_eq!(extend(&points, (1, 0), vec![2]), vec![1, 2, 0]);
    }

    #[test]
    fn arc_is_extended_in_order() {
        // Points on the upper half of a circle, travelling clockwise from the left.
        let points: Vec<DVec2> = (0..=8)
            .map(|i| {
                let angle = std::f64::consts::PI * (1.0 - i as f64 / 8.0);
                dvec2(angle.cos(), angle.sin()) * 10.0
            })
            .collect();
        let interior = vec![dvec2(0.0, 1.0), dvec2(-2.0, 3.0)];
        let all: Vec<DVec2> = points.iter().chain(&interior).copied().collect();

        let candidates: Vec<usize> = (1..all.len()).filter(|&i| i != 8).collect();
        let chain = extend(&all, (0, 8), candidates);
        assert_eq!(chain, (0..=8).collect::<Vec<_>>());
    }

    #[test]
    fn furthest_point_ties_keep_first() {
        let points = vec![
            dvec2(0.0, 0.0),
            dvec2(4.0, 0.0),
            dvec2(1.0, 2.0),
            dvec2(3.0, 2.0),
        ];
        assert_eq!(furthest_point(&points, &[2, 3], 0, 1), Some(2));
        assert_eq!(furthest_point(&points, &[3, 2], 0, 1), Some(3));
        assert_eq!(furthest_point(&points, &[], 0, 1), None);
    }

    #[test]
    fn steps_and_partial_hulls() {
        let points = vec![
            dvec2(0.0, 0.0),
            dvec2(4.0, 0.0),
            dvec2(2.0, 3.0),
            dvec2(2.0, 1.0),
        ];
        let mut extender = Extender::new(&points, [((0, 1), vec![2, 3])]).unwrap();
        assert_eq!(extender.partial_hull(), vec![0, 1]);

        // (2, 1) is inside the triangle formed by the split and never becomes a candidate again.
        assert_eq!(
            extender.step(),
            Some(ExtendStep::Split {
                edge: (0, 1),
                furthest: 2
            })
        );
        assert_eq!(extender.partial_hull(), vec![0, 2, 1]);

        assert_eq!(extender.step(), Some(ExtendStep::Confirmed { edge: (0, 2) }));
        assert_eq!(extender.step(), Some(ExtendStep::Confirmed { edge: (2, 1) }));
        assert!(extender.is_done());
        assert_eq!(extender.step(), None);
        assert_eq!(extender.partial_hull(), vec![0, 2, 1]);
        assert_eq!(extender.into_confirmed(), vec![0, 2]);
    }

    #[test]
    fn empty_chain() {
        let points = vec![dvec2(0.0, 0.0)];
        let edges: Vec<((usize, usize), Vec<usize>)> = Vec::new();
        assert!(Extender::new(&points, edges).is_none());
    }
}
