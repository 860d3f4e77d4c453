use glam::DVec2;

use crate::corners::simplex_corners;
use crate::error::ConvexHull2dError;
use crate::extend::{ExtendStep, Extender};
use crate::observer::HullObserver;
use crate::partition::{outside_line, outside_triangle};
use crate::predicates::orient2d;

/// A 2D [convex hull] representing the smallest convex set containing
/// all input points in a given point set.
///
/// The hull keeps the input points unchanged and describes its boundary as indices into them,
/// in clockwise order and without repeating the first index at the end.
///
/// [convex hull]: https://en.wikipedia.org/wiki/Convex_hull
///
/// # Example
///
/// ```
/// use quickhull2d::ConvexHull2d;
/// use glam::DVec2;
///
/// let points = vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(4.0, 0.0),
///     DVec2::new(4.0, 4.0),
///     DVec2::new(0.0, 4.0),
///     DVec2::new(2.0, 2.0),
/// ];
///
/// // Create the convex hull.
/// let hull = ConvexHull2d::from_points(&points).unwrap();
///
/// // Get the indices of the hull points in clockwise order.
/// assert_eq!(hull.indices(), &[0, 3, 2, 1]);
///
/// assert_eq!(
///     hull.vertices().collect::<Vec<_>>(),
///     vec![
///         DVec2::new(0.0, 0.0),
///         DVec2::new(0.0, 4.0),
///         DVec2::new(4.0, 4.0),
///         DVec2::new(4.0, 0.0),
///     ],
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvexHull2d {
    points: Vec<DVec2>,
    indices: Vec<usize>,
}

impl ConvexHull2d {
    /// Computes a [`ConvexHull2d`] for the given set of 2D points.
    ///
    /// This allocates a new vector for the points. To avoid this allocation,
    /// consider using [`from_vec`](Self::from_vec).
    ///
    /// # Errors
    ///
    /// Returns a [`ConvexHull2dError`] if `points` is empty or contains non-finite coordinates.
    #[inline]
    pub fn from_points(points: &[DVec2]) -> Result<Self, ConvexHull2dError> {
        Self::from_vec(points.to_vec())
    }

    /// Computes a [`ConvexHull2d`] for the given vector of 2D points, taking ownership of it.
    ///
    /// # Errors
    ///
    /// Returns a [`ConvexHull2dError`] if `points` is empty or contains non-finite coordinates.
    pub fn from_vec(points: Vec<DVec2>) -> Result<Self, ConvexHull2dError> {
        let indices = quickhull(&points)?;
        Ok(Self { points, indices })
    }

    /// Computes a [`ConvexHull2d`] for the given set of 2D points, reporting every
    /// intermediate stage of the construction to `observer`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConvexHull2dError`] if `points` is empty or contains non-finite coordinates.
    pub fn from_points_observed<O>(
        points: &[DVec2],
        observer: &mut O,
    ) -> Result<Self, ConvexHull2dError>
    where
        O: HullObserver + ?Sized,
    {
        let mut extender = seed(points)?;

        let mut snapshot = Vec::new();
        extender.write_partial_hull(&mut snapshot);
        observer.on_simplex(&snapshot);

        while let Some(step) = extender.step() {
            if let ExtendStep::Split { .. } = step {
                extender.write_partial_hull(&mut snapshot);
                observer.on_simplex(&snapshot);
            }
        }

        Ok(Self {
            points: points.to_vec(),
            indices: extender.into_confirmed(),
        })
    }

    /// Returns a lazy iterator over the intermediate stages of the hull construction
    /// for the given points.
    ///
    /// See [`HullSteps`] for the snapshots it yields.
    ///
    /// # Errors
    ///
    /// Returns a [`ConvexHull2dError`] if `points` is empty or contains non-finite coordinates.
    #[inline]
    pub fn steps(points: &[DVec2]) -> Result<HullSteps<'_>, ConvexHull2dError> {
        Ok(HullSteps {
            extender: seed(points)?,
            state: StepsState::Simplex,
        })
    }

    /// Returns a reference to the input points, in their original order.
    #[inline]
    pub fn points_ref(&self) -> &[DVec2] {
        &self.points
    }

    /// Returns the indices of the hull vertices in clockwise order.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the indices of the hull vertices in clockwise order,
    /// with the first index repeated at the end.
    pub fn closed_indices(&self) -> Vec<usize> {
        let mut closed = Vec::with_capacity(self.indices.len() + 1);
        closed.extend_from_slice(&self.indices);
        closed.extend(self.indices.first());
        closed
    }

    /// Returns an iterator over the hull vertices in clockwise order.
    #[inline]
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = DVec2> + '_ {
        self.indices.iter().map(|&i| self.points[i])
    }

    /// Returns `true` if the hull has fewer than three vertices,
    /// meaning the input points are all equal or all collinear.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.indices.len() < 3
    }

    /// Returns `true` if `point` lies inside the hull or on its boundary.
    pub fn contains(&self, point: DVec2) -> bool {
        match self.indices.as_slice() {
            [] => false,
            [a] => self.points[*a] == point,
            [a, b] => {
                let (a, b) = (self.points[*a], self.points[*b]);
                orient2d(a, b, point) == 0.0
                    && point.cmpge(a.min(b)).all()
                    && point.cmple(a.max(b)).all()
            }
            indices => {
                // The boundary is clockwise, so no point of the hull lies to the left of an edge.
                let n = indices.len();
                (0..n).all(|i| {
                    let a = self.points[indices[i]];
                    let b = self.points[indices[(i + 1) % n]];
                    orient2d(a, b, point) <= 0.0
                })
            }
        }
    }

    /// Returns the input points and the hull indices, consuming the hull.
    #[inline]
    pub fn into_parts(self) -> (Vec<DVec2>, Vec<usize>) {
        (self.points, self.indices)
    }
}

/// Computes the convex hull of `points` with the Quickhull algorithm.
///
/// Returns the indices of the hull vertices in clockwise order, without repeating the first
/// index at the end. If all points are equal, the hull is a single index; if they are all
/// collinear, it is the two endpoints of their segment.
///
/// The initial simplex is made of the first points found with minimum `x`, maximum `y`,
/// maximum `x` and minimum `y`. When an extreme coordinate is shared by several points on a hull
/// edge, the chosen one may lie in the middle of that edge and then stays on the hull as a
/// collinear vertex. For example, `[(0, 1), (0, 0), (0, 2), (3, 5), (6, 1), (2, -3)]` yields
/// `[0, 2, 3, 4, 5, 1]`, which passes straight through `(0, 1)`. Such hulls are still convex and
/// contain every point, but their turns are only clockwise or straight.
///
/// # Errors
///
/// Returns a [`ConvexHull2dError`] if `points` is empty or contains non-finite coordinates.
pub fn quickhull(points: &[DVec2]) -> Result<Vec<usize>, ConvexHull2dError> {
    let hull = seed(points)?.run();
    log::debug!(
        "computed convex hull of {} points with {} vertices",
        points.len(),
        hull.len()
    );
    Ok(hull)
}

/// Validates `points`, builds the initial simplex and prepares the extension of its edges.
fn seed(points: &[DVec2]) -> Result<Extender<'_>, ConvexHull2dError> {
    if points.is_empty() {
        return Err(ConvexHull2dError::Empty);
    }

    if let Some(index) = points.iter().position(|point| !point.is_finite()) {
        return Err(ConvexHull2dError::NonFinite { index });
    }

    let mut indices: Vec<usize> = (0..points.len()).collect();
    let corners = simplex_corners(points, &indices).ok_or(ConvexHull2dError::Empty)?;
    log::debug!("initial simplex corners: {corners:?}");

    // Remove the points inside the simplex. The two triangles cover the whole quadrilateral.
    if corners.len() > 2 {
        indices = outside_triangle(points, &indices, corners[0], corners[1], corners[2]);
    } else {
        log::debug!("degenerate input: all points are equal or collinear");
    }
    if corners.len() > 3 {
        indices = outside_triangle(points, &indices, corners[0], corners[2], corners[3]);
    }

    let n = corners.len();
    let edges = (0..n).map(|i| {
        let edge = (corners[i], corners[(i + 1) % n]);
        let candidates = outside_line(points, &indices, edge.0, edge.1);
        log::trace!("simplex edge {edge:?} has {} candidates", candidates.len());
        (edge, candidates)
    });

    Extender::new(points, edges).ok_or(ConvexHull2dError::Empty)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StepsState {
    Simplex,
    Extending,
    Done,
}

/// A lazy iterator over the intermediate stages of a hull construction,
/// created by [`ConvexHull2d::steps`].
///
/// Each item is a closed polygon of point indices in clockwise order, with the first index
/// repeated at the end. The first item is the initial simplex, followed by one item per split
/// of an edge at its furthest outside point, and finally the complete hull.
///
/// The iterator cannot be restarted; create a new one to replay the construction.
#[derive(Clone, Debug)]
pub struct HullSteps<'a> {
    extender: Extender<'a>,
    state: StepsState,
}

impl Iterator for HullSteps<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            StepsState::Simplex => {
                self.state = StepsState::Extending;
                Some(self.extender.partial_hull())
            }
            StepsState::Extending => {
                while let Some(step) = self.extender.step() {
                    if let ExtendStep::Split { .. } = step {
                        return Some(self.extender.partial_hull());
                    }
                }
                self.state = StepsState::Done;
                Some(self.extender.partial_hull())
            }
            StepsState::Done => None,
        }
    }
}

impl core::iter::FusedIterator for HullSteps<'_> {}
