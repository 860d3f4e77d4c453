//! Observation of the intermediate stages of hull construction.

/// Receives snapshots of the partial hull while a [`ConvexHull2d`](crate::ConvexHull2d)
/// is being built.
///
/// A snapshot is a closed polygon of point indices in clockwise order, with the first index
/// repeated at the end. The first snapshot is the initial simplex. Every following snapshot is
/// taken right after an edge has been split at its furthest outside point.
///
/// Observers have no influence on the resulting hull.
///
/// # Example
///
/// ```
/// use glam::DVec2;
/// use quickhull2d::ConvexHull2d;
///
/// let points = vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(4.0, 0.0),
///     DVec2::new(2.0, 3.0),
///     DVec2::new(2.0, -3.0),
///     DVec2::new(-1.0, 1.0),
/// ];
///
/// let mut snapshots = Vec::new();
/// let hull = ConvexHull2d::from_points_observed(&points, &mut |partial: &[usize]| {
///     snapshots.push(partial.to_vec());
/// })
/// .unwrap();
///
/// assert_eq!(snapshots.first().unwrap(), &[4, 2, 1, 3, 4]);
/// assert_eq!(snapshots.last().unwrap(), &hull.closed_indices());
/// ```
pub trait HullObserver {
    /// Called with the current partial hull.
    fn on_simplex(&mut self, partial_hull: &[usize]);
}

impl HullObserver for () {
    #[inline]
    fn on_simplex(&mut self, _partial_hull: &[usize]) {}
}

impl<F> HullObserver for F
where
    F: FnMut(&[usize]),
{
    #[inline]
    fn on_simplex(&mut self, partial_hull: &[usize]) {
        self(partial_hull)
    }
}
