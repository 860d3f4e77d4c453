use thiserror::Error;

/// An error returned during [`ConvexHull2d`](crate::ConvexHull2d) construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvexHull2dError {
    /// The given point set is empty, so no convex hull could be computed.
    #[error("cannot compute the convex hull of an empty point set")]
    Empty,
    /// A point has a coordinate that is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFinite {
        /// The index of the offending point.
        index: usize,
    },
}
