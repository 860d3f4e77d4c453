//! # Quickhull 2D
//!
//! A Rust implementation of the Quickhull algorithm for computing convex hulls of 2D point sets.
//!
//! The hull is seeded with the extreme points of the set along both axes. Points inside this
//! initial simplex are discarded, and every simplex edge is then pushed outwards to its furthest
//! outside point until no points remain outside of any edge.
//!
//! Hulls are described by indices into the input points, in clockwise order. The intermediate
//! stages of the construction can be observed with a [`HullObserver`] or iterated lazily with
//! [`HullSteps`], for example to animate the algorithm.
//!
//! ## References
//!
//! - C. Bradford Barber et al. 1996. [The Quickhull Algorithm for Convex Hulls](https://www.cise.ufl.edu/~ungor/courses/fall06/papers/QuickHull.pdf) (the original paper)
//! - Dirk Gregorius. GDC 2014. [Physics for Game Programmers: Implementing Quickhull](https://archive.org/details/GDC2014Gregorius)

#![warn(missing_docs)]

pub mod corners;
mod error;
pub mod extend;
mod hull;
mod observer;
pub mod partition;
pub mod predicates;

pub use error::ConvexHull2dError;
pub use hull::{quickhull, ConvexHull2d, HullSteps};
pub use observer::HullObserver;
pub use predicates::TURN_PRECISION_DIGITS;
