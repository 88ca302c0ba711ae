//! Fixed-size 2D grids and the integer points that address them.
//!
//! [`Grid`] owns row-major `Option<T>` cells, all empty at construction.
//! [`Point`] is a plain coordinate value that can be translated and tested
//! against a grid with [`Point::within`].

pub mod error;
pub mod grid;
pub mod math;

pub use error::{Axis, GridError};
pub use grid::Grid;
pub use math::{Dimensions, Point, PointTy};
