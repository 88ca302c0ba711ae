pub mod dimensions;
pub mod point;

pub use dimensions::{Dimensions, DimensionsIter};
pub use point::{Point, PointTy};
