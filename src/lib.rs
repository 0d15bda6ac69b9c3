//! Digital geometry on integer lattices: online recognition of digital straight segments and
//! separable distance transformation of digital images.

pub mod cursor;
pub mod error;
pub mod integer;
pub mod point;

#[cfg(feature = "dss")]
pub mod dss;
#[cfg(feature = "volumetric")]
pub mod volumetric;

pub use self::cursor::{Cursor, Plane, Projected, ReverseCursor, SliceCursor};
pub use self::error::Error;
pub use self::integer::{Bound, Integer, Sign};
pub use self::point::{Point, Point2, Point3};
