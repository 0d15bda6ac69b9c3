pub mod distance;
pub mod dss;
