use thiserror::Error;

/// Errors that can occur when building or querying digital domains and images.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("empty domain: lower bound {lower} exceeds upper bound {upper} on axis {axis}")]
    EmptyDomain { axis: usize, lower: i64, upper: i64 },

    #[error("domain overflow: the box from {lower} to {upper} holds more points than addressable")]
    DomainOverflow { lower: String, upper: String },

    #[error("point {0} out of domain")]
    OutOfDomain(String),

    #[error("size mismatch: domain holds {domain} points, got {values} values")]
    SizeMismatch { domain: usize, values: usize },

    #[error("output overflow: distances of exponent {exponent} do not fit in {digits} bits")]
    OutputOverflow { exponent: u32, digits: u32 },
}
