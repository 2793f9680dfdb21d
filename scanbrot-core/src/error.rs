//! Construction-time error types.
//!
//! Nothing in the clocked path can fail; these only surface while building
//! values and loading design parameters.

use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum FixedError {
    #[error("value is not finite")]
    NotFinite,

    #[error("{0} is outside the Q4.31 range [-8, 8)")]
    OutOfRange(f64),

    #[error("raw value {0:#x} does not fit in 35 signed bits")]
    RawOutOfRange(i64),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("pipeline needs at least one physical stage")]
    ZeroStages,

    #[error("multiplex factor must be at least 1")]
    ZeroMultiplex,

    #[error("multiplex factor {multiplex} exceeds the unit phase capacity {capacity}")]
    MultiplexExceedsCapacity { multiplex: u32, capacity: u32 },

    #[error("phase capacity {0} is larger than the supported maximum {1}")]
    CapacityTooLarge(u32, u32),

    #[error("{requested} dedicated multipliers requested, a unit only has {available}")]
    TooManyDedicatedMultipliers { requested: u32, available: u32 },

    #[error("pipeline depth {stages} x {multiplex} does not fit the iteration counter")]
    DepthTooLarge { stages: u32, multiplex: u32 },

    #[error("invalid video mode: {0}")]
    InvalidVideoMode(&'static str),

    #[error("invalid fixed-point parameter: {0}")]
    Fixed(#[from] FixedError),

    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}
