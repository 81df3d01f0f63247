use thiserror::Error;

/// The only fallible operation in this subsystem is `set_config`;
/// evaluation and recording are total over well-typed input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("fee ordering violated: {0}")]
    InvalidFeeRange(String),

    #[error("threshold ordering violated: low {low} >= high {high}")]
    InvalidThresholdOrder { low: u16, high: u16 },

    #[error("fee out of bounds: {0} bps (must be in 1..=10000)")]
    FeeOutOfBounds(u16),
}
