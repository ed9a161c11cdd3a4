use thiserror::Error;

/// Invalid sweep configuration. Raised before any χ is evaluated; a failed
/// validation produces no partial rows in either result table.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("degree of polymerisation n_a must be positive and finite, got {0}")]
    InvalidChainLengthA(f64),

    #[error("degree of polymerisation n_b must be positive and finite, got {0}")]
    InvalidChainLengthB(f64),

    #[error("chi step must be positive and finite, got {0}")]
    InvalidChiStep(f64),

    #[error("chi range bounds must be finite, got start {start}, end {end}")]
    NonFiniteChiRange { start: f64, end: f64 },

    #[error("empty chi sweep: start {start} is greater than end {end}")]
    EmptyChiSweep { start: f64, end: f64 },

    #[error("composition grid needs at least 3 points (one interior), got {0}")]
    GridTooSmall(usize),
}
