use std::path::PathBuf;

use thiserror::Error;

use crate::consts::EXIT_INVALID_RANGE;

/// Result type returned from functions that can have our `Error`s.
pub type Result<T, E = AdjbacklightError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AdjbacklightError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{}: {source}", .path.display())]
    DeviceFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    ParseInt {
        path: PathBuf,
        source: std::num::ParseIntError,
    },

    #[error("{0}")]
    InvalidRegex(#[from] regex::Error),

    #[error("Invalid brightness range: max {max} <= min {min}")]
    InvalidRange { min: i64, max: i64 },

    #[error("Step divisor must be at least 1, got {0}")]
    InvalidStepDivisor(i64),

    #[error("Invalid device name: {0:?}")]
    InvalidDevice(String),

    #[error("Invalid brightness level: {0:?}")]
    InvalidAdjustment(String),
}

impl AdjbacklightError {
    /// Process exit status for this error.
    ///
    /// A device reporting an unusable range gets its own status so scripts
    /// can tell it apart from I/O failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidRange { .. } => EXIT_INVALID_RANGE,
            _ => 1,
        }
    }
}
