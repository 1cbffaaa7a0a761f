use thiserror::Error;

use super::types::VehicleKind;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("distance must be non-negative, got {0} km")]
    InvalidDistance(i64),

    #[error("trip duration must be non-negative, got {0} ms")]
    InvalidDuration(i64),

    #[error("time scale must be a finite non-negative number, got {0}")]
    InvalidTimeScale(f64),

    #[error("cargo weight must be non-negative, got {0} kg")]
    InvalidWeight(i64),

    #[error("{operation} is not supported by a {kind}")]
    UnsupportedOperation {
        operation: &'static str,
        kind: VehicleKind,
    },
}

pub type SimResult<T> = Result<T, SimError>;
