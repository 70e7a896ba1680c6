use std::result;

use read_fonts::ReadError;
use write_fonts::{BuilderError, error};

/// Error types for font-line-height.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse font: {0}")]
    Parse(#[from] ReadError),

    #[error("failed to build font: {0}")]
    Build(#[from] BuilderError),

    #[error("failed to write table: {0}")]
    Write(#[from] error::Error),

    #[error("metric value {0} does not fit its table field")]
    MetricRange(i32),
}

pub type Result<T> = result::Result<T, Error>;
