//! Core error types

use thiserror::Error;

/// Errors raised by the parameter model and cascade engine
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid {what} '{value}', valid options are: {valid}")]
    InvalidArgument {
        what: &'static str,
        value: String,
        valid: String,
    },

    #[error("parameter '{name}' already exists on component '{component}'")]
    DuplicateParameter { name: String, component: String },

    #[error("parameter '{name}' has {freqs} frequencies but {values} values")]
    LengthMismatch {
        name: String,
        freqs: usize,
        values: usize,
    },

    #[error("parameter '{name}' has no frequency samples")]
    EmptyCurve { name: String },

    #[error("component '{component}' has no parameter '{name}'")]
    UnknownParameter { name: String, component: String },

    #[error("parameter key '{key}' does not match its declared name '{name}'")]
    ParameterKeyMismatch { key: String, name: String },

    #[error("no component data recorded for uid '{uid}'")]
    UnknownComponent { uid: String },

    #[error("a mean value is required for normal tolerance distributions")]
    MeanRequired,

    #[error("tolerance limits are inverted: lower {lower} > upper {upper}")]
    InvertedLimits { lower: f64, upper: f64 },

    #[error("tolerance std_dev_count must be at least 1 (got {0})")]
    BadStdDevCount(u32),

    #[error(
        "tolerance sampling gave up after {attempts} draws outside limits [{lower}, {upper}]"
    )]
    SamplingExhausted {
        attempts: u32,
        lower: f64,
        upper: f64,
    },
}
