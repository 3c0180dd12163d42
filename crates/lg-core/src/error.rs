use thiserror::Error;

pub type LgResult<T> = Result<T, LgError>;

#[derive(Error, Debug)]
pub enum LgError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
