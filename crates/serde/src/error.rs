use thiserror::Error;

/// The result type used when converting to or from [Values](vellum_core::Value)
pub type Result<T> = std::result::Result<T, Error>;

/// The error type used when converting to or from [Values](vellum_core::Value)
#[derive(Error, Debug)]
pub enum Error {
    /// A JSON number that can't be represented as an `i64` or `f64`
    #[error("number is out of range: {0}")]
    NumberOutOfRange(serde_json::Number),
}
