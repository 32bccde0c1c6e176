//! Errors raised while validating truncator configuration.

use thiserror::Error;

/// Library result type.
pub type Result<T> = std::result::Result<T, TruncateError>;

/// Validation failures. Truncation itself never fails once the budget is valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TruncateError {
    /// A length was negative or above 2^53 - 1.
    #[error("`{value}` (parameter `{parameter}`) is not a non-negative safe integer")]
    InvalidLength { value: i64, parameter: &'static str },

    /// An ellipsis position string matched none of the known variants.
    #[error("`{value}` is not a valid ellipsis position; accepted values: end, middle, start")]
    InvalidPosition { value: String },

    /// The ellipsis mark alone does not fit in the maximum length.
    #[error("ellipsis string is too long ({ellipsis} > {maximum})")]
    EllipsisTooLong { ellipsis: usize, maximum: usize },
}
