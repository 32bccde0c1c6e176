//! Length validation and the per-call left/right budget.

use crate::error::{Result, TruncateError};
use crate::options::EllipsisPosition;

/// Largest integer a caller may pass as a length (2^53 - 1).
pub const MAX_SAFE_LENGTH: i64 = (1 << 53) - 1;

/// How much content may be kept on each side of the ellipsis mark.
///
/// `total` is the maximum length minus the ellipsis mark. For
/// [`EllipsisPosition::Middle`] each side gets `total / 2`; an odd unit is
/// left unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBudget {
    pub left: usize,
    pub right: usize,
    pub total: usize,
}

impl LengthBudget {
    /// Divide `total` between the sides according to `position`.
    pub fn split(total: usize, position: EllipsisPosition) -> Self {
        let (left, right) = match position {
            EllipsisPosition::End => (total, 0),
            EllipsisPosition::Start => (0, total),
            EllipsisPosition::Middle => (total / 2, total / 2),
        };
        Self { left, right, total }
    }
}

/// Validate a caller-supplied length against the ellipsis mark length.
pub(crate) fn check_length(
    value: i64,
    parameter: &'static str,
    ellipsis_len: usize,
) -> Result<usize> {
    if !(0..=MAX_SAFE_LENGTH).contains(&value) {
        return Err(TruncateError::InvalidLength { value, parameter });
    }
    let maximum = usize::try_from(value)
        .map_err(|_| TruncateError::InvalidLength { value, parameter })?;
    if ellipsis_len > maximum {
        return Err(TruncateError::EllipsisTooLong {
            ellipsis: ellipsis_len,
            maximum,
        });
    }
    Ok(maximum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_end() {
        assert_eq!(
            LengthBudget::split(5, EllipsisPosition::End),
            LengthBudget { left: 5, right: 0, total: 5 }
        );
    }

    #[test]
    fn split_start() {
        assert_eq!(
            LengthBudget::split(5, EllipsisPosition::Start),
            LengthBudget { left: 0, right: 5, total: 5 }
        );
    }

    #[test]
    fn split_middle_drops_odd_unit() {
        assert_eq!(
            LengthBudget::split(5, EllipsisPosition::Middle),
            LengthBudget { left: 2, right: 2, total: 5 }
        );
    }

    #[test]
    fn negative_length_rejected() {
        assert_eq!(
            check_length(-1, "maximum_length", 3),
            Err(TruncateError::InvalidLength {
                value: -1,
                parameter: "maximum_length"
            })
        );
    }

    #[test]
    fn unsafe_length_rejected() {
        assert!(matches!(
            check_length(MAX_SAFE_LENGTH + 1, "maximum_length", 0),
            Err(TruncateError::InvalidLength { .. })
        ));
        assert_eq!(check_length(MAX_SAFE_LENGTH, "maximum_length", 0).ok(), usize::try_from(MAX_SAFE_LENGTH).ok());
    }

    #[test]
    fn ellipsis_longer_than_length_rejected() {
        assert_eq!(
            check_length(5, "maximum_length", 6),
            Err(TruncateError::EllipsisTooLong { ellipsis: 6, maximum: 5 })
        );
    }

    #[test]
    fn ellipsis_equal_to_length_accepted() {
        assert_eq!(check_length(3, "maximum_length", 3), Ok(3));
    }
}
