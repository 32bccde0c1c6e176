//! The truncation algorithm.
//!
//! Segments are consumed in a single forward pass. The left side keeps
//! segments until the first one that would overflow `budget.left`. The right
//! side keeps a sliding window of trailing segments: after each push, leading
//! segments are popped until the window fits `budget.right`, so at the end it
//! holds the longest suffix of whole segments that fits. Neither side ever
//! splits a segment, and a side whose budget is zero stays empty. The pass
//! ends early once neither side can take more.

use std::borrow::Cow;
use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::budget::{LengthBudget, check_length};
use crate::error::Result;
use crate::measure::LengthMetric;
use crate::options::{EllipsisPosition, TruncateOptions};
use crate::segment::{Dissector, Segmenter};

/// Truncates strings to a maximum length without cutting through segments.
///
/// Configuration is fixed at construction; one instance can serve any number
/// of [`truncate`](Self::truncate) calls, including from several threads when
/// the segmenter is `Sync`.
///
/// ```
/// use spark_truncate::{EllipsisPosition, TruncateOptions, Truncator};
///
/// let truncator = Truncator::new(
///     16,
///     TruncateOptions::default().ellipsis_position(EllipsisPosition::Middle),
/// )?;
/// assert_eq!(truncator.truncate("alpha beta gamma delta"), "alpha...delta");
/// assert_eq!(truncator.truncate("short"), "short");
/// # Ok::<(), spark_truncate::TruncateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Truncator<S = Dissector> {
    segmenter: S,
    ellipsis_mark: String,
    ellipsis_len: usize,
    ellipsis_position: EllipsisPosition,
    metric: LengthMetric,
    maximum_length: usize,
}

impl Truncator<Dissector> {
    /// Build a truncator backed by the default [`Dissector`], configured from
    /// `options.segmentation`.
    pub fn new(maximum_length: i64, options: TruncateOptions) -> Result<Self> {
        let segmenter = Dissector::new(options.segmentation);
        Self::with_segmenter(maximum_length, options, segmenter)
    }
}

impl<S: Segmenter> Truncator<S> {
    /// Build a truncator around a custom segmenter.
    ///
    /// `options.segmentation` is ignored; `segmenter` is used as given.
    pub fn with_segmenter(
        maximum_length: i64,
        options: TruncateOptions,
        segmenter: S,
    ) -> Result<Self> {
        let TruncateOptions {
            ellipsis_mark,
            ellipsis_position,
            metric,
            ..
        } = options;

        let ellipsis_len = metric.measure(&ellipsis_mark);
        let maximum_length = check_length(maximum_length, "maximum_length", ellipsis_len)?;

        debug!(
            maximum_length,
            position = %ellipsis_position,
            ?metric,
            "truncator configured"
        );

        Ok(Self {
            segmenter,
            ellipsis_mark,
            ellipsis_len,
            ellipsis_position,
            metric,
            maximum_length,
        })
    }

    /// Configured maximum length, in units of [`metric`](Self::metric).
    pub fn maximum_length(&self) -> usize {
        self.maximum_length
    }

    /// Mark inserted at the truncation point.
    pub fn ellipsis_mark(&self) -> &str {
        &self.ellipsis_mark
    }

    /// Where the mark is placed.
    pub fn ellipsis_position(&self) -> EllipsisPosition {
        self.ellipsis_position
    }

    /// Unit used to measure the input, the mark, and every segment.
    pub fn metric(&self) -> LengthMetric {
        self.metric
    }

    /// The segmenter every call is routed through.
    pub fn segmenter(&self) -> &S {
        &self.segmenter
    }

    /// Resolve the budget for the stored maximum length or an override.
    pub fn budget(&self, maximum_length_override: Option<i64>) -> Result<LengthBudget> {
        let maximum = self.resolve_maximum(maximum_length_override)?;
        Ok(self.split(maximum))
    }

    /// Truncate `text` to the configured maximum length.
    ///
    /// Returns the input borrowed when it already fits.
    pub fn truncate<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.truncate_within(text, self.maximum_length)
    }

    /// Truncate `text` to `maximum_length` instead of the configured length.
    ///
    /// The override is validated like the constructor argument; the stored
    /// configuration is left untouched.
    pub fn truncate_with<'a>(&self, text: &'a str, maximum_length: i64) -> Result<Cow<'a, str>> {
        let maximum = self.resolve_maximum(Some(maximum_length))?;
        Ok(self.truncate_within(text, maximum))
    }

    fn resolve_maximum(&self, maximum_length_override: Option<i64>) -> Result<usize> {
        match maximum_length_override {
            Some(value) => check_length(value, "maximum_length_override", self.ellipsis_len),
            None => Ok(self.maximum_length),
        }
    }

    fn split(&self, maximum: usize) -> LengthBudget {
        // `maximum >= ellipsis_len` holds for every validated length.
        LengthBudget::split(maximum - self.ellipsis_len, self.ellipsis_position)
    }

    fn truncate_within<'a>(&self, text: &'a str, maximum: usize) -> Cow<'a, str> {
        let metric = self.metric;
        if metric.measure(text) <= maximum {
            return Cow::Borrowed(text);
        }

        let budget = self.split(maximum);

        let mut left = String::new();
        let mut left_len = 0;
        // A side with no budget keeps nothing, not even zero-length segments.
        let mut left_open = budget.left > 0;
        let right_open = budget.right > 0;

        let mut right: VecDeque<(&'a str, usize)> = VecDeque::new();
        let mut right_len = 0;

        for segment in self.segmenter.segment(text) {
            let len = metric.measure(segment.value);

            if left_open {
                if left_len + len > budget.left {
                    left_open = false;
                } else {
                    left.push_str(segment.value);
                    left_len += len;
                }
            }

            if right_open {
                right.push_back((segment.value, len));
                right_len += len;
                while right_len > budget.right {
                    let Some((_, dropped)) = right.pop_front() else {
                        break;
                    };
                    right_len -= dropped;
                }
            }

            if !left_open && !right_open {
                break;
            }
        }

        trace!(
            left = budget.left,
            right = budget.right,
            kept_left = left_len,
            kept_right = right_len,
            "truncated"
        );

        let left = left.trim_end();
        let right: String = right.into_iter().map(|(value, _)| value).collect();
        let right = right.trim_start();

        let mut result =
            String::with_capacity(left.len() + self.ellipsis_mark.len() + right.len());
        result.push_str(left);
        result.push_str(&self.ellipsis_mark);
        result.push_str(right);
        Cow::Owned(result)
    }
}
