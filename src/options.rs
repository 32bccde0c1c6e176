//! Truncator configuration.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::TruncateError;
use crate::measure::LengthMetric;
use crate::segment::SegmentOptions;

/// Where the ellipsis mark goes relative to the kept content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum EllipsisPosition {
    Start,
    Middle,
    #[default]
    End,
}

impl EllipsisPosition {
    /// Lowercase name, as accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

impl fmt::Display for EllipsisPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EllipsisPosition {
    type Err = TruncateError;

    /// Case-insensitive: `"END"`, `"Middle"` and `"start"` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "start" => Ok(Self::Start),
            "middle" => Ok(Self::Middle),
            "end" => Ok(Self::End),
            _ => Err(TruncateError::InvalidPosition { value: s.to_owned() }),
        }
    }
}

impl TryFrom<String> for EllipsisPosition {
    type Error = TruncateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Options for [`Truncator`](crate::Truncator).
///
/// Deserializes from camelCase keys with every field optional:
///
/// ```json
/// { "ellipsisMark": "…", "ellipsisPosition": "Middle", "metric": "columns", "safeWords": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TruncateOptions {
    pub ellipsis_mark: String,
    pub ellipsis_position: EllipsisPosition,
    pub metric: LengthMetric,
    #[serde(flatten)]
    pub segmentation: SegmentOptions,
}

impl Default for TruncateOptions {
    fn default() -> Self {
        Self {
            ellipsis_mark: "...".to_owned(),
            ellipsis_position: EllipsisPosition::default(),
            metric: LengthMetric::default(),
            segmentation: SegmentOptions::default(),
        }
    }
}

impl TruncateOptions {
    /// Set the mark inserted at the truncation point.
    pub fn ellipsis_mark(mut self, mark: impl Into<String>) -> Self {
        self.ellipsis_mark = mark.into();
        self
    }

    /// Set where the mark is placed.
    pub fn ellipsis_position(mut self, position: EllipsisPosition) -> Self {
        self.ellipsis_position = position;
        self
    }

    /// Set the unit lengths are counted in.
    pub fn metric(mut self, metric: LengthMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Set the options forwarded to the default [`Dissector`](crate::Dissector).
    pub fn segmentation(mut self, segmentation: SegmentOptions) -> Self {
        self.segmentation = segmentation;
        self
    }
}
