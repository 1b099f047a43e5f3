//! Time series models used for trend charts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// A single dated value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub time: NaiveDate,
    pub value: f64,
}

/// Non-empty sequence of points with strictly increasing dates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Series(Vec<TimePoint>);

impl Series {
    /// Validates and wraps a list of points.
    pub fn try_new(points: Vec<TimePoint>) -> Result<Self, ValidationError> {
        if points.is_empty() {
            return Err(ValidationError::InvalidInput(
                "series must contain at least one point".to_string(),
            ));
        }
        if let Some(pair) = points.windows(2).find(|pair| pair[1].time <= pair[0].time) {
            return Err(ValidationError::InvalidInput(format!(
                "series dates must be strictly increasing ({} then {})",
                pair[0].time, pair[1].time
            )));
        }
        Ok(Self(points))
    }

    /// Wraps points already known to be non-empty and strictly increasing.
    pub(crate) fn from_trusted(points: Vec<TimePoint>) -> Self {
        debug_assert!(!points.is_empty());
        debug_assert!(points.windows(2).all(|pair| pair[0].time < pair[1].time));
        Self(points)
    }

    pub fn points(&self) -> &[TimePoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|p| p.value)
    }

    pub fn first(&self) -> &TimePoint {
        &self.0[0]
    }

    pub fn last(&self) -> &TimePoint {
        &self.0[self.0.len() - 1]
    }
}

impl<'de> Deserialize<'de> for Series {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let points = Vec::<TimePoint>::deserialize(deserializer)?;
        Series::try_new(points).map_err(serde::de::Error::custom)
    }
}

/// Asset value series and its inflation benchmark, point-aligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPair {
    pub asset_series: Series,
    pub inflation_series: Series,
}
