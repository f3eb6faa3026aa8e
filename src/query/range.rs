use serde::{Deserialize, Deserializer};

use crate::types::dataset::Dataset;

use super::{error::QueryError, result::RangeResult};

/// Requested window, 1-based and inclusive on both ends.
///
/// A missing or `null` field is the same as zero: `start` must then be
/// rejected and `end` extends to the last record.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RangeRequest {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub start: i64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub end: i64,
}

impl RangeRequest {
    /// An empty body or a bare `null` is a request with no fields set.
    pub fn from_body(body: &[u8]) -> Result<Self, QueryError> {
        if body.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice::<Option<Self>>(body)
            .map(Option::unwrap_or_default)
            .map_err(|e| QueryError::MalformedBody(e.to_string()))
    }
}

fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Option::<i64>::deserialize(deserializer).map(Option::unwrap_or_default)
}

pub fn retrieve(dataset: &Dataset, request: RangeRequest) -> Result<RangeResult<'_>, QueryError> {
    let total = dataset.len();
    let RangeRequest { start, mut end } = request;

    if start <= 0 {
        return Err(QueryError::InvalidStart);
    }
    if end == 0 {
        end = total as i64;
    }
    if start >= end {
        return Err(QueryError::StartNotBeforeEnd);
    }
    if end > total as i64 {
        return Err(QueryError::EndOutOfBounds { total });
    }

    // 0 < start < end <= total
    let (start, end) = (start as usize, end as usize);
    let data = dataset
        .positions(start..=end)
        .ok_or(QueryError::EndOutOfBounds { total })?;
    Ok(RangeResult {
        total_data: total,
        total_retrieve_data: data.len(),
        start,
        end,
        data,
    })
}
