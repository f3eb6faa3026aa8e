use serde::Serialize;

use crate::types::record::Record;

/// Response body of a successful range query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeResult<'a> {
    pub total_data: usize,
    pub total_retrieve_data: usize,
    pub start: usize,
    pub end: usize,
    pub data: &'a [Record],
}
