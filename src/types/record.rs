use serde::{Deserialize, Serialize};

/// A single geolocation sample.
///
/// The timestamp is kept exactly as it was read from the data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: String,
}
