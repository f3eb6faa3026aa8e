use std::ops::RangeInclusive;

use super::record::Record;

/// Ordered collection of records loaded once at startup.
///
/// There is no way to mutate a dataset after it has been built, so it can be
/// shared between request handlers without locking.
#[derive(Debug, Default)]
pub struct Dataset {
    records: Box<[Record]>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records: records.into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // 1-based inclusive positions
    pub fn positions(&self, positions: RangeInclusive<usize>) -> Option<&[Record]> {
        let (first, last) = positions.into_inner();
        if first == 0 || first > last {
            return None;
        }
        self.records.get(first - 1..last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(i: usize) -> Record {
        Record {
            latitude: i as f64,
            longitude: -(i as f64),
            timestamp: format!("2024-01-01T00:00:{i:02}Z"),
        }
    }

    #[test]
    fn test_positions() {
        let dataset = Dataset::from_records((0..10).map(record).collect());
        assert_eq!(dataset.len(), 10);

        let slice = dataset.positions(1..=5).unwrap();
        assert_eq!(slice, &(0..5).map(record).collect::<Vec<_>>()[..]);

        let slice = dataset.positions(10..=10).unwrap();
        assert_eq!(slice, &[record(9)]);

        assert!(dataset.positions(0..=3).is_none());
        assert!(dataset.positions(4..=11).is_none());
        assert!(dataset.positions(5..=4).is_none());
    }

    #[test]
    fn test_empty() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.positions(1..=1).is_none());
    }
}
