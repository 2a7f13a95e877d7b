use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a loaded dataset.
///
/// Returned by [`VolcanoDataset::stats`](crate::VolcanoDataset::stats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub eruptions: usize,
    pub types: usize,
    pub countries: usize,
    pub total_deaths: u64,
}
