// crates/volcano-core/src/lib.rs

//! Load a volcano eruption dataset once, then run descriptive queries over it.
//!
//! ```no_run
//! use volcano_core::VolcanoDataset;
//!
//! let mut db = VolcanoDataset::new();
//! db.load(None)?; // bundled `volcano.json`
//! println!("{} eruptions", db.count()?);
//! println!("{:.1}% caused a tsunami", db.percent_causing_tsunami()?);
//! # Ok::<(), volcano_core::VolcanoError>(())
//! ```

pub mod common;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod model;
pub mod query;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DatasetStats;
pub use crate::dataset::{VolcanoDataset, DEFAULT_TOP_N};
pub use crate::error::{Result, VolcanoError};
pub use crate::loader::DEFAULT_SOURCE;
pub use crate::model::{Volcano, NO_TSUNAMI, TSUNAMI_MARKER};
pub use crate::query::MatchCriteria;
pub use crate::traits::NameMatch;

pub mod prelude {
    pub use crate::{
        DatasetStats, MatchCriteria, NameMatch, Result, Volcano, VolcanoDataset, VolcanoError,
    };
}
