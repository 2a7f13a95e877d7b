//! `load(None)` reads the bundled dataset whatever the working directory holds.
//!
//! Kept in its own test binary: it changes the process working directory.

use std::fs;
use tempfile::TempDir;
use volcano_core::{VolcanoDataset, DEFAULT_SOURCE};

#[test]
fn default_load_ignores_decoy_in_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(DEFAULT_SOURCE), "[]").unwrap();
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let mut db = VolcanoDataset::new();
    let loaded = db.load(None);
    let source = db.source_path().map(|p| p.to_path_buf());
    std::env::set_current_dir(previous).unwrap();

    loaded.unwrap();
    assert_eq!(db.count().unwrap(), 25);
    let source = source.unwrap();
    assert!(source.is_absolute());
    assert_eq!(source, VolcanoDataset::default_data_dir().join(DEFAULT_SOURCE));
}
