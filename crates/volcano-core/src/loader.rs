// crates/volcano-core/src/loader.rs

//! # Data Loader
//!
//! Handles the physical layer (source resolution, file IO, optional gzip)
//! and hands a plain reader to `serde_json`.

use crate::error::{Result, VolcanoError};
use crate::model::Volcano;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Identifier used when `load` is called without one.
pub const DEFAULT_SOURCE: &str = "volcano.json";

/// Directory holding the bundled dataset (`<volcano-core>/data`).
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Absolute path of the bundled [`DEFAULT_SOURCE`].
pub fn default_source_path() -> PathBuf {
    default_data_dir().join(DEFAULT_SOURCE)
}

/// Resolves an explicit identifier to an existing file.
///
/// The identifier is first taken as a path as-is. A relative identifier that
/// does not exist there is then looked up inside [`default_data_dir`].
pub fn resolve_source(identifier: impl AsRef<Path>) -> Result<PathBuf> {
    let identifier = identifier.as_ref();

    let mut candidates = vec![identifier.to_path_buf()];
    if identifier.is_relative() {
        candidates.push(default_data_dir().join(identifier));
    }

    for candidate in &candidates {
        debug!(candidate = %candidate.display(), "probing dataset source");
        if candidate.is_file() {
            return Ok(candidate.clone());
        }
    }

    Err(VolcanoError::SourceNotFound {
        path: identifier.to_path_buf(),
        source: io::Error::new(
            io::ErrorKind::NotFound,
            "no such file in the working directory or the bundled data directory",
        ),
    })
}

/// Resolves, opens and fully parses a dataset file.
pub fn read_volcanoes(identifier: impl AsRef<Path>) -> Result<(PathBuf, Vec<Volcano>)> {
    read_path(resolve_source(identifier)?)
}

/// Parses the bundled dataset. The working directory is never consulted.
pub fn read_default() -> Result<(PathBuf, Vec<Volcano>)> {
    read_path(default_source_path())
}

fn read_path(path: PathBuf) -> Result<(PathBuf, Vec<Volcano>)> {
    debug!(path = %path.display(), "reading dataset");
    let reader = open_stream(&path)?;
    let volcanoes = parse_volcanoes(reader, &path)?;
    Ok((path, volcanoes))
}

/// Parses a JSON array of records from any reader.
///
/// `origin` only labels parse errors.
pub fn parse_volcanoes<R: Read>(reader: R, origin: &Path) -> Result<Vec<Volcano>> {
    serde_json::from_reader(reader).map_err(|e| VolcanoError::parse(origin, e))
}

/// Opens a file, buffers it, and wraps it in a gzip decoder when the file
/// name ends in `.gz` (with the `compact` feature).
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|source| VolcanoError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if is_gzip(path) {
            debug!(path = %path.display(), "decompressing gzip dataset");
            return Ok(Box::new(BufReader::new(flate2::read::GzDecoder::new(reader))));
        }
    }

    Ok(Box::new(reader))
}

#[cfg(feature = "compact")]
fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_resolves_by_bare_name() {
        let path = resolve_source(DEFAULT_SOURCE).unwrap();
        assert!(path.ends_with("data/volcano.json"));
    }

    #[test]
    fn default_source_is_absolute() {
        let path = default_source_path();
        assert!(path.is_absolute());
        assert!(path.is_file());
    }

    #[test]
    fn unknown_identifier_is_not_found() {
        let err = resolve_source("no-such-dataset.json").unwrap_err();
        assert!(matches!(err, VolcanoError::SourceNotFound { .. }));
    }

    #[test]
    fn directories_are_not_sources() {
        let dir = default_data_dir();
        let err = resolve_source(&dir).unwrap_err();
        assert!(matches!(err, VolcanoError::SourceNotFound { .. }));
    }

    #[test]
    fn parse_error_names_its_origin() {
        let err = parse_volcanoes("[{".as_bytes(), Path::new("inline.json")).unwrap_err();
        match err {
            VolcanoError::Parse { path, .. } => assert_eq!(path, Path::new("inline.json")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
