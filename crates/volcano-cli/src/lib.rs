//! volcano-cli
//! ===========
//!
//! Command-line interface for the `volcano-core` eruption dataset.
//!
//! This crate primarily provides a binary (`volcano-cli`). The library target
//! exists so the documentation page shows this overview.
//!
//! Basic usage:
//!
//! ```text
//! volcano-cli stats
//! volcano-cli range 1980 1990
//! volcano-cli --input my-eruptions.json tsunami
//! volcano-cli --json top 5
//! ```
//!
//! For programmatic access use the [`volcano-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
