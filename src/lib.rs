//! Umbrella crate for the workspace: re-exports `volcano-core` so the demos
//! can `use volcano_rs::prelude::*`.

pub use volcano_core::*;
