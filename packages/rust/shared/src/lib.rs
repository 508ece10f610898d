//! Shared document types, error model, and configuration for the Mishnah
//! structure dataset.
//!
//! This crate is the foundation depended on by the other workspace crates.
//! It provides:
//! - [`MishnahError`] — the unified error type
//! - Document types ([`Document`], [`Order`], [`Tractate`], [`Chapter`], [`Metadata`])
//! - Configuration ([`GeneratorConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{DEFAULT_OUTPUT_PATH, GeneratorConfig, OutputConfig, load_config_from};
pub use error::{MishnahError, Result};
pub use types::{CHAPTER_LABEL_PREFIX, Chapter, Document, Metadata, Order, Tractate, chapter_label};
