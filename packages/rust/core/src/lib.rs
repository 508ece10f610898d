//! Dataset generation for the Mishnah structure reference file.
//!
//! This crate holds the embedded source tables, joins them into the nested
//! [`Document`](mishnah_shared::Document), and serializes the result to disk.

pub mod builder;
pub mod tables;
pub mod writer;

pub use builder::{BuildSummary, build, build_embedded, summarize};
pub use tables::SourceTables;
pub use writer::{CheckOutcome, WriteResult, check_file, serialize, write_to_file};
