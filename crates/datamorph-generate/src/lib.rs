//! Value generation and CSV masking for datamorph.
//!
//! This crate turns shapes inferred by `datamorph-core` back into random
//! values, permutes whole columns, and rewrites CSV files with one column
//! masked.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;
pub mod permutator;

pub use engine::{MaskEngine, MaskRequest, MaskResult, default_output_path};
pub use errors::GenerationError;
pub use generators::ValueGenerator;
pub use model::{
    ColumnReport, MalformedRowPolicy, MaskIssue, MaskOptions, MaskReport, PermutationMode,
};
pub use permutator::{ColumnPermutator, PermutedColumn};
