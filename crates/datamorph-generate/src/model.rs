use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use datamorph_core::{DEFAULT_CURRENCY_SYMBOLS, FreeTextPolicy, MatchOptions, ShapeFamily};

use crate::errors::GenerationError;
use crate::generators::validate_year_range;

pub const DEFAULT_YEAR_MIN: i32 = 1950;
pub const DEFAULT_YEAR_MAX: i32 = 2030;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 16;

/// How a column is classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermutationMode {
    /// Every value is classified on its own.
    #[default]
    PerValue,
    /// The first non-blank value fixes the family for the whole column.
    ColumnUniform,
}

impl PermutationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermutationMode::PerValue => "per-value",
            PermutationMode::ColumnUniform => "column-uniform",
        }
    }
}

/// What to do with rows whose field count differs from the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedRowPolicy {
    /// Write the row verbatim, unmasked.
    #[default]
    PassThrough,
    /// Drop the row from the output.
    Skip,
}

/// Options for the masking engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskOptions {
    pub mode: PermutationMode,
    /// Fixed seed for reproducible output; OS entropy when absent.
    pub seed: Option<u64>,
    pub year_min: i32,
    pub year_max: i32,
    /// Regeneration attempts per value before the last candidate is kept.
    pub max_attempts: u32,
    pub currency_symbols: Vec<String>,
    pub free_text: FreeTextPolicy,
    pub malformed_rows: MalformedRowPolicy,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            mode: PermutationMode::default(),
            seed: None,
            year_min: DEFAULT_YEAR_MIN,
            year_max: DEFAULT_YEAR_MAX,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            currency_symbols: DEFAULT_CURRENCY_SYMBOLS
                .iter()
                .map(|symbol| symbol.to_string())
                .collect(),
            free_text: FreeTextPolicy::default(),
            malformed_rows: MalformedRowPolicy::default(),
        }
    }
}

impl MaskOptions {
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            currency_symbols: self.currency_symbols.clone(),
            free_text: self.free_text,
        }
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.max_attempts == 0 {
            return Err(GenerationError::InvalidOptions(
                "max_attempts must be >= 1".to_string(),
            ));
        }
        validate_year_range(self.year_min, self.year_max)?;
        self.match_options().validate()?;
        Ok(())
    }
}

/// Summary of one permuted column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnReport {
    pub mode: PermutationMode,
    /// Family fixed by column-uniform mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant_family: Option<ShapeFamily>,
    pub values: u64,
    pub regenerated: u64,
    pub passed_through: u64,
    pub by_family: BTreeMap<String, u64>,
    pub retries: u64,
    /// Values whose regeneration never re-classified to the original shape.
    pub unstable: u64,
}

impl ColumnReport {
    pub fn new(mode: PermutationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn record_regenerated(&mut self, family: ShapeFamily, retries: u32, stable: bool) {
        self.values += 1;
        self.regenerated += 1;
        self.retries += u64::from(retries);
        if !stable {
            self.unstable += 1;
        }
        *self.by_family.entry(family.as_str().to_string()).or_insert(0) += 1;
    }

    pub fn record_pass_through(&mut self) {
        self.values += 1;
        self.passed_through += 1;
    }
}

/// Structured issue raised while masking a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskIssue {
    pub level: String,
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,
}

/// Report for a masking run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskReport {
    pub run_id: String,
    pub started_at: String,
    pub input: String,
    pub output: String,
    pub column: String,
    pub column_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub malformed_policy: MalformedRowPolicy,
    pub rows_read: u64,
    pub rows_written: u64,
    pub malformed_rows: u64,
    pub column_report: ColumnReport,
    pub bytes_written: u64,
    pub duration_ms: u64,
    pub warnings: Vec<MaskIssue>,
}

impl MaskReport {
    pub fn record_warning(&mut self, issue: MaskIssue) {
        self.warnings.push(issue);
    }
}
