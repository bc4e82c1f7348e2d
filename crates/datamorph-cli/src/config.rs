//! TOML configuration for a masking run.
//!
//! Every key is optional and falls back to the engine defaults:
//!
//! ```toml
//! mode = "column_uniform"
//! seed = 42
//! year_min = 1970
//! year_max = 2025
//! currency_symbols = ["$", "€", "zł"]
//! free_text = "mask"
//! malformed_rows = "skip"
//! max_attempts = 16
//! ```

use std::io;
use std::path::Path;

use datamorph_core::FreeTextPolicy;
use datamorph_generate::{MalformedRowPolicy, MaskOptions, PermutationMode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Flags that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub mode: Option<PermutationMode>,
    pub seed: Option<u64>,
    pub free_text: Option<FreeTextPolicy>,
    pub malformed_rows: Option<MalformedRowPolicy>,
}

pub fn load_options(path: Option<&Path>) -> Result<MaskOptions, ConfigError> {
    let Some(path) = path else {
        return Ok(MaskOptions::default());
    };
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_options(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

fn parse_options(content: &str) -> Result<MaskOptions, toml::de::Error> {
    toml::from_str(content)
}

impl Overrides {
    pub fn apply(self, options: &mut MaskOptions) {
        if let Some(mode) = self.mode {
            options.mode = mode;
        }
        if let Some(seed) = self.seed {
            options.seed = Some(seed);
        }
        if let Some(free_text) = self.free_text {
            options.free_text = free_text;
        }
        if let Some(malformed_rows) = self.malformed_rows {
            options.malformed_rows = malformed_rows;
        }
    }
}
