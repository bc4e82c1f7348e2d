use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Currency symbols recognized out of the box.
pub const DEFAULT_CURRENCY_SYMBOLS: &[&str] = &[
    "$", "€", "£", "¥", "₹", "R$", "US$", "CHF", "kr", "USD", "EUR", "GBP",
];

/// How multi-word, digit-free text is treated by the generic matchers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreeTextPolicy {
    /// Free text is left unmatched and passes through unchanged.
    #[default]
    Preserve,
    /// Free text is templated like any other string.
    Mask,
}

/// Options that influence classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    pub currency_symbols: Vec<String>,
    pub free_text: FreeTextPolicy,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            currency_symbols: DEFAULT_CURRENCY_SYMBOLS
                .iter()
                .map(|symbol| symbol.to_string())
                .collect(),
            free_text: FreeTextPolicy::default(),
        }
    }
}

impl MatchOptions {
    pub fn validate(&self) -> Result<()> {
        for symbol in &self.currency_symbols {
            if symbol.trim().is_empty() {
                return Err(Error::InvalidOptions(
                    "currency symbols must not be empty".to_string(),
                ));
            }
            if symbol.chars().any(|ch| ch.is_ascii_digit() || ch.is_whitespace()) {
                return Err(Error::InvalidOptions(format!(
                    "currency symbol '{symbol}' must not contain digits or whitespace"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_valid() {
        assert!(MatchOptions::default().validate().is_ok());
    }

    #[test]
    fn rejects_blank_symbol() {
        let options = MatchOptions {
            currency_symbols: vec!["$".to_string(), " ".to_string()],
            ..MatchOptions::default()
        };
        assert!(matches!(options.validate(), Err(Error::InvalidOptions(_))));
    }
}
