//! Value generation: one random string per shape.

mod currency;
mod date;
mod phone;
mod template;

use std::ops::RangeInclusive;

use rand::{Rng, RngCore};

use datamorph_core::Shape;

use crate::errors::GenerationError;
use crate::model::{DEFAULT_YEAR_MAX, DEFAULT_YEAR_MIN};

const YEAR_BOUNDS: RangeInclusive<i32> = 1000..=9999;

/// Produces random values that keep the structure of a shape.
#[derive(Debug, Clone)]
pub struct ValueGenerator {
    years: RangeInclusive<i32>,
}

impl ValueGenerator {
    pub fn new(year_min: i32, year_max: i32) -> Result<Self, GenerationError> {
        validate_year_range(year_min, year_max)?;
        Ok(Self {
            years: year_min..=year_max,
        })
    }

    /// Generate a replacement for `raw`. Unmatched values are returned as-is.
    pub fn generate(&self, shape: &Shape, raw: &str, rng: &mut dyn RngCore) -> String {
        match shape {
            Shape::Date(shape) => date::generate_date(shape, &self.years, rng),
            Shape::Currency(shape) => currency::generate_currency(shape, rng),
            Shape::Phone(shape) => phone::generate_phone(shape, rng),
            Shape::Generic(shape) => template::generate_template(shape, rng),
            Shape::Unmatched => raw.to_string(),
        }
    }
}

impl Default for ValueGenerator {
    fn default() -> Self {
        Self {
            years: DEFAULT_YEAR_MIN..=DEFAULT_YEAR_MAX,
        }
    }
}

pub fn validate_year_range(year_min: i32, year_max: i32) -> Result<(), GenerationError> {
    if year_min > year_max {
        return Err(GenerationError::InvalidOptions(
            "year_min must be <= year_max".to_string(),
        ));
    }
    if !YEAR_BOUNDS.contains(&year_min) || !YEAR_BOUNDS.contains(&year_max) {
        return Err(GenerationError::InvalidOptions(
            "years must have four digits".to_string(),
        ));
    }
    Ok(())
}

fn random_digit(rng: &mut dyn RngCore) -> char {
    char::from(b'0' + rng.random_range(0..=9_u8))
}

fn push_digits(out: &mut String, count: usize, rng: &mut dyn RngCore) {
    for _ in 0..count {
        out.push(random_digit(rng));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_or_short_year_ranges() {
        assert!(matches!(
            ValueGenerator::new(2030, 1950),
            Err(GenerationError::InvalidOptions(_))
        ));
        assert!(matches!(
            ValueGenerator::new(950, 2030),
            Err(GenerationError::InvalidOptions(_))
        ));
        assert!(ValueGenerator::new(2000, 2000).is_ok());
    }
}
