//! Pattern matchers, one per format family.
//!
//! Every matcher is pure: it inspects a raw string and either returns the
//! shape needed to regenerate it or `Shape::Unmatched`. Malformed input never
//! panics or errors.

mod currency;
mod date;
mod generic;
mod phone;

pub use currency::CurrencyMatcher;
pub use date::DateMatcher;
pub use generic::{GenericAlphanumericMatcher, GenericNumericMatcher, is_free_text};
pub use phone::PhoneMatcher;

use crate::shape::{Shape, ShapeFamily};

/// A single classification step in the format registry.
pub trait Matcher: Send + Sync {
    fn id(&self) -> &'static str;
    fn family(&self) -> ShapeFamily;
    fn try_match(&self, raw: &str) -> Shape;
}

/// Empty and whitespace-only values carry no format.
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}
