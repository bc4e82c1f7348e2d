//! Shape inference for datamorph.
//!
//! This crate defines the shape descriptors, the per-family pattern matchers
//! and the format registry that classifies raw column values.

pub mod error;
pub mod matchers;
pub mod options;
pub mod registry;
pub mod shape;

pub use error::{Error, Result};
pub use matchers::{Matcher, is_blank, is_free_text};
pub use options::{DEFAULT_CURRENCY_SYMBOLS, FreeTextPolicy, MatchOptions};
pub use registry::FormatRegistry;
pub use shape::{
    CurrencyShape, DateOrder, DateShape, GenericShape, PhoneShape, Shape, ShapeFamily,
    SymbolPosition, Token,
};
