use std::sync::OnceLock;

use regex::Regex;

use super::Matcher;
use crate::shape::{CurrencyShape, Shape, ShapeFamily, SymbolPosition};

/// Recognizes amounts with a leading or trailing currency symbol.
pub struct CurrencyMatcher {
    /// Sorted longest first so `US$` wins over `$`.
    symbols: Vec<String>,
}

impl CurrencyMatcher {
    pub fn new(symbols: &[String]) -> Self {
        let mut symbols = symbols.to_vec();
        symbols.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        symbols.dedup();
        Self { symbols }
    }

    fn match_currency(&self, raw: &str) -> Option<CurrencyShape> {
        let (negative, rest) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        if let Some((symbol, after)) = self.strip_symbol_prefix(rest) {
            let (symbol_spaced, amount) = match after.strip_prefix(' ') {
                Some(amount) => (true, amount),
                None => (false, after),
            };
            // A leading symbol commits the value to the prefix layout.
            let amount = parse_amount(amount)?;
            return Some(amount.into_shape(symbol, SymbolPosition::Prefix, symbol_spaced, negative));
        }

        if let Some((before, symbol)) = self.strip_symbol_suffix(rest) {
            let (symbol_spaced, amount) = match before.strip_suffix(' ') {
                Some(amount) => (true, amount),
                None => (false, before),
            };
            let amount = parse_amount(amount)?;
            return Some(amount.into_shape(symbol, SymbolPosition::Suffix, symbol_spaced, negative));
        }

        // Bare amounts need both separators to be told apart from plain numbers.
        let amount = parse_amount(rest)?;
        if amount.thousands_separator.is_none() || amount.decimal_separator.is_none() {
            return None;
        }
        Some(amount.into_shape("", SymbolPosition::Prefix, false, negative))
    }

    fn strip_symbol_prefix<'a>(&'a self, value: &'a str) -> Option<(&'a str, &'a str)> {
        self.symbols.iter().find_map(|symbol| {
            value
                .strip_prefix(symbol.as_str())
                .map(|rest| (symbol.as_str(), rest))
        })
    }

    fn strip_symbol_suffix<'a>(&'a self, value: &'a str) -> Option<(&'a str, &'a str)> {
        self.symbols.iter().find_map(|symbol| {
            value
                .strip_suffix(symbol.as_str())
                .map(|rest| (rest, symbol.as_str()))
        })
    }
}

impl Matcher for CurrencyMatcher {
    fn id(&self) -> &'static str {
        "currency"
    }

    fn family(&self) -> ShapeFamily {
        ShapeFamily::Currency
    }

    fn try_match(&self, raw: &str) -> Shape {
        self.match_currency(raw)
            .map_or(Shape::Unmatched, Shape::Currency)
    }
}

struct Amount {
    integer_digits: usize,
    thousands_separator: Option<char>,
    decimal_separator: Option<char>,
    decimal_digits: usize,
}

impl Amount {
    fn into_shape(
        self,
        symbol: &str,
        symbol_position: SymbolPosition,
        symbol_spaced: bool,
        negative: bool,
    ) -> CurrencyShape {
        CurrencyShape {
            symbol: symbol.to_string(),
            symbol_position,
            symbol_spaced,
            negative,
            thousands_separator: self.thousands_separator,
            decimal_separator: self.decimal_separator,
            decimal_digits: self.decimal_digits,
            integer_digits: self.integer_digits,
        }
    }
}

/// Integer part either grouped in threes or plain, then an optional fraction.
/// A single `.` or `,` followed by three digits after a 1-3 digit lead reads
/// as a thousands separator.
static AMOUNT_LAYOUT: OnceLock<Option<Regex>> = OnceLock::new();

fn amount_layout() -> Option<&'static Regex> {
    AMOUNT_LAYOUT
        .get_or_init(|| {
            Regex::new(
                r"^(?P<integer>[0-9]{1,3}(?:[ ',.][0-9]{3})+|[0-9]+)(?:(?P<decimal>[.,])(?P<fraction>[0-9]+))?$",
            )
            .ok()
        })
        .as_ref()
}

fn parse_amount(value: &str) -> Option<Amount> {
    let caps = amount_layout()?.captures(value)?;
    let integer = caps.name("integer")?.as_str();
    let decimal_separator = caps
        .name("decimal")
        .and_then(|decimal| decimal.as_str().chars().next());
    let fraction = caps.name("fraction").map_or("", |fraction| fraction.as_str());

    let mut grouping = integer.chars().filter(|ch| !ch.is_ascii_digit());
    let thousands_separator = grouping.next();
    if let Some(thousands) = thousands_separator {
        if grouping.any(|ch| ch != thousands) || decimal_separator == Some(thousands) {
            return None;
        }
    }

    Some(Amount {
        integer_digits: integer.chars().filter(char::is_ascii_digit).count(),
        thousands_separator,
        decimal_separator,
        decimal_digits: fraction.len(),
    })
}
