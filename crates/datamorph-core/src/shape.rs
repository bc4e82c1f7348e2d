use serde::{Deserialize, Serialize};

/// Structural descriptor of a single value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum Shape {
    Date(DateShape),
    Currency(CurrencyShape),
    Phone(PhoneShape),
    Generic(GenericShape),
    /// No format could be inferred; the value is passed through.
    Unmatched,
}

impl Shape {
    pub fn family(&self) -> Option<ShapeFamily> {
        match self {
            Shape::Date(_) => Some(ShapeFamily::Date),
            Shape::Currency(_) => Some(ShapeFamily::Currency),
            Shape::Phone(_) => Some(ShapeFamily::Phone),
            Shape::Generic(_) => Some(ShapeFamily::Generic),
            Shape::Unmatched => None,
        }
    }

    pub fn is_unmatched(&self) -> bool {
        matches!(self, Shape::Unmatched)
    }
}

/// Format family a matcher belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeFamily {
    Date,
    Currency,
    Phone,
    Generic,
}

impl ShapeFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeFamily::Date => "date",
            ShapeFamily::Currency => "currency",
            ShapeFamily::Phone => "phone",
            ShapeFamily::Generic => "generic",
        }
    }
}

impl std::fmt::Display for ShapeFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field order of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DateOrder {
    Ymd,
    Mdy,
    Dmy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateShape {
    pub separator: char,
    pub order: DateOrder,
    /// Day and month are both written with two digits.
    pub zero_padded: bool,
    /// Either 2 or 4.
    pub year_digits: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyShape {
    /// Empty for bare amounts such as `1,234.56`.
    pub symbol: String,
    pub symbol_position: SymbolPosition,
    /// A single space sits between symbol and amount.
    pub symbol_spaced: bool,
    pub negative: bool,
    pub thousands_separator: Option<char>,
    pub decimal_separator: Option<char>,
    pub decimal_digits: usize,
    /// Number of digits in the integer part.
    pub integer_digits: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneShape {
    /// Verbatim leading text such as `"+1 "` or `"+44-"`.
    pub country_prefix: Option<String>,
    pub groupings: Vec<usize>,
    /// One entry between each pair of groups. `None` only follows a
    /// parenthesized first group.
    pub separators: Vec<Option<char>>,
    pub has_parens_for_first_group: bool,
}

/// Character class of a single position in a generic template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "char", rename_all = "snake_case")]
pub enum Token {
    Digit,
    Upper,
    Lower,
    Literal(char),
}

impl Token {
    pub fn classify(ch: char) -> Self {
        if ch.is_ascii_digit() {
            Token::Digit
        } else if ch.is_uppercase() {
            Token::Upper
        } else if ch.is_lowercase() {
            Token::Lower
        } else {
            Token::Literal(ch)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericShape {
    pub template: Vec<Token>,
}

impl GenericShape {
    pub fn from_value(raw: &str) -> Self {
        Self {
            template: raw.chars().map(Token::classify).collect(),
        }
    }
}
