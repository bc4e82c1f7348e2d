use rand::{Rng, RngCore};

use datamorph_core::{CurrencyShape, SymbolPosition};

use super::push_digits;

pub(super) fn generate_currency(shape: &CurrencyShape, rng: &mut dyn RngCore) -> String {
    let integer_digits = shape.integer_digits.max(1);
    let mut integer = String::with_capacity(integer_digits);
    if integer_digits > 1 {
        integer.push(char::from(b'0' + rng.random_range(1..=9_u8)));
        push_digits(&mut integer, integer_digits - 1, rng);
    } else {
        push_digits(&mut integer, 1, rng);
    }

    let mut amount = match shape.thousands_separator {
        Some(separator) => group_thousands(&integer, separator),
        None => integer,
    };
    if let Some(decimal) = shape.decimal_separator {
        amount.push(decimal);
        push_digits(&mut amount, shape.decimal_digits, rng);
    }

    let sign = if shape.negative { "-" } else { "" };
    let gap = if shape.symbol_spaced { " " } else { "" };
    match shape.symbol_position {
        SymbolPosition::Prefix => format!("{sign}{}{gap}{amount}", shape.symbol),
        SymbolPosition::Suffix => format!("{sign}{amount}{gap}{}", shape.symbol),
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_from_the_right() {
        assert_eq!(group_thousands("1234567", ','), "1,234,567");
        assert_eq!(group_thousands("123", ','), "123");
        assert_eq!(group_thousands("1234", '.'), "1.234");
    }
}
