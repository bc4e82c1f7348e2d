use super::{Matcher, is_blank};
use crate::options::FreeTextPolicy;
use crate::shape::{GenericShape, Shape, ShapeFamily};

/// Digits and punctuation only, e.g. account numbers like `0042-7781/3`.
pub struct GenericNumericMatcher;

impl Matcher for GenericNumericMatcher {
    fn id(&self) -> &'static str {
        "generic.numeric"
    }

    fn family(&self) -> ShapeFamily {
        ShapeFamily::Generic
    }

    fn try_match(&self, raw: &str) -> Shape {
        if is_blank(raw) || raw.chars().any(char::is_alphabetic) {
            return Shape::Unmatched;
        }
        Shape::Generic(GenericShape::from_value(raw))
    }
}

/// Terminal fallback: any non-blank value becomes a per-character template.
pub struct GenericAlphanumericMatcher {
    free_text: FreeTextPolicy,
}

impl GenericAlphanumericMatcher {
    pub fn new(free_text: FreeTextPolicy) -> Self {
        Self { free_text }
    }
}

impl Matcher for GenericAlphanumericMatcher {
    fn id(&self) -> &'static str {
        "generic.alphanumeric"
    }

    fn family(&self) -> ShapeFamily {
        ShapeFamily::Generic
    }

    fn try_match(&self, raw: &str) -> Shape {
        if is_blank(raw) {
            return Shape::Unmatched;
        }
        if self.free_text == FreeTextPolicy::Preserve && is_free_text(raw) {
            return Shape::Unmatched;
        }
        Shape::Generic(GenericShape::from_value(raw))
    }
}

/// Multi-word text without digits, e.g. `hello world`.
pub fn is_free_text(raw: &str) -> bool {
    !raw.chars().any(|ch| ch.is_ascii_digit())
        && raw.chars().any(char::is_alphabetic)
        && raw.split_whitespace().nth(1).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Token;

    #[test]
    fn numeric_template_keeps_literals() {
        let Shape::Generic(shape) = GenericNumericMatcher.try_match("12-34/5") else {
            panic!("expected generic shape");
        };
        assert_eq!(
            shape.template,
            vec![
                Token::Digit,
                Token::Digit,
                Token::Literal('-'),
                Token::Digit,
                Token::Digit,
                Token::Literal('/'),
                Token::Digit,
            ]
        );
        assert!(GenericNumericMatcher.try_match("AB-12").is_unmatched());
    }

    #[test]
    fn alphanumeric_template_tracks_case() {
        let matcher = GenericAlphanumericMatcher::new(FreeTextPolicy::Preserve);
        let Shape::Generic(shape) = matcher.try_match("Ab1_") else {
            panic!("expected generic shape");
        };
        assert_eq!(
            shape.template,
            vec![Token::Upper, Token::Lower, Token::Digit, Token::Literal('_')]
        );
    }

    #[test]
    fn free_text_policy() {
        let preserve = GenericAlphanumericMatcher::new(FreeTextPolicy::Preserve);
        let mask = GenericAlphanumericMatcher::new(FreeTextPolicy::Mask);
        assert!(preserve.try_match("hello world").is_unmatched());
        assert!(!mask.try_match("hello world").is_unmatched());
        assert!(!preserve.try_match("Suite 12 B").is_unmatched());
        assert!(!preserve.try_match("hello").is_unmatched());
    }

    #[test]
    fn blank_values_are_unmatched() {
        let matcher = GenericAlphanumericMatcher::new(FreeTextPolicy::Mask);
        assert!(matcher.try_match("").is_unmatched());
        assert!(matcher.try_match("   ").is_unmatched());
        assert!(GenericNumericMatcher.try_match("\t").is_unmatched());
    }
}
