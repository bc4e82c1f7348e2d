use crate::error::Result;
use crate::matchers::{
    CurrencyMatcher, DateMatcher, GenericAlphanumericMatcher, GenericNumericMatcher, Matcher,
    PhoneMatcher, is_blank,
};
use crate::options::MatchOptions;
use crate::shape::{Shape, ShapeFamily};

/// Ordered list of matchers; the first successful match wins.
pub struct FormatRegistry {
    matchers: Vec<Box<dyn Matcher>>,
}

impl FormatRegistry {
    /// Build the standard chain: date, currency, phone, generic-numeric,
    /// generic-alphanumeric.
    pub fn new(options: &MatchOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::standard(options))
    }

    fn standard(options: &MatchOptions) -> Self {
        let mut registry = Self {
            matchers: Vec::new(),
        };
        registry.register_matcher(Box::new(DateMatcher));
        registry.register_matcher(Box::new(CurrencyMatcher::new(&options.currency_symbols)));
        registry.register_matcher(Box::new(PhoneMatcher));
        registry.register_matcher(Box::new(GenericNumericMatcher));
        registry.register_matcher(Box::new(GenericAlphanumericMatcher::new(options.free_text)));
        registry
    }

    /// Append a matcher at the lowest priority.
    pub fn register_matcher(&mut self, matcher: Box<dyn Matcher>) {
        self.matchers.push(matcher);
    }

    pub fn matcher_ids(&self) -> Vec<&'static str> {
        self.matchers.iter().map(|matcher| matcher.id()).collect()
    }

    pub fn classify(&self, raw: &str) -> Shape {
        self.first_match(raw, |_| true)
    }

    /// Classify using only the matchers of `family`.
    pub fn classify_family(&self, raw: &str, family: ShapeFamily) -> Shape {
        self.first_match(raw, |matcher| matcher.family() == family)
    }

    fn first_match(&self, raw: &str, accept: impl Fn(&dyn Matcher) -> bool) -> Shape {
        if is_blank(raw) {
            return Shape::Unmatched;
        }
        self.matchers
            .iter()
            .map(|matcher| &**matcher)
            .filter(|matcher| accept(*matcher))
            .map(|matcher| matcher.try_match(raw))
            .find(|shape| !shape.is_unmatched())
            .unwrap_or(Shape::Unmatched)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::standard(&MatchOptions::default())
    }
}

impl std::fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("matchers", &self.matcher_ids())
            .finish()
    }
}
