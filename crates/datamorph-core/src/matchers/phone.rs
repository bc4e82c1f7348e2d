use super::{Matcher, all_digits};
use crate::shape::{PhoneShape, Shape, ShapeFamily};

const SEPARATORS: [char; 3] = ['-', '.', ' '];
const MIN_DIGITS: usize = 7;
const MAX_DIGITS: usize = 15;
const MAX_GROUP: usize = 6;

/// Recognizes grouped telephone numbers such as `+1 (555) 123-4567`.
pub struct PhoneMatcher;

impl Matcher for PhoneMatcher {
    fn id(&self) -> &'static str {
        "phone"
    }

    fn family(&self) -> ShapeFamily {
        ShapeFamily::Phone
    }

    fn try_match(&self, raw: &str) -> Shape {
        match_phone(raw).map_or(Shape::Unmatched, Shape::Phone)
    }
}

fn match_phone(raw: &str) -> Option<PhoneShape> {
    let (country_prefix, rest) = split_country_prefix(raw)?;

    let mut groupings = Vec::new();
    let mut separators = Vec::new();
    let mut has_parens_for_first_group = false;
    let mut body = rest;

    if let Some(inner) = rest.strip_prefix('(') {
        let (group, after) = inner.split_once(')')?;
        if !all_digits(group) {
            return None;
        }
        groupings.push(group.len());
        has_parens_for_first_group = true;

        let next = after.chars().next()?;
        if SEPARATORS.contains(&next) {
            separators.push(Some(next));
            body = &after[next.len_utf8()..];
        } else if next.is_ascii_digit() {
            separators.push(None);
            body = after;
        } else {
            return None;
        }
    }

    let mut current = 0usize;
    for ch in body.chars() {
        if ch.is_ascii_digit() {
            current += 1;
        } else if SEPARATORS.contains(&ch) && current > 0 {
            groupings.push(current);
            separators.push(Some(ch));
            current = 0;
        } else {
            return None;
        }
    }
    if current == 0 {
        return None;
    }
    groupings.push(current);

    let total: usize = groupings.iter().sum();
    let plausible = groupings.len() >= 2
        && (MIN_DIGITS..=MAX_DIGITS).contains(&total)
        && groupings.iter().all(|len| (1..=MAX_GROUP).contains(len))
        && groupings.iter().any(|len| *len >= 3);
    plausible.then_some(PhoneShape {
        country_prefix,
        groupings,
        separators,
        has_parens_for_first_group,
    })
}

/// Splits `+CC` plus its trailing separator off the front. Returns `None`
/// when a `+` is present but is not followed by a usable dialing code.
fn split_country_prefix(raw: &str) -> Option<(Option<String>, &str)> {
    let Some(after_plus) = raw.strip_prefix('+') else {
        return Some((None, raw));
    };
    let digits = after_plus
        .bytes()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if !(1..=3).contains(&digits) {
        return None;
    }

    let next = after_plus[digits..].chars().next()?;
    let prefix_len = if SEPARATORS.contains(&next) {
        1 + digits + next.len_utf8()
    } else if next == '(' {
        1 + digits
    } else {
        return None;
    };
    Some((Some(raw[..prefix_len].to_string()), &raw[prefix_len..]))
}
