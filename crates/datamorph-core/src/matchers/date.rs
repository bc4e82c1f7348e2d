use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use super::Matcher;
use crate::shape::{DateOrder, DateShape, Shape, ShapeFamily};

/// Two-digit years below this value belong to the 2000s.
const TWO_DIGIT_YEAR_PIVOT: i32 = 50;

static DATE_LAYOUT: OnceLock<Option<Regex>> = OnceLock::new();

fn date_layout() -> Option<&'static Regex> {
    DATE_LAYOUT
        .get_or_init(|| Regex::new(r"^([0-9]{1,4})([-/.])([0-9]{1,2})([-/.])([0-9]{1,4})$").ok())
        .as_ref()
}

/// Recognizes `YYYY-MM-DD`, `MM/DD/YYYY`, `DD.MM.YY` and friends.
pub struct DateMatcher;

impl Matcher for DateMatcher {
    fn id(&self) -> &'static str {
        "date"
    }

    fn family(&self) -> ShapeFamily {
        ShapeFamily::Date
    }

    fn try_match(&self, raw: &str) -> Shape {
        match_date(raw).map_or(Shape::Unmatched, Shape::Date)
    }
}

fn match_date(raw: &str) -> Option<DateShape> {
    let caps = date_layout()?.captures(raw)?;
    if caps[2] != caps[4] {
        return None;
    }
    let separator = caps[2].chars().next()?;
    let (first, second, third) = (&caps[1], &caps[3], &caps[5]);

    match (first.len(), second.len(), third.len()) {
        (4, 1..=2, 1..=2) => year_first(first, second, third, separator),
        // Dashed all-two-digit values follow ISO order: `YY-MM-DD`.
        (2, 2, 2) if separator == '-' => year_first(first, second, third, separator),
        (1..=2, 1..=2, 2 | 4) => year_last(first, second, third, separator),
        _ => None,
    }
}

fn year_first(year: &str, month: &str, day: &str, separator: char) -> Option<DateShape> {
    let year_digits = year.len();
    let full_year = expand_year(year.parse().ok()?, year_digits);
    is_calendar_date(full_year, month.parse().ok()?, day.parse().ok()?).then(|| DateShape {
        separator,
        order: DateOrder::Ymd,
        zero_padded: month.len() == 2 && day.len() == 2,
        year_digits: year_digits as u8,
    })
}

fn year_last(first: &str, second: &str, year: &str, separator: char) -> Option<DateShape> {
    let lead = first.parse::<u32>().ok()?;
    let middle = second.parse::<u32>().ok()?;
    let (order, month, day) = if lead > 12 && middle <= 12 {
        (DateOrder::Dmy, middle, lead)
    } else {
        (DateOrder::Mdy, lead, middle)
    };
    let year_digits = year.len();
    let full_year = expand_year(year.parse().ok()?, year_digits);
    is_calendar_date(full_year, month, day).then(|| DateShape {
        separator,
        order,
        zero_padded: first.len() == 2 && second.len() == 2,
        year_digits: year_digits as u8,
    })
}

fn expand_year(year: i32, digits: usize) -> i32 {
    if digits == 4 {
        year
    } else if year < TWO_DIGIT_YEAR_PIVOT {
        2000 + year
    } else {
        1900 + year
    }
}

fn is_calendar_date(year: i32, month: u32, day: u32) -> bool {
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}
