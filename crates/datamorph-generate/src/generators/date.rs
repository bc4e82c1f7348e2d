use std::ops::RangeInclusive;

use rand::{Rng, RngCore};

use datamorph_core::{DateOrder, DateShape};

/// Days stop at 28 so every month is valid.
const MAX_DAY: u32 = 28;

pub(super) fn generate_date(
    shape: &DateShape,
    years: &RangeInclusive<i32>,
    rng: &mut dyn RngCore,
) -> String {
    let year = rng.random_range(years.clone());
    // A day-first date must keep a day above 12 or it reads as month-first.
    let day = match shape.order {
        DateOrder::Dmy => rng.random_range(13..=MAX_DAY),
        DateOrder::Ymd | DateOrder::Mdy => rng.random_range(1..=MAX_DAY),
    };
    let mut month = rng.random_range(1..=12_u32);
    // Unpadded layouts need at least one single-digit field.
    if !shape.zero_padded && day >= 10 && month >= 10 {
        month = rng.random_range(1..=9);
    }

    let day = field(day, shape.zero_padded);
    let month = field(month, shape.zero_padded);
    let year = if shape.year_digits == 2 {
        format!("{:02}", year.rem_euclid(100))
    } else {
        format!("{year:04}")
    };
    let sep = shape.separator;

    match shape.order {
        DateOrder::Ymd => format!("{year}{sep}{month}{sep}{day}"),
        DateOrder::Mdy => format!("{month}{sep}{day}{sep}{year}"),
        DateOrder::Dmy => format!("{day}{sep}{month}{sep}{year}"),
    }
}

fn field(value: u32, zero_padded: bool) -> String {
    if zero_padded {
        format!("{value:02}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn shape(order: DateOrder, zero_padded: bool, year_digits: u8) -> DateShape {
        DateShape {
            separator: '/',
            order,
            zero_padded,
            year_digits,
        }
    }

    #[test]
    fn day_first_dates_keep_days_above_twelve() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let value = generate_date(&shape(DateOrder::Dmy, true, 4), &(1950..=2030), &mut rng);
            let day: u32 = value[..2].parse().expect("numeric day");
            assert!((13..=28).contains(&day), "{value}");
        }
    }

    #[test]
    fn unpadded_dates_keep_a_short_field() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..200 {
            let value = generate_date(&shape(DateOrder::Mdy, false, 2), &(1950..=2030), &mut rng);
            let fields: Vec<&str> = value.split('/').collect();
            assert_eq!(fields.len(), 3);
            assert!(fields[0].len() == 1 || fields[1].len() == 1, "{value}");
            assert_eq!(fields[2].len(), 2);
        }
    }

    #[test]
    fn years_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let value = generate_date(&shape(DateOrder::Ymd, true, 4), &(1990..=1992), &mut rng);
            let year: i32 = value[..4].parse().expect("numeric year");
            assert!((1990..=1992).contains(&year));
        }
    }
}
