//! Multiplicative price estimator.
//!
//! A base price comes from the condition ladder and is scaled by genre,
//! popularity, supply, demand, and age. Every missing factor is neutral.
//!
//! # Examples
//!
//! ```
//! use bookxchange::application::pricing::estimate_price;
//! use bookxchange::domain::{Condition, Genre, PricingFactors};
//!
//! let factors = PricingFactors::new(Condition::LikeNew, Genre::NonFiction);
//! assert_eq!(estimate_price(&factors), 360);
//! ```

use chrono::{Datelike, Utc};
use tracing::debug;

use crate::domain::{Condition, Genre, PriceRange, PricingFactors};

/// Base price for a condition label that is not on the ladder.
pub const UNKNOWN_CONDITION_BASE: f64 = 200.0;

const POPULARITY_MULTIPLIER: f64 = 1.2;
const SUPPLY_FLOOR: f64 = 0.8;
const DEMAND_CAP: f64 = 1.5;
const AGE_FLOOR: f64 = 0.7;

/// Base price in currency units for a condition.
#[must_use]
pub const fn base_price(condition: Condition) -> f64 {
    match condition {
        Condition::LikeNew => 300.0,
        Condition::VeryGood => 250.0,
        Condition::Good => 200.0,
        Condition::Fair => 150.0,
        Condition::Acceptable => 100.0,
    }
}

/// Genre multiplier; unrecognized genres are neutral.
#[must_use]
pub fn genre_multiplier(genre: &Genre) -> f64 {
    match genre {
        Genre::Fiction => 1.0,
        Genre::NonFiction => 1.2,
        Genre::ScienceFiction => 1.1,
        Genre::Mystery => 1.05,
        Genre::Romance => 0.95,
        Genre::Biography => 1.1,
        Genre::History => 1.15,
        Genre::Poetry => 0.9,
        Genre::SelfHelp => 1.1,
        Genre::Other(_) => 1.0,
    }
}

fn popularity_multiplier(is_popular: Option<bool>) -> f64 {
    if is_popular == Some(true) {
        POPULARITY_MULTIPLIER
    } else {
        1.0
    }
}

fn supply_multiplier(supply_count: Option<u32>) -> f64 {
    match supply_count {
        Some(count) if count > 0 => SUPPLY_FLOOR.max(1.0 - f64::from(count) / 100.0),
        _ => 1.0,
    }
}

fn demand_multiplier(demand_score: Option<f64>) -> f64 {
    match demand_score {
        Some(score) if score != 0.0 => DEMAND_CAP.min(1.0 + score / 100.0),
        _ => 1.0,
    }
}

fn age_multiplier(publication_year: Option<i32>, current_year: i32) -> f64 {
    match publication_year {
        Some(year) if year != 0 => {
            let age = f64::from(current_year) - f64::from(year);
            AGE_FLOOR.max(1.0 - age / 100.0)
        }
        _ => 1.0,
    }
}

fn round_to_ten(value: f64) -> u32 {
    // Prices are positive, so round-half-away-from-zero matches half-up.
    ((value / 10.0).round() * 10.0) as u32
}

/// Suggest a price for `factors`, aging against the current calendar year.
#[must_use]
pub fn estimate_price(factors: &PricingFactors) -> u32 {
    estimate_price_at(factors, Utc::now().year())
}

/// Suggest a price for `factors` as of `current_year`.
///
/// The result is rounded to the nearest multiple of 10.
#[must_use]
pub fn estimate_price_at(factors: &PricingFactors, current_year: i32) -> u32 {
    let base = factors.condition.map_or(UNKNOWN_CONDITION_BASE, base_price);

    let raw = base
        * genre_multiplier(&factors.genre)
        * popularity_multiplier(factors.is_popular)
        * supply_multiplier(factors.supply_count)
        * demand_multiplier(factors.demand_score)
        * age_multiplier(factors.publication_year, current_year);

    let price = round_to_ten(raw);
    debug!(
        condition = ?factors.condition,
        genre = %factors.genre,
        raw,
        price,
        "Estimated price"
    );
    price
}

/// Price band for books similar to the one described.
///
/// `average` is the estimator's own output for the same inputs; `min` and
/// `max` sit 15% either side of it.
#[must_use]
pub fn price_range(condition: Option<Condition>, genre: &Genre, publication_year: Option<i32>) -> PriceRange {
    price_range_at(condition, genre, publication_year, Utc::now().year())
}

/// [`price_range`] as of `current_year`.
#[must_use]
pub fn price_range_at(
    condition: Option<Condition>,
    genre: &Genre,
    publication_year: Option<i32>,
    current_year: i32,
) -> PriceRange {
    let factors = PricingFactors {
        condition,
        genre: genre.clone(),
        publication_year,
        is_popular: None,
        supply_count: None,
        demand_score: None,
    };
    let average = estimate_price_at(&factors, current_year);
    let base = f64::from(average);

    PriceRange {
        min: (base * 0.85).round() as u32,
        max: (base * 1.15).round() as u32,
        average,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2026;

    fn factors(condition: Condition, genre: Genre) -> PricingFactors {
        PricingFactors::new(condition, genre)
    }

    #[test]
    fn like_new_non_fiction_is_360() {
        let f = factors(Condition::LikeNew, Genre::NonFiction);
        assert_eq!(estimate_price_at(&f, YEAR), 360);
    }

    #[test]
    fn acceptable_poetry_is_90() {
        let f = factors(Condition::Acceptable, Genre::Poetry);
        assert_eq!(estimate_price_at(&f, YEAR), 90);
    }

    #[test]
    fn unknown_condition_and_genre_price_from_defaults() {
        let f = PricingFactors::from_labels("Mint", "Cookbooks");
        assert_eq!(estimate_price_at(&f, YEAR), 200);
    }

    #[test]
    fn estimate_is_deterministic() {
        let f = factors(Condition::Good, Genre::Mystery)
            .with_popularity(true)
            .with_supply(7)
            .with_publication_year(Some(2001));
        assert_eq!(estimate_price_at(&f, YEAR), estimate_price_at(&f, YEAR));
    }

    #[test]
    fn popularity_adds_twenty_percent() {
        let f = factors(Condition::Good, Genre::Fiction).with_popularity(true);
        assert_eq!(estimate_price_at(&f, YEAR), 240);
    }

    #[test]
    fn supply_dampening_is_floored() {
        let some = factors(Condition::Good, Genre::Fiction).with_supply(10);
        assert_eq!(estimate_price_at(&some, YEAR), 180);

        let glut = factors(Condition::Good, Genre::Fiction).with_supply(500);
        assert_eq!(estimate_price_at(&glut, YEAR), 160);
    }

    #[test]
    fn demand_boost_is_capped() {
        let some = factors(Condition::Good, Genre::Fiction)
            .with_demand(25.0)
            .unwrap();
        assert_eq!(estimate_price_at(&some, YEAR), 250);

        let max = factors(Condition::Good, Genre::Fiction)
            .with_demand(100.0)
            .unwrap();
        assert_eq!(estimate_price_at(&max, YEAR), 300);
    }

    #[test]
    fn age_discount_is_floored() {
        let recent = factors(Condition::Good, Genre::Fiction).with_publication_year(Some(YEAR - 10));
        assert_eq!(estimate_price_at(&recent, YEAR), 180);

        let ancient = factors(Condition::Good, Genre::Fiction).with_publication_year(Some(1800));
        assert_eq!(estimate_price_at(&ancient, YEAR), 140);
    }

    #[test]
    fn extreme_publication_years_do_not_overflow() {
        let distant_past = factors(Condition::Good, Genre::Fiction).with_publication_year(Some(i32::MIN));
        assert_eq!(estimate_price_at(&distant_past, YEAR), 140);

        let distant_future = factors(Condition::Good, Genre::Fiction).with_publication_year(Some(i32::MAX));
        assert!(estimate_price_at(&distant_future, YEAR) > 200);

        let first_edition = factors(Condition::Good, Genre::Fiction).with_publication_year(Some(-1));
        assert_eq!(estimate_price_at(&first_edition, i32::MAX), 140);
    }

    #[test]
    fn zero_valued_signals_are_neutral() {
        let f = factors(Condition::Fair, Genre::Fiction)
            .with_supply(0)
            .with_demand(0.0)
            .unwrap();
        assert_eq!(estimate_price_at(&f, YEAR), 150);
    }

    #[test]
    fn rounds_to_nearest_ten() {
        // 250 * 1.05 = 262.5 -> 260
        let f = factors(Condition::VeryGood, Genre::Mystery);
        assert_eq!(estimate_price_at(&f, YEAR), 260);
        // 150 * 1.15 = 172.5 -> 170
        let f = factors(Condition::Fair, Genre::History);
        assert_eq!(estimate_price_at(&f, YEAR), 170);
    }

    #[test]
    fn price_range_average_matches_estimate() {
        for condition in Condition::ALL {
            for genre in Genre::KNOWN {
                for year in [None, Some(1990), Some(YEAR)] {
                    let range = price_range_at(Some(condition), &genre, year, YEAR);
                    let estimate = estimate_price_at(
                        &factors(condition, genre.clone()).with_publication_year(year),
                        YEAR,
                    );
                    assert_eq!(range.average, estimate);
                    assert!(range.min <= range.average && range.average <= range.max);
                }
            }
        }
    }

    #[test]
    fn price_range_spreads_fifteen_percent() {
        let range = price_range_at(Some(Condition::LikeNew), &Genre::NonFiction, None, YEAR);
        assert_eq!(
            range,
            PriceRange {
                min: 306,
                max: 414,
                average: 360
            }
        );
    }
}
