//! Pre-built test fixtures

use chrono::NaiveDate;
use core_kernel::{Currency, Money};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard claim amount
    pub fn usd_5000() -> Money {
        Money::new(dec!(5000), Currency::USD)
    }

    /// Standard premium
    pub fn usd_premium() -> Money {
        Money::new(dec!(1200), Currency::USD)
    }

    /// Standard coverage limit
    pub fn usd_coverage() -> Money {
        Money::new(dec!(100000), Currency::USD)
    }

    /// Zero USD
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// Arbitrary USD amount
    pub fn usd(amount: i64) -> Money {
        Money::new(amount.into(), Currency::USD)
    }
}

/// Fixture for calendar dates
pub struct DateFixtures;

impl DateFixtures {
    /// Standard policy start (Jan 1, 2024)
    pub fn policy_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Standard policy end (Dec 31, 2024)
    pub fn policy_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    /// Standard submission day
    pub fn submission_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    /// Arbitrary day in 2024
    pub fn day(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }
}
