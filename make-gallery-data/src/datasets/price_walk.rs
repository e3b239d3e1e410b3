//! Synthetic daily closing-price series
//!
//! A geometric random walk over weekday dates, standing in for the sample
//! financial data used by the time series charts.

use crate::output::{PricePoint, PriceSeries};
use chrono::{Datelike, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Default number of trading days in the series
pub const DEFAULT_TRADING_DAYS: usize = 500;

/// Display symbol for the synthetic series
pub const SYMBOL: &str = "DEMO";

/// Mean of the daily log-return distribution
const DAILY_DRIFT: f64 = 0.0005;

/// Standard deviation of the daily log-return distribution
const DAILY_VOLATILITY: f64 = 0.02;

/// Closing price on the first trading day
const INITIAL_CLOSE: f64 = 100.0;

/// First trading date of the default series
pub fn default_start_date() -> Result<NaiveDate, String> {
    NaiveDate::from_ymd_opt(2004, 8, 19).ok_or_else(|| "Start date out of range".to_string())
}

/// Generates a weekday-only closing-price walk
///
/// The first point closes at 100.0 on the first trading day at or after
/// `start_date`; every later close multiplies the previous one by
/// `exp(r)` with `r` drawn from Normal(0.0005, 0.02).
pub fn generate(
    seed: u64,
    start_date: NaiveDate,
    trading_days: usize,
) -> Result<PriceSeries, String> {
    let returns = Normal::new(DAILY_DRIFT, DAILY_VOLATILITY)
        .map_err(|e| format!("Invalid return distribution: {}", e))?;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut points = Vec::with_capacity(trading_days);
    let mut date = start_date;
    let mut close = INITIAL_CLOSE;

    while points.len() < trading_days {
        if is_trading_day(date) {
            points.push(PricePoint { date, close });
            close *= returns.sample(&mut rng).exp();
        }
        date = date
            .succ_opt()
            .ok_or_else(|| "Date range exhausted while generating prices".to_string())?;
    }

    Ok(PriceSeries {
        symbol: SYMBOL.to_string(),
        points,
    })
}

/// Weekends are skipped; exchange holidays are not modeled
fn is_trading_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
