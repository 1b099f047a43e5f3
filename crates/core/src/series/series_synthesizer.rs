//! Synthesizes chartable series from a handful of known metrics.
//!
//! Only the start value, the current value and the horizon are known for a
//! manual asset. The asset line interpolates between them; the benchmark
//! compounds the start value monthly at the inflation rate. Long horizons
//! are thinned to at most [`MAX_SERIES_POINTS`] evenly spaced months.

use std::f64::consts::PI;

use chrono::{NaiveDate, Utc};
use log::debug;

use super::series_model::{Series, SeriesPair, TimePoint};
use crate::constants::{
    FALLBACK_SERIES_BASE, MAX_SERIES_POINTS, MIN_SERIES_BASE, MIN_SERIES_MONTHS,
};
use crate::metrics::Metrics;
use crate::utils::time_utils::months_before;

/// Ripple amplitude as a fraction of the value range. Texture only.
const RIPPLE_AMPLITUDE: f64 = 0.01;

/// Synthesizes both series ending in the current month.
pub fn synthesize_series(metrics: &Metrics) -> SeriesPair {
    synthesize_series_as_of(metrics, Utc::now().date_naive())
}

/// Synthesizes both series with the last point dated `today`.
///
/// Never fails: the floors on base value and length make degenerate metrics
/// still produce two plottable series of equal length.
pub fn synthesize_series_as_of(metrics: &Metrics, today: NaiveDate) -> SeriesPair {
    let base = metrics
        .base_invested
        .or(metrics.invested)
        .or(metrics.current_value)
        .unwrap_or(FALLBACK_SERIES_BASE)
        .max(MIN_SERIES_BASE);
    let current = metrics.current_value.unwrap_or(base * 1.05).max(base);
    let months = series_months(metrics.years);
    let indices = sample_months(months);

    debug!(
        "Synthesizing {} of {} monthly points from {:.2} to {:.2}",
        indices.len(),
        months,
        base,
        current
    );

    let monthly_rate = monthly_inflation_rate(metrics.inflation_rate);
    let dates = monthly_dates(today, months, &indices);
    let asset_values = indices
        .iter()
        .map(|&i| rippled_value(base, current, i, months))
        .collect();
    let inflation_values = indices
        .iter()
        .map(|&i| compounded_value(base, monthly_rate, i))
        .collect();

    SeriesPair {
        asset_series: to_series(&dates, asset_values),
        inflation_series: to_series(&dates, inflation_values),
    }
}

/// Number of monthly points for a horizon: at least 24, whatever the horizon.
pub fn series_months(years: f64) -> usize {
    let years = if years.is_finite() { years.max(1.0) } else { 1.0 };
    ((years * 12.0).ceil() as usize).max(MIN_SERIES_MONTHS)
}

/// Monthly rate that compounds to `annual_rate` over twelve months.
pub fn monthly_inflation_rate(annual_rate: f64) -> f64 {
    (1.0 + annual_rate).powf(1.0 / 12.0) - 1.0
}

/// `base * (1 + monthly_rate)^i` for `i in 0..months`.
pub fn inflation_path(base: f64, annual_rate: f64, months: usize) -> Vec<f64> {
    let monthly_rate = monthly_inflation_rate(annual_rate);
    (0..months)
        .map(|i| compounded_value(base, monthly_rate, i))
        .collect()
}

/// Month indices to plot: every month up to [`MAX_SERIES_POINTS`], otherwise
/// evenly spaced ones that keep the first and the last month.
pub fn sample_months(months: usize) -> Vec<usize> {
    if months <= MAX_SERIES_POINTS {
        return (0..months).collect();
    }
    let last = (months - 1) as f64;
    let steps = (MAX_SERIES_POINTS - 1) as f64;
    (0..MAX_SERIES_POINTS)
        .map(|k| (k as f64 * last / steps).round() as usize)
        .collect()
}

fn compounded_value(base: f64, monthly_rate: f64, month: usize) -> f64 {
    base * (1.0 + monthly_rate).powf(month as f64)
}

/// Point `month` of the linear path from `base` to `current`, plus a
/// one-period sine ripple.
fn rippled_value(base: f64, current: f64, month: usize, months: usize) -> f64 {
    let range = current - base;
    let progress = month as f64 / (months.max(2) - 1) as f64;
    let ripple = (2.0 * PI * progress).sin() * range * RIPPLE_AMPLITUDE;
    base + range * progress + ripple
}

/// Dates of the sampled months, counted back from `today`, oldest first.
fn monthly_dates(today: NaiveDate, months: usize, indices: &[usize]) -> Vec<NaiveDate> {
    indices
        .iter()
        .map(|&i| months_before(today, u32::try_from(months - 1 - i).unwrap_or(u32::MAX)))
        .collect()
}

fn to_series(dates: &[NaiveDate], values: Vec<f64>) -> Series {
    let points: Vec<TimePoint> = dates
        .iter()
        .zip(values)
        .map(|(&time, value)| TimePoint { time, value })
        .collect();
    // Distinct sampled months, so dates are strictly increasing.
    Series::from_trusted(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::RiskLevel;
    use approx::assert_abs_diff_eq;

    fn metrics(base_invested: Option<f64>, current_value: Option<f64>, years: f64) -> Metrics {
        Metrics {
            currency: "EUR".to_string(),
            invested: base_invested,
            base_invested,
            expenses_total: 0.0,
            current_value,
            gain_loss: None,
            roi_percent: None,
            monthly_cashflow: None,
            inflation_rate: 0.035,
            years,
            inflation_target: None,
            inflation_gap_percent: None,
            risk_level: RiskLevel::Medium,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    #[test]
    fn test_short_horizon_still_gets_24_points() {
        let pair = synthesize_series_as_of(&metrics(Some(5000.0), Some(5200.0), 0.5), today());
        assert_eq!(pair.asset_series.len(), 24);
        assert_eq!(pair.inflation_series.len(), 24);
    }

    #[test]
    fn test_medium_horizon_uses_one_point_per_month() {
        let pair = synthesize_series_as_of(&metrics(Some(5000.0), Some(9000.0), 8.0), today());
        assert_eq!(pair.asset_series.len(), 96);
        assert_eq!(series_months(2.1), 26);
    }

    #[test]
    fn test_long_horizon_is_thinned_to_max_points() {
        let pair = synthesize_series_as_of(&metrics(Some(5000.0), Some(9000.0), 10.0), today());
        assert_eq!(pair.asset_series.len(), MAX_SERIES_POINTS);
        assert_eq!(pair.inflation_series.len(), MAX_SERIES_POINTS);
        assert_eq!(pair.asset_series.last().time, today());
        assert_eq!(
            pair.asset_series.first().time,
            NaiveDate::from_ymd_opt(2016, 11, 15).unwrap()
        );
        assert_abs_diff_eq!(pair.asset_series.last().value, 9000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(
            pair.inflation_series.last().value,
            5000.0 * 1.035f64.powf(119.0 / 12.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_millennial_maturity_stays_bounded() {
        let pair =
            synthesize_series_as_of(&metrics(Some(5000.0), Some(9000.0), 7973.0), today());
        assert_eq!(pair.asset_series.len(), MAX_SERIES_POINTS);
        assert!(pair
            .asset_series
            .points()
            .windows(2)
            .all(|w| w[0].time < w[1].time));
        assert!(pair.inflation_series.points().iter().all(|p| p.value.is_finite()));
    }

    #[test]
    fn test_sample_months_keeps_both_ends() {
        assert_eq!(sample_months(30), (0..30).collect::<Vec<_>>());
        let sampled = sample_months(1_000);
        assert_eq!(sampled.len(), MAX_SERIES_POINTS);
        assert_eq!(sampled.first(), Some(&0));
        assert_eq!(sampled.last(), Some(&999));
        assert!(sampled.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_dates_walk_back_monthly_and_end_today() {
        let pair = synthesize_series_as_of(&metrics(Some(5000.0), Some(5200.0), 1.0), today());
        let points = pair.asset_series.points();
        assert_eq!(pair.asset_series.last().time, today());
        assert_eq!(
            pair.asset_series.first().time,
            NaiveDate::from_ymd_opt(2024, 11, 15).unwrap()
        );
        assert!(points.windows(2).all(|w| w[0].time < w[1].time));
        assert_eq!(pair.asset_series.points().len(), pair.inflation_series.points().len());
    }

    #[test]
    fn test_asset_series_runs_from_base_to_current() {
        let pair = synthesize_series_as_of(&metrics(Some(8000.0), Some(10000.0), 5.0), today());
        assert_abs_diff_eq!(pair.asset_series.first().value, 8000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pair.asset_series.last().value, 10000.0, epsilon = 1e-6);
        // Ripple never exceeds 1% of the range
        let months = pair.asset_series.len();
        for (i, point) in pair.asset_series.points().iter().enumerate() {
            let linear = 8000.0 + 2000.0 * i as f64 / (months - 1) as f64;
            assert!((point.value - linear).abs() <= 20.0 + 1e-9);
        }
    }

    #[test]
    fn test_inflation_compounds_monthly() {
        let path = inflation_path(1000.0, 0.035, 13);
        assert_abs_diff_eq!(path[0], 1000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(path[12], 1035.0, epsilon = 0.5);
        assert_abs_diff_eq!(path[11], 1000.0 * 1.035f64.powf(11.0 / 12.0), epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_metrics_use_fallbacks() {
        let pair = synthesize_series_as_of(&metrics(None, None, 0.0), today());
        assert_abs_diff_eq!(pair.asset_series.first().value, 10000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pair.asset_series.last().value, 10500.0, epsilon = 1e-6);
        assert!(pair.inflation_series.last().value > pair.inflation_series.first().value);
    }

    #[test]
    fn test_base_floor_and_current_not_below_base() {
        let pair = synthesize_series_as_of(&metrics(Some(50.0), Some(20.0), 1.0), today());
        assert_abs_diff_eq!(pair.asset_series.first().value, 1000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pair.asset_series.last().value, 1000.0, epsilon = 1e-9);
    }
}
