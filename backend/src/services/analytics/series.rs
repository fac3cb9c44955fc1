//! Time-series aggregation over daily sales history

use shared::models::SalesSeries;

/// Mean daily quantity over the trailing window of a sales series
///
/// The window counts recorded sale-days, not calendar days: gaps without
/// sales are not filled with zeros, so sparse series average only over the
/// days that had sales. Callers estimating a daily rate must keep that bias
/// in mind (a trailing window of 30 entries can span far more than 30
/// calendar days).
///
/// Returns 0.0 for an empty series. If the series has at most `window_days`
/// entries the mean covers the whole series, otherwise only the last
/// `window_days` entries in date order.
pub fn windowed_average(series: &SalesSeries, window_days: usize) -> f64 {
    if series.is_empty() {
        return 0.0;
    }

    let events = series.events();
    let tail = if events.len() <= window_days {
        events
    } else {
        &events[events.len() - window_days..]
    };

    let total: i64 = tail.iter().map(|e| e.quantity).sum();
    total as f64 / tail.len() as f64
}
