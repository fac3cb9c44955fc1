//! Inventory analytics algorithms
//!
//! Pure, stateless computations over sales-history series and current stock
//! levels. Each function is a deterministic function of its inputs; no module
//! here touches the database or holds state between calls.

pub mod forecast;
pub mod series;
pub mod stock_health;
pub mod turnover;

pub use forecast::{forecast_demand, Confidence, DemandForecast, Trend};
pub use series::windowed_average;
pub use stock_health::{
    classify_criticality, days_until_depletion, detect_overstock, AlertLevel, OverstockAssessment,
    StockHealthAssessment, DEPLETION_SENTINEL_DAYS,
};
pub use turnover::{turnover, TurnoverAssessment, Velocity};

/// Round to 1 decimal place (report payload convention)
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to 2 decimal places (report payload convention)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
