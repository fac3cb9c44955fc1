//! Demand forecasting from historical sales trends

use serde::{Deserialize, Serialize};
use shared::models::SalesSeries;

use super::series::windowed_average;
use super::round1;

/// Minimum number of sale-days required before a trend can be estimated
const MIN_EVENTS_FOR_FORECAST: usize = 7;

/// Window of recent sale-days used as the demand baseline
const RECENT_WINDOW_DAYS: usize = 15;

/// Detected demand trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    #[serde(rename = "Creciente")]
    Creciente,
    #[serde(rename = "Estable")]
    Estable,
    #[serde(rename = "Decreciente")]
    Decreciente,
    #[serde(rename = "Datos insuficientes")]
    DatosInsuficientes,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Creciente => "Creciente",
            Trend::Estable => "Estable",
            Trend::Decreciente => "Decreciente",
            Trend::DatosInsuficientes => "Datos insuficientes",
        }
    }
}

/// Forecast confidence, based purely on how much history exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    #[serde(rename = "Alta")]
    Alta,
    #[serde(rename = "Media")]
    Media,
    #[serde(rename = "Baja")]
    Baja,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Alta => "Alta",
            Confidence::Media => "Media",
            Confidence::Baja => "Baja",
        }
    }
}

/// Projected demand over a horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemandForecast {
    pub estimated_demand: f64,
    pub trend: Trend,
    pub confidence: Confidence,
}

/// Estimate future demand for a product over `horizon_days`
///
/// Heuristic, not a statistical model: the sorted series is split at its
/// midpoint and the half-means compared to pick a trend (second half above
/// 1.2x the first is growing, below 0.8x is declining), then the mean of the
/// last 15 sale-days is scaled by a trend adjustment factor and the horizon.
///
/// Fewer than 7 sale-days yields the sentinel result (demand 0, trend
/// "Datos insuficientes", confidence "Baja").
pub fn forecast_demand(series: &SalesSeries, horizon_days: u32) -> DemandForecast {
    if series.len() < MIN_EVENTS_FOR_FORECAST {
        return DemandForecast {
            estimated_demand: 0.0,
            trend: Trend::DatosInsuficientes,
            confidence: Confidence::Baja,
        };
    }

    let quantities: Vec<f64> = series.events().iter().map(|e| e.quantity as f64).collect();
    let mid = quantities.len() / 2;
    let first_half_mean = mean(&quantities[..mid]);
    let second_half_mean = mean(&quantities[mid..]);

    let (trend, adjustment_factor) = if second_half_mean > first_half_mean * 1.2 {
        (Trend::Creciente, 1.1)
    } else if second_half_mean < first_half_mean * 0.8 {
        (Trend::Decreciente, 0.9)
    } else {
        (Trend::Estable, 1.0)
    };

    let recent_average = windowed_average(series, RECENT_WINDOW_DAYS);
    let estimated_demand = round1(recent_average * adjustment_factor * horizon_days as f64);

    let confidence = if series.len() >= 30 {
        Confidence::Alta
    } else if series.len() >= 14 {
        Confidence::Media
    } else {
        Confidence::Baja
    };

    DemandForecast {
        estimated_demand,
        trend,
        confidence,
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
