//! Inventory turnover ratio and velocity classification

use serde::{Deserialize, Serialize};

use super::round2;

/// Rotation velocity tiers, annual-rate thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Velocity {
    #[serde(rename = "Muy Rápida")]
    MuyRapida,
    #[serde(rename = "Rápida")]
    Rapida,
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "Lenta")]
    Lenta,
    #[serde(rename = "Muy Lenta")]
    MuyLenta,
    #[serde(rename = "Sin stock")]
    SinStock,
}

impl Velocity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Velocity::MuyRapida => "Muy Rápida",
            Velocity::Rapida => "Rápida",
            Velocity::Normal => "Normal",
            Velocity::Lenta => "Lenta",
            Velocity::MuyLenta => "Muy Lenta",
            Velocity::SinStock => "Sin stock",
        }
    }

    /// Fast-moving tiers (sold out more than 6 times in the period)
    pub fn is_fast(&self) -> bool {
        matches!(self, Velocity::MuyRapida | Velocity::Rapida)
    }

    /// Slow-moving tiers (sold out fewer than 3 times in the period)
    pub fn is_slow(&self) -> bool {
        matches!(self, Velocity::Lenta | Velocity::MuyLenta)
    }
}

/// Turnover ratio with its velocity classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnoverAssessment {
    pub turnover_ratio: f64,
    pub velocity: Velocity,
}

/// Inventory turnover: units sold in the period over average stock held
///
/// Tiers are evaluated highest threshold first with inclusive lower bounds
/// (>=12 Muy Rápida, >=6 Rápida, >=3 Normal, >=1 Lenta, else Muy Lenta);
/// classification uses the unrounded ratio, the reported ratio is rounded to
/// 2 decimals. Non-positive average stock yields ratio 0 / "Sin stock".
pub fn turnover(period_sales: f64, average_stock: f64) -> TurnoverAssessment {
    if average_stock <= 0.0 {
        return TurnoverAssessment {
            turnover_ratio: 0.0,
            velocity: Velocity::SinStock,
        };
    }

    let ratio = period_sales / average_stock;

    let velocity = if ratio >= 12.0 {
        Velocity::MuyRapida
    } else if ratio >= 6.0 {
        Velocity::Rapida
    } else if ratio >= 3.0 {
        Velocity::Normal
    } else if ratio >= 1.0 {
        Velocity::Lenta
    } else {
        Velocity::MuyLenta
    };

    TurnoverAssessment {
        turnover_ratio: round2(ratio),
        velocity,
    }
}
