//! Stock criticality, depletion horizon and overstock detection

use serde::{Deserialize, Serialize};

/// Sentinel horizon meaning "no sales history, stock will last indefinitely"
pub const DEPLETION_SENTINEL_DAYS: i64 = 999;

/// Alert level for a product's stock position relative to its minimum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertLevel {
    #[serde(rename = "AGOTADO")]
    Agotado,
    #[serde(rename = "CRÍTICO")]
    Critico,
    #[serde(rename = "BAJO")]
    Bajo,
    #[serde(rename = "NORMAL")]
    Normal,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Agotado => "AGOTADO",
            AlertLevel::Critico => "CRÍTICO",
            AlertLevel::Bajo => "BAJO",
            AlertLevel::Normal => "NORMAL",
        }
    }

    /// Ordering rank, most severe first
    pub fn severity_rank(&self) -> u8 {
        match self {
            AlertLevel::Agotado => 0,
            AlertLevel::Critico => 1,
            AlertLevel::Bajo => 2,
            AlertLevel::Normal => 3,
        }
    }
}

/// Depletion-risk classification for a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockHealthAssessment {
    pub is_critical: bool,
    pub alert_level: AlertLevel,
    pub suggested_action: &'static str,
}

/// Overstock classification for a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverstockAssessment {
    pub is_overstock: bool,
    pub excess_days: i64,
    pub suggestion: String,
}

/// Days until current stock reaches zero at the given daily sales rate
///
/// Already-depleted stock yields 0. A non-positive rate (no sales history)
/// yields the 999-day sentinel.
pub fn days_until_depletion(current_stock: i64, daily_rate: f64) -> i64 {
    if current_stock <= 0 {
        return 0;
    }

    if daily_rate <= 0.0 {
        return DEPLETION_SENTINEL_DAYS;
    }

    (current_stock as f64 / daily_rate) as i64
}

/// Classify how critical a product's stock level is against its minimum
///
/// The percentage of minimum stock drives the tier: at or below 50% is
/// CRÍTICO, at or below 100% is BAJO, above is NORMAL. A minimum of zero
/// (no minimum configured) counts as exactly 100% and lands in the BAJO
/// band. Only NORMAL is non-critical.
pub fn classify_criticality(current_stock: i64, minimum_stock: i64) -> StockHealthAssessment {
    if current_stock <= 0 {
        return StockHealthAssessment {
            is_critical: true,
            alert_level: AlertLevel::Agotado,
            suggested_action: "Reponer inmediatamente",
        };
    }

    // No minimum configured counts as exactly 100% of it
    let percentage = if minimum_stock > 0 {
        current_stock as f64 / minimum_stock as f64 * 100.0
    } else {
        100.0
    };

    if percentage <= 50.0 {
        StockHealthAssessment {
            is_critical: true,
            alert_level: AlertLevel::Critico,
            suggested_action: "Reponer urgente",
        }
    } else if percentage <= 100.0 {
        StockHealthAssessment {
            is_critical: true,
            alert_level: AlertLevel::Bajo,
            suggested_action: "Programar reposición",
        }
    } else {
        StockHealthAssessment {
            is_critical: false,
            alert_level: AlertLevel::Normal,
            suggested_action: "Monitorear",
        }
    }
}

/// Detect whether current stock exceeds `threshold_days` of coverage
///
/// With no sales history (non-positive rate) the product cannot be evaluated
/// and is reported as not overstocked.
pub fn detect_overstock(
    current_stock: i64,
    daily_rate: f64,
    threshold_days: f64,
) -> OverstockAssessment {
    if daily_rate <= 0.0 {
        return OverstockAssessment {
            is_overstock: false,
            excess_days: 0,
            suggestion: "Sin datos de ventas para evaluar".to_string(),
        };
    }

    let days_of_stock = current_stock as f64 / daily_rate;

    if days_of_stock > threshold_days {
        let excess_days = (days_of_stock - threshold_days) as i64;
        OverstockAssessment {
            is_overstock: true,
            excess_days,
            suggestion: format!("Reducir pedidos por {} días", excess_days),
        }
    } else {
        OverstockAssessment {
            is_overstock: false,
            excess_days: 0,
            suggestion: "Stock en niveles normales".to_string(),
        }
    }
}
