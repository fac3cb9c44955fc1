//! Report aggregation over the product catalog
//!
//! Joins per-product sales history with the catalog snapshot, runs the
//! analytics algorithms and buckets the results into severity tiers and
//! per-category rollups. Every report is recomputed from scratch on each
//! call and fails as a whole if any storage fetch fails (all-or-nothing,
//! no partial results).

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::analytics::{
    classify_criticality, days_until_depletion, detect_overstock, forecast_demand, round1, round2,
    turnover, windowed_average, AlertLevel, Confidence, Trend, Velocity, DEPLETION_SENTINEL_DAYS,
};
use crate::services::catalog::CatalogStore;

/// Sales-history lookback per report kind, in days
const DEMAND_LOOKBACK_DAYS: i32 = 90;
const DEPLETION_LOOKBACK_DAYS: i32 = 30;
const OVERSTOCK_LOOKBACK_DAYS: i32 = 60;
const TURNOVER_LOOKBACK_DAYS: i32 = 90;

/// Forecast horizon for the demand report
const DEMAND_HORIZON_DAYS: u32 = 30;

/// Moving-average window used to estimate a daily sales rate
const DAILY_RATE_WINDOW: usize = 30;
const OVERSTOCK_RATE_WINDOW: usize = 60;

/// Depletion urgency boundaries, in days of remaining stock
const DEPLETION_URGENT_DAYS: i64 = 7;
const DEPLETION_SOON_DAYS: i64 = 30;

/// Default overstock threshold (days of coverage considered excessive)
pub const DEFAULT_OVERSTOCK_THRESHOLD_DAYS: f64 = 60.0;

/// Report service orchestrating the analytics engine over a catalog store
#[derive(Clone)]
pub struct ReportService<S> {
    store: S,
    overstock_threshold_days: f64,
}

/// Urgency tier for the depletion forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Urgency {
    #[serde(rename = "CRÍTICO")]
    Critico,
    #[serde(rename = "MEDIO")]
    Medio,
    #[serde(rename = "BAJO")]
    Bajo,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Critico => "CRÍTICO",
            Urgency::Medio => "MEDIO",
            Urgency::Bajo => "BAJO",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Urgency::Critico => 0,
            Urgency::Medio => 1,
            Urgency::Bajo => 2,
        }
    }
}

/// Recommendation category for the executive summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecommendationKind {
    #[serde(rename = "URGENTE")]
    Urgente,
    #[serde(rename = "OPTIMIZACIÓN")]
    Optimizacion,
    #[serde(rename = "ANÁLISIS")]
    Analisis,
}

// ---------------------------------------------------------------------------
// Report payloads
// ---------------------------------------------------------------------------

/// Stock-criticality report
#[derive(Debug, Serialize)]
pub struct StockCriticalReport {
    pub generated_at: String,
    pub summary: StockCriticalSummary,
    pub by_category: BTreeMap<String, CategoryStockBreakdown>,
    pub critical_products: Vec<CriticalProductEntry>,
}

#[derive(Debug, Serialize)]
pub struct StockCriticalSummary {
    pub total_products: usize,
    pub agotado: usize,
    pub critico: usize,
    pub bajo: usize,
    pub normal: usize,
}

#[derive(Debug, Default, Serialize)]
pub struct CategoryStockBreakdown {
    pub agotado: usize,
    pub critico: usize,
    pub bajo: usize,
    pub normal: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CriticalProductEntry {
    pub id: Uuid,
    pub name: String,
    pub current_stock: i64,
    pub minimum_stock: i64,
    pub sale_price: f64,
    pub category: String,
    pub supplier: String,
    pub alert_level: AlertLevel,
    pub suggested_action: &'static str,
}

/// Demand-forecast report
#[derive(Debug, Serialize)]
pub struct DemandForecastReport {
    pub generated_at: String,
    pub lookback_days: i32,
    pub horizon_days: u32,
    pub summary: DemandSummary,
    pub by_category: BTreeMap<String, CategoryDemandBreakdown>,
    pub products: Vec<DemandForecastEntry>,
}

#[derive(Debug, Serialize)]
pub struct DemandSummary {
    pub total_products: usize,
    pub creciente: usize,
    pub estable: usize,
    pub decreciente: usize,
    pub sin_datos: usize,
}

#[derive(Debug, Default, Serialize)]
pub struct CategoryDemandBreakdown {
    pub creciente: usize,
    pub estable: usize,
    pub decreciente: usize,
    pub sin_datos: usize,
    pub total_estimated_demand: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemandForecastEntry {
    pub id: Uuid,
    pub name: String,
    pub current_stock: i64,
    pub category: String,
    pub daily_average: f64,
    pub estimated_demand: f64,
    pub trend: Trend,
    pub confidence: Confidence,
    pub suggested_stock: i64,
}

/// Depletion-forecast report
#[derive(Debug, Serialize)]
pub struct DepletionForecastReport {
    pub generated_at: String,
    pub lookback_days: i32,
    pub summary: DepletionSummary,
    pub by_category: BTreeMap<String, CategoryDepletionBreakdown>,
    pub products: Vec<DepletionEntry>,
}

#[derive(Debug, Serialize)]
pub struct DepletionSummary {
    pub total_products: usize,
    pub critico: usize,
    pub medio: usize,
    pub bajo: usize,
}

#[derive(Debug, Default, Serialize)]
pub struct CategoryDepletionBreakdown {
    pub critico: usize,
    pub medio: usize,
    pub bajo: usize,
    /// Mean days-until-depletion over products with a finite horizon
    pub average_days: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepletionEntry {
    pub id: Uuid,
    pub name: String,
    pub current_stock: i64,
    pub category: String,
    pub supplier: String,
    pub daily_average: f64,
    /// None when there is no sales history (999-day sentinel)
    pub days_until_depletion: Option<i64>,
    pub estimated_depletion_date: String,
    pub urgency: Urgency,
}

/// Overstock report
#[derive(Debug, Serialize)]
pub struct OverstockReport {
    pub generated_at: String,
    pub lookback_days: i32,
    pub threshold_days: f64,
    pub summary: OverstockSummary,
    pub by_category: BTreeMap<String, CategoryOverstockBreakdown>,
    pub products: Vec<OverstockEntry>,
}

#[derive(Debug, Serialize)]
pub struct OverstockSummary {
    pub total_products: usize,
    pub total_excess_value: f64,
}

#[derive(Debug, Default, Serialize)]
pub struct CategoryOverstockBreakdown {
    pub products: usize,
    pub immobilized_value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverstockEntry {
    pub id: Uuid,
    pub name: String,
    pub current_stock: i64,
    pub category: String,
    pub daily_average: f64,
    pub excess_days: i64,
    pub excess_units: i64,
    pub excess_value: f64,
    pub suggestion: String,
}

/// Turnover report
#[derive(Debug, Serialize)]
pub struct TurnoverReport {
    pub generated_at: String,
    pub lookback_days: i32,
    pub summary: TurnoverSummary,
    pub by_category: BTreeMap<String, CategoryTurnoverBreakdown>,
    pub products: Vec<TurnoverEntry>,
}

#[derive(Debug, Serialize)]
pub struct TurnoverSummary {
    pub total_products: usize,
    pub fast_movers: usize,
    pub slow_movers: usize,
    pub average_ratio: f64,
    pub total_revenue: f64,
}

#[derive(Debug, Default, Serialize)]
pub struct CategoryTurnoverBreakdown {
    pub fast: usize,
    pub normal: usize,
    pub slow: usize,
    pub average_ratio: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TurnoverEntry {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub current_stock: i64,
    pub total_sold: i64,
    pub days_with_sales: usize,
    /// Share of lookback days that had at least one sale, as a percentage
    pub sales_frequency: f64,
    pub turnover_ratio: f64,
    pub velocity: Velocity,
    pub revenue: f64,
}

/// Executive summary combining the critical-stock, overstock and turnover
/// reports
#[derive(Debug, Serialize)]
pub struct ExecutiveSummaryReport {
    pub generated_at: String,
    pub alerts: AlertCounts,
    pub metrics: GlobalMetrics,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Serialize)]
pub struct AlertCounts {
    pub stock_critical_products: usize,
    pub overstocked_products: usize,
    pub slow_moving_products: usize,
}

#[derive(Debug, Serialize)]
pub struct GlobalMetrics {
    pub total_products_analyzed: usize,
    pub immobilized_value: f64,
    pub average_turnover_ratio: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

impl<S: CatalogStore> ReportService<S> {
    /// Create a report service with the default overstock threshold
    pub fn new(store: S) -> Self {
        Self::with_overstock_threshold(store, DEFAULT_OVERSTOCK_THRESHOLD_DAYS)
    }

    /// Create a report service with a custom overstock threshold
    pub fn with_overstock_threshold(store: S, overstock_threshold_days: f64) -> Self {
        Self {
            store,
            overstock_threshold_days,
        }
    }

    /// Stock-criticality report over the full active catalog
    pub async fn stock_critical_report(
        &self,
        now: DateTime<Utc>,
    ) -> AppResult<StockCriticalReport> {
        let catalog = self.store.fetch_active_catalog().await?;

        let mut summary = StockCriticalSummary {
            total_products: catalog.len(),
            agotado: 0,
            critico: 0,
            bajo: 0,
            normal: 0,
        };
        let mut by_category: BTreeMap<String, CategoryStockBreakdown> = BTreeMap::new();
        let mut critical_products = Vec::new();

        for product in &catalog {
            let assessment = classify_criticality(product.current_stock, product.minimum_stock);

            let breakdown = by_category
                .entry(product.category_label().to_string())
                .or_default();
            breakdown.total += 1;
            match assessment.alert_level {
                AlertLevel::Agotado => {
                    summary.agotado += 1;
                    breakdown.agotado += 1;
                }
                AlertLevel::Critico => {
                    summary.critico += 1;
                    breakdown.critico += 1;
                }
                AlertLevel::Bajo => {
                    summary.bajo += 1;
                    breakdown.bajo += 1;
                }
                AlertLevel::Normal => {
                    summary.normal += 1;
                    breakdown.normal += 1;
                }
            }

            if assessment.is_critical {
                critical_products.push(CriticalProductEntry {
                    id: product.id,
                    name: product.name.clone(),
                    current_stock: product.current_stock,
                    minimum_stock: product.minimum_stock,
                    sale_price: decimal_to_f64(product.sale_price),
                    category: product.category_label().to_string(),
                    supplier: product.supplier_label().to_string(),
                    alert_level: assessment.alert_level,
                    suggested_action: assessment.suggested_action,
                });
            }
        }

        // Most severe first, then closest to depletion relative to the
        // configured minimum; products without a minimum sort last
        critical_products.sort_by(|a, b| {
            a.alert_level
                .severity_rank()
                .cmp(&b.alert_level.severity_rank())
                .then(stock_ratio(a).total_cmp(&stock_ratio(b)))
        });

        Ok(StockCriticalReport {
            generated_at: format_timestamp(now),
            summary,
            by_category,
            critical_products,
        })
    }

    /// Demand-forecast report for products with sales history
    pub async fn demand_forecast_report(
        &self,
        now: DateTime<Utc>,
    ) -> AppResult<DemandForecastReport> {
        let catalog = self.store.fetch_active_catalog().await?;

        let mut summary = DemandSummary {
            total_products: 0,
            creciente: 0,
            estable: 0,
            decreciente: 0,
            sin_datos: 0,
        };
        let mut by_category: BTreeMap<String, CategoryDemandBreakdown> = BTreeMap::new();
        let mut products = Vec::new();

        for product in &catalog {
            let series = self
                .store
                .fetch_daily_sales(product.id, DEMAND_LOOKBACK_DAYS)
                .await?;
            if series.is_empty() {
                continue;
            }

            let daily_average = windowed_average(&series, DAILY_RATE_WINDOW);
            let forecast = forecast_demand(&series, DEMAND_HORIZON_DAYS);
            let suggested_stock = product
                .current_stock
                .max((forecast.estimated_demand * 1.2) as i64);

            summary.total_products += 1;
            let breakdown = by_category
                .entry(product.category_label().to_string())
                .or_default();
            match forecast.trend {
                Trend::Creciente => {
                    summary.creciente += 1;
                    breakdown.creciente += 1;
                }
                Trend::Estable => {
                    summary.estable += 1;
                    breakdown.estable += 1;
                }
                Trend::Decreciente => {
                    summary.decreciente += 1;
                    breakdown.decreciente += 1;
                }
                Trend::DatosInsuficientes => {
                    summary.sin_datos += 1;
                    breakdown.sin_datos += 1;
                }
            }
            breakdown.total_estimated_demand += forecast.estimated_demand;

            products.push(DemandForecastEntry {
                id: product.id,
                name: product.name.clone(),
                current_stock: product.current_stock,
                category: product.category_label().to_string(),
                daily_average: round2(daily_average),
                estimated_demand: forecast.estimated_demand,
                trend: forecast.trend,
                confidence: forecast.confidence,
                suggested_stock,
            });
        }

        for breakdown in by_category.values_mut() {
            breakdown.total_estimated_demand = round1(breakdown.total_estimated_demand);
        }

        Ok(DemandForecastReport {
            generated_at: format_timestamp(now),
            lookback_days: DEMAND_LOOKBACK_DAYS,
            horizon_days: DEMAND_HORIZON_DAYS,
            summary,
            by_category,
            products,
        })
    }

    /// Depletion-forecast report for in-stock products with recent sales
    pub async fn depletion_forecast_report(
        &self,
        now: DateTime<Utc>,
    ) -> AppResult<DepletionForecastReport> {
        let catalog = self.store.fetch_active_catalog().await?;

        let mut summary = DepletionSummary {
            total_products: 0,
            critico: 0,
            medio: 0,
            bajo: 0,
        };
        let mut by_category: BTreeMap<String, CategoryDepletionBreakdown> = BTreeMap::new();
        // (sum of finite horizons, count) per category, for the averages
        let mut finite_days: BTreeMap<String, (i64, usize)> = BTreeMap::new();
        let mut products = Vec::new();

        for product in &catalog {
            if product.current_stock <= 0 {
                continue;
            }
            let series = self
                .store
                .fetch_daily_sales(product.id, DEPLETION_LOOKBACK_DAYS)
                .await?;
            if series.is_empty() {
                continue;
            }

            let daily_average = windowed_average(&series, DAILY_RATE_WINDOW);
            let days = days_until_depletion(product.current_stock, daily_average);

            let (days_field, depletion_date, urgency) = if days < DEPLETION_SENTINEL_DAYS {
                let date = (now + Duration::days(days)).format("%Y-%m-%d").to_string();
                let urgency = if days <= DEPLETION_URGENT_DAYS {
                    Urgency::Critico
                } else if days <= DEPLETION_SOON_DAYS {
                    Urgency::Medio
                } else {
                    Urgency::Bajo
                };
                (Some(days), date, urgency)
            } else {
                (None, "No se prevé agotamiento".to_string(), Urgency::Bajo)
            };

            summary.total_products += 1;
            let category = product.category_label().to_string();
            let breakdown = by_category.entry(category.clone()).or_default();
            match urgency {
                Urgency::Critico => {
                    summary.critico += 1;
                    breakdown.critico += 1;
                }
                Urgency::Medio => {
                    summary.medio += 1;
                    breakdown.medio += 1;
                }
                Urgency::Bajo => {
                    summary.bajo += 1;
                    breakdown.bajo += 1;
                }
            }
            if let Some(d) = days_field {
                let acc = finite_days.entry(category).or_insert((0, 0));
                acc.0 += d;
                acc.1 += 1;
            }

            products.push(DepletionEntry {
                id: product.id,
                name: product.name.clone(),
                current_stock: product.current_stock,
                category: product.category_label().to_string(),
                supplier: product.supplier_label().to_string(),
                daily_average: round2(daily_average),
                days_until_depletion: days_field,
                estimated_depletion_date: depletion_date,
                urgency,
            });
        }

        for (category, (sum, count)) in finite_days {
            if let Some(breakdown) = by_category.get_mut(&category) {
                breakdown.average_days = round1(sum as f64 / count as f64);
            }
        }

        // Most urgent first; the sentinel (no foreseeable depletion) sorts
        // as the maximal horizon
        products.sort_by(|a, b| {
            a.urgency.rank().cmp(&b.urgency.rank()).then(
                a.days_until_depletion
                    .unwrap_or(DEPLETION_SENTINEL_DAYS)
                    .cmp(&b.days_until_depletion.unwrap_or(DEPLETION_SENTINEL_DAYS)),
            )
        });

        Ok(DepletionForecastReport {
            generated_at: format_timestamp(now),
            lookback_days: DEPLETION_LOOKBACK_DAYS,
            summary,
            by_category,
            products,
        })
    }

    /// Overstock report, ranked by immobilized purchase value
    pub async fn overstock_report(&self, now: DateTime<Utc>) -> AppResult<OverstockReport> {
        let catalog = self.store.fetch_active_catalog().await?;

        let mut summary = OverstockSummary {
            total_products: 0,
            total_excess_value: 0.0,
        };
        let mut by_category: BTreeMap<String, CategoryOverstockBreakdown> = BTreeMap::new();
        let mut products = Vec::new();

        for product in &catalog {
            if product.current_stock <= 0 {
                continue;
            }
            let series = self
                .store
                .fetch_daily_sales(product.id, OVERSTOCK_LOOKBACK_DAYS)
                .await?;
            if series.is_empty() {
                continue;
            }

            let daily_average = windowed_average(&series, OVERSTOCK_RATE_WINDOW);
            let assessment = detect_overstock(
                product.current_stock,
                daily_average,
                self.overstock_threshold_days,
            );
            if !assessment.is_overstock {
                continue;
            }

            let excess_units = (assessment.excess_days as f64 * daily_average) as i64;
            let excess_value = round2(
                assessment.excess_days as f64
                    * daily_average
                    * decimal_to_f64(product.purchase_price),
            );

            summary.total_products += 1;
            summary.total_excess_value += excess_value;
            let breakdown = by_category
                .entry(product.category_label().to_string())
                .or_default();
            breakdown.products += 1;
            breakdown.immobilized_value += excess_value;

            products.push(OverstockEntry {
                id: product.id,
                name: product.name.clone(),
                current_stock: product.current_stock,
                category: product.category_label().to_string(),
                daily_average: round2(daily_average),
                excess_days: assessment.excess_days,
                excess_units,
                excess_value,
                suggestion: assessment.suggestion,
            });
        }

        summary.total_excess_value = round2(summary.total_excess_value);
        for breakdown in by_category.values_mut() {
            breakdown.immobilized_value = round2(breakdown.immobilized_value);
        }

        // Largest immobilized value first
        products.sort_by(|a, b| b.excess_value.total_cmp(&a.excess_value));

        Ok(OverstockReport {
            generated_at: format_timestamp(now),
            lookback_days: OVERSTOCK_LOOKBACK_DAYS,
            threshold_days: self.overstock_threshold_days,
            summary,
            by_category,
            products,
        })
    }

    /// Turnover report for products with any sales in the lookback period
    pub async fn turnover_report(&self, now: DateTime<Utc>) -> AppResult<TurnoverReport> {
        let catalog = self.store.fetch_active_catalog().await?;

        let mut summary = TurnoverSummary {
            total_products: 0,
            fast_movers: 0,
            slow_movers: 0,
            average_ratio: 0.0,
            total_revenue: 0.0,
        };
        let mut by_category: BTreeMap<String, CategoryTurnoverBreakdown> = BTreeMap::new();
        // (sum of ratios, count) per category, for the averages
        let mut ratio_sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
        let mut ratio_total = 0.0;
        let mut products = Vec::new();

        for product in &catalog {
            let series = self
                .store
                .fetch_daily_sales(product.id, TURNOVER_LOOKBACK_DAYS)
                .await?;
            let total_sold = series.total_quantity();
            if total_sold <= 0 {
                continue;
            }

            // Simplified average stock over the period: closing stock plus
            // half of what was sold
            let average_stock = product.current_stock as f64 + total_sold as f64 / 2.0;
            let assessment = turnover(total_sold as f64, average_stock);
            let revenue = round2(total_sold as f64 * decimal_to_f64(product.sale_price));
            let days_with_sales = series.len();

            summary.total_products += 1;
            summary.total_revenue += revenue;
            ratio_total += assessment.turnover_ratio;
            if assessment.velocity.is_fast() {
                summary.fast_movers += 1;
            } else if assessment.velocity.is_slow() {
                summary.slow_movers += 1;
            }

            let category = product.category_label().to_string();
            let breakdown = by_category.entry(category.clone()).or_default();
            if assessment.velocity.is_fast() {
                breakdown.fast += 1;
            } else if assessment.velocity.is_slow() {
                breakdown.slow += 1;
            } else {
                breakdown.normal += 1;
            }
            let acc = ratio_sums.entry(category).or_insert((0.0, 0));
            acc.0 += assessment.turnover_ratio;
            acc.1 += 1;

            products.push(TurnoverEntry {
                id: product.id,
                name: product.name.clone(),
                category: product.category_label().to_string(),
                current_stock: product.current_stock,
                total_sold,
                days_with_sales,
                sales_frequency: round1(
                    days_with_sales as f64 / TURNOVER_LOOKBACK_DAYS as f64 * 100.0,
                ),
                turnover_ratio: assessment.turnover_ratio,
                velocity: assessment.velocity,
                revenue,
            });
        }

        if summary.total_products > 0 {
            summary.average_ratio = round2(ratio_total / summary.total_products as f64);
        }
        summary.total_revenue = round2(summary.total_revenue);
        for (category, (sum, count)) in ratio_sums {
            if let Some(breakdown) = by_category.get_mut(&category) {
                breakdown.average_ratio = round2(sum / count as f64);
            }
        }

        // Fastest-rotating first
        products.sort_by(|a, b| b.turnover_ratio.total_cmp(&a.turnover_ratio));

        Ok(TurnoverReport {
            generated_at: format_timestamp(now),
            lookback_days: TURNOVER_LOOKBACK_DAYS,
            summary,
            by_category,
            products,
        })
    }

    /// Executive summary combining the three alert-bearing reports
    pub async fn executive_summary(&self, now: DateTime<Utc>) -> AppResult<ExecutiveSummaryReport> {
        let stock = self.stock_critical_report(now).await?;
        let overstock = self.overstock_report(now).await?;
        let rotation = self.turnover_report(now).await?;

        let alerts = AlertCounts {
            stock_critical_products: stock.summary.agotado + stock.summary.critico,
            overstocked_products: overstock.summary.total_products,
            slow_moving_products: rotation.summary.slow_movers,
        };

        let mut recommendations = Vec::new();
        if alerts.stock_critical_products > 0 {
            recommendations.push(Recommendation {
                kind: RecommendationKind::Urgente,
                message: format!(
                    "{} productos están en stock crítico. Revisar inmediatamente.",
                    alerts.stock_critical_products
                ),
            });
        }
        if alerts.overstocked_products > 0 {
            recommendations.push(Recommendation {
                kind: RecommendationKind::Optimizacion,
                message: format!(
                    "{} productos tienen sobrestock. Considerar promociones.",
                    alerts.overstocked_products
                ),
            });
        }
        if alerts.slow_moving_products > 0 {
            recommendations.push(Recommendation {
                kind: RecommendationKind::Analisis,
                message: format!(
                    "{} productos tienen baja rotación. Evaluar estrategia comercial.",
                    alerts.slow_moving_products
                ),
            });
        }

        Ok(ExecutiveSummaryReport {
            generated_at: format_timestamp(now),
            alerts,
            metrics: GlobalMetrics {
                total_products_analyzed: stock.summary.total_products,
                immobilized_value: overstock.summary.total_excess_value,
                average_turnover_ratio: rotation.summary.average_ratio,
            },
            recommendations,
        })
    }

    /// Export report rows as CSV
    pub fn export_to_csv<T: Serialize>(data: &[T]) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in data {
            wtr.serialize(record).map_err(|e| {
                crate::error::AppError::Internal(format!("CSV serialization error: {}", e))
            })?;
        }
        let csv_data = String::from_utf8(wtr.into_inner().map_err(|e| {
            crate::error::AppError::Internal(format!("CSV writer error: {}", e))
        })?)
        .map_err(|e| crate::error::AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }
}

fn format_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn decimal_to_f64(value: rust_decimal::Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

fn stock_ratio(entry: &CriticalProductEntry) -> f64 {
    if entry.minimum_stock > 0 {
        entry.current_stock as f64 / entry.minimum_stock as f64
    } else {
        f64::MAX
    }
}
