//! Analytics algorithm tests
//!
//! Tests for the pure inventory analytics core:
//! - windowed averaging over sales series
//! - depletion horizon and criticality classification
//! - overstock detection
//! - turnover velocity tiers
//! - demand forecasting heuristics

use chrono::NaiveDate;
use proptest::prelude::*;

use retail_inventory_backend::services::analytics::{
    classify_criticality, days_until_depletion, detect_overstock, forecast_demand, turnover,
    windowed_average, AlertLevel, Confidence, Trend, Velocity, DEPLETION_SENTINEL_DAYS,
};
use shared::models::{SaleEvent, SalesSeries};

/// Helper to build a series of consecutive sale-days starting 2024-01-01
fn series(quantities: &[i64]) -> SalesSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    SalesSeries::new(
        quantities
            .iter()
            .enumerate()
            .map(|(i, &quantity)| SaleEvent {
                date: start + chrono::Duration::days(i as i64),
                quantity,
            })
            .collect(),
    )
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    // ---- windowed average -------------------------------------------------

    #[test]
    fn test_windowed_average_empty_series() {
        assert_eq!(windowed_average(&SalesSeries::default(), 30), 0.0);
    }

    #[test]
    fn test_windowed_average_short_series_uses_all_entries() {
        let s = series(&[2, 4, 6]);
        assert_eq!(windowed_average(&s, 30), 4.0);
    }

    #[test]
    fn test_windowed_average_long_series_uses_tail() {
        // 5 old days of 100, then 3 recent days of 2
        let s = series(&[100, 100, 100, 100, 100, 2, 2, 2]);
        assert_eq!(windowed_average(&s, 3), 2.0);
    }

    #[test]
    fn test_windowed_average_window_equal_to_length() {
        let s = series(&[1, 2, 3, 4]);
        assert_eq!(windowed_average(&s, 4), 2.5);
    }

    #[test]
    fn test_windowed_average_ignores_input_order() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let shuffled = SalesSeries::new(vec![
            SaleEvent { date: start + chrono::Duration::days(2), quantity: 9 },
            SaleEvent { date: start, quantity: 1 },
            SaleEvent { date: start + chrono::Duration::days(1), quantity: 5 },
        ]);
        // Last 2 entries by date are 5 and 9
        assert_eq!(windowed_average(&shuffled, 2), 7.0);
    }

    // ---- depletion horizon ------------------------------------------------

    #[test]
    fn test_depletion_zero_stock() {
        assert_eq!(days_until_depletion(0, 5.0), 0);
        assert_eq!(days_until_depletion(-3, 5.0), 0);
    }

    #[test]
    fn test_depletion_no_sales_history() {
        assert_eq!(days_until_depletion(100, 0.0), DEPLETION_SENTINEL_DAYS);
        assert_eq!(days_until_depletion(100, -1.0), DEPLETION_SENTINEL_DAYS);
    }

    #[test]
    fn test_depletion_floors_the_horizon() {
        assert_eq!(days_until_depletion(10, 3.0), 3);
        assert_eq!(days_until_depletion(700, 5.0), 140);
        assert_eq!(days_until_depletion(1, 2.0), 0);
    }

    // ---- criticality classification ---------------------------------------

    #[test]
    fn test_classify_out_of_stock() {
        let a = classify_criticality(0, 100);
        assert!(a.is_critical);
        assert_eq!(a.alert_level, AlertLevel::Agotado);
        assert_eq!(a.suggested_action, "Reponer inmediatamente");
    }

    #[test]
    fn test_classify_critical_at_or_below_half_minimum() {
        let a = classify_criticality(40, 100);
        assert!(a.is_critical);
        assert_eq!(a.alert_level, AlertLevel::Critico);
        assert_eq!(a.suggested_action, "Reponer urgente");

        // Exactly 50% is still critical
        assert_eq!(classify_criticality(50, 100).alert_level, AlertLevel::Critico);
    }

    #[test]
    fn test_classify_low_between_half_and_full_minimum() {
        let a = classify_criticality(80, 100);
        assert!(a.is_critical);
        assert_eq!(a.alert_level, AlertLevel::Bajo);
        assert_eq!(a.suggested_action, "Programar reposición");

        // Exactly at the minimum is still low
        assert_eq!(classify_criticality(100, 100).alert_level, AlertLevel::Bajo);
    }

    #[test]
    fn test_classify_normal_above_minimum() {
        let a = classify_criticality(150, 100);
        assert!(!a.is_critical);
        assert_eq!(a.alert_level, AlertLevel::Normal);
        assert_eq!(a.suggested_action, "Monitorear");
    }

    #[test]
    fn test_classify_no_minimum_configured() {
        // Minimum of zero counts as exactly 100%, which is the low band
        let a = classify_criticality(5, 0);
        assert!(a.is_critical);
        assert_eq!(a.alert_level, AlertLevel::Bajo);
        assert_eq!(a.suggested_action, "Programar reposición");
    }

    // ---- overstock detection ----------------------------------------------

    #[test]
    fn test_overstock_without_sales_data() {
        let a = detect_overstock(500, 0.0, 60.0);
        assert!(!a.is_overstock);
        assert_eq!(a.excess_days, 0);
        assert_eq!(a.suggestion, "Sin datos de ventas para evaluar");
    }

    #[test]
    fn test_overstock_detected() {
        // 700 units at 5/day = 140 days of stock, 80 over the 60-day threshold
        let a = detect_overstock(700, 5.0, 60.0);
        assert!(a.is_overstock);
        assert_eq!(a.excess_days, 80);
        assert_eq!(a.suggestion, "Reducir pedidos por 80 días");
    }

    #[test]
    fn test_overstock_within_normal_levels() {
        let a = detect_overstock(100, 5.0, 60.0);
        assert!(!a.is_overstock);
        assert_eq!(a.excess_days, 0);
        assert_eq!(a.suggestion, "Stock en niveles normales");
    }

    #[test]
    fn test_overstock_threshold_is_exclusive() {
        // Exactly 60 days of stock is not overstock
        let a = detect_overstock(300, 5.0, 60.0);
        assert!(!a.is_overstock);
    }

    // ---- turnover ---------------------------------------------------------

    #[test]
    fn test_turnover_without_stock() {
        let a = turnover(50.0, 0.0);
        assert_eq!(a.turnover_ratio, 0.0);
        assert_eq!(a.velocity, Velocity::SinStock);
    }

    #[test]
    fn test_turnover_velocity_tiers() {
        assert_eq!(turnover(120.0, 10.0).velocity, Velocity::MuyRapida);
        assert_eq!(turnover(60.0, 10.0).velocity, Velocity::Rapida);
        assert_eq!(turnover(30.0, 10.0).velocity, Velocity::Normal);
        assert_eq!(turnover(25.0, 10.0).velocity, Velocity::Lenta);
        assert_eq!(turnover(5.0, 10.0).velocity, Velocity::MuyLenta);
    }

    #[test]
    fn test_turnover_ratio_values() {
        assert_eq!(turnover(120.0, 10.0).turnover_ratio, 12.0);
        assert_eq!(turnover(25.0, 10.0).turnover_ratio, 2.5);
    }

    #[test]
    fn test_turnover_rounds_to_two_decimals() {
        let a = turnover(10.0, 3.0);
        assert_eq!(a.turnover_ratio, 3.33);
        assert_eq!(a.velocity, Velocity::Normal);
    }

    #[test]
    fn test_turnover_lower_bounds_are_inclusive() {
        assert_eq!(turnover(12.0, 1.0).velocity, Velocity::MuyRapida);
        assert_eq!(turnover(6.0, 1.0).velocity, Velocity::Rapida);
        assert_eq!(turnover(3.0, 1.0).velocity, Velocity::Normal);
        assert_eq!(turnover(1.0, 1.0).velocity, Velocity::Lenta);
    }

    // ---- demand forecast --------------------------------------------------

    #[test]
    fn test_forecast_insufficient_data() {
        let f = forecast_demand(&series(&[100, 200, 300, 400, 500, 600]), 30);
        assert_eq!(f.estimated_demand, 0.0);
        assert_eq!(f.trend, Trend::DatosInsuficientes);
        assert_eq!(f.confidence, Confidence::Baja);
    }

    #[test]
    fn test_forecast_empty_series() {
        let f = forecast_demand(&SalesSeries::default(), 30);
        assert_eq!(f.trend, Trend::DatosInsuficientes);
    }

    #[test]
    fn test_forecast_growing_trend() {
        // First half mean 2, second half mean 10: 10 > 2 * 1.2
        let f = forecast_demand(&series(&[2, 2, 2, 2, 2, 10, 10, 10, 10, 10]), 30);
        assert_eq!(f.trend, Trend::Creciente);
        // Recent average over all 10 entries is 6; 6 * 1.1 * 30 = 198.0
        assert_eq!(f.estimated_demand, 198.0);
        assert_eq!(f.confidence, Confidence::Baja);
    }

    #[test]
    fn test_forecast_declining_trend() {
        // First half mean 10, second half mean 2: 2 < 10 * 0.8
        let f = forecast_demand(&series(&[10, 10, 10, 10, 10, 2, 2, 2, 2, 2]), 30);
        assert_eq!(f.trend, Trend::Decreciente);
        // 6 * 0.9 * 30 = 162.0
        assert_eq!(f.estimated_demand, 162.0);
    }

    #[test]
    fn test_forecast_stable_trend() {
        let f = forecast_demand(&series(&[4; 14]), 30);
        assert_eq!(f.trend, Trend::Estable);
        // 4 * 1.0 * 30 = 120.0
        assert_eq!(f.estimated_demand, 120.0);
        assert_eq!(f.confidence, Confidence::Media);
    }

    #[test]
    fn test_forecast_confidence_tiers() {
        assert_eq!(forecast_demand(&series(&[2; 30]), 30).confidence, Confidence::Alta);
        assert_eq!(forecast_demand(&series(&[2; 14]), 30).confidence, Confidence::Media);
        assert_eq!(forecast_demand(&series(&[2; 7]), 30).confidence, Confidence::Baja);
    }

    #[test]
    fn test_forecast_scales_with_horizon() {
        let s = series(&[4; 14]);
        assert_eq!(forecast_demand(&s, 15).estimated_demand, 60.0);
        assert_eq!(forecast_demand(&s, 30).estimated_demand, 120.0);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for generating daily quantities
    fn quantity_strategy() -> impl Strategy<Value = i64> {
        0i64..=500
    }

    /// Strategy for generating a sales series of 0..60 sale-days
    fn series_strategy() -> impl Strategy<Value = SalesSeries> {
        prop::collection::vec(quantity_strategy(), 0..60).prop_map(|q| series(&q))
    }

    /// Strategy for generating positive daily rates
    fn rate_strategy() -> impl Strategy<Value = f64> {
        0.01f64..200.0
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Positive stock with no sales rate lasts "indefinitely"
        #[test]
        fn prop_depletion_sentinel_without_rate(
            stock in 1i64..100_000,
            rate in -100.0f64..=0.0
        ) {
            prop_assert_eq!(days_until_depletion(stock, rate), DEPLETION_SENTINEL_DAYS);
        }

        /// Depleted stock is always 0 days, whatever the rate
        #[test]
        fn prop_depletion_zero_for_empty_stock(rate in -100.0f64..200.0) {
            prop_assert_eq!(days_until_depletion(0, rate), 0);
        }

        /// With a positive rate the horizon is the floored quotient
        #[test]
        fn prop_depletion_is_floored_quotient(
            stock in 1i64..100_000,
            rate in rate_strategy()
        ) {
            let expected = (stock as f64 / rate).floor() as i64;
            prop_assert_eq!(days_until_depletion(stock, rate), expected);
        }

        /// Windowed average of a non-empty series is bounded by its extremes
        #[test]
        fn prop_windowed_average_bounded(
            s in series_strategy(),
            window in 1usize..90
        ) {
            let avg = windowed_average(&s, window);
            if s.is_empty() {
                prop_assert_eq!(avg, 0.0);
            } else {
                let min = s.events().iter().map(|e| e.quantity).min().unwrap() as f64;
                let max = s.events().iter().map(|e| e.quantity).max().unwrap() as f64;
                prop_assert!(avg >= min && avg <= max);
            }
        }

        /// A window at least as large as the series means a whole-series mean
        #[test]
        fn prop_windowed_average_short_series_is_full_mean(s in series_strategy()) {
            prop_assume!(!s.is_empty());
            let full_mean = s.total_quantity() as f64 / s.len() as f64;
            let avg = windowed_average(&s, s.len());
            prop_assert!((avg - full_mean).abs() < 1e-9);
        }

        /// A product is critical exactly when its level is not NORMAL
        #[test]
        fn prop_criticality_matches_level(
            stock in -10i64..1000,
            minimum in 0i64..500
        ) {
            let a = classify_criticality(stock, minimum);
            prop_assert_eq!(a.is_critical, a.alert_level != AlertLevel::Normal);
            if stock <= 0 {
                prop_assert_eq!(a.alert_level, AlertLevel::Agotado);
            }
        }

        /// Overstock holds exactly when coverage exceeds the threshold
        #[test]
        fn prop_overstock_consistent(
            stock in 0i64..100_000,
            rate in rate_strategy(),
            threshold in 1.0f64..365.0
        ) {
            let a = detect_overstock(stock, rate, threshold);
            let days_of_stock = stock as f64 / rate;
            prop_assert_eq!(a.is_overstock, days_of_stock > threshold);
            prop_assert!(a.excess_days >= 0);
            if a.is_overstock {
                prop_assert_eq!(a.excess_days, (days_of_stock - threshold) as i64);
            }
        }

        /// Turnover ratio is non-negative and its tier matches the thresholds
        #[test]
        fn prop_turnover_tier_consistent(
            sales in 0.0f64..10_000.0,
            stock in 0.01f64..5_000.0
        ) {
            let a = turnover(sales, stock);
            prop_assert!(a.turnover_ratio >= 0.0);

            let raw = sales / stock;
            let expected = if raw >= 12.0 {
                Velocity::MuyRapida
            } else if raw >= 6.0 {
                Velocity::Rapida
            } else if raw >= 3.0 {
                Velocity::Normal
            } else if raw >= 1.0 {
                Velocity::Lenta
            } else {
                Velocity::MuyLenta
            };
            prop_assert_eq!(a.velocity, expected);
        }

        /// Short histories always yield the insufficient-data sentinel
        #[test]
        fn prop_forecast_sentinel_below_seven_events(
            quantities in prop::collection::vec(quantity_strategy(), 0..7)
        ) {
            let f = forecast_demand(&series(&quantities), 30);
            prop_assert_eq!(f.estimated_demand, 0.0);
            prop_assert_eq!(f.trend, Trend::DatosInsuficientes);
            prop_assert_eq!(f.confidence, Confidence::Baja);
        }

        /// Estimated demand is never negative for non-negative quantities
        #[test]
        fn prop_forecast_non_negative(
            quantities in prop::collection::vec(quantity_strategy(), 7..60),
            horizon in 1u32..90
        ) {
            let f = forecast_demand(&series(&quantities), horizon);
            prop_assert!(f.estimated_demand >= 0.0);
        }
    }
}
