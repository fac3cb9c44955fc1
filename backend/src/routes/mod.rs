//! Route definitions for the Retail Inventory Management Platform

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Analytics reports
        .nest("/reports", report_routes())
}

/// Inventory analytics report routes
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/stock-critical", get(handlers::get_stock_critical_report))
        .route("/demand-forecast", get(handlers::get_demand_forecast_report))
        .route("/depletion-forecast", get(handlers::get_depletion_forecast_report))
        .route("/overstock", get(handlers::get_overstock_report))
        .route("/turnover", get(handlers::get_turnover_report))
        .route("/summary", get(handlers::get_executive_summary))
}
