//! Inventory analytics report handlers

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::error::AppResult;
use crate::services::catalog::PgCatalogStore;
use crate::services::reports::ReportService;
use crate::AppState;

#[derive(Deserialize)]
pub struct ReportQuery {
    pub format: Option<String>, // "json" or "csv"
}

fn report_service(state: &AppState) -> ReportService<PgCatalogStore> {
    ReportService::with_overstock_threshold(
        PgCatalogStore::new(state.db.clone()),
        state.config.reports.overstock_threshold_days,
    )
}

/// Get the stock-criticality report
pub async fn get_stock_critical_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<impl IntoResponse> {
    let report = report_service(&state).stock_critical_report(Utc::now()).await?;

    if query.format.as_deref() == Some("csv") {
        let csv = ReportService::<PgCatalogStore>::export_to_csv(&report.critical_products)?;
        Ok((
            [(header::CONTENT_TYPE, "text/csv"), (header::CONTENT_DISPOSITION, "attachment; filename=\"stock_critical.csv\"")],
            csv,
        ).into_response())
    } else {
        Ok(Json(report).into_response())
    }
}

/// Get the demand-forecast report
pub async fn get_demand_forecast_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<impl IntoResponse> {
    let report = report_service(&state).demand_forecast_report(Utc::now()).await?;

    if query.format.as_deref() == Some("csv") {
        let csv = ReportService::<PgCatalogStore>::export_to_csv(&report.products)?;
        Ok((
            [(header::CONTENT_TYPE, "text/csv"), (header::CONTENT_DISPOSITION, "attachment; filename=\"demand_forecast.csv\"")],
            csv,
        ).into_response())
    } else {
        Ok(Json(report).into_response())
    }
}

/// Get the depletion-forecast report
pub async fn get_depletion_forecast_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<impl IntoResponse> {
    let report = report_service(&state)
        .depletion_forecast_report(Utc::now())
        .await?;

    if query.format.as_deref() == Some("csv") {
        let csv = ReportService::<PgCatalogStore>::export_to_csv(&report.products)?;
        Ok((
            [(header::CONTENT_TYPE, "text/csv"), (header::CONTENT_DISPOSITION, "attachment; filename=\"depletion_forecast.csv\"")],
            csv,
        ).into_response())
    } else {
        Ok(Json(report).into_response())
    }
}

/// Get the overstock report
pub async fn get_overstock_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<impl IntoResponse> {
    let report = report_service(&state).overstock_report(Utc::now()).await?;

    if query.format.as_deref() == Some("csv") {
        let csv = ReportService::<PgCatalogStore>::export_to_csv(&report.products)?;
        Ok((
            [(header::CONTENT_TYPE, "text/csv"), (header::CONTENT_DISPOSITION, "attachment; filename=\"overstock.csv\"")],
            csv,
        ).into_response())
    } else {
        Ok(Json(report).into_response())
    }
}

/// Get the turnover report
pub async fn get_turnover_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<impl IntoResponse> {
    let report = report_service(&state).turnover_report(Utc::now()).await?;

    if query.format.as_deref() == Some("csv") {
        let csv = ReportService::<PgCatalogStore>::export_to_csv(&report.products)?;
        Ok((
            [(header::CONTENT_TYPE, "text/csv"), (header::CONTENT_DISPOSITION, "attachment; filename=\"turnover.csv\"")],
            csv,
        ).into_response())
    } else {
        Ok(Json(report).into_response())
    }
}

/// Get the executive summary
pub async fn get_executive_summary(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let report = report_service(&state).executive_summary(Utc::now()).await?;
    Ok(Json(report))
}
