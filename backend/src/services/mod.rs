//! Business logic services for the Retail Inventory Management Platform

pub mod analytics;
pub mod catalog;
pub mod reports;

pub use catalog::{CatalogStore, PgCatalogStore};
pub use reports::ReportService;
