//! HTTP handlers for the Retail Inventory Management Platform

pub mod health;
pub mod reports;

pub use health::*;
pub use reports::*;
