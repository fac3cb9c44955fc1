//! Shared types and models for the Retail Inventory Management Platform
//!
//! This crate contains the domain value objects consumed by the backend
//! analytics engine and serialized to API clients.

pub mod models;

pub use models::*;
