//! Domain models for the Retail Inventory Management Platform

mod product;
mod sales;

pub use product::*;
pub use sales::*;
