//! Product catalog models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-only view of a product at the moment a report is computed
///
/// Joined with its category and supplier names by the storage layer. The
/// analytics engine never mutates it; a fresh snapshot is fetched for every
/// report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: Uuid,
    pub name: String,
    pub current_stock: i64,
    pub minimum_stock: i64,
    pub purchase_price: Decimal,
    pub sale_price: Decimal,
    /// Category name, if the product has one assigned
    pub category: Option<String>,
    /// Supplier name, if the product has one assigned
    pub supplier: Option<String>,
}

impl ProductSnapshot {
    /// Category label used for report rollups
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("Sin categoría")
    }

    /// Supplier label used for report rows
    pub fn supplier_label(&self) -> &str {
        self.supplier.as_deref().unwrap_or("Sin proveedor")
    }
}
