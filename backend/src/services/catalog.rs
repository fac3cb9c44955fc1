//! Catalog and sales-history access for the analytics engine
//!
//! The report aggregator only talks to storage through the [`CatalogStore`]
//! trait, so tests can substitute an in-memory data source.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::models::{ProductSnapshot, SaleEvent, SalesSeries};

use crate::error::AppResult;

/// Read-only storage collaborator supplying catalog and sales snapshots
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Fetch all active (non-deleted) products with category and supplier
    /// names joined in
    async fn fetch_active_catalog(&self) -> AppResult<Vec<ProductSnapshot>>;

    /// Fetch one product's daily sales for the trailing `since_days` window
    /// ending now, one entry per calendar day that had at least one sale
    async fn fetch_daily_sales(&self, product_id: Uuid, since_days: i32) -> AppResult<SalesSeries>;
}

/// Production catalog store backed by PostgreSQL
#[derive(Clone)]
pub struct PgCatalogStore {
    db: PgPool,
}

/// Row for the catalog query
#[derive(Debug, FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    current_stock: i64,
    minimum_stock: i64,
    purchase_price: Decimal,
    sale_price: Decimal,
    category_name: Option<String>,
    supplier_name: Option<String>,
}

/// Row for the daily sales query
#[derive(Debug, FromRow)]
struct DailySaleRow {
    date: NaiveDate,
    quantity: i64,
}

impl PgCatalogStore {
    /// Create a new PgCatalogStore instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn fetch_active_catalog(&self) -> AppResult<Vec<ProductSnapshot>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT p.id, p.name,
                   p.current_stock::bigint as current_stock,
                   p.minimum_stock::bigint as minimum_stock,
                   p.purchase_price, p.sale_price,
                   c.name as category_name,
                   s.name as supplier_name
            FROM products p
            LEFT JOIN categories c ON c.id = p.category_id
            LEFT JOIN suppliers s ON s.id = p.supplier_id
            WHERE p.active = true
            ORDER BY p.name
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ProductSnapshot {
                id: r.id,
                name: r.name,
                current_stock: r.current_stock,
                minimum_stock: r.minimum_stock,
                purchase_price: r.purchase_price,
                sale_price: r.sale_price,
                category: r.category_name,
                supplier: r.supplier_name,
            })
            .collect())
    }

    async fn fetch_daily_sales(&self, product_id: Uuid, since_days: i32) -> AppResult<SalesSeries> {
        let rows = sqlx::query_as::<_, DailySaleRow>(
            r#"
            SELECT i.invoice_date::date as date,
                   SUM(ii.quantity)::bigint as quantity
            FROM invoice_items ii
            JOIN invoices i ON i.id = ii.invoice_id
            WHERE ii.product_id = $1
              AND i.invoice_date >= NOW() - make_interval(days => $2)
            GROUP BY i.invoice_date::date
            ORDER BY date
            "#,
        )
        .bind(product_id)
        .bind(since_days)
        .fetch_all(&self.db)
        .await?;

        Ok(SalesSeries::new(
            rows.into_iter()
                .map(|r| SaleEvent {
                    date: r.date,
                    quantity: r.quantity,
                })
                .collect(),
        ))
    }
}
