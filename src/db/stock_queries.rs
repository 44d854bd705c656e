use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::{PricePoint, StockLedger};

pub async fn insert(pool: &PgPool, ledger: &StockLedger) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO stock_ledgers (company_code, stock_prices) VALUES ($1, $2)")
        .bind(ledger.company_code)
        .bind(Json(&ledger.stock_prices.0))
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<StockLedger>, sqlx::Error> {
    sqlx::query_as::<_, StockLedger>("SELECT company_code, stock_prices FROM stock_ledgers")
        .fetch_all(pool)
        .await
}

pub async fn fetch_one(
    pool: &PgPool,
    company_code: i64,
) -> Result<Option<StockLedger>, sqlx::Error> {
    sqlx::query_as::<_, StockLedger>(
        "SELECT company_code, stock_prices FROM stock_ledgers WHERE company_code = $1",
    )
    .bind(company_code)
    .fetch_optional(pool)
    .await
}

/// Persists the whole price array back, last write wins.
pub async fn save_prices(
    pool: &PgPool,
    company_code: i64,
    prices: &[PricePoint],
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE stock_ledgers SET stock_prices = $1 WHERE company_code = $2")
        .bind(Json(prices))
        .bind(company_code)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete(pool: &PgPool, company_code: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM stock_ledgers WHERE company_code = $1")
        .bind(company_code)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
