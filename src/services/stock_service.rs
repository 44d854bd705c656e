use chrono::Utc;
use sqlx::PgPool;

use crate::db;
use crate::errors::AppError;
use crate::models::{AddPrice, DateWindow, StockLedger};

const LEDGER_NOT_FOUND: &str =
    "The company with the company code does not exist. Therefore could not add stock price.";
// Leading space is part of the published message for this route.
const COMPANY_NOT_FOUND: &str = " The company does not exist.";

/// Load-modify-save of the whole ledger. Concurrent appends race and the
/// last write wins.
pub async fn append_price(
    pool: &PgPool,
    company_code: i64,
    input: AddPrice,
) -> Result<StockLedger, AppError> {
    let mut ledger = db::stock_queries::fetch_one(pool, company_code)
        .await?
        .ok_or_else(|| AppError::NotFound(LEDGER_NOT_FOUND.to_string()))?;

    ledger.prepend(input.price, Utc::now());
    db::stock_queries::save_prices(pool, company_code, &ledger.stock_prices.0).await?;

    Ok(ledger)
}

/// An empty match is a 200 with an empty array, never a NotFound. Only a
/// missing ledger is a NotFound.
pub async fn query_by_date_range(
    pool: &PgPool,
    company_code: i64,
    start_date: &str,
    end_date: &str,
) -> Result<StockLedger, AppError> {
    let ledger = db::stock_queries::fetch_one(pool, company_code)
        .await?
        .ok_or_else(|| AppError::NotFound(COMPANY_NOT_FOUND.to_string()))?;

    let window = DateWindow::from_calendar_dates(start_date, end_date);
    Ok(ledger.filtered(window.as_ref()))
}
