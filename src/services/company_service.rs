use sqlx::PgPool;

use crate::db;
use crate::errors::{AppError, FieldError};
use crate::models::{Company, CompanyListing, CompanyWithStocks, RegisterCompany, StockLedger};

const COMPANY_NOT_FOUND: &str = "The company does not exist.";

pub async fn register(
    pool: &PgPool,
    input: RegisterCompany,
) -> Result<CompanyWithStocks, AppError> {
    let company = input
        .validate()
        .map_err(|errors| AppError::validation("company validation failed", errors))?;

    db::company_queries::insert(pool, &company)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => AppError::validation(
                format!("companyCode {} is already registered", company.company_code),
                vec![FieldError::new("companyCode", "must be unique")],
            ),
            _ => AppError::from(e),
        })?;

    // Second, independent write. If it fails the company stays behind as an
    // orphan; there is no rollback.
    let stocks = StockLedger::empty(company.company_code);
    db::stock_queries::insert(pool, &stocks).await?;

    Ok(CompanyWithStocks { company, stocks })
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<CompanyListing>, AppError> {
    let companies = db::company_queries::fetch_all(pool).await?;
    let ledgers = db::stock_queries::fetch_all(pool).await?;
    Ok(join_with_ledgers(companies, &ledgers))
}

pub async fn get_by_code(pool: &PgPool, company_code: i64) -> Result<CompanyWithStocks, AppError> {
    let company = db::company_queries::fetch_one(pool, company_code).await?;
    let stocks = db::stock_queries::fetch_one(pool, company_code).await?;
    match (company, stocks) {
        (Some(company), Some(stocks)) => Ok(CompanyWithStocks { company, stocks }),
        _ => Err(AppError::NotFound(COMPANY_NOT_FOUND.to_string())),
    }
}

/// Two independent deletions. A partial deletion (one record removed, the
/// other absent) still reports NotFound even though state has changed.
pub async fn delete_by_code(pool: &PgPool, company_code: i64) -> Result<(), AppError> {
    let companies_removed = db::company_queries::delete(pool, company_code).await?;
    let ledgers_removed = db::stock_queries::delete(pool, company_code).await?;
    if companies_removed > 0 && ledgers_removed > 0 {
        Ok(())
    } else {
        Err(AppError::NotFound(COMPANY_NOT_FOUND.to_string()))
    }
}

/// Pairs each company with the first ledger carrying its code.
fn join_with_ledgers(companies: Vec<Company>, ledgers: &[StockLedger]) -> Vec<CompanyListing> {
    companies
        .into_iter()
        .map(|company| {
            let stocks = ledgers
                .iter()
                .find(|l| l.company_code == company.company_code)
                .cloned();
            CompanyListing { company, stocks }
        })
        .collect()
}
