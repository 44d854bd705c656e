use sqlx::PgPool;

use crate::models::Company;

pub async fn insert(pool: &PgPool, company: &Company) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO companies (company_code, name, ceo, turnover, website, stock_exchange)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(company.company_code)
    .bind(&company.name)
    .bind(&company.ceo)
    .bind(company.turnover)
    .bind(&company.website)
    .bind(&company.stock_exchange)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Company>, sqlx::Error> {
    sqlx::query_as::<_, Company>(
        "SELECT company_code, name, ceo, turnover, website, stock_exchange
         FROM companies",
    )
    .fetch_all(pool)
    .await
}

pub async fn fetch_one(pool: &PgPool, company_code: i64) -> Result<Option<Company>, sqlx::Error> {
    sqlx::query_as::<_, Company>(
        "SELECT company_code, name, ceo, turnover, website, stock_exchange
         FROM companies
         WHERE company_code = $1",
    )
    .bind(company_code)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, company_code: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM companies WHERE company_code = $1")
        .bind(company_code)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
