use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{AddPrice, StockLedger};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add/:company_code", post(add_stock_price))
        .route("/get/:company_code/:start_date/:end_date", get(get_stock_prices))
}

pub async fn add_stock_price(
    State(state): State<AppState>,
    Path(company_code): Path<i64>,
    Json(data): Json<AddPrice>,
) -> Result<Json<StockLedger>, AppError> {
    info!("POST /stock/add/{} - Appending stock price", company_code);
    let ledger = services::stock_service::append_price(&state.pool, company_code, data)
        .await
        .map_err(|e| {
            error!("Failed to append price for {}: {}", company_code, e);
            e
        })?;
    Ok(Json(ledger))
}

pub async fn get_stock_prices(
    State(state): State<AppState>,
    Path((company_code, start_date, end_date)): Path<(i64, String, String)>,
) -> Result<Json<StockLedger>, AppError> {
    info!(
        "GET /stock/get/{}/{}/{} - Querying price history",
        company_code, start_date, end_date
    );
    let ledger =
        services::stock_service::query_by_date_range(&state.pool, company_code, &start_date, &end_date)
            .await
            .map_err(|e| {
                error!("Failed to query prices for {}: {}", company_code, e);
                e
            })?;
    Ok(Json(ledger))
}
