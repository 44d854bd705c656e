use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{CompanyListing, CompanyWithStocks, RegisterCompany};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_company))
        .route("/getall", get(get_all_companies))
        .route("/info/:company_code", get(get_company_info))
        .route("/delete/:company_code", delete(delete_company))
}

#[axum::debug_handler]
pub async fn register_company(
    State(state): State<AppState>,
    Json(data): Json<RegisterCompany>,
) -> Result<Json<CompanyWithStocks>, AppError> {
    info!("POST /company/register - Registering new company");
    let registered = services::company_service::register(&state.pool, data)
        .await
        .map_err(|e| {
            error!("Failed to register company: {}", e);
            e
        })?;
    Ok(Json(registered))
}

pub async fn get_all_companies(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompanyListing>>, AppError> {
    info!("GET /company/getall - Listing all companies");
    let listings = services::company_service::list_all(&state.pool)
        .await
        .map_err(|e| {
            error!("Failed to list companies: {}", e);
            e
        })?;
    Ok(Json(listings))
}

pub async fn get_company_info(
    State(state): State<AppState>,
    Path(company_code): Path<i64>,
) -> Result<Json<CompanyWithStocks>, AppError> {
    info!("GET /company/info/{} - Fetching company", company_code);
    let found = services::company_service::get_by_code(&state.pool, company_code)
        .await
        .map_err(|e| {
            error!("Failed to fetch company {}: {}", company_code, e);
            e
        })?;
    Ok(Json(found))
}

pub async fn delete_company(
    State(state): State<AppState>,
    Path(company_code): Path<i64>,
) -> Result<Json<Value>, AppError> {
    info!("DELETE /company/delete/{} - Deleting company", company_code);
    services::company_service::delete_by_code(&state.pool, company_code)
        .await
        .map_err(|e| {
            error!("Failed to delete company {}: {}", company_code, e);
            e
        })?;
    Ok(Json(json!({ "message": "Company deleted successfully." })))
}
