use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::FieldError;
use crate::models::StockLedger;

/// Companies below this turnover are not listed on the exchange.
pub const MIN_TURNOVER: f64 = 100_000_001.0;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    #[serde(rename = "companyCode")]
    pub company_code: i64,
    pub name: String,
    #[serde(rename = "CEO")]
    pub ceo: String,
    pub turnover: f64,
    pub website: String,
    #[serde(rename = "stockExchange")]
    pub stock_exchange: String,
}

/// Registration payload. Every field is optional at the wire level so that
/// missing fields surface as structured validation errors instead of a
/// deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterCompany {
    #[serde(rename = "companyCode")]
    pub company_code: Option<i64>,
    pub name: Option<String>,
    #[serde(rename = "CEO")]
    pub ceo: Option<String>,
    pub turnover: Option<f64>,
    pub website: Option<String>,
    #[serde(rename = "stockExchange")]
    pub stock_exchange: Option<String>,
}

impl RegisterCompany {
    /// Schema-level validation, decoupled from persistence. Returns the
    /// complete Company or every field error at once.
    pub fn validate(self) -> Result<Company, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.company_code.is_none() {
            errors.push(FieldError::new("companyCode", "is required"));
        }
        if self.name.as_deref().map_or(true, |s| s.trim().is_empty()) {
            errors.push(FieldError::new("name", "is required"));
        }
        if self.ceo.as_deref().map_or(true, |s| s.trim().is_empty()) {
            errors.push(FieldError::new("CEO", "is required"));
        }
        match self.turnover {
            None => errors.push(FieldError::new("turnover", "is required")),
            Some(t) if t < MIN_TURNOVER => errors.push(FieldError::new(
                "turnover",
                format!("Must be at least 100000001, got {}", t),
            )),
            Some(_) => {}
        }
        if self.website.as_deref().map_or(true, |s| s.trim().is_empty()) {
            errors.push(FieldError::new("website", "is required"));
        }
        if self
            .stock_exchange
            .as_deref()
            .map_or(true, |s| s.trim().is_empty())
        {
            errors.push(FieldError::new("stockExchange", "is required"));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Company {
            company_code: self.company_code.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            ceo: self.ceo.unwrap_or_default(),
            turnover: self.turnover.unwrap_or_default(),
            website: self.website.unwrap_or_default(),
            stock_exchange: self.stock_exchange.unwrap_or_default(),
        })
    }
}

/// A company paired with its ledger, the shape returned by register and info.
#[derive(Debug, Serialize)]
pub struct CompanyWithStocks {
    pub company: Company,
    pub stocks: StockLedger,
}

/// One entry of the getall listing. The ledger is a soft reference, so a
/// company can appear without one.
#[derive(Debug, Serialize)]
pub struct CompanyListing {
    pub company: Company,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stocks: Option<StockLedger>,
}
