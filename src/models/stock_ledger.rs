use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A single timestamped price observation, embedded in the ledger document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePoint {
    pub price: f64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl PricePoint {
    pub fn new(price: f64, now: DateTime<Utc>) -> Self {
        Self {
            price,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The newest-first price history of one company. Stored as a single row
/// with the observations in a JSONB array, mutated via load-modify-save.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StockLedger {
    #[serde(rename = "companyCode")]
    pub company_code: i64,
    #[serde(rename = "stockPrices")]
    pub stock_prices: Json<Vec<PricePoint>>,
}

impl StockLedger {
    pub fn empty(company_code: i64) -> Self {
        Self {
            company_code,
            stock_prices: Json(Vec::new()),
        }
    }

    /// Prepends a fresh observation. Saving the document refreshes
    /// `updatedAt` on every point it contains; `createdAt` never changes.
    pub fn prepend(&mut self, price: f64, now: DateTime<Utc>) {
        for point in self.stock_prices.0.iter_mut() {
            point.updated_at = now;
        }
        self.stock_prices.0.insert(0, PricePoint::new(price, now));
    }

    /// Ledger-shaped view containing only the points inside the window,
    /// in their existing order. No window means no matches.
    pub fn filtered(&self, window: Option<&DateWindow>) -> StockLedger {
        let points = match window {
            Some(w) => self
                .stock_prices
                .0
                .iter()
                .filter(|p| w.contains(p.created_at))
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        StockLedger {
            company_code: self.company_code,
            stock_prices: Json(points),
        }
    }
}

/// Body of the append-price request.
#[derive(Debug, Clone, Deserialize)]
pub struct AddPrice {
    pub price: f64,
}

/// Half-open UTC window `[start, end + 1 day)`, making the end date
/// inclusive at day granularity.
#[derive(Debug, Clone, PartialEq)]
pub struct DateWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateWindow {
    /// Builds the window from calendar-date strings (`YYYY-MM-DD`).
    /// Malformed dates yield `None`.
    pub fn from_calendar_dates(start: &str, end: &str) -> Option<Self> {
        let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").ok()?;
        let end = NaiveDate::parse_from_str(end, "%Y-%m-%d").ok()?.succ_opt()?;
        Some(Self {
            start: start.and_time(NaiveTime::MIN).and_utc(),
            end: end.and_time(NaiveTime::MIN).and_utc(),
        })
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start && at < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn prepend_is_newest_first() {
        let mut ledger = StockLedger::empty(8934);
        ledger.prepend(12.2, at(2026, 8, 27, 10));
        ledger.prepend(13.5, at(2026, 8, 27, 11));
        let prices: Vec<f64> = ledger.stock_prices.0.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![13.5, 12.2]);
    }

    #[test]
    fn prepend_refreshes_updated_at_keeps_created_at() {
        let mut ledger = StockLedger::empty(8934);
        let first = at(2026, 8, 27, 10);
        let second = at(2026, 8, 27, 11);
        ledger.prepend(12.2, first);
        ledger.prepend(13.5, second);
        let old = &ledger.stock_prices.0[1];
        assert_eq!(old.created_at, first);
        assert_eq!(old.updated_at, second);
    }

    #[test]
    fn window_includes_the_whole_end_day() {
        let w = DateWindow::from_calendar_dates("2026-08-27", "2026-08-27").unwrap();
        assert!(w.contains(at(2026, 8, 27, 0)));
        assert!(w.contains(at(2026, 8, 27, 23)));
        assert!(!w.contains(at(2026, 8, 28, 0)));
        assert!(!w.contains(at(2026, 8, 26, 23)));
    }

    #[test]
    fn window_spans_multiple_days() {
        let w = DateWindow::from_calendar_dates("2026-08-25", "2026-08-27").unwrap();
        assert!(w.contains(at(2026, 8, 25, 0)));
        assert!(w.contains(at(2026, 8, 26, 12)));
        assert!(!w.contains(at(2026, 8, 28, 0)));
    }

    #[test]
    fn malformed_dates_yield_no_window() {
        assert!(DateWindow::from_calendar_dates("not-a-date", "2026-08-27").is_none());
        assert!(DateWindow::from_calendar_dates("2026-08-27", "27/08/2026").is_none());
    }

    #[test]
    fn filtered_keeps_order_and_shape() {
        let mut ledger = StockLedger::empty(8934);
        ledger.prepend(10.0, at(2026, 8, 25, 9));
        ledger.prepend(11.0, at(2026, 8, 27, 9));
        ledger.prepend(12.0, at(2026, 8, 27, 15));

        let w = DateWindow::from_calendar_dates("2026-08-27", "2026-08-27");
        let filtered = ledger.filtered(w.as_ref());
        assert_eq!(filtered.company_code, 8934);
        let prices: Vec<f64> = filtered.stock_prices.0.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![12.0, 11.0]);
    }

    #[test]
    fn filtered_without_window_is_empty() {
        let mut ledger = StockLedger::empty(8934);
        ledger.prepend(10.0, at(2026, 8, 25, 9));
        let filtered = ledger.filtered(None);
        assert!(filtered.stock_prices.0.is_empty());
    }

    #[test]
    fn ledger_serializes_wire_names() {
        let mut ledger = StockLedger::empty(8934);
        ledger.prepend(12.2, at(2026, 8, 27, 9));
        let value = serde_json::to_value(&ledger).unwrap();
        assert_eq!(value["companyCode"], 8934);
        assert_eq!(value["stockPrices"][0]["price"], 12.2);
        assert!(value["stockPrices"][0]["createdAt"].is_string());
        assert!(value["stockPrices"][0]["updatedAt"].is_string());
    }
}
