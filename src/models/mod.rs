mod company;
mod stock_ledger;

pub use company::{Company, CompanyListing, CompanyWithStocks, RegisterCompany, MIN_TURNOVER};
pub use stock_ledger::{AddPrice, DateWindow, PricePoint, StockLedger};
