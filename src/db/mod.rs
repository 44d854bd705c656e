pub(crate) mod company_queries;
pub(crate) mod stock_queries;
