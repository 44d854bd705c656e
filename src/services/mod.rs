pub(crate) mod company_service;
pub(crate) mod stock_service;
