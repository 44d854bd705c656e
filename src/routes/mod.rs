pub(crate) mod company;
pub(crate) mod health;
pub(crate) mod stock;
