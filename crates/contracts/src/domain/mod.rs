pub mod a001_product;
pub mod a002_sale;
pub mod a003_investment;
pub mod a004_expense;
pub mod common;
