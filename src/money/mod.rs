pub mod money_errors;
pub mod money_model;

pub use money_errors::MoneyError;
pub use money_model::Money;
