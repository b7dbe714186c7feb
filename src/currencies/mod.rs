pub mod currency_errors;
pub mod currency_model;
pub mod legacy_codes;

pub use currency_errors::CurrencyError;
pub use currency_model::Currency;
