pub mod fx_errors;
pub mod fx_model;
pub mod fx_traits;
pub mod pivot_store;
pub mod rate_store;

pub use fx_errors::FxError;
pub use fx_model::{ExchangeRate, NewExchangeRate};
pub use fx_traits::RateProvider;
pub use pivot_store::PivotExchangeRateStore;
pub use rate_store::ExchangeRateStore;
