pub mod currencies;
pub mod errors;
pub mod fx;
pub mod money;

pub use currencies::Currency;
pub use errors::{Error, Result};
pub use fx::{ExchangeRateStore, PivotExchangeRateStore, RateProvider};
pub use money::Money;
