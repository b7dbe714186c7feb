use thiserror::Error;

use crate::currencies::CurrencyError;
use crate::fx::FxError;
use crate::money::MoneyError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the exchange-rate engine
#[derive(Error, Debug)]
pub enum Error {
    #[error("Currency resolution failed: {0}")]
    Currency(#[from] CurrencyError),

    #[error("Money operation failed: {0}")]
    Money(#[from] MoneyError),

    #[error("Exchange rate operation failed: {0}")]
    Fx(#[from] FxError),
}
