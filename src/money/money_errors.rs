use thiserror::Error;

use crate::currencies::Currency;
use crate::fx::FxError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    // The message format is part of the public contract; callers surface it
    // verbatim to API clients.
    #[error("Cannot {action} {base} and {other} amounts.")]
    CurrencyMismatch {
        action: &'static str,
        base: Currency,
        other: Currency,
    },

    #[error(transparent)]
    Rate(#[from] FxError),
}
