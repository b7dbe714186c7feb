use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::currencies::Currency;

// Field naming mirrors the feed model: a field called `source` would be
// picked up by thiserror as the std error source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FxError {
    #[error("No exchange rate found for {from_currency}/{to_currency} at {date}")]
    RateNotFound {
        from_currency: Currency,
        to_currency: Currency,
        date: DateTime<Utc>,
    },

    #[error("Exchange rates must be quoted against the pivot currency {pivot}, got {from_currency}")]
    NonPivotSource {
        from_currency: Currency,
        pivot: Currency,
    },
}
