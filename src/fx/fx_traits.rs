use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::fx_errors::FxError;
use crate::currencies::Currency;

/// Trait defining the contract for exchange-rate lookups.
///
/// `Money::convert` and aggregation code depend on this seam rather than on a
/// concrete store, so the flat store and the pivot-derived store are
/// interchangeable.
pub trait RateProvider: Send + Sync {
    /// Returns the rate to multiply a `source` amount by to obtain a `target`
    /// amount, resolved against the recorded date nearest to `as_of`.
    fn get_exchange_rate(
        &self,
        source: Currency,
        target: Currency,
        as_of: DateTime<Utc>,
    ) -> Result<Decimal, FxError>;

    /// True iff the currency has at least one outgoing rate.
    fn is_supported(&self, currency: Currency) -> bool;

    /// All currencies that appear as a rate source, sorted by code.
    fn currencies(&self) -> Vec<Currency>;
}
