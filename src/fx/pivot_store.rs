use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::fx_errors::FxError;
use super::fx_model::NewExchangeRate;
use super::fx_traits::RateProvider;
use super::rate_store::ExchangeRateStore;
use crate::currencies::Currency;

/// Exchange-rate store that quotes every rate against a single pivot
/// currency and derives all cross rates as ratios through it.
///
/// The upstream feed only publishes pivot-sourced rates (e.g. `USD -> EUR`,
/// `USD -> NOK`), so a full bilateral matrix is never available. Cross rates
/// are computed as `rate(source -> pivot) / rate(target -> pivot)`; each leg
/// resolves independently by nearest date, so sparse pivot data may resolve
/// the two legs against different recorded dates. That approximation is
/// accepted, as is the small drift between pivot-derived ratios and true
/// bilateral rates.
pub struct PivotExchangeRateStore {
    pivot: Currency,
    base: ExchangeRateStore,
}

impl PivotExchangeRateStore {
    pub fn new(pivot: Currency) -> Self {
        Self {
            pivot,
            base: ExchangeRateStore::new(),
        }
    }

    pub fn pivot(&self) -> Currency {
        self.pivot
    }

    /// Records a pivot-sourced rate. Rejects any record whose source is not
    /// the pivot currency; the base store installs the `target -> pivot`
    /// inverse as usual.
    pub fn add_exchange_rate(
        &self,
        source: Currency,
        target: Currency,
        date: DateTime<Utc>,
        rate: Decimal,
    ) -> Result<(), FxError> {
        if source != self.pivot {
            return Err(FxError::NonPivotSource {
                from_currency: source,
                pivot: self.pivot,
            });
        }
        self.base.add_rate(source, target, date, rate);
        Ok(())
    }

    /// Loads a batch of feed records, skipping records that fail currency
    /// resolution or the pivot-source check instead of aborting the batch.
    /// Returns the number of records accepted.
    ///
    /// Called once at startup with the full history and afterwards by the
    /// periodic refresh job with the records newer than its last window.
    pub fn load_rates(&self, records: impl IntoIterator<Item = NewExchangeRate>) -> usize {
        let mut accepted = 0;
        for record in records {
            let source = match Currency::from_code(&record.from_currency) {
                Ok(currency) => currency,
                Err(e) => {
                    log::warn!("Skipping exchange rate record: {}", e);
                    continue;
                }
            };
            let target = match Currency::from_code(&record.to_currency) {
                Ok(currency) => currency,
                Err(e) => {
                    log::warn!("Skipping exchange rate record: {}", e);
                    continue;
                }
            };
            match self.add_exchange_rate(source, target, record.timestamp, record.rate) {
                Ok(()) => accepted += 1,
                Err(e) => log::warn!("Skipping exchange rate record: {}", e),
            }
        }
        log::debug!("Loaded {} exchange rate records", accepted);
        accepted
    }
}

impl RateProvider for PivotExchangeRateStore {
    fn get_exchange_rate(
        &self,
        source: Currency,
        target: Currency,
        as_of: DateTime<Utc>,
    ) -> Result<Decimal, FxError> {
        if source == target {
            return Ok(Decimal::ONE);
        }

        let not_found = || FxError::RateNotFound {
            from_currency: source,
            to_currency: target,
            date: as_of,
        };

        let source_leg = self
            .base
            .get_exchange_rate(source, self.pivot, as_of)
            .map_err(|_| not_found())?;
        let target_leg = self
            .base
            .get_exchange_rate(target, self.pivot, as_of)
            .map_err(|_| not_found())?;

        Ok(source_leg / target_leg)
    }

    fn is_supported(&self, currency: Currency) -> bool {
        self.base.is_supported(currency)
    }

    fn currencies(&self) -> Vec<Currency> {
        self.base.currencies()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    fn currency(code: &str) -> Currency {
        Currency::from_code(code).unwrap()
    }

    fn seeded_store() -> PivotExchangeRateStore {
        let store = PivotExchangeRateStore::new(currency("USD"));
        let date = utc(2008, 6, 14);
        store
            .add_exchange_rate(currency("USD"), currency("EUR"), date, dec!(0.7656))
            .unwrap();
        store
            .add_exchange_rate(currency("USD"), currency("NOK"), date, dec!(6.7258))
            .unwrap();
        store
    }

    #[test]
    fn rejects_non_pivot_source() {
        let store = PivotExchangeRateStore::new(currency("USD"));
        let err = store
            .add_exchange_rate(currency("EUR"), currency("NOK"), utc(2008, 6, 14), dec!(8.78))
            .unwrap_err();
        assert_eq!(
            err,
            FxError::NonPivotSource {
                from_currency: currency("EUR"),
                pivot: currency("USD"),
            }
        );
    }

    #[test]
    fn pivot_sourced_rates_resolve_directly() {
        let store = seeded_store();
        let rate = store
            .get_exchange_rate(currency("USD"), currency("EUR"), utc(2008, 6, 14))
            .unwrap();
        assert_eq!(rate, dec!(0.7656));
    }

    #[test]
    fn cross_rates_derive_through_the_pivot() {
        let store = seeded_store();
        let date = utc(2008, 6, 14);

        let eur_to_nok = store
            .get_exchange_rate(currency("EUR"), currency("NOK"), date)
            .unwrap();
        assert_eq!(eur_to_nok.round_dp(6), dec!(8.785005));

        let nok_to_eur = store
            .get_exchange_rate(currency("NOK"), currency("EUR"), date)
            .unwrap();
        assert_eq!(nok_to_eur.round_dp(7), dec!(0.1138303));
    }

    #[test]
    fn rate_into_the_pivot_uses_the_stored_inverse() {
        let store = seeded_store();
        let rate = store
            .get_exchange_rate(currency("EUR"), currency("USD"), utc(2008, 6, 14))
            .unwrap();
        assert_eq!(rate, Decimal::ONE / dec!(0.7656));
    }

    #[test]
    fn missing_leg_reports_the_requested_pair() {
        let store = seeded_store();
        let date = utc(2008, 6, 14);
        let err = store
            .get_exchange_rate(currency("EUR"), currency("GBP"), date)
            .unwrap_err();
        assert_eq!(
            err,
            FxError::RateNotFound {
                from_currency: currency("EUR"),
                to_currency: currency("GBP"),
                date,
            }
        );
    }

    #[test]
    fn legs_may_resolve_against_different_dates() {
        let store = PivotExchangeRateStore::new(currency("USD"));
        store
            .add_exchange_rate(currency("USD"), currency("EUR"), utc(2008, 6, 13), dec!(0.7656))
            .unwrap();
        store
            .add_exchange_rate(currency("USD"), currency("NOK"), utc(2008, 6, 16), dec!(6.7258))
            .unwrap();

        let rate = store
            .get_exchange_rate(currency("EUR"), currency("NOK"), utc(2008, 6, 14))
            .unwrap();
        assert_eq!(rate.round_dp(6), dec!(8.785005));
    }

    #[test]
    fn load_rates_skips_bad_records() {
        let store = PivotExchangeRateStore::new(currency("USD"));
        let date = utc(2008, 6, 14);
        let records = vec![
            NewExchangeRate {
                from_currency: "USD".to_string(),
                to_currency: "EUR".to_string(),
                rate: dec!(0.7656),
                timestamp: date,
            },
            NewExchangeRate {
                from_currency: "EUR".to_string(),
                to_currency: "NOK".to_string(),
                rate: dec!(8.78),
                timestamp: date,
            },
            NewExchangeRate {
                from_currency: "USD".to_string(),
                to_currency: "XXINVALID".to_string(),
                rate: dec!(1.23),
                timestamp: date,
            },
        ];

        assert_eq!(store.load_rates(records), 1);
        assert_eq!(
            store
                .get_exchange_rate(currency("USD"), currency("EUR"), date)
                .unwrap(),
            dec!(0.7656)
        );
    }
}
