use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_decimal::Decimal;

use super::fx_errors::FxError;
use super::fx_model::ExchangeRate;
use super::fx_traits::RateProvider;
use crate::currencies::Currency;

/// Thread-safe, time-indexed table of directional exchange rates.
///
/// Rates are keyed by `(source, target)` pair, each pair holding a sorted map
/// from effective date to rate. Adding a rate also installs the inverse rate
/// for the opposite direction, so both directions stay queryable from a
/// single feed pass. Lookups resolve against the recorded date nearest to
/// the requested one, which tolerates gaps in daily feeds (weekends,
/// holidays) instead of failing on missing exact dates.
///
/// The store is shared by many reader threads and mutated by a single
/// low-frequency refresh job; the sharded map keeps readers and the writer
/// out of each other's way, and a rate is visible to readers no later than
/// the return of the `add_rate` call that installed it.
#[derive(Default)]
pub struct ExchangeRateStore {
    rates: DashMap<(Currency, Currency), BTreeMap<DateTime<Utc>, Decimal>>,
}

impl ExchangeRateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a rate for `(source, target)` at `date`, overwriting any rate
    /// previously recorded for that exact date, and records the inverse rate
    /// for `(target, source)` computed at insertion time.
    ///
    /// A non-positive rate is ignored (legacy feed contract: bad records are
    /// dropped, not surfaced).
    pub fn add_rate(&self, source: Currency, target: Currency, date: DateTime<Utc>, rate: Decimal) {
        // Ignore self-referential rates; lookups short-circuit to 1 anyway.
        if source == target {
            return;
        }
        if rate <= Decimal::ZERO {
            log::warn!(
                "Ignoring non-positive exchange rate {} for {}/{} at {}",
                rate,
                source,
                target,
                date
            );
            return;
        }

        let inverse = Decimal::ONE / rate;
        self.rates.entry((source, target)).or_default().insert(date, rate);
        self.rates.entry((target, source)).or_default().insert(date, inverse);
    }

    /// All rates recorded for a pair, oldest first. Empty if the pair is
    /// unknown.
    pub fn recorded_rates(&self, source: Currency, target: Currency) -> Vec<ExchangeRate> {
        self.rates
            .get(&(source, target))
            .map(|series| {
                series
                    .iter()
                    .map(|(&date, &rate)| ExchangeRate::new(source, target, rate, date))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Nearest-date selection over a pair's recorded dates: an exact match
    /// wins; otherwise the strictly closer of the floor and ceiling
    /// neighbors; an exact tie favors the earlier date; a one-sided query
    /// (before the earliest or after the latest date) takes the single side.
    fn nearest_rate(
        series: &BTreeMap<DateTime<Utc>, Decimal>,
        as_of: DateTime<Utc>,
    ) -> Option<Decimal> {
        let floor = series.range(..=as_of).next_back();
        let ceiling = series.range(as_of..).next();

        match (floor, ceiling) {
            (Some((&floor_date, &floor_rate)), Some((&ceiling_date, &ceiling_rate))) => {
                if floor_date == ceiling_date {
                    return Some(floor_rate);
                }
                let before = as_of - floor_date;
                let after = ceiling_date - as_of;
                if after < before {
                    Some(ceiling_rate)
                } else {
                    Some(floor_rate)
                }
            }
            (Some((_, &rate)), None) | (None, Some((_, &rate))) => Some(rate),
            (None, None) => None,
        }
    }
}

impl RateProvider for ExchangeRateStore {
    fn get_exchange_rate(
        &self,
        source: Currency,
        target: Currency,
        as_of: DateTime<Utc>,
    ) -> Result<Decimal, FxError> {
        if source == target {
            return Ok(Decimal::ONE);
        }

        self.rates
            .get(&(source, target))
            .and_then(|series| Self::nearest_rate(&series, as_of))
            .ok_or(FxError::RateNotFound {
                from_currency: source,
                to_currency: target,
                date: as_of,
            })
    }

    fn is_supported(&self, currency: Currency) -> bool {
        self.rates.iter().any(|entry| entry.key().0 == currency)
    }

    fn currencies(&self) -> Vec<Currency> {
        let sources: BTreeSet<Currency> =
            self.rates.iter().map(|entry| entry.key().0).collect();
        sources.into_iter().collect()
    }
}
