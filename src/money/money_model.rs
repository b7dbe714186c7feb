use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::prelude::Signed;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::money_errors::MoneyError;
use crate::currencies::Currency;
use crate::fx::RateProvider;

/// An immutable currency-tagged amount.
///
/// The amount is always held at exactly the currency's minor-unit scale
/// (2 digits for USD, 0 for JPY, 3 for KWD), normalized with
/// round-half-to-even so repeated rounding does not bias aggregates. Every
/// operation returns a new value; `Money` is `Copy` and freely shared across
/// threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "MoneyWire")]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

/// Wire shape for deserialization, routed through `Money::new` so incoming
/// amounts are re-normalized to the currency's scale.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MoneyWire {
    amount: Decimal,
    currency: Currency,
}

impl From<MoneyWire> for Money {
    fn from(wire: MoneyWire) -> Money {
        Money::new(wire.amount, wire.currency)
    }
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Money {
        Money {
            amount: Self::to_currency_scale(amount, currency),
            currency,
        }
    }

    pub fn zero(currency: Currency) -> Money {
        Money::new(Decimal::ZERO, currency)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    fn to_currency_scale(amount: Decimal, currency: Currency) -> Decimal {
        let digits = currency.decimal_digits();
        let mut scaled =
            amount.round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven);
        // round_dp never pads, so rescale to keep trailing zeros ("5.00").
        scaled.rescale(digits);
        scaled
    }

    fn check_currency(&self, action: &'static str, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch {
                action,
                base: self.currency,
                other: other.currency,
            });
        }
        Ok(())
    }

    pub fn add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.check_currency("add", other)?;
        Ok(Money::new(self.amount + other.amount, self.currency))
    }

    pub fn subtract(&self, other: &Money) -> Result<Money, MoneyError> {
        self.check_currency("subtract", other)?;
        Ok(Money::new(self.amount - other.amount, self.currency))
    }

    /// Scales the amount by an integer factor. Single-operand, so no
    /// currency check applies.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount * Decimal::from(factor), self.currency)
    }

    pub fn negate(&self) -> Money {
        Money::new(-self.amount, self.currency)
    }

    pub fn abs(&self) -> Money {
        Money::new(self.amount.abs(), self.currency)
    }

    pub fn signum(&self) -> Decimal {
        if self.amount.is_zero() {
            Decimal::ZERO
        } else {
            self.amount.signum()
        }
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn compare(&self, other: &Money) -> Result<Ordering, MoneyError> {
        self.check_currency("compare", other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Converts into `target` using the rate in effect nearest to `as_of`.
    ///
    /// Same-currency conversion returns the value unchanged without a rate
    /// lookup, and zero converts to zero in any currency even on an empty
    /// store. The result is re-normalized to the target currency's scale.
    pub fn convert(
        &self,
        rates: &dyn RateProvider,
        target: Currency,
        as_of: DateTime<Utc>,
    ) -> Result<Money, MoneyError> {
        if target == self.currency {
            return Ok(*self);
        }
        if self.is_zero() {
            return Ok(Money::zero(target));
        }
        let rate = rates.get_exchange_rate(self.currency, target, as_of)?;
        Ok(Money::new(self.amount * rate, target))
    }

    /// Canonical, locale-independent decimal string at the currency's scale,
    /// for storage and transport. Locale-aware display formatting lives in
    /// the presentation layer.
    pub fn to_plain_string(&self) -> String {
        self.amount.to_string()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
