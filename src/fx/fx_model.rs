use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::currencies::Currency;

/// A recorded exchange rate, as exported by the store or exchanged with the
/// feed loader.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub id: String,
    pub from_currency: String,
    pub to_currency: String,
    #[serde(
        deserialize_with = "deserialize_exchange_rate",
        serialize_with = "serialize_exchange_rate"
    )]
    pub rate: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl ExchangeRate {
    pub fn new(from: Currency, to: Currency, rate: Decimal, timestamp: DateTime<Utc>) -> Self {
        ExchangeRate {
            id: Self::make_fx_symbol(from.code(), to.code()),
            from_currency: from.code().to_string(),
            to_currency: to.code().to_string(),
            rate,
            timestamp,
        }
    }

    pub fn make_fx_symbol(from: &str, to: &str) -> String {
        format!("{}{}=X", from, to)
    }
}

/// A feed record awaiting ingestion: `(from, to, rate, effective instant)`.
/// The upstream refresh publishes these against a fixed pivot currency.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewExchangeRate {
    pub from_currency: String,
    pub to_currency: String,
    #[serde(
        deserialize_with = "deserialize_exchange_rate",
        serialize_with = "serialize_exchange_rate"
    )]
    pub rate: Decimal,
    pub timestamp: DateTime<Utc>,
}

fn deserialize_exchange_rate<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let decimal = <Decimal as serde::Deserialize>::deserialize(deserializer)?;
    // Feed rates are quoted to 6 decimal places.
    Ok(decimal.round_dp(6))
}

fn serialize_exchange_rate<S>(rate: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serde::Serialize::serialize(&rate.round_dp(6), serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn fx_symbol_names_the_pair() {
        assert_eq!(ExchangeRate::make_fx_symbol("USD", "EUR"), "USDEUR=X");
    }

    #[test]
    fn feed_record_uses_camel_case_keys() {
        let record = NewExchangeRate {
            from_currency: "USD".to_string(),
            to_currency: "EUR".to_string(),
            rate: dec!(0.765612),
            timestamp: Utc.with_ymd_and_hms(2008, 6, 14, 0, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["fromCurrency"], "USD");
        assert_eq!(json["toCurrency"], "EUR");
        assert_eq!(json["rate"], "0.765612");

        let back: NewExchangeRate = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn rate_is_quantized_to_six_decimals_on_the_wire() {
        let record = NewExchangeRate {
            from_currency: "USD".to_string(),
            to_currency: "NOK".to_string(),
            rate: dec!(6.72581234567),
            timestamp: Utc.with_ymd_and_hms(2008, 6, 14, 0, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["rate"], "6.725812");
    }
}
