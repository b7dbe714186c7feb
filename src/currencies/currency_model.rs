use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::currency_errors::CurrencyError;
use super::legacy_codes::successor_code;

/// Canonical descriptor for an ISO 4217 currency: alpha code plus the number
/// of minor-unit digits its amounts are conventionally expressed in.
#[derive(Debug)]
pub struct CurrencyInfo {
    code: &'static str,
    decimal_digits: u32,
}

/// Interned handle to a currency descriptor.
///
/// Two `Currency` values with the same code are the same entity; the handle
/// is `Copy` and points into the process-wide ISO table.
#[derive(Debug, Clone, Copy)]
pub struct Currency(&'static CurrencyInfo);

/// ISO 4217 codes with their minor-unit digit counts.
const ISO_4217: &[(&str, u32)] = &[
    ("AED", 2),
    ("AFN", 2),
    ("ALL", 2),
    ("AMD", 2),
    ("ARS", 2),
    ("AUD", 2),
    ("AZN", 2),
    ("BAM", 2),
    ("BDT", 2),
    ("BGN", 2),
    ("BHD", 3),
    ("BOB", 2),
    ("BRL", 2),
    ("BYN", 2),
    ("CAD", 2),
    ("CHF", 2),
    ("CLP", 0),
    ("CNY", 2),
    ("COP", 2),
    ("CRC", 2),
    ("CZK", 2),
    ("DKK", 2),
    ("DOP", 2),
    ("DZD", 2),
    ("EGP", 2),
    ("EUR", 2),
    ("GBP", 2),
    ("GEL", 2),
    ("GHS", 2),
    ("GTQ", 2),
    ("HKD", 2),
    ("HUF", 2),
    ("IDR", 2),
    ("ILS", 2),
    ("INR", 2),
    ("IQD", 3),
    ("IRR", 2),
    ("ISK", 0),
    ("JMD", 2),
    ("JOD", 3),
    ("JPY", 0),
    ("KES", 2),
    ("KGS", 2),
    ("KHR", 2),
    ("KRW", 0),
    ("KWD", 3),
    ("KZT", 2),
    ("LAK", 2),
    ("LKR", 2),
    ("LYD", 3),
    ("MAD", 2),
    ("MDL", 2),
    ("MKD", 2),
    ("MMK", 2),
    ("MNT", 2),
    ("MXN", 2),
    ("MYR", 2),
    ("MZN", 2),
    ("NGN", 2),
    ("NOK", 2),
    ("NPR", 2),
    ("NZD", 2),
    ("OMR", 3),
    ("PEN", 2),
    ("PHP", 2),
    ("PKR", 2),
    ("PLN", 2),
    ("PYG", 0),
    ("QAR", 2),
    ("RON", 2),
    ("RSD", 2),
    ("RUB", 2),
    ("SAR", 2),
    ("SDG", 2),
    ("SEK", 2),
    ("SGD", 2),
    ("SRD", 2),
    ("THB", 2),
    ("TJS", 2),
    ("TMT", 2),
    ("TND", 3),
    ("TRY", 2),
    ("TTD", 2),
    ("TWD", 2),
    ("TZS", 2),
    ("UAH", 2),
    ("UGX", 0),
    ("USD", 2),
    ("UYU", 2),
    ("UZS", 2),
    ("VES", 2),
    ("VND", 0),
    ("XAF", 0),
    ("XOF", 0),
    ("ZAR", 2),
    ("ZMW", 2),
    ("ZWL", 2),
];

static ISO_TABLE: OnceLock<HashMap<&'static str, CurrencyInfo>> = OnceLock::new();

fn iso_table() -> &'static HashMap<&'static str, CurrencyInfo> {
    ISO_TABLE.get_or_init(|| {
        ISO_4217
            .iter()
            .map(|&(code, decimal_digits)| {
                (
                    code,
                    CurrencyInfo {
                        code,
                        decimal_digits,
                    },
                )
            })
            .collect()
    })
}

impl Currency {
    /// Resolves a currency code to its canonical descriptor, remapping
    /// obsolete codes (e.g. `YTL` -> `TRY`) before the ISO lookup.
    pub fn from_code(code: &str) -> Result<Currency, CurrencyError> {
        let canonical = successor_code(code).unwrap_or(code);
        iso_table()
            .get(canonical)
            .map(Currency)
            .ok_or_else(|| CurrencyError::UnknownCurrencyCode {
                code: code.to_string(),
            })
    }

    pub fn code(&self) -> &'static str {
        self.0.code
    }

    pub fn decimal_digits(&self) -> u32 {
        self.0.decimal_digits
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.0.code == other.0.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.code.hash(state);
    }
}

impl PartialOrd for Currency {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Currency {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.code.cmp(other.0.code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0.code)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.code)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Currency::from_code(&code).map_err(serde::de::Error::custom)
    }
}
