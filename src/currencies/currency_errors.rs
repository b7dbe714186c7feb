use thiserror::Error;

#[derive(Error, Debug)]
pub enum CurrencyError {
    #[error("Unknown currency code '{code}'")]
    UnknownCurrencyCode { code: String },
}
