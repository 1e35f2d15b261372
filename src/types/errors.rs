use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmountError {
    #[error("Amount error: {0}")]
    InvalidFormat(String),
    #[error("Amount error: Value is outside the supported range")]
    Overflow,
    #[error("Amount error: Value has more decimal places than can be stored exactly")]
    Precision
}
