use std::fmt;
use std::fmt::{Display, Formatter};

use crate::types::AmountError;
use thiserror::Error;

/// The user-editable fields of an expense.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Field {
    Amount,
    Category,
    Description
}

impl Display for Field {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Amount => "amount",
            Field::Category => "category",
            Field::Description => "description"
        };

        formatter.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("All fields are required: [{field}] is empty")]
    MissingField {
        field: Field
    },
    #[error("Amount must be a number: [{value}]")]
    InvalidAmount {
        value: String,
        #[source]
        source: AmountError
    }
}

impl InputError {
    pub fn missing(field: Field) -> Self {
        Self::MissingField { field }
    }

    pub fn invalid_amount(value: &str, source: AmountError) -> Self {
        Self::InvalidAmount {
            value: value.to_string(),
            source
        }
    }

    /// The field the user has to correct before resubmitting.
    pub fn field(&self) -> Field {
        match self {
            Self::MissingField { field } => *field,
            Self::InvalidAmount { .. } => Field::Amount
        }
    }
}
