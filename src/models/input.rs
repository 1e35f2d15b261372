use chrono::NaiveDate;
use std::str::FromStr;

use crate::models::errors::{Field, InputError};
use crate::models::ExpenseRecord;
use crate::types::Amount;

/// The raw text a user submits for a new expense.
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub amount: String,
    pub category: String,
    pub description: String
}

impl ExpenseInput {
    pub fn new(amount: impl Into<String>, category: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            category: category.into(),
            description: description.into()
        }
    }

    /// Turns the submission into a record dated `date`.
    ///
    /// # Errors
    /// Returns `InputError` if:
    /// - Any of the three fields is empty or only whitespace.
    /// - The amount is not a number.
    pub fn validate(self, date: NaiveDate) -> Result<ExpenseRecord, InputError> {
        for (field, value) in [
            (Field::Amount, &self.amount),
            (Field::Category, &self.category),
            (Field::Description, &self.description)
        ] {
            if value.trim().is_empty() {
                return Err(InputError::missing(field));
            }
        }

        let amount = Amount::from_str(&self.amount)
            .map_err(|source| InputError::invalid_amount(&self.amount, source))?;

        Ok(ExpenseRecord {
            date,
            amount,
            category: self.category,
            description: self.description
        })
    }
}
