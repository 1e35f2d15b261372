mod errors;
mod expense;
mod input;

pub use errors::{Field, InputError};
pub use expense::ExpenseRecord;
pub use input::ExpenseInput;
