use crate::models::ExpenseRecord;
use crate::report::ReportError;
use crate::types::{Amount, Category, MonthKey};
use chrono::NaiveDate;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Per-category totals for a single month, in first-seen category order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MonthTotals {
    month: MonthKey,
    categories: Vec<(Category, Amount)>
}

impl MonthTotals {
    fn new(month: MonthKey) -> Self {
        Self {
            month,
            categories: Vec::new()
        }
    }

    fn accumulate(&mut self, category: &str, amount: Amount) -> Result<(), ReportError> {
        match self.categories.iter_mut().find(|(name, _)| name == category) {
            Some((_, total)) => {
                *total = total.checked_add(amount).ok_or_else(|| ReportError::Overflow {
                    month: self.month.clone(),
                    category: category.to_string()
                })?;
            }
            None => self.categories.push((category.to_string(), amount))
        }

        Ok(())
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, Amount)> {
        self.categories.iter().map(|(name, total)| (name.as_str(), *total))
    }

    pub fn total(&self, category: &str) -> Option<Amount> {
        self.categories()
            .find(|(name, _)| *name == category)
            .map(|(_, total)| total)
    }
}

/// Month → category → summed amount, in first-seen order at both levels.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct MonthlyReport {
    months: Vec<MonthTotals>
}

impl MonthlyReport {
    pub fn months(&self) -> impl Iterator<Item = &MonthTotals> {
        self.months.iter()
    }

    pub fn get(&self, month: &str) -> Option<&MonthTotals> {
        self.months.iter().find(|totals| totals.month == month)
    }

    pub fn total(&self, month: &str, category: &str) -> Option<Amount> {
        self.get(month).and_then(|totals| totals.total(category))
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    fn entry(&mut self, month: MonthKey) -> &mut MonthTotals {
        let index = match self.months.iter().position(|totals| totals.month == month) {
            Some(index) => index,
            None => {
                self.months.push(MonthTotals::new(month));
                self.months.len() - 1
            }
        };

        &mut self.months[index]
    }
}

impl Display for MonthlyReport {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        for totals in &self.months {
            writeln!(formatter, "Month: {}", totals.month)?;

            for (category, amount) in totals.categories() {
                writeln!(formatter, "  {category}: {amount}")?;
            }
        }

        Ok(())
    }
}

/// `YYYY-MM` key a date is grouped under.
pub fn month_key(date: NaiveDate) -> MonthKey {
    date.format("%Y-%m").to_string()
}

/// Sums every record's amount into its month and category.
///
/// # Errors
/// Returns `ReportError::Overflow` if a category total leaves the amount range.
pub fn report(records: &[ExpenseRecord]) -> Result<MonthlyReport, ReportError> {
    let mut monthly_report = MonthlyReport::default();

    for record in records {
        monthly_report
            .entry(month_key(record.date))
            .accumulate(&record.category, record.amount)?;
    }

    Ok(monthly_report)
}
