use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a002_sale::aggregate::DATE_FORMAT;
use crate::domain::common::validation::{require_finite, require_text};
use crate::domain::common::{AggregateRoot, ValidationError};

/// Расход магазина (аренда, электричество и т.п.)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i32,
    #[serde(rename = "desc")]
    pub description: String,
    pub amount: f64,
    /// Календарный день в формате YYYY-MM-DD
    pub date: String,
}

impl AggregateRoot for Expense {
    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "expense"
    }

    fn element_name() -> &'static str {
        "Expense"
    }

    fn list_name() -> &'static str {
        "Expenses"
    }
}

/// Форма расхода (POST /add_expense)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExpenseDto {
    #[serde(rename = "desc")]
    pub description: String,
    pub amount: f64,
    pub date: String,
}

impl ExpenseDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("desc", &self.description)?;
        require_finite("amount", self.amount)?;
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| ValidationError::new("date", "expected YYYY-MM-DD"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(date: &str) -> ExpenseDto {
        ExpenseDto {
            description: "Electricity".into(),
            amount: 42.0,
            date: date.into(),
        }
    }

    #[test]
    fn test_dto_validation() {
        assert!(dto("2024-03-01").validate().is_ok());
        assert_eq!(dto("01.03.2024").validate().unwrap_err().field, "date");
        assert_eq!(dto("").validate().unwrap_err().field, "date");

        let blank = ExpenseDto {
            description: "  ".into(),
            ..dto("2024-03-01")
        };
        assert_eq!(blank.validate().unwrap_err().field, "desc");
    }

    #[test]
    fn test_desc_field_name() {
        let parsed: ExpenseDto =
            serde_json::from_str(r#"{"desc": "Rent", "amount": 300.0, "date": "2024-02-01"}"#)
                .unwrap();
        assert_eq!(parsed.description, "Rent");

        let expense = Expense {
            id: 1,
            description: "Rent".into(),
            amount: 300.0,
            date: "2024-02-01".into(),
        };
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["desc"], "Rent");
    }
}
