use serde::{Deserialize, Serialize};

use crate::domain::common::validation::{require_finite, require_text};
use crate::domain::common::{AggregateRoot, ValidationError};

/// Вложение в товар (закупка для магазина)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub company: String,
    pub amount: f64,
    pub shop_name: String,
}

impl AggregateRoot for Investment {
    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "investment"
    }

    fn element_name() -> &'static str {
        "Investment"
    }

    fn list_name() -> &'static str {
        "Investments"
    }
}

/// Форма вложения (POST /add_investment)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InvestmentDto {
    pub product_id: i32,
    pub amount: f64,
    pub shop_name: String,
}

impl InvestmentDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_finite("amount", self.amount)?;
        require_text("shop_name", &self.shop_name)?;
        Ok(())
    }
}
