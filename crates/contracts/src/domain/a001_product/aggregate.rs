use serde::{Deserialize, Serialize};

use crate::domain::common::validation::{require_price, require_text};
use crate::domain::common::{AggregateRoot, ValidationError};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар на складе магазина
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub company: String,
    pub cost_price: f64,
    pub sell_price: f64,
    /// Остаток на складе, уменьшается при продаже
    pub quantity: i32,
}

impl Product {
    /// Прибыль с продажи `quantity` единиц по текущим ценам
    pub fn profit_for(&self, quantity: i32) -> f64 {
        (self.sell_price - self.cost_price) * f64::from(quantity)
    }

    /// Подпись для выпадающих списков в формах
    pub fn label(&self) -> String {
        if self.company.trim().is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.company)
        }
    }
}

impl AggregateRoot for Product {
    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Форма добавления товара (POST /add_product)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductDto {
    pub name: String,
    pub company: String,
    pub cost_price: f64,
    pub sell_price: f64,
    pub quantity: i32,
}

impl ProductDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_price("cost_price", self.cost_price)?;
        require_price("sell_price", self.sell_price)?;
        if self.quantity < 0 {
            return Err(ValidationError::new("quantity", "must not be negative"));
        }
        Ok(())
    }
}
