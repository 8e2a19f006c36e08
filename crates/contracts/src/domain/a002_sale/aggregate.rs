use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, ValidationError};

/// Формат календарного дня, в котором хранятся даты продаж и расходов
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// Aggregate Root
// ============================================================================

/// Продажа товара
///
/// Название товара и компания копируются из товара в момент продажи,
/// прибыль тоже фиксируется в момент продажи и дальше не пересчитывается.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub company: String,
    pub quantity_sold: i32,
    pub profit: f64,
    /// Календарный день в формате YYYY-MM-DD
    pub date: String,
}

impl AggregateRoot for Sale {
    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "sale"
    }

    fn element_name() -> &'static str {
        "Sale"
    }

    fn list_name() -> &'static str {
        "Sales"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Форма продажи (POST /add_sale)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SaleDto {
    pub product_id: i32,
    pub quantity_sold: i32,
}

impl SaleDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.quantity_sold <= 0 {
            return Err(ValidationError::new(
                "quantity_sold",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}
