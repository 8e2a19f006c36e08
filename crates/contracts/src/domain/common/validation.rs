use std::fmt;

/// Ошибка валидации формы: имя поля и человекочитаемое сообщение
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Поле не должно быть пустым или состоять из пробелов
pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(())
}

/// Денежная сумма должна быть конечным числом
pub fn require_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new(field, "must be a finite number"));
    }
    Ok(())
}

/// Цена: конечное неотрицательное число
pub fn require_price(field: &'static str, value: f64) -> Result<(), ValidationError> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::new(field, "must not be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(require_text("name", "Soap").is_ok());
        assert_eq!(
            require_text("name", "   "),
            Err(ValidationError::new("name", "must not be empty"))
        );
    }

    #[test]
    fn test_require_price() {
        assert!(require_price("cost_price", 0.0).is_ok());
        assert!(require_price("cost_price", 12.5).is_ok());
        assert!(require_price("cost_price", -1.0).is_err());
        assert!(require_price("cost_price", f64::NAN).is_err());
        assert!(require_price("cost_price", f64::INFINITY).is_err());
    }
}
