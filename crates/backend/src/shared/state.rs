use sea_orm::DatabaseConnection;

/// Состояние приложения, общее для всех обработчиков
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
