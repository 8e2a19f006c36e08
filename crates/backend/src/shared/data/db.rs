use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_sale::aggregate::Sale;
use contracts::domain::a003_investment::aggregate::Investment;
use contracts::domain::a004_expense::aggregate::Expense;
use contracts::domain::common::AggregateRoot;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr,
    Statement,
};
use std::path::Path;

/// Открывает (или создаёт) файл БД и гарантирует наличие всех таблиц
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Opening database {}", absolute_path.display());
    let conn = Database::connect(&db_url).await?;
    ensure_schema(&conn).await?;
    Ok(conn)
}

/// In-memory database with the full schema, used by tests
///
/// A single pooled connection: every new sqlite connection to `:memory:`
/// would otherwise get its own empty database.
pub async fn connect_in_memory() -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let conn = Database::connect(options).await?;
    ensure_schema(&conn).await?;
    Ok(conn)
}

/// Создаёт недостающие таблицы (minimal schema bootstrap)
pub async fn ensure_schema(conn: &DatabaseConnection) -> Result<(), DbErr> {
    ensure_table(
        conn,
        &Product::full_name(),
        r#"
            CREATE TABLE a001_product (
                id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
                name TEXT NOT NULL,
                company TEXT NOT NULL DEFAULT '',
                cost_price REAL NOT NULL DEFAULT 0,
                sell_price REAL NOT NULL DEFAULT 0,
                quantity INTEGER NOT NULL DEFAULT 0
            );
        "#,
    )
    .await?;

    ensure_table(
        conn,
        &Sale::full_name(),
        r#"
            CREATE TABLE a002_sale (
                id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
                product_id INTEGER NOT NULL,
                product_name TEXT NOT NULL DEFAULT '',
                company TEXT NOT NULL DEFAULT '',
                quantity_sold INTEGER NOT NULL,
                profit REAL NOT NULL DEFAULT 0,
                date TEXT NOT NULL
            );
        "#,
    )
    .await?;

    ensure_table(
        conn,
        &Investment::full_name(),
        r#"
            CREATE TABLE a003_investment (
                id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
                product_id INTEGER NOT NULL,
                product_name TEXT NOT NULL DEFAULT '',
                company TEXT NOT NULL DEFAULT '',
                amount REAL NOT NULL DEFAULT 0,
                shop_name TEXT NOT NULL DEFAULT ''
            );
        "#,
    )
    .await?;

    ensure_table(
        conn,
        &Expense::full_name(),
        r#"
            CREATE TABLE a004_expense (
                id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
                "desc" TEXT NOT NULL,
                amount REAL NOT NULL DEFAULT 0,
                date TEXT NOT NULL
            );
        "#,
    )
    .await?;

    // Тренд прибыли фильтрует продажи по дню
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        "CREATE INDEX IF NOT EXISTS idx_a002_sale_date ON a002_sale (date);".to_string(),
    ))
    .await?;

    Ok(())
}

async fn ensure_table(
    conn: &DatabaseConnection,
    table_name: &str,
    create_sql: &str,
) -> Result<(), DbErr> {
    let exists = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type='table' AND name = ?;",
            [table_name.into()],
        ))
        .await?;

    if exists.is_empty() {
        tracing::info!("Creating {} table", table_name);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_sql.to_string(),
        ))
        .await?;
    }
    Ok(())
}
