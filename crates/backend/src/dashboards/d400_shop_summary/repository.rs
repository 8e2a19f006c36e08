use sea_orm::{ConnectionTrait, DbErr, FromQueryResult, Statement};

/// Raw totals over all recorded history
#[derive(Debug, Clone, FromQueryResult)]
pub struct TotalsAggregation {
    pub total_profit: f64,
    pub total_investment: f64,
    pub total_expense: f64,
}

/// Sale profit summed per calendar day
#[derive(Debug, Clone, FromQueryResult)]
pub struct DailyProfitAggregation {
    pub date: String,
    pub profit: f64,
}

/// Sum profit, investment and expense tables in one round trip
///
/// TOTAL() is used instead of SUM() because it yields 0.0 on empty tables.
pub async fn get_totals<C: ConnectionTrait>(db: &C) -> Result<TotalsAggregation, DbErr> {
    let sql = r#"
        SELECT
            (SELECT TOTAL(profit) FROM a002_sale) AS total_profit,
            (SELECT TOTAL(amount) FROM a003_investment) AS total_investment,
            (SELECT TOTAL(amount) FROM a004_expense) AS total_expense
    "#;

    let stmt = Statement::from_sql_and_values(sea_orm::DatabaseBackend::Sqlite, sql, []);
    let row = TotalsAggregation::find_by_statement(stmt).one(db).await?;

    Ok(row.unwrap_or(TotalsAggregation {
        total_profit: 0.0,
        total_investment: 0.0,
        total_expense: 0.0,
    }))
}

/// Get sale profit grouped by day for [date_from, date_to]
///
/// Days without sales are absent from the result.
pub async fn get_profit_by_day<C: ConnectionTrait>(
    db: &C,
    date_from: &str,
    date_to: &str,
) -> Result<Vec<DailyProfitAggregation>, DbErr> {
    let sql = r#"
        SELECT
            date,
            TOTAL(profit) AS profit
        FROM a002_sale
        WHERE date >= ? AND date <= ?
        GROUP BY date
        ORDER BY date
    "#;

    let stmt = Statement::from_sql_and_values(
        sea_orm::DatabaseBackend::Sqlite,
        sql,
        [date_from.into(), date_to.into()],
    );

    DailyProfitAggregation::find_by_statement(stmt).all(db).await
}
