use chrono::{Duration, NaiveDate};
use contracts::dashboards::d400_shop_summary::{
    DailyProfit, ShopSummaryResponse, ShopTotals, TREND_DAYS,
};
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_sale::aggregate::{Sale, DATE_FORMAT};
use contracts::domain::a003_investment::aggregate::Investment;
use contracts::domain::a004_expense::aggregate::Expense;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use super::repository;
use crate::domain::{a001_product, a002_sale, a003_investment, a004_expense};
use crate::shared::error::ShopError;

/// Everything the dashboard page shows
#[derive(Debug, Clone)]
pub struct ShopDashboard {
    pub products: Vec<Product>,
    pub sales: Vec<Sale>,
    pub investments: Vec<Investment>,
    pub expenses: Vec<Expense>,
    pub totals: ShopTotals,
    pub trend: Vec<DailyProfit>,
}

/// Load all records and compute totals and the profit trend ending on `today`
///
/// The trend only reads the sales of its own window.
pub async fn get_dashboard(
    db: &DatabaseConnection,
    today: NaiveDate,
) -> Result<ShopDashboard, ShopError> {
    let products = a001_product::service::list_all(db).await?;
    let sales = a002_sale::service::list_all(db).await?;
    let investments = a003_investment::service::list_all(db).await?;
    let expenses = a004_expense::service::list_all(db).await?;

    let totals = summarize(&sales, &investments, &expenses);

    let days = trend_days(today, TREND_DAYS);
    let trend = match (days.first(), days.last()) {
        (Some(first), Some(last)) => {
            let window = a002_sale::service::list_by_period(db, *first, *last).await?;
            profit_trend(&window, today, TREND_DAYS)
        }
        _ => Vec::new(),
    };

    Ok(ShopDashboard {
        products,
        sales,
        investments,
        expenses,
        totals,
        trend,
    })
}

/// Totals and trend computed in SQL, without loading the record lists
pub async fn get_shop_summary(
    db: &DatabaseConnection,
    today: NaiveDate,
) -> Result<ShopSummaryResponse, ShopError> {
    let raw = repository::get_totals(db).await?;
    let totals = totals_from(raw.total_profit, raw.total_investment, raw.total_expense);

    let days = trend_days(today, TREND_DAYS);
    let trend = match (days.first(), days.last()) {
        (Some(first), Some(last)) => {
            let date_from = first.format(DATE_FORMAT).to_string();
            let date_to = last.format(DATE_FORMAT).to_string();
            let by_day: HashMap<String, f64> =
                repository::get_profit_by_day(db, &date_from, &date_to)
                    .await?
                    .into_iter()
                    .map(|row| (row.date, row.profit))
                    .collect();
            fill_trend(&days, &by_day)
        }
        _ => Vec::new(),
    };

    Ok(ShopSummaryResponse {
        today: today.format(DATE_FORMAT).to_string(),
        totals,
        trend,
    })
}

/// Sum profit, investment and expense records
pub fn summarize(sales: &[Sale], investments: &[Investment], expenses: &[Expense]) -> ShopTotals {
    totals_from(
        sales.iter().map(|s| s.profit).sum(),
        investments.iter().map(|i| i.amount).sum(),
        expenses.iter().map(|e| e.amount).sum(),
    )
}

fn totals_from(total_profit: f64, total_investment: f64, total_expense: f64) -> ShopTotals {
    ShopTotals {
        total_profit,
        total_investment,
        total_expense,
        net_balance: total_profit - total_expense,
    }
}

/// Per-day profit for the `days` calendar days ending on `today`, oldest first
///
/// Sales are matched by exact date string; days without sales carry 0.
pub fn profit_trend(sales: &[Sale], today: NaiveDate, days: u32) -> Vec<DailyProfit> {
    let mut by_day: HashMap<String, f64> = HashMap::new();
    for sale in sales {
        *by_day.entry(sale.date.clone()).or_insert(0.0) += sale.profit;
    }
    fill_trend(&trend_days(today, days), &by_day)
}

/// Calendar days from `today - (days - 1)` up to `today`
pub fn trend_days(today: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (0..i64::from(days))
        .rev()
        .map(|offset| today - Duration::days(offset))
        .collect()
}

fn fill_trend(days: &[NaiveDate], by_day: &HashMap<String, f64>) -> Vec<DailyProfit> {
    days.iter()
        .map(|day| {
            let date = day.format(DATE_FORMAT).to_string();
            let profit = by_day.get(&date).copied().unwrap_or(0.0);
            DailyProfit { date, profit }
        })
        .collect()
}
