use serde::{Deserialize, Serialize};

/// Number of calendar days shown in the profit trend (today included)
pub const TREND_DAYS: u32 = 7;

/// Aggregate totals over all recorded history
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShopTotals {
    pub total_profit: f64,
    pub total_investment: f64,
    pub total_expense: f64,
    /// total_profit - total_expense
    pub net_balance: f64,
}

/// Profit of all sales recorded on one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyProfit {
    /// Day in format "YYYY-MM-DD"
    pub date: String,
    pub profit: f64,
}

/// Response for the shop summary dashboard (GET /api/d400/shop_summary)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopSummaryResponse {
    /// Day the trend ends on, format "YYYY-MM-DD"
    pub today: String,
    pub totals: ShopTotals,
    /// Oldest day first, exactly TREND_DAYS entries
    pub trend: Vec<DailyProfit>,
}
