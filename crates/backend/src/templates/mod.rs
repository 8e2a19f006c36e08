//! Askama templates
//!
//! View models for the HTML dashboard. Money is preformatted here so the
//! template only prints strings.

use askama::Template;
use contracts::dashboards::d400_shop_summary::DailyProfit;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_sale::aggregate::Sale;
use contracts::domain::a003_investment::aggregate::Investment;
use contracts::domain::a004_expense::aggregate::Expense;
use contracts::domain::common::AggregateRoot;

use crate::dashboards::d400_shop_summary::service::ShopDashboard;
use crate::shared::format::format_money;

/// Dashboard page (GET /)
#[derive(Template)]
#[template(path = "index.html")]
pub struct DashboardTemplate {
    pub today: String,
    pub total_profit: String,
    pub total_investment: String,
    pub total_expense: String,
    pub net_balance: String,
    pub net_negative: bool,
    pub trend: Vec<TrendBar>,
    pub products_title: &'static str,
    pub sales_title: &'static str,
    pub investments_title: &'static str,
    pub expenses_title: &'static str,
    pub product_element: &'static str,
    pub sale_element: &'static str,
    pub investment_element: &'static str,
    pub expense_element: &'static str,
    pub products: Vec<ProductRow>,
    pub sales: Vec<SaleRow>,
    pub investments: Vec<InvestmentRow>,
    pub expenses: Vec<ExpenseRow>,
}

/// One column of the 7-day profit chart
pub struct TrendBar {
    pub date: String,
    pub profit: String,
    /// Bar height relative to the largest absolute day in the window, 0..=100
    pub height: u32,
    pub negative: bool,
}

pub struct ProductRow {
    pub id: i32,
    pub label: String,
    pub name: String,
    pub company: String,
    pub cost_price: String,
    pub sell_price: String,
    pub quantity: i32,
    pub in_stock: bool,
}

pub struct SaleRow {
    pub date: String,
    pub product_name: String,
    pub company: String,
    pub quantity_sold: i32,
    pub profit: String,
}

pub struct InvestmentRow {
    pub product_name: String,
    pub company: String,
    pub amount: String,
    pub shop_name: String,
}

pub struct ExpenseRow {
    pub date: String,
    pub description: String,
    pub amount: String,
}

impl DashboardTemplate {
    pub fn new(dashboard: ShopDashboard, today: String) -> Self {
        let totals = dashboard.totals;
        Self {
            today,
            total_profit: format_money(totals.total_profit),
            total_investment: format_money(totals.total_investment),
            total_expense: format_money(totals.total_expense),
            net_balance: format_money(totals.net_balance),
            net_negative: totals.net_balance < 0.0,
            trend: trend_bars(&dashboard.trend),
            products_title: Product::list_name(),
            sales_title: Sale::list_name(),
            investments_title: Investment::list_name(),
            expenses_title: Expense::list_name(),
            product_element: Product::element_name(),
            sale_element: Sale::element_name(),
            investment_element: Investment::element_name(),
            expense_element: Expense::element_name(),
            products: dashboard.products.iter().map(ProductRow::from).collect(),
            // Последние продажи и расходы сверху
            sales: dashboard.sales.iter().rev().map(SaleRow::from).collect(),
            investments: dashboard.investments.iter().map(InvestmentRow::from).collect(),
            expenses: dashboard.expenses.iter().rev().map(ExpenseRow::from).collect(),
        }
    }
}

fn trend_bars(trend: &[DailyProfit]) -> Vec<TrendBar> {
    let peak = trend.iter().map(|d| d.profit.abs()).fold(0.0_f64, f64::max);
    trend
        .iter()
        .map(|d| {
            let height = if peak > 0.0 {
                ((d.profit.abs() / peak) * 100.0).round() as u32
            } else {
                0
            };
            TrendBar {
                date: d.date.clone(),
                profit: format_money(d.profit),
                height,
                negative: d.profit < 0.0,
            }
        })
        .collect()
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            label: p.label(),
            name: p.name.clone(),
            company: p.company.clone(),
            cost_price: format_money(p.cost_price),
            sell_price: format_money(p.sell_price),
            quantity: p.quantity,
            in_stock: p.quantity > 0,
        }
    }
}

impl From<&Sale> for SaleRow {
    fn from(s: &Sale) -> Self {
        Self {
            date: s.date.clone(),
            product_name: s.product_name.clone(),
            company: s.company.clone(),
            quantity_sold: s.quantity_sold,
            profit: format_money(s.profit),
        }
    }
}

impl From<&Investment> for InvestmentRow {
    fn from(i: &Investment) -> Self {
        Self {
            product_name: i.product_name.clone(),
            company: i.company.clone(),
            amount: format_money(i.amount),
            shop_name: i.shop_name.clone(),
        }
    }
}

impl From<&Expense> for ExpenseRow {
    fn from(e: &Expense) -> Self {
        Self {
            date: e.date.clone(),
            description: e.description.clone(),
            amount: format_money(e.amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_bars_scale_to_peak() {
        let trend = vec![
            DailyProfit {
                date: "2024-01-01".into(),
                profit: 0.0,
            },
            DailyProfit {
                date: "2024-01-02".into(),
                profit: 50.0,
            },
            DailyProfit {
                date: "2024-01-03".into(),
                profit: -100.0,
            },
        ];
        let bars = trend_bars(&trend);
        assert_eq!(bars[0].height, 0);
        assert_eq!(bars[1].height, 50);
        assert_eq!(bars[2].height, 100);
        assert!(bars[2].negative);
        assert_eq!(bars[2].profit, "-100.00");
    }

    #[test]
    fn test_trend_bars_all_zero() {
        let trend = vec![DailyProfit {
            date: "2024-01-01".into(),
            profit: 0.0,
        }];
        assert_eq!(trend_bars(&trend)[0].height, 0);
    }

    #[test]
    fn test_section_and_form_titles_come_from_aggregates() {
        let dashboard = ShopDashboard {
            products: Vec::new(),
            sales: Vec::new(),
            investments: Vec::new(),
            expenses: Vec::new(),
            totals: Default::default(),
            trend: Vec::new(),
        };
        let html = DashboardTemplate::new(dashboard, "2024-01-03".into())
            .render()
            .unwrap();
        for heading in [
            "<h2>Add Product</h2>",
            "<h2>Add Sale</h2>",
            "<h2>Add Investment</h2>",
            "<h2>Add Expense</h2>",
            "<h2>Products</h2>",
            "<h2>Expenses</h2>",
        ] {
            assert!(html.contains(heading), "missing {heading}");
        }
    }
}
