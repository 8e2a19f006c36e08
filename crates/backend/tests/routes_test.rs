use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use backend::routes::configure_routes;
use backend::shared::data::db::connect_in_memory;
use backend::shared::state::AppState;
use contracts::dashboards::d400_shop_summary::ShopSummaryResponse;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_sale::aggregate::Sale;
use contracts::domain::a004_expense::aggregate::Expense;
use http_body_util::BodyExt;
use std::path::Path;
use tower::ServiceExt;

async fn app() -> Router {
    let db = connect_in_memory().await.unwrap();
    configure_routes(AppState::new(db), Path::new("static"))
}

fn form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn get_json<T: serde::de::DeserializeOwned>(app: &Router, uri: &str) -> T {
    let response = app.clone().oneshot(get(uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    serde_json::from_str(&body_string(response).await).unwrap()
}

fn assert_redirects_home(response: &axum::response::Response) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn health_check() {
    let app = app().await;
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn full_bookkeeping_flow() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(form(
            "/add_product",
            "name=Green+Tea&company=Leafy&cost_price=2.5&sell_price=4&quantity=10",
        ))
        .await
        .unwrap();
    assert_redirects_home(&response);

    let products: Vec<Product> = get_json(&app, "/api/products").await;
    assert_eq!(products.len(), 1);
    let product_id = products[0].id;

    let response = app
        .clone()
        .oneshot(form(
            "/add_sale",
            &format!("product_id={}&quantity_sold=4", product_id),
        ))
        .await
        .unwrap();
    assert_redirects_home(&response);

    let response = app
        .clone()
        .oneshot(form(
            "/add_investment",
            &format!("product_id={}&amount=100&shop_name=Main+Street", product_id),
        ))
        .await
        .unwrap();
    assert_redirects_home(&response);

    let response = app
        .clone()
        .oneshot(form(
            "/add_expense",
            "desc=Electricity&amount=2.5&date=2024-01-15",
        ))
        .await
        .unwrap();
    assert_redirects_home(&response);

    let product: Product = get_json(&app, &format!("/api/products/{}", product_id)).await;
    assert_eq!(product.quantity, 6);

    let sales: Vec<Sale> = get_json(&app, "/api/sales").await;
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].profit, 6.0);
    assert_eq!(sales[0].product_name, "Green Tea");

    let expenses: Vec<Expense> = get_json(&app, "/api/expenses").await;
    assert_eq!(expenses[0].description, "Electricity");

    let summary: ShopSummaryResponse = get_json(&app, "/api/d400/shop_summary").await;
    assert_eq!(summary.totals.total_profit, 6.0);
    assert_eq!(summary.totals.total_investment, 100.0);
    assert_eq!(summary.totals.total_expense, 2.5);
    assert_eq!(summary.totals.net_balance, 3.5);
    assert_eq!(summary.trend.len(), 7);
    assert_eq!(summary.trend[6].date, summary.today);
    assert_eq!(summary.trend[6].profit, 6.0);

    let response = app.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Green Tea"));
    assert!(html.contains("Main Street"));
    assert!(html.contains("Electricity"));
    assert!(html.contains("3.50"));
    assert!(html.contains("100.00"));
}

#[tokio::test]
async fn overselling_is_rejected_with_plain_message() {
    let app = app().await;
    app.clone()
        .oneshot(form(
            "/add_product",
            "name=Soap&company=Acme&cost_price=1&sell_price=2&quantity=2",
        ))
        .await
        .unwrap();
    let products: Vec<Product> = get_json(&app, "/api/products").await;
    let product_id = products[0].id;

    let response = app
        .clone()
        .oneshot(form(
            "/add_sale",
            &format!("product_id={}&quantity_sold=3", product_id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_string(response).await,
        "Error: Not enough quantity available"
    );

    let product: Product = get_json(&app, &format!("/api/products/{}", product_id)).await;
    assert_eq!(product.quantity, 2);
    let sales: Vec<Sale> = get_json(&app, "/api/sales").await;
    assert!(sales.is_empty());
}

#[tokio::test]
async fn unknown_product_returns_not_found() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(form("/add_sale", "product_id=42&quantity_sold=1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(form(
            "/add_investment",
            "product_id=42&amount=10&shop_name=Main",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get("/api/products/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_forms_are_client_errors() {
    let app = app().await;

    // Нечисловая цена
    let response = app
        .clone()
        .oneshot(form(
            "/add_product",
            "name=Soap&company=Acme&cost_price=cheap&sell_price=2&quantity=1",
        ))
        .await
        .unwrap();
    assert!(response.status().is_client_error());

    // Нет поля date
    let response = app
        .clone()
        .oneshot(form("/add_expense", "desc=Rent&amount=10"))
        .await
        .unwrap();
    assert!(response.status().is_client_error());

    // Дата не в формате YYYY-MM-DD
    let response = app
        .clone()
        .oneshot(form("/add_expense", "desc=Rent&amount=10&date=yesterday"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let products: Vec<Product> = get_json(&app, "/api/products").await;
    assert!(products.is_empty());
    let expenses: Vec<Expense> = get_json(&app, "/api/expenses").await;
    assert!(expenses.is_empty());
}

#[tokio::test]
async fn empty_dashboard_renders() {
    let app = app().await;
    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Net Balance"));
    assert!(html.contains("No products yet."));
    assert!(html.contains("0.00"));
}
