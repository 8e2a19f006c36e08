use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use axum::body::HttpBody as _;
use chrono::{Local, NaiveTime};

use crate::shared::format::format_number;

/// Middleware для логирования HTTP запросов
///
/// Одна строка на запрос:
/// - Время ответа (локальное, HH:MM:SS)
/// - Длительность (ms)
/// - Размер ответа (форматированный, если известен заранее)
/// - Статус код
/// - Метод и путь
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status();
    // Размер берём из size_hint, чтобы не буферизовать тело (статика, HTML)
    let size = response
        .body()
        .size_hint()
        .exact()
        .map(|n| format_number(n as usize))
        .unwrap_or_else(|| "-".to_string());

    let line = request_line(
        Local::now().time(),
        duration.as_millis(),
        &size,
        status.as_u16(),
        method.as_str(),
        &path,
    );
    if status.is_server_error() {
        tracing::error!("{}", line);
    } else {
        tracing::info!("{}", line);
    }

    response
}

fn request_line(
    time: NaiveTime,
    millis: u128,
    size: &str,
    status: u16,
    method: &str,
    path: &str,
) -> String {
    format!(
        "{} | {:>5}ms | {:>12} | {} {:>6} {}",
        time.format("%H:%M:%S"),
        millis,
        size,
        status,
        method,
        path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_line_starts_with_time() {
        let time = NaiveTime::from_hms_opt(14, 5, 9).unwrap();
        let line = request_line(time, 12, "1.234", 303, "POST", "/add_sale");
        assert_eq!(
            line,
            "14:05:09 |    12ms |        1.234 | 303   POST /add_sale"
        );
    }
}
