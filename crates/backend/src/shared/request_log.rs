use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Простой middleware для логирования запросов
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed = start.elapsed().as_millis();
    if status.is_success() || status.is_redirection() {
        tracing::info!("{} {} {} {}ms", status.as_u16(), method, path, elapsed);
    } else {
        tracing::warn!("{} {} {} {}ms", status.as_u16(), method, path, elapsed);
    }
    response
}
