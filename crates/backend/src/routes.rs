use axum::{middleware, routing::get, Router};
use contracts::shared::navigation::shell_paths;
use tower_http::services::{ServeDir, ServeFile};

use crate::shared::config::Config;
use crate::shared::request_log::request_logger;

/// Конфигурация всех роутов приложения
///
/// Every SPA path answers with the shell page so deep links and reloads land
/// in the client router; everything else is a static asset.
pub fn configure_routes(config: &Config) -> Router {
    let index = config.index_path();

    let router = shell_paths()
        .into_iter()
        .fold(Router::new(), |router, path| {
            router.route_service(path, ServeFile::new(&index))
        });

    router
        .route("/health", get(|| async { "ok" }))
        .fallback_service(ServeDir::new(config.dist_path()))
        .layer(middleware::from_fn(request_logger))
}
