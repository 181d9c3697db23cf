pub mod events;
pub mod users;
pub mod webhooks;

use std::sync::Arc;

use axum::middleware;
use axum::Extension;
use axum::Router;
use common::config::Config;
use common::http::print_request_response;
use metadata::MetadataProvider;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

use crate::PlatformProvider;

pub fn attach_routes(
    mut router: Router,
    md: &Arc<MetadataProvider>,
    platform: &Arc<PlatformProvider>,
    cfg: Config,
) -> Router {
    router = users::attach_routes(router);
    router = events::attach_routes(router);
    router = webhooks::attach_routes(router);
    if let Some(ui_path) = &cfg.data.ui_path {
        let serve_dir = ServeDir::new(ui_path.to_owned())
            .not_found_service(ServeFile::new(ui_path.join("index.html")));
        router = router.fallback_service(serve_dir)
    }

    router = router
        .layer(Extension(md.users.clone()))
        .layer(Extension(platform.users.clone()))
        .layer(Extension(platform.events.clone()))
        .layer(Extension(platform.webhooks.clone()))
        .layer(Extension(platform.auth.clone()));

    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(print_request_response))
}
