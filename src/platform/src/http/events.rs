use std::sync::Arc;

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::routing;
use axum::Router;
use common::http::Json;

use crate::events::CreateEventRequest;
use crate::events::Event;
use crate::events::Events;
use crate::Context;
use crate::Result;

async fn create(
    ctx: Context,
    Extension(provider): Extension<Arc<Events>>,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>)> {
    Ok((
        StatusCode::CREATED,
        Json(provider.create(ctx, request).await?),
    ))
}

pub fn attach_routes(router: Router) -> Router {
    router.nest(
        "/api/events",
        Router::new().route("/", routing::post(create)),
    )
}
