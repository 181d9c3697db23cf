use std::sync::Arc;

use axum::extract::Extension;
use axum::http::HeaderMap;
use axum::routing;
use axum::Router;
use bytes::Bytes;
use common::http::Json;
use serde::Serialize;

use crate::webhook::Webhooks;
use crate::PlatformError;
use crate::Result;

#[derive(Serialize)]
struct WebhookResponse {
    success: bool,
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .ok_or(PlatformError::InvalidWebhook)
}

// The body must stay raw: the signature covers the exact bytes on the wire.
async fn user_created(
    Extension(provider): Extension<Arc<Webhooks>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookResponse>> {
    let id = header_str(&headers, "svix-id")?;
    let timestamp = header_str(&headers, "svix-timestamp")?;
    let signatures = header_str(&headers, "svix-signature")?;

    provider.handle(id, timestamp, signatures, &body).await?;

    Ok(Json(WebhookResponse { success: true }))
}

pub fn attach_routes(router: Router) -> Router {
    router.nest(
        "/api/webhooks",
        Router::new().route("/user-created", routing::post(user_created)),
    )
}
