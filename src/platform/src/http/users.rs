use std::sync::Arc;

use axum::extract::Extension;
use axum::extract::Path;
use axum::routing;
use axum::Router;
use common::http::Json;

use crate::users::CurrentUser;
use crate::users::UpdateProfileRequest;
use crate::users::User;
use crate::users::UserProfile;
use crate::users::Users;
use crate::Context;
use crate::Result;

async fn get_by_id(
    Extension(provider): Extension<Arc<Users>>,
    Path(user_id): Path<u64>,
) -> Result<Json<UserProfile>> {
    Ok(Json(provider.get_profile(user_id).await?))
}

async fn get_current(
    ctx: Context,
    Extension(provider): Extension<Arc<Users>>,
) -> Result<Json<Option<CurrentUser>>> {
    Ok(Json(provider.get_current(ctx).await?))
}

async fn update_profile(
    ctx: Context,
    Extension(provider): Extension<Arc<Users>>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<User>> {
    Ok(Json(provider.update_profile(ctx, request).await?))
}

pub fn attach_routes(router: Router) -> Router {
    router.nest(
        "/api/users",
        Router::new()
            .route("/me", routing::get(get_current))
            .route("/update", routing::put(update_profile))
            .route("/:user_id", routing::get(get_by_id)),
    )
}
