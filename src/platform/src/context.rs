use std::sync::Arc;

use axum::async_trait;
use axum::extract::Extension;
use axum::http::request::Parts;
use axum_core::extract::FromRequestParts;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use metadata::error::MetadataError;

use crate::auth;
use crate::auth::token::parse_session_token;
use crate::error::AuthError;
use crate::PlatformError;

/// Per-request identity, resolved from the bearer token the external
/// identity provider issued. `user_id` is `None` when the token is valid
/// but provisioning hasn't created a local record yet.
#[derive(Default, Clone)]
pub struct Context {
    pub identity_id: String,
    pub user_id: Option<u64>,
}

#[async_trait]
impl<S> FromRequestParts<S> for Context
where S: Send + Sync
{
    type Rejection = PlatformError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> core::result::Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_err| AuthError::CantParseBearerHeader)?;

        let Extension(auth_cfg) = Extension::<auth::Config>::from_request_parts(parts, state)
            .await
            .map_err(|err| PlatformError::Internal(err.to_string()))?;

        let claims = parse_session_token(bearer.token(), &auth_cfg.session_token_key)
            .map_err(|err| {
                tracing::debug!("session token rejected: {:?}", err);
                AuthError::CantParseSessionToken
            })?;

        let Extension(md_users) =
            Extension::<Arc<metadata::users::Users>>::from_request_parts(parts, state)
                .await
                .map_err(|err| PlatformError::Internal(err.to_string()))?;

        let user_id = match md_users.get_by_identity_id(&claims.sub) {
            Ok(user) => Some(user.id),
            Err(MetadataError::NotFound(_)) => None,
            Err(err) => return Err(err.into()),
        };

        Ok(Context {
            identity_id: claims.sub,
            user_id,
        })
    }
}
