use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;
use common::types::OptionalProperty;
use metadata::error::MetadataError;
use metadata::events::Events as MDEvents;
use metadata::users::Users as MDUsers;
use serde::Deserialize;
use serde::Serialize;

use crate::Context;
use crate::PlatformError;
use crate::Result;

pub struct Users {
    prov: Arc<MDUsers>,
    events: Arc<MDEvents>,
}

fn backend_error(err: MetadataError, message: &str) -> PlatformError {
    tracing::error!("store failure: {:?}", err);
    PlatformError::Internal(message.to_string())
}

impl Users {
    pub fn new(prov: Arc<MDUsers>, events: Arc<MDEvents>) -> Self {
        Self { prov, events }
    }

    pub async fn get_profile(&self, user_id: u64) -> Result<UserProfile> {
        let user = self.prov.get_by_id(user_id).map_err(|err| match err {
            MetadataError::NotFound(_) => PlatformError::NotFound("User not found".to_string()),
            other => backend_error(other, "Failed to fetch user"),
        })?;

        let hosted = self
            .events
            .list_by_host(user.id)
            .map_err(|err| backend_error(err, "Failed to fetch user"))?;

        Ok(UserProfile {
            id: user.id,
            name: user.name,
            bio: user.bio,
            avatar_url: user.avatar_url,
            city: user.city,
            interests: user.interests,
            hosted_events: hosted.data.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn get_current(&self, ctx: Context) -> Result<Option<CurrentUser>> {
        let Some(user_id) = ctx.user_id else {
            return Ok(None);
        };

        match self.prov.get_by_id(user_id) {
            Ok(user) => Ok(Some(CurrentUser {
                id: user.id,
                name: user.name,
                email: user.email,
                avatar_url: user.avatar_url,
            })),
            Err(MetadataError::NotFound(_)) => Ok(None),
            Err(err) => Err(backend_error(err, "Failed to fetch user")),
        }
    }

    pub async fn update_profile(&self, ctx: Context, req: UpdateProfileRequest) -> Result<User> {
        // a valid session without a provisioned record behaves like any
        // other failed update
        let user_id = ctx
            .user_id
            .ok_or_else(|| PlatformError::Internal("Failed to update profile".to_string()))?;

        let md_req = metadata::users::UpdateUserRequest {
            bio: req.bio,
            city: req.city,
            interests: req.interests,
        };

        let user = self
            .prov
            .update(user_id, md_req)
            .map_err(|err| backend_error(err, "Failed to update profile"))?;

        Ok(user.into())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub identity_id: String,
    pub email: String,
    pub username: Option<String>,
    pub name: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub city: Option<String>,
    pub interests: Option<String>,
}

impl Into<User> for metadata::users::User {
    fn into(self) -> User {
        User {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            identity_id: self.identity_id,
            email: self.email,
            username: self.username,
            name: self.name,
            avatar_url: self.avatar_url,
            bio: self.bio,
            city: self.city,
            interests: self.interests,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: u64,
    pub name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub city: Option<String>,
    pub interests: Option<String>,
    pub hosted_events: Vec<HostedEventSummary>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HostedEventSummary {
    pub id: u64,
    pub title: String,
    pub date: String,
    pub location: String,
}

impl Into<HostedEventSummary> for metadata::events::Event {
    fn into(self) -> HostedEventSummary {
        HostedEventSummary {
            id: self.id,
            title: self.title,
            date: self.date,
            location: self.location,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub bio: OptionalProperty<Option<String>>,
    #[serde(default)]
    pub city: OptionalProperty<Option<String>>,
    #[serde(default)]
    pub interests: OptionalProperty<Option<String>>,
}
