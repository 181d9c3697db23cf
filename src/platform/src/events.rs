use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;
use metadata::events::Events as MDEvents;
use serde::Deserialize;
use serde::Serialize;

use crate::Context;
use crate::PlatformError;
use crate::Result;

pub struct Events {
    prov: Arc<MDEvents>,
}

impl Events {
    pub fn new(prov: Arc<MDEvents>) -> Self {
        Self { prov }
    }

    pub async fn create(&self, ctx: Context, req: CreateEventRequest) -> Result<Event> {
        let Some(host_id) = ctx.user_id else {
            return Err(PlatformError::Unauthorized("Unauthorized".to_string()));
        };

        validate(&req)?;

        let tags = req
            .tags
            .split(',')
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();

        let event = self
            .prov
            .create(metadata::events::CreateEventRequest {
                host_id,
                title: req.title,
                date: req.date,
                time: req.time,
                location: req.location,
                description: req.description,
                tags,
                image: req.image,
            })
            .map_err(|err| {
                tracing::error!("store failure: {:?}", err);
                PlatformError::Internal("Failed to create event".to_string())
            })?;

        Ok(event.into())
    }
}

fn validate(req: &CreateEventRequest) -> Result<()> {
    let checks = [
        (req.title.as_str(), "Event title is required"),
        (req.date.as_str(), "Event date is required"),
        (req.time.as_str(), "Event time is required"),
        (req.location.as_str(), "Event location is required"),
        (req.tags.as_str(), "Event tags are required"),
        (req.description.as_str(), "Event description is required"),
    ];
    for (value, message) in checks {
        if value.trim().is_empty() {
            return Err(PlatformError::BadRequest(message.to_string()));
        }
    }

    Ok(())
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub host_id: u64,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub attendees: u32,
}

impl Into<Event> for metadata::events::Event {
    fn into(self) -> Event {
        Event {
            id: self.id,
            created_at: self.created_at,
            host_id: self.host_id,
            title: self.title,
            date: self.date,
            time: self.time,
            location: self.location,
            description: self.description,
            tags: self.tags,
            image: self.image,
            attendees: self.attendees,
        }
    }
}

/// Tags arrive as the comma-delimited text the hosting form collects.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub tags: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}
