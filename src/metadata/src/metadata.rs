use std::sync::Arc;

use rocksdb::TransactionDB;
use serde::Deserialize;
use serde::Serialize;

use crate::events;
use crate::users;
use crate::Result;

pub struct MetadataProvider {
    pub users: Arc<users::Users>,
    pub events: Arc<events::Events>,
}

impl MetadataProvider {
    pub fn try_new(db: Arc<TransactionDB>) -> Result<Self> {
        Ok(MetadataProvider {
            users: Arc::new(users::Users::new(db.clone())),
            events: Arc::new(events::Events::new(db)),
        })
    }
}

#[derive(Serialize, Deserialize)]
pub struct ResponseMetadata {
    pub next: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub meta: ResponseMetadata,
}
