use std::sync::Arc;

use bincode::deserialize;
use bincode::serialize;
use chrono::DateTime;
use chrono::Utc;
use rocksdb::Transaction;
use rocksdb::TransactionDB;
use serde::Deserialize;
use serde::Serialize;

use crate::error::MetadataError;
use crate::index::next_seq;
use crate::list_data;
use crate::make_data_value_key;
use crate::make_id_seq_key;
use crate::metadata::ListResponse;
use crate::metadata::ResponseMetadata;
use crate::Result;

const NAMESPACE: &[u8] = b"events";

pub struct Events {
    db: Arc<TransactionDB>,
}

impl Events {
    pub fn new(db: Arc<TransactionDB>) -> Self {
        Events { db }
    }

    fn get_by_id_(&self, tx: &Transaction<TransactionDB>, id: u64) -> Result<Event> {
        let key = make_data_value_key(NAMESPACE, id);
        match tx.get(key)? {
            None => Err(MetadataError::NotFound(format!("event {id} not found"))),
            Some(value) => Ok(deserialize(&value)?),
        }
    }

    pub fn create(&self, req: CreateEventRequest) -> Result<Event> {
        let tx = self.db.transaction();
        let created_at = Utc::now();
        let id = next_seq(&tx, make_id_seq_key(NAMESPACE))?;

        let event = req.into_event(id, created_at);

        let data = serialize(&event)?;
        tx.put(make_data_value_key(NAMESPACE, event.id), &data)?;
        tx.commit()?;
        Ok(event)
    }

    pub fn get_by_id(&self, id: u64) -> Result<Event> {
        let tx = self.db.transaction();
        self.get_by_id_(&tx, id)
    }

    pub fn list(&self) -> Result<ListResponse<Event>> {
        let tx = self.db.transaction();
        list_data(&tx, NAMESPACE)
    }

    pub fn list_by_host(&self, host_id: u64) -> Result<ListResponse<Event>> {
        let tx = self.db.transaction();
        let all: ListResponse<Event> = list_data(&tx, NAMESPACE)?;
        let mut data = all
            .data
            .into_iter()
            .filter(|event| event.host_id == host_id)
            .collect::<Vec<_>>();
        data.sort_by_key(|event| event.id);

        Ok(ListResponse {
            data,
            meta: ResponseMetadata { next: None },
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
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

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateEventRequest {
    pub host_id: u64,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image: Option<String>,
}

impl CreateEventRequest {
    pub fn into_event(self, id: u64, created_at: DateTime<Utc>) -> Event {
        Event {
            id,
            created_at,
            host_id: self.host_id,
            title: self.title,
            date: self.date,
            time: self.time,
            location: self.location,
            description: self.description,
            tags: self.tags,
            image: self.image,
            attendees: 0,
        }
    }
}
