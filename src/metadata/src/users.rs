use std::sync::Arc;

use bincode::deserialize;
use bincode::serialize;
use chrono::DateTime;
use chrono::Utc;
use common::types::OptionalProperty;
use rocksdb::Transaction;
use rocksdb::TransactionDB;
use serde::Deserialize;
use serde::Serialize;

use crate::error::MetadataError;
use crate::index::check_insert_constraints;
use crate::index::get_index;
use crate::index::insert_index;
use crate::index::next_seq;
use crate::list_data;
use crate::make_data_value_key;
use crate::make_id_seq_key;
use crate::make_index_key;
use crate::metadata::ListResponse;
use crate::Result;

const NAMESPACE: &[u8] = b"users";
const IDX_IDENTITY_ID: &[u8] = b"identity_id";
const IDX_EMAIL: &[u8] = b"email";

fn index_keys(identity_id: &str, email: &str) -> Vec<Option<Vec<u8>>> {
    [index_identity_id_key(identity_id), index_email_key(email)].to_vec()
}

fn index_identity_id_key(identity_id: &str) -> Option<Vec<u8>> {
    Some(make_index_key(NAMESPACE, IDX_IDENTITY_ID, identity_id).to_vec())
}

fn index_email_key(email: &str) -> Option<Vec<u8>> {
    Some(make_index_key(NAMESPACE, IDX_EMAIL, email).to_vec())
}

pub struct Users {
    db: Arc<TransactionDB>,
}

impl Users {
    pub fn new(db: Arc<TransactionDB>) -> Self {
        Users { db }
    }

    fn get_by_id_(&self, tx: &Transaction<TransactionDB>, id: u64) -> Result<User> {
        let key = make_data_value_key(NAMESPACE, id);
        match tx.get(key)? {
            None => Err(MetadataError::NotFound(format!("user {id} not found"))),
            Some(value) => Ok(deserialize(&value)?),
        }
    }

    pub fn create(&self, req: CreateUserRequest) -> Result<User> {
        let idx_keys = index_keys(&req.identity_id, &req.email);

        let tx = self.db.transaction();
        check_insert_constraints(&tx, idx_keys.as_ref())?;
        let created_at = Utc::now();
        let id = next_seq(&tx, make_id_seq_key(NAMESPACE))?;

        let user = req.into_user(id, created_at);

        let data = serialize(&user)?;
        tx.put(make_data_value_key(NAMESPACE, user.id), &data)?;

        insert_index(&tx, idx_keys.as_ref(), user.id)?;
        tx.commit()?;
        Ok(user)
    }

    pub fn get_by_id(&self, id: u64) -> Result<User> {
        let tx = self.db.transaction();
        self.get_by_id_(&tx, id)
    }

    pub fn get_by_identity_id(&self, identity_id: &str) -> Result<User> {
        let tx = self.db.transaction();
        let id = get_index(
            &tx,
            make_index_key(NAMESPACE, IDX_IDENTITY_ID, identity_id),
            format!("user with identity \"{identity_id}\" not found"),
        )?;
        self.get_by_id_(&tx, id)
    }

    pub fn list(&self) -> Result<ListResponse<User>> {
        let tx = self.db.transaction();
        list_data(&tx, NAMESPACE)
    }

    // Only the self-service profile fields are updatable. Identity and email
    // stay owned by the external identity provider, so no index maintenance
    // happens here.
    pub fn update(&self, user_id: u64, req: UpdateUserRequest) -> Result<User> {
        let tx = self.db.transaction();

        let mut user = self.get_by_id_(&tx, user_id)?;

        user.updated_at = Some(Utc::now());
        if let OptionalProperty::Some(bio) = req.bio {
            user.bio = bio;
        }
        if let OptionalProperty::Some(city) = req.city {
            user.city = city;
        }
        if let OptionalProperty::Some(interests) = req.interests {
            user.interests = interests;
        }

        let data = serialize(&user)?;
        tx.put(make_data_value_key(NAMESPACE, user.id), &data)?;
        tx.commit()?;
        Ok(user)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
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

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub identity_id: String,
    pub email: String,
    pub username: Option<String>,
    pub name: String,
    pub avatar_url: Option<String>,
}

impl CreateUserRequest {
    pub fn into_user(self, id: u64, created_at: DateTime<Utc>) -> User {
        User {
            id,
            created_at,
            updated_at: None,
            identity_id: self.identity_id,
            email: self.email,
            username: self.username,
            name: self.name,
            avatar_url: self.avatar_url,
            bio: None,
            city: None,
            interests: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct UpdateUserRequest {
    pub bio: OptionalProperty<Option<String>>,
    pub city: OptionalProperty<Option<String>>,
    pub interests: OptionalProperty<Option<String>>,
}
