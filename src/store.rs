use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set,
};
use thiserror::Error;
use uuid::Uuid;

use crate::entities::api_key;

/// Failure surfaced by the key store. `NotFound` is only produced by
/// [`KeyStore::update`]; deletes treat a missing record as a no-op.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Caller-supplied fields for a new record. The store assigns `id` and
/// `created_at` itself.
#[derive(Debug, Clone)]
pub struct NewApiKey {
    pub name: String,
    pub key: String,
    pub monthly_limit: Option<i64>,
    pub usage: i64,
}

/// Partial update. Absent fields are left untouched. `id`, `key` and
/// `created_at` are immutable once a record exists and cannot be patched.
#[derive(Debug, Clone, Default)]
pub struct ApiKeyPatch {
    pub name: Option<String>,
    pub monthly_limit: Option<i64>,
    pub usage: Option<i64>,
}

/// Accessor for the `api_keys` table.
#[derive(Clone)]
pub struct KeyStore {
    db: DatabaseConnection,
}

impl KeyStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All records, newest first.
    pub async fn list_all(&self) -> Result<Vec<api_key::Model>, StoreError> {
        let keys = api_key::Entity::find()
            .order_by_desc(api_key::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(keys)
    }

    pub async fn insert(&self, new_key: NewApiKey) -> Result<api_key::Model, StoreError> {
        let record = api_key::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(new_key.name),
            key: Set(new_key.key),
            monthly_limit: Set(new_key.monthly_limit),
            usage: Set(new_key.usage),
            created_at: Set(Utc::now().naive_utc()),
        };

        Ok(record.insert(&self.db).await?)
    }

    pub async fn update(&self, id: Uuid, patch: ApiKeyPatch) -> Result<api_key::Model, StoreError> {
        let key = api_key::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::NotFound)?;

        let mut active_key = key.into_active_model();

        if let Some(name) = patch.name {
            active_key.name = Set(name);
        }
        if let Some(limit) = patch.monthly_limit {
            active_key.monthly_limit = Set(Some(limit));
        }
        if let Some(usage) = patch.usage {
            active_key.usage = Set(usage);
        }

        Ok(active_key.update(&self.db).await?)
    }

    /// Deleting an id with no matching record is a successful no-op.
    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        api_key::Entity::delete_by_id(id).exec(&self.db).await?;

        Ok(())
    }
}
