use axum::{
    extract::{Query, State},
    response::Json,
};
use rand::{thread_rng, RngCore};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::api_key;
use crate::error::AppError;
use crate::store::{ApiKeyPatch, KeyStore, NewApiKey};

/// Product namespace tag prefixed to every generated credential.
const KEY_PREFIX: &str = "KeyDeck-";

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateKeyRequest {
    name: String,
    limit: Option<i64>,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct UpdateUsageRequest {
    #[schema(value_type = String)]
    id: Uuid,
    usage: i64,
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct DeleteKeyQuery {
    /// Id of the key to delete.
    #[param(value_type = String)]
    id: Uuid,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ApiKeyResponse {
    #[schema(value_type = String)]
    id: Uuid,
    name: String,
    key: String,
    monthly_limit: Option<i64>,
    usage: i64,
    created_at: chrono::NaiveDateTime,
}

impl From<api_key::Model> for ApiKeyResponse {
    fn from(model: api_key::Model) -> Self {
        ApiKeyResponse {
            id: model.id,
            name: model.name,
            key: model.key,
            monthly_limit: model.monthly_limit,
            usage: model.usage,
            created_at: model.created_at,
        }
    }
}

// The key is handed out as a bearer credential, so the bytes must come from
// a cryptographically secure source.
fn generate_key() -> String {
    let mut key_bytes = [0u8; 32];
    thread_rng().fill_bytes(&mut key_bytes);
    format!("{KEY_PREFIX}{}", hex::encode(key_bytes))
}

#[utoipa::path(
    get,
    path = "/keys",
    responses(
        (status = 200, description = "All API keys, newest first", body = [ApiKeyResponse]),
        (status = 500, description = "Database error")
    ),
    tag = "API Keys"
)]
pub async fn list_keys(
    State(store): State<KeyStore>,
) -> Result<Json<Vec<ApiKeyResponse>>, AppError> {
    let keys = store
        .list_all()
        .await
        .map_err(|e| AppError::new("Database error", e))?;

    let responses: Vec<ApiKeyResponse> = keys.into_iter().map(ApiKeyResponse::from).collect();
    Ok(Json(responses))
}

#[utoipa::path(
    post,
    path = "/keys",
    request_body = CreateKeyRequest,
    responses(
        (status = 200, description = "API key created successfully", body = ApiKeyResponse),
        (status = 500, description = "Failed to create API key")
    ),
    tag = "API Keys"
)]
pub async fn create_key(
    State(store): State<KeyStore>,
    Json(payload): Json<CreateKeyRequest>,
) -> Result<Json<ApiKeyResponse>, AppError> {
    tracing::debug!(name = %payload.name, "Create API key request");

    let created = store
        .insert(NewApiKey {
            name: payload.name,
            key: generate_key(),
            monthly_limit: payload.limit,
            usage: 0,
        })
        .await
        .map_err(|e| AppError::new("Failed to create API key", e))?;

    Ok(Json(ApiKeyResponse::from(created)))
}

#[utoipa::path(
    delete,
    path = "/keys",
    params(DeleteKeyQuery),
    responses(
        (status = 200, description = "API key deleted (or was already gone)"),
        (status = 500, description = "Failed to delete API key")
    ),
    tag = "API Keys"
)]
pub async fn delete_key(
    State(store): State<KeyStore>,
    Query(query): Query<DeleteKeyQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    tracing::debug!(id = %query.id, "Delete API key request");

    store
        .delete(query.id)
        .await
        .map_err(|e| AppError::new("Failed to delete API key", e))?;

    Ok(Json(serde_json::json!({
        "success": true
    })))
}

#[utoipa::path(
    patch,
    path = "/keys",
    request_body = UpdateUsageRequest,
    responses(
        (status = 200, description = "Usage counter updated", body = ApiKeyResponse),
        (status = 500, description = "Failed to update API key usage")
    ),
    tag = "API Keys"
)]
pub async fn update_key_usage(
    State(store): State<KeyStore>,
    Json(payload): Json<UpdateUsageRequest>,
) -> Result<Json<ApiKeyResponse>, AppError> {
    tracing::debug!(id = %payload.id, usage = payload.usage, "Update API key usage request");

    let updated = store
        .update(
            payload.id,
            ApiKeyPatch {
                usage: Some(payload.usage),
                ..Default::default()
            },
        )
        .await
        .map_err(|e| AppError::new("Failed to update API key usage", e))?;

    Ok(Json(ApiKeyResponse::from(updated)))
}
