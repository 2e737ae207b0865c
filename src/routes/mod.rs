mod home;
mod keys;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::store::KeyStore;

// Define the OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // General endpoints
        home::root,
        // API key management endpoints
        keys::list_keys,
        keys::create_key,
        keys::delete_key,
        keys::update_key_usage,
    ),
    components(
        schemas(
            keys::ApiKeyResponse,
            keys::CreateKeyRequest,
            keys::UpdateUsageRequest,
        )
    ),
    tags(
        (name = "General", description = "General API information"),
        (name = "API Keys", description = "API key management endpoints for the dashboard")
    ),
    info(
        title = "KeyDeck API",
        version = "0.1.0",
        description = "A Rust/Axum backend for the KeyDeck dashboard: create, list, and manage API keys",
    )
)]
struct ApiDoc;

pub fn create_routes(store: KeyStore) -> Router {
    // Swagger UI (stateless)
    let swagger_router: Router = SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into();

    let app_routes = Router::new()
        .route("/", get(home::root))
        .route(
            "/keys",
            get(keys::list_keys)
                .post(keys::create_key)
                .delete(keys::delete_key)
                .patch(keys::update_key_usage),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store);

    // Merge Swagger UI (which has no state) with the rest
    Router::new()
        .merge(swagger_router)
        .merge(app_routes)
}
