pub mod config;
pub mod entities;
pub mod error;
pub mod routes;
pub mod store;

pub use config::Config;
pub use routes::create_routes;
pub use store::{ApiKeyPatch, KeyStore, NewApiKey, StoreError};
