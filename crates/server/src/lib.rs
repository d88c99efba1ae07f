pub mod doc;
pub mod dtos;
pub mod error;
pub mod routes;
pub mod store;
pub mod utils;

use axum::{Router, routing::get};
use routes::{health, resource, root};
use store::Store;

/// Environment variable holding the listen address
pub const BIND_ADDR_VAR: &str = "HOTELS_BIND_ADDR";

/// Listen address used when [`BIND_ADDR_VAR`] is unset
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Builds the `/v1` API router over `store`
///
/// Collection and item paths are accepted with or without a trailing slash.
pub fn app(store: Store) -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route(
            "/v1/{collection}",
            get(resource::list).post(resource::create),
        )
        .route(
            "/v1/{collection}/",
            get(resource::list).post(resource::create),
        )
        .route(
            "/v1/{collection}/{id}",
            get(resource::fetch)
                .put(resource::update)
                .delete(resource::remove),
        )
        .route(
            "/v1/{collection}/{id}/",
            get(resource::fetch)
                .put(resource::update)
                .delete(resource::remove),
        )
        .with_state(store)
}
