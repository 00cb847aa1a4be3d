use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Location handlers
        .route(
            "/api/location",
            get(handlers::a001_location::list_all).post(handlers::a001_location::upsert),
        )
        .route(
            "/api/location/:id",
            get(handlers::a001_location::get_by_id).delete(handlers::a001_location::delete),
        )
        .route(
            "/api/location/testdata",
            post(handlers::a001_location::insert_test_data),
        )
        .route(
            "/api/location/:id/rooms",
            get(handlers::a002_room::list_by_location),
        )
        // A002 Room handlers
        .route(
            "/api/room",
            get(handlers::a002_room::list_all).post(handlers::a002_room::upsert),
        )
        .route(
            "/api/room/:id",
            get(handlers::a002_room::get_by_id).delete(handlers::a002_room::delete),
        )
}
