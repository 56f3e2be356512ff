use axum::{
    Router,
    routing::{get, patch, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, add_request, decide_booking, delete_item, delete_user, get_all_requests,
    get_all_users, get_booking, get_item_by_id, get_items_by_user, get_request_by_id,
    get_requests, get_user_by_id, list_bookings_for_booker, list_bookings_for_owner,
    save_booking, save_comment, save_item, save_user, search_items, update_item, update_user,
};

/// Creates the API router with all marketplace endpoints
///
/// User endpoints:
/// - POST /users, GET /users, GET /users/:id, PATCH /users/:id, DELETE /users/:id
///
/// Item endpoints:
/// - POST /items, GET /items, GET /items/search, GET /items/:id,
///   PATCH /items/:id, DELETE /items/:id, POST /items/:id/comment
///
/// Booking endpoints:
/// - POST /bookings, GET /bookings, GET /bookings/owner,
///   GET /bookings/:id, PATCH /bookings/:id
///
/// Request endpoints:
/// - POST /requests, GET /requests, GET /requests/all, GET /requests/:id
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Users
        .route("/users", post(save_user).get(get_all_users))
        .route(
            "/users/:user_id",
            get(get_user_by_id).patch(update_user).delete(delete_user),
        )
        // Items
        .route("/items", post(save_item).get(get_items_by_user))
        .route("/items/search", get(search_items))
        .route(
            "/items/:item_id",
            get(get_item_by_id).patch(update_item).delete(delete_item),
        )
        .route("/items/:item_id/comment", post(save_comment))
        // Bookings
        .route("/bookings", post(save_booking).get(list_bookings_for_booker))
        .route("/bookings/owner", get(list_bookings_for_owner))
        .route(
            "/bookings/:booking_id",
            patch(decide_booking).get(get_booking),
        )
        // Requests
        .route("/requests", post(add_request).get(get_requests))
        .route("/requests/all", get(get_all_requests))
        .route("/requests/:request_id", get(get_request_by_id))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
