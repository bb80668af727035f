use axum::Router;

pub mod health;
pub mod items;
pub mod users;

/// Domain routes, each with its state already applied.
///
/// `create_router` adds docs and middleware on top.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest("/items", items::router(state))
        .nest("/users", users::router(state))
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied and can be merged with the stateless app router
/// from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
