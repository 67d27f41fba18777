pub mod handlers;
pub mod requests;
pub mod responses;

use axum::routing::get;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/passengers",
            get(handlers::list_passengers).post(handlers::create_passenger),
        )
        .route(
            "/api/passengers/{id}",
            get(handlers::get_passenger)
                .put(handlers::update_passenger)
                .delete(handlers::delete_passenger),
        )
}
