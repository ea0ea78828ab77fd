use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_athlete, get_athlete, list_athletes, update_athlete};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_athletes))
        .route("/", post(create_athlete))
        .route("/:id", get(get_athlete).patch(update_athlete))
}
