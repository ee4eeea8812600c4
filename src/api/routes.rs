use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    players::{create_player, delete_player, get_player_detail, list_players, update_player},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/players", get(list_players).post(create_player))
        .route(
            "/api/players/:id",
            get(get_player_detail).put(update_player).delete(delete_player),
        )
        .with_state(state)
}
