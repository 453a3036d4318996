use axum::{Json, extract::State};

use crate::pkg::server::state::AppState;

pub async fn home(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(vec![state.service_name.to_string()])
}
