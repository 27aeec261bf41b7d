use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::error;
use super::AppState;
use db::repository::leads as lead_repo;
use crate::LeadsResponse;

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<LeadsResponse>, (StatusCode, Json<Value>)> {
    match lead_repo::fetch_all(&state.pool).await {
        Ok(fetched) => Ok(Json(LeadsResponse::from(fetched))),
        Err(e) => {
            error!("failed to read leads: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "failed to read leads" })),
            ))
        }
    }
}
