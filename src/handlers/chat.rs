use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;

use crate::state::AppState;

const SESSION_HEADER: &str = "x-session-id";
const DEFAULT_SESSION_ID: &str = "unknown";

// POST /chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> String {
    let session_id = headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_SESSION_ID);

    tracing::debug!(session_id, "incoming chat message");

    state.engine.handle_message(session_id, &body).await
}
