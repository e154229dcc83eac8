//! Chat handlers.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use grace_core::persona;
use tracing::{debug, info_span, warn, Instrument};
use uuid::Uuid;

use crate::http::responses::{ChatRequest, ChatResponse};
use crate::state::AppState;

/// POST /api/chat - Reply to a message given the conversation so far.
///
/// Responds 400 only when the body has no usable message. Provider
/// failures are reported inside a 200 response.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let request_id = Uuid::new_v4();

    async move {
        let req = match payload {
            Ok(Json(req)) => req,
            Err(rejection) => {
                warn!(error = %rejection, "Invalid JSON in chat request");
                return invalid_message();
            }
        };

        let Some(message) = req.message_text() else {
            warn!("Chat request without a usable message");
            return invalid_message();
        };
        debug!(message = %message, history_turns = req.history.len(), "Received chat request");

        let reply = state.chat.reply(&message, &req.history).await;
        let body = ChatResponse::from_reply(reply);
        debug!(response = %body.response, "Generated response");

        (StatusCode::OK, Json(body)).into_response()
    }
    .instrument(info_span!("chat", %request_id))
    .await
}

/// GET /api/intro - Grace's opening line for a new conversation.
pub async fn intro() -> impl IntoResponse {
    Json(ChatResponse::new(persona::INTRO))
}

fn invalid_message() -> Response {
    (StatusCode::BAD_REQUEST, Json(ChatResponse::invalid_message())).into_response()
}
