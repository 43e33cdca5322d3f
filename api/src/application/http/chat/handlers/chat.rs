use axum::extract::State;
use forkframe_core::domain::chat::{
    entities::ChatReply, ports::ChatService, value_objects::ChatInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    chat::validators::ChatValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ChatResponse {
    pub data: ChatReply,
}

#[utoipa::path(
    post,
    path = "",
    tag = "chat",
    summary = "Ask the cooking assistant",
    description = "Answers a question about the current recipe or ingredients, with the web sources the answer was grounded on.",
    responses(
        (status = 200, body = ChatResponse),
        (status = 400, description = "Empty message"),
        (status = 502, description = "Assistant unavailable")
    ),
    request_body = ChatValidator
)]
pub async fn chat(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ChatValidator>,
) -> Result<Response<ChatResponse>, ApiError> {
    let reply = state
        .service
        .chat(ChatInput {
            message: payload.message,
            context: payload.context,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ChatResponse { data: reply }))
}
