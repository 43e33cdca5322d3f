use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatReply {
    pub text: String,
    pub sources: Vec<ChatSource>,
}

/// Web page the assistant grounded its answer on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatSource {
    pub uri: String,
    pub title: String,
}
