#[derive(Debug, Clone)]
pub struct ChatInput {
    pub message: String,
    /// Current recipe or session snapshot, passed through verbatim
    pub context: serde_json::Value,
}
