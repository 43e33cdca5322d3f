use crate::domain::{
    chat::{entities::ChatReply, ports::ChatService, value_objects::ChatInput},
    common::{entities::app_errors::CoreError, services::Service},
    recipe::{ports::LLMClient, prompts::build_chat_prompt},
};

impl<SR, LLM, SP> ChatService for Service<SR, LLM, SP>
where
    SR: Send + Sync,
    LLM: LLMClient,
    SP: Send + Sync,
{
    async fn chat(&self, input: ChatInput) -> Result<ChatReply, CoreError> {
        let message = input.message.trim();
        if message.is_empty() {
            return Err(CoreError::Invalid("message must not be empty".to_string()));
        }

        let prompt = build_chat_prompt(message, &input.context);
        let reply = self.llm_client.generate_grounded(prompt).await?;

        tracing::debug!(sources = reply.sources.len(), "Chat reply received");

        Ok(reply)
    }
}
