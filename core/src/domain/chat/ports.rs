use std::future::Future;

use crate::domain::{
    chat::{entities::ChatReply, value_objects::ChatInput},
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait ChatService: Send + Sync {
    fn chat(&self, input: ChatInput) -> impl Future<Output = Result<ChatReply, CoreError>> + Send;
}
