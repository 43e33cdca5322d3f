use std::future::Future;

use crate::domain::{
    chat::entities::ChatReply,
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        value_objects::{GenerateRecipeInput, ScanIngredientsInput},
    },
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        temperature: Option<f32>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Free-text answer backed by web search grounding
    fn generate_grounded(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<ChatReply, CoreError>> + Send;
}

/// Service trait for recipe generation and ingredient recognition
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn generate_recipe(
        &self,
        input: GenerateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn scan_ingredients(
        &self,
        input: ScanIngredientsInput,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}
