use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::parse_detected_ingredients,
    recipe::{
        entities::Recipe,
        ports::{LLMClient, RecipeService},
        prompts::{INGREDIENT_SCAN_PROMPT, INGREDIENT_SCAN_TEMPERATURE, build_recipe_prompt},
        schema::get_recipe_schema,
        value_objects::{GenerateRecipeInput, ScanIngredientsInput},
    },
};

impl<SR, LLM, SP> RecipeService for Service<SR, LLM, SP>
where
    SR: Send + Sync,
    LLM: LLMClient,
    SP: Send + Sync,
{
    async fn generate_recipe(&self, input: GenerateRecipeInput) -> Result<Recipe, CoreError> {
        let ingredients: Vec<String> = input
            .ingredients
            .iter()
            .map(|i| i.trim())
            .filter(|i| !i.is_empty())
            .map(str::to_string)
            .collect();

        if ingredients.is_empty() {
            return Err(CoreError::Invalid(
                "at least one ingredient is required".to_string(),
            ));
        }

        let prompt = build_recipe_prompt(&ingredients, &input.profile, input.mood);

        let raw_response = self
            .llm_client
            .generate_with_text(prompt, get_recipe_schema())
            .await?;

        let recipe: Recipe = serde_json::from_str(&raw_response).map_err(|e| {
            tracing::error!("Invalid recipe format: {}", e);
            CoreError::ExternalServiceError(format!("Invalid recipe format: {}", e))
        })?;

        // The generator occasionally returns an unusable record; surface it as a
        // failed call so the caller can offer a retry.
        recipe.validate().map_err(|e| {
            tracing::error!("Generated recipe rejected: {}", e);
            CoreError::ExternalServiceError(format!("Generated recipe rejected: {}", e))
        })?;

        tracing::info!(
            title = %recipe.title,
            mood = ?input.mood,
            steps = recipe.instructions.len(),
            "Recipe generated"
        );

        Ok(recipe)
    }

    async fn scan_ingredients(&self, input: ScanIngredientsInput) -> Result<Vec<String>, CoreError> {
        if input.image_data.is_empty() {
            return Err(CoreError::Invalid("image must not be empty".to_string()));
        }

        let raw_response = self
            .llm_client
            .generate_with_image(
                INGREDIENT_SCAN_PROMPT.to_string(),
                input.image_data,
                input.mime_type,
                Some(INGREDIENT_SCAN_TEMPERATURE),
            )
            .await?;

        let ingredients = parse_detected_ingredients(&raw_response);
        tracing::debug!(count = ingredients.len(), "Ingredients detected from image");

        Ok(ingredients)
    }
}
