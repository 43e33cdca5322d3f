use forkframe_core::domain::recipe::entities::Recipe;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Runs the recipe's own invariants as a `validator` rule.
pub fn validate_recipe(recipe: &Recipe) -> Result<(), ValidationError> {
    recipe.validate().map_err(|e| {
        let mut error = ValidationError::new("invalid_recipe");
        error.message = Some(e.to_string().into());
        error
    })
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveRecipeValidator {
    #[validate(custom(function = "validate_recipe"))]
    pub recipe: Recipe,
}
