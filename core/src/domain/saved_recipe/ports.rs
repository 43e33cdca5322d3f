use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::Recipe,
    saved_recipe::entities::SaveOutcome,
};

/// Per-device persistence of saved recipes. Every call is an atomic
/// read-modify-write of that device's collection.
#[cfg_attr(test, mockall::automock)]
pub trait SavedRecipeRepository: Send + Sync {
    fn list(
        &self,
        device_id: String,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    /// Returns `false` when a recipe with the same title is already stored
    fn insert(
        &self,
        device_id: String,
        recipe: Recipe,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Returns `false` when no recipe with that title was stored
    fn remove(
        &self,
        device_id: String,
        title: String,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Removes the recipe when its title is stored, saves it otherwise
    fn toggle(
        &self,
        device_id: String,
        recipe: Recipe,
    ) -> impl Future<Output = Result<SaveOutcome, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SavedRecipeService: Send + Sync {
    fn list_saved_recipes(
        &self,
        device_id: String,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn save_recipe(
        &self,
        device_id: String,
        recipe: Recipe,
    ) -> impl Future<Output = Result<SaveOutcome, CoreError>> + Send;

    fn remove_saved_recipe(
        &self,
        device_id: String,
        title: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn toggle_saved_recipe(
        &self,
        device_id: String,
        recipe: Recipe,
    ) -> impl Future<Output = Result<SaveOutcome, CoreError>> + Send;
}
