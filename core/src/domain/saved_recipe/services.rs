use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recipe::entities::Recipe,
    saved_recipe::{
        entities::SaveOutcome,
        ports::{SavedRecipeRepository, SavedRecipeService},
        value_objects::validate_device_id,
    },
};

impl<SR, LLM, SP> SavedRecipeService for Service<SR, LLM, SP>
where
    SR: SavedRecipeRepository,
    LLM: Send + Sync,
    SP: Send + Sync,
{
    async fn list_saved_recipes(&self, device_id: String) -> Result<Vec<Recipe>, CoreError> {
        validate_device_id(&device_id)?;
        self.saved_recipe_repository.list(device_id).await
    }

    async fn save_recipe(&self, device_id: String, recipe: Recipe) -> Result<SaveOutcome, CoreError> {
        validate_device_id(&device_id)?;
        recipe.validate()?;

        let inserted = self.saved_recipe_repository.insert(device_id, recipe).await?;

        Ok(if inserted {
            SaveOutcome::Saved
        } else {
            SaveOutcome::AlreadySaved
        })
    }

    async fn remove_saved_recipe(&self, device_id: String, title: String) -> Result<(), CoreError> {
        validate_device_id(&device_id)?;

        let removed = self.saved_recipe_repository.remove(device_id, title).await?;
        if !removed {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }

    async fn toggle_saved_recipe(
        &self,
        device_id: String,
        recipe: Recipe,
    ) -> Result<SaveOutcome, CoreError> {
        validate_device_id(&device_id)?;
        recipe.validate()?;

        self.saved_recipe_repository.toggle(device_id, recipe).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        recipe::{entities::fixtures::lemon_herb_pasta, ports::MockLLMClient},
        saved_recipe::ports::MockSavedRecipeRepository,
        speech::ports::MockSpeechSynthesizer,
    };

    fn service(
        repository: MockSavedRecipeRepository,
    ) -> Service<MockSavedRecipeRepository, MockLLMClient, MockSpeechSynthesizer> {
        Service::new(repository, MockLLMClient::new(), MockSpeechSynthesizer::new())
    }

    #[tokio::test]
    async fn test_save_reports_existing_title() {
        let mut repository = MockSavedRecipeRepository::new();
        repository
            .expect_insert()
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(false) }));

        let outcome = service(repository)
            .save_recipe("device-1".to_string(), lemon_herb_pasta())
            .await
            .unwrap();

        assert_eq!(outcome, SaveOutcome::AlreadySaved);
    }

    #[tokio::test]
    async fn test_toggle_is_a_single_repository_call() {
        let mut repository = MockSavedRecipeRepository::new();
        repository
            .expect_toggle()
            .withf(|device, recipe| device == "device-1" && recipe.title == "Lemon Herb Pasta")
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(SaveOutcome::Removed) }));
        repository.expect_remove().never();
        repository.expect_insert().never();

        let outcome = service(repository)
            .toggle_saved_recipe("device-1".to_string(), lemon_herb_pasta())
            .await
            .unwrap();

        assert_eq!(outcome, SaveOutcome::Removed);
    }

    #[tokio::test]
    async fn test_toggle_rejects_invalid_recipe() {
        let mut repository = MockSavedRecipeRepository::new();
        repository.expect_toggle().never();

        let mut recipe = lemon_herb_pasta();
        recipe.title = "  ".to_string();

        let result = service(repository)
            .toggle_saved_recipe("device-1".to_string(), recipe)
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_remove_missing_title_is_not_found() {
        let mut repository = MockSavedRecipeRepository::new();
        repository
            .expect_remove()
            .returning(|_, _| Box::pin(async { Ok(false) }));

        let result = service(repository)
            .remove_saved_recipe("device-1".to_string(), "Unknown".to_string())
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_rejects_invalid_device_id() {
        let mut repository = MockSavedRecipeRepository::new();
        repository.expect_list().never();

        let result = service(repository)
            .list_saved_recipes("../../tmp".to_string())
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }
}
