use crate::{
    domain::common::{ForkframeConfig, services::Service},
    infrastructure::{llm::GeminiLLMClient, saved_recipe::FileSavedRecipeRepository},
};

pub type ForkframeService =
    Service<FileSavedRecipeRepository, GeminiLLMClient, GeminiLLMClient>;

pub async fn create_service(config: ForkframeConfig) -> Result<ForkframeService, anyhow::Error> {
    tokio::fs::create_dir_all(&config.storage.data_dir).await?;

    let saved_recipe_repository = FileSavedRecipeRepository::new(config.storage.data_dir);
    let gemini = GeminiLLMClient::new(config.llm);

    tracing::info!(
        data_dir = %saved_recipe_repository.data_dir().display(),
        "Forkframe service initialized"
    );

    Ok(Service::new(saved_recipe_repository, gemini.clone(), gemini))
}
