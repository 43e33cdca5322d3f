use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tokio::sync::Mutex;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::Recipe,
    saved_recipe::{
        entities::{SaveOutcome, SavedRecipes},
        ports::SavedRecipeRepository,
    },
};

/// Stores each device's saved recipes as a JSON array in
/// `<data_dir>/<device_id>.json`.
#[derive(Debug)]
pub struct FileSavedRecipeRepository {
    data_dir: PathBuf,
    lock: Mutex<()>,
}

impl FileSavedRecipeRepository {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, device_id: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", device_id))
    }

    async fn load(&self, device_id: &str) -> Result<SavedRecipes, CoreError> {
        let path = self.path_for(device_id);

        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SavedRecipes::new()),
            Err(e) => {
                tracing::error!(path = %path.display(), "Failed to read saved recipes: {}", e);
                return Err(CoreError::InternalServerError);
            }
        };

        match serde_json::from_slice::<Vec<Recipe>>(&raw) {
            Ok(recipes) => Ok(SavedRecipes::from_recipes(recipes)),
            Err(e) => {
                tracing::error!(path = %path.display(), "Unreadable saved recipes: {}", e);
                self.quarantine(&path).await?;
                Ok(SavedRecipes::new())
            }
        }
    }

    /// Moves an unreadable collection to `<device_id>.json.corrupt[.N]` so the
    /// next write never replaces the only copy.
    async fn quarantine(&self, path: &Path) -> Result<(), CoreError> {
        let mut target = path.with_extension("json.corrupt");
        let mut attempt = 0u32;
        loop {
            match tokio::fs::try_exists(&target).await {
                Ok(false) => break,
                Ok(true) => {
                    attempt += 1;
                    target = path.with_extension(format!("json.corrupt.{}", attempt));
                }
                Err(e) => {
                    tracing::error!(path = %target.display(), "Failed to inspect data dir: {}", e);
                    return Err(CoreError::InternalServerError);
                }
            }
        }

        tokio::fs::rename(path, &target).await.map_err(|e| {
            tracing::error!(path = %path.display(), "Failed to set aside unreadable saved recipes: {}", e);
            CoreError::InternalServerError
        })?;

        tracing::warn!(moved_to = %target.display(), "Unreadable saved recipes set aside");
        Ok(())
    }

    async fn store(&self, device_id: &str, saved: &SavedRecipes) -> Result<(), CoreError> {
        let path = self.path_for(device_id);
        let tmp = path.with_extension("json.tmp");

        let raw = serde_json::to_vec(saved).map_err(|e| {
            tracing::error!("Failed to serialize saved recipes: {}", e);
            CoreError::InternalServerError
        })?;

        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| {
                tracing::error!(dir = %self.data_dir.display(), "Failed to create data dir: {}", e);
                CoreError::InternalServerError
            })?;

        tokio::fs::write(&tmp, raw).await.map_err(|e| {
            tracing::error!(path = %tmp.display(), "Failed to write saved recipes: {}", e);
            CoreError::InternalServerError
        })?;

        tokio::fs::rename(&tmp, &path).await.map_err(|e| {
            tracing::error!(path = %path.display(), "Failed to replace saved recipes: {}", e);
            CoreError::InternalServerError
        })
    }
}

impl SavedRecipeRepository for FileSavedRecipeRepository {
    async fn list(&self, device_id: String) -> Result<Vec<Recipe>, CoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.load(&device_id).await?.into_recipes())
    }

    async fn insert(&self, device_id: String, recipe: Recipe) -> Result<bool, CoreError> {
        let _guard = self.lock.lock().await;

        let mut saved = self.load(&device_id).await?;
        let title = recipe.title.clone();
        if !saved.insert(recipe) {
            return Ok(false);
        }

        self.store(&device_id, &saved).await?;
        tracing::info!(%device_id, %title, "Recipe saved");

        Ok(true)
    }

    async fn remove(&self, device_id: String, title: String) -> Result<bool, CoreError> {
        let _guard = self.lock.lock().await;

        let mut saved = self.load(&device_id).await?;
        if !saved.remove(&title) {
            return Ok(false);
        }

        self.store(&device_id, &saved).await?;
        tracing::info!(%device_id, %title, "Recipe removed from saved");

        Ok(true)
    }

    async fn toggle(&self, device_id: String, recipe: Recipe) -> Result<SaveOutcome, CoreError> {
        let _guard = self.lock.lock().await;

        let mut saved = self.load(&device_id).await?;
        let title = recipe.title.clone();
        let outcome = saved.toggle(recipe);

        self.store(&device_id, &saved).await?;
        tracing::info!(%device_id, %title, ?outcome, "Saved recipe toggled");

        Ok(outcome)
    }
}
