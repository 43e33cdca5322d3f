use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recipe::entities::Recipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SaveOutcome {
    Saved,
    AlreadySaved,
    Removed,
}

/// Flat collection of saved recipes keyed by title.
///
/// Titles are unique within the collection; insertion order is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedRecipes {
    recipes: Vec<Recipe>,
}

impl SavedRecipes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from persisted data, keeping the first entry of
    /// any duplicated title.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        let mut saved = Self::new();
        for recipe in recipes {
            saved.insert(recipe);
        }
        saved
    }

    pub fn contains(&self, title: &str) -> bool {
        self.recipes.iter().any(|r| r.has_title(title))
    }

    pub fn insert(&mut self, recipe: Recipe) -> bool {
        if self.contains(&recipe.title) {
            return false;
        }
        self.recipes.push(recipe);
        true
    }

    pub fn remove(&mut self, title: &str) -> bool {
        let before = self.recipes.len();
        self.recipes.retain(|r| !r.has_title(title));
        self.recipes.len() != before
    }

    pub fn toggle(&mut self, recipe: Recipe) -> SaveOutcome {
        if self.remove(&recipe.title) {
            SaveOutcome::Removed
        } else {
            self.recipes.push(recipe);
            SaveOutcome::Saved
        }
    }

    pub fn get(&self, title: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.has_title(title))
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn into_recipes(self) -> Vec<Recipe> {
        self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
