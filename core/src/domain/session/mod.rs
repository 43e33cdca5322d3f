//! Application session modelled as an explicit state record.
//!
//! This is the browser client's screen flow; the HTTP API is stateless and
//! never holds a session.
//!
//! Every user action or collaborator response becomes a [`SessionEvent`] and
//! [`transition`] produces the next [`SessionState`]. Nothing else mutates the
//! session.

use serde::Serialize;

use crate::domain::{
    cook::CookSession,
    ingredient::{merge_ingredients, parse_ingredient_input},
    recipe::{
        entities::Recipe,
        value_objects::{CookMood, UserProfile},
    },
    saved_recipe::entities::SavedRecipes,
    share::recipe_from_fragment,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppMode {
    #[default]
    Landing,
    Onboarding,
    Dashboard,
    RecipeView,
    Profile,
    CookMode,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub mode: AppMode,
    pub profile: Option<UserProfile>,
    pub ingredients: Vec<String>,
    pub mood: CookMood,
    pub selected_recipe: Option<Recipe>,
    pub saved: SavedRecipes,
    pub cook: Option<CookSession>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    GetStarted,
    ProfileCompleted(UserProfile),
    IngredientsTyped(String),
    IngredientsDetected(Vec<String>),
    IngredientRemoved(String),
    MoodSelected(CookMood),
    RecipeGenerated(Recipe),
    SavedRecipesLoaded(Vec<Recipe>),
    ToggleSave(Recipe),
    Unsave(String),
    OpenSaved,
    OpenRecipe(Recipe),
    StartCooking,
    NextStep,
    PreviousStep,
    ExitCooking,
    BackToDashboard,
    GoHome,
    /// Page loaded or its fragment changed
    FragmentChanged(String),
}

impl SessionState {
    pub fn can_generate(&self) -> bool {
        self.profile.is_some() && !self.ingredients.is_empty()
    }

    pub fn is_selected_saved(&self) -> bool {
        self.selected_recipe
            .as_ref()
            .is_some_and(|r| self.saved.contains(&r.title))
    }

    /// Context blob handed to the chat assistant.
    pub fn chat_context(&self) -> serde_json::Value {
        match &self.selected_recipe {
            Some(recipe) => serde_json::to_value(recipe).unwrap_or_default(),
            None => serde_json::json!({
                "profile": self.profile,
                "analyzedIngredients": self.ingredients,
                "currentMood": self.mood,
            }),
        }
    }

    fn show_recipe(self, recipe: Recipe) -> Self {
        Self {
            mode: AppMode::RecipeView,
            selected_recipe: Some(recipe),
            cook: None,
            ..self
        }
    }
}

pub fn transition(state: SessionState, event: SessionEvent) -> SessionState {
    match event {
        SessionEvent::GetStarted => SessionState {
            mode: AppMode::Onboarding,
            ..state
        },
        SessionEvent::ProfileCompleted(profile) => SessionState {
            mode: AppMode::Dashboard,
            profile: Some(profile),
            ..state
        },
        SessionEvent::IngredientsTyped(text) => {
            let typed = parse_ingredient_input(&text);
            SessionState {
                ingredients: merge_ingredients(&state.ingredients, &typed),
                ..state
            }
        }
        SessionEvent::IngredientsDetected(detected) => SessionState {
            ingredients: merge_ingredients(&state.ingredients, &detected),
            ..state
        },
        SessionEvent::IngredientRemoved(item) => {
            let ingredients = state
                .ingredients
                .iter()
                .filter(|i| **i != item)
                .cloned()
                .collect();
            SessionState {
                ingredients,
                ..state
            }
        }
        SessionEvent::MoodSelected(mood) => SessionState { mood, ..state },
        SessionEvent::RecipeGenerated(recipe) | SessionEvent::OpenRecipe(recipe) => {
            state.show_recipe(recipe)
        }
        SessionEvent::SavedRecipesLoaded(recipes) => SessionState {
            saved: SavedRecipes::from_recipes(recipes),
            ..state
        },
        SessionEvent::ToggleSave(recipe) => {
            let mut saved = state.saved.clone();
            saved.toggle(recipe);
            SessionState { saved, ..state }
        }
        SessionEvent::Unsave(title) => {
            let mut saved = state.saved.clone();
            saved.remove(&title);
            SessionState { saved, ..state }
        }
        SessionEvent::OpenSaved if state.profile.is_some() => SessionState {
            mode: AppMode::Profile,
            cook: None,
            ..state
        },
        SessionEvent::OpenSaved => state,
        SessionEvent::StartCooking => {
            let cook = state
                .selected_recipe
                .as_ref()
                .and_then(|recipe| CookSession::start(recipe).ok());
            match cook {
                Some(cook) => SessionState {
                    mode: AppMode::CookMode,
                    cook: Some(cook),
                    ..state
                },
                None => state,
            }
        }
        SessionEvent::NextStep | SessionEvent::PreviousStep => {
            let Some(mut cook) = state.cook.clone() else {
                return state;
            };
            if event == SessionEvent::NextStep {
                cook.next();
            } else {
                cook.previous();
            }
            SessionState {
                cook: Some(cook),
                ..state
            }
        }
        SessionEvent::ExitCooking => {
            let mode = if state.selected_recipe.is_some() {
                AppMode::RecipeView
            } else {
                AppMode::Dashboard
            };
            SessionState {
                mode,
                cook: None,
                ..state
            }
        }
        SessionEvent::BackToDashboard => SessionState {
            mode: AppMode::Dashboard,
            cook: None,
            ..state
        },
        SessionEvent::GoHome => SessionState {
            mode: AppMode::Landing,
            cook: None,
            ..state
        },
        SessionEvent::FragmentChanged(location) => match recipe_from_fragment(&location) {
            None => state,
            Some(Ok(recipe)) => state.show_recipe(recipe),
            Some(Err(_)) => SessionState {
                mode: AppMode::Landing,
                selected_recipe: None,
                cook: None,
                ..state
            },
        },
    }
}
