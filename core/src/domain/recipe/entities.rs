use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const MIN_SUSTAINABILITY_SCORE: u8 = 1;
pub const MAX_SUSTAINABILITY_SCORE: u8 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Natural key used by the saved-recipe store
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<Instruction>,
    pub nutrition: NutritionInfo,
    pub sustainability_factor: String,
    pub sustainability_score: u8,
    pub prep_time: String,
    pub cook_time: String,
    pub mood_vibe: MoodVibe,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_ingredients: Option<Vec<AlternativeIngredient>>,
}

/// A single cooking step.
///
/// Older generator revisions produced bare strings while newer ones produce
/// an object listing the ingredients the step consumes. Both are accepted and
/// each keeps its own shape when serialized again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Instruction {
    Plain(String),
    Detailed(InstructionStep),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstructionStep {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients_used: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionInfo {
    pub calories: f64,
    pub protein: String,
    pub carbs: String,
    pub fats: String,
    pub fiber: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoodVibe {
    pub ambient_sound: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AlternativeIngredient {
    pub original: String,
    pub substitute: String,
    pub reason: String,
}

impl Instruction {
    pub fn text(&self) -> &str {
        match self {
            Instruction::Plain(text) => text,
            Instruction::Detailed(step) => &step.text,
        }
    }

    pub fn ingredients_used(&self) -> &[String] {
        match self {
            Instruction::Plain(_) => &[],
            Instruction::Detailed(step) => step.ingredients_used.as_deref().unwrap_or_default(),
        }
    }
}

impl Recipe {
    /// Checks the invariants every recipe crossing the process boundary must hold.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Invalid("recipe title must not be empty".to_string()));
        }

        if !(MIN_SUSTAINABILITY_SCORE..=MAX_SUSTAINABILITY_SCORE)
            .contains(&self.sustainability_score)
        {
            return Err(CoreError::Invalid(format!(
                "sustainability score {} is outside {}..={}",
                self.sustainability_score, MIN_SUSTAINABILITY_SCORE, MAX_SUSTAINABILITY_SCORE
            )));
        }

        Ok(())
    }

    pub fn has_title(&self, title: &str) -> bool {
        self.title == title
    }
}
