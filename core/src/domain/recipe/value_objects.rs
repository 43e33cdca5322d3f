use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CookMood {
    #[default]
    Quick,
    Gourmet,
    Comfort,
    Light,
}

impl CookMood {
    pub const ALL: [CookMood; 4] = [
        CookMood::Quick,
        CookMood::Gourmet,
        CookMood::Comfort,
        CookMood::Light,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CookMood::Quick => "Quick & Easy",
            CookMood::Gourmet => "Chef Special",
            CookMood::Comfort => "Hearty Soul",
            CookMood::Light => "Fresh & Lean",
        }
    }

    /// Fixed directive handed to the recipe generator for this mood
    pub fn prompt_directive(&self) -> &'static str {
        match self {
            CookMood::Quick => {
                "Make it extremely 'quick and easy' with minimal steps and common pantry staples."
            }
            CookMood::Gourmet => {
                "Create a 'gourmet adventure' with complex techniques, layered flavors, and restaurant-quality presentation."
            }
            CookMood::Comfort => {
                "Focus on 'comfort food' - hearty, warm, and soul-satisfying dishes."
            }
            CookMood::Light => {
                "Ensure it is 'healthy and light' - fresh, nutrient-dense, and lower in calories/heavy fats."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Diet {
    Vegetarian,
    Vegan,
    #[default]
    NonVegetarian,
}

impl Diet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Diet::Vegetarian => "vegetarian",
            Diet::Vegan => "vegan",
            Diet::NonVegetarian => "non-vegetarian",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub diet: Diet,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub is_diabetic: bool,
    #[serde(default)]
    pub is_lactose_intolerant: bool,
    #[serde(default)]
    pub location: String,
}

impl UserProfile {
    /// Adds an allergy, ignoring blanks and entries already present.
    pub fn add_allergy(&mut self, allergy: &str) -> bool {
        let allergy = allergy.trim();
        if allergy.is_empty() || self.allergies.iter().any(|a| a == allergy) {
            return false;
        }
        self.allergies.push(allergy.to_string());
        true
    }

    pub fn remove_allergy(&mut self, allergy: &str) {
        self.allergies.retain(|a| a != allergy);
    }

    pub fn health_notes(&self) -> String {
        let mut notes = Vec::new();
        if self.is_diabetic {
            notes.push("Diabetic");
        }
        if self.is_lactose_intolerant {
            notes.push("Lactose Intolerant");
        }
        if notes.is_empty() {
            "None".to_string()
        } else {
            notes.join(", ")
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerateRecipeInput {
    pub ingredients: Vec<String>,
    pub profile: UserProfile,
    pub mood: CookMood,
}

#[derive(Debug, Clone)]
pub struct ScanIngredientsInput {
    pub image_data: Vec<u8>,
    pub mime_type: String,
}
