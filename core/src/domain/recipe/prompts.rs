use crate::domain::recipe::value_objects::{CookMood, UserProfile};

pub const INGREDIENT_SCAN_PROMPT: &str =
    "Identify all food ingredients visible in this image. Return them as a comma-separated list.";

pub const INGREDIENT_SCAN_TEMPERATURE: f32 = 0.4;

pub fn build_recipe_prompt(ingredients: &[String], profile: &UserProfile, mood: CookMood) -> String {
    let allergies = if profile.allergies.is_empty() {
        "None".to_string()
    } else {
        profile.allergies.join(", ")
    };

    format!(
        "Based on these ingredients: {ingredients}.
User Profile:
- Origin/Location: {location}
- Diet: {diet}
- Allergies: {allergies}
- Health: {health}

COOK MOOD: {mood}

Generate a healthy, sustainable recipe.
IMPORTANT: Incorporate culinary influences or regional specialties associated with the user's location ({location}) if it fits the ingredients.
Ensure it respects all dietary restrictions.
Include a mood-specific vibe with an ambient sound suggestion (BUT NO MUSIC SUGGESTIONS).
Provide alternative ingredient swaps for key components.
For every instruction step, list the ingredients that step uses.

The response must be a JSON object matching this schema.",
        ingredients = ingredients.join(", "),
        location = profile.location,
        diet = profile.diet.as_str(),
        allergies = allergies,
        health = profile.health_notes(),
        mood = mood.prompt_directive(),
    )
}

pub fn build_chat_prompt(message: &str, context: &serde_json::Value) -> String {
    format!(
        "You are an expert chef and nutritionist for the app \"Fork and Framework\".
Help the user with their culinary questions.
Context: {context}
User message: {message}"
    )
}

pub fn build_speech_prompt(text: &str) -> String {
    format!("Chef voice: {text}")
}
