use serde_json::json;

/// Returns the JSON schema the generator must follow when producing a recipe
pub fn get_recipe_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string" },
            "description": { "type": "string" },
            "ingredients": {
                "type": "array",
                "items": { "type": "string" }
            },
            "instructions": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "text": { "type": "string" },
                        "ingredientsUsed": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    },
                    "required": ["text", "ingredientsUsed"]
                }
            },
            "nutrition": {
                "type": "object",
                "properties": {
                    "calories": { "type": "number" },
                    "protein": { "type": "string" },
                    "carbs": { "type": "string" },
                    "fats": { "type": "string" },
                    "fiber": { "type": "string" }
                },
                "required": ["calories", "protein", "carbs", "fats", "fiber"]
            },
            "sustainabilityFactor": { "type": "string" },
            "sustainabilityScore": { "type": "integer" },
            "prepTime": { "type": "string" },
            "cookTime": { "type": "string" },
            "moodVibe": {
                "type": "object",
                "properties": {
                    "ambientSound": {
                        "type": "string",
                        "description": "Background ambient sound like 'Rainy jazz cafe' or 'Bustling Italian market'"
                    }
                },
                "required": ["ambientSound"]
            },
            "alternativeIngredients": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "original": { "type": "string" },
                        "substitute": { "type": "string" },
                        "reason": { "type": "string" }
                    },
                    "required": ["original", "substitute", "reason"]
                }
            }
        },
        "required": [
            "title", "description", "ingredients", "instructions", "nutrition",
            "sustainabilityFactor", "sustainabilityScore", "prepTime", "cookTime",
            "moodVibe", "alternativeIngredients"
        ]
    })
}
