//! Ingredient list handling shared by manual entry and image recognition.

/// Splits free-form pantry input on commas, pipes and newlines.
pub fn parse_ingredient_input(text: &str) -> Vec<String> {
    text.split([',', '|', '\n'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses the comma separated list returned by the vision model.
pub fn parse_detected_ingredients(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Order preserving union: existing entries keep their position, new ones are
/// appended once.
pub fn merge_ingredients(existing: &[String], incoming: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(existing.len() + incoming.len());
    for item in existing.iter().chain(incoming) {
        if !merged.contains(item) {
            merged.push(item.clone());
        }
    }
    merged
}
