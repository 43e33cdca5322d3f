use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig, general_purpose},
};

use crate::domain::{
    recipe::entities::Recipe,
    share::errors::{DecodeFailure, EncodingError},
};

const LENIENT_PADDING: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT_PADDING);

const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT_PADDING);

/// Serializes a recipe into the payload carried after `#recipe=`.
///
/// The payload is the JSON form of the recipe, as UTF-8, in the standard
/// padded base64 alphabet. This matches links produced by earlier web
/// clients byte for byte.
pub fn encode_recipe(recipe: &Recipe) -> Result<String, EncodingError> {
    // JSON has no representation for NaN or infinities; serde_json would
    // silently write `null` and the link would never decode again.
    if !recipe.nutrition.calories.is_finite() {
        return Err(EncodingError(format!(
            "calories must be a finite number, got {}",
            recipe.nutrition.calories
        )));
    }

    let json = serde_json::to_string(recipe).map_err(|e| EncodingError(e.to_string()))?;

    Ok(general_purpose::STANDARD.encode(json.as_bytes()))
}

/// Restores a recipe from a share payload.
///
/// Percent-escaped payloads and the URL-safe alphabet are accepted, padding is
/// optional. The result is fully validated: a partially usable record is a
/// failure, never a recipe.
pub fn decode_recipe(payload: &str) -> Result<Recipe, DecodeFailure> {
    let unescaped =
        urlencoding::decode(payload.trim()).map_err(|_| DecodeFailure::Malformed)?;

    // `-` and `_` only exist in the URL-safe alphabet; a payload mixing them
    // with `+` or `/` fits neither and is rejected as malformed.
    let engine = if unescaped.contains(['-', '_']) {
        &URL_SAFE_LENIENT
    } else {
        &STANDARD_LENIENT
    };

    let bytes = engine
        .decode(unescaped.as_bytes())
        .map_err(|_| DecodeFailure::Malformed)?;

    let text = String::from_utf8(bytes).map_err(|_| DecodeFailure::InvalidEncoding)?;

    let recipe: Recipe = serde_json::from_str(&text)
        .map_err(|e| DecodeFailure::InvalidStructure(e.to_string()))?;

    recipe
        .validate()
        .map_err(|e| DecodeFailure::InvalidStructure(e.to_string()))?;

    Ok(recipe)
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;
    use crate::domain::recipe::entities::{
        Instruction, InstructionStep,
        fixtures::{lemon_herb_pasta, realistic_recipe},
    };

    fn b64(text: &[u8]) -> String {
        general_purpose::STANDARD.encode(text)
    }

    fn round_trip(recipe: &Recipe) -> Recipe {
        decode_recipe(&encode_recipe(recipe).unwrap()).unwrap()
    }

    #[test]
    fn test_lemon_herb_pasta_scenario() {
        let decoded = round_trip(&lemon_herb_pasta());

        assert_eq!(decoded.title, "Lemon Herb Pasta");
        assert_eq!(decoded.instructions[0].ingredients_used(), ["Pasta".to_string()]);
        assert_eq!(decoded.sustainability_score, 7);
        assert_eq!(decoded, lemon_herb_pasta());
    }

    #[test]
    fn test_round_trip_keeps_both_instruction_shapes() {
        let mut recipe = lemon_herb_pasta();
        recipe.instructions = vec![
            Instruction::Plain("Zest the lemon".to_string()),
            Instruction::Detailed(InstructionStep {
                text: "Toss with basil".to_string(),
                ingredients_used: Some(vec!["Basil".to_string()]),
            }),
            Instruction::Detailed(InstructionStep {
                text: "Serve".to_string(),
                ingredients_used: None,
            }),
        ];

        assert_eq!(round_trip(&recipe), recipe);
    }

    #[test]
    fn test_round_trip_keeps_empty_and_absent_alternatives() {
        let mut recipe = lemon_herb_pasta();

        recipe.alternative_ingredients = Some(Vec::new());
        assert_eq!(round_trip(&recipe).alternative_ingredients, Some(Vec::new()));

        recipe.alternative_ingredients = None;
        assert_eq!(round_trip(&recipe).alternative_ingredients, None);
    }

    #[test]
    fn test_round_trip_boundary_scores() {
        for score in [1, 10] {
            let mut recipe = realistic_recipe();
            recipe.sustainability_score = score;
            assert_eq!(round_trip(&recipe), recipe);
        }
    }

    #[test]
    fn test_round_trip_non_ascii_text() {
        let mut recipe = lemon_herb_pasta();
        recipe.title = "Crème brûlée 🍮".to_string();
        recipe.description = "Ñoquis, 饺子 and \"quotes\"".to_string();
        recipe.nutrition.calories = 312.5;

        assert_eq!(round_trip(&recipe), recipe);
    }

    #[test]
    fn test_round_trip_keeps_full_precision_calories() {
        let mut rng = rand::thread_rng();
        let mut recipe = lemon_herb_pasta();

        for calories in [911.6760726776201, 1.0715660391465826e-75, f64::MAX, f64::MIN_POSITIVE] {
            recipe.nutrition.calories = calories;
            assert_eq!(round_trip(&recipe).nutrition.calories.to_bits(), calories.to_bits());
        }

        for _ in 0..2_000 {
            recipe.nutrition.calories = rng.gen_range(0.0..5_000.0);
            assert_eq!(round_trip(&recipe), recipe);
        }

        for _ in 0..2_000 {
            let calories = f64::from_bits(rng.r#gen::<u64>());
            if !calories.is_finite() {
                continue;
            }
            recipe.nutrition.calories = calories;
            assert_eq!(
                round_trip(&recipe).nutrition.calories.to_bits(),
                calories.to_bits(),
                "calories {:e}",
                calories
            );
        }
    }

    #[test]
    fn test_encode_rejects_non_finite_calories() {
        let mut recipe = lemon_herb_pasta();
        recipe.nutrition.calories = f64::NAN;
        assert!(encode_recipe(&recipe).is_err());
    }

    #[test]
    fn test_decodes_links_from_web_clients() {
        // Shape produced by the browser share button: integer calories,
        // string-only instructions, no optional fields.
        let json = r#"{"title":"Tomato Soup","description":"Warm","ingredients":["Tomato"],"instructions":["Simmer tomatoes"],"nutrition":{"calories":210,"protein":"4g","carbs":"30g","fats":"8g","fiber":"6g"},"sustainabilityFactor":"Local","sustainabilityScore":8,"prepTime":"5 mins","cookTime":"20 mins","moodVibe":{"ambientSound":"Rain on a window"},"alternativeIngredients":[]}"#;

        let recipe = decode_recipe(&b64(json.as_bytes())).unwrap();
        assert_eq!(recipe.title, "Tomato Soup");
        assert_eq!(recipe.nutrition.calories, 210.0);
        assert_eq!(
            recipe.instructions,
            vec![Instruction::Plain("Simmer tomatoes".to_string())]
        );
    }

    #[test]
    fn test_accepts_url_safe_unpadded_and_percent_escaped() {
        let recipe = lemon_herb_pasta();
        let json = serde_json::to_string(&recipe).unwrap();

        let url_safe = general_purpose::URL_SAFE_NO_PAD.encode(json.as_bytes());
        assert_eq!(decode_recipe(&url_safe).unwrap(), recipe);

        let escaped = encode_recipe(&recipe)
            .unwrap()
            .replace('+', "%2B")
            .replace('/', "%2F")
            .replace('=', "%3D");
        assert_eq!(decode_recipe(&escaped).unwrap(), recipe);
    }

    #[test]
    fn test_malformed_base64() {
        assert_eq!(decode_recipe("not base64!!"), Err(DecodeFailure::Malformed));
        assert_eq!(decode_recipe("a"), Err(DecodeFailure::Malformed));
    }

    #[test]
    fn test_mixed_alphabets_are_malformed() {
        assert_eq!(decode_recipe("ab-c+/=="), Err(DecodeFailure::Malformed));
        assert_eq!(decode_recipe("ab_c/A=="), Err(DecodeFailure::Malformed));
    }

    #[test]
    fn test_invalid_utf8() {
        assert_eq!(
            decode_recipe(&b64(&[0xff, 0xfe, 0xfd])),
            Err(DecodeFailure::InvalidEncoding)
        );
    }

    #[test]
    fn test_invalid_structure() {
        for text in ["[1,2,3]", "\"just text\"", "{\"title\":\"Soup\"}", ""] {
            assert!(matches!(
                decode_recipe(&b64(text.as_bytes())),
                Err(DecodeFailure::InvalidStructure(_))
            ));
        }
    }

    #[test]
    fn test_blank_title_is_invalid_structure() {
        let mut recipe = lemon_herb_pasta();
        recipe.title = String::new();
        let json = serde_json::to_string(&recipe).unwrap();

        assert!(matches!(
            decode_recipe(&b64(json.as_bytes())),
            Err(DecodeFailure::InvalidStructure(_))
        ));
    }

    #[test]
    fn test_random_printable_input_is_classified() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let len = rng.gen_range(0..200);
            let input: String = (0..len)
                .map(|_| char::from(rng.gen_range(0x20u8..0x7f)))
                .collect();

            assert!(decode_recipe(&input).is_err(), "decoded {:?}", input);
        }
    }
}
