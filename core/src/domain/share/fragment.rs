use crate::domain::{
    recipe::entities::Recipe,
    share::{
        codec::{decode_recipe, encode_recipe},
        errors::{DecodeFailure, EncodingError},
    },
};

pub const FRAGMENT_KEY: &str = "recipe=";

const DELIMITED_FRAGMENT_KEY: &str = "&recipe=";

/// Length above which some browsers and chat apps start truncating links.
/// Exceeding it is logged, never rejected.
pub const SHARE_URL_SOFT_LIMIT: usize = 8_000;

/// The limit older transports are known to enforce.
pub const SHARE_URL_CONSERVATIVE_LIMIT: usize = 2_000;

/// Builds `<base>#recipe=<payload>`, replacing any fragment already on `base`.
pub fn share_url(base_url: &str, recipe: &Recipe) -> Result<String, EncodingError> {
    let base = base_url.split_once('#').map_or(base_url, |(base, _)| base);
    let url = format!("{}#{}{}", base, FRAGMENT_KEY, encode_recipe(recipe)?);

    if url.len() > SHARE_URL_SOFT_LIMIT {
        tracing::warn!(
            length = url.len(),
            limit = SHARE_URL_SOFT_LIMIT,
            title = %recipe.title,
            "Share link exceeds the soft URL length limit"
        );
    }

    Ok(url)
}

/// Looks for a shared recipe in a page location.
///
/// Accepts a full URL, a `#fragment` or a bare fragment. Returns `None` when
/// the location carries no `recipe=` key, otherwise the decode result of
/// everything after the key.
pub fn recipe_from_fragment(location: &str) -> Option<Result<Recipe, DecodeFailure>> {
    let fragment = location
        .split_once('#')
        .map_or(location, |(_, fragment)| fragment);

    let payload = fragment.strip_prefix(FRAGMENT_KEY).or_else(|| {
        fragment
            .find(DELIMITED_FRAGMENT_KEY)
            .map(|at| &fragment[at + DELIMITED_FRAGMENT_KEY.len()..])
    })?;

    let result = decode_recipe(payload);
    if let Err(e) = &result {
        tracing::debug!(error = %e, "Ignoring unusable share link");
    }

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::entities::fixtures::{lemon_herb_pasta, realistic_recipe};

    #[test]
    fn test_share_url_format() {
        let recipe = lemon_herb_pasta();
        let url = share_url("https://forkframe.app/studio", &recipe).unwrap();

        let payload = encode_recipe(&recipe).unwrap();
        assert_eq!(url, format!("https://forkframe.app/studio#recipe={}", payload));
    }

    #[test]
    fn test_share_url_replaces_existing_fragment() {
        let url = share_url("https://forkframe.app/#recipe=stale", &lemon_herb_pasta()).unwrap();
        assert_eq!(url.matches('#').count(), 1);
        assert!(!url.contains("stale"));
    }

    #[test]
    fn test_full_url_round_trip() {
        let recipe = lemon_herb_pasta();
        let url = share_url("https://forkframe.app/", &recipe).unwrap();

        assert_eq!(recipe_from_fragment(&url), Some(Ok(recipe)));
    }

    #[test]
    fn test_accepts_fragment_forms() {
        let recipe = lemon_herb_pasta();
        let payload = encode_recipe(&recipe).unwrap();

        for location in [
            format!("#recipe={}", payload),
            format!("recipe={}", payload),
            format!("#view=full&recipe={}", payload),
        ] {
            assert_eq!(recipe_from_fragment(&location), Some(Ok(recipe.clone())));
        }
    }

    #[test]
    fn test_absent_key_is_none() {
        assert_eq!(recipe_from_fragment(""), None);
        assert_eq!(recipe_from_fragment("https://forkframe.app/"), None);
        assert_eq!(recipe_from_fragment("https://forkframe.app/#about"), None);
        assert_eq!(recipe_from_fragment("#myrecipe=abc"), None);
        assert_eq!(recipe_from_fragment("https://forkframe.app/?recipe=abc"), None);
    }

    #[test]
    fn test_bad_payload_is_failure() {
        assert_eq!(
            recipe_from_fragment("#recipe=%%%"),
            Some(Err(DecodeFailure::Malformed))
        );
        assert!(matches!(
            recipe_from_fragment("#recipe="),
            Some(Err(DecodeFailure::InvalidStructure(_)))
        ));
    }

    #[test]
    fn test_realistic_recipe_fits_common_url_limits() {
        let url = share_url("https://forkframe.app/", &realistic_recipe()).unwrap();

        assert!(url.len() < SHARE_URL_SOFT_LIMIT, "share url is {} chars", url.len());
        assert!(url.len() > SHARE_URL_CONSERVATIVE_LIMIT / 2);
    }
}
