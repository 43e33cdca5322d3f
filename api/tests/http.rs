use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use clap::Parser;
use forkframe_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use tempfile::TempDir;

const DEVICE_HEADER: HeaderName = HeaderName::from_static("x-device-id");

async fn server() -> (TestServer, TempDir) {
    let data_dir = tempfile::tempdir().unwrap();
    let args = Args::parse_from([
        "forkframe-api",
        "--data-dir",
        data_dir.path().to_str().unwrap(),
        "--share-base-url",
        "https://forkframe.app/",
        "--server-root-path",
        "",
    ]);

    let state = state(Arc::new(args)).await.unwrap();
    let server = TestServer::new(router(state).unwrap()).unwrap();

    (server, data_dir)
}

fn lemon_herb_pasta() -> Value {
    json!({
        "title": "Lemon Herb Pasta",
        "description": "Bright weeknight pasta",
        "ingredients": ["Pasta", "Lemon", "Basil"],
        "instructions": [{ "text": "Boil pasta", "ingredientsUsed": ["Pasta"] }],
        "nutrition": {
            "calories": 420.0,
            "protein": "14g",
            "carbs": "70g",
            "fats": "9g",
            "fiber": "4g"
        },
        "sustainabilityFactor": "Uses pantry staples",
        "sustainabilityScore": 7,
        "prepTime": "5 mins",
        "cookTime": "12 mins",
        "moodVibe": { "ambientSound": "Kitchen radio" },
        "alternativeIngredients": [
            { "original": "Basil", "substitute": "Parsley", "reason": "Easier to find" }
        ]
    })
}

#[tokio::test]
async fn test_health() {
    let (server, _dir) = server().await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ok");
}

#[tokio::test]
async fn test_share_link_round_trip() {
    let (server, _dir) = server().await;

    let created = server
        .post("/share-links")
        .json(&json!({ "recipe": lemon_herb_pasta() }))
        .await;
    created.assert_status(StatusCode::CREATED);

    let created = created.json::<Value>();
    let url = created["url"].as_str().unwrap().to_string();
    assert!(url.starts_with("https://forkframe.app/#recipe="));
    assert_eq!(created["exceedsSoftLimit"], false);

    let resolved = server
        .post("/share-links/resolve")
        .json(&json!({ "location": url }))
        .await;
    resolved.assert_status_ok();

    let resolved = resolved.json::<Value>();
    assert_eq!(resolved["outcome"], "resolved");
    assert_eq!(resolved["recipe"], lemon_herb_pasta());
}

#[tokio::test]
async fn test_share_link_uses_requested_base_url() {
    let (server, _dir) = server().await;

    let created = server
        .post("/share-links")
        .json(&json!({
            "recipe": lemon_herb_pasta(),
            "baseUrl": "https://cook.example/studio#old"
        }))
        .await
        .json::<Value>();

    let url = created["url"].as_str().unwrap();
    assert!(url.starts_with("https://cook.example/studio#recipe="));
}

#[tokio::test]
async fn test_unusable_links_resolve_softly() {
    let (server, _dir) = server().await;

    for (location, outcome) in [
        ("https://forkframe.app/", "absent"),
        ("#recipe=%%%", "malformed"),
        ("#recipe=//79", "invalid_encoding"),
        ("#recipe=e30=", "invalid_structure"),
    ] {
        let response = server
            .post("/share-links/resolve")
            .json(&json!({ "location": location }))
            .await;
        response.assert_status_ok();

        let body = response.json::<Value>();
        assert_eq!(body["outcome"], outcome, "location {}", location);
        assert_eq!(body["recipe"], Value::Null);
    }
}

#[tokio::test]
async fn test_share_link_rejects_invalid_recipe() {
    let (server, _dir) = server().await;

    let mut recipe = lemon_herb_pasta();
    recipe["sustainabilityScore"] = json!(11);

    let response = server
        .post("/share-links")
        .json(&json!({ "recipe": recipe }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "E_BAD_REQUEST");
}

#[tokio::test]
async fn test_saved_recipes_lifecycle() {
    let (server, _dir) = server().await;
    let phone = HeaderValue::from_static("phone");

    let saved = server
        .post("/saved-recipes")
        .add_header(DEVICE_HEADER, phone.clone())
        .json(&json!({ "recipe": lemon_herb_pasta() }))
        .await;
    saved.assert_status(StatusCode::CREATED);
    assert_eq!(saved.json::<Value>()["outcome"], "saved");

    let again = server
        .post("/saved-recipes")
        .add_header(DEVICE_HEADER, phone.clone())
        .json(&json!({ "recipe": lemon_herb_pasta() }))
        .await;
    again.assert_status_ok();
    assert_eq!(again.json::<Value>()["outcome"], "already_saved");

    let listed = server
        .get("/saved-recipes")
        .add_header(DEVICE_HEADER, phone.clone())
        .await
        .json::<Value>();
    assert_eq!(listed["data"].as_array().map(Vec::len), Some(1));

    let other_device = server
        .get("/saved-recipes")
        .add_header(DEVICE_HEADER, HeaderValue::from_static("tablet"))
        .await
        .json::<Value>();
    assert_eq!(other_device["data"], json!([]));

    server
        .delete("/saved-recipes/Lemon%20Herb%20Pasta")
        .add_header(DEVICE_HEADER, phone.clone())
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .delete("/saved-recipes/Lemon%20Herb%20Pasta")
        .add_header(DEVICE_HEADER, phone)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_toggle_saved_recipe() {
    let (server, _dir) = server().await;

    let first = server
        .post("/saved-recipes/toggle")
        .json(&json!({ "recipe": lemon_herb_pasta() }))
        .await
        .json::<Value>();
    assert_eq!(first["outcome"], "saved");

    let second = server
        .post("/saved-recipes/toggle")
        .json(&json!({ "recipe": lemon_herb_pasta() }))
        .await
        .json::<Value>();
    assert_eq!(second["outcome"], "removed");

    let listed = server.get("/saved-recipes").await.json::<Value>();
    assert_eq!(listed["data"], json!([]));
}

#[tokio::test]
async fn test_invalid_device_id_is_rejected() {
    let (server, _dir) = server().await;

    server
        .get("/saved-recipes")
        .add_header(DEVICE_HEADER, HeaderValue::from_static("../etc"))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_parse_ingredients_merges() {
    let (server, _dir) = server().await;

    let response = server
        .post("/ingredients/parse")
        .json(&json!({ "text": "Lemon | Basil,\n Garlic", "existing": ["Pasta", "Lemon"] }))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["data"],
        json!(["Pasta", "Lemon", "Basil", "Garlic"])
    );
}

#[tokio::test]
async fn test_scan_requires_image_field() {
    let (server, _dir) = server().await;

    let form = MultipartForm::new().add_text("note", "no photo");
    server
        .post("/ingredients/scan")
        .multipart(form)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let form = MultipartForm::new()
        .add_part("image", Part::bytes(b"%PDF".to_vec()).mime_type("application/pdf"));
    server
        .post("/ingredients/scan")
        .multipart(form)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_generate_recipe_requires_ingredients() {
    let (server, _dir) = server().await;

    let response = server
        .post("/recipes/generate")
        .json(&json!({ "ingredients": [], "profile": {}, "mood": "quick" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chat_rejects_empty_message() {
    let (server, _dir) = server().await;

    server
        .post("/chat")
        .json(&json!({ "message": "" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_blank_speech_has_no_content() {
    let (server, _dir) = server().await;

    server
        .post("/speech")
        .json(&json!({ "text": "   " }))
        .await
        .assert_status(StatusCode::NO_CONTENT);
}
