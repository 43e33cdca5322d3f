use forkframe_core::domain::ingredient::{merge_ingredients, parse_ingredient_input};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    ingredient::validators::ParseIngredientsValidator,
    server::api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ParseIngredientsResponse {
    pub data: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/parse",
    tag = "ingredient",
    summary = "Parse typed ingredients",
    description = "Splits free text into ingredient names and merges them into the existing list without duplicates.",
    responses(
        (status = 200, body = ParseIngredientsResponse)
    ),
    request_body = ParseIngredientsValidator
)]
pub async fn parse_ingredients(
    ValidateJson(payload): ValidateJson<ParseIngredientsValidator>,
) -> Result<Response<ParseIngredientsResponse>, ApiError> {
    let typed = parse_ingredient_input(&payload.text);

    Ok(Response::OK(ParseIngredientsResponse {
        data: merge_ingredients(&payload.existing, &typed),
    }))
}
