use utoipa::OpenApi;

use crate::application::http::{
    chat::router::ChatApiDoc,
    health::__path_health,
    ingredient::router::IngredientApiDoc,
    recipe::router::RecipeApiDoc,
    saved_recipe::router::SavedRecipeApiDoc,
    server::api_entities::api_error::ApiErrorResponse,
    share::router::ShareApiDoc,
    speech::router::SpeechApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Forkframe API"
    ),
    paths(health),
    components(schemas(ApiErrorResponse)),
    nest(
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "/saved-recipes", api = SavedRecipeApiDoc),
        (path = "/share-links", api = ShareApiDoc),
        (path = "/chat", api = ChatApiDoc),
        (path = "/speech", api = SpeechApiDoc),
    )
)]
pub struct ApiDoc;
