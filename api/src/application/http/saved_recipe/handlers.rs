pub mod delete_saved_recipe;
pub mod list_saved_recipes;
pub mod save_recipe;
pub mod toggle_saved_recipe;
