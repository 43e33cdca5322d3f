pub mod llm;
pub mod saved_recipe;
