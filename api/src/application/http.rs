pub mod chat;
pub mod health;
pub mod ingredient;
pub mod recipe;
pub mod saved_recipe;
pub mod server;
pub mod share;
pub mod speech;
