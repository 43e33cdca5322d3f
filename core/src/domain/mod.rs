pub mod chat;
pub mod common;
pub mod cook;
pub mod ingredient;
pub mod recipe;
pub mod saved_recipe;
pub mod session;
pub mod share;
pub mod speech;
