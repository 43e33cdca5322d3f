pub mod repository;

pub use repository::FileSavedRecipeRepository;
