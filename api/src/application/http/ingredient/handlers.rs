pub mod parse_ingredients;
pub mod scan_ingredients;
