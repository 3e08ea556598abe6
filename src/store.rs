//! Recipe file loading and persistence.

use crate::error::{RecipeFixError, Result};
use crate::types::Recipe;
use std::path::Path;

/// Default location of the recipe collection.
pub const DEFAULT_RECIPES_PATH: &str = "src/data/recipes.json";

/// Reads and parses the full recipe collection.
pub fn load_recipes(path: &Path) -> Result<Vec<Recipe>> {
    if !path.exists() {
        return Err(RecipeFixError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let recipes: Vec<Recipe> = serde_json::from_str(&content)?;
    Ok(recipes)
}

/// Rewrites the full collection in place.
///
/// 2-space indentation, UTF-8, non-ASCII characters literal. Not an
/// atomic write; a failure mid-write can leave the file truncated.
pub fn save_recipes(path: &Path, recipes: &[Recipe]) -> Result<()> {
    let json = serde_json::to_string_pretty(recipes)?;
    std::fs::write(path, json)?;
    Ok(())
}
