//! The correction pass.

use crate::authors::AuthorIndex;
use crate::types::Recipe;

/// One applied author correction.
#[derive(Debug, Clone, PartialEq)]
pub struct Correction {
    pub name: String,
    /// Previous value; `None` when the field was absent or null.
    pub old_author: Option<String>,
    pub new_author: String,
}

/// Overwrites the `author` of every classified recipe whose current value
/// disagrees with its classification. Unclassified recipes (including
/// records without a `name`) are left untouched.
pub fn correct_authors(recipes: &mut [Recipe], index: &AuthorIndex) -> Vec<Correction> {
    let mut corrections = Vec::new();

    for recipe in recipes.iter_mut() {
        let Some(name) = recipe.name() else {
            continue;
        };
        let Some(expected) = index.classify(name) else {
            continue;
        };

        if recipe.author() != Some(expected) {
            corrections.push(Correction {
                name: name.to_string(),
                old_author: recipe.author().map(str::to_string),
                new_author: expected.to_string(),
            });
            recipe.set_author(expected);
        }
    }

    corrections
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn recipes(value: serde_json::Value) -> Vec<Recipe> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_corrects_wrong_author() {
        let mut list = recipes(json!([
            {"name": "Kodachrome 64", "author": "Unknown"}
        ]));
        let corrections = correct_authors(&mut list, &AuthorIndex::built_in());

        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].name, "Kodachrome 64");
        assert_eq!(corrections[0].old_author.as_deref(), Some("Unknown"));
        assert_eq!(corrections[0].new_author, "FujiWeekly");
        assert_eq!(list[0].author(), Some("FujiWeekly"));
    }

    #[test]
    fn test_correct_author_left_alone() {
        let mut list = recipes(json!([
            {"name": "Cysgod", "author": "Kevin Mullins"}
        ]));
        let corrections = correct_authors(&mut list, &AuthorIndex::built_in());

        assert!(corrections.is_empty());
        assert_eq!(list[0].author(), Some("Kevin Mullins"));
    }

    #[test]
    fn test_unclassified_recipe_untouched() {
        let mut list = recipes(json!([
            {"name": "Unknown Recipe XYZ", "author": "N/A"}
        ]));
        let before = list.clone();
        let corrections = correct_authors(&mut list, &AuthorIndex::built_in());

        assert!(corrections.is_empty());
        assert_eq!(list, before);
    }

    #[test]
    fn test_missing_author_is_set() {
        let mut list = recipes(json!([
            {"name": "Nightwalker"}
        ]));
        let corrections = correct_authors(&mut list, &AuthorIndex::built_in());

        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].old_author, None);
        assert_eq!(list[0].author(), Some("Film.Recipes"));
    }

    #[test]
    fn test_record_without_name_untouched() {
        let mut list = recipes(json!([
            {"author": "Somebody", "note": "no name field"}
        ]));
        let before = list.clone();
        let corrections = correct_authors(&mut list, &AuthorIndex::built_in());

        assert!(corrections.is_empty());
        assert_eq!(list, before);
    }

    #[test]
    fn test_second_run_is_idempotent() {
        let mut list = recipes(json!([
            {"name": "Kodachrome 64", "author": "Unknown"},
            {"name": "Oxygen", "author": "someone"},
            {"name": "Cysgod", "author": "Kevin Mullins"}
        ]));
        let index = AuthorIndex::built_in();

        let first = correct_authors(&mut list, &index);
        assert_eq!(first.len(), 2);

        let second = correct_authors(&mut list, &index);
        assert!(second.is_empty());
    }
}
