//! The verification pass.
//!
//! Diagnostic re-check run after corrections: reports residual
//! mismatches but never fixes them.

use crate::authors::AuthorIndex;
use crate::types::Recipe;

/// A classified recipe whose author still disagrees with its
/// classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    pub name: String,
    /// Actual value; `None` when the field is absent or null.
    pub actual: Option<String>,
    pub expected: String,
}

/// Scans the collection for classified recipes with a wrong author.
pub fn find_mismatches(recipes: &[Recipe], index: &AuthorIndex) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();

    for recipe in recipes {
        let Some(name) = recipe.name() else {
            continue;
        };
        let Some(expected) = index.classify(name) else {
            continue;
        };

        if recipe.author() != Some(expected) {
            mismatches.push(Mismatch {
                name: name.to_string(),
                actual: recipe.author().map(str::to_string),
                expected: expected.to_string(),
            });
        }
    }

    mismatches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corrector::correct_authors;
    use serde_json::json;

    fn recipes(value: serde_json::Value) -> Vec<Recipe> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_detects_wrong_author() {
        let list = recipes(json!([
            {"name": "Kodachrome 64", "author": "Unknown"}
        ]));
        let mismatches = find_mismatches(&list, &AuthorIndex::built_in());

        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].name, "Kodachrome 64");
        assert_eq!(mismatches[0].actual.as_deref(), Some("Unknown"));
        assert_eq!(mismatches[0].expected, "FujiWeekly");
    }

    #[test]
    fn test_unclassified_recipe_not_flagged() {
        let list = recipes(json!([
            {"name": "Unknown Recipe XYZ", "author": "N/A"}
        ]));
        let mismatches = find_mismatches(&list, &AuthorIndex::built_in());
        assert!(mismatches.is_empty());
    }

    #[test]
    fn test_missing_author_flagged() {
        let list = recipes(json!([
            {"name": "Cysgod"}
        ]));
        let mismatches = find_mismatches(&list, &AuthorIndex::built_in());

        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].actual, None);
    }

    #[test]
    fn test_no_mismatch_after_correction() {
        let mut list = recipes(json!([
            {"name": "Kodachrome 64", "author": "Unknown"},
            {"name": "Cysgod", "author": "Kevin Mullins"},
            {"name": "Unknown Recipe XYZ", "author": "N/A"}
        ]));
        let index = AuthorIndex::built_in();

        correct_authors(&mut list, &index);
        assert!(find_mismatches(&list, &index).is_empty());
    }
}
