//! recipe-authors
//!
//! Reconciles the `author` field of film simulation recipe records
//! against the built-in reference lists.

pub mod authors;
pub mod cli;
pub mod corrector;
pub mod error;
pub mod store;
pub mod types;
pub mod verifier;

pub use authors::AuthorIndex;
pub use corrector::{correct_authors, Correction};
pub use error::{RecipeFixError, Result};
pub use types::Recipe;
pub use verifier::{find_mismatches, Mismatch};
