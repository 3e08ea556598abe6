//! Canonical author classification.
//!
//! Three built-in reference lists attribute known recipe names to their
//! source. The lists are folded into a single name → author index at
//! startup, so the correction and verification passes always agree on a
//! recipe's classification.

use crate::error::{RecipeFixError, Result};
use std::collections::HashMap;
use std::path::Path;

pub const FUJI_X_WEEKLY: &str = "FujiWeekly";
pub const KEVIN_MULLINS: &str = "Kevin Mullins";
pub const FILM_RECIPES: &str = "Film.Recipes";

/// Recipes published on Fuji X Weekly.
const FUJI_X_WEEKLY_NAMES: &[&str] = &[
    "Kodachrome 64",
    "Reggie's Portra",
    "Kodak Portra 400 v2",
    "Pacific Blues",
    "Vibrant Arizona",
    "CineStill 800T",
    "Kodak Gold 200",
    "Kodak Tri-X 400",
    "McCurry Kodachrome",
    "California Summer",
    "Fujifilm Negative",
    "Reala Ace",
    "Classic Color",
    "Easy Reala Ace",
    "Vintage Kodachrome",
    "PRO Negative 160C",
    "Kodak Portra 800 v3",
    "Universal Provia",
    "Velvia 100F (Univ.)",
    "Indoor Astia (Univ.)",
    "Elite Chrome (Univ.)",
    "Retro Negative (Univ.)",
    "Fuji Negative (Univ.)",
    "Pulled Negative (Univ)",
    "Superia 200 (Univ.)",
    "Americana Film (Univ)",
    "Eterna Film (Univ.)",
    "Chrome City (Univ.)",
    "Acros Negative (Univ)",
    "Standard Film (Dial)",
    "Velvia Film (Dial)",
    "Astia Summer (Dial)",
    "Kodak Film (Dial)",
    "Fuji PRO 160C (Dial)",
    "Superia Neg (Dial)",
    "Fuji PRO Film (Dial)",
    "Fuji PRO 160S (Dial)",
    "Cinematic Film (Dial)",
    "Reduced Bleach (Dial)",
    "Acros (Dial)",
    "Monochrome (Dial)",
    "Classic Chrome",
    "Kodak Ultramax 400",
    "Kodak Portra 400",
    "Kodachrome II",
    "Bright Summer",
    "Fujicolor Super HG v2",
    "Kodak Portra 160",
    "CineStill 400D v2",
    "Kodak Vision3 250D",
    "Agfa Ultra 100",
    "Emulsion '86",
    "Summer of 1960",
    "Kodak Vericolor",
    "Nostalgic Americana",
    "Fujicolor 100 Ind.",
    "X-Trans III Classic Chrome",
    "Kodachrome I",
    "X-Trans II Portra",
    "Aerochrome v1",
    "PurpleChrome",
    "Vintage Bronze",
    "RedScale",
    "Bleach Bypass (Classic)",
    "Sepia (Classic)",
];

/// Recipes published by Kevin Mullins.
const KEVIN_MULLINS_NAMES: &[&str] = &[
    "Cysgod",
    "Lighthouse",
    "Pure Grit",
    "Modern Movies",
    "Documentary Mono",
    "Documentary Colour",
    "Cinematic Mono",
    "Cinematic Colour",
    "Kodak Style (70s)",
    "Meyerowitz",
    "Parr (Punchy)",
    "HP4 Mono",
    "Pan F Mono",
    "Technicolor Warm",
    "Kodak Gold (Reala)",
    "Padilla (Grainy)",
    "Imai (Soft)",
    "50s Noir",
    "Newspaper",
];

/// Recipes published by Film.Recipes.
const FILM_RECIPES_NAMES: &[&str] = &[
    "Nightwalker",
    "Sunset Strip E6",
    "Underwood",
    "Gneiss Shot",
    "Rosa Golden",
    "Amber T200",
    "Spring Greens",
    "Oxygen",
    "Newsprint",
    "Lomochrome 92",
    "Barbour Green",
    "Brownout",
    "123 Chrome",
    "Absolute Portra",
];

/// The reference lists in classification order (first match wins).
const REFERENCE_LISTS: &[(&[&str], &str)] = &[
    (FUJI_X_WEEKLY_NAMES, FUJI_X_WEEKLY),
    (KEVIN_MULLINS_NAMES, KEVIN_MULLINS),
    (FILM_RECIPES_NAMES, FILM_RECIPES),
];

/// Name → canonical author lookup.
#[derive(Debug, Clone, Default)]
pub struct AuthorIndex {
    map: HashMap<String, String>,
}

impl AuthorIndex {
    /// Builds the index from the built-in reference lists.
    pub fn built_in() -> Self {
        Self::from_lists(REFERENCE_LISTS)
    }

    fn from_lists(lists: &[(&[&str], &str)]) -> Self {
        let mut map = HashMap::new();
        for (names, author) in lists {
            for name in *names {
                // First list wins for names appearing more than once
                map.entry(name.to_string())
                    .or_insert_with(|| author.to_string());
            }
        }
        Self { map }
    }

    /// Loads a corrections file: a JSON object mapping recipe name to
    /// canonical author.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RecipeFixError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&content)?;

        let object = value.as_object().ok_or_else(|| {
            RecipeFixError::InvalidCorrections("expected a JSON object".to_string())
        })?;

        let mut map = HashMap::new();
        for (name, author) in object {
            let author = author.as_str().ok_or_else(|| {
                RecipeFixError::InvalidCorrections(format!(
                    "author for \"{}\" is not a string",
                    name
                ))
            })?;
            map.insert(name.clone(), author.to_string());
        }

        Ok(Self { map })
    }

    /// Merges another index over this one; the other's entries win.
    pub fn merge(&mut self, other: AuthorIndex) {
        self.map.extend(other.map);
    }

    /// Canonical author for a recipe name, if it is classified.
    pub fn classify(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Names that appear in more than one built-in reference list.
pub fn overlapping_names() -> Vec<&'static str> {
    let mut seen = HashMap::new();
    let mut overlaps = Vec::new();

    for (names, _) in REFERENCE_LISTS {
        for name in *names {
            let count = seen.entry(*name).or_insert(0u32);
            *count += 1;
            if *count == 2 {
                overlaps.push(*name);
            }
        }
    }

    overlaps.sort_unstable();
    overlaps
}
