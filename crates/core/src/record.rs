use serde::{Deserialize, Serialize};

/// An authored cocktail record, as written in the static taxonomy.
///
/// Label fields (`spirit_base`, `primary_flavor`, `complexity`) stay as raw
/// strings here; they are validated against the closed vocabularies when the
/// record is converted into a [`crate::profile::CocktailProfile`]. Optional
/// fields default the way the taxonomy authors expect: moderate complexity,
/// midpoint scores, served over ice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CocktailRecord {
    pub name: String,
    pub spirit_base: String,
    pub primary_flavor: String,
    #[serde(default = "default_complexity")]
    pub complexity: String,
    #[serde(default = "default_score")]
    pub bitterness: u8,
    #[serde(default = "default_score")]
    pub sweetness: u8,
    #[serde(default = "default_score")]
    pub richness: u8,
    #[serde(default)]
    pub color_palette: Vec<String>,
    #[serde(default)]
    pub has_cream: bool,
    #[serde(default = "default_true")]
    pub has_ice: bool,
    #[serde(default)]
    pub is_effervescent: bool,
    #[serde(default)]
    pub description: String,
}

fn default_complexity() -> String {
    "moderate".to_string()
}

fn default_score() -> u8 {
    5
}

fn default_true() -> bool {
    true
}
