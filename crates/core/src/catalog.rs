//! Immutable catalog of derived cocktail profiles.
//!
//! The catalog is built once from an authored record slice and never
//! mutated afterwards; query paths borrow it. A record that fails label
//! validation is skipped with a warning so one bad entry never takes the
//! rest of the taxonomy down with it.

use tracing::warn;

use crate::data::builtin_taxonomy;
use crate::profile::CocktailProfile;
use crate::record::CocktailRecord;
use crate::taxonomy::{FlavorType, MoodDescriptor};

/// Canonical lookup key for a cocktail name: lowercase, with spaces and
/// hyphens folded to underscores.
pub fn normalize_key(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

struct CatalogEntry {
    key: String,
    profile: CocktailProfile,
}

/// Catalog of cocktail profiles, keyed by normalized name, in authored order.
#[derive(Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog by converting every record in one pass. Records that
    /// fail conversion are skipped, not fatal.
    pub fn from_records(records: &[CocktailRecord]) -> Self {
        let mut entries = Vec::with_capacity(records.len());
        for record in records {
            match CocktailProfile::from_record(record) {
                Ok(profile) => entries.push(CatalogEntry {
                    key: normalize_key(&record.name),
                    profile,
                }),
                Err(error) => {
                    warn!(cocktail = %record.name, %error, "skipping malformed taxonomy record");
                }
            }
        }
        Self { entries }
    }

    /// Catalog over the built-in taxonomy.
    pub fn builtin() -> Self {
        Self::from_records(&builtin_taxonomy())
    }

    /// Look up a profile by name, normalizing the key the same way the
    /// catalog keys were built.
    pub fn get(&self, name: &str) -> Option<&CocktailProfile> {
        let key = normalize_key(name);
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.profile)
    }

    /// Iterate over `(key, profile)` pairs in authored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CocktailProfile)> {
        self.entries
            .iter()
            .map(|entry| (entry.key.as_str(), &entry.profile))
    }

    /// Cocktails whose primary flavor matches exactly.
    pub fn search_by_flavor(&self, flavor: FlavorType) -> Vec<(&str, &CocktailProfile)> {
        self.iter()
            .filter(|(_, profile)| profile.primary_flavor == flavor)
            .collect()
    }

    /// Cocktails whose primary or secondary moods include the given mood.
    pub fn search_by_mood(&self, mood: MoodDescriptor) -> Vec<(&str, &CocktailProfile)> {
        self.iter()
            .filter(|(_, profile)| {
                let visual = &profile.visual_parameters;
                visual.primary_mood == mood || visual.secondary_moods.contains(&mood)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::record::CocktailRecord;
    use crate::taxonomy::{FlavorType, MoodDescriptor};

    use super::{normalize_key, Catalog};

    #[test]
    fn normalization_folds_case_spaces_and_hyphens() {
        assert_eq!(normalize_key("Old Fashioned"), "old_fashioned");
        assert_eq!(normalize_key("old-fashioned"), "old_fashioned");
        assert_eq!(normalize_key("OLD_FASHIONED"), "old_fashioned");
    }

    #[test]
    fn name_variants_resolve_to_the_same_profile() {
        let catalog = Catalog::builtin();
        let canonical = catalog.get("Old Fashioned").expect("canonical name resolves");
        let hyphenated = catalog.get("old-fashioned").expect("hyphenated resolves");
        let shouty = catalog.get("OLD_FASHIONED").expect("upper snake resolves");
        assert_eq!(canonical, hyphenated);
        assert_eq!(canonical, shouty);
    }

    #[test]
    fn unknown_name_returns_none() {
        let catalog = Catalog::builtin();
        assert!(catalog.get("Aviation").is_none());
    }

    #[test]
    fn builtin_catalog_holds_every_record() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 13);
    }

    #[test]
    fn malformed_record_is_skipped_without_aborting_the_build() {
        let mut records = vec![CocktailRecord {
            name: "Mystery".to_string(),
            spirit_base: "ectoplasm".to_string(),
            primary_flavor: "bitter".to_string(),
            complexity: "simple".to_string(),
            bitterness: 5,
            sweetness: 5,
            richness: 5,
            color_palette: Vec::new(),
            has_cream: false,
            has_ice: true,
            is_effervescent: false,
            description: String::new(),
        }];
        records.extend(crate::data::builtin_taxonomy());

        let catalog = Catalog::from_records(&records);
        assert_eq!(catalog.len(), 13);
        assert!(catalog.get("Mystery").is_none());
        assert!(catalog.get("Negroni").is_some());
    }

    #[test]
    fn flavor_search_matches_primary_flavor_exactly() {
        let catalog = Catalog::builtin();
        let sours = catalog.search_by_flavor(FlavorType::Sour);
        let keys: Vec<&str> = sours.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec!["daiquiri", "margarita"]);

        assert!(catalog.search_by_flavor(FlavorType::Sweet).is_empty());
    }

    #[test]
    fn mood_search_covers_primary_and_secondary_moods() {
        let catalog = Catalog::builtin();

        // Tropical appears only as a primary mood (fruity cocktails).
        let tropical = catalog.search_by_mood(MoodDescriptor::Tropical);
        let keys: Vec<&str> = tropical.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec!["mai_tai", "paloma"]);

        // Elegant is primary for herbal drinks and secondary for rich ones.
        let elegant = catalog.search_by_mood(MoodDescriptor::Elegant);
        assert!(elegant.iter().any(|(key, _)| *key == "mojito"));
        assert!(elegant.iter().any(|(key, _)| *key == "old_fashioned"));
    }

    #[test]
    fn iteration_preserves_authored_order() {
        let catalog = Catalog::builtin();
        let first_three: Vec<&str> = catalog.iter().take(3).map(|(key, _)| key).collect();
        assert_eq!(first_three, vec!["negroni", "mai_tai", "daiquiri"]);
    }
}
