//! Derived cocktail profiles: flavor structure plus visual parameters.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::morphisms;
use crate::record::CocktailRecord;
use crate::taxonomy::{
    ColorCategory, ComplexityLevel, CompositionApproach, FlavorType, LightingStyle,
    MoodDescriptor, SpiritBase, TemperatureVibe, TextureQuality,
};

/// Structured flavor characteristics of a cocktail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorProfile {
    pub primary_flavor: FlavorType,
    /// Reserved extension point; no current mapping populates it.
    pub secondary_flavors: Vec<FlavorType>,
    pub complexity: ComplexityLevel,
    /// 0-10, derived solely from the spirit base.
    pub warmth_level: u8,
    pub bitterness: u8,
    pub sweetness: u8,
    pub richness: u8,
}

/// Visual aesthetic parameters derived for a cocktail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualParameters {
    pub primary_color_category: ColorCategory,
    /// Hex codes, copied verbatim from the authored record.
    pub color_palette: Vec<String>,
    pub lighting_style: LightingStyle,
    pub primary_mood: MoodDescriptor,
    /// Zero to three moods, in fixed derivation order.
    pub secondary_moods: Vec<MoodDescriptor>,
    pub composition_strategy: CompositionApproach,
    pub texture_quality: TextureQuality,
    pub temperature_vibe: TemperatureVibe,
}

impl VisualParameters {
    /// Derive the complete visual profile from cocktail characteristics.
    ///
    /// `_bitterness` is accepted for completeness of the characteristic set
    /// but does not influence the result: lighting comes from spirit warmth
    /// and complexity, not from [`morphisms::bitterness_lighting`].
    #[allow(clippy::too_many_arguments)]
    pub fn derive(
        spirit: SpiritBase,
        primary_flavor: FlavorType,
        complexity: ComplexityLevel,
        _bitterness: u8,
        sweetness: u8,
        richness: u8,
        color_palette: Vec<String>,
        has_cream: bool,
        has_ice: bool,
        is_effervescent: bool,
    ) -> Self {
        let warmth = morphisms::spirit_warmth(spirit);

        Self {
            primary_color_category: morphisms::spirit_color(spirit),
            color_palette,
            lighting_style: morphisms::lighting_for(warmth, complexity),
            primary_mood: morphisms::flavor_mood(primary_flavor),
            secondary_moods: morphisms::secondary_moods(richness, complexity, sweetness),
            composition_strategy: morphisms::complexity_composition(complexity),
            texture_quality: morphisms::texture_from_components(
                has_cream,
                has_ice,
                is_effervescent,
            ),
            temperature_vibe: morphisms::temperature_for(warmth),
        }
    }

    /// Primary mood followed by the secondary moods, in order.
    pub fn mood_keywords(&self) -> Vec<&'static str> {
        let mut keywords = vec![self.primary_mood.as_str()];
        keywords.extend(self.secondary_moods.iter().map(|mood| mood.as_str()));
        keywords
    }

    /// Deterministic prompt-enhancement suggestion built from the visual
    /// parameters. Only the first two palette entries are quoted.
    pub fn suggested_enhancement(&self) -> String {
        let moods = self.mood_keywords().join(", ");
        let palette = self
            .color_palette
            .iter()
            .take(2)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Add these aesthetic qualities to your prompt: {moods}. \
             Use {lighting} lighting. \
             Color palette suggestion: {palette}. \
             Composition: {composition}. \
             Texture: {texture}.",
            lighting = self.lighting_style.as_str(),
            composition = self.composition_strategy.as_str(),
            texture = self.texture_quality.as_str(),
        )
    }
}

/// Complete derived profile of a cocktail: the unit returned to callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CocktailProfile {
    pub name: String,
    pub spirit_base: SpiritBase,
    pub primary_flavor: FlavorType,
    pub flavor_profile: FlavorProfile,
    pub visual_parameters: VisualParameters,
    pub description: String,
}

impl CocktailProfile {
    /// Validate an authored record and derive its full profile.
    ///
    /// Fails with a named [`DomainError`] if any label field falls outside
    /// its closed vocabulary; there is no partial profile.
    pub fn from_record(record: &CocktailRecord) -> Result<Self, DomainError> {
        let spirit: SpiritBase = record.spirit_base.parse()?;
        let primary_flavor: FlavorType = record.primary_flavor.parse()?;
        let complexity: ComplexityLevel = record.complexity.parse()?;

        let flavor_profile = FlavorProfile {
            primary_flavor,
            secondary_flavors: Vec::new(),
            complexity,
            warmth_level: morphisms::spirit_warmth(spirit),
            bitterness: record.bitterness,
            sweetness: record.sweetness,
            richness: record.richness,
        };

        let visual_parameters = VisualParameters::derive(
            spirit,
            primary_flavor,
            complexity,
            record.bitterness,
            record.sweetness,
            record.richness,
            record.color_palette.clone(),
            record.has_cream,
            record.has_ice,
            record.is_effervescent,
        );

        Ok(Self {
            name: record.name.clone(),
            spirit_base: spirit,
            primary_flavor,
            flavor_profile,
            visual_parameters,
            description: record.description.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn negroni_record() -> CocktailRecord {
        CocktailRecord {
            name: "Negroni".to_string(),
            spirit_base: "gin".to_string(),
            primary_flavor: "bitter".to_string(),
            complexity: "simple".to_string(),
            bitterness: 8,
            sweetness: 3,
            richness: 6,
            color_palette: vec![
                "#8B1A1A".to_string(),
                "#D2691E".to_string(),
                "#FFA500".to_string(),
            ],
            has_cream: false,
            has_ice: true,
            is_effervescent: false,
            description: "Classic aperitivo.".to_string(),
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        let record = negroni_record();
        let first = CocktailProfile::from_record(&record).expect("negroni converts");
        let second = CocktailProfile::from_record(&record).expect("negroni converts again");
        assert_eq!(first, second);
    }

    #[test]
    fn negroni_profile_derives_expected_fields() {
        let profile =
            CocktailProfile::from_record(&negroni_record()).expect("negroni converts");

        assert_eq!(profile.spirit_base, SpiritBase::Gin);
        assert_eq!(profile.flavor_profile.warmth_level, 5);
        assert_eq!(
            profile.visual_parameters.primary_color_category,
            ColorCategory::Clear
        );
        // Gin warmth 5 with simple complexity lands in the middle band.
        assert_eq!(
            profile.visual_parameters.lighting_style,
            LightingStyle::WarmSideLit
        );
        assert_eq!(
            profile.visual_parameters.primary_mood,
            MoodDescriptor::Sophisticated
        );
        assert_eq!(
            profile.visual_parameters.composition_strategy,
            CompositionApproach::Minimalist
        );
        assert_eq!(
            profile.visual_parameters.texture_quality,
            TextureQuality::Crystalline
        );
        assert_eq!(
            profile.visual_parameters.temperature_vibe,
            TemperatureVibe::Ambient
        );
        assert_eq!(profile.visual_parameters.secondary_moods, Vec::new());
    }

    #[test]
    fn unrecognized_spirit_fails_conversion() {
        let mut record = negroni_record();
        record.spirit_base = "soju".to_string();
        let error = CocktailProfile::from_record(&record).expect_err("soju is not recognized");
        assert_eq!(error, DomainError::UnknownSpirit("soju".to_string()));
    }

    #[test]
    fn unrecognized_complexity_fails_conversion() {
        let mut record = negroni_record();
        record.complexity = "byzantine".to_string();
        let error = CocktailProfile::from_record(&record).expect_err("bad complexity");
        assert_eq!(
            error,
            DomainError::UnknownComplexity("byzantine".to_string())
        );
    }

    #[test]
    fn label_fields_are_case_normalized_before_validation() {
        let mut record = negroni_record();
        record.spirit_base = "GIN".to_string();
        record.primary_flavor = "Bitter".to_string();
        let profile = CocktailProfile::from_record(&record).expect("case variants convert");
        assert_eq!(profile.spirit_base, SpiritBase::Gin);
        assert_eq!(profile.primary_flavor, FlavorType::Bitter);
    }

    #[test]
    fn mood_keywords_lead_with_primary_mood() {
        let record = CocktailRecord {
            name: "Mai Tai".to_string(),
            spirit_base: "rum".to_string(),
            primary_flavor: "fruity".to_string(),
            complexity: "complex".to_string(),
            bitterness: 2,
            sweetness: 6,
            richness: 8,
            color_palette: vec!["#FF6B35".to_string(), "#F7931E".to_string()],
            has_cream: false,
            has_ice: true,
            is_effervescent: false,
            description: String::new(),
        };
        let profile = CocktailProfile::from_record(&record).expect("mai tai converts");
        assert_eq!(
            profile.visual_parameters.mood_keywords(),
            vec!["tropical", "elegant", "aromatic", "playful"]
        );
    }

    #[test]
    fn suggested_enhancement_quotes_first_two_palette_entries() {
        let record = negroni_record();
        let profile = CocktailProfile::from_record(&record).expect("negroni converts");
        let suggestion = profile.visual_parameters.suggested_enhancement();

        assert!(suggestion.starts_with(
            "Add these aesthetic qualities to your prompt: sophisticated."
        ));
        assert!(suggestion.contains("Use warm_side_lit lighting."));
        assert!(suggestion.contains("Color palette suggestion: #8B1A1A, #D2691E."));
        assert!(!suggestion.contains("#FFA500"));
        assert!(suggestion.contains("Composition: minimalist."));
        assert!(suggestion.ends_with("Texture: crystalline."));
    }
}
