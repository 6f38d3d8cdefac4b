//! Deterministic mappings from cocktail characteristics to visual attributes.
//!
//! Each function is a pure table or threshold rule, total over its enum
//! domain. Given the same inputs these always produce the same outputs;
//! profile derivation composes them in a fixed order.

use crate::taxonomy::{
    ColorCategory, ComplexityLevel, CompositionApproach, FlavorType, LightingStyle,
    MoodDescriptor, SpiritBase, TemperatureVibe, TextureQuality,
};

/// Thermal/nostalgic warmth of a spirit on a 0-10 scale.
pub fn spirit_warmth(spirit: SpiritBase) -> u8 {
    match spirit {
        SpiritBase::Rum => 9,
        SpiritBase::Cognac => 9,
        SpiritBase::Whiskey => 8,
        SpiritBase::Mezcal => 8,
        SpiritBase::Tequila => 7,
        SpiritBase::Gin => 5,
        SpiritBase::Vodka => 3,
    }
}

/// Dominant color grouping suggested by the spirit.
pub fn spirit_color(spirit: SpiritBase) -> ColorCategory {
    match spirit {
        SpiritBase::Rum | SpiritBase::Mezcal => ColorCategory::Golden,
        SpiritBase::Whiskey | SpiritBase::Cognac => ColorCategory::Amber,
        SpiritBase::Tequila | SpiritBase::Gin | SpiritBase::Vodka => ColorCategory::Clear,
    }
}

/// Emotional tone implied by the primary flavor.
pub fn flavor_mood(flavor: FlavorType) -> MoodDescriptor {
    match flavor {
        FlavorType::Bitter => MoodDescriptor::Sophisticated,
        FlavorType::Sweet => MoodDescriptor::Playful,
        FlavorType::SpiritForward | FlavorType::Sour => MoodDescriptor::Bold,
        FlavorType::Herbal => MoodDescriptor::Elegant,
        FlavorType::Fruity => MoodDescriptor::Tropical,
        FlavorType::Creamy => MoodDescriptor::Nostalgic,
        FlavorType::Smoky => MoodDescriptor::Dark,
        FlavorType::Spiced => MoodDescriptor::Aromatic,
    }
}

/// Composition strategy: more complex drinks show their layering.
pub fn complexity_composition(complexity: ComplexityLevel) -> CompositionApproach {
    match complexity {
        ComplexityLevel::Simple => CompositionApproach::Minimalist,
        ComplexityLevel::Moderate => CompositionApproach::Balanced,
        ComplexityLevel::Complex => CompositionApproach::Layered,
    }
}

/// Lighting suggested by bitterness alone: bitter drinks take high-contrast
/// light, sweet drinks take soft diffusion.
///
/// Profile derivation does not consume this; [`lighting_for`] supersedes it
/// there. It remains part of the public mapping surface.
pub fn bitterness_lighting(bitterness: u8) -> LightingStyle {
    if bitterness >= 7 {
        LightingStyle::DramaticShadow
    } else if bitterness >= 5 {
        LightingStyle::WarmSideLit
    } else {
        LightingStyle::DiffusedSoft
    }
}

/// Final lighting rule, combining spirit warmth with ingredient complexity.
pub fn lighting_for(warmth: u8, complexity: ComplexityLevel) -> LightingStyle {
    if warmth >= 8 && complexity == ComplexityLevel::Complex {
        LightingStyle::GoldenHour
    } else if warmth >= 8 {
        LightingStyle::MoodyAmber
    } else if warmth <= 4 {
        LightingStyle::CrispBacklit
    } else {
        LightingStyle::WarmSideLit
    }
}

/// Visible texture from physical composition. Cream wins over effervescence,
/// effervescence over ice, ice over nothing.
pub fn texture_from_components(
    has_cream: bool,
    has_ice: bool,
    is_effervescent: bool,
) -> TextureQuality {
    if has_cream {
        TextureQuality::Creamy
    } else if is_effervescent {
        TextureQuality::Effervescent
    } else if has_ice {
        TextureQuality::Crystalline
    } else {
        TextureQuality::Translucent
    }
}

/// Temperature vibe correlates with spirit warmth.
pub fn temperature_for(warmth: u8) -> TemperatureVibe {
    if warmth >= 8 {
        TemperatureVibe::Warm
    } else if warmth <= 3 {
        TemperatureVibe::Icy
    } else {
        TemperatureVibe::Ambient
    }
}

/// Fixed interpretation band for a warmth score, as reported by the spirit
/// warmth query.
pub fn warmth_interpretation(warmth: u8) -> &'static str {
    if warmth >= 8 {
        "very warm, golden, nostalgic"
    } else if warmth >= 6 {
        "warm, moderate, balanced"
    } else {
        "cool, crisp, clean"
    }
}

/// Secondary moods accumulated from the flavor scores, in fixed append
/// order. Consumers that take a prefix of the list rely on this order.
pub fn secondary_moods(
    richness: u8,
    complexity: ComplexityLevel,
    sweetness: u8,
) -> Vec<MoodDescriptor> {
    let mut moods = Vec::new();
    if richness >= 7 {
        moods.push(MoodDescriptor::Elegant);
    }
    if complexity == ComplexityLevel::Complex {
        moods.push(MoodDescriptor::Aromatic);
    }
    if sweetness >= 6 {
        moods.push(MoodDescriptor::Playful);
    }
    moods
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warmth_covers_all_seven_spirits() {
        let expected = [
            (SpiritBase::Rum, 9),
            (SpiritBase::Cognac, 9),
            (SpiritBase::Whiskey, 8),
            (SpiritBase::Mezcal, 8),
            (SpiritBase::Tequila, 7),
            (SpiritBase::Gin, 5),
            (SpiritBase::Vodka, 3),
        ];
        for (spirit, warmth) in expected {
            assert_eq!(spirit_warmth(spirit), warmth, "warmth for {spirit}");
        }
    }

    #[test]
    fn lighting_combines_warmth_and_complexity() {
        assert_eq!(
            lighting_for(9, ComplexityLevel::Complex),
            LightingStyle::GoldenHour
        );
        assert_eq!(
            lighting_for(9, ComplexityLevel::Simple),
            LightingStyle::MoodyAmber
        );
        assert_eq!(
            lighting_for(3, ComplexityLevel::Complex),
            LightingStyle::CrispBacklit
        );
        assert_eq!(
            lighting_for(3, ComplexityLevel::Simple),
            LightingStyle::CrispBacklit
        );
        assert_eq!(
            lighting_for(6, ComplexityLevel::Moderate),
            LightingStyle::WarmSideLit
        );
    }

    #[test]
    fn bitterness_lighting_thresholds() {
        assert_eq!(bitterness_lighting(8), LightingStyle::DramaticShadow);
        assert_eq!(bitterness_lighting(7), LightingStyle::DramaticShadow);
        assert_eq!(bitterness_lighting(5), LightingStyle::WarmSideLit);
        assert_eq!(bitterness_lighting(4), LightingStyle::DiffusedSoft);
        assert_eq!(bitterness_lighting(0), LightingStyle::DiffusedSoft);
    }

    #[test]
    fn texture_priority_cream_then_fizz_then_ice() {
        assert_eq!(
            texture_from_components(true, true, true),
            TextureQuality::Creamy
        );
        assert_eq!(
            texture_from_components(false, true, true),
            TextureQuality::Effervescent
        );
        assert_eq!(
            texture_from_components(false, true, false),
            TextureQuality::Crystalline
        );
        assert_eq!(
            texture_from_components(false, false, false),
            TextureQuality::Translucent
        );
    }

    #[test]
    fn temperature_bands() {
        assert_eq!(temperature_for(9), TemperatureVibe::Warm);
        assert_eq!(temperature_for(8), TemperatureVibe::Warm);
        assert_eq!(temperature_for(5), TemperatureVibe::Ambient);
        assert_eq!(temperature_for(3), TemperatureVibe::Icy);
    }

    #[test]
    fn warmth_interpretation_bands() {
        assert_eq!(warmth_interpretation(9), "very warm, golden, nostalgic");
        assert_eq!(warmth_interpretation(8), "very warm, golden, nostalgic");
        assert_eq!(warmth_interpretation(7), "warm, moderate, balanced");
        assert_eq!(warmth_interpretation(6), "warm, moderate, balanced");
        assert_eq!(warmth_interpretation(5), "cool, crisp, clean");
        assert_eq!(warmth_interpretation(0), "cool, crisp, clean");
    }

    #[test]
    fn secondary_moods_accumulate_in_fixed_order() {
        assert_eq!(
            secondary_moods(8, ComplexityLevel::Complex, 7),
            vec![
                MoodDescriptor::Elegant,
                MoodDescriptor::Aromatic,
                MoodDescriptor::Playful
            ]
        );
        assert_eq!(secondary_moods(2, ComplexityLevel::Simple, 1), Vec::new());
        assert_eq!(
            secondary_moods(7, ComplexityLevel::Simple, 6),
            vec![MoodDescriptor::Elegant, MoodDescriptor::Playful]
        );
    }
}
