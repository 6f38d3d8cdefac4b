//! Closed categorical vocabularies for cocktail aesthetics.
//!
//! Every enum serializes as its lowercase snake_case label. The label sets
//! are fixed: parsing an unknown label is an error, never a silent default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Primary spirit in a cocktail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpiritBase {
    Rum,
    Whiskey,
    Vodka,
    Gin,
    Tequila,
    Cognac,
    Mezcal,
}

impl SpiritBase {
    pub const ALL: [SpiritBase; 7] = [
        SpiritBase::Rum,
        SpiritBase::Whiskey,
        SpiritBase::Vodka,
        SpiritBase::Gin,
        SpiritBase::Tequila,
        SpiritBase::Cognac,
        SpiritBase::Mezcal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SpiritBase::Rum => "rum",
            SpiritBase::Whiskey => "whiskey",
            SpiritBase::Vodka => "vodka",
            SpiritBase::Gin => "gin",
            SpiritBase::Tequila => "tequila",
            SpiritBase::Cognac => "cognac",
            SpiritBase::Mezcal => "mezcal",
        }
    }
}

impl FromStr for SpiritBase {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rum" => Ok(SpiritBase::Rum),
            "whiskey" => Ok(SpiritBase::Whiskey),
            "vodka" => Ok(SpiritBase::Vodka),
            "gin" => Ok(SpiritBase::Gin),
            "tequila" => Ok(SpiritBase::Tequila),
            "cognac" => Ok(SpiritBase::Cognac),
            "mezcal" => Ok(SpiritBase::Mezcal),
            _ => Err(DomainError::UnknownSpirit(value.to_string())),
        }
    }
}

impl fmt::Display for SpiritBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primary flavor characteristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlavorType {
    Bitter,
    Sweet,
    Sour,
    SpiritForward,
    Herbal,
    Fruity,
    Creamy,
    Spiced,
    Smoky,
}

impl FlavorType {
    pub fn as_str(self) -> &'static str {
        match self {
            FlavorType::Bitter => "bitter",
            FlavorType::Sweet => "sweet",
            FlavorType::Sour => "sour",
            FlavorType::SpiritForward => "spirit_forward",
            FlavorType::Herbal => "herbal",
            FlavorType::Fruity => "fruity",
            FlavorType::Creamy => "creamy",
            FlavorType::Spiced => "spiced",
            FlavorType::Smoky => "smoky",
        }
    }
}

impl FromStr for FlavorType {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bitter" => Ok(FlavorType::Bitter),
            "sweet" => Ok(FlavorType::Sweet),
            "sour" => Ok(FlavorType::Sour),
            "spirit_forward" => Ok(FlavorType::SpiritForward),
            "herbal" => Ok(FlavorType::Herbal),
            "fruity" => Ok(FlavorType::Fruity),
            "creamy" => Ok(FlavorType::Creamy),
            "spiced" => Ok(FlavorType::Spiced),
            "smoky" => Ok(FlavorType::Smoky),
            _ => Err(DomainError::UnknownFlavor(value.to_string())),
        }
    }
}

impl fmt::Display for FlavorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flavor and ingredient complexity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityLevel {
    /// 2-3 ingredients.
    Simple,
    /// 4-5 ingredients.
    Moderate,
    /// 6+ ingredients with layering.
    Complex,
}

impl ComplexityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ComplexityLevel::Simple => "simple",
            ComplexityLevel::Moderate => "moderate",
            ComplexityLevel::Complex => "complex",
        }
    }
}

impl FromStr for ComplexityLevel {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(ComplexityLevel::Simple),
            "moderate" => Ok(ComplexityLevel::Moderate),
            "complex" => Ok(ComplexityLevel::Complex),
            _ => Err(DomainError::UnknownComplexity(value.to_string())),
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// High-level color grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorCategory {
    Amber,
    Ruby,
    Golden,
    Clear,
    Dark,
    Tropical,
    Green,
    Purple,
}

impl ColorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorCategory::Amber => "amber",
            ColorCategory::Ruby => "ruby",
            ColorCategory::Golden => "golden",
            ColorCategory::Clear => "clear",
            ColorCategory::Dark => "dark",
            ColorCategory::Tropical => "tropical",
            ColorCategory::Green => "green",
            ColorCategory::Purple => "purple",
        }
    }
}

/// Lighting approach that suits the cocktail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightingStyle {
    WarmSideLit,
    TikiTorch,
    GoldenHour,
    MoodyAmber,
    CrispBacklit,
    NeonAccent,
    DiffusedSoft,
    DramaticShadow,
}

impl LightingStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            LightingStyle::WarmSideLit => "warm_side_lit",
            LightingStyle::TikiTorch => "tiki_torch",
            LightingStyle::GoldenHour => "golden_hour",
            LightingStyle::MoodyAmber => "moody_amber",
            LightingStyle::CrispBacklit => "crisp_backlit",
            LightingStyle::NeonAccent => "neon_accent",
            LightingStyle::DiffusedSoft => "diffused_soft",
            LightingStyle::DramaticShadow => "dramatic_shadow",
        }
    }
}

/// Emotional/aesthetic quality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodDescriptor {
    Sophisticated,
    Tropical,
    Nostalgic,
    Bold,
    Elegant,
    Playful,
    Dark,
    Aromatic,
}

impl MoodDescriptor {
    pub fn as_str(self) -> &'static str {
        match self {
            MoodDescriptor::Sophisticated => "sophisticated",
            MoodDescriptor::Tropical => "tropical",
            MoodDescriptor::Nostalgic => "nostalgic",
            MoodDescriptor::Bold => "bold",
            MoodDescriptor::Elegant => "elegant",
            MoodDescriptor::Playful => "playful",
            MoodDescriptor::Dark => "dark",
            MoodDescriptor::Aromatic => "aromatic",
        }
    }
}

impl FromStr for MoodDescriptor {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sophisticated" => Ok(MoodDescriptor::Sophisticated),
            "tropical" => Ok(MoodDescriptor::Tropical),
            "nostalgic" => Ok(MoodDescriptor::Nostalgic),
            "bold" => Ok(MoodDescriptor::Bold),
            "elegant" => Ok(MoodDescriptor::Elegant),
            "playful" => Ok(MoodDescriptor::Playful),
            "dark" => Ok(MoodDescriptor::Dark),
            "aromatic" => Ok(MoodDescriptor::Aromatic),
            _ => Err(DomainError::UnknownMood(value.to_string())),
        }
    }
}

impl fmt::Display for MoodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual composition strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositionApproach {
    Balanced,
    Layered,
    Minimalist,
    Dramatic,
    GarnishFocused,
}

impl CompositionApproach {
    pub fn as_str(self) -> &'static str {
        match self {
            CompositionApproach::Balanced => "balanced",
            CompositionApproach::Layered => "layered",
            CompositionApproach::Minimalist => "minimalist",
            CompositionApproach::Dramatic => "dramatic",
            CompositionApproach::GarnishFocused => "garnish_focused",
        }
    }
}

/// Surface and transparency characteristics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureQuality {
    Smooth,
    Crystalline,
    Creamy,
    Oily,
    Effervescent,
    Translucent,
    Opaque,
    Foamy,
}

impl TextureQuality {
    pub fn as_str(self) -> &'static str {
        match self {
            TextureQuality::Smooth => "smooth",
            TextureQuality::Crystalline => "crystalline",
            TextureQuality::Creamy => "creamy",
            TextureQuality::Oily => "oily",
            TextureQuality::Effervescent => "effervescent",
            TextureQuality::Translucent => "translucent",
            TextureQuality::Opaque => "opaque",
            TextureQuality::Foamy => "foamy",
        }
    }
}

/// Thermal quality conveyed by the drink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureVibe {
    Warm,
    Hot,
    Cool,
    Icy,
    Ambient,
}

impl TemperatureVibe {
    pub fn as_str(self) -> &'static str {
        match self {
            TemperatureVibe::Warm => "warm",
            TemperatureVibe::Hot => "hot",
            TemperatureVibe::Cool => "cool",
            TemperatureVibe::Icy => "icy",
            TemperatureVibe::Ambient => "ambient",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spirit_labels_round_trip_through_parsing() {
        for spirit in SpiritBase::ALL {
            let parsed: SpiritBase = spirit.as_str().parse().expect("label parses");
            assert_eq!(parsed, spirit);
        }
    }

    #[test]
    fn parsing_normalizes_case_and_whitespace() {
        assert_eq!(" Mezcal ".parse::<SpiritBase>(), Ok(SpiritBase::Mezcal));
        assert_eq!(
            "SPIRIT_FORWARD".parse::<FlavorType>(),
            Ok(FlavorType::SpiritForward)
        );
        assert_eq!(
            "Moderate".parse::<ComplexityLevel>(),
            Ok(ComplexityLevel::Moderate)
        );
    }

    #[test]
    fn unknown_labels_fail_with_named_errors() {
        assert_eq!(
            "absinthe".parse::<SpiritBase>(),
            Err(DomainError::UnknownSpirit("absinthe".to_string()))
        );
        assert_eq!(
            "umami".parse::<FlavorType>(),
            Err(DomainError::UnknownFlavor("umami".to_string()))
        );
        assert_eq!(
            "baroque".parse::<ComplexityLevel>(),
            Err(DomainError::UnknownComplexity("baroque".to_string()))
        );
        assert_eq!(
            "wistful".parse::<MoodDescriptor>(),
            Err(DomainError::UnknownMood("wistful".to_string()))
        );
    }

    #[test]
    fn serde_labels_match_as_str() {
        let json = serde_json::to_string(&LightingStyle::GoldenHour).expect("serialize");
        assert_eq!(json, "\"golden_hour\"");
        let json = serde_json::to_string(&FlavorType::SpiritForward).expect("serialize");
        assert_eq!(json, "\"spirit_forward\"");
        let json = serde_json::to_string(&CompositionApproach::GarnishFocused).expect("serialize");
        assert_eq!(json, "\"garnish_focused\"");
    }
}
