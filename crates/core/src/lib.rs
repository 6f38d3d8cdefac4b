//! Core domain for the cocktail aesthetics service: closed categorical
//! vocabularies, authored taxonomy records, and the deterministic mappings
//! that derive visual parameters from them.

pub mod catalog;
pub mod data;
pub mod errors;
pub mod morphisms;
pub mod profile;
pub mod record;
pub mod taxonomy;

pub use catalog::{normalize_key, Catalog};
pub use data::builtin_taxonomy;
pub use errors::DomainError;
pub use profile::{CocktailProfile, FlavorProfile, VisualParameters};
pub use record::CocktailRecord;
pub use taxonomy::{
    ColorCategory, ComplexityLevel, CompositionApproach, FlavorType, LightingStyle,
    MoodDescriptor, SpiritBase, TemperatureVibe, TextureQuality,
};
