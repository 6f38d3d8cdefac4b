//! Aperitif MCP (Model Context Protocol) Server
//!
//! Exposes the cocktail aesthetics catalog to AI assistants over stdio:
//! flavor profiles, deterministic visual parameters, prompt enhancement,
//! and flavor/mood/spirit queries.
//!
//! The catalog is built once at startup from the built-in taxonomy and
//! shared immutably across tool calls; every tool is a pure read.

mod server;

pub use server::{
    AestheticsServer, CocktailNameInput, CocktailSummary, EnhancePromptInput,
    EnhancePromptResult, FlavorProfileBody, FlavorSearchInput, FlavorSearchResult,
    ListCocktailsResult,
    MoodSearchInput, MoodSearchResult, NotFoundResult, ProfileResult, SearchMatch,
    SpiritWarmthInput, SpiritWarmthResult, VisualParametersResult, VisualSummary,
};
