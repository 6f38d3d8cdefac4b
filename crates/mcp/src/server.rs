//! MCP server exposing the cocktail aesthetics catalog.
//!
//! Tools mirror the catalog's query surface: listing, profile and visual
//! parameter lookup, prompt enhancement, flavor/mood search, and the spirit
//! warmth table. Domain misses (unknown cocktail or spirit) come back as a
//! structured `{"error": ...}` body in a successful tool result, never as a
//! protocol error.

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    schemars, tool, tool_handler, tool_router,
    transport::stdio,
    ErrorData as McpError, ServerHandler, ServiceExt,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use aperitif_core::{
    morphisms, Catalog, CocktailProfile, FlavorType, MoodDescriptor, SpiritBase, VisualParameters,
};

/// MCP server for the cocktail aesthetics catalog.
#[derive(Clone)]
pub struct AestheticsServer {
    catalog: Arc<Catalog>,
    tool_router: ToolRouter<Self>,
}

impl AestheticsServer {
    /// Server over the built-in taxonomy.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::builtin())
    }

    /// Server over an explicitly built catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            tool_router: Self::tool_router(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the server over stdin/stdout until the client disconnects.
    pub async fn run_stdio(self) -> anyhow::Result<()> {
        info!("starting MCP server with stdio transport");
        let service = self.serve(stdio()).await?;
        service.waiting().await?;
        info!("MCP server shutdown complete");
        Ok(())
    }
}

impl Default for AestheticsServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for AestheticsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Cocktail aesthetics lookup. Query cocktail flavor profiles and \
                 deterministic visual parameters (color, lighting, mood, composition, \
                 texture) to enhance image generation prompts."
                    .to_string(),
            ),
            ..Default::default()
        }
    }
}

// ============================================================================
// Tool inputs
// ============================================================================

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CocktailNameInput {
    #[schemars(description = "Name of the cocktail (case, spaces, and hyphens are ignored)")]
    pub cocktail_name: String,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct EnhancePromptInput {
    #[schemars(description = "The original image generation prompt")]
    pub base_prompt: String,
    #[schemars(description = "Name of the cocktail to take aesthetics from")]
    pub cocktail_name: String,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FlavorSearchInput {
    #[schemars(
        description = "Flavor type: bitter, sweet, sour, spirit_forward, herbal, fruity, creamy, spiced, or smoky"
    )]
    pub flavor: String,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct MoodSearchInput {
    #[schemars(
        description = "Mood descriptor: sophisticated, tropical, nostalgic, bold, elegant, playful, dark, or aromatic"
    )]
    pub mood: String,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SpiritWarmthInput {
    #[schemars(
        description = "Spirit type: rum, whiskey, vodka, gin, tequila, cognac, or mezcal"
    )]
    pub spirit_name: String,
}

// ============================================================================
// Tool outputs
// ============================================================================

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct NotFoundResult {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CocktailSummary {
    pub id: String,
    pub name: String,
    pub spirit_base: String,
    pub primary_flavor: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ListCocktailsResult {
    pub cocktails: Vec<CocktailSummary>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FlavorProfileBody {
    pub complexity: String,
    pub bitterness: u8,
    pub sweetness: u8,
    pub richness: u8,
    pub warmth_level: u8,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ProfileResult {
    pub name: String,
    pub spirit_base: String,
    pub primary_flavor: String,
    pub flavor_profile: FlavorProfileBody,
    pub description: String,
}

/// Flattened visual parameters, ready to drop into a prompt.
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct VisualSummary {
    pub primary_color: String,
    pub color_palette: Vec<String>,
    pub lighting: String,
    pub mood: String,
    pub secondary_moods: Vec<String>,
    pub composition: String,
    pub texture: String,
    pub temperature: String,
}

impl VisualSummary {
    fn from_visual(visual: &VisualParameters) -> Self {
        Self {
            primary_color: visual.primary_color_category.as_str().to_string(),
            color_palette: visual.color_palette.clone(),
            lighting: visual.lighting_style.as_str().to_string(),
            mood: visual.primary_mood.as_str().to_string(),
            secondary_moods: visual
                .secondary_moods
                .iter()
                .map(|mood| mood.as_str().to_string())
                .collect(),
            composition: visual.composition_strategy.as_str().to_string(),
            texture: visual.texture_quality.as_str().to_string(),
            temperature: visual.temperature_vibe.as_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct VisualParametersResult {
    pub cocktail: String,
    pub visual_parameters: VisualSummary,
    pub composition_strategy: String,
    pub temperature_vibe: String,
    pub mood_keywords: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct EnhancePromptResult {
    pub original_prompt: String,
    pub cocktail: String,
    pub color_direction: Vec<String>,
    pub lighting_style: String,
    pub mood_keywords: Vec<String>,
    pub composition_guide: String,
    pub texture_notes: String,
    pub temperature_vibe: String,
    pub suggested_enhancement: String,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SearchMatch {
    pub name: String,
    pub id: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FlavorSearchResult {
    pub flavor: String,
    pub matches: Vec<SearchMatch>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct MoodSearchResult {
    pub mood: String,
    pub matches: Vec<SearchMatch>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SpiritWarmthResult {
    pub spirit: String,
    pub warmth_level: u8,
    pub interpretation: String,
}

// ============================================================================
// Tools
// ============================================================================

#[tool_router]
impl AestheticsServer {
    /// List all cocktails in the catalog.
    #[tool(
        name = "list_cocktails",
        description = "Get the list of available cocktails with their primary characteristics"
    )]
    pub async fn list_cocktails(&self) -> Result<CallToolResult, McpError> {
        debug!("list_cocktails called");

        let cocktails: Vec<CocktailSummary> = self
            .catalog
            .iter()
            .map(|(id, profile)| CocktailSummary {
                id: id.to_string(),
                name: profile.name.clone(),
                spirit_base: profile.spirit_base.as_str().to_string(),
                primary_flavor: profile.primary_flavor.as_str().to_string(),
                description: profile.description.clone(),
            })
            .collect();

        let count = cocktails.len();
        json_result(&ListCocktailsResult { cocktails, count })
    }

    /// Detailed flavor profile for one cocktail.
    #[tool(
        name = "get_cocktail_profile",
        description = "Get the detailed flavor profile for a specific cocktail"
    )]
    pub async fn get_cocktail_profile(
        &self,
        Parameters(input): Parameters<CocktailNameInput>,
    ) -> Result<CallToolResult, McpError> {
        debug!(cocktail = %input.cocktail_name, "get_cocktail_profile called");

        let Some(profile) = self.catalog.get(&input.cocktail_name) else {
            return cocktail_not_found(&input.cocktail_name);
        };

        json_result(&ProfileResult {
            name: profile.name.clone(),
            spirit_base: profile.spirit_base.as_str().to_string(),
            primary_flavor: profile.primary_flavor.as_str().to_string(),
            flavor_profile: FlavorProfileBody {
                complexity: profile.flavor_profile.complexity.as_str().to_string(),
                bitterness: profile.flavor_profile.bitterness,
                sweetness: profile.flavor_profile.sweetness,
                richness: profile.flavor_profile.richness,
                warmth_level: profile.flavor_profile.warmth_level,
            },
            description: profile.description.clone(),
        })
    }

    /// Visual aesthetic parameters for one cocktail.
    #[tool(
        name = "get_visual_parameters",
        description = "Get visual aesthetic parameters (color, lighting, mood, composition, texture) for a cocktail"
    )]
    pub async fn get_visual_parameters(
        &self,
        Parameters(input): Parameters<CocktailNameInput>,
    ) -> Result<CallToolResult, McpError> {
        debug!(cocktail = %input.cocktail_name, "get_visual_parameters called");

        let Some(profile) = self.catalog.get(&input.cocktail_name) else {
            return cocktail_not_found(&input.cocktail_name);
        };
        let visual = &profile.visual_parameters;

        json_result(&VisualParametersResult {
            cocktail: profile.name.clone(),
            visual_parameters: VisualSummary::from_visual(visual),
            composition_strategy: visual.composition_strategy.as_str().to_string(),
            temperature_vibe: visual.temperature_vibe.as_str().to_string(),
            mood_keywords: owned_mood_keywords(visual),
        })
    }

    /// Combine a base prompt with a cocktail's visual parameters.
    #[tool(
        name = "enhance_prompt_with_cocktail",
        description = "Enhance an image generation prompt with a cocktail's deterministic visual aesthetics"
    )]
    pub async fn enhance_prompt_with_cocktail(
        &self,
        Parameters(input): Parameters<EnhancePromptInput>,
    ) -> Result<CallToolResult, McpError> {
        debug!(cocktail = %input.cocktail_name, "enhance_prompt_with_cocktail called");

        let Some(profile) = self.catalog.get(&input.cocktail_name) else {
            return cocktail_not_found(&input.cocktail_name);
        };
        let visual = &profile.visual_parameters;

        json_result(&EnhancePromptResult {
            original_prompt: input.base_prompt,
            cocktail: profile.name.clone(),
            color_direction: visual.color_palette.clone(),
            lighting_style: visual.lighting_style.as_str().to_string(),
            mood_keywords: owned_mood_keywords(visual),
            composition_guide: visual.composition_strategy.as_str().to_string(),
            texture_notes: visual.texture_quality.as_str().to_string(),
            temperature_vibe: visual.temperature_vibe.as_str().to_string(),
            suggested_enhancement: visual.suggested_enhancement(),
        })
    }

    /// Find cocktails by primary flavor.
    #[tool(
        name = "search_cocktails_by_flavor",
        description = "Find cocktails whose primary flavor matches the given flavor type"
    )]
    pub async fn search_cocktails_by_flavor(
        &self,
        Parameters(input): Parameters<FlavorSearchInput>,
    ) -> Result<CallToolResult, McpError> {
        debug!(flavor = %input.flavor, "search_cocktails_by_flavor called");

        let label = input.flavor.trim().to_lowercase();
        // An unrecognized flavor label is simply a search with no matches.
        let matches = match label.parse::<FlavorType>() {
            Ok(flavor) => search_matches(self.catalog.search_by_flavor(flavor)),
            Err(_) => Vec::new(),
        };

        let count = matches.len();
        json_result(&FlavorSearchResult {
            flavor: label,
            matches,
            count,
        })
    }

    /// Find cocktails by mood.
    #[tool(
        name = "search_cocktails_by_mood",
        description = "Find cocktails whose primary or secondary moods include the given mood descriptor"
    )]
    pub async fn search_cocktails_by_mood(
        &self,
        Parameters(input): Parameters<MoodSearchInput>,
    ) -> Result<CallToolResult, McpError> {
        debug!(mood = %input.mood, "search_cocktails_by_mood called");

        let label = input.mood.trim().to_lowercase();
        let matches = match label.parse::<MoodDescriptor>() {
            Ok(mood) => search_matches(self.catalog.search_by_mood(mood)),
            Err(_) => Vec::new(),
        };

        let count = matches.len();
        json_result(&MoodSearchResult {
            mood: label,
            matches,
            count,
        })
    }

    /// Warmth level of a spirit.
    #[tool(
        name = "get_spirit_warmth",
        description = "Get the warmth/nostalgia level of a spirit on a 0-10 scale, with an interpretation"
    )]
    pub async fn get_spirit_warmth(
        &self,
        Parameters(input): Parameters<SpiritWarmthInput>,
    ) -> Result<CallToolResult, McpError> {
        debug!(spirit = %input.spirit_name, "get_spirit_warmth called");

        // Unlike the internal warmth morphism, the boundary table has no
        // fallback: unrecognized spirits report not-found.
        match input.spirit_name.parse::<SpiritBase>() {
            Ok(spirit) => {
                let warmth = morphisms::spirit_warmth(spirit);
                json_result(&SpiritWarmthResult {
                    spirit: spirit.as_str().to_string(),
                    warmth_level: warmth,
                    interpretation: morphisms::warmth_interpretation(warmth).to_string(),
                })
            }
            Err(_) => json_result(&NotFoundResult {
                error: format!("Spirit '{}' not recognized", input.spirit_name),
            }),
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let content = serde_json::to_string_pretty(value)
        .map_err(|error| McpError::internal_error(error.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(content)]))
}

fn cocktail_not_found(name: &str) -> Result<CallToolResult, McpError> {
    json_result(&NotFoundResult {
        error: format!("Cocktail '{name}' not found"),
    })
}

fn owned_mood_keywords(visual: &VisualParameters) -> Vec<String> {
    visual
        .mood_keywords()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn search_matches(hits: Vec<(&str, &CocktailProfile)>) -> Vec<SearchMatch> {
    hits.into_iter()
        .map(|(id, profile)| SearchMatch {
            name: profile.name.clone(),
            id: id.to_string(),
            description: profile.description.clone(),
        })
        .collect()
}
