//! Recipe discovery tools: ingredient matching and random suggestions.

use crate::format::{OutputFormat, render_instances, to_json};
use crate::state::ForgeState;
use rmcp::schemars;
use serde::Deserialize;

/// Parameters for match_recipes tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MatchRecipesRequest {
    /// Ingredients on hand. Entries may themselves be comma-separated lists.
    pub ingredients: Vec<String>,
    /// Response format (default: markdown)
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

/// Parameters for random_recipes tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RandomRecipesRequest {
    /// Number of recipes to suggest (default: 3)
    #[serde(default)]
    pub count: Option<usize>,
    /// Response format (default: markdown)
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

/// Rank catalog recipes against the caller's ingredients.
pub async fn handle_match_recipes(
    state: &ForgeState,
    request: MatchRecipesRequest,
) -> Result<String, String> {
    let recipes = state.match_by_ingredients(request.ingredients.as_slice()).await;

    tracing::info!(
        "match_recipes: {} ingredients -> {} recipes",
        request.ingredients.len(),
        recipes.len()
    );

    match request.format.unwrap_or_default() {
        OutputFormat::Json => to_json(&recipes),
        OutputFormat::Markdown if recipes.is_empty() => Ok(format!(
            "No matching recipes for: {}.\n\n\
             Tips:\n\
             • Separate ingredients with commas, e.g. 'eggs, spaghetti, bacon'\n\
             • Use random_recipes for suggestions without ingredients",
            if request.ingredients.is_empty() {
                "(no ingredients given)".to_string()
            } else {
                request.ingredients.join(", ")
            }
        )),
        OutputFormat::Markdown => Ok(render_instances(
            &format!("Recipes for {}", request.ingredients.join(", ")),
            &recipes,
        )),
    }
}

/// Suggest random catalog recipes.
pub async fn handle_random_recipes(
    state: &ForgeState,
    request: RandomRecipesRequest,
) -> Result<String, String> {
    let count = request
        .count
        .unwrap_or(state.engine().options().default_sample_size);
    let recipes = state.random_sample(count).await;

    tracing::info!("random_recipes: requested {} -> {}", count, recipes.len());

    match request.format.unwrap_or_default() {
        OutputFormat::Json => to_json(&recipes),
        OutputFormat::Markdown if recipes.is_empty() => {
            Ok("No recipes to suggest.".to_string())
        }
        OutputFormat::Markdown => Ok(render_instances("Recipe suggestions", &recipes)),
    }
}
