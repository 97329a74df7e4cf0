//! MCP server exposing the recipe engine and saved-recipe store as tools.

use crate::state::ForgeState;
use crate::tools::recipes::{
    MatchRecipesRequest, RandomRecipesRequest, handle_match_recipes, handle_random_recipes,
};
use crate::tools::saved::{
    DeleteSavedRequest, ListSavedRequest, SaveRecipeRequest, handle_delete_saved,
    handle_list_saved, handle_save_recipe,
};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars::{self, JsonSchema, generate::SchemaSettings},
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP Server for ingredient-based recipe suggestions
#[derive(Clone)]
pub struct RecipeServer {
    /// Shared engine, store and RNG
    state: Arc<ForgeState>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for RecipeServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeServer")
            .field("state", &self.state)
            .finish()
    }
}

#[tool_router]
impl RecipeServer {
    pub fn new(state: Arc<ForgeState>) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    pub fn state(&self) -> &Arc<ForgeState> {
        &self.state
    }

    #[tool(
        description = "Find catalog recipes for the ingredients you have. Matching is case-insensitive substring containment; results are the best-scoring recipes in a varied order, each listing which of its ingredients you already have. Returns at most 6 recipes.",
        input_schema = inline_schema_for_type::<MatchRecipesRequest>()
    )]
    async fn match_recipes(
        &self,
        Parameters(request): Parameters<MatchRecipesRequest>,
    ) -> std::result::Result<String, String> {
        handle_match_recipes(&self.state, request).await
    }

    #[tool(
        description = "Suggest random recipes from the catalog, without ingredient matching.",
        input_schema = inline_schema_for_type::<RandomRecipesRequest>()
    )]
    async fn random_recipes(
        &self,
        Parameters(request): Parameters<RandomRecipesRequest>,
    ) -> std::result::Result<String, String> {
        handle_random_recipes(&self.state, request).await
    }

    #[tool(
        description = "Save a recipe returned by match_recipes or random_recipes (pass it as JSON) for a user. A user cannot save the same recipe id or title twice."
    )]
    async fn save_recipe(
        &self,
        Parameters(request): Parameters<SaveRecipeRequest>,
    ) -> std::result::Result<String, String> {
        handle_save_recipe(&self.state, request).await
    }

    #[tool(
        description = "List a user's saved recipes, newest first.",
        input_schema = inline_schema_for_type::<ListSavedRequest>()
    )]
    async fn list_saved_recipes(
        &self,
        Parameters(request): Parameters<ListSavedRequest>,
    ) -> std::result::Result<String, String> {
        handle_list_saved(&self.state, request).await
    }

    #[tool(description = "Delete one of a user's saved recipes by its saved id.")]
    async fn delete_saved_recipe(
        &self,
        Parameters(request): Parameters<DeleteSavedRequest>,
    ) -> std::result::Result<String, String> {
        handle_delete_saved(&self.state, request).await
    }
}

#[tool_handler]
impl ServerHandler for RecipeServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.protocol_version = ProtocolVersion::V_2024_11_05;
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info = Implementation::from_build_env();
        info.instructions = Some(format!(
            "recipe-forge: Recipe suggestions from the ingredients you have, over a catalog of {} recipes. \
             Use match_recipes with a list of ingredients, or random_recipes for inspiration. \
             Results vary between calls. Save favorites with save_recipe.",
            self.state.engine().catalog().len()
        ));
        info
    }
}

/// Generate an inline JSON schema for MCP tools
///
/// Unlike rmcp's default `schema_for_type()`, this function sets `inline_subschemas = true`
/// to generate inline enum definitions instead of $ref patterns. This ensures MCP Inspector
/// displays the output format as a dropdown rather than a raw JSON input field.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();

    match serde_json::to_value(schema) {
        Ok(serde_json::Value::Object(object)) => Arc::new(object),
        _ => Arc::new(JsonObject::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Catalog, RecipeEngine, RecipeStore};
    use assert2::{check, let_assert};

    #[test]
    fn test_get_info_advertises_tools_and_catalog_size() {
        let engine = RecipeEngine::new(Arc::new(Catalog::builtin().unwrap()));
        let state = Arc::new(ForgeState::new(engine, RecipeStore::in_memory(), Some(1)));
        let info = RecipeServer::new(state).get_info();

        check!(info.protocol_version == ProtocolVersion::V_2024_11_05);
        check!(info.capabilities.tools.is_some());
        let_assert!(Some(instructions) = info.instructions);
        check!(instructions.contains("catalog of 30 recipes"));
    }
}
