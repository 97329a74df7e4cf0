//! Saved-recipe tools. The caller is trusted to pass an already-authenticated user id.

use crate::format::{OutputFormat, render_saved, to_json};
use crate::recipe::RecipeInstance;
use crate::state::ForgeState;
use rmcp::schemars;
use serde::Deserialize;

/// Parameters for save_recipe tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SaveRecipeRequest {
    /// Owner of the saved recipe
    pub user_id: String,
    /// A recipe returned by match_recipes or random_recipes
    pub recipe: RecipeInstance,
}

/// Parameters for list_saved_recipes tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListSavedRequest {
    pub user_id: String,
    /// Response format (default: markdown)
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

/// Parameters for delete_saved_recipe tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DeleteSavedRequest {
    pub user_id: String,
    /// Store id of the saved recipe (shown by list_saved_recipes)
    pub id: String,
}

pub async fn handle_save_recipe(
    state: &ForgeState,
    request: SaveRecipeRequest,
) -> Result<String, String> {
    let saved = state
        .store()
        .save(&request.user_id, &request.recipe)
        .await
        .map_err(|e| e.to_string())?;

    Ok(format!(
        "Saved '{}' for user '{}' (id `{}`).",
        saved.title, saved.user_id, saved.id
    ))
}

pub async fn handle_list_saved(
    state: &ForgeState,
    request: ListSavedRequest,
) -> Result<String, String> {
    let saved = state.store().list(&request.user_id).await;

    match request.format.unwrap_or_default() {
        OutputFormat::Json => to_json(&saved),
        OutputFormat::Markdown => Ok(render_saved(&request.user_id, &saved)),
    }
}

pub async fn handle_delete_saved(
    state: &ForgeState,
    request: DeleteSavedRequest,
) -> Result<String, String> {
    let removed = state
        .store()
        .delete(&request.user_id, &request.id)
        .await
        .map_err(|e| e.to_string())?;

    Ok(format!("Removed '{}' (id `{}`).", removed.title, removed.id))
}
