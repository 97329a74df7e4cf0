//! Rendering of recipes for tool responses.

use crate::recipe::RecipeInstance;
use crate::store::SavedRecipe;
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Output format requested by a tool caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable Markdown (default)
    #[default]
    Markdown,
    /// Pretty-printed JSON, for programmatic clients
    Json,
}

/// Serialize any response payload as pretty JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Failed to serialize response: {}", e))
}

/// Render instances as a numbered Markdown list of recipe cards.
pub fn render_instances(heading: &str, recipes: &[RecipeInstance]) -> String {
    let mut out = format!("# {}\n", heading);

    for (i, recipe) in recipes.iter().enumerate() {
        let _ = write!(
            out,
            "\n## {}. {} (`{}`)\n\n{}\n\n**Time:** {} min · **Difficulty:** {}",
            i + 1,
            recipe.title,
            recipe.id,
            recipe.description,
            recipe.cooking_time,
            recipe.difficulty,
        );
        if !recipe.tags.is_empty() {
            let _ = write!(out, " · **Tags:** {}", recipe.tags.join(", "));
        }
        out.push('\n');

        if !recipe.matched_ingredients.is_empty() {
            let _ = writeln!(
                out,
                "\n**You have:** {} of {} ingredients ({})",
                recipe.matched_ingredients.len(),
                recipe.ingredients.len(),
                recipe.matched_ingredients.join(", ")
            );
        }

        out.push_str("\n**Ingredients:**\n");
        for ingredient in &recipe.ingredients {
            let marker = if recipe.matched_ingredients.contains(ingredient) {
                "x"
            } else {
                " "
            };
            let _ = writeln!(out, "- [{}] {}", marker, ingredient);
        }

        out.push_str("\n**Instructions:**\n");
        for (step, instruction) in recipe.instructions.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", step + 1, instruction);
        }
    }

    out
}

/// Render a user's saved recipes as a compact Markdown table.
pub fn render_saved(user_id: &str, saved: &[SavedRecipe]) -> String {
    if saved.is_empty() {
        return format!("No saved recipes for user '{}'.", user_id);
    }

    let mut out = format!("# Saved recipes for '{}' ({})\n\n", user_id, saved.len());
    out.push_str("| Id | Title | Time | Difficulty | Saved |\n");
    out.push_str("|---|---|---|---|---|\n");
    for recipe in saved {
        let _ = writeln!(
            out,
            "| `{}` | {} | {} min | {} | {} |",
            recipe.id,
            recipe.title,
            recipe.cooking_time,
            recipe.difficulty,
            recipe.saved_at.format("%Y-%m-%d %H:%M")
        );
    }
    out
}
