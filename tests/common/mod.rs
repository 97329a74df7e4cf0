//! Shared test fixtures for integration tests.
//!
//! # Available Fixtures
//!
//! - `fixture_catalog`: a small hand-written catalog with known ingredient overlaps
//! - `builtin_catalog`: the bundled 30-recipe catalog
//! - `engine` / `builtin_engine`: default-option engines over those catalogs
//! - `forge_state`: seeded server state over the fixture catalog with an in-memory store

#![allow(dead_code)] // Fixtures are shared across integration test crates

use recipe_forge::{Catalog, Difficulty, ForgeState, RecipeEngine, RecipeStore, RecipeTemplate};
use rstest::fixture;
use std::sync::Arc;

/// Seed used by fixtures that need a reproducible RNG.
pub const SEED: u64 = 0x5EED;

pub fn template(
    title: &str,
    ingredients: &[&str],
    cooking_time: u32,
    tags: &[&str],
) -> RecipeTemplate {
    RecipeTemplate {
        title: title.to_string(),
        description: format!("{} for testing.", title),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        instructions: vec!["Prepare.".to_string(), "Serve.".to_string()],
        cooking_time,
        difficulty: Difficulty::Easy,
        tags: tags.iter().map(|s| s.to_string()).collect(),
    }
}

/// Twelve recipes: more than the candidate pool, with overlapping staples.
#[fixture]
pub fn fixture_catalog() -> Arc<Catalog> {
    let templates = vec![
        template(
            "Classic Spaghetti Carbonara",
            &["spaghetti", "eggs", "pecorino romano", "pancetta", "black pepper", "salt"],
            20,
            &["Italian", "Pasta", "Dinner", "Quick"],
        ),
        template("Boiled Eggs", &["eggs", "salt"], 10, &["Breakfast"]),
        template("Buttered Toast", &["bread", "butter"], 5, &["Breakfast", "Quick"]),
        template(
            "Tomato Salad",
            &["cherry tomatoes", "olive oil", "basil", "salt"],
            10,
            &["Salad", "Vegan"],
        ),
        template(
            "Garlic Rice",
            &["rice", "garlic", "butter", "salt"],
            25,
            &["Side"],
        ),
        template(
            "French Omelette",
            &["eggs", "butter", "chives", "salt", "black pepper"],
            10,
            &["Breakfast", "French"],
        ),
        template(
            "Pancakes",
            &["flour", "milk", "eggs", "sugar", "baking powder", "butter"],
            20,
            &["Breakfast", "Sweet"],
        ),
        template(
            "Guacamole",
            &["avocado", "lime", "onion", "cilantro", "salt"],
            10,
            &["Mexican", "Dip"],
        ),
        template(
            "Lentil Soup",
            &["red lentils", "onion", "carrot", "garlic", "vegetable broth"],
            40,
            &["Soup", "Vegan"],
        ),
        template(
            "Beef Stew",
            &["beef chuck", "potatoes", "carrots", "onion", "beef broth", "tomato paste"],
            120,
            &["Comfort Food", "Dinner"],
        ),
        template("Steamed Rice", &["rice", "water"], 15, &["Side"]),
        template(
            "Fruit Salad",
            &["apple", "banana", "grapes", "honey"],
            5,
            &["Dessert", "Healthy"],
        ),
    ];
    Arc::new(Catalog::from_templates(templates).expect("fixture catalog is valid"))
}

#[fixture]
pub fn builtin_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin().expect("bundled catalog is valid"))
}

#[fixture]
pub fn engine(fixture_catalog: Arc<Catalog>) -> RecipeEngine {
    RecipeEngine::new(fixture_catalog)
}

#[fixture]
pub fn builtin_engine(builtin_catalog: Arc<Catalog>) -> RecipeEngine {
    RecipeEngine::new(builtin_catalog)
}

#[fixture]
pub fn forge_state(engine: RecipeEngine) -> Arc<ForgeState> {
    Arc::new(ForgeState::new(engine, RecipeStore::in_memory(), Some(SEED)))
}
