pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod recipe;
pub mod search;
pub mod server;
pub mod state;
pub mod store;
pub mod tools;
pub mod tracing;
pub mod variant;

pub use catalog::Catalog;
pub use config::Config;
pub use engine::{EngineOptions, RecipeEngine};
pub use recipe::{Difficulty, RecipeId, RecipeInstance, RecipeTemplate};
pub use server::RecipeServer;
pub use state::ForgeState;
pub use store::{RecipeStore, SavedRecipe};
