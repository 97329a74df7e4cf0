//! Ingredient-to-recipe matching.
//!
//! This module turns free-form ingredient lists into ranked, diversified recipe
//! candidates: normalization, symmetric substring scoring, and shuffled truncation.

pub(crate) mod normalize;
pub(crate) mod rank;
pub(crate) mod scoring;

pub use normalize::normalize_ingredients;
pub use rank::{diversify, shuffle};
pub use scoring::{ScoredCandidate, ingredient_matches, score_catalog, score_template};
