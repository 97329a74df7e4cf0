//! Per-request recipe variants.
//!
//! A variant copies a template and perturbs its presentation: a fresh identifier,
//! a jittered cooking time, and a reshuffled tag order. The template is untouched.

use crate::recipe::{RecipeId, RecipeInstance, RecipeTemplate};
use crate::search::shuffle;
use chrono::{DateTime, Utc};
use rand::Rng;

/// Length of generated instance identifiers.
const ID_LENGTH: usize = 7;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Bounds applied to the cooking time of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantBounds {
    /// Maximum offset in minutes, applied symmetrically around the base time.
    pub jitter: u32,
    /// Floor for the adjusted cooking time.
    pub min_cooking_time: u32,
}

impl Default for VariantBounds {
    fn default() -> Self {
        Self {
            jitter: 5,
            min_cooking_time: 5,
        }
    }
}

/// Random base-36 token. Unique enough within a response; not a global identifier.
pub fn generate_id<R: Rng + ?Sized>(rng: &mut R) -> RecipeId {
    let token: String = (0..ID_LENGTH)
        .map(|_| char::from(ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())]))
        .collect();
    RecipeId::new(token)
}

/// Base time plus a uniform offset in `[-jitter, +jitter]`, never below the floor.
pub fn jitter_cooking_time<R: Rng + ?Sized>(base: u32, bounds: VariantBounds, rng: &mut R) -> u32 {
    let jitter = i64::from(bounds.jitter);
    let offset = rng.gen_range(-jitter..=jitter);
    let adjusted = (i64::from(base) + offset).max(i64::from(bounds.min_cooking_time));
    u32::try_from(adjusted).unwrap_or(u32::MAX)
}

/// Build a standalone instance from a template.
///
/// `matched` is attached as-is; pass an empty list for random samples.
pub fn synthesize<R: Rng + ?Sized>(
    template: &RecipeTemplate,
    matched: Vec<String>,
    bounds: VariantBounds,
    created_at: DateTime<Utc>,
    rng: &mut R,
) -> RecipeInstance {
    let id = generate_id(rng);
    let cooking_time = jitter_cooking_time(template.cooking_time, bounds, rng);

    let mut tags = template.tags.clone();
    shuffle(&mut tags, rng);

    RecipeInstance {
        id,
        title: template.title.clone(),
        description: template.description.clone(),
        ingredients: template.ingredients.clone(),
        instructions: template.instructions.clone(),
        cooking_time,
        difficulty: template.difficulty,
        tags,
        matched_ingredients: matched,
        created_at,
    }
}
