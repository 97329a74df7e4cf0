//! Shared server state: the engine, the saved-recipe store, and the RNG.

use crate::engine::RecipeEngine;
use crate::recipe::RecipeInstance;
use crate::store::RecipeStore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::Mutex;

/// State shared by every tool call.
///
/// The engine and catalog are read-only. The RNG is the only mutable piece and is
/// locked just for the synchronous engine call.
#[derive(Debug)]
pub struct ForgeState {
    engine: RecipeEngine,
    store: RecipeStore,
    rng: Mutex<StdRng>,
}

impl ForgeState {
    /// Create state with a fixed seed, or an entropy-seeded RNG when `seed` is `None`.
    pub fn new(engine: RecipeEngine, store: RecipeStore, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                tracing::info!("Using fixed RNG seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        Self {
            engine,
            store,
            rng: Mutex::new(rng),
        }
    }

    pub fn engine(&self) -> &RecipeEngine {
        &self.engine
    }

    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    pub async fn match_by_ingredients<S: AsRef<str>>(&self, ingredients: &[S]) -> Vec<RecipeInstance> {
        let mut rng = self.rng.lock().await;
        self.engine.match_by_ingredients(ingredients, &mut *rng)
    }

    pub async fn random_sample(&self, count: usize) -> Vec<RecipeInstance> {
        let mut rng = self.rng.lock().await;
        self.engine.random_sample(count, &mut *rng)
    }
}
