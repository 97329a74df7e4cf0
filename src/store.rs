//! User-scoped saved recipes.
//!
//! The store keeps the recipes a user chose to save from a response. Records are
//! keyed by a store-assigned id; each user may save a given instance id or title
//! at most once. With a backing path, the whole store is rewritten as JSON after
//! every mutation.

use crate::error::StoreError;
use crate::recipe::{Difficulty, RecipeId, RecipeInstance};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use uuid::Uuid;

/// A recipe persisted on behalf of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRecipe {
    /// Store-assigned identifier, used for deletion.
    pub id: String,
    pub user_id: String,
    /// Identifier of the instance this record was saved from.
    pub recipe_id: RecipeId,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub cooking_time: u32,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub saved_at: DateTime<Utc>,
}

/// Saved-recipe collection shared across tool calls.
#[derive(Debug)]
pub struct RecipeStore {
    records: RwLock<Vec<SavedRecipe>>,
    path: Option<PathBuf>,
}

impl RecipeStore {
    /// A store that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            path: None,
        }
    }

    /// Open a JSON-backed store. A missing file starts an empty store.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No saved recipes at {}, starting empty", path.display());
                Vec::new()
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        tracing::info!(
            "Opened recipe store at {} ({} saved)",
            path.display(),
            records.len()
        );

        Ok(Self {
            records: RwLock::new(records),
            path: Some(path),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Save an instance for a user.
    ///
    /// Fails if the user already saved the same instance id or a recipe with the same title.
    pub async fn save(
        &self,
        user_id: &str,
        recipe: &RecipeInstance,
    ) -> Result<SavedRecipe, StoreError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(StoreError::MissingField("user_id"));
        }
        if recipe.id.as_str().is_empty() {
            return Err(StoreError::MissingField("recipe.id"));
        }

        let mut records = self.records.write().await;
        let duplicate = records.iter().any(|saved| {
            saved.user_id == user_id
                && (saved.recipe_id == recipe.id || saved.title == recipe.title)
        });
        if duplicate {
            return Err(StoreError::AlreadySaved {
                title: recipe.title.clone(),
            });
        }

        let saved = SavedRecipe {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            recipe_id: recipe.id.clone(),
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            cooking_time: recipe.cooking_time,
            difficulty: recipe.difficulty,
            tags: recipe.tags.clone(),
            saved_at: Utc::now(),
        };

        records.push(saved.clone());
        if let Err(e) = self.persist(&records).await {
            records.pop();
            return Err(e);
        }

        tracing::debug!("Saved '{}' for user {}", saved.title, user_id);
        Ok(saved)
    }

    /// A user's saved recipes, newest first.
    pub async fn list(&self, user_id: &str) -> Vec<SavedRecipe> {
        let user_id = user_id.trim();
        let mut saved: Vec<SavedRecipe> = self
            .records
            .read()
            .await
            .iter()
            .filter(|saved| saved.user_id == user_id)
            .cloned()
            .collect();
        saved.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        saved
    }

    /// Delete one of the user's saved recipes by its store id.
    pub async fn delete(&self, user_id: &str, id: &str) -> Result<SavedRecipe, StoreError> {
        let user_id = user_id.trim();
        let mut records = self.records.write().await;

        let position = records
            .iter()
            .position(|saved| saved.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if records[position].user_id != user_id {
            return Err(StoreError::NotAuthorized(id.to_string()));
        }

        let removed = records.remove(position);
        if let Err(e) = self.persist(&records).await {
            records.insert(position, removed);
            return Err(e);
        }

        tracing::debug!("Deleted '{}' for user {}", removed.title, user_id);
        Ok(removed)
    }

    async fn persist(&self, records: &[SavedRecipe]) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let io_error = |source| StoreError::Io {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
        }

        let json = serde_json::to_vec_pretty(records)?;
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await.map_err(io_error)?;
        tokio::fs::rename(&tmp, path).await.map_err(io_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};

    fn instance(id: &str, title: &str) -> RecipeInstance {
        RecipeInstance {
            id: RecipeId::new(id),
            title: title.to_string(),
            description: String::new(),
            ingredients: vec!["rice".to_string()],
            instructions: vec!["Cook.".to_string()],
            cooking_time: 20,
            difficulty: Difficulty::Easy,
            tags: vec![],
            matched_ingredients: vec![],
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_save_and_list() {
        let store = RecipeStore::in_memory();
        let saved = store.save("alice", &instance("a1", "Rice")).await.unwrap();

        check!(saved.user_id == "alice");
        check!(saved.recipe_id.as_str() == "a1");
        check!(store.list("alice").await == vec![saved]);
        check!(store.list("bob").await.is_empty());
    }

    #[tokio::test]
    async fn test_rejects_duplicates_per_user() {
        let store = RecipeStore::in_memory();
        store.save("alice", &instance("a1", "Rice")).await.unwrap();

        let same_id = store.save("alice", &instance("a1", "Other")).await;
        check!(let Err(StoreError::AlreadySaved { .. }) = same_id);

        let same_title = store.save("alice", &instance("a2", "Rice")).await;
        check!(let Err(StoreError::AlreadySaved { .. }) = same_title);

        check!(store.save("bob", &instance("a1", "Rice")).await.is_ok());
    }

    #[tokio::test]
    async fn test_rejects_missing_user() {
        let store = RecipeStore::in_memory();
        let result = store.save("  ", &instance("a1", "Rice")).await;
        check!(let Err(StoreError::MissingField("user_id")) = result);
    }

    #[tokio::test]
    async fn test_delete_checks_ownership() {
        let store = RecipeStore::in_memory();
        let saved = store.save("alice", &instance("a1", "Rice")).await.unwrap();

        check!(let Err(StoreError::NotAuthorized(_)) = store.delete("bob", &saved.id).await);
        check!(let Err(StoreError::NotFound(_)) = store.delete("alice", "missing").await);

        let removed = store.delete("alice", &saved.id).await.unwrap();
        check!(removed.id == saved.id);
        check!(store.list("alice").await.is_empty());
    }

    #[tokio::test]
    async fn test_save_rolls_back_when_write_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecipeStore::open(dir.path().join("blocked").join("saved.json"))
            .await
            .unwrap();
        // A plain file where the store directory should be makes every write fail.
        std::fs::write(dir.path().join("blocked"), "").unwrap();

        let result = store.save("alice", &instance("a1", "Rice")).await;
        let_assert!(Err(StoreError::Io { path, .. }) = result);
        check!(path.ends_with("blocked/saved.json"));
        check!(store.list("alice").await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_restores_record_when_write_fails() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data");
        let store = RecipeStore::open(data.join("saved.json")).await.unwrap();
        let first = store.save("alice", &instance("a1", "Rice")).await.unwrap();
        let second = store.save("alice", &instance("a2", "Soup")).await.unwrap();

        std::fs::remove_dir_all(&data).unwrap();
        std::fs::write(&data, "").unwrap();

        let result = store.delete("alice", &first.id).await;
        check!(let Err(StoreError::Io { .. }) = result);

        let ids: Vec<String> = store.list("alice").await.into_iter().map(|s| s.id).collect();
        check!(ids.len() == 2);
        check!(ids.contains(&first.id));
        check!(ids.contains(&second.id));
    }
}
