//! Read-only recipe catalog.
//!
//! A [`Catalog`] is validated once at construction and never mutated afterwards, so a
//! single `Arc<Catalog>` can back any number of concurrent queries without locking.

use crate::error::CatalogError;
use crate::recipe::RecipeTemplate;
use serde::Deserialize;
use std::path::Path;

/// Bundled dataset used when no catalog file is configured.
const BUILTIN_CATALOG: &str = include_str!("../data/recipes.json");

/// Ordered, immutable collection of recipe templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    templates: Vec<RecipeTemplate>,
}

/// TOML catalogs list templates as `[[recipes]]` tables.
#[derive(Deserialize)]
struct TomlCatalog {
    recipes: Vec<RecipeTemplate>,
}

impl Catalog {
    /// Build a catalog, rejecting templates that break the data-model invariants.
    pub fn from_templates(templates: Vec<RecipeTemplate>) -> Result<Self, CatalogError> {
        for (index, template) in templates.iter().enumerate() {
            if let Some(reason) = invalid_reason(template) {
                return Err(CatalogError::InvalidTemplate {
                    index,
                    title: template.title.clone(),
                    reason,
                });
            }
        }
        Ok(Self { templates })
    }

    /// The bundled 30-recipe catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a JSON array of templates.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let templates: Vec<RecipeTemplate> = serde_json::from_str(json)?;
        Self::from_templates(templates)
    }

    /// Parse a TOML document of `[[recipes]]` tables.
    pub fn from_toml(source: &str) -> Result<Self, CatalogError> {
        let parsed: TomlCatalog = toml::from_str(source)?;
        Self::from_templates(parsed.recipes)
    }

    /// Load a catalog file, choosing the parser by extension.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, CatalogError> = match extension.as_deref() {
            Some("json") => Self::from_json,
            Some("toml") => Self::from_toml,
            _ => {
                return Err(CatalogError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = parse(&contents)?;
        tracing::debug!(
            "Loaded {} recipes from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn templates(&self) -> &[RecipeTemplate] {
        &self.templates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RecipeTemplate> {
        self.templates.iter()
    }

    /// Find a template by title, ignoring case.
    pub fn get(&self, title: &str) -> Option<&RecipeTemplate> {
        let title = title.trim();
        self.templates
            .iter()
            .find(|template| template.title.eq_ignore_ascii_case(title))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a RecipeTemplate;
    type IntoIter = std::slice::Iter<'a, RecipeTemplate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn invalid_reason(template: &RecipeTemplate) -> Option<&'static str> {
    if template.title.trim().is_empty() {
        Some("title is empty")
    } else if template.ingredients.is_empty() {
        Some("ingredient list is empty")
    } else if template.instructions.is_empty() {
        Some("instruction list is empty")
    } else if template.cooking_time == 0 {
        Some("cooking time must be positive")
    } else {
        None
    }
}
