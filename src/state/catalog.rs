use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use strsim::jaro_winkler;
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::IngredientSuggestion;
use crate::planner::constants::FUZZY_MATCH_THRESHOLD;

/// Reference list shipped with the binary.
const BUNDLED_CATALOG: &str = include_str!("../../data/ingredients.json");

/// Where catalog entries come from.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    Bundled,
    File(PathBuf),
    Inline(String),
}

/// Read-only list of ingredient suggestions.
///
/// Entries are parsed on first access and kept for the lifetime of the
/// catalog. A source that cannot be read or parsed yields an empty catalog.
#[derive(Debug)]
pub struct SuggestionCatalog {
    source: CatalogSource,
    items: OnceLock<Vec<IngredientSuggestion>>,
}

impl SuggestionCatalog {
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            items: OnceLock::new(),
        }
    }

    pub fn bundled() -> Self {
        Self::new(CatalogSource::Bundled)
    }

    /// Build a catalog that is already loaded.
    pub fn from_items(items: Vec<IngredientSuggestion>) -> Self {
        Self {
            source: CatalogSource::Inline(String::new()),
            items: OnceLock::from(items),
        }
    }

    pub fn items(&self) -> &[IngredientSuggestion] {
        self.items.get_or_init(|| match load_source(&self.source) {
            Ok(items) => {
                debug!(count = items.len(), "suggestion catalog loaded");
                items
            }
            Err(e) => {
                warn!(source = ?self.source, error = %e, "failed to load suggestion catalog");
                Vec::new()
            }
        })
    }

    /// Case-insensitive exact name lookup.
    pub fn find_by_name(&self, name: &str) -> Option<&IngredientSuggestion> {
        let needle = name.trim().to_lowercase();
        self.items().iter().find(|s| s.name.to_lowercase() == needle)
    }

    /// Entries whose names resemble `name`, most similar first.
    pub fn closest_by_name(&self, name: &str, limit: usize) -> Vec<&IngredientSuggestion> {
        let needle = name.trim().to_lowercase();
        let mut candidates: Vec<(&IngredientSuggestion, f64)> = self
            .items()
            .iter()
            .map(|s| (s, jaro_winkler(&needle, &s.name.to_lowercase())))
            .filter(|(_, sim)| *sim >= FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
        candidates.truncate(limit);
        candidates.into_iter().map(|(s, _)| s).collect()
    }
}

fn load_source(source: &CatalogSource) -> Result<Vec<IngredientSuggestion>> {
    let items = match source {
        CatalogSource::Bundled => serde_json::from_str(BUNDLED_CATALOG)?,
        CatalogSource::File(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        CatalogSource::Inline(json) => serde_json::from_str(json)?,
    };
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = SuggestionCatalog::bundled();
        assert!(catalog.items.get().is_none());
        assert!(!catalog.items().is_empty());
        assert!(catalog.items.get().is_some());
        assert!(catalog.items().iter().all(|s| s.protein >= 0.0 && s.carbs >= 0.0 && s.fats >= 0.0));
    }

    #[test]
    fn test_loaded_once() {
        let catalog = SuggestionCatalog::bundled();
        let first = catalog.items()[0].id;
        assert_eq!(catalog.items()[0].id, first);
    }

    #[test]
    fn test_file_catalog() {
        let json = r#"[{"name": "Chicken", "protein": 31, "carbs": 0, "fats": 3.6}]"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = SuggestionCatalog::new(CatalogSource::File(file.path().to_path_buf()));
        assert_eq!(catalog.items().len(), 1);
        assert_eq!(catalog.items()[0].name, "Chicken");
    }

    #[test]
    fn test_missing_file_is_empty() {
        let catalog =
            SuggestionCatalog::new(CatalogSource::File(PathBuf::from("/nonexistent/ingredients.json")));
        assert!(catalog.items().is_empty());
    }

    #[test]
    fn test_malformed_is_empty() {
        let catalog = SuggestionCatalog::new(CatalogSource::Inline("{\"name\": 1}".to_string()));
        assert!(catalog.items().is_empty());
    }

    #[test]
    fn test_from_items_is_loaded_and_never_reads_source() {
        let catalog = SuggestionCatalog::from_items(vec![IngredientSuggestion::new("Tuna", 29.0, 0.0, 1.0)]);
        assert!(catalog.items.get().is_some());
        assert_eq!(catalog.items().len(), 1);
        assert_eq!(catalog.items()[0].name, "Tuna");
    }

    #[test]
    fn test_find_and_fuzzy_lookup() {
        let catalog = SuggestionCatalog::from_items(vec![
            IngredientSuggestion::new("Chicken Breast", 31.0, 0.0, 3.6),
            IngredientSuggestion::new("Brown Rice", 2.6, 23.0, 0.9),
        ]);

        assert!(catalog.find_by_name("chicken breast").is_some());
        assert!(catalog.find_by_name("chicken").is_none());

        let close = catalog.closest_by_name("chiken brest", 3);
        assert_eq!(close.first().map(|s| s.name.as_str()), Some("Chicken Breast"));
        assert!(catalog.closest_by_name("zzzz", 3).is_empty());
    }
}
