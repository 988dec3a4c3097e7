use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::planner::constants::SUGGESTION_QUANTITY_LABEL;

/// A single logged food item with its macronutrients in grams.
///
/// Identity is the `id`: two ingredients with the same name and macros are
/// still distinct entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,

    /// Free-text amount, e.g. "100g" or "1 cup".
    pub quantity: String,

    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        protein: f64,
        carbs: f64,
        fats: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            quantity: quantity.into(),
            protein,
            carbs,
            fats,
        }
    }

    /// One serving of a catalog suggestion, with a fresh id.
    pub fn from_suggestion(suggestion: &IngredientSuggestion) -> Self {
        Self::new(
            suggestion.name.clone(),
            SUGGESTION_QUANTITY_LABEL,
            suggestion.protein,
            suggestion.carbs,
            suggestion.fats,
        )
    }

    /// All macros finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.protein, self.carbs, self.fats]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Ingredient {}

impl std::hash::Hash for Ingredient {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Read-only reference entry from the suggestion catalog.
///
/// The id is assigned when the catalog is loaded; the bundled JSON carries
/// only name and macros.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientSuggestion {
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl IngredientSuggestion {
    pub fn new(name: impl Into<String>, protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            protein,
            carbs,
            fats,
        }
    }
}
