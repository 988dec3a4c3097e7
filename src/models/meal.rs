use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::MacroError;
use crate::models::{Ingredient, MacroBreakdown};
use crate::planner::calculations::calories_from_macros;

/// Which part of the day a meal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealCategory {
    /// All categories in display order.
    pub const ALL: [MealCategory; 4] = [
        MealCategory::Breakfast,
        MealCategory::Lunch,
        MealCategory::Dinner,
        MealCategory::Snack,
    ];

    /// Storage tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            MealCategory::Breakfast => "breakfast",
            MealCategory::Lunch => "lunch",
            MealCategory::Dinner => "dinner",
            MealCategory::Snack => "snack",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MealCategory::Breakfast => "Breakfast",
            MealCategory::Lunch => "Lunch",
            MealCategory::Dinner => "Dinner",
            MealCategory::Snack => "Snack",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MealCategory::Breakfast => "🍳",
            MealCategory::Lunch => "🥪",
            MealCategory::Dinner => "🍽",
            MealCategory::Snack => "🍎",
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for MealCategory {
    type Err = MacroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        MealCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == tag)
            .ok_or_else(|| MacroError::UnknownCategory(s.to_string()))
    }
}

/// A logged meal: a named, categorized list of ingredients.
///
/// Totals are always derived from the ingredients and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: Uuid,
    pub name: String,
    pub category: MealCategory,
    pub ingredients: Vec<Ingredient>,
}

impl Meal {
    pub fn new(name: impl Into<String>, category: MealCategory, ingredients: Vec<Ingredient>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            ingredients,
        }
    }

    pub fn total_protein(&self) -> f64 {
        self.ingredients.iter().map(|i| i.protein).sum()
    }

    pub fn total_carbs(&self) -> f64 {
        self.ingredients.iter().map(|i| i.carbs).sum()
    }

    pub fn total_fats(&self) -> f64 {
        self.ingredients.iter().map(|i| i.fats).sum()
    }

    /// Energy content in kcal from the Atwater factors.
    pub fn total_calories(&self) -> f64 {
        calories_from_macros(self.total_protein(), self.total_carbs(), self.total_fats())
    }

    pub fn breakdown(&self) -> MacroBreakdown {
        MacroBreakdown {
            protein: self.total_protein(),
            carbs: self.total_carbs(),
            fats: self.total_fats(),
            calories: self.total_calories(),
        }
    }
}
