pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{MacroError, Result};
pub use models::{Ingredient, IngredientSuggestion, MacroBreakdown, MacroGoal, Meal, MealCategory};
pub use state::{GoalStore, MealStore, SuggestionCatalog};
