mod goal;
mod ingredient;
mod meal;

pub use goal::{MacroBreakdown, MacroGoal};
pub use ingredient::{Ingredient, IngredientSuggestion};
pub use meal::{Meal, MealCategory};
