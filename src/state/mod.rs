mod catalog;
pub mod dates;
mod goal_store;
mod meal_store;
mod persistence;

pub use catalog::{CatalogSource, SuggestionCatalog};
pub use goal_store::GoalStore;
pub use meal_store::{MealStore, MealsByDate};
pub use persistence::{JsonFileStore, KeyValueStore, MemoryStore, load_json, save_json};
