use std::collections::{BTreeMap, BTreeSet, HashSet};

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::models::{Ingredient, IngredientSuggestion, MacroBreakdown, MacroGoal, Meal, MealCategory};
use crate::planner::calculations;
use crate::planner::constants::MEALS_STORAGE_KEY;
use crate::state::dates::{format_date_key, parse_date_key, today_key};
use crate::state::persistence::{KeyValueStore, load_json, save_json};

/// Meals grouped by `yyyy-mm-dd` date key.
pub type MealsByDate = BTreeMap<String, Vec<Meal>>;

/// Owns the logged meals for every day and tracks which day is selected.
///
/// Every read and write other than date selection works on the selected
/// day. Each mutation saves the whole collection.
pub struct MealStore<S: KeyValueStore> {
    storage: S,
    meals_by_date: MealsByDate,
    selected_date: String,
}

impl<S: KeyValueStore> MealStore<S> {
    /// Restore meals from `storage`, starting on today's date.
    ///
    /// Missing or unreadable data gives an empty store.
    pub fn load(storage: S) -> Self {
        let meals_by_date: MealsByDate = load_json(&storage, MEALS_STORAGE_KEY).unwrap_or_default();
        debug!(days = meals_by_date.len(), "meal store loaded");

        Self {
            storage,
            meals_by_date,
            selected_date: today_key(),
        }
    }

    /// Create a meal on the selected date and save.
    pub fn add_meal(
        &mut self,
        name: impl Into<String>,
        category: MealCategory,
        ingredients: Vec<Ingredient>,
    ) -> Meal {
        let meal = Meal::new(name, category, ingredients);
        self.meals_by_date
            .entry(self.selected_date.clone())
            .or_default()
            .push(meal.clone());
        debug!(date = %self.selected_date, meal = %meal.name, "meal added");
        self.save();
        meal
    }

    /// Log one serving of a suggestion as its own meal.
    pub fn add_suggestion(&mut self, suggestion: &IngredientSuggestion, category: MealCategory) -> Meal {
        let ingredient = Ingredient::from_suggestion(suggestion);
        self.add_meal(suggestion.name.clone(), category, vec![ingredient])
    }

    /// Remove meals at the given positions of the selected day's list.
    ///
    /// Positions past the end are ignored.
    pub fn delete_meals_at(&mut self, positions: &[usize]) {
        let positions: BTreeSet<usize> = positions.iter().copied().collect();
        if let Some(meals) = self.meals_by_date.get_mut(&self.selected_date) {
            let mut index = 0;
            meals.retain(|_| {
                let keep = !positions.contains(&index);
                index += 1;
                keep
            });
        }
        self.save();
    }

    /// Remove meals with the given ids from the selected day's list.
    ///
    /// Unknown ids are ignored.
    pub fn delete_meals(&mut self, ids: &[Uuid]) {
        let ids: HashSet<&Uuid> = ids.iter().collect();
        if let Some(meals) = self.meals_by_date.get_mut(&self.selected_date) {
            meals.retain(|meal| !ids.contains(&meal.id));
        }
        self.save();
    }

    /// Meals logged on the selected date, in insertion order.
    pub fn meals(&self) -> &[Meal] {
        self.meals_by_date
            .get(&self.selected_date)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn meals_for(&self, category: MealCategory) -> Vec<&Meal> {
        self.meals().iter().filter(|m| m.category == category).collect()
    }

    /// Sum of every meal on the selected date.
    pub fn totals(&self) -> MacroBreakdown {
        calculations::sum_breakdowns(self.meals().iter().map(Meal::breakdown))
    }

    /// Calories eaten in one category on the selected date.
    pub fn category_calories(&self, category: MealCategory) -> f64 {
        self.meals_for(category).iter().map(|m| m.total_calories()).sum()
    }

    /// How far the selected day is from `goal`, never negative.
    pub fn remaining_macros(&self, goal: &MacroGoal) -> MacroBreakdown {
        calculations::remaining(goal, &self.totals())
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = format_date_key(date);
    }

    /// Select a date by key; a malformed key selects today.
    pub fn select_date_key(&mut self, key: &str) {
        self.select_date(parse_date_key(key));
    }

    pub fn selected_date(&self) -> &str {
        &self.selected_date
    }

    pub fn selected_day(&self) -> NaiveDate {
        parse_date_key(&self.selected_date)
    }

    /// Date keys with at least one meal, oldest first.
    pub fn logged_dates(&self) -> Vec<&str> {
        self.meals_by_date
            .iter()
            .filter(|(_, meals)| !meals.is_empty())
            .map(|(date, _)| date.as_str())
            .collect()
    }

    /// Totals for any logged date, without changing the selection.
    pub fn totals_on(&self, date_key: &str) -> MacroBreakdown {
        self.meals_by_date
            .get(date_key)
            .map(|meals| calculations::sum_breakdowns(meals.iter().map(Meal::breakdown)))
            .unwrap_or_default()
    }

    pub fn meals_by_date(&self) -> &MealsByDate {
        &self.meals_by_date
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn save(&mut self) {
        save_json(&mut self.storage, MEALS_STORAGE_KEY, &self.meals_by_date);
    }
}
