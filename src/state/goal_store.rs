use tracing::{debug, info};

use crate::models::MacroGoal;
use crate::planner::calculations::calories_from_macros;
use crate::planner::constants::{
    GOAL_STORAGE_KEY, TRAINING_DAY_CARBS_BONUS, TRAINING_DAY_FAT_REDUCTION,
    TRAINING_DAY_PROTEIN_BONUS,
};
use crate::state::persistence::{KeyValueStore, load_json, save_json};

/// Owns the daily macro goal and the training day toggle.
///
/// Only the goal is saved; the training day flag lasts for the session.
pub struct GoalStore<S: KeyValueStore> {
    storage: S,
    goal: MacroGoal,
    training_day: bool,
}

impl<S: KeyValueStore> GoalStore<S> {
    /// Restore the goal from `storage`; missing or unreadable data gives an
    /// all-zero (unconfigured) goal.
    pub fn load(storage: S) -> Self {
        let goal: MacroGoal = load_json(&storage, GOAL_STORAGE_KEY).unwrap_or_default();
        debug!(configured = !goal.is_unset(), "goal store loaded");

        Self {
            storage,
            goal,
            training_day: false,
        }
    }

    pub fn goal(&self) -> &MacroGoal {
        &self.goal
    }

    /// False until a non-zero goal has been entered.
    pub fn is_configured(&self) -> bool {
        !self.goal.is_unset()
    }

    /// Replace the goal and save it.
    pub fn update_goal(&mut self, protein: f64, carbs: f64, fats: f64) {
        self.goal = MacroGoal::new(protein, carbs, fats);
        info!(protein, carbs, fats, "macro goal updated");
        save_json(&mut self.storage, GOAL_STORAGE_KEY, &self.goal);
    }

    pub fn is_training_day(&self) -> bool {
        self.training_day
    }

    pub fn set_training_day(&mut self, training_day: bool) {
        self.training_day = training_day;
    }

    pub fn adjusted_protein(&self) -> f64 {
        if self.training_day {
            self.goal.protein_goal + TRAINING_DAY_PROTEIN_BONUS
        } else {
            self.goal.protein_goal
        }
    }

    pub fn adjusted_carbs(&self) -> f64 {
        if self.training_day {
            self.goal.carb_goal + TRAINING_DAY_CARBS_BONUS
        } else {
            self.goal.carb_goal
        }
    }

    pub fn adjusted_fats(&self) -> f64 {
        if self.training_day {
            (self.goal.fat_goal - TRAINING_DAY_FAT_REDUCTION).max(0.0)
        } else {
            self.goal.fat_goal
        }
    }

    pub fn adjusted_calories(&self) -> f64 {
        calories_from_macros(
            self.adjusted_protein(),
            self.adjusted_carbs(),
            self.adjusted_fats(),
        )
    }

    /// Today's effective targets: the goal with the training day adjustment
    /// applied when the flag is set.
    pub fn adjusted_goal(&self) -> MacroGoal {
        MacroGoal::new(
            self.adjusted_protein(),
            self.adjusted_carbs(),
            self.adjusted_fats(),
        )
    }

    /// Targets that suggestions are ranked against: always the base goal,
    /// whether or not today is a training day.
    pub fn suggestion_goal(&self) -> &MacroGoal {
        &self.goal
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}
