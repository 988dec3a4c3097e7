use std::iter::Sum;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::planner::calculations::calories_from_macros;

/// Daily macronutrient targets in grams.
///
/// All-zero targets double as the "not configured yet" marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroGoal {
    pub protein_goal: f64,
    pub carb_goal: f64,
    pub fat_goal: f64,
}

impl MacroGoal {
    pub fn new(protein_goal: f64, carb_goal: f64, fat_goal: f64) -> Self {
        Self {
            protein_goal,
            carb_goal,
            fat_goal,
        }
    }

    #[inline]
    pub fn total_calories(&self) -> f64 {
        calories_from_macros(self.protein_goal, self.carb_goal, self.fat_goal)
    }

    /// True when no goal has been entered yet.
    pub fn is_unset(&self) -> bool {
        self.protein_goal == 0.0 && self.carb_goal == 0.0 && self.fat_goal == 0.0
    }
}

/// Protein/carbs/fats/calories aggregate, used for both totals and
/// remaining amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroBreakdown {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub calories: f64,
}

impl AddAssign for MacroBreakdown {
    fn add_assign(&mut self, rhs: Self) {
        self.protein += rhs.protein;
        self.carbs += rhs.carbs;
        self.fats += rhs.fats;
        self.calories += rhs.calories;
    }
}

impl Sum for MacroBreakdown {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, b| {
            acc += b;
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_calories() {
        let goal = MacroGoal::new(150.0, 250.0, 60.0);
        assert_eq!(goal.total_calories(), 150.0 * 4.0 + 250.0 * 4.0 + 60.0 * 9.0);
    }

    #[test]
    fn test_unset_sentinel() {
        assert!(MacroGoal::default().is_unset());
        assert!(!MacroGoal::new(0.0, 0.0, 1.0).is_unset());
    }

    #[test]
    fn test_goal_json_keys() {
        let json = serde_json::to_value(MacroGoal::new(120.0, 200.0, 70.0)).unwrap();
        assert_eq!(json["proteinGoal"], 120.0);
        assert_eq!(json["carbGoal"], 200.0);
        assert_eq!(json["fatGoal"], 70.0);
    }

    #[test]
    fn test_breakdown_sum() {
        let parts = vec![
            MacroBreakdown { protein: 10.0, carbs: 5.0, fats: 1.0, calories: 69.0 },
            MacroBreakdown { protein: 2.0, carbs: 3.0, fats: 4.0, calories: 56.0 },
        ];
        let total: MacroBreakdown = parts.into_iter().sum();
        assert_eq!(total, MacroBreakdown { protein: 12.0, carbs: 8.0, fats: 5.0, calories: 125.0 });
    }
}
