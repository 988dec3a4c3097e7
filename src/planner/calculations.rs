use crate::models::{MacroBreakdown, MacroGoal};
use crate::planner::constants::*;

/// Energy in kcal for the given macros (Atwater factors).
#[inline]
pub fn calories_from_macros(protein: f64, carbs: f64, fats: f64) -> f64 {
    protein * PROTEIN_KCAL_PER_GRAM + carbs * CARBS_KCAL_PER_GRAM + fats * FAT_KCAL_PER_GRAM
}

/// Sum a sequence of breakdowns component-wise.
pub fn sum_breakdowns<I>(breakdowns: I) -> MacroBreakdown
where
    I: IntoIterator<Item = MacroBreakdown>,
{
    breakdowns.into_iter().sum()
}

/// What is left of `goal` after `consumed`, floored at zero per component.
///
/// Calories are compared against the goal's derived total.
pub fn remaining(goal: &MacroGoal, consumed: &MacroBreakdown) -> MacroBreakdown {
    MacroBreakdown {
        protein: (goal.protein_goal - consumed.protein).max(0.0),
        carbs: (goal.carb_goal - consumed.carbs).max(0.0),
        fats: (goal.fat_goal - consumed.fats).max(0.0),
        calories: (goal.total_calories() - consumed.calories).max(0.0),
    }
}

/// Fraction of `target` reached by `current`.
///
/// Returns 0.0 for a zero target. Not capped at 1.0.
pub fn progress_ratio(current: f64, target: f64) -> f64 {
    if target > 0.0 { current / target } else { 0.0 }
}
