use crate::models::{IngredientSuggestion, MacroBreakdown, MacroGoal, Meal, MealCategory};
use crate::planner::calculations::progress_ratio;

/// Width of the text progress bars.
const BAR_WIDTH: usize = 20;

fn progress_bar(current: f64, target: f64) -> String {
    let ratio = progress_ratio(current, target).clamp(0.0, 1.0);
    let filled = (ratio * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn macro_line(label: &str, current: f64, target: f64, unit: &str) {
    println!(
        "  {:<9} {:>6.0} / {:<6.0}{:<5} {} {:>4.0}%",
        label,
        current,
        target,
        unit,
        progress_bar(current, target),
        progress_ratio(current, target) * 100.0
    );
}

/// Daily progress against the (possibly training-adjusted) targets.
pub fn display_summary(
    date: &str,
    totals: &MacroBreakdown,
    targets: &MacroGoal,
    training_day: bool,
    category_calories: &[(MealCategory, f64)],
) {
    println!();
    println!("=== Macro Summary for {} ===", date);
    if training_day {
        println!("Macros adjusted for training");
    }
    println!();

    macro_line("Calories", totals.calories, targets.total_calories(), " kcal");
    macro_line("Protein", totals.protein, targets.protein_goal, " g");
    macro_line("Carbs", totals.carbs, targets.carb_goal, " g");
    macro_line("Fats", totals.fats, targets.fat_goal, " g");

    println!();
    println!("--- Calories by meal ---");
    for (category, calories) in category_calories {
        println!(
            "  {} {:<10} {:>6.0} kcal",
            category.icon(),
            category.display_name(),
            calories
        );
    }
    println!();
}

/// The day's meals grouped by category, numbered by their position in the
/// day's list.
pub fn display_meals(date: &str, meals: &[Meal]) {
    println!();
    println!("=== Meals for {} ===", date);

    if meals.is_empty() {
        println!("No meals logged.");
        println!();
        return;
    }

    for category in MealCategory::ALL {
        let in_category: Vec<(usize, &Meal)> = meals
            .iter()
            .enumerate()
            .filter(|(_, m)| m.category == category)
            .collect();

        if in_category.is_empty() {
            continue;
        }

        println!();
        println!("{} {}", category.icon(), category.display_name());
        for (position, meal) in in_category {
            println!(
                "{:>4}. {} - {:.0} kcal | P:{:.1} C:{:.1} F:{:.1}",
                position + 1,
                meal.name,
                meal.total_calories(),
                meal.total_protein(),
                meal.total_carbs(),
                meal.total_fats()
            );
            for ingredient in &meal.ingredients {
                let quantity = if ingredient.quantity.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", ingredient.quantity)
                };
                println!(
                    "        {}{} P:{} C:{} F:{}",
                    ingredient.name, quantity, ingredient.protein, ingredient.carbs, ingredient.fats
                );
            }
        }
    }
    println!();
}

/// Current goal and its calorie total.
pub fn display_goal(goal: &MacroGoal) {
    println!();
    println!("=== Daily Goal ===");
    if goal.is_unset() {
        println!("No goal set yet. Run `goal` with --protein, --carbs and --fats, or without flags to be prompted.");
        println!();
        return;
    }
    println!("  Protein:  {:.0} g", goal.protein_goal);
    println!("  Carbs:    {:.0} g", goal.carb_goal);
    println!("  Fats:     {:.0} g", goal.fat_goal);
    println!("  Calories: {:.0} kcal", goal.total_calories());
    println!();
}

/// Remaining macros followed by the ranked suggestions.
pub fn display_suggestions(remaining: &MacroBreakdown, suggestions: &[&IngredientSuggestion]) {
    println!();
    println!("=== Remaining Macros ===");
    println!(
        "  Protein: {:.0}g  Carbs: {:.0}g  Fats: {:.0}g  ({:.0} kcal)",
        remaining.protein, remaining.carbs, remaining.fats, remaining.calories
    );
    println!();

    if suggestions.is_empty() {
        println!("No suggestions found.");
        println!();
        return;
    }

    println!("=== Suggestions ===");
    let max_name_len = suggestions.iter().map(|s| s.name.len()).max().unwrap_or(10);
    for (i, item) in suggestions.iter().enumerate() {
        println!(
            "{:>3}. {:<width$}  P:{:>5.1} C:{:>5.1} F:{:>5.1}",
            i + 1,
            item.name,
            item.protein,
            item.carbs,
            item.fats,
            width = max_name_len
        );
    }
    println!();
}

/// One line per logged date with its totals.
pub fn display_history(days: &[(&str, MacroBreakdown)]) {
    println!();
    println!("=== History ===");
    if days.is_empty() {
        println!("No meals logged yet.");
        println!();
        return;
    }
    for (date, totals) in days {
        println!(
            "  {}  {:>6.0} kcal | P:{:.0} C:{:.0} F:{:.0}",
            date, totals.calories, totals.protein, totals.carbs, totals.fats
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0, 100.0), format!("[{}]", "-".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(100.0, 100.0), format!("[{}]", "#".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(250.0, 100.0), format!("[{}]", "#".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(10.0, 0.0), format!("[{}]", "-".repeat(BAR_WIDTH)));
    }
}
