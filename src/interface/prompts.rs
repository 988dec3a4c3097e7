use dialoguer::{Confirm, Input, Select};

use crate::error::{MacroError, Result};
use crate::models::{Ingredient, IngredientSuggestion, MacroGoal, MealCategory};
use crate::state::SuggestionCatalog;

/// Parse a gram amount typed by the user.
///
/// Rejects non-numeric, negative and non-finite values.
pub fn parse_grams(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| MacroError::InvalidInput(format!("'{}' is not a number", input.trim())))?;

    if !value.is_finite() || value < 0.0 {
        return Err(MacroError::InvalidInput(format!(
            "'{}' must be a non-negative amount",
            input.trim()
        )));
    }

    Ok(value)
}

/// Prompt for a gram amount with a default.
pub fn prompt_grams(label: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("{} (g)", label))
        .default(format!("{}", default))
        .validate_with(|s: &String| parse_grams(s).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    parse_grams(&input)
}

/// Prompt for all three goal values, defaulting to the current goal.
pub fn prompt_goal(current: &MacroGoal) -> Result<(f64, f64, f64)> {
    let protein = prompt_grams("Daily protein", current.protein_goal)?;
    let carbs = prompt_grams("Daily carbs", current.carb_goal)?;
    let fats = prompt_grams("Daily fats", current.fat_goal)?;
    Ok((protein, carbs, fats))
}

/// Select a meal category from a menu.
pub fn prompt_category(prompt: &str) -> Result<MealCategory> {
    let labels: Vec<String> = MealCategory::ALL
        .iter()
        .map(|c| format!("{} {}", c.icon(), c.display_name()))
        .collect();

    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(MealCategory::ALL[index])
}

/// Prompt for a non-empty meal name.
pub fn prompt_meal_name() -> Result<String> {
    let name: String = Input::new()
        .with_prompt("Meal name")
        .validate_with(|s: &String| {
            if s.trim().is_empty() {
                Err("Meal name cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    Ok(name.trim().to_string())
}

/// Prompt for an ingredient typed in by hand.
pub fn prompt_manual_ingredient(name: &str) -> Result<Ingredient> {
    let quantity: String = Input::new()
        .with_prompt("Quantity (e.g. 100g, 1 cup)")
        .allow_empty(true)
        .interact_text()?;

    let protein = prompt_grams("Protein", 0.0)?;
    let carbs = prompt_grams("Carbs", 0.0)?;
    let fats = prompt_grams("Fats", 0.0)?;

    manual_ingredient(name, quantity.trim(), protein, carbs, fats)
}

/// Build a hand-entered ingredient, rejecting negative or non-finite macros.
pub fn manual_ingredient(
    name: &str,
    quantity: &str,
    protein: f64,
    carbs: f64,
    fats: f64,
) -> Result<Ingredient> {
    let ingredient = Ingredient::new(name, quantity, protein, carbs, fats);
    if !ingredient.is_valid() {
        return Err(MacroError::InvalidInput(format!(
            "{}: macros must be non-negative amounts",
            name
        )));
    }
    Ok(ingredient)
}

/// Resolve a typed name against the catalog.
///
/// Tries an exact (case-insensitive) match first, then offers the closest
/// fuzzy matches. Returns `None` when the user wants to enter it manually.
pub fn pick_from_catalog<'a>(
    catalog: &'a SuggestionCatalog,
    name: &str,
) -> Result<Option<&'a IngredientSuggestion>> {
    if let Some(exact) = catalog.find_by_name(name) {
        return Ok(Some(exact));
    }

    let candidates = catalog.closest_by_name(name, 5);
    if candidates.is_empty() {
        return Ok(None);
    }

    let mut labels: Vec<String> = candidates
        .iter()
        .map(|s| format!("{} (P:{} C:{} F:{})", s.name, s.protein, s.carbs, s.fats))
        .collect();
    labels.push("None of these, enter manually".to_string());

    let index = Select::new()
        .with_prompt(format!("'{}' not found. Did you mean", name))
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(candidates.get(index).copied())
}

/// Collect ingredients until the user enters a blank name.
///
/// Requires at least one ingredient.
pub fn prompt_ingredients(catalog: &SuggestionCatalog) -> Result<Vec<Ingredient>> {
    let mut ingredients = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Ingredient name (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let name = input.trim();
        if name.is_empty() {
            if ingredients.is_empty() {
                println!("Add at least one ingredient.");
                continue;
            }
            break;
        }

        let ingredient = match pick_from_catalog(catalog, name)? {
            Some(suggestion) => {
                let ingredient = Ingredient::from_suggestion(suggestion);
                println!(
                    "Added: {} ({}) P:{} C:{} F:{}",
                    ingredient.name,
                    ingredient.quantity,
                    ingredient.protein,
                    ingredient.carbs,
                    ingredient.fats
                );
                ingredient
            }
            None => prompt_manual_ingredient(name)?,
        };

        ingredients.push(ingredient);
    }

    Ok(ingredients)
}

/// Choose one of the ranked suggestions, or none.
pub fn prompt_suggestion_choice<'a>(
    suggestions: &[&'a IngredientSuggestion],
) -> Result<Option<&'a IngredientSuggestion>> {
    let mut labels: Vec<String> = suggestions.iter().map(|s| s.name.clone()).collect();
    labels.push("Cancel".to_string());

    let index = Select::new()
        .with_prompt("Add which suggestion?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(suggestions.get(index).copied())
}

/// Yes/no confirmation prompt.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    let result = Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grams_accepts_numbers() {
        assert_eq!(parse_grams("31").unwrap(), 31.0);
        assert_eq!(parse_grams(" 3.6 ").unwrap(), 3.6);
        assert_eq!(parse_grams("0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_grams_rejects_bad_input() {
        assert!(matches!(parse_grams("abc"), Err(MacroError::InvalidInput(_))));
        assert!(matches!(parse_grams("-5"), Err(MacroError::InvalidInput(_))));
        assert!(matches!(parse_grams("inf"), Err(MacroError::InvalidInput(_))));
        assert!(matches!(parse_grams("NaN"), Err(MacroError::InvalidInput(_))));
        assert!(matches!(parse_grams(""), Err(MacroError::InvalidInput(_))));
    }

    #[test]
    fn test_manual_ingredient_validates_macros() {
        let egg = manual_ingredient("Egg", "1 large", 6.0, 0.6, 5.0).unwrap();
        assert_eq!(egg.name, "Egg");
        assert_eq!(egg.quantity, "1 large");

        assert!(matches!(
            manual_ingredient("Bad", "", -1.0, 0.0, 0.0),
            Err(MacroError::InvalidInput(_))
        ));
        assert!(matches!(
            manual_ingredient("Bad", "", 0.0, f64::INFINITY, 0.0),
            Err(MacroError::InvalidInput(_))
        ));
    }
}
