use macro_meal_planner::models::{IngredientSuggestion, MacroBreakdown, MacroGoal, MealCategory};
use macro_meal_planner::planner::{DEFAULT_SUGGESTION_COUNT, rank, score, top_suggestions};
use macro_meal_planner::state::{GoalStore, MealStore, MemoryStore, SuggestionCatalog};

fn target(protein: f64, carbs: f64, fats: f64) -> MacroBreakdown {
    MacroBreakdown {
        protein,
        carbs,
        fats,
        calories: 0.0,
    }
}

#[test]
fn test_chicken_ranks_before_rice() {
    let catalog = vec![
        IngredientSuggestion::new("Chicken", 31.0, 0.0, 3.6),
        IngredientSuggestion::new("Rice", 2.7, 28.0, 0.3),
    ];
    let t = target(30.0, 0.0, 4.0);

    assert!((score(&catalog[0], &t) - 1.4).abs() < 1e-9);
    assert!((score(&catalog[1], &t) - 59.0).abs() < 1e-9);

    let names: Vec<&str> = rank(&catalog, &t).iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Chicken", "Rice"]);
}

#[test]
fn test_zero_target_ranks_by_magnitude() {
    let catalog = vec![
        IngredientSuggestion::new("Big", 50.0, 50.0, 50.0),
        IngredientSuggestion::new("Small", 1.0, 1.0, 1.0),
        IngredientSuggestion::new("Medium", 10.0, 10.0, 10.0),
    ];

    let ranked = rank(&catalog, &MacroBreakdown::default());
    let names: Vec<&str> = ranked.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Small", "Medium", "Big"]);
    assert_eq!(score(ranked[2], &MacroBreakdown::default()), 150.0);
}

#[test]
fn test_empty_catalog_gives_no_suggestions() {
    let catalog = SuggestionCatalog::from_items(Vec::new());
    assert!(top_suggestions(catalog.items(), &target(10.0, 10.0, 10.0), 3).is_empty());
}

#[test]
fn test_bundled_catalog_suggestions_for_remaining_gap() {
    let catalog = SuggestionCatalog::bundled();
    let mut meals = MealStore::load(MemoryStore::new());
    meals.add_meal("breakfast", MealCategory::Breakfast, Vec::new());

    let remaining = meals.remaining_macros(&MacroGoal::new(30.0, 0.0, 4.0));
    let top = top_suggestions(catalog.items(), &remaining, DEFAULT_SUGGESTION_COUNT);

    assert_eq!(top.len(), DEFAULT_SUGGESTION_COUNT);
    assert_eq!(top[0].name, "Chicken Breast");

    let scores: Vec<f64> = top.iter().map(|s| score(s, &remaining)).collect();
    assert!(scores.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_accepting_a_suggestion_logs_a_meal() {
    let catalog = SuggestionCatalog::from_items(vec![
        IngredientSuggestion::new("Tuna", 29.0, 0.0, 1.0),
        IngredientSuggestion::new("Banana", 1.1, 23.0, 0.3),
    ]);
    let mut meals = MealStore::load(MemoryStore::new());
    let goal = MacroGoal::new(29.0, 0.0, 1.0);

    let before = meals.remaining_macros(&goal);
    let best = top_suggestions(catalog.items(), &before, 1)[0];
    meals.add_suggestion(best, MealCategory::Lunch);

    let after = meals.remaining_macros(&goal);
    assert_eq!(meals.meals_for(MealCategory::Lunch).len(), 1);
    assert_eq!(after, MacroBreakdown::default());
}

#[test]
fn test_training_day_suggestions_rank_against_base_goal() {
    let mut goals = GoalStore::load(MemoryStore::new());
    goals.update_goal(150.0, 250.0, 60.0);
    goals.set_training_day(true);

    let meals = MealStore::load(MemoryStore::new());
    let remaining = meals.remaining_macros(goals.suggestion_goal());

    assert_eq!(remaining.protein, 150.0);
    assert_eq!(remaining.carbs, 250.0);
    assert_eq!(remaining.fats, 60.0);
}
