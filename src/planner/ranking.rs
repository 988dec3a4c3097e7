use crate::models::{IngredientSuggestion, MacroBreakdown};

/// L1 distance between a suggestion and the target over protein, carbs and
/// fats. Calories are not part of the score.
#[inline]
pub fn score(item: &IngredientSuggestion, target: &MacroBreakdown) -> f64 {
    (target.protein - item.protein).abs()
        + (target.carbs - item.carbs).abs()
        + (target.fats - item.fats).abs()
}

/// Rank the catalog by closeness to `target`, best match first.
///
/// The sort is stable: equal scores keep their catalog order.
pub fn rank<'a>(
    catalog: &'a [IngredientSuggestion],
    target: &MacroBreakdown,
) -> Vec<&'a IngredientSuggestion> {
    let mut scored: Vec<(&IngredientSuggestion, f64)> =
        catalog.iter().map(|item| (item, score(item, target))).collect();

    scored.sort_by(|a, b| a.1.total_cmp(&b.1));

    scored.into_iter().map(|(item, _)| item).collect()
}

/// The `count` best matches for `target`.
pub fn top_suggestions<'a>(
    catalog: &'a [IngredientSuggestion],
    target: &MacroBreakdown,
    count: usize,
) -> Vec<&'a IngredientSuggestion> {
    let mut ranked = rank(catalog, target);
    ranked.truncate(count);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Vec<IngredientSuggestion> {
        vec![
            IngredientSuggestion::new("Rice", 2.7, 28.0, 0.3),
            IngredientSuggestion::new("Chicken", 31.0, 0.0, 3.6),
            IngredientSuggestion::new("Avocado", 2.0, 9.0, 15.0),
        ]
    }

    fn target(protein: f64, carbs: f64, fats: f64) -> MacroBreakdown {
        MacroBreakdown {
            protein,
            carbs,
            fats,
            calories: 0.0,
        }
    }

    #[test]
    fn test_score_is_l1() {
        let chicken = IngredientSuggestion::new("Chicken", 31.0, 0.0, 3.6);
        assert!((score(&chicken, &target(30.0, 0.0, 4.0)) - 1.4).abs() < 1e-9);
    }

    #[test]
    fn test_score_ignores_calories() {
        let rice = IngredientSuggestion::new("Rice", 2.7, 28.0, 0.3);
        let mut t = target(10.0, 10.0, 10.0);
        let before = score(&rice, &t);
        t.calories = 9999.0;
        assert_eq!(score(&rice, &t), before);
    }

    #[test]
    fn test_rank_orders_by_distance() {
        let catalog = sample_catalog();
        let ranked = rank(&catalog, &target(30.0, 0.0, 4.0));
        let names: Vec<&str> = ranked.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Chicken", "Avocado", "Rice"]);
    }

    #[test]
    fn test_rank_ties_keep_catalog_order() {
        let catalog = vec![
            IngredientSuggestion::new("First", 10.0, 0.0, 0.0),
            IngredientSuggestion::new("Second", 0.0, 10.0, 0.0),
            IngredientSuggestion::new("Third", 0.0, 0.0, 10.0),
        ];
        let ranked = rank(&catalog, &target(0.0, 0.0, 0.0));
        let names: Vec<&str> = ranked.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_rank_empty_catalog() {
        assert!(rank(&[], &target(50.0, 50.0, 50.0)).is_empty());
    }

    #[test]
    fn test_top_suggestions_truncates() {
        let catalog = sample_catalog();
        let top = top_suggestions(&catalog, &target(30.0, 0.0, 4.0), 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Chicken");

        let all = top_suggestions(&catalog, &target(30.0, 0.0, 4.0), 10);
        assert_eq!(all.len(), 3);
    }
}
