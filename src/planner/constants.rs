/// Atwater factor for protein (kcal per gram).
pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;

/// Atwater factor for carbohydrate (kcal per gram).
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;

/// Atwater factor for fat (kcal per gram).
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Training day adjustment
// ─────────────────────────────────────────────────────────────────────────────

/// Extra protein on training days.
pub const TRAINING_DAY_PROTEIN_BONUS: f64 = 20.0;

/// Extra carbs on training days.
pub const TRAINING_DAY_CARBS_BONUS: f64 = 40.0;

/// Fat reduction on training days (floored at 0g).
pub const TRAINING_DAY_FAT_REDUCTION: f64 = 10.0;

// ─────────────────────────────────────────────────────────────────────────────
// Storage
// ─────────────────────────────────────────────────────────────────────────────

/// Storage key for the date → meals blob.
pub const MEALS_STORAGE_KEY: &str = "savedMealsByDate";

/// Storage key for the macro goal blob.
pub const GOAL_STORAGE_KEY: &str = "macroGoals";

/// chrono format of a day's storage key.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

// ─────────────────────────────────────────────────────────────────────────────
// Suggestions
// ─────────────────────────────────────────────────────────────────────────────

/// Number of ranked suggestions shown by default.
pub const DEFAULT_SUGGESTION_COUNT: usize = 3;

/// Quantity label given to an ingredient created from a suggestion.
pub const SUGGESTION_QUANTITY_LABEL: &str = "1 serving";

/// Minimum Jaro-Winkler similarity for a fuzzy catalog name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.8;
