pub mod prompts;
pub mod render;

pub use prompts::{
    manual_ingredient, parse_grams, pick_from_catalog, prompt_category, prompt_goal, prompt_grams, prompt_ingredients,
    prompt_manual_ingredient, prompt_meal_name, prompt_suggestion_choice, prompt_yes_no,
};
pub use render::{
    display_goal, display_history, display_meals, display_suggestions, display_summary,
};
