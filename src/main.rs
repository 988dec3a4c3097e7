use clap::Parser;
use tracing_subscriber::EnvFilter;

use macro_meal_planner::cli::{Cli, Command, DayArgs};
use macro_meal_planner::error::{MacroError, Result};
use macro_meal_planner::interface::{
    display_goal, display_history, display_meals, display_suggestions, display_summary,
    prompt_category, prompt_goal, prompt_ingredients, prompt_meal_name, prompt_suggestion_choice,
    prompt_yes_no,
};
use macro_meal_planner::models::MealCategory;
use macro_meal_planner::planner::top_suggestions;
use macro_meal_planner::state::dates::try_parse_date_key;
use macro_meal_planner::state::{
    CatalogSource, GoalStore, JsonFileStore, MealStore, SuggestionCatalog,
};

fn main() {
    // Logs go to stderr so they never mix with command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("macro_meal_planner=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Stores and catalog shared by every command.
struct App {
    meals: MealStore<JsonFileStore>,
    goals: GoalStore<JsonFileStore>,
    catalog: SuggestionCatalog,
}

impl App {
    fn open(cli: &Cli) -> Self {
        let storage = JsonFileStore::new(&cli.data_dir);
        let source = match &cli.catalog {
            Some(path) => CatalogSource::File(path.clone()),
            None => CatalogSource::Bundled,
        };

        Self {
            meals: MealStore::load(storage.clone()),
            goals: GoalStore::load(storage),
            catalog: SuggestionCatalog::new(source),
        }
    }

    /// Point both stores at the day described by `day`; a malformed date
    /// falls back to today.
    fn select_day(&mut self, day: &DayArgs) -> Result<()> {
        if let Some(key) = &day.date {
            if try_parse_date_key(key).is_none() {
                println!("'{}' is not a yyyy-mm-dd date, using today.", key);
            }
            self.meals.select_date_key(key);
        }
        self.goals.set_training_day(day.training_day);
        Ok(())
    }

    fn require_goal(&self) -> bool {
        if self.goals.is_configured() {
            return true;
        }
        println!("No macro goal set yet. Run `goal` first to set your daily targets.");
        false
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut app = App::open(&cli);

    match cli.command.unwrap_or_default() {
        Command::Summary(day) => cmd_summary(&mut app, &day),
        Command::Meals(day) => cmd_meals(&mut app, &day),
        Command::Add { day, category } => cmd_add(&mut app, &day, category),
        Command::Delete { day, positions } => cmd_delete(&mut app, &day, &positions),
        Command::Goal {
            protein,
            carbs,
            fats,
            edit,
        } => cmd_goal(&mut app, protein, carbs, fats, edit),
        Command::Suggest { day, count } => cmd_suggest(&mut app, &day, count),
        Command::History => cmd_history(&app),
    }
}

/// Show totals against the adjusted targets.
fn cmd_summary(app: &mut App, day: &DayArgs) -> Result<()> {
    app.select_day(day)?;
    if !app.require_goal() {
        return Ok(());
    }

    let category_calories: Vec<(MealCategory, f64)> = MealCategory::ALL
        .into_iter()
        .map(|c| (c, app.meals.category_calories(c)))
        .collect();

    display_summary(
        app.meals.selected_date(),
        &app.meals.totals(),
        &app.goals.adjusted_goal(),
        app.goals.is_training_day(),
        &category_calories,
    );
    Ok(())
}

fn cmd_meals(app: &mut App, day: &DayArgs) -> Result<()> {
    app.select_day(day)?;
    display_meals(app.meals.selected_date(), app.meals.meals());
    Ok(())
}

/// Log a meal interactively.
fn cmd_add(app: &mut App, day: &DayArgs, category: Option<MealCategory>) -> Result<()> {
    app.select_day(day)?;
    println!(
        "Logging a meal for {}",
        app.meals.selected_day().format("%A %Y-%m-%d")
    );

    let name = prompt_meal_name()?;
    let category = match category {
        Some(category) => category,
        None => prompt_category("Which meal is this?")?,
    };
    let ingredients = prompt_ingredients(&app.catalog)?;

    let meal = app.meals.add_meal(name, category, ingredients);
    println!(
        "Saved {} ({}) - {:.0} kcal",
        meal.name,
        meal.category,
        meal.total_calories()
    );
    Ok(())
}

/// Delete meals by their 1-based positions.
fn cmd_delete(app: &mut App, day: &DayArgs, positions: &[usize]) -> Result<()> {
    app.select_day(day)?;

    let count = app.meals.meals().len();
    let indices: Vec<usize> = positions
        .iter()
        .filter(|&&p| p >= 1 && p <= count)
        .map(|p| p - 1)
        .collect();

    if indices.is_empty() {
        println!("No meals at those positions on {}.", app.meals.selected_date());
        return Ok(());
    }

    app.meals.delete_meals_at(&indices);
    println!(
        "Deleted {} meal(s) from {}.",
        count - app.meals.meals().len(),
        app.meals.selected_date()
    );
    Ok(())
}

/// Show the goal, or replace it from flags and prompts.
fn cmd_goal(
    app: &mut App,
    protein: Option<f64>,
    carbs: Option<f64>,
    fats: Option<f64>,
    edit: bool,
) -> Result<()> {
    let current = *app.goals.goal();

    if protein.is_none() && carbs.is_none() && fats.is_none() && !edit && app.goals.is_configured() {
        display_goal(&current);
        return Ok(());
    }

    let (protein, carbs, fats) = match (protein, carbs, fats) {
        (Some(p), Some(c), Some(f)) => (p, c, f),
        (None, None, None) => prompt_goal(&current)?,
        (p, c, f) => (
            p.unwrap_or(current.protein_goal),
            c.unwrap_or(current.carb_goal),
            f.unwrap_or(current.fat_goal),
        ),
    };

    for (label, value) in [("protein", protein), ("carbs", carbs), ("fats", fats)] {
        if !value.is_finite() || value < 0.0 {
            return Err(MacroError::InvalidInput(format!(
                "{} must be a non-negative amount",
                label
            )));
        }
    }

    app.goals.update_goal(protein, carbs, fats);
    display_goal(app.goals.goal());
    Ok(())
}

/// Rank catalog items against what is left of the base goal.
fn cmd_suggest(app: &mut App, day: &DayArgs, count: usize) -> Result<()> {
    app.select_day(day)?;
    if !app.require_goal() {
        return Ok(());
    }

    let remaining = app.meals.remaining_macros(app.goals.suggestion_goal());
    let suggestions = top_suggestions(app.catalog.items(), &remaining, count);
    display_suggestions(&remaining, &suggestions);

    if suggestions.is_empty() || !prompt_yes_no("Add a suggestion to your meals?", false)? {
        return Ok(());
    }

    let Some(choice) = prompt_suggestion_choice(&suggestions)? else {
        return Ok(());
    };
    let category = prompt_category("Add to which meal?")?;

    let meal = app.meals.add_suggestion(choice, category);
    println!(
        "Added {} to {} - {:.0} kcal",
        meal.name,
        meal.category,
        meal.total_calories()
    );
    Ok(())
}

fn cmd_history(app: &App) -> Result<()> {
    let days: Vec<_> = app
        .meals
        .logged_dates()
        .into_iter()
        .map(|date| (date, app.meals.totals_on(date)))
        .collect();

    display_history(&days);
    Ok(())
}
