use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::Result;
use crate::models::MealCategory;
use crate::planner::constants::DEFAULT_SUGGESTION_COUNT;

fn parse_category(s: &str) -> Result<MealCategory> {
    s.parse()
}

/// MacroMealPlanner — log meals, track daily macros, and get ingredient suggestions.
#[derive(Parser, Debug)]
#[command(name = "macro_meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding the saved goal and meals.
    #[arg(short = 'd', long, default_value = "macro_data")]
    pub data_dir: PathBuf,

    /// Suggestion catalog JSON file (the bundled catalog is used otherwise).
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Options shared by commands that work on one day.
#[derive(Args, Debug, Clone, Default)]
pub struct DayArgs {
    /// Day to work on (yyyy-mm-dd); defaults to today.
    #[arg(long)]
    pub date: Option<String>,

    /// Apply the training day adjustment to the targets.
    #[arg(short, long)]
    pub training_day: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the day's totals against the goal.
    Summary(DayArgs),

    /// List the day's meals by category.
    Meals(DayArgs),

    /// Log a new meal interactively.
    Add {
        #[command(flatten)]
        day: DayArgs,

        /// Meal category (breakfast, lunch, dinner or snack); prompted if omitted.
        #[arg(short, long, value_parser = parse_category)]
        category: Option<MealCategory>,
    },

    /// Delete meals by the positions shown in `meals`.
    Delete {
        #[command(flatten)]
        day: DayArgs,

        /// Positions to delete (1-based).
        #[arg(required = true)]
        positions: Vec<usize>,
    },

    /// Show or edit the daily macro goal.
    Goal {
        /// Daily protein target in grams.
        #[arg(long)]
        protein: Option<f64>,

        /// Daily carbs target in grams.
        #[arg(long)]
        carbs: Option<f64>,

        /// Daily fats target in grams.
        #[arg(long)]
        fats: Option<f64>,

        /// Prompt for new values even when none are given.
        #[arg(short, long)]
        edit: bool,
    },

    /// Suggest ingredients that close the remaining gap.
    Suggest {
        #[command(flatten)]
        day: DayArgs,

        /// Number of suggestions to show.
        #[arg(short = 'n', long, default_value_t = DEFAULT_SUGGESTION_COUNT)]
        count: usize,
    },

    /// List every day with logged meals.
    History,
}

impl Default for Command {
    fn default() -> Self {
        Command::Summary(DayArgs::default())
    }
}
