pub mod calculations;
pub mod constants;
pub mod ranking;

pub use calculations::{calories_from_macros, progress_ratio, remaining, sum_breakdowns};
pub use constants::*;
pub use ranking::{rank, score, top_suggestions};
