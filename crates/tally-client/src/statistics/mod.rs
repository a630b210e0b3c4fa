pub mod budgets;
pub mod burn;
pub mod distribution;
pub mod frequency;
pub mod heatmap;
pub mod query;
pub mod range;
pub mod sizing;
pub mod types;
pub mod velocity;
