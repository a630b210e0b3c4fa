pub mod budgets;
pub mod burn;
pub mod cashflow;
pub mod common;
pub mod distribution;
pub mod frequency;
pub mod heatmap;
pub mod overview;
pub mod sizes;
pub mod velocity;
pub mod weekday;
