//! Weekly insights for the partner summary: aggregates a week of mood,
//! energy and symptom check-ins, compares it with the week before, weighs
//! symptoms and ranks supportive suggestions.
//!
//! Every engine function is pure and synchronous. The only outside input
//! besides the data is the reference date used for content rotation, and
//! that is passed in explicitly.

pub mod aggregate;
pub mod config;
pub mod import;
pub mod insights;
pub mod models;
pub mod report;
pub mod severity;
pub mod suggestions;
pub mod symptoms;
pub mod trends;
pub mod window;

pub use aggregate::aggregate;
pub use config::{ConfigError, EngineConfig};
pub use insights::{build_insights, insights_from_aggregates, InsightInputs, WeeklyInsights};
pub use suggestions::generate;
pub use symptoms::analyze;
pub use trends::{classify, compare_weeks};
