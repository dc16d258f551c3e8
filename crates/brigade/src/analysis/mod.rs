//! Long-term menu analysis: balance metrics, category distribution,
//! recommendations and the growth plan.

mod metrics;
mod recommendation;
mod report;

pub use metrics::{category_distribution, MenuMetrics};
pub use recommendation::{
    growth_plan, long_term_recommendations, GrowthStep, Priority, Recommendation,
    HIGH_VEG_PERCENTAGE, LOW_BUFFET_PERCENTAGE, LOW_VEG_PERCENTAGE,
};
pub use report::StrategyReport;
