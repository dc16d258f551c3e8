//! Long-term strategy report.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use super::{category_distribution, growth_plan, long_term_recommendations};
use super::{GrowthStep, MenuMetrics, Recommendation};
use crate::menu::MenuDataset;

/// Everything shown on the long-term strategy view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyReport {
    pub metrics: MenuMetrics,
    pub category_distribution: IndexMap<String, usize>,
    pub recommendations: Vec<Recommendation>,
    pub growth_plan: &'static [GrowthStep],
    pub generated_at: DateTime<Utc>,
}

impl StrategyReport {
    /// Build the full strategy report for a menu.
    pub fn build(dataset: &MenuDataset) -> Self {
        let metrics = MenuMetrics::compute(dataset);
        let recommendations = long_term_recommendations(&metrics);
        tracing::debug!(
            total = metrics.total_items,
            recommendations = recommendations.len(),
            "built strategy report"
        );

        Self {
            category_distribution: category_distribution(dataset),
            recommendations,
            metrics,
            growth_plan: growth_plan(),
            generated_at: Utc::now(),
        }
    }

    /// True when no recommendation applies.
    pub fn is_balanced(&self) -> bool {
        self.recommendations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{DietaryType, MenuFilter};

    #[test]
    fn test_sample_report_is_balanced() {
        let report = StrategyReport::build(&MenuDataset::sample());

        assert!(report.is_balanced());
        assert_eq!(report.category_distribution.get("Starter"), Some(&10));
        assert_eq!(report.category_distribution.keys().next().map(String::as_str), Some("Starter"));
        assert_eq!(report.growth_plan.len(), 3);
    }

    #[test]
    fn test_non_veg_selection_needs_vegetarian_dishes() {
        let dataset = MenuDataset::sample()
            .filter(&MenuFilter::all().with_dietary_types([DietaryType::NonVeg]));
        let report = StrategyReport::build(&dataset);

        assert_eq!(report.metrics.veg_items, 0);
        assert_eq!(report.recommendations[0].title, "Increase Vegetarian Options");
    }
}
