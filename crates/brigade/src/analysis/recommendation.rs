//! Long-term menu recommendations and the growth plan.

use serde::{Deserialize, Serialize};

use super::MenuMetrics;

/// Below this vegetarian share the menu needs more vegetarian dishes.
pub const LOW_VEG_PERCENTAGE: f64 = 30.0;

/// Above this vegetarian share the menu needs more non-vegetarian dishes.
pub const HIGH_VEG_PERCENTAGE: f64 = 70.0;

/// Below this buffet share the buffet should be expanded.
pub const LOW_BUFFET_PERCENTAGE: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub title: String,
    pub reason: String,
    pub action: String,
}

/// Recommendations for menu balance and buffet coverage.
///
/// An empty selection yields none.
pub fn long_term_recommendations(metrics: &MenuMetrics) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    if metrics.is_empty() {
        return recommendations;
    }

    if metrics.veg_percentage < LOW_VEG_PERCENTAGE {
        recommendations.push(Recommendation {
            priority: Priority::High,
            title: "Increase Vegetarian Options".to_string(),
            reason: format!("Only {:.1}% vegetarian items", metrics.veg_percentage),
            action: "Add 3-5 new vegetarian dishes in next month".to_string(),
        });
    } else if metrics.veg_percentage > HIGH_VEG_PERCENTAGE {
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            title: "Balance Vegetarian/Non-Veg".to_string(),
            reason: format!("High vegetarian ratio ({:.1}%)", metrics.veg_percentage),
            action: "Add 2-3 popular non-vegetarian specialties".to_string(),
        });
    }

    if metrics.buffet_percentage < LOW_BUFFET_PERCENTAGE {
        recommendations.push(Recommendation {
            priority: Priority::High,
            title: "Expand Buffet Options".to_string(),
            reason: format!("Only {:.1}% items in buffet", metrics.buffet_percentage),
            action: "Move 5 popular items to buffet permanently".to_string(),
        });
    }

    recommendations
}

/// One month of the growth plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrowthStep {
    pub month: u32,
    pub focus: &'static str,
    pub actions: &'static [&'static str],
}

static GROWTH_PLAN: [GrowthStep; 3] = [
    GrowthStep {
        month: 1,
        focus: "Menu Optimization",
        actions: &[
            "Analyze sales data",
            "Remove low-performing items",
            "Add 3 new seasonal items",
        ],
    },
    GrowthStep {
        month: 2,
        focus: "Staff Training",
        actions: &[
            "Cross-training program",
            "Quality standards workshop",
            "Efficiency improvements",
        ],
    },
    GrowthStep {
        month: 3,
        focus: "Customer Experience",
        actions: &[
            "Introduce special menus",
            "Improve presentation",
            "Gather customer feedback",
        ],
    },
];

/// The fixed three-month growth plan.
pub fn growth_plan() -> &'static [GrowthStep] {
    &GROWTH_PLAN
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(total: usize, veg: usize, buffet: usize) -> MenuMetrics {
        let pct = |n: usize| n as f64 / total as f64 * 100.0;
        MenuMetrics {
            total_items: total,
            buffet_items: buffet,
            veg_items: veg,
            buffet_percentage: pct(buffet),
            veg_percentage: pct(veg),
        }
    }

    #[test]
    fn test_low_veg_and_low_buffet() {
        let recs = long_term_recommendations(&metrics(10, 2, 3));

        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].title, "Increase Vegetarian Options");
        assert_eq!(recs[0].reason, "Only 20.0% vegetarian items");
        assert_eq!(recs[1].title, "Expand Buffet Options");
        assert!(recs.iter().all(|r| r.priority == Priority::High));
    }

    #[test]
    fn test_high_veg_is_medium() {
        let recs = long_term_recommendations(&metrics(10, 8, 10));

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].priority, Priority::Medium);
        assert_eq!(recs[0].reason, "High vegetarian ratio (80.0%)");
    }

    #[test]
    fn test_balanced_menu_has_none() {
        // Thresholds are strict: exactly 30% vegetarian and 40% buffet pass.
        assert!(long_term_recommendations(&metrics(10, 3, 4)).is_empty());
        assert!(long_term_recommendations(&metrics(10, 5, 8)).is_empty());
    }

    #[test]
    fn test_empty_menu_has_none() {
        let empty = MenuMetrics {
            total_items: 0,
            buffet_items: 0,
            veg_items: 0,
            buffet_percentage: 0.0,
            veg_percentage: 0.0,
        };
        assert!(long_term_recommendations(&empty).is_empty());
    }

    #[test]
    fn test_growth_plan() {
        let plan = growth_plan();
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[1].focus, "Staff Training");
        assert!(plan.iter().all(|step| step.actions.len() == 3));
    }
}
