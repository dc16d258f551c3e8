//! Menu balance metrics.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::menu::MenuDataset;

/// Headline numbers for a menu selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuMetrics {
    pub total_items: usize,
    pub buffet_items: usize,
    pub veg_items: usize,
    /// Share of items on the buffet, 0.0 to 100.0.
    pub buffet_percentage: f64,
    /// Share of vegetarian items, 0.0 to 100.0.
    pub veg_percentage: f64,
}

impl MenuMetrics {
    /// Count items and derive percentages. An empty menu gives all zeros.
    pub fn compute(dataset: &MenuDataset) -> Self {
        let total_items = dataset.len();
        let buffet_items = dataset.buffet_items().count();
        let veg_items = dataset.items().iter().filter(|item| item.is_veg()).count();

        Self {
            total_items,
            buffet_items,
            veg_items,
            buffet_percentage: percentage(buffet_items, total_items),
            veg_percentage: percentage(veg_items, total_items),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

/// Item count per category, largest first. Equal counts keep dataset order.
pub fn category_distribution(dataset: &MenuDataset) -> IndexMap<String, usize> {
    let mut counts = dataset.category_counts();
    counts.sort_by(|_, a, _, b| b.cmp(a));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{BuffetStatus, DietaryType, MenuItem};

    #[test]
    fn test_sample_metrics() {
        let metrics = MenuMetrics::compute(&MenuDataset::sample());

        assert_eq!(metrics.total_items, 30);
        assert_eq!(metrics.buffet_items, 25);
        assert_eq!(metrics.veg_items, 12);
        assert!((metrics.veg_percentage - 40.0).abs() < 1e-9);
        assert!((metrics.buffet_percentage - 83.333).abs() < 0.001);
    }

    #[test]
    fn test_empty_metrics_are_zero() {
        let metrics = MenuMetrics::compute(&MenuDataset::new(Vec::new()).unwrap());

        assert!(metrics.is_empty());
        assert_eq!(metrics.buffet_percentage, 0.0);
        assert_eq!(metrics.veg_percentage, 0.0);
    }

    #[test]
    fn test_distribution_sorted_by_count() {
        let items = vec![
            MenuItem::new(1, "Tiramisu", "Dessert", DietaryType::Veg, BuffetStatus::Present, ""),
            MenuItem::new(2, "Lasagna", "Pasta", DietaryType::NonVeg, BuffetStatus::Present, ""),
            MenuItem::new(3, "Gnocchi", "Pasta", DietaryType::Veg, BuffetStatus::Present, ""),
            MenuItem::new(4, "Calzone", "Pizza", DietaryType::Veg, BuffetStatus::Absent, ""),
        ];
        let distribution = category_distribution(&MenuDataset::new(items).unwrap());

        let order: Vec<(&str, usize)> = distribution
            .iter()
            .map(|(category, count)| (category.as_str(), *count))
            .collect();
        assert_eq!(order, vec![("Pasta", 2), ("Dessert", 1), ("Pizza", 1)]);
    }
}
