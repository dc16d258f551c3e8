//! Category / type / buffet-status selection over a menu.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::item::{BuffetStatus, DietaryType, MenuItem};

/// Multi-select filter. An empty selection on a dimension accepts every value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuFilter {
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub dietary_types: BTreeSet<DietaryType>,
    #[serde(default)]
    pub buffet_statuses: BTreeSet<BuffetStatus>,
}

impl MenuFilter {
    /// A filter that accepts everything.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.extend(categories.into_iter().map(Into::into));
        self
    }

    pub fn with_dietary_types(mut self, types: impl IntoIterator<Item = DietaryType>) -> Self {
        self.dietary_types.extend(types);
        self
    }

    pub fn with_buffet_statuses(mut self, statuses: impl IntoIterator<Item = BuffetStatus>) -> Self {
        self.buffet_statuses.extend(statuses);
        self
    }

    pub fn is_unrestricted(&self) -> bool {
        self.categories.is_empty() && self.dietary_types.is_empty() && self.buffet_statuses.is_empty()
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        (self.categories.is_empty() || self.categories.contains(&item.category))
            && (self.dietary_types.is_empty() || self.dietary_types.contains(&item.dietary_type))
            && (self.buffet_statuses.is_empty()
                || self.buffet_statuses.contains(&item.buffet_status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuDataset;

    #[test]
    fn test_unrestricted_filter_keeps_everything() {
        let dataset = MenuDataset::sample();
        let filter = MenuFilter::all();
        assert!(filter.is_unrestricted());
        assert_eq!(dataset.filter(&filter).len(), dataset.len());
    }

    #[test]
    fn test_filter_combines_dimensions() {
        let dataset = MenuDataset::sample();
        let filter = MenuFilter::all()
            .with_categories(["Cake"])
            .with_buffet_statuses([BuffetStatus::Present]);

        // Every sample cake is off the buffet.
        assert!(dataset.filter(&filter).is_empty());

        let filter = MenuFilter::all()
            .with_categories(["Starter", "Pasta"])
            .with_dietary_types([DietaryType::Veg]);
        let filtered = dataset.filter(&filter);
        assert_eq!(filtered.len(), 6);
        assert!(filtered.items().iter().all(MenuItem::is_veg));
    }
}
