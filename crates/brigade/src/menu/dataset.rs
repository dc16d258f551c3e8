//! The immutable menu snapshot that every advisor operation reads from.

use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::filter::MenuFilter;
use super::item::{BuffetStatus, DietaryType, MenuItem};
use super::sample::sample_items;
use crate::error::{BrigadeError, Result};
use crate::input::{DataTable, Parser, SourceMetadata};

pub const COLUMN_ID: &str = "ID";
pub const COLUMN_NAME: &str = "Item Name";
pub const COLUMN_CATEGORY: &str = "Category";
pub const COLUMN_TYPE: &str = "Type";
pub const COLUMN_BUFFET: &str = "Buffet Status";
pub const COLUMN_ORIGIN: &str = "Origin/Details";

/// Where a dataset came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DatasetOrigin {
    /// Loaded from a menu file.
    File(SourceMetadata),
    /// The built-in sample menu.
    Sample,
    /// A filtered view of another dataset.
    Filtered,
    /// Assembled in code.
    Manual,
}

/// An ordered, read-only collection of menu items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuDataset {
    items: Vec<MenuItem>,
    origin: DatasetOrigin,
}

impl MenuDataset {
    /// Build a dataset from items, rejecting duplicate IDs and empty names.
    pub fn new(items: Vec<MenuItem>) -> Result<Self> {
        validate_items(&items)?;
        Ok(Self {
            items,
            origin: DatasetOrigin::Manual,
        })
    }

    /// The 30-row built-in sample menu.
    pub fn sample() -> Self {
        Self {
            items: sample_items(),
            origin: DatasetOrigin::Sample,
        }
    }

    /// Map a parsed table onto menu items.
    pub fn from_table(table: &DataTable) -> Result<Self> {
        let column = |name: &str| {
            table
                .column_index(name)
                .ok_or_else(|| BrigadeError::MissingColumn(name.to_string()))
        };
        let id_col = column(COLUMN_ID)?;
        let name_col = column(COLUMN_NAME)?;
        let category_col = column(COLUMN_CATEGORY)?;
        let type_col = column(COLUMN_TYPE)?;
        let buffet_col = column(COLUMN_BUFFET)?;
        let origin_col = column(COLUMN_ORIGIN)?;

        let mut items = Vec::with_capacity(table.row_count());
        for (index, row) in table.rows.iter().enumerate() {
            // 1-based, counting the header as row 1.
            let row_number = index + 2;
            let invalid = |message: String| BrigadeError::InvalidRecord {
                row: row_number,
                message,
            };
            let cell = |col: usize| row.get(col).map(|s| s.trim()).unwrap_or("");

            let id: u32 = cell(id_col)
                .parse()
                .map_err(|_| invalid(format!("invalid ID '{}'", cell(id_col))))?;
            if id == 0 {
                return Err(invalid("ID must be positive".to_string()));
            }
            let category = cell(category_col);
            if category.is_empty() {
                return Err(invalid("empty category".to_string()));
            }
            let dietary_type: DietaryType = cell(type_col).parse().map_err(invalid)?;
            let buffet_status: BuffetStatus = cell(buffet_col).parse().map_err(invalid)?;

            items.push(MenuItem::new(
                id,
                cell(name_col),
                category,
                dietary_type,
                buffet_status,
                cell(origin_col),
            ));
        }

        validate_items(&items)?;
        Ok(Self {
            items,
            origin: DatasetOrigin::Manual,
        })
    }

    /// Read and map a menu file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let (table, metadata) = Parser::new().parse_file(path)?;
        let mut dataset = Self::from_table(&table)?;
        dataset.origin = DatasetOrigin::File(metadata);
        Ok(dataset)
    }

    /// Read a menu file, falling back to the sample menu on any failure.
    pub fn load_or_sample(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(dataset) => {
                tracing::info!(
                    path = %path.display(),
                    items = dataset.len(),
                    "loaded menu dataset"
                );
                dataset
            }
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    %error,
                    "menu dataset unavailable, using sample menu"
                );
                Self::sample()
            }
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn origin(&self) -> &DatasetOrigin {
        &self.origin
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items currently placed on the buffet, in dataset order.
    pub fn buffet_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(|item| item.on_buffet())
    }

    /// Unique categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|item| item.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Unique categories sorted alphabetically.
    pub fn sorted_categories(&self) -> Vec<&str> {
        let mut categories = self.categories();
        categories.sort_unstable();
        categories
    }

    /// Whether any item belongs to `category` (exact match).
    pub fn has_category(&self, category: &str) -> bool {
        self.items.iter().any(|item| item.category == category)
    }

    /// Names of the first `limit` items in a category, in dataset order.
    pub fn names_in_category(&self, category: &str, limit: usize) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .map(|item| item.name.as_str())
            .take(limit)
            .collect()
    }

    /// Item count per category, in order of first appearance.
    pub fn category_counts(&self) -> IndexMap<String, usize> {
        let mut counts = IndexMap::new();
        for item in &self.items {
            *counts.entry(item.category.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// A new dataset containing only rows that pass the filter.
    pub fn filter(&self, filter: &MenuFilter) -> MenuDataset {
        MenuDataset {
            items: self
                .items
                .iter()
                .filter(|item| filter.matches(item))
                .cloned()
                .collect(),
            origin: DatasetOrigin::Filtered,
        }
    }
}

fn validate_items(items: &[MenuItem]) -> Result<()> {
    let mut ids = HashSet::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if item.name.trim().is_empty() {
            return Err(BrigadeError::InvalidRecord {
                row: index + 2,
                message: "empty item name".to_string(),
            });
        }
        if !ids.insert(item.id) {
            return Err(BrigadeError::DuplicateId(item.id));
        }
    }
    Ok(())
}
