//! Built-in sample menu used when no dataset file can be read.

use super::item::{BuffetStatus, DietaryType, MenuItem};

/// Number of rows in the sample menu.
pub const SAMPLE_ROW_COUNT: usize = 30;

const SAMPLE_NAMES: [&str; SAMPLE_ROW_COUNT] = [
    "Bruschetta Classica",
    "Arancini al Ragù",
    "Caprese Salad",
    "Calamari Fritti",
    "Vitello Tonnato",
    "Panzanella",
    "Prosciutto e Melone",
    "Focaccia",
    "Olive Ascolane",
    "Carciofi alla Giudia",
    "Spaghetti Carbonara",
    "Lasagna",
    "Penne all'Arrabbiata",
    "Risotto ai Funghi",
    "Gnocchi al Pesto",
    "Pizza Margherita",
    "Pizza Quattro Formaggi",
    "Calzone",
    "Focaccia di Recco",
    "Pizza al Taglio",
    "Tiramisu",
    "Panna Cotta",
    "Cannoli",
    "Zabaglione",
    "Semifreddo",
    "Torta della Nonna",
    "Crostata di Ricotta",
    "Biscotti",
    "Amaretti",
    "Cantucci",
];

/// Category blocks in row order: (category, row count).
const SAMPLE_CATEGORY_BLOCKS: [(&str, usize); 5] = [
    ("Starter", 10),
    ("Pasta", 5),
    ("Pizza", 5),
    ("Dessert", 5),
    ("Cake", 5),
];

/// Repeating dietary pattern across rows.
const SAMPLE_TYPE_CYCLE: [DietaryType; 5] = [
    DietaryType::Veg,
    DietaryType::NonVeg,
    DietaryType::Veg,
    DietaryType::NonVeg,
    DietaryType::NonVeg,
];

/// The first rows are on the buffet, the rest are not.
const SAMPLE_BUFFET_ROWS: usize = 25;

const SAMPLE_ORIGIN: &str = "Traditional Italian";

/// Build the 30 sample rows.
pub(crate) fn sample_items() -> Vec<MenuItem> {
    let categories = SAMPLE_CATEGORY_BLOCKS
        .iter()
        .flat_map(|&(category, count)| std::iter::repeat_n(category, count));

    SAMPLE_NAMES
        .iter()
        .zip(categories)
        .enumerate()
        .map(|(index, (name, category))| {
            let buffet = if index < SAMPLE_BUFFET_ROWS {
                BuffetStatus::Present
            } else {
                BuffetStatus::Absent
            };
            MenuItem::new(
                index as u32 + 1,
                *name,
                category,
                SAMPLE_TYPE_CYCLE[index % SAMPLE_TYPE_CYCLE.len()],
                buffet,
                SAMPLE_ORIGIN,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shape() {
        let items = sample_items();
        assert_eq!(items.len(), SAMPLE_ROW_COUNT);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[29].id, 30);
        assert_eq!(items[10].name, "Spaghetti Carbonara");
        assert_eq!(items[10].category, "Pasta");
        assert_eq!(items[29].category, "Cake");
    }

    #[test]
    fn test_sample_buffet_and_type_pattern() {
        let items = sample_items();
        assert!(items[..25].iter().all(MenuItem::on_buffet));
        assert!(items[25..].iter().all(|i| !i.on_buffet()));
        assert_eq!(items[0].dietary_type, DietaryType::Veg);
        assert_eq!(items[4].dietary_type, DietaryType::NonVeg);
        assert_eq!(items[5].dietary_type, DietaryType::Veg);
        assert_eq!(items.iter().filter(|i| i.is_veg()).count(), 12);
    }
}
