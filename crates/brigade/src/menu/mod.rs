//! Menu dataset model: items, loading, sample data and filtering.

mod dataset;
mod filter;
mod item;
mod sample;

pub use dataset::{
    DatasetOrigin, MenuDataset, COLUMN_BUFFET, COLUMN_CATEGORY, COLUMN_ID, COLUMN_NAME,
    COLUMN_ORIGIN, COLUMN_TYPE,
};
pub use filter::MenuFilter;
pub use item::{BuffetStatus, DietaryType, MenuItem};
pub use sample::SAMPLE_ROW_COUNT;
