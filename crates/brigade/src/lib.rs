//! Brigade: rule-based cooking and preparation advisor for Italian menus.
//!
//! Brigade reads a tabular menu (one row per dish with category, dietary type
//! and buffet status) and answers the questions a head chef asks before and
//! during service: what to cook more of for an event or season, how many
//! batches to prepare, what to do when something goes wrong right now.
//!
//! # Core Principles
//!
//! - **Rule-driven**: every answer comes from fixed lookup tables keyed by
//!   closed enums, so unknown input always lands on a default
//! - **Non-destructive**: the loaded menu is an immutable snapshot; filters
//!   produce new views
//! - **Always available**: a missing or broken menu file falls back to a
//!   built-in sample menu
//!
//! # Example
//!
//! ```no_run
//! use brigade::{EventType, MenuDataset, Season, SuggestionEngine};
//!
//! let menu = MenuDataset::load_or_sample("italian_menu.csv");
//! let suggestions =
//!     SuggestionEngine::generate_future_suggestions(&menu, &EventType::Wedding, 150, Season::Winter);
//!
//! for suggestion in &suggestions {
//!     println!("{}: {}", suggestion.title, suggestion.message);
//! }
//! ```

pub mod analysis;
pub mod error;
pub mod input;
pub mod menu;
pub mod rules;
pub mod suggestion;

pub use analysis::{MenuMetrics, Priority, Recommendation, StrategyReport};
pub use error::{BrigadeError, Result};
pub use input::{DataTable, Parser, SourceMetadata};
pub use menu::{BuffetStatus, DatasetOrigin, DietaryType, MenuDataset, MenuFilter, MenuItem};
pub use rules::{EventType, Season, ServicePeriod, Severity, Situation};
pub use suggestion::{
    CategoryPrepGuide, DailyPlan, EventQuantityGuide, QuickActionAdvice, SeasonalPlan,
    SuggestionEngine, SuggestionKind, SuggestionRecord,
};
