//! Suggestions and plans for the kitchen.
//!
//! [`SuggestionEngine`] turns a filtered menu plus request parameters
//! (event, season, weekday, guest count) into display-ready records and plans.

mod generator;
mod plan;
mod suggestion;

pub use generator::{
    SuggestionEngine, DISPLAY_LIMIT, ITEMS_PER_CATEGORY, PREP_GUIDE_CATEGORIES,
    SEASONAL_FOCUS_LIMIT,
};
pub use plan::{
    CategoryPrepGuide, DailyPlan, EventQuantityGuide, ItemPrepGuide, QuickActionAdvice,
    SeasonalPlan, ServiceSummary, BACKUP_GUEST_PERCENTAGE,
};
pub use suggestion::{SuggestionKind, SuggestionRecord};
