//! Plan values produced alongside suggestion records.

use serde::Serialize;

use super::SuggestionRecord;
use crate::menu::DietaryType;
use crate::rules::{EventType, ScheduleSlot, Season, ServicePeriod};

/// Extra guests to hold backup ingredients for, as a percentage.
pub const BACKUP_GUEST_PERCENTAGE: u32 = 20;

/// What to cook on a given weekday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPlan {
    /// Full weekday name.
    pub day: String,
    pub focus: String,
    /// At most three dish names drawn from the day's popular categories.
    pub focus_items: Vec<String>,
    pub notes: String,
    pub expected_customers: u32,
    /// Extra preparation over a normal day; negative on quiet days.
    pub extra_percentage: i32,
    pub schedule: &'static [ScheduleSlot],
}

/// Batch sizing for an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventQuantityGuide {
    pub event: EventType,
    pub guest_count: u32,
    /// Batches of each popular item.
    pub batches: u32,
    pub focus: String,
    pub timing: String,
    pub backup_guest_percentage: u32,
}

/// Seasonal strategy with the dishes to feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalPlan {
    pub season: Season,
    pub duration_weeks: u32,
    /// Absent when no buffet item is selected or no seasonal category is on the menu.
    pub strategy: Option<SuggestionRecord>,
    pub focus_items: Vec<String>,
    pub promotion_ideas: Vec<String>,
}

/// Immediate actions for the current part of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickActionAdvice {
    pub hour: u32,
    pub period: ServicePeriod,
    pub headline: String,
    pub actions: Vec<String>,
}

/// Cooking guidance for a single buffet dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemPrepGuide {
    pub name: String,
    pub category: String,
    pub dietary_type: DietaryType,
    pub extra_percentage: u32,
    pub timing: String,
    pub tip: String,
    pub hold_time: String,
}

/// Guidance for every buffet dish in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPrepGuide {
    pub category: String,
    pub items: Vec<ItemPrepGuide>,
}

/// Fixed checklists closing every session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceSummary {
    pub immediate_actions: Vec<String>,
    pub future_focus: Vec<String>,
}
