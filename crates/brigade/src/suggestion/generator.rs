//! Rule-based suggestion generation from a menu snapshot.
//!
//! Everything here is a pure function of the dataset and the request
//! parameters. Nothing is cached between calls and the dataset is never
//! modified.

use chrono::{Local, Timelike, Weekday};

use super::plan::{
    CategoryPrepGuide, DailyPlan, EventQuantityGuide, ItemPrepGuide, QuickActionAdvice,
    SeasonalPlan, ServiceSummary, BACKUP_GUEST_PERCENTAGE,
};
use super::{SuggestionKind, SuggestionRecord};
use crate::menu::MenuDataset;
use crate::rules::{
    day_plan_rule, quantity_rule, weekday_label, CategoryClass, EventType, PrepStyle, Season,
    ServicePeriod, Severity, Situation, FUTURE_FOCUS, GUESTS_PER_BATCH_UNIT, HOURLY_SCHEDULE,
    IMMEDIATE_ACTIONS,
};

/// Dish names taken from each matching category.
pub const ITEMS_PER_CATEGORY: usize = 2;

/// Names or categories listed in a single action item or daily plan.
pub const DISPLAY_LIMIT: usize = 3;

/// Dish names listed in a seasonal plan.
pub const SEASONAL_FOCUS_LIMIT: usize = 6;

/// Buffet categories covered by per-dish guidance.
pub const PREP_GUIDE_CATEGORIES: usize = 3;

/// Guest count used when a seasonal plan runs the full suggestion pass.
const SEASONAL_REFERENCE_GUESTS: u32 = 100;

/// Generates suggestions and plans using the static rule tables.
pub struct SuggestionEngine;

impl SuggestionEngine {
    /// Forward-looking suggestions for an event and season.
    ///
    /// Returns `[event, seasonal?, quick?, bulk?]`, or a single warning record
    /// when the dataset has no buffet items.
    pub fn generate_future_suggestions(
        dataset: &MenuDataset,
        event: &EventType,
        guest_count: u32,
        season: Season,
    ) -> Vec<SuggestionRecord> {
        if dataset.buffet_items().next().is_none() {
            tracing::debug!("no buffet items in selection");
            return vec![Self::no_buffet_warning()];
        }

        let mut suggestions = vec![Self::event_suggestion(event, guest_count)];
        suggestions.extend(Self::seasonal_suggestion(dataset, season));
        suggestions.extend(Self::specific_suggestions(dataset));

        tracing::debug!(
            event = %event,
            season = %season,
            count = suggestions.len(),
            "generated future suggestions"
        );
        suggestions
    }

    fn no_buffet_warning() -> SuggestionRecord {
        SuggestionRecord::new(
            SuggestionKind::Warning,
            "No Buffet Items Selected",
            "No buffet items found in current selection",
        )
        .with_details(["Please adjust filters to include buffet items"])
        .with_action_items(["Select 'Present' in Buffet Status filter"])
    }

    fn event_suggestion(event: &EventType, guest_count: u32) -> SuggestionRecord {
        let rule = event.rule();
        let focus = join_first(rule.focus_categories.iter().copied(), DISPLAY_LIMIT);

        SuggestionRecord::new(
            SuggestionKind::Event,
            format!("{} Preparation", event.label()),
            rule.message,
        )
        .with_details(rule.specific_suggestions.iter().copied())
        .with_action_items([
            format!("Cook {} extra items", rule.extra_item_count),
            format!("Focus on {}", focus),
            format!("Prepare for {} guests", guest_count),
        ])
    }

    fn seasonal_suggestion(dataset: &MenuDataset, season: Season) -> Option<SuggestionRecord> {
        let rule = season.rule();
        let increase_items = seasonal_items(dataset, season);
        if increase_items.is_empty() {
            return None;
        }

        Some(
            SuggestionRecord::new(
                SuggestionKind::Seasonal,
                format!("{} Season Strategy", season),
                format!("In {}, people prefer different types of food", season),
            )
            .with_details(rule.tips.iter().copied())
            .with_action_items([
                format!(
                    "Cook more: {}",
                    join_first(increase_items.iter().copied(), DISPLAY_LIMIT)
                ),
                format!(
                    "Focus on: {}",
                    join_first(rule.increase.iter().copied(), DISPLAY_LIMIT)
                ),
                format!(
                    "Reduce emphasis on: {}",
                    join_first(rule.decrease.iter().copied(), DISPLAY_LIMIT)
                ),
            ]),
        )
    }

    fn specific_suggestions(dataset: &MenuDataset) -> Vec<SuggestionRecord> {
        let mut quick_items = Vec::new();
        let mut bulk_items = Vec::new();
        for item in dataset.buffet_items() {
            match CategoryClass::of(&item.category).prep_style() {
                Some(PrepStyle::Quick) => quick_items.push(item.name.as_str()),
                Some(PrepStyle::Bulk) => bulk_items.push(item.name.as_str()),
                None => {}
            }
        }

        let mut records = Vec::new();
        if !quick_items.is_empty() {
            records.push(
                SuggestionRecord::new(
                    SuggestionKind::SpecificQuick,
                    "Quick-to-Prep Items",
                    "These items can be made quickly if you run out",
                )
                .with_details([
                    "Keep ingredients ready",
                    "Can be made in batches",
                    "Popular with last-minute orders",
                ])
                .with_action_items([
                    format!(
                        "Have ingredients ready for: {}",
                        join_first(quick_items.iter().copied(), DISPLAY_LIMIT)
                    ),
                    "Prep stations in advance".to_string(),
                    "Train staff on quick preparation".to_string(),
                ]),
            );
        }
        if !bulk_items.is_empty() {
            records.push(
                SuggestionRecord::new(
                    SuggestionKind::SpecificBulk,
                    "Make-in-Advance Items",
                    "Prepare these in bulk before service",
                )
                .with_details([
                    "Better quality when made in advance",
                    "Saves time during service",
                    "Consistent results",
                ])
                .with_action_items([
                    format!(
                        "Bake extra: {}",
                        join_first(bulk_items.iter().copied(), DISPLAY_LIMIT)
                    ),
                    "Store properly".to_string(),
                    "Portion before service".to_string(),
                ]),
            );
        }
        records
    }

    /// Cooking plan for a weekday.
    pub fn generate_daily_plan(
        dataset: &MenuDataset,
        day: Weekday,
        expected_customers: u32,
    ) -> DailyPlan {
        let rule = day_plan_rule(day);
        let focus_items = rule
            .popular_categories
            .iter()
            .flat_map(|category| dataset.names_in_category(category, ITEMS_PER_CATEGORY))
            .take(DISPLAY_LIMIT)
            .map(str::to_string)
            .collect();

        DailyPlan {
            day: weekday_label(day).to_string(),
            focus: rule.focus.to_string(),
            focus_items,
            notes: rule.notes.to_string(),
            expected_customers,
            extra_percentage: ((rule.extra_prep_multiplier - 1.0) * 100.0).round() as i32,
            schedule: &HOURLY_SCHEDULE,
        }
    }

    /// Batches of each popular item: `floor(guests / 25 * rate)`.
    pub fn event_quantity_batches(guest_count: u32, event: &EventType) -> u32 {
        let rate = quantity_rule(event).batches_per_25_guests;
        (f64::from(guest_count) / GUESTS_PER_BATCH_UNIT * rate).floor() as u32
    }

    /// Batch count, preparation steps and backup amount for an event.
    pub fn event_quantity_guide(guest_count: u32, event: &EventType) -> EventQuantityGuide {
        let rule = quantity_rule(event);
        EventQuantityGuide {
            event: event.clone(),
            guest_count,
            batches: Self::event_quantity_batches(guest_count, event),
            focus: rule.focus.to_string(),
            timing: rule.timing.to_string(),
            backup_guest_percentage: BACKUP_GUEST_PERCENTAGE,
        }
    }

    /// Seasonal strategy, featured dishes and promotion ideas.
    pub fn generate_seasonal_plan(
        dataset: &MenuDataset,
        season: Season,
        duration_weeks: u32,
    ) -> SeasonalPlan {
        let strategy = Self::generate_future_suggestions(
            dataset,
            &EventType::NormalDay,
            SEASONAL_REFERENCE_GUESTS,
            season,
        )
        .into_iter()
        .find(|record| record.kind == SuggestionKind::Seasonal);

        SeasonalPlan {
            season,
            duration_weeks,
            strategy,
            focus_items: seasonal_items(dataset, season)
                .into_iter()
                .take(SEASONAL_FOCUS_LIMIT)
                .map(str::to_string)
                .collect(),
            promotion_ideas: season
                .promotion_ideas()
                .iter()
                .map(|idea| idea.to_string())
                .collect(),
        }
    }

    /// Immediate fix for a situation at a severity level.
    pub fn quick_situation_solution(situation: &Situation, severity: Severity) -> &'static str {
        situation.solution(severity)
    }

    /// Actions for the service period containing `hour`.
    pub fn quick_action_advice(hour: u32) -> QuickActionAdvice {
        let period = ServicePeriod::from_hour(hour);
        QuickActionAdvice {
            hour,
            period,
            headline: period.headline().to_string(),
            actions: period.actions().iter().map(|a| a.to_string()).collect(),
        }
    }

    /// [`Self::quick_action_advice`] for the local wall-clock hour.
    pub fn quick_action_advice_now() -> QuickActionAdvice {
        Self::quick_action_advice(Local::now().hour())
    }

    /// Per-dish guidance for the first buffet categories.
    pub fn item_prep_guides(dataset: &MenuDataset) -> Vec<CategoryPrepGuide> {
        let mut guides: Vec<CategoryPrepGuide> = Vec::new();
        for item in dataset.buffet_items() {
            let index = match guides.iter().position(|g| g.category == item.category) {
                Some(index) => index,
                None if guides.len() < PREP_GUIDE_CATEGORIES => {
                    guides.push(CategoryPrepGuide {
                        category: item.category.clone(),
                        items: Vec::new(),
                    });
                    guides.len() - 1
                }
                None => continue,
            };

            let guidance = CategoryClass::of(&item.category).guidance();
            guides[index].items.push(ItemPrepGuide {
                name: item.name.clone(),
                category: item.category.clone(),
                dietary_type: item.dietary_type,
                extra_percentage: guidance.extra_percentage,
                timing: guidance.timing.to_string(),
                tip: guidance.tip.to_string(),
                hold_time: guidance.hold_time.to_string(),
            });
        }
        guides
    }

    /// Standing service reminders shown under the prep guides.
    pub fn service_summary() -> ServiceSummary {
        ServiceSummary {
            immediate_actions: IMMEDIATE_ACTIONS.iter().map(|a| a.to_string()).collect(),
            future_focus: FUTURE_FOCUS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Up to two names per seasonal "increase" category, in rule order.
fn seasonal_items(dataset: &MenuDataset, season: Season) -> Vec<&str> {
    season
        .rule()
        .increase
        .iter()
        .flat_map(|category| dataset.names_in_category(category, ITEMS_PER_CATEGORY))
        .collect()
}

fn join_first<'a>(values: impl IntoIterator<Item = &'a str>, limit: usize) -> String {
    values.into_iter().take(limit).collect::<Vec<_>>().join(", ")
}
