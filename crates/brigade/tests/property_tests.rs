//! Property-based tests for Brigade rule lookups and suggestion generation.
//!
//! Lookups are total: any text parses leniently to some key, every key has a
//! rule, and suggestion generation never panics or comes back empty.
//!
//! ```bash
//! cargo test -p brigade --test property_tests
//! PROPTEST_CASES=10000 cargo test -p brigade --test property_tests
//! ```

use proptest::prelude::*;

use brigade::rules::{parse_weekday_lenient, weekday_label};
use brigade::{
    BuffetStatus, DietaryType, EventType, MenuDataset, MenuFilter, MenuItem, Season, ServicePeriod,
    Severity, Situation, SuggestionEngine, SuggestionKind,
};

// =============================================================================
// Test Strategies
// =============================================================================

fn free_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_\\-\\.\\s]{0,40}"
}

fn category() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Starter".to_string()),
        Just("Pasta".to_string()),
        Just("Fried".to_string()),
        Just("Cake".to_string()),
        Just("Pastry".to_string()),
        Just("Seafood".to_string()),
        Just("Dessert".to_string()),
        "[A-Z][a-z]{2,10}",
    ]
}

fn menu() -> impl Strategy<Value = MenuDataset> {
    prop::collection::vec((category(), any::<bool>(), any::<bool>()), 0..40).prop_map(|rows| {
        let items = rows
            .into_iter()
            .enumerate()
            .map(|(i, (category, veg, buffet))| {
                MenuItem::new(
                    i as u32 + 1,
                    format!("Dish {}", i + 1),
                    category,
                    if veg { DietaryType::Veg } else { DietaryType::NonVeg },
                    if buffet { BuffetStatus::Present } else { BuffetStatus::Absent },
                    "Generated",
                )
            })
            .collect();
        MenuDataset::new(items).expect("generated ids are unique")
    })
}

fn season() -> impl Strategy<Value = Season> {
    prop::sample::select(Season::ALL.to_vec())
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn suggestions_never_empty(menu in menu(), label in free_text(), guests in 20u32..=1000, season in season()) {
        let event = EventType::parse_lenient(&label);
        let records = SuggestionEngine::generate_future_suggestions(&menu, &event, guests, season);

        prop_assert!(!records.is_empty());
        let has_buffet = menu.buffet_items().next().is_some();
        if has_buffet {
            prop_assert_eq!(records[0].kind, SuggestionKind::Event);
            prop_assert!(records.iter().all(|r| !r.is_warning()));
        } else {
            prop_assert_eq!(records.len(), 1);
            prop_assert!(records[0].is_warning());
        }
    }

    #[test]
    fn suggestion_action_items_show_at_most_three_names(menu in menu(), season in season()) {
        let records = SuggestionEngine::generate_future_suggestions(&menu, &EventType::NormalDay, 100, season);
        for record in records.iter().filter(|r| r.kind != SuggestionKind::Event) {
            if let Some((_, names)) = record.action_items[0].split_once(": ") {
                prop_assert!(names.split(", ").count() <= 3);
            }
        }
    }

    #[test]
    fn lenient_parsing_is_total(text in free_text()) {
        let _ = EventType::parse_lenient(&text).rule();
        let _ = Season::parse_lenient(&text).rule();
        let day = parse_weekday_lenient(&text);
        prop_assert!(!weekday_label(day).is_empty());
        let situation = Situation::parse_lenient(&text);
        for severity in Severity::ALL {
            prop_assert!(!situation.solution(severity).is_empty());
        }
    }

    #[test]
    fn daily_plan_focus_is_capped(menu in menu(), day in 0u8..7, customers in 20u32..=500) {
        let weekday = chrono::Weekday::try_from(day).expect("0..7 is a weekday");
        let plan = SuggestionEngine::generate_daily_plan(&menu, weekday, customers);

        prop_assert!(plan.focus_items.len() <= 3);
        prop_assert_eq!(plan.expected_customers, customers);
    }

    #[test]
    fn batches_grow_with_guests(guests in 20u32..1000) {
        for event in EventType::KNOWN.iter() {
            let fewer = SuggestionEngine::event_quantity_batches(guests, event);
            let more = SuggestionEngine::event_quantity_batches(guests + 1, event);
            prop_assert!(fewer <= more);
        }
    }

    #[test]
    fn quick_actions_cover_every_hour(hour in 0u32..24) {
        let advice = SuggestionEngine::quick_action_advice(hour);
        prop_assert_eq!(advice.actions.len(), 5);
        if (11..=14).contains(&hour) {
            prop_assert_eq!(advice.period, ServicePeriod::LunchRush);
        }
    }

    #[test]
    fn filter_never_adds_rows(menu in menu(), veg in any::<bool>()) {
        let dietary = if veg { DietaryType::Veg } else { DietaryType::NonVeg };
        let filtered = menu.filter(&MenuFilter::all().with_dietary_types([dietary]));

        prop_assert!(filtered.len() <= menu.len());
        prop_assert!(filtered.items().iter().all(|item| item.dietary_type == dietary));
    }
}
