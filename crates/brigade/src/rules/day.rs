//! Day-of-week service plans.

use chrono::Weekday;
use serde::Serialize;

/// How a weekday usually runs and what to prepare for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlanRule {
    pub focus: &'static str,
    /// Preparation volume relative to a normal day (1.0 = no extra).
    pub extra_prep_multiplier: f64,
    pub popular_categories: &'static [&'static str],
    pub notes: &'static str,
}

/// Full English weekday name.
pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse a weekday name or abbreviation, defaulting to Monday.
pub fn parse_weekday_lenient(s: &str) -> Weekday {
    s.trim().parse().unwrap_or(Weekday::Mon)
}

/// Production rule for a weekday.
pub fn day_plan_rule(day: Weekday) -> &'static DayPlanRule {
    match day {
        Weekday::Mon => &MONDAY,
        Weekday::Tue => &TUESDAY,
        Weekday::Wed => &WEDNESDAY,
        Weekday::Thu => &THURSDAY,
        Weekday::Fri => &FRIDAY,
        Weekday::Sat => &SATURDAY,
        Weekday::Sun => &SUNDAY,
    }
}

static MONDAY: DayPlanRule = DayPlanRule {
    focus: "Comfort foods",
    extra_prep_multiplier: 0.8,
    popular_categories: &["Pasta", "Soup", "Salad"],
    notes: "Slow start to the week",
};

static TUESDAY: DayPlanRule = DayPlanRule {
    focus: "Regular menu",
    extra_prep_multiplier: 0.9,
    popular_categories: &["Fried", "Main Course"],
    notes: "Steady business",
};

static WEDNESDAY: DayPlanRule = DayPlanRule {
    focus: "Mid-week specials",
    extra_prep_multiplier: 1.0,
    popular_categories: &["Pasta", "Seafood", "Dessert"],
    notes: "Try new items",
};

static THURSDAY: DayPlanRule = DayPlanRule {
    focus: "Weekend prep",
    extra_prep_multiplier: 1.1,
    popular_categories: &["Fried", "Appetizers"],
    notes: "Start weekend preparation",
};

static FRIDAY: DayPlanRule = DayPlanRule {
    focus: "Weekend crowd",
    extra_prep_multiplier: 1.3,
    popular_categories: &["Seafood", "Fried", "Dessert"],
    notes: "Busy night - prepare extra",
};

static SATURDAY: DayPlanRule = DayPlanRule {
    focus: "Special occasions",
    extra_prep_multiplier: 1.5,
    popular_categories: &["Cake", "Pastry", "Specialty Items"],
    notes: "Maximum preparation needed",
};

static SUNDAY: DayPlanRule = DayPlanRule {
    focus: "Family meals",
    extra_prep_multiplier: 1.2,
    popular_categories: &["Pasta", "Main Course", "Dessert"],
    notes: "Family dining focus",
};

/// One block of the hourly kitchen schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSlot {
    pub label: &'static str,
    pub tasks: &'static [&'static str],
}

/// The same four-slot schedule applies every day.
pub static HOURLY_SCHEDULE: [ScheduleSlot; 4] = [
    ScheduleSlot {
        label: "Morning Prep (8 AM - 11 AM)",
        tasks: &["Check inventory", "Prep vegetables", "Make sauces", "Prepare doughs"],
    },
    ScheduleSlot {
        label: "Lunch Rush (11 AM - 2 PM)",
        tasks: &["Cook pasta", "Fry items", "Plate salads", "Monitor buffet"],
    },
    ScheduleSlot {
        label: "Afternoon (2 PM - 5 PM)",
        tasks: &["Clean and reset", "Prep for dinner", "Make desserts", "Restock"],
    },
    ScheduleSlot {
        label: "Dinner Service (5 PM - 10 PM)",
        tasks: &["Full service", "Extra staff", "Quick replenishment", "Quality check"],
    },
];
