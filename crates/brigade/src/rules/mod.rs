//! Static rule tables.
//!
//! Every table is keyed by a closed enum and looked up through a `match`, so
//! each lookup is total: unknown input is mapped to a designated default when
//! it is parsed (`parse_lenient`) or by an explicit fallback arm.

mod day;
mod event;
mod prep;
mod quantity;
mod season;
mod service;
mod situation;

pub use day::{
    day_plan_rule, parse_weekday_lenient, weekday_label, DayPlanRule, ScheduleSlot,
    HOURLY_SCHEDULE,
};
pub use event::{EventRule, EventType};
pub use prep::{CategoryClass, PrepGuidance, PrepStyle};
pub use quantity::{quantity_rule, QuantityRule, GUESTS_PER_BATCH_UNIT};
pub use season::{Season, SeasonRule};
pub use service::{ServicePeriod, FUTURE_FOCUS, IMMEDIATE_ACTIONS};
pub use situation::{Severity, Situation, GENERIC_SOLUTION};
