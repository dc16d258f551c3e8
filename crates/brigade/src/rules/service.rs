//! Time-of-day service periods and what to do during each.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServicePeriod {
    /// 06:00 to 10:59.
    MorningRush,
    /// 11:00 to 14:59.
    LunchRush,
    /// 17:00 to 21:59.
    DinnerPeak,
    /// Everything else, including the 15:00-16:59 lull.
    OffPeak,
}

impl ServicePeriod {
    /// Period for an hour of the day (0-23). Out-of-range hours are off-peak.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=10 => ServicePeriod::MorningRush,
            11..=14 => ServicePeriod::LunchRush,
            17..=21 => ServicePeriod::DinnerPeak,
            _ => ServicePeriod::OffPeak,
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            ServicePeriod::MorningRush => "MORNING RUSH COMING!",
            ServicePeriod::LunchRush => "LUNCH RUSH ACTIVE!",
            ServicePeriod::DinnerPeak => "DINNER SERVICE PEAK!",
            ServicePeriod::OffPeak => "OFF-PEAK HOURS",
        }
    }

    /// Whether the kitchen is under load right now.
    pub fn is_urgent(&self) -> bool {
        matches!(self, ServicePeriod::LunchRush | ServicePeriod::DinnerPeak)
    }

    pub fn actions(&self) -> &'static [&'static str] {
        match self {
            ServicePeriod::MorningRush => &[
                "Prep breakfast items - pastries, breads",
                "Make coffee/tea stations ready",
                "Prep lunch ingredients in advance",
                "Check all equipment is working",
                "Review reservations for the day",
            ],
            ServicePeriod::LunchRush => &[
                "Bulk cook pasta - make extra batches",
                "Keep fried items coming",
                "Monitor buffet levels closely",
                "Prep dinner ingredients between orders",
                "Keep service fast - focus on efficiency",
            ],
            ServicePeriod::DinnerPeak => &[
                "Extra staff on stations",
                "Premium items ready to go",
                "Monitor quality carefully",
                "Quick replenishment system",
                "Dessert station fully stocked",
            ],
            ServicePeriod::OffPeak => &[
                "Prep for tomorrow - sauces, doughs",
                "Clean and organize stations",
                "Inventory check for next day",
                "Staff training if quiet",
                "Menu planning for upcoming days",
            ],
        }
    }
}

/// Checklist shown at the end of every session.
pub const IMMEDIATE_ACTIONS: [&str; 5] = [
    "Check inventory of popular items",
    "Prep stations for today's service",
    "Review today's reservations",
    "Brief staff on specials",
    "Quality check all stations",
];

pub const FUTURE_FOCUS: [&str; 5] = [
    "Monitor sales patterns",
    "Adjust quantities based on demand",
    "Experiment with new items",
    "Train staff on new techniques",
    "Gather customer feedback",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_boundaries() {
        assert_eq!(ServicePeriod::from_hour(5), ServicePeriod::OffPeak);
        assert_eq!(ServicePeriod::from_hour(6), ServicePeriod::MorningRush);
        assert_eq!(ServicePeriod::from_hour(11), ServicePeriod::LunchRush);
        assert_eq!(ServicePeriod::from_hour(15), ServicePeriod::OffPeak);
        assert_eq!(ServicePeriod::from_hour(16), ServicePeriod::OffPeak);
        assert_eq!(ServicePeriod::from_hour(17), ServicePeriod::DinnerPeak);
        assert_eq!(ServicePeriod::from_hour(22), ServicePeriod::OffPeak);
        assert_eq!(ServicePeriod::from_hour(99), ServicePeriod::OffPeak);
    }

    #[test]
    fn test_every_period_has_five_actions() {
        for hour in 0..24 {
            assert_eq!(ServicePeriod::from_hour(hour).actions().len(), 5);
        }
    }
}
