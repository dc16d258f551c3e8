//! Batch sizing per event.

use serde::Serialize;

use super::event::EventType;

/// Guests covered by one unit of `batches_per_25_guests`.
pub const GUESTS_PER_BATCH_UNIT: f64 = 25.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantityRule {
    pub batches_per_25_guests: f64,
    pub focus: &'static str,
    pub timing: &'static str,
}

static WEDDING: QuantityRule = QuantityRule {
    batches_per_25_guests: 1.5,
    focus: "Quality over quantity",
    timing: "3-hour service",
};

static CORPORATE_EVENT: QuantityRule = QuantityRule {
    batches_per_25_guests: 1.2,
    focus: "Efficiency and variety",
    timing: "2-hour reception",
};

static BIRTHDAY_PARTY: QuantityRule = QuantityRule {
    batches_per_25_guests: 1.3,
    focus: "Fun and variety",
    timing: "3-hour party",
};

static FESTIVAL: QuantityRule = QuantityRule {
    batches_per_25_guests: 1.6,
    focus: "High volume, quick service",
    timing: "All day",
};

static STANDARD: QuantityRule = QuantityRule {
    batches_per_25_guests: 1.1,
    focus: "Standard",
    timing: "2 hours",
};

/// Quantity rule for an event; normal days and anything unlisted get the standard rule.
pub fn quantity_rule(event: &EventType) -> &'static QuantityRule {
    match event {
        EventType::Wedding => &WEDDING,
        EventType::CorporateEvent => &CORPORATE_EVENT,
        EventType::BirthdayParty => &BIRTHDAY_PARTY,
        EventType::Festival => &FESTIVAL,
        EventType::NormalDay | EventType::Conference | EventType::Other(_) => &STANDARD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_day_uses_standard_rule() {
        let rule = quantity_rule(&EventType::NormalDay);
        assert_eq!(rule.batches_per_25_guests, 1.1);
        assert_eq!(rule.focus, "Standard");
        assert_eq!(rule.timing, "2 hours");
        assert_eq!(quantity_rule(&EventType::Other("Gala".into())), rule);
    }

    #[test]
    fn test_festival_rule() {
        assert_eq!(quantity_rule(&EventType::Festival).batches_per_25_guests, 1.6);
    }
}
