//! Event types and their preparation rules.

use serde::{Deserialize, Serialize};

/// The service occasion a chef is preparing for.
///
/// Labels that match no known occasion are kept verbatim in [`EventType::Other`]
/// so they can still be shown back to the user; every rule lookup treats them
/// like a normal day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    Wedding,
    CorporateEvent,
    BirthdayParty,
    Festival,
    Conference,
    #[default]
    NormalDay,
    Other(String),
}

impl EventType {
    /// Every occasion offered in the event selector.
    pub const KNOWN: [EventType; 6] = [
        EventType::Wedding,
        EventType::CorporateEvent,
        EventType::BirthdayParty,
        EventType::Festival,
        EventType::Conference,
        EventType::NormalDay,
    ];

    /// Display name, e.g. "Wedding" or a custom label as given.
    pub fn label(&self) -> &str {
        match self {
            EventType::Wedding => "Wedding",
            EventType::CorporateEvent => "Corporate Event",
            EventType::BirthdayParty => "Birthday Party",
            EventType::Festival => "Festival",
            EventType::Conference => "Conference",
            EventType::NormalDay => "Normal Day",
            EventType::Other(label) => label,
        }
    }

    /// Parse any label; unknown text becomes [`EventType::Other`] and blank
    /// text becomes a normal day.
    pub fn parse_lenient(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return EventType::NormalDay;
        }
        trimmed
            .parse()
            .unwrap_or_else(|_| EventType::Other(trimmed.to_string()))
    }

    /// Preparation rule for this occasion.
    pub fn rule(&self) -> &'static EventRule {
        match self {
            EventType::Wedding => &WEDDING,
            EventType::CorporateEvent => &CORPORATE_EVENT,
            EventType::BirthdayParty => &BIRTHDAY_PARTY,
            EventType::Festival => &FESTIVAL,
            EventType::NormalDay | EventType::Conference | EventType::Other(_) => &NORMAL_DAY,
        }
    }
}

impl std::str::FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match key.as_str() {
            "wedding" => Ok(EventType::Wedding),
            "corporateevent" | "corporate" => Ok(EventType::CorporateEvent),
            "birthdayparty" | "birthday" => Ok(EventType::BirthdayParty),
            "festival" => Ok(EventType::Festival),
            "conference" => Ok(EventType::Conference),
            "normalday" | "normal" => Ok(EventType::NormalDay),
            _ => Err(format!(
                "Unknown event type: {}. Use: wedding, corporate-event, birthday-party, festival, conference, or normal-day.",
                s
            )),
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for EventType {
    fn from(s: String) -> Self {
        EventType::parse_lenient(&s)
    }
}

impl From<EventType> for String {
    fn from(event: EventType) -> Self {
        match event {
            EventType::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

/// What to cook extra for an occasion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRule {
    pub extra_item_count: u32,
    pub focus_categories: &'static [&'static str],
    pub message: &'static str,
    pub specific_suggestions: &'static [&'static str],
}

static WEDDING: EventRule = EventRule {
    extra_item_count: 8,
    focus_categories: &["Cake", "Pastry", "Dessert", "Fried", "Seafood"],
    message: "Weddings require elegant presentation and variety",
    specific_suggestions: &[
        "Prepare 50% extra desserts for wedding guests",
        "Focus on visually appealing items like Caprese Salad",
        "Include both hot and cold canapés",
    ],
};

static CORPORATE_EVENT: EventRule = EventRule {
    extra_item_count: 5,
    focus_categories: &["Fried", "Starter", "Salad", "Cold Meat"],
    message: "Corporate events need quick, easy-to-eat finger foods",
    specific_suggestions: &[
        "Prepare 30% extra fried items (they disappear quickly)",
        "Focus on bite-sized portions",
        "Include vegetarian options for diverse preferences",
    ],
};

static BIRTHDAY_PARTY: EventRule = EventRule {
    extra_item_count: 6,
    focus_categories: &["Cake", "Pastry", "Fried", "Pasta"],
    message: "Birthday parties need fun, crowd-pleasing foods",
    specific_suggestions: &[
        "Prepare 40% extra cakes and desserts",
        "Include kid-friendly fried items",
        "Make pasta dishes in bulk (they're always popular)",
    ],
};

static FESTIVAL: EventRule = EventRule {
    extra_item_count: 10,
    focus_categories: &["Fried", "Street Food", "Dessert"],
    message: "Festivals require high-volume, portable foods",
    specific_suggestions: &[
        "Prepare 60% extra of everything (crowds are unpredictable)",
        "Focus on foods that can be eaten while standing",
        "Have backup ingredients ready for popular items",
    ],
};

static NORMAL_DAY: EventRule = EventRule {
    extra_item_count: 3,
    focus_categories: &["Salad", "Pasta", "Main Course"],
    message: "Regular service needs balanced options",
    specific_suggestions: &[
        "Prepare 20% extra of daily specials",
        "Monitor sales and adjust quantities tomorrow",
        "Focus on seasonal ingredients",
    ],
};
