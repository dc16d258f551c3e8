//! Operational situations, severity levels and their immediate fixes.

use serde::{Deserialize, Serialize};

/// Fix returned for a situation with no table entry.
pub const GENERIC_SOLUTION: &str = "Assess situation and act accordingly";

/// Something going wrong during service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Situation {
    RunningLow,
    UnexpectedCrowd,
    EquipmentIssue,
    StaffShortage,
    DeliveryDelay,
    Other(String),
}

impl Situation {
    pub const KNOWN: [Situation; 5] = [
        Situation::RunningLow,
        Situation::UnexpectedCrowd,
        Situation::EquipmentIssue,
        Situation::StaffShortage,
        Situation::DeliveryDelay,
    ];

    pub fn label(&self) -> &str {
        match self {
            Situation::RunningLow => "Running low on popular item",
            Situation::UnexpectedCrowd => "Unexpected crowd",
            Situation::EquipmentIssue => "Equipment issue",
            Situation::StaffShortage => "Staff shortage",
            Situation::DeliveryDelay => "Delivery delay",
            Situation::Other(label) => label,
        }
    }

    /// Parse a situation label. Unknown text is kept as a custom situation.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse()
            .unwrap_or_else(|_| Situation::Other(s.trim().to_string()))
    }

    /// The immediate action for this situation at the given severity.
    pub fn solution(&self, severity: Severity) -> &'static str {
        use Severity::*;

        match (self, severity) {
            (Situation::RunningLow, Low) => "Make a small extra batch",
            (Situation::RunningLow, Medium) => "Quickly prepare alternative similar item",
            (Situation::RunningLow, High) => "Portion remaining, offer complimentary alternative",
            (Situation::RunningLow, Critical) => {
                "Immediately announce 'sold out', offer free dessert"
            }

            (Situation::UnexpectedCrowd, Low) => "Add one extra staff member",
            (Situation::UnexpectedCrowd, Medium) => "Simplify menu, focus on quick items",
            (Situation::UnexpectedCrowd, High) => "Activate emergency prep, call backup staff",
            (Situation::UnexpectedCrowd, Critical) => "Implement waiting list, offer free drinks",

            (Situation::EquipmentIssue, Low) => "Use backup equipment",
            (Situation::EquipmentIssue, Medium) => "Modify menu to avoid affected equipment",
            (Situation::EquipmentIssue, High) => "Quick repair, temporary workaround",
            (Situation::EquipmentIssue, Critical) => "Emergency equipment rental, partial service",

            (Situation::StaffShortage, Low) => "Cross-train existing staff",
            (Situation::StaffShortage, Medium) => "Simplify service, focus on essentials",
            (Situation::StaffShortage, High) => "Call in backup staff, reduce menu",
            (Situation::StaffShortage, Critical) => "Limited service only, prioritize reservations",

            (Situation::DeliveryDelay, Low) => "Use substitute ingredients",
            (Situation::DeliveryDelay, Medium) => "Modify affected dishes",
            (Situation::DeliveryDelay, High) => "Create special with available ingredients",
            (Situation::DeliveryDelay, Critical) => "Temporarily remove items from menu",

            (Situation::Other(_), _) => GENERIC_SOLUTION,
        }
    }
}

impl std::str::FromStr for Situation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match key.as_str() {
            "runninglowonpopularitem" | "runninglow" | "lowstock" => Ok(Situation::RunningLow),
            "unexpectedcrowd" | "crowd" => Ok(Situation::UnexpectedCrowd),
            "equipmentissue" | "equipment" => Ok(Situation::EquipmentIssue),
            "staffshortage" | "staff" => Ok(Situation::StaffShortage),
            "deliverydelay" | "delivery" => Ok(Situation::DeliveryDelay),
            _ => Err(format!(
                "Unknown situation: {}. Use: running-low, unexpected-crowd, equipment-issue, staff-shortage, or delivery-delay.",
                s
            )),
        }
    }
}

impl std::fmt::Display for Situation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Situation {
    fn from(s: String) -> Self {
        Situation::parse_lenient(&s)
    }
}

impl From<Situation> for String {
    fn from(situation: Situation) -> Self {
        match situation {
            Situation::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

/// How urgent a situation is, from least to most.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    /// Parse a severity name, defaulting to low.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" | "med" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" | "crit" => Ok(Severity::Critical),
            _ => Err(format!(
                "Unknown severity: {}. Use: low, medium, high, or critical.",
                s
            )),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
