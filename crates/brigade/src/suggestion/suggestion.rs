//! Suggestion records shown to the chef.

use serde::{Deserialize, Serialize};

/// Which rule produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionKind {
    /// Preparation for an event type.
    Event,
    /// Seasonal menu strategy.
    Seasonal,
    /// Dishes that can be cooked quickly if the buffet runs out.
    SpecificQuick,
    /// Dishes to make in bulk before service.
    SpecificBulk,
    /// Nothing could be suggested for the current selection.
    Warning,
}

impl SuggestionKind {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionKind::Event => "Event Preparation",
            SuggestionKind::Seasonal => "Seasonal Strategy",
            SuggestionKind::SpecificQuick => "Quick-to-Prep",
            SuggestionKind::SpecificBulk => "Make-in-Advance",
            SuggestionKind::Warning => "Warning",
        }
    }
}

/// One block of advice: a headline, supporting details and concrete actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRecord {
    pub kind: SuggestionKind,
    pub title: String,
    pub message: String,
    /// Advisory notes, in display order.
    pub details: Vec<String>,
    /// Imperative steps, in display order.
    pub action_items: Vec<String>,
}

impl SuggestionRecord {
    pub fn new(kind: SuggestionKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            details: Vec::new(),
            action_items: Vec::new(),
        }
    }

    pub fn with_details<I, S>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.details.extend(details.into_iter().map(Into::into));
        self
    }

    pub fn with_action_items<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.action_items.extend(actions.into_iter().map(Into::into));
        self
    }

    pub fn is_warning(&self) -> bool {
        self.kind == SuggestionKind::Warning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_record() {
        let record = SuggestionRecord::new(SuggestionKind::Event, "Wedding Preparation", "msg")
            .with_details(["a", "b"])
            .with_action_items(vec![String::from("Cook 8 extra items")]);

        assert_eq!(record.details, vec!["a", "b"]);
        assert_eq!(record.action_items.len(), 1);
        assert!(!record.is_warning());
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&SuggestionKind::SpecificQuick).unwrap();
        assert_eq!(json, "\"specific-quick\"");
        assert_eq!(SuggestionKind::SpecificBulk.label(), "Make-in-Advance");
    }
}
