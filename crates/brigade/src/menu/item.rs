//! Menu item row types.

use serde::{Deserialize, Serialize};

/// Dietary classification of a dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DietaryType {
    #[serde(rename = "Veg")]
    Veg,
    #[serde(rename = "Non-Veg")]
    NonVeg,
}

impl DietaryType {
    /// Label used in menu files and on screen.
    pub fn label(&self) -> &'static str {
        match self {
            DietaryType::Veg => "Veg",
            DietaryType::NonVeg => "Non-Veg",
        }
    }
}

impl std::str::FromStr for DietaryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "veg" | "vegetarian" => Ok(DietaryType::Veg),
            "nonveg" | "nonvegetarian" => Ok(DietaryType::NonVeg),
            _ => Err(format!("Unknown dietary type: '{}'. Use Veg or Non-Veg.", s)),
        }
    }
}

impl std::fmt::Display for DietaryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a dish is placed on the self-serve buffet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BuffetStatus {
    Present,
    Absent,
}

impl BuffetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BuffetStatus::Present => "Present",
            BuffetStatus::Absent => "Absent",
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, BuffetStatus::Present)
    }
}

impl std::str::FromStr for BuffetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "present" => Ok(BuffetStatus::Present),
            "absent" => Ok(BuffetStatus::Absent),
            _ => Err(format!("Unknown buffet status: '{}'. Use Present or Absent.", s)),
        }
    }
}

impl std::fmt::Display for BuffetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the menu dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    /// Open-ended category tag (Starter, Pasta, Cake, ...).
    pub category: String,
    pub dietary_type: DietaryType,
    pub buffet_status: BuffetStatus,
    /// Free-text origin or description.
    pub origin: String,
}

impl MenuItem {
    /// Create a menu item.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: impl Into<String>,
        dietary_type: DietaryType,
        buffet_status: BuffetStatus,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            dietary_type,
            buffet_status,
            origin: origin.into(),
        }
    }

    pub fn on_buffet(&self) -> bool {
        self.buffet_status.is_present()
    }

    pub fn is_veg(&self) -> bool {
        self.dietary_type == DietaryType::Veg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dietary_type_variants() {
        assert_eq!("Veg".parse::<DietaryType>(), Ok(DietaryType::Veg));
        assert_eq!("non-veg".parse::<DietaryType>(), Ok(DietaryType::NonVeg));
        assert_eq!("Non Veg".parse::<DietaryType>(), Ok(DietaryType::NonVeg));
        assert!("vegan".parse::<DietaryType>().is_err());
    }

    #[test]
    fn test_parse_buffet_status() {
        assert_eq!(" PRESENT ".parse::<BuffetStatus>(), Ok(BuffetStatus::Present));
        assert_eq!("absent".parse::<BuffetStatus>(), Ok(BuffetStatus::Absent));
        assert!("maybe".parse::<BuffetStatus>().is_err());
    }

    #[test]
    fn test_serde_uses_menu_labels() {
        let json = serde_json::to_string(&DietaryType::NonVeg).unwrap();
        assert_eq!(json, "\"Non-Veg\"");
    }
}
