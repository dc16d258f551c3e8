//! Category-driven preparation styles and per-dish guidance.

use serde::{Deserialize, Serialize};

/// How a category behaves in the kitchen.
///
/// Categories are free text in the dataset, so the mapping is by exact name;
/// anything unlisted is [`CategoryClass::General`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryClass {
    Fried,
    Pasta,
    Cake,
    Pastry,
    Cookie,
    General,
}

impl CategoryClass {
    pub fn of(category: &str) -> Self {
        match category {
            "Fried" => CategoryClass::Fried,
            "Pasta" => CategoryClass::Pasta,
            "Cake" => CategoryClass::Cake,
            "Pastry" => CategoryClass::Pastry,
            "Cookie" => CategoryClass::Cookie,
            _ => CategoryClass::General,
        }
    }

    /// Quick dishes can be cooked to order if the buffet runs out; bulk dishes
    /// are made ahead of service.
    pub fn prep_style(&self) -> Option<PrepStyle> {
        match self {
            CategoryClass::Fried | CategoryClass::Pasta => Some(PrepStyle::Quick),
            CategoryClass::Cake | CategoryClass::Pastry | CategoryClass::Cookie => {
                Some(PrepStyle::Bulk)
            }
            CategoryClass::General => None,
        }
    }

    pub fn guidance(&self) -> &'static PrepGuidance {
        match self {
            CategoryClass::Fried => &FRIED_GUIDANCE,
            CategoryClass::Pasta => &PASTA_GUIDANCE,
            CategoryClass::Cake => &CAKE_GUIDANCE,
            CategoryClass::Pastry | CategoryClass::Cookie | CategoryClass::General => {
                &GENERAL_GUIDANCE
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrepStyle {
    Quick,
    Bulk,
}

/// Cooking guidance for one dish category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrepGuidance {
    /// How much more than the estimate to cook.
    pub extra_percentage: u32,
    pub timing: &'static str,
    pub tip: &'static str,
    pub hold_time: &'static str,
}

static FRIED_GUIDANCE: PrepGuidance = PrepGuidance {
    extra_percentage: 30,
    timing: "Fry in small batches 30 minutes before service",
    tip: "Keep oil at 180°C for perfect crispiness",
    hold_time: "1 hour maximum",
};

static PASTA_GUIDANCE: PrepGuidance = PrepGuidance {
    extra_percentage: 40,
    timing: "Cook pasta 1 hour before, keep sauce separate",
    tip: "Shock pasta in ice water to stop cooking",
    hold_time: "2 hours (with sauce separately)",
};

static CAKE_GUIDANCE: PrepGuidance = PrepGuidance {
    extra_percentage: 20,
    timing: "Bake day before, decorate day of",
    tip: "Store in airtight containers",
    hold_time: "3 days",
};

static GENERAL_GUIDANCE: PrepGuidance = PrepGuidance {
    extra_percentage: 25,
    timing: "Prepare 2 hours before service",
    tip: "Monitor temperature carefully",
    hold_time: "2-3 hours",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prep_styles() {
        assert_eq!(CategoryClass::of("Fried").prep_style(), Some(PrepStyle::Quick));
        assert_eq!(CategoryClass::of("Cookie").prep_style(), Some(PrepStyle::Bulk));
        assert_eq!(CategoryClass::of("Pizza").prep_style(), None);
        // Matching is exact, as in the dataset.
        assert_eq!(CategoryClass::of("pasta"), CategoryClass::General);
    }

    #[test]
    fn test_guidance_percentages() {
        assert_eq!(CategoryClass::Pasta.guidance().extra_percentage, 40);
        assert_eq!(CategoryClass::Pastry.guidance().extra_percentage, 25);
    }
}
