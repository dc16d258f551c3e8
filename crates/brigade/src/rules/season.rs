//! Seasons and the categories that sell better or worse in them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    #[default]
    Summer,
    Winter,
    Spring,
    Autumn,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Summer, Season::Winter, Season::Spring, Season::Autumn];

    /// Capitalized season name.
    pub fn label(&self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Autumn => "Autumn",
        }
    }

    /// Parse a season name, defaulting to summer for anything unrecognized.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Categories to push and cut this season, with the reasoning tips.
    pub fn rule(&self) -> &'static SeasonRule {
        match self {
            Season::Summer => &SUMMER,
            Season::Winter => &WINTER,
            Season::Spring => &SPRING,
            Season::Autumn => &AUTUMN,
        }
    }

    /// Promotion ideas for the season; only summer and winter have any.
    pub fn promotion_ideas(&self) -> &'static [&'static str] {
        match self {
            Season::Summer => &[
                "Create 'Summer Refreshment' specials",
                "Offer cold pasta salads",
                "Feature fresh fruit desserts",
                "Promote outdoor dining options",
            ],
            Season::Winter => &[
                "Create 'Winter Warmers' menu",
                "Offer hot chocolate with desserts",
                "Feature hearty soups and stews",
                "Promote cozy dining atmosphere",
            ],
            Season::Spring | Season::Autumn => &[],
        }
    }
}

impl std::str::FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "summer" => Ok(Season::Summer),
            "winter" => Ok(Season::Winter),
            "spring" => Ok(Season::Spring),
            "autumn" | "fall" => Ok(Season::Autumn),
            _ => Err(format!(
                "Unknown season: {}. Use: summer, winter, spring, or autumn.",
                s
            )),
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonRule {
    /// Categories to cook more of, in priority order.
    pub increase: &'static [&'static str],
    pub decrease: &'static [&'static str],
    pub tips: &'static [&'static str],
}

static SUMMER: SeasonRule = SeasonRule {
    increase: &["Salad", "Seafood", "Cold Meat", "Dessert"],
    decrease: &["Fried", "Heavy Pasta"],
    tips: &[
        "People eat lighter in summer",
        "Cold dishes are more popular",
        "Focus on fresh, crisp ingredients",
    ],
};

static WINTER: SeasonRule = SeasonRule {
    increase: &["Fried", "Pasta", "Cake", "Main Course"],
    decrease: &["Salad", "Cold Meat"],
    tips: &[
        "Comfort foods are key in winter",
        "Hot, hearty dishes sell well",
        "Rich desserts are popular",
    ],
};

static SPRING: SeasonRule = SeasonRule {
    increase: &["Starter", "Salad", "Seafood"],
    decrease: &["Heavy Main Courses"],
    tips: &[
        "Light, fresh flavors work well",
        "Seasonal vegetables are a hit",
        "Balance between light and hearty",
    ],
};

static AUTUMN: SeasonRule = SeasonRule {
    increase: &["Pasta", "Cake", "Fried"],
    decrease: &["Summer Salads"],
    tips: &[
        "Harvest flavors are popular",
        "Warming foods start to sell",
        "Transition to heartier menu",
    ],
};
