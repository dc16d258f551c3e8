//! CLI argument definitions using clap.

use brigade::{BuffetStatus, DietaryType, MenuFilter};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const MIN_CUSTOMERS: u32 = 20;
pub const MAX_CUSTOMERS: u32 = 500;
pub const MIN_GUESTS: u32 = 20;
pub const MAX_GUESTS: u32 = 1000;
pub const MIN_DURATION_WEEKS: u32 = 4;
pub const MAX_DURATION_WEEKS: u32 = 16;

/// Brigade: cooking and preparation advice for an Italian menu
#[derive(Parser)]
#[command(name = "brigade")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Menu dataset (CSV/TSV); the built-in sample menu is used if it cannot be read
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Extra configuration file, layered over ./brigade.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Menu filters shared by every command. An empty list keeps every value.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only include these categories (comma-separated or repeated)
    #[arg(long = "category", global = true, value_delimiter = ',')]
    pub categories: Vec<String>,

    /// Only include these dietary types (veg, non-veg)
    #[arg(long = "type", global = true, value_delimiter = ',')]
    pub dietary_types: Vec<DietaryType>,

    /// Only include these buffet statuses (present, absent)
    #[arg(long = "buffet", global = true, value_delimiter = ',')]
    pub buffet_statuses: Vec<BuffetStatus>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> MenuFilter {
        MenuFilter::all()
            .with_categories(self.categories.iter().map(|c| c.trim().to_string()))
            .with_dietary_types(self.dietary_types.iter().copied())
            .with_buffet_statuses(self.buffet_statuses.iter().copied())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the (filtered) menu with balance metrics
    Menu {
        /// List categories with item counts instead of items
        #[arg(long)]
        by_category: bool,
    },

    /// Cooking plan for a day of the week
    Daily {
        /// Day of the week (default: today)
        #[arg(short, long)]
        day: Option<String>,

        /// Expected customers
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(MIN_CUSTOMERS as i64..=MAX_CUSTOMERS as i64))]
        customers: Option<u32>,
    },

    /// Suggestions and batch quantities for an event
    Event {
        /// Event type (Wedding, Corporate Event, Birthday Party, Festival, Conference, Normal Day)
        #[arg(short, long)]
        event: Option<String>,

        /// Expected guests
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(MIN_GUESTS as i64..=MAX_GUESTS as i64))]
        guests: Option<u32>,

        /// Season (Summer, Winter, Spring, Autumn)
        #[arg(short, long)]
        season: Option<String>,
    },

    /// Seasonal menu strategy
    Season {
        /// Season (Summer, Winter, Spring, Autumn)
        #[arg(short, long)]
        season: Option<String>,

        /// Length of the seasonal menu in weeks
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(MIN_DURATION_WEEKS as i64..=MAX_DURATION_WEEKS as i64))]
        weeks: Option<u32>,
    },

    /// Immediate actions for the current hour or a specific situation
    Quick {
        /// Situation (running-low, unexpected-crowd, equipment-issue, staff-shortage, delivery-delay)
        #[arg(long)]
        situation: Option<String>,

        /// Severity (low, medium, high, critical)
        #[arg(long, default_value = "low")]
        severity: String,

        /// Hour of day, 0-23 (default: now)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=23))]
        hour: Option<u32>,
    },

    /// Long-term menu analysis and growth plan
    Strategy,

    /// Per-dish cooking guidance for buffet items
    Items,

    /// Serve the advisor as a JSON API
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port for web server
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_filters_and_bounds() {
        let cli = Cli::try_parse_from([
            "brigade",
            "event",
            "--guests",
            "150",
            "--category",
            "Pasta,Cake",
            "--type",
            "veg",
        ])
        .unwrap();

        assert_eq!(cli.filters.categories, vec!["Pasta", "Cake"]);
        assert_eq!(cli.filters.dietary_types, vec![DietaryType::Veg]);
        assert!(matches!(cli.command, Commands::Event { guests: Some(150), .. }));
    }

    #[test]
    fn test_quick_severity_defaults_to_low() {
        let cli = Cli::try_parse_from(["brigade", "quick", "--situation", "Delivery delay"]).unwrap();
        assert!(matches!(cli.command, Commands::Quick { ref severity, .. } if severity == "low"));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["brigade", "event", "--guests", "5"]).is_err());
        assert!(Cli::try_parse_from(["brigade", "daily", "--customers", "501"]).is_err());
        assert!(Cli::try_parse_from(["brigade", "season", "--weeks", "17"]).is_err());
    }
}
