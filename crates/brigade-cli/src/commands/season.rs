//! Season command - seasonal menu strategy.

use brigade::{Season, SuggestionEngine};
use colored::Colorize;

use super::{parse_or_warn, print_json, print_record, Session};

pub fn run(
    session: Session,
    season: Option<String>,
    weeks: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let defaults = &session.config.defaults;
    let season = match season {
        Some(text) => parse_or_warn(&text, "season", Season::parse_lenient),
        None => defaults.season,
    };
    let weeks = weeks.unwrap_or(defaults.duration_weeks);
    let plan = SuggestionEngine::generate_seasonal_plan(&session.menu, season, weeks);

    if session.json {
        return print_json(&plan);
    }

    println!(
        "{} {}",
        format!("{} Menu Strategy", plan.season).cyan().bold(),
        format!("({} weeks)", plan.duration_weeks).dimmed()
    );
    println!();

    match &plan.strategy {
        Some(record) => print_record(record),
        None => {
            println!(
                "{}",
                "No seasonal categories found in the current selection.".yellow()
            );
            println!();
        }
    }

    if !plan.focus_items.is_empty() {
        println!("{}", "Feature these dishes:".yellow().bold());
        for item in &plan.focus_items {
            println!("  {} {}", "•".dimmed(), item);
        }
        println!();
    }

    if !plan.promotion_ideas.is_empty() {
        println!("{}", "Promotion ideas:".yellow().bold());
        for idea in &plan.promotion_ideas {
            println!("  {} {}", "•".dimmed(), idea);
        }
    }

    Ok(())
}
