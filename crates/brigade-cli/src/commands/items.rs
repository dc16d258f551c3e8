//! Items command - per-dish cooking guidance for buffet items.

use brigade::{DietaryType, SuggestionEngine};
use colored::Colorize;

use super::{print_json, print_summary, Session};

pub fn run(session: Session) -> Result<(), Box<dyn std::error::Error>> {
    let guides = SuggestionEngine::item_prep_guides(&session.menu);
    let summary = SuggestionEngine::service_summary();

    if session.json {
        return print_json(&serde_json::json!({
            "categories": guides,
            "service_summary": summary,
        }));
    }

    if guides.is_empty() {
        println!("{}", "No buffet items in the current selection.".yellow());
        println!();
    }

    for guide in &guides {
        println!("{}", guide.category.cyan().bold());
        for item in &guide.items {
            let marker = match item.dietary_type {
                DietaryType::Veg => item.dietary_type.label().green(),
                DietaryType::NonVeg => item.dietary_type.label().red(),
            };
            println!("  {} {}", item.name.white().bold(), format!("[{}]", marker).dimmed());
            println!("    Make {}% extra", item.extra_percentage);
            println!("    Timing:    {}", item.timing);
            println!("    Tip:       {}", item.tip);
            println!("    Hold time: {}", item.hold_time);
        }
        println!();
    }

    print_summary(&summary);
    Ok(())
}
