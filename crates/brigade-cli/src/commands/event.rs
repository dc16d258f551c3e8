//! Event command - suggestions and batch quantities for an event.

use brigade::{EventType, Season, SuggestionEngine};
use colored::Colorize;

use super::{parse_or_warn, print_json, print_record, Session};

pub fn run(
    session: Session,
    event: Option<String>,
    guests: Option<u32>,
    season: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let defaults = &session.config.defaults;
    let event = match event {
        Some(text) => parse_event(&text),
        None => defaults.event.clone(),
    };
    let season = match season {
        Some(text) => parse_or_warn(&text, "season", Season::parse_lenient),
        None => defaults.season,
    };
    let guests = guests.unwrap_or(defaults.guests);

    let suggestions =
        SuggestionEngine::generate_future_suggestions(&session.menu, &event, guests, season);
    let quantities = SuggestionEngine::event_quantity_guide(guests, &event);

    if session.json {
        return print_json(&serde_json::json!({
            "suggestions": suggestions,
            "quantities": quantities,
            "service_summary": SuggestionEngine::service_summary(),
        }));
    }

    println!(
        "{} {}",
        format!("{} for {} guests", event, guests).cyan().bold(),
        format!("({})", season).dimmed()
    );
    println!();

    for record in &suggestions {
        print_record(record);
    }

    println!("{}", "Quantity Guide".cyan().bold());
    println!(
        "  Prepare {} batches of each popular item",
        quantities.batches.to_string().white().bold()
    );
    println!("  Focus:  {}", quantities.focus);
    println!("  Timing: {}", quantities.timing);
    println!(
        "  Keep backup ingredients for {}% more guests",
        quantities.backup_guest_percentage
    );
    println!();

    super::print_summary(&SuggestionEngine::service_summary());
    Ok(())
}

fn parse_event(text: &str) -> EventType {
    let event = EventType::parse_lenient(text);
    if let EventType::Other(label) = &event {
        eprintln!(
            "{} Unknown event type '{}', using {} rules",
            "Warning:".yellow(),
            label,
            EventType::NormalDay
        );
    }
    event
}
