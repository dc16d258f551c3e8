//! Daily command - cooking plan for a day of the week.

use brigade::rules::parse_weekday_lenient;
use brigade::SuggestionEngine;
use chrono::{Datelike, Local, Weekday};
use colored::Colorize;

use super::{parse_or_warn, print_json, Session};

pub fn run(
    session: Session,
    day: Option<String>,
    customers: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let weekday: Weekday = match day {
        Some(text) => parse_or_warn(&text, "day", parse_weekday_lenient),
        None => Local::now().weekday(),
    };
    let customers = customers.unwrap_or(session.config.defaults.expected_customers);
    let plan = SuggestionEngine::generate_daily_plan(&session.menu, weekday, customers);

    if session.json {
        return print_json(&plan);
    }

    println!(
        "{} {}",
        format!("{} Cooking Plan", plan.day).cyan().bold(),
        format!("({} customers)", plan.expected_customers).dimmed()
    );
    println!();
    println!("  Focus:  {}", plan.focus.white().bold());
    println!("  Notes:  {}", plan.notes);

    let extra = match plan.extra_percentage {
        p if p > 0 => format!("+{}%", p).green(),
        p if p < 0 => format!("{}%", p).blue(),
        _ => "0%".normal(),
    };
    println!("  Extra preparation: {}", extra);
    println!();

    println!("{}", "Cook more of:".yellow().bold());
    if plan.focus_items.is_empty() {
        println!("  {}", "No dishes from today's popular categories on the menu".dimmed());
    }
    for item in &plan.focus_items {
        println!("  {} {}", "•".dimmed(), item);
    }
    println!();

    println!("{}", "Schedule:".yellow().bold());
    for slot in plan.schedule {
        println!("  {}", slot.label.white());
        for task in slot.tasks {
            println!("    {} {}", "-".dimmed(), task);
        }
    }

    Ok(())
}
