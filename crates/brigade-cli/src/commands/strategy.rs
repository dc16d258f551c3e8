//! Strategy command - long-term menu analysis and growth plan.

use brigade::{Priority, StrategyReport};
use colored::Colorize;

use super::{print_json, Session};

/// Widest bar in the category chart.
const BAR_WIDTH: usize = 30;

pub fn run(session: Session) -> Result<(), Box<dyn std::error::Error>> {
    let report = StrategyReport::build(&session.menu);

    if session.json {
        return print_json(&report);
    }

    let metrics = &report.metrics;
    println!("{}", "Menu Performance".cyan().bold());
    println!("  Total menu items: {}", metrics.total_items.to_string().white().bold());
    println!("  Buffet coverage:  {:.1}%", metrics.buffet_percentage);
    println!("  Vegetarian items: {:.1}%", metrics.veg_percentage);
    println!();

    if let Some(max) = report.category_distribution.values().copied().max() {
        println!("{}", "Category Distribution".cyan().bold());
        for (category, count) in &report.category_distribution {
            let filled = (*count * BAR_WIDTH).div_ceil(max);
            println!(
                "  {:<16} {} {}",
                category,
                "█".repeat(filled).cyan(),
                count
            );
        }
        println!();
    }

    println!("{}", "Long-term Recommendations".cyan().bold());
    if report.is_balanced() {
        println!("  {}", "Your menu is well-balanced! Keep up the good work.".green());
    }
    for rec in &report.recommendations {
        let priority = match rec.priority {
            Priority::High => format!("({} Priority)", rec.priority).red(),
            Priority::Medium => format!("({} Priority)", rec.priority).yellow(),
        };
        println!("  {} {}", rec.title.white().bold(), priority);
        println!("    Reason: {}", rec.reason);
        println!("    Action: {}", rec.action);
    }
    println!();

    println!("{}", "3-Month Growth Plan".cyan().bold());
    for step in report.growth_plan {
        println!("  Month {}: {}", step.month, step.focus.white().bold());
        for action in step.actions {
            println!("    [ ] {}", action);
        }
    }

    Ok(())
}
