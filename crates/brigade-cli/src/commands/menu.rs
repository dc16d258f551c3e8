//! Menu command - show the selected menu and its balance.

use brigade::analysis::category_distribution;
use brigade::MenuMetrics;
use colored::Colorize;

use super::{print_json, Session};

pub fn run(session: Session, by_category: bool) -> Result<(), Box<dyn std::error::Error>> {
    let menu = &session.menu;
    let metrics = MenuMetrics::compute(menu);

    if session.json {
        let output = if by_category {
            serde_json::json!({
                "metrics": metrics,
                "categories": category_distribution(menu),
            })
        } else {
            serde_json::json!({
                "metrics": metrics,
                "items": menu.items(),
            })
        };
        return print_json(&output);
    }

    println!(
        "{} {} items, {} on buffet ({:.1}%), {} vegetarian ({:.1}%)",
        "Menu:".cyan().bold(),
        metrics.total_items.to_string().white().bold(),
        metrics.buffet_items,
        metrics.buffet_percentage,
        metrics.veg_items,
        metrics.veg_percentage
    );
    println!();

    if menu.is_empty() {
        println!("{}", "No items match the current filters.".yellow());
        return Ok(());
    }

    if by_category {
        for (category, count) in category_distribution(menu) {
            println!("  {:<20} {}", category, count.to_string().white());
        }
        return Ok(());
    }

    println!(
        "  {:>4}  {:<28} {:<12} {:<8} {}",
        "ID".dimmed(),
        "Item".dimmed(),
        "Category".dimmed(),
        "Type".dimmed(),
        "Buffet".dimmed()
    );
    for item in menu.items() {
        let buffet = if item.on_buffet() {
            item.buffet_status.label().green()
        } else {
            item.buffet_status.label().red()
        };
        println!(
            "  {:>4}  {:<28} {:<12} {:<8} {}",
            item.id, item.name, item.category, item.dietary_type.label(), buffet
        );
    }

    Ok(())
}
