//! CLI command implementations.

pub mod daily;
pub mod event;
pub mod items;
pub mod menu;
pub mod quick;
pub mod season;
pub mod serve;
pub mod strategy;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use brigade::{MenuDataset, MenuFilter, SuggestionRecord};
use colored::Colorize;
use serde::Serialize;

use crate::config::BrigadeConfig;

/// Everything a command needs: the filtered menu, the resolved configuration
/// and the output mode.
pub struct Session {
    pub menu: MenuDataset,
    pub config: BrigadeConfig,
    pub json: bool,
}

impl Session {
    pub fn open(
        data: Option<PathBuf>,
        filter: &MenuFilter,
        config: BrigadeConfig,
        json: bool,
        verbose: bool,
    ) -> Self {
        let path = resolve_data_path(data, &config);
        let full = MenuDataset::load_or_sample(&path);
        let source = describe_origin(&full, &path);
        for category in filter.categories.iter().filter(|c| !full.has_category(c)) {
            eprintln!(
                "{} No items in category '{}'",
                "Warning:".yellow(),
                category
            );
        }
        let menu = if filter.is_unrestricted() {
            full
        } else {
            full.filter(filter)
        };
        tracing::debug!(items = menu.len(), "menu selection ready");

        if verbose && !json {
            println!("{} {} ({} items)", "Menu:".dimmed(), source, menu.len());
        }

        Self { menu, config, json }
    }
}

pub fn resolve_data_path(data: Option<PathBuf>, config: &BrigadeConfig) -> PathBuf {
    data.unwrap_or_else(|| config.dataset.path.clone())
}

fn describe_origin(menu: &MenuDataset, path: &Path) -> String {
    match menu.origin() {
        brigade::DatasetOrigin::Sample => "built-in sample menu".to_string(),
        _ => path.display().to_string(),
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Parse a rule key strictly, warning on stderr and falling back to the
/// lenient parse when the text is not recognized.
pub fn parse_or_warn<T, F>(text: &str, kind: &str, lenient: F) -> T
where
    T: FromStr + std::fmt::Display,
    F: FnOnce(&str) -> T,
{
    match text.parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            let value = lenient(text);
            eprintln!(
                "{} Unknown {} '{}', using {}",
                "Warning:".yellow(),
                kind,
                text,
                value
            );
            value
        }
    }
}

pub fn print_record(record: &SuggestionRecord) {
    let title = if record.is_warning() {
        record.title.yellow().bold()
    } else {
        record.title.cyan().bold()
    };
    println!("{}", title);
    println!("  {}", record.message);
    for detail in &record.details {
        println!("  {} {}", "-".dimmed(), detail);
    }
    if !record.action_items.is_empty() {
        println!("  {}", "Actions:".yellow());
        for action in &record.action_items {
            println!("    {} {}", "✓".green(), action);
        }
    }
    println!();
}

pub fn print_summary(summary: &brigade::suggestion::ServiceSummary) {
    println!("{}", "Immediate Actions".yellow().bold());
    for action in &summary.immediate_actions {
        println!("  {} {}", "•".dimmed(), action);
    }
    println!("{}", "Future Focus".yellow().bold());
    for action in &summary.future_focus {
        println!("  {} {}", "•".dimmed(), action);
    }
}
