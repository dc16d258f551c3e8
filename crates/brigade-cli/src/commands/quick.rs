//! Quick command - immediate actions for now or for a situation.

use brigade::{Severity, Situation, SuggestionEngine};
use colored::Colorize;

use super::{parse_or_warn, print_json};

pub fn run(
    situation: Option<String>,
    severity: String,
    hour: Option<u32>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let advice = match hour {
        Some(hour) => SuggestionEngine::quick_action_advice(hour),
        None => SuggestionEngine::quick_action_advice_now(),
    };
    let solution = situation.map(|text| {
        let situation = Situation::parse_lenient(&text);
        let severity = parse_or_warn(&severity, "severity", Severity::parse_lenient);
        let solution = SuggestionEngine::quick_situation_solution(&situation, severity);
        (situation, severity, solution)
    });

    if json_output {
        let solution = solution.as_ref().map(|(situation, severity, solution)| {
            serde_json::json!({
                "situation": situation,
                "severity": severity,
                "solution": solution,
            })
        });
        return print_json(&serde_json::json!({
            "advice": advice,
            "solution": solution,
        }));
    }

    if let Some((situation, severity, solution)) = &solution {
        let severity_label = match severity {
            Severity::Low => severity.label().green(),
            Severity::Medium => severity.label().yellow(),
            Severity::High => severity.label().red(),
            Severity::Critical => severity.label().red().bold(),
        };
        println!(
            "{} {} ({})",
            "Situation:".cyan().bold(),
            situation,
            severity_label
        );
        println!("  {} {}", "→".yellow(), solution.white().bold());
        println!();
    }

    let headline = if advice.period.is_urgent() {
        advice.headline.red().bold()
    } else {
        advice.headline.cyan().bold()
    };
    println!("{} {}", headline, format!("({}:00)", advice.hour).dimmed());
    for (index, action) in advice.actions.iter().enumerate() {
        println!("  {}. {}", index + 1, action);
    }

    Ok(())
}
