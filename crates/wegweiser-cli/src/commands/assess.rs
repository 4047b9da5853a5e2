//! The `wegweiser assess` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use wegweiser_core::engine::evaluate;
use wegweiser_core::parser::{parse_answers, validate_answers};
use wegweiser_core::report::AssessmentReport;
use wegweiser_report::{write_html_report, write_markdown_report};

pub fn execute(answers_path: PathBuf, output: PathBuf, format: String) -> Result<()> {
    let answers = parse_answers(&answers_path)?;

    let warnings = validate_answers(&answers);
    for w in &warnings {
        let prefix = w
            .field
            .as_ref()
            .map(|f| format!("[{f}] "))
            .unwrap_or_default();
        eprintln!("  WARNING: {prefix}{}", w.message);
    }

    let result = evaluate(&answers);
    let report = AssessmentReport::new(answers, result);

    print_summary(&report);

    let formats: Vec<&str> = if format == "all" {
        vec!["json", "markdown", "html"]
    } else if format == "text" {
        vec![]
    } else {
        format.split(',').map(|s| s.trim()).collect()
    };

    if !formats.is_empty() {
        std::fs::create_dir_all(&output)?;
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");

        for fmt in &formats {
            match *fmt {
                "json" => {
                    let path = output.join(format!("assessment-{timestamp}.json"));
                    report.save_json(&path)?;
                    eprintln!("Report saved to: {}", path.display());
                }
                "markdown" | "md" => {
                    let path = output.join(format!("assessment-{timestamp}.md"));
                    write_markdown_report(&report, &path)?;
                    eprintln!("Markdown report: {}", path.display());
                }
                "html" => {
                    let path = output.join(format!("assessment-{timestamp}.html"));
                    write_html_report(&report, &path)?;
                    eprintln!("HTML report: {}", path.display());
                }
                _ => {
                    eprintln!("Unknown format: {fmt}");
                }
            }
        }
    }

    Ok(())
}

fn print_summary(report: &AssessmentReport) {
    let result = &report.result;

    println!(
        "{}",
        if result.eligible {
            "Eligible: multiple visa options found."
        } else {
            "Not yet eligible: more preparation needed."
        }
    );
    println!("Estimated timeline: {}", result.estimated_timeline);

    if let Some(score) = &result.opportunity_card_score {
        let mut table = Table::new();
        table.set_header(vec!["Category", "Points", "Max", "Detail"]);
        for row in &score.breakdown {
            table.add_row(vec![
                Cell::new(&row.category),
                Cell::new(row.points),
                Cell::new(row.max_points),
                Cell::new(&row.detail),
            ]);
        }
        println!("\nOpportunity Card: {}/14 points", score.total);
        println!("{table}");
        println!(
            "{}",
            if score.qualifies {
                "Qualifies for Opportunity Card (6+ points)".to_string()
            } else {
                format!("Needs {} more point(s) for Opportunity Card", score.points_short())
            }
        );
    }

    if !result.visa_types.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Visa Path", "Match"]);
        for visa in &result.visa_types {
            table.add_row(vec![
                Cell::new(&visa.name),
                Cell::new(visa.match_level.to_string()),
            ]);
        }
        println!("\nVisa options:");
        println!("{table}");
    }

    println!("\nPermanent residence: {}", result.pr_citizenship_path.pr_timeline);
    println!("Citizenship: {}", result.pr_citizenship_path.citizenship_timeline);
}
