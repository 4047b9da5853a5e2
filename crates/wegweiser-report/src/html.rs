//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use std::path::Path;

use anyhow::Result;

use wegweiser_core::report::AssessmentReport;
use wegweiser_core::visa::MatchLevel;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate a self-contained HTML page from an assessment report.
pub fn generate_html(report: &AssessmentReport) -> String {
    let result = &report.result;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>wegweiser assessment</title>\n");
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>Germany Eligibility Assessment</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Report <code>{}</code> | {}</p>\n",
        report.id,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Status banner
    let (status_class, status_text) = if result.eligible {
        ("ok", "Great news! You have multiple options.")
    } else {
        ("warn", "You may need more preparation.")
    };
    html.push_str(&format!(
        "<section class=\"status {status_class}\"><p>{status_text}</p>\
         <p>Estimated timeline: <strong>{}</strong></p></section>\n",
        html_escape(&result.estimated_timeline)
    ));

    // Points breakdown
    if let Some(score) = &result.opportunity_card_score {
        html.push_str("<section>\n<h2>Opportunity Card Points</h2>\n");
        html.push_str(&format!(
            "<p class=\"score\">{}/14 points{}</p>\n",
            score.total,
            if score.qualifies {
                " — qualifies".to_string()
            } else {
                format!(" — {} more needed", score.points_short())
            }
        ));
        html.push_str("<table>\n<thead><tr><th>Category</th><th>Points</th><th>Max</th><th>Detail</th></tr></thead>\n<tbody>\n");
        for row in &score.breakdown {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                html_escape(&row.category),
                row.points,
                row.max_points,
                html_escape(&row.detail)
            ));
        }
        html.push_str("</tbody></table>\n</section>\n");
    }

    // Visa options
    if !result.visa_types.is_empty() {
        html.push_str("<section>\n<h2>Visa Options</h2>\n");
        for visa in &result.visa_types {
            let badge = match visa.match_level {
                MatchLevel::High => "badge high",
                MatchLevel::Medium => "badge medium",
                MatchLevel::Low => "badge low",
            };
            html.push_str(&format!(
                "<article class=\"visa\">\n<h3>{} <span class=\"{badge}\">{}</span></h3>\n<p>{}</p>\n",
                html_escape(&visa.name),
                visa.match_level,
                html_escape(&visa.description)
            ));
            html.push_str("<h4>Requirements</h4>\n<ul>\n");
            for req in &visa.requirements {
                html.push_str(&format!("<li>{}</li>\n", html_escape(req)));
            }
            html.push_str("</ul>\n<h4>Next steps</h4>\n<ol>\n");
            for step in &visa.next_steps {
                html.push_str(&format!("<li>{}</li>\n", html_escape(step)));
            }
            html.push_str("</ol>\n</article>\n");
        }
        html.push_str("</section>\n");
    }

    // PR & citizenship
    let pr = &result.pr_citizenship_path;
    html.push_str("<section>\n<h2>Permanent Residence &amp; Citizenship</h2>\n");
    html.push_str(&format!(
        "<p><strong>PR:</strong> {}</p>\n<ul>\n",
        html_escape(&pr.pr_timeline)
    ));
    for req in &pr.pr_requirements {
        html.push_str(&format!("<li>{}</li>\n", html_escape(req)));
    }
    html.push_str(&format!(
        "</ul>\n<p><strong>Citizenship:</strong> {}</p>\n<ul>\n",
        html_escape(&pr.citizenship_timeline)
    ));
    for req in &pr.citizenship_requirements {
        html.push_str(&format!("<li>{}</li>\n", html_escape(req)));
    }
    html.push_str(&format!(
        "</ul>\n<p class=\"tip\">{}</p>\n</section>\n",
        html_escape(&pr.fast_track_tip)
    ));

    // Family
    if let Some(family) = &result.family_info {
        html.push_str("<section>\n<h2>Family</h2>\n");
        if !family.spouse_visa.is_empty() {
            html.push_str(&format!(
                "<p><strong>Spouse visa:</strong> {}</p>\n<p><strong>Work rights:</strong> {}</p>\n<p><strong>German:</strong> {}</p>\n",
                html_escape(&family.spouse_visa),
                html_escape(&family.spouse_work_rights),
                html_escape(&family.spouse_german_needed)
            ));
        }
        if !family.children_info.is_empty() {
            html.push_str(&format!(
                "<p><strong>Children:</strong> {}</p>\n",
                html_escape(&family.children_info)
            ));
        }
        html.push_str("<h4>Benefits</h4>\n<ul>\n");
        for benefit in &family.family_benefits {
            html.push_str(&format!("<li>{}</li>\n", html_escape(benefit)));
        }
        html.push_str("</ul>\n");
        if !family.tax_benefits.is_empty() {
            html.push_str("<h4>Tax benefits</h4>\n<ul>\n");
            for benefit in &family.tax_benefits {
                html.push_str(&format!("<li>{}</li>\n", html_escape(benefit)));
            }
            html.push_str("</ul>\n");
        }
        html.push_str("</section>\n");
    }

    // Roadmap
    html.push_str("<section>\n<h2>Roadmap</h2>\n");
    for phase in &result.roadmap {
        html.push_str(&format!(
            "<article class=\"phase\">\n<h3><span class=\"num\">{}</span> {} <span class=\"duration\">{}</span></h3>\n<ul>\n",
            html_escape(&phase.phase),
            html_escape(&phase.title),
            html_escape(&phase.duration)
        ));
        for task in &phase.tasks {
            html.push_str(&format!("<li>{}</li>\n", html_escape(task)));
        }
        html.push_str("</ul>\n</article>\n");
    }
    html.push_str("</section>\n");

    // German requirement
    html.push_str(&format!(
        "<section>\n<h2>German Language</h2>\n<p>{}</p>\n</section>\n",
        html_escape(&result.german_needed)
    ));

    html.push_str("<footer><p>This assessment is for informational purposes only. \
                   Immigration laws change frequently; verify with official sources.</p></footer>\n");
    html.push_str("</body>\n</html>\n");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &AssessmentReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, generate_html(report))?;
    Ok(())
}

const CSS: &str = r#"
body { font-family: -apple-system, "Segoe UI", Roboto, sans-serif; margin: 0 auto;
       max-width: 860px; padding: 2rem 1rem; color: #1f2428; line-height: 1.5; }
header h1 { margin-bottom: 0.25rem; }
.meta { color: #6a737d; font-size: 0.875rem; }
section { margin: 1.5rem 0; }
.status { padding: 1rem 1.25rem; border-radius: 8px; }
.status.ok { background: #e6f4ea; border: 1px solid #b7e1c2; }
.status.warn { background: #fff8e1; border: 1px solid #f0dca0; }
.score { font-size: 1.25rem; font-weight: 600; }
table { border-collapse: collapse; width: 100%; }
th, td { text-align: left; padding: 0.4rem 0.6rem; border-bottom: 1px solid #e1e4e8; }
th { background: #f6f8fa; }
.visa, .phase { border: 1px solid #e1e4e8; border-radius: 8px; padding: 0.75rem 1rem;
                margin: 0.75rem 0; }
.badge { font-size: 0.75rem; padding: 0.15rem 0.5rem; border-radius: 999px;
         vertical-align: middle; }
.badge.high { background: #e6f4ea; color: #1a7f37; }
.badge.medium { background: #ddf4ff; color: #0969da; }
.badge.low { background: #f6f8fa; color: #57606a; }
.num { display: inline-block; width: 1.6rem; height: 1.6rem; border-radius: 50%;
       background: #1f2428; color: #fff; text-align: center; line-height: 1.6rem;
       font-size: 0.875rem; }
.duration { color: #6a737d; font-size: 0.8rem; font-weight: 400; }
.tip { background: #fff8e1; padding: 0.6rem 0.9rem; border-radius: 6px; }
footer { margin-top: 2rem; color: #6a737d; font-size: 0.8rem; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use wegweiser_core::answers::{
        AgeBand, Education, Experience, GermanLevel, ProfessionalField, QuizAnswers, SalaryBand,
    };
    use wegweiser_core::engine::evaluate;
    use wegweiser_core::report::AssessmentReport;

    fn sample_report() -> AssessmentReport {
        let answers = QuizAnswers {
            education: Education::Masters,
            field: ProfessionalField::It,
            experience: Experience::TenPlus,
            age: AgeBand::Under30,
            german_level: GermanLevel::B1,
            salary: SalaryBand::Over60,
            ..Default::default()
        };
        AssessmentReport::new(answers.clone(), evaluate(&answers))
    }

    #[test]
    fn escape_handles_special_chars() {
        assert_eq!(
            html_escape(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn html_is_self_contained() {
        let html = generate_html(&sample_report());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("Opportunity Card Points"));
        assert!(html.contains("EU Blue Card"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn euro_amounts_survive_rendering() {
        let html = generate_html(&sample_report());
        assert!(html.contains("€43,759"));
    }

    #[test]
    fn write_report_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assessment.html");
        write_html_report(&sample_report(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<!DOCTYPE html>"));
    }
}
