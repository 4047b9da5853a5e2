//! Markdown rendering for assessment reports and simulation comparisons.

use std::path::Path;

use anyhow::{Context, Result};

use wegweiser_core::report::AssessmentReport;
use wegweiser_sim::SimulationOutcome;

/// Render a full assessment as Markdown.
pub fn assessment_markdown(report: &AssessmentReport) -> String {
    let result = &report.result;
    let mut md = String::new();

    md.push_str("# Germany Eligibility Assessment\n\n");
    md.push_str(&format!(
        "Report `{}` | {}\n\n",
        report.id,
        report.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    md.push_str(&format!(
        "**Status:** {}\n\n",
        if result.eligible {
            "Eligible — multiple options found"
        } else {
            "More preparation needed"
        }
    ));
    md.push_str(&format!(
        "**Estimated timeline:** {}\n\n",
        result.estimated_timeline
    ));

    if let Some(score) = &result.opportunity_card_score {
        md.push_str("## Opportunity Card Points\n\n");
        md.push_str(&format!(
            "**{}/14 points** — {}\n\n",
            score.total,
            if score.qualifies {
                "qualifies (6+ points)".to_string()
            } else {
                format!("{} more needed", score.points_short())
            }
        ));
        md.push_str("| Category | Points | Max | Detail |\n");
        md.push_str("|----------|--------|-----|--------|\n");
        for row in &score.breakdown {
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                row.category, row.points, row.max_points, row.detail
            ));
        }
        md.push('\n');
    }

    if !result.visa_types.is_empty() {
        md.push_str("## Visa Options\n\n");
        for visa in &result.visa_types {
            md.push_str(&format!("### {} ({} match)\n\n", visa.name, visa.match_level));
            md.push_str(&format!("{}\n\n", visa.description));
            md.push_str("Requirements:\n\n");
            for req in &visa.requirements {
                md.push_str(&format!("- {req}\n"));
            }
            md.push_str("\nNext steps:\n\n");
            for (i, step) in visa.next_steps.iter().enumerate() {
                md.push_str(&format!("{}. {step}\n", i + 1));
            }
            md.push('\n');
        }
    }

    md.push_str("## Permanent Residence & Citizenship\n\n");
    let pr = &result.pr_citizenship_path;
    md.push_str(&format!("**PR:** {}\n\n", pr.pr_timeline));
    for req in &pr.pr_requirements {
        md.push_str(&format!("- {req}\n"));
    }
    md.push_str(&format!("\n**Citizenship:** {}\n\n", pr.citizenship_timeline));
    for req in &pr.citizenship_requirements {
        md.push_str(&format!("- {req}\n"));
    }
    md.push_str(&format!("\n> Tip: {}\n\n", pr.fast_track_tip));

    if let Some(family) = &result.family_info {
        md.push_str("## Family\n\n");
        if !family.spouse_visa.is_empty() {
            md.push_str(&format!("**Spouse visa:** {}\n\n", family.spouse_visa));
            md.push_str(&format!("**Work rights:** {}\n\n", family.spouse_work_rights));
            md.push_str(&format!("**German:** {}\n\n", family.spouse_german_needed));
        }
        if !family.children_info.is_empty() {
            md.push_str(&format!("**Children:** {}\n\n", family.children_info));
        }
        md.push_str("Benefits:\n\n");
        for benefit in &family.family_benefits {
            md.push_str(&format!("- {benefit}\n"));
        }
        if !family.tax_benefits.is_empty() {
            md.push_str("\nTax benefits:\n\n");
            for benefit in &family.tax_benefits {
                md.push_str(&format!("- {benefit}\n"));
            }
        }
        md.push('\n');
    }

    md.push_str("## Roadmap\n\n");
    for phase in &result.roadmap {
        md.push_str(&format!(
            "### Phase {}: {} ({})\n\n",
            phase.phase, phase.title, phase.duration
        ));
        for task in &phase.tasks {
            md.push_str(&format!("- {task}\n"));
        }
        md.push('\n');
    }

    md.push_str("## German Language\n\n");
    md.push_str(&format!("{}\n", result.german_needed));

    md
}

/// Render a simulation comparison as Markdown.
pub fn simulation_markdown(outcomes: &[SimulationOutcome]) -> String {
    let mut md = String::new();

    md.push_str("# 30-Day Learning Outcome Comparison\n\n");
    md.push_str("| Archetype | Active Days | Mastered | Learning | Unique | Mastery Rate | Avg Exposures |\n");
    md.push_str("|-----------|-------------|----------|----------|--------|--------------|---------------|\n");
    for outcome in outcomes {
        let stats = &outcome.final_stats;
        md.push_str(&format!(
            "| {} | {}/{} | {} | {} | {} | {:.0}% | {:.1} |\n",
            outcome.archetype,
            outcome.active_days,
            outcome.days,
            stats.mastered_phrases,
            stats.learning_phrases,
            stats.total_unique_phrases,
            stats.mastery_rate * 100.0,
            stats.avg_exposures_per_phrase,
        ));
    }
    md.push('\n');

    for outcome in outcomes {
        md.push_str(&format!("## {}\n\n", outcome.archetype));
        md.push_str(&format!(
            "{} exercises across {} phrases, final confidence {:.0}%.\n\n",
            outcome.total_exercises,
            outcome.final_stats.total_unique_phrases,
            outcome.final_confidence,
        ));
        md.push_str("Exercise coverage:\n\n");
        for (exercise, count) in &outcome.final_stats.exercise_type_coverage {
            md.push_str(&format!("- {exercise}: {count} phrases\n"));
        }
        md.push('\n');
    }

    md
}

/// Write an assessment report as Markdown.
pub fn write_markdown_report(report: &AssessmentReport, path: &Path) -> Result<()> {
    write_file(path, &assessment_markdown(report))
}

/// Write a simulation comparison as Markdown.
pub fn write_simulation_markdown(outcomes: &[SimulationOutcome], path: &Path) -> Result<()> {
    write_file(path, &simulation_markdown(outcomes))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use wegweiser_core::answers::{
        AgeBand, Education, Experience, FamilyStatus, GermanLevel, ProfessionalField, QuizAnswers,
        SalaryBand, SpouseEducation,
    };
    use wegweiser_core::engine::evaluate;
    use wegweiser_sim::{run_simulation, PhraseSet, SimConfig, DEDICATED};

    fn sample_report() -> AssessmentReport {
        let answers = QuizAnswers {
            education: Education::Masters,
            field: ProfessionalField::It,
            experience: Experience::FiveToTen,
            age: AgeBand::Under30,
            german_level: GermanLevel::B1,
            salary: SalaryBand::From48To60,
            family_status: FamilyStatus::MarriedNoKids,
            spouse_education: Some(SpouseEducation::Degree),
            ..Default::default()
        };
        let result = evaluate(&answers);
        AssessmentReport::new(answers, result)
    }

    #[test]
    fn assessment_markdown_has_all_sections() {
        let md = assessment_markdown(&sample_report());
        assert!(md.contains("# Germany Eligibility Assessment"));
        assert!(md.contains("## Opportunity Card Points"));
        assert!(md.contains("## Visa Options"));
        assert!(md.contains("## Permanent Residence & Citizenship"));
        assert!(md.contains("## Family"));
        assert!(md.contains("## Roadmap"));
        assert!(md.contains("| Qualification | 4 | 4 |"));
    }

    #[test]
    fn family_section_absent_for_singles() {
        let answers = QuizAnswers {
            family_status: FamilyStatus::Single,
            ..Default::default()
        };
        let report = AssessmentReport::new(answers.clone(), evaluate(&answers));
        let md = assessment_markdown(&report);
        assert!(!md.contains("## Family"));
    }

    #[test]
    fn simulation_markdown_lists_each_archetype() {
        let phrases = PhraseSet::placeholder(40);
        let config = SimConfig::default();
        let outcome = run_simulation(&DEDICATED, &phrases, &config, StdRng::seed_from_u64(4));
        let md = simulation_markdown(&[outcome]);
        assert!(md.contains("| Dedicated Learner |"));
        assert!(md.contains("## Dedicated Learner"));
        assert!(md.contains("recognition"));
    }

    #[test]
    fn write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.md");
        write_markdown_report(&sample_report(), &path).unwrap();
        assert!(path.exists());
    }
}
