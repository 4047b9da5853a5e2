//! Permanent-residence and citizenship timeline derivation.

use serde::{Deserialize, Serialize};

use crate::answers::{Experience, GermanLevel, ProfessionalField, QuizAnswers};

/// Timelines and requirement checklists for the long-term path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrCitizenshipPath {
    pub pr_timeline: String,
    pub pr_requirements: Vec<String>,
    pub citizenship_timeline: String,
    pub citizenship_requirements: Vec<String>,
    pub fast_track_tip: String,
}

/// Heuristic: will this applicant plausibly hold a Blue Card?
///
/// Salary in the Blue Card range, or the degree-free IT route with enough
/// experience.
fn likely_blue_card(answers: &QuizAnswers) -> bool {
    answers.salary.in_blue_card_range()
        || (answers.field == ProfessionalField::It
            && answers.experience != Experience::UpToTwo
            && answers.experience != Experience::Unknown)
}

/// Derive the PR and citizenship outlook.
pub fn pr_citizenship_path(answers: &QuizAnswers) -> PrCitizenshipPath {
    let (pr_timeline, pr_requirements, fast_track_tip) = if likely_blue_card(answers) {
        let (timeline, tip) = if answers.german_level.at_least_b1() {
            (
                "21 months with B1 German".to_string(),
                "You could have permanent residence in under 2 years! This is one of the \
                 fastest paths in all of Europe."
                    .to_string(),
            )
        } else {
            (
                "33 months with A1 German (or 21 months if you reach B1)".to_string(),
                "Start German now! Reaching B1 cuts your PR timeline by a full year.".to_string(),
            )
        };
        let requirements = vec![
            "Continuous employment in Germany for the full period".into(),
            "33 months pension contributions (reduced to 21 with B1 German)".into(),
            "Adequate living space for your family".into(),
            "Basic German (A1 minimum, B1 for fast-track)".into(),
            "No serious criminal record".into(),
            "Valid health insurance".into(),
        ];
        (timeline, requirements, tip)
    } else {
        let requirements = vec![
            "4 years of continuous residence in Germany".into(),
            "48 months of pension contributions".into(),
            "B1 German language certificate".into(),
            "Basic knowledge of German legal/social system".into(),
            "Adequate living space".into(),
            "Ability to support yourself without public benefits".into(),
        ];
        (
            "4 years (standard path)".to_string(),
            requirements,
            "If you can negotiate a salary above €44K, you'd qualify for Blue Card and \
             could get PR in 21-33 months instead of 4 years!"
                .to_string(),
        )
    };

    let citizenship_timeline = match answers.german_level {
        GermanLevel::C1Plus => "6 years (reduced from 8 with excellent German)",
        GermanLevel::B1 | GermanLevel::B2 => "7 years (reduced with good integration)",
        _ => "8 years (standard path)",
    }
    .to_string();

    let years = citizenship_timeline
        .split_whitespace()
        .next()
        .unwrap_or("8")
        .to_string();
    let citizenship_requirements = vec![
        format!("{years} years of legal residence in Germany"),
        "B1 German certificate (C1 for reduced timeline)".into(),
        "Pass citizenship test (Einbürgerungstest) - 33 questions about Germany".into(),
        "Financial self-sufficiency".into(),
        "No criminal record".into(),
        "Renounce previous citizenship (with some exceptions for EU, Switzerland, and \
         hardship cases)"
            .into(),
        "Commitment to German constitution (Grundgesetz)".into(),
    ];

    PrCitizenshipPath {
        pr_timeline,
        pr_requirements,
        citizenship_timeline,
        citizenship_requirements,
        fast_track_tip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::SalaryBand;

    #[test]
    fn blue_card_with_b1_german_gives_21_months() {
        let answers = QuizAnswers {
            salary: SalaryBand::From48To60,
            german_level: GermanLevel::B1,
            ..Default::default()
        };
        let path = pr_citizenship_path(&answers);
        assert_eq!(path.pr_timeline, "21 months with B1 German");
    }

    #[test]
    fn blue_card_without_german_gives_33_months() {
        let answers = QuizAnswers {
            salary: SalaryBand::Over60,
            german_level: GermanLevel::None,
            ..Default::default()
        };
        let path = pr_citizenship_path(&answers);
        assert!(path.pr_timeline.starts_with("33 months"));
        assert!(path.fast_track_tip.contains("Start German now"));
    }

    #[test]
    fn it_experience_counts_as_blue_card_route() {
        let answers = QuizAnswers {
            field: ProfessionalField::It,
            experience: Experience::TwoToFive,
            salary: SalaryBand::Under40,
            german_level: GermanLevel::B2,
            ..Default::default()
        };
        let path = pr_citizenship_path(&answers);
        assert_eq!(path.pr_timeline, "21 months with B1 German");
    }

    #[test]
    fn standard_path_is_four_years() {
        let answers = QuizAnswers {
            salary: SalaryBand::From40To44,
            ..Default::default()
        };
        let path = pr_citizenship_path(&answers);
        assert_eq!(path.pr_timeline, "4 years (standard path)");
        assert!(path
            .pr_requirements
            .iter()
            .any(|r| r.contains("48 months")));
    }

    #[test]
    fn citizenship_timeline_tracks_german() {
        let mut answers = QuizAnswers::default();
        assert!(pr_citizenship_path(&answers)
            .citizenship_timeline
            .starts_with("8 years"));

        answers.german_level = GermanLevel::B2;
        assert!(pr_citizenship_path(&answers)
            .citizenship_timeline
            .starts_with("7 years"));

        answers.german_level = GermanLevel::C1Plus;
        let path = pr_citizenship_path(&answers);
        assert!(path.citizenship_timeline.starts_with("6 years"));
        assert!(path.citizenship_requirements[0].starts_with("6 years"));
    }
}
