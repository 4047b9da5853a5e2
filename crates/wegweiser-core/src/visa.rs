//! Visa-path candidate generation.
//!
//! Candidates are evaluated independently, in a fixed order, and appended to
//! a list; the gates are not mutually exclusive. Only the first
//! [`MAX_VISA_OPTIONS`] survive into the final result.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::answers::{Education, GermanLevel, JobOffer, ProfessionalField, QuizAnswers, SalaryBand};
use crate::scoring::OpportunityCardScore;

/// How many visa options a result may carry.
pub const MAX_VISA_OPTIONS: usize = 3;

/// How well a visa path fits the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLevel {
    High,
    Medium,
    Low,
}

impl fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchLevel::High => write!(f, "high"),
            MatchLevel::Medium => write!(f, "medium"),
            MatchLevel::Low => write!(f, "low"),
        }
    }
}

/// A recommended visa path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisaOption {
    pub name: String,
    #[serde(rename = "match")]
    pub match_level: MatchLevel,
    pub description: String,
    pub requirements: Vec<String>,
    pub next_steps: Vec<String>,
}

/// Generate the ordered candidate list (untruncated).
pub(crate) fn visa_candidates(
    answers: &QuizAnswers,
    opportunity: &OpportunityCardScore,
) -> Vec<VisaOption> {
    let mut candidates = Vec::new();

    let has_degree = answers.education.has_degree();
    let is_shortage = answers.field.is_shortage();
    let has_job_offer = answers.has_job_offer.is_confirmed();
    let salary = answers.salary;

    // EU Blue Card, IT specialist route. Since late 2023 no degree is needed
    // with three years of verifiable IT experience.
    if answers.field == ProfessionalField::It
        && answers.experience.has_any()
        && (salary.in_blue_card_range() || salary == SalaryBand::From40To44)
    {
        candidates.push(VisaOption {
            name: "EU Blue Card (IT Specialist Route)".into(),
            match_level: if has_job_offer {
                MatchLevel::High
            } else {
                MatchLevel::Medium
            },
            description: "Since Nov 2023, IT specialists with 3+ years experience can get \
                          Blue Card WITHOUT a degree. This is your best path."
                .into(),
            requirements: vec![
                "3+ years of IT work experience (verifiable)".into(),
                "Job offer with minimum €43,759 gross salary".into(),
                "No German language required for application".into(),
                "No degree required for IT specialists".into(),
            ],
            next_steps: vec![
                "Gather proof of IT experience (reference letters, contracts, LinkedIn)".into(),
                "Prepare GitHub portfolio or technical documentation".into(),
                if has_job_offer {
                    "Schedule embassy appointment immediately".into()
                } else {
                    "Focus job search on companies that sponsor visas".into()
                },
                "Start A1 German for faster path to permanent residence".into(),
            ],
        });
    }

    // Standard EU Blue Card.
    if has_degree && (salary.is_high() || (is_shortage && salary.is_mid())) {
        let pr_months = if answers.german_level.at_least_b1() { 21 } else { 33 };
        candidates.push(VisaOption {
            name: "EU Blue Card".into(),
            match_level: if has_job_offer {
                MatchLevel::High
            } else {
                MatchLevel::Medium
            },
            description: format!(
                "The premium work visa. Fast-track to PR in {pr_months} months. \
                 Family gets full work rights."
            ),
            requirements: vec![
                "Recognized university degree".into(),
                if is_shortage {
                    "Min €43,759 salary (shortage occupation)".into()
                } else {
                    "Min €48,300 salary".into()
                },
                "No German required for visa".into(),
                "Job matching your qualification".into(),
            ],
            next_steps: vec![
                "Verify degree on anabin.kmk.org".into(),
                if has_job_offer {
                    "Prepare visa documents".into()
                } else {
                    "Job search: LinkedIn, StepStone, company career pages".into()
                },
                "Schedule embassy appointment (book early - 4-8 week wait)".into(),
                "Start German A1 for faster PR path".into(),
            ],
        });
    }

    // Opportunity Card, gated purely on its points qualification.
    if opportunity.qualifies {
        candidates.push(VisaOption {
            name: "Opportunity Card (Chancenkarte)".into(),
            match_level: if has_job_offer {
                MatchLevel::Low
            } else if answers.has_job_offer == JobOffer::No {
                MatchLevel::High
            } else {
                MatchLevel::Medium
            },
            description: format!(
                "Job seeker visa - come to Germany and search for up to 1 year. \
                 You score {} points (need 6).",
                opportunity.total
            ),
            requirements: vec![
                format!("6+ points required (you have {})", opportunity.total),
                "A1 German OR B2 English certificate".into(),
                "Proof of funds (~€12,324 in blocked account)".into(),
                "Health insurance coverage".into(),
            ],
            next_steps: vec![
                if answers.german_level == GermanLevel::None {
                    "Get A1 German OR B2 English certificate".into()
                } else {
                    "Prepare language certificate".into()
                },
                "Open German blocked account (Expatrio, Fintiba)".into(),
                "Book embassy appointment for Chancenkarte".into(),
                "Plan job search strategy for when you arrive".into(),
            ],
        });
    }

    // Skilled Worker visa, for qualified professionals below the Blue Card
    // threshold.
    if (answers.education == Education::Vocational && answers.experience.has_any())
        || (has_degree && salary == SalaryBand::From40To44 && !is_shortage)
    {
        candidates.push(VisaOption {
            name: "Skilled Worker Visa (§18a/18b)".into(),
            match_level: if has_job_offer {
                MatchLevel::Medium
            } else {
                MatchLevel::Low
            },
            description: "For qualified professionals when Blue Card threshold isn't met. \
                          No salary minimum but needs qualification recognition."
                .into(),
            requirements: vec![
                "Recognized qualification (degree or vocational)".into(),
                "Job offer matching your qualification".into(),
                "Qualification recognition may be needed".into(),
                "German often required depending on role".into(),
            ],
            next_steps: vec![
                "Apply for qualification recognition (Anerkennung)".into(),
                "Check if partial recognition possible".into(),
                if answers.field == ProfessionalField::Healthcare {
                    "Start B1-B2 German immediately".into()
                } else {
                    "Improve German to B1".into()
                },
                "Target jobs that match your exact qualification".into(),
            ],
        });
    }

    // Healthcare path, independent of the other gates.
    if answers.field == ProfessionalField::Healthcare {
        candidates.push(VisaOption {
            name: "Healthcare Professional Path".into(),
            match_level: if answers.german_level.at_least_b1() {
                MatchLevel::High
            } else {
                MatchLevel::Medium
            },
            description: "Germany desperately needs healthcare workers. Special programs \
                          exist (Triple Win for nurses). B1-B2 German is mandatory."
                .into(),
            requirements: vec![
                "Nursing/medical qualification".into(),
                "B1-B2 German (non-negotiable for patient care)".into(),
                "Qualification recognition (Anerkennung)".into(),
                "May need adaptation course (Anpassungslehrgang)".into(),
            ],
            next_steps: vec![
                if answers.german_level.at_least_b1() {
                    "Apply for Anerkennung immediately".into()
                } else {
                    "Priority #1: Reach B1 German (this is your biggest hurdle)".into()
                },
                "Research Triple Win program (for nurses from select countries)".into(),
                "Check anabin for your qualification".into(),
                "Connect with German healthcare recruiters".into(),
            ],
        });
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{AgeBand, EnglishLevel, Experience};
    use crate::scoring::opportunity_card_score;

    fn candidates_for(answers: &QuizAnswers) -> Vec<VisaOption> {
        let score = opportunity_card_score(answers);
        visa_candidates(answers, &score)
    }

    #[test]
    fn it_specialist_route_requires_experience() {
        let mut answers = QuizAnswers {
            field: ProfessionalField::It,
            experience: Experience::FiveToTen,
            salary: SalaryBand::From44To48,
            ..Default::default()
        };
        assert!(candidates_for(&answers)
            .iter()
            .any(|v| v.name.contains("IT Specialist")));

        answers.experience = Experience::UpToTwo;
        assert!(!candidates_for(&answers)
            .iter()
            .any(|v| v.name.contains("IT Specialist")));
    }

    #[test]
    fn job_offer_upgrades_match() {
        let answers = QuizAnswers {
            field: ProfessionalField::It,
            experience: Experience::TenPlus,
            salary: SalaryBand::Over60,
            has_job_offer: JobOffer::Yes,
            ..Default::default()
        };
        let it_route = candidates_for(&answers)
            .into_iter()
            .find(|v| v.name.contains("IT Specialist"))
            .unwrap();
        assert_eq!(it_route.match_level, MatchLevel::High);
    }

    #[test]
    fn standard_blue_card_shortage_threshold() {
        // Mid salary only works in a shortage field.
        let mut answers = QuizAnswers {
            education: Education::Bachelors,
            field: ProfessionalField::Engineering,
            salary: SalaryBand::From44To48,
            ..Default::default()
        };
        assert!(candidates_for(&answers)
            .iter()
            .any(|v| v.name == "EU Blue Card"));

        answers.field = ProfessionalField::Finance;
        assert!(!candidates_for(&answers)
            .iter()
            .any(|v| v.name == "EU Blue Card"));
    }

    #[test]
    fn blue_card_description_tracks_german_level() {
        let answers = QuizAnswers {
            education: Education::Masters,
            field: ProfessionalField::Finance,
            salary: SalaryBand::Over60,
            german_level: GermanLevel::B1,
            ..Default::default()
        };
        let card = candidates_for(&answers)
            .into_iter()
            .find(|v| v.name == "EU Blue Card")
            .unwrap();
        assert!(card.description.contains("21 months"));
    }

    #[test]
    fn opportunity_card_match_prefers_searchers() {
        let answers = QuizAnswers {
            education: Education::Masters,
            field: ProfessionalField::It,
            experience: Experience::UpToTwo,
            age: AgeBand::Under30,
            german_level: GermanLevel::A2,
            english_level: EnglishLevel::B2,
            has_job_offer: JobOffer::No,
            ..Default::default()
        };
        let card = candidates_for(&answers)
            .into_iter()
            .find(|v| v.name.contains("Chancenkarte"))
            .unwrap();
        assert_eq!(card.match_level, MatchLevel::High);
    }

    #[test]
    fn healthcare_path_always_offered_for_healthcare() {
        let answers = QuizAnswers {
            field: ProfessionalField::Healthcare,
            ..Default::default()
        };
        let path = candidates_for(&answers)
            .into_iter()
            .find(|v| v.name.contains("Healthcare"))
            .unwrap();
        assert_eq!(path.match_level, MatchLevel::Medium);
    }

    #[test]
    fn skilled_worker_gates() {
        let vocational = QuizAnswers {
            education: Education::Vocational,
            experience: Experience::TwoToFive,
            ..Default::default()
        };
        assert!(candidates_for(&vocational)
            .iter()
            .any(|v| v.name.contains("Skilled Worker")));

        // Degree at the low salary band outside shortage fields.
        let low_salary_degree = QuizAnswers {
            education: Education::Bachelors,
            field: ProfessionalField::Finance,
            salary: SalaryBand::From40To44,
            ..Default::default()
        };
        assert!(candidates_for(&low_salary_degree)
            .iter()
            .any(|v| v.name.contains("Skilled Worker")));

        // A shortage field at the same degree and salary is excluded: the
        // gate exists for profiles the Blue Card routes cannot cover.
        let shortage_degree = QuizAnswers {
            education: Education::Bachelors,
            field: ProfessionalField::Science,
            salary: SalaryBand::From40To44,
            ..Default::default()
        };
        assert!(!candidates_for(&shortage_degree)
            .iter()
            .any(|v| v.name.contains("Skilled Worker")));
    }
}
