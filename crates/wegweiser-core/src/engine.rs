//! Central eligibility engine.
//!
//! `evaluate` is a pure projection of a [`QuizAnswers`] value: deterministic,
//! side-effect-free, and total. Absent or unrecognized answers degrade to
//! lower scores and fewer matches, never to an error.

use serde::{Deserialize, Serialize};

use crate::answers::QuizAnswers;
use crate::family::{family_info, FamilyInfo};
use crate::guidance::{estimated_timeline, german_requirement};
use crate::pr_path::{pr_citizenship_path, PrCitizenshipPath};
use crate::roadmap::{generate_roadmap, RoadmapPhase};
use crate::scoring::{opportunity_card_score, OpportunityCardScore};
use crate::visa::{visa_candidates, VisaOption, MAX_VISA_OPTIONS};

/// Minimum points at which a non-qualifying Opportunity Card score is still
/// reported, so near-misses see how close they are.
const NEAR_MISS_POINTS: u32 = 4;

/// Everything the assessment derives from one answer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    /// At least one visa path matched.
    pub eligible: bool,
    /// Up to three matched paths, in gate-evaluation order.
    pub visa_types: Vec<VisaOption>,
    /// Points breakdown; `None` when the score is neither qualifying nor
    /// close.
    pub opportunity_card_score: Option<OpportunityCardScore>,
    /// Ordered, renumbered action phases.
    pub roadmap: Vec<RoadmapPhase>,
    pub pr_citizenship_path: PrCitizenshipPath,
    /// Present iff the applicant is not single.
    pub family_info: Option<FamilyInfo>,
    pub german_needed: String,
    pub estimated_timeline: String,
}

/// Evaluate an answer set into a full eligibility result.
pub fn evaluate(answers: &QuizAnswers) -> EligibilityResult {
    let opportunity = opportunity_card_score(answers);

    let mut visa_types = visa_candidates(answers, &opportunity);
    visa_types.truncate(MAX_VISA_OPTIONS);

    let roadmap = generate_roadmap(answers);
    let pr_citizenship_path = pr_citizenship_path(answers);
    let family_info = family_info(answers);
    let german_needed = german_requirement(answers);
    let estimated_timeline = estimated_timeline(answers, &visa_types);

    let opportunity_card_score = if opportunity.qualifies || opportunity.total >= NEAR_MISS_POINTS
    {
        Some(opportunity)
    } else {
        None
    };

    EligibilityResult {
        eligible: !visa_types.is_empty(),
        visa_types,
        opportunity_card_score,
        roadmap,
        pr_citizenship_path,
        family_info,
        german_needed,
        estimated_timeline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{
        AgeBand, Country, Education, EnglishLevel, Experience, FamilyStatus, GermanLevel,
        JobOffer, ProfessionalField, SalaryBand,
    };
    use crate::visa::MatchLevel;

    /// The strong-profile scenario: an IT master with a signed offer.
    fn it_master() -> QuizAnswers {
        QuizAnswers {
            education: Education::Masters,
            field: ProfessionalField::It,
            experience: Experience::TenPlus,
            age: AgeBand::Under30,
            german_level: GermanLevel::B1,
            english_level: EnglishLevel::B2,
            current_country: Country::India,
            has_job_offer: JobOffer::Yes,
            salary: SalaryBand::From48To60,
            family_status: FamilyStatus::Single,
            spouse_education: None,
            children: None,
        }
    }

    #[test]
    fn it_master_scenario() {
        let result = evaluate(&it_master());

        let score = result.opportunity_card_score.as_ref().unwrap();
        assert_eq!(score.total, 11);
        assert!(score.qualifies);
        let points: Vec<u32> = score.breakdown.iter().map(|c| c.points).collect();
        assert_eq!(&points[..5], &[4, 3, 2, 2, 1]);

        assert!(result.eligible);
        let it_route = result
            .visa_types
            .iter()
            .find(|v| v.name.contains("IT Specialist"))
            .unwrap();
        assert_eq!(it_route.match_level, MatchLevel::High);
        let blue_card = result
            .visa_types
            .iter()
            .find(|v| v.name == "EU Blue Card")
            .unwrap();
        assert_eq!(blue_card.match_level, MatchLevel::High);

        assert_eq!(
            result.pr_citizenship_path.pr_timeline,
            "21 months with B1 German"
        );
        assert!(result.family_info.is_none());
        assert_eq!(result.estimated_timeline, "3-5 months to arrival in Germany");
    }

    #[test]
    fn visa_list_never_exceeds_three() {
        // A healthcare vocational profile trips many gates at once.
        let answers = QuizAnswers {
            education: Education::Vocational,
            field: ProfessionalField::Healthcare,
            experience: Experience::FiveToTen,
            age: AgeBand::Under30,
            german_level: GermanLevel::B2,
            english_level: EnglishLevel::B2,
            salary: SalaryBand::From44To48,
            has_job_offer: JobOffer::No,
            ..Default::default()
        };
        let result = evaluate(&answers);
        assert!(result.visa_types.len() <= 3);
    }

    #[test]
    fn empty_answers_still_evaluate() {
        let result = evaluate(&QuizAnswers::default());
        assert!(!result.eligible);
        assert!(result.visa_types.is_empty());
        assert!(result.opportunity_card_score.is_none());
        assert_eq!(result.roadmap.len(), 5);
        assert!(!result.german_needed.is_empty());
    }

    #[test]
    fn family_info_presence_tracks_family_status() {
        for (status, expected) in [
            (FamilyStatus::Single, false),
            (FamilyStatus::MarriedNoKids, true),
            (FamilyStatus::MarriedKids, true),
            (FamilyStatus::SingleParent, true),
            (FamilyStatus::Unknown, true),
        ] {
            let answers = QuizAnswers {
                family_status: status,
                ..Default::default()
            };
            assert_eq!(
                evaluate(&answers).family_info.is_some(),
                expected,
                "family_status={status:?}"
            );
        }
    }

    #[test]
    fn near_miss_score_is_reported() {
        // Bachelor only: 3 qualification + 2 age = 5 points, not qualifying
        // but >= 4, so the breakdown is surfaced.
        let answers = QuizAnswers {
            education: Education::Bachelors,
            age: AgeBand::Under30,
            ..Default::default()
        };
        let result = evaluate(&answers);
        let score = result.opportunity_card_score.unwrap();
        assert_eq!(score.total, 5);
        assert!(!score.qualifies);
    }

    #[test]
    fn low_score_is_suppressed() {
        let answers = QuizAnswers {
            education: Education::Vocational,
            ..Default::default()
        };
        // 2 points, below the near-miss floor.
        assert!(evaluate(&answers).opportunity_card_score.is_none());
    }

    #[test]
    fn result_serializes_with_wire_names() {
        let result = evaluate(&it_master());
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["visa_types"][0]["match"].is_string());
        assert_eq!(json["eligible"], serde_json::Value::Bool(true));
    }
}
