//! End-to-end scenario tests across the engine, tracker, and simulation
//! crates.

use std::path::Path;

use wegweiser_core::answers::{
    AgeBand, Education, EnglishLevel, Experience, FamilyStatus, GermanLevel, JobOffer,
    ProfessionalField, QuizAnswers, SalaryBand,
};
use wegweiser_core::engine::evaluate;
use wegweiser_core::parser::parse_answers_json;
use wegweiser_core::scoring::MAX_POINTS;
use wegweiser_core::visa::MatchLevel;
use wegweiser_mastery::{ExerciseType, MasteryLevel, MasteryTracker};

/// High points on qualification, experience, age, and field alone must not
/// qualify without any language proof.
#[test]
fn ten_points_without_language_does_not_qualify() {
    let answers = QuizAnswers {
        education: Education::Masters,
        field: ProfessionalField::It,
        experience: Experience::TenPlus,
        age: AgeBand::Under30,
        german_level: GermanLevel::None,
        english_level: EnglishLevel::Basic,
        ..Default::default()
    };
    let result = evaluate(&answers);
    let score = result.opportunity_card_score.unwrap();
    assert_eq!(score.total, 10);
    assert!(!score.qualifies);
    // And the Opportunity Card route must not be among the options.
    assert!(!result
        .visa_types
        .iter()
        .any(|v| v.name.contains("Chancenkarte")));
}

/// The full strong-profile scenario, entered through the JSON wire format.
#[test]
fn strong_it_profile_end_to_end() {
    let json = r#"{
        "education": "masters",
        "field": "it",
        "experience": "10+",
        "age": "under30",
        "germanLevel": "b1",
        "englishLevel": "b2",
        "currentCountry": "india",
        "hasJobOffer": "yes",
        "salary": "48-60",
        "familyStatus": "single"
    }"#;
    let answers = parse_answers_json(json, Path::new("profile.json")).unwrap();
    let result = evaluate(&answers);

    let score = result.opportunity_card_score.as_ref().unwrap();
    assert_eq!(score.total, 11);
    assert!(score.qualifies);

    let high_matches: Vec<&str> = result
        .visa_types
        .iter()
        .filter(|v| v.match_level == MatchLevel::High)
        .map(|v| v.name.as_str())
        .collect();
    assert!(high_matches.contains(&"EU Blue Card (IT Specialist Route)"));
    assert!(high_matches.contains(&"EU Blue Card"));

    assert_eq!(
        result.pr_citizenship_path.pr_timeline,
        "21 months with B1 German"
    );
    assert!(result.family_info.is_none());
    // Job offer in hand: the Job Search phase is dropped and numbering stays
    // contiguous.
    assert_eq!(result.roadmap.len(), 4);
    assert_eq!(result.roadmap.last().unwrap().phase, "4");
}

/// Score bounds hold over a broad sweep of answer combinations.
#[test]
fn score_bounds_over_answer_sweep() {
    let educations = [
        Education::Masters,
        Education::Bachelors,
        Education::Vocational,
        Education::NoDegree,
        Education::Unknown,
    ];
    let experiences = [
        Experience::UpToTwo,
        Experience::TwoToFive,
        Experience::FiveToTen,
        Experience::TenPlus,
        Experience::Unknown,
    ];
    let german_levels = [
        GermanLevel::None,
        GermanLevel::A1,
        GermanLevel::A2,
        GermanLevel::B1,
        GermanLevel::B2,
        GermanLevel::C1Plus,
        GermanLevel::Unknown,
    ];
    let ages = [
        AgeBand::Under30,
        AgeBand::From30To35,
        AgeBand::From35To40,
        AgeBand::From40To45,
        AgeBand::Over45,
        AgeBand::Unknown,
    ];
    let fields = [
        ProfessionalField::It,
        ProfessionalField::Finance,
        ProfessionalField::Unknown,
    ];

    for education in educations {
        for experience in experiences {
            for german_level in german_levels {
                for age in ages {
                    for field in fields {
                        let answers = QuizAnswers {
                            education,
                            experience,
                            german_level,
                            age,
                            field,
                            ..Default::default()
                        };
                        let result = evaluate(&answers);
                        if let Some(score) = &result.opportunity_card_score {
                            assert!(score.total <= MAX_POINTS);
                        }
                        assert!(result.visa_types.len() <= 3);
                        assert_eq!(
                            result.family_info.is_some(),
                            answers.family_status != FamilyStatus::Single
                        );
                    }
                }
            }
        }
    }
}

/// Healthcare profiles hit several gates at once; the cut must keep
/// generation order and the three-option cap.
#[test]
fn overlapping_gates_respect_generation_order() {
    let answers = QuizAnswers {
        education: Education::Bachelors,
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
    assert_eq!(result.visa_types.len(), 3);
    // Blue Card gate fires before the Opportunity Card and healthcare gates.
    assert_eq!(result.visa_types[0].name, "EU Blue Card");
}

/// Twelve clean exposures: mastered at the fifth, still mastered at the
/// twelfth.
#[test]
fn mastery_scenario_twelve_exposures() {
    let mut tracker = MasteryTracker::new();
    for day in 1..=12 {
        tracker.record_exposure(1, ExerciseType::Recognition, true, 80.0, day);
        let phrase = tracker.phrase(1).unwrap();
        if day >= 5 {
            assert_eq!(phrase.level, MasteryLevel::Mastered, "day {day}");
        }
    }
    let phrase = tracker.phrase(1).unwrap();
    assert_eq!(phrase.mastered_on, Some(5));
    assert!((phrase.success_rate() - 1.0).abs() < f64::EPSILON);
    assert!((phrase.avg_confidence() - 80.0).abs() < f64::EPSILON);
}

/// The ratchet holds even under adversarial post-mastery input.
#[test]
fn mastery_ratchet_under_failures() {
    let mut tracker = MasteryTracker::new();
    for day in 1..=5 {
        tracker.record_exposure(9, ExerciseType::Speed, true, 95.0, day);
    }
    assert!(tracker.is_mastered(9));
    for day in 6..=60 {
        let success = day % 2 == 0;
        tracker.record_exposure(9, ExerciseType::Speed, success, 0.0, day);
    }
    assert_eq!(tracker.phrase(9).unwrap().level, MasteryLevel::Mastered);
}
