//! Opportunity Card (Chancenkarte) points calculation.
//!
//! The card uses a points system: six points across five weighted categories
//! qualify an applicant to enter for a job search, provided a minimum
//! language proof (A1 German or B2 English) exists. The language gate is
//! independent of the numeric score.

use serde::{Deserialize, Serialize};

use crate::answers::{AgeBand, Education, Experience, GermanLevel, QuizAnswers};

/// Points needed to qualify.
pub const QUALIFYING_POINTS: u32 = 6;

/// Sum of all category maximums.
pub const MAX_POINTS: u32 = 14;

/// One scored category of the points breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub points: u32,
    pub max_points: u32,
    pub detail: String,
}

/// The full Opportunity Card score for one answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpportunityCardScore {
    /// Sum over all categories, 0..=14.
    pub total: u32,
    /// Per-category points in display order.
    pub breakdown: Vec<CategoryScore>,
    /// Six or more points AND the language gate is satisfied.
    pub qualifies: bool,
}

impl OpportunityCardScore {
    /// Points still missing to reach the qualifying threshold.
    pub fn points_short(&self) -> u32 {
        QUALIFYING_POINTS.saturating_sub(self.total)
    }
}

/// Compute the Opportunity Card points breakdown.
pub fn opportunity_card_score(answers: &QuizAnswers) -> OpportunityCardScore {
    let mut breakdown = Vec::with_capacity(6);
    let mut total = 0;

    let (points, detail) = qualification_points(answers.education);
    breakdown.push(CategoryScore {
        category: "Qualification".into(),
        points,
        max_points: 4,
        detail: detail.into(),
    });
    total += points;

    let (points, detail) = experience_points(answers.experience);
    breakdown.push(CategoryScore {
        category: "Work Experience".into(),
        points,
        max_points: 3,
        detail: detail.into(),
    });
    total += points;

    let (german_points, detail) = german_points(answers.german_level);
    breakdown.push(CategoryScore {
        category: "German Language".into(),
        points: german_points,
        max_points: 4,
        detail: detail.into(),
    });
    total += german_points;

    let (points, detail) = age_points(answers.age);
    breakdown.push(CategoryScore {
        category: "Age".into(),
        points,
        max_points: 2,
        detail: detail.into(),
    });
    total += points;

    let (points, detail) = if answers.field.is_shortage() {
        (1, "Field is in high demand in Germany")
    } else {
        (0, "Not a designated shortage occupation")
    };
    breakdown.push(CategoryScore {
        category: "Shortage Occupation".into(),
        points,
        max_points: 1,
        detail: detail.into(),
    });
    total += points;

    // English carries no points of its own but can satisfy the language gate
    // when German is weak; surface that as an informational row.
    if german_points < 2 && answers.english_level.at_least_b2() {
        breakdown.push(CategoryScore {
            category: "English Proficiency".into(),
            points: 0,
            max_points: 0,
            detail: "B2+ English satisfies language requirement (no extra points)".into(),
        });
    }

    let language_gate =
        answers.german_level != GermanLevel::None || answers.english_level.at_least_b2();

    OpportunityCardScore {
        total,
        breakdown,
        qualifies: total >= QUALIFYING_POINTS && language_gate,
    }
}

fn qualification_points(education: Education) -> (u32, &'static str) {
    match education {
        Education::Masters => (4, "Master's/PhD from recognized institution"),
        Education::Bachelors => (3, "Bachelor's degree recognized in Germany"),
        Education::Vocational => (2, "Vocational qualification (if recognized)"),
        Education::NoDegree | Education::Unknown => (0, "No recognized qualification"),
    }
}

fn experience_points(experience: Experience) -> (u32, &'static str) {
    match experience {
        Experience::FiveToTen | Experience::TenPlus => (3, "5+ years in last 7 years"),
        Experience::TwoToFive => (2, "2-5 years relevant experience"),
        Experience::UpToTwo | Experience::Unknown => (0, "Less than 2 years experience"),
    }
}

fn german_points(level: GermanLevel) -> (u32, &'static str) {
    match level {
        GermanLevel::C1Plus => (4, "C1+ German (excellent!)"),
        GermanLevel::B2 => (3, "B2 German"),
        GermanLevel::B1 => (2, "B1 German"),
        GermanLevel::A2 => (1, "A2 German"),
        GermanLevel::A1 | GermanLevel::None | GermanLevel::Unknown => {
            (0, "A1 or no German (need A1 OR B2 English)")
        }
    }
}

fn age_points(age: AgeBand) -> (u32, &'static str) {
    match age {
        AgeBand::Under30 | AgeBand::From30To35 => (2, "Under 35 years old"),
        AgeBand::From35To40 => (1, "35-40 years old"),
        AgeBand::From40To45 | AgeBand::Over45 | AgeBand::Unknown => {
            (0, "Over 40 (no age points, but still eligible)")
        }
    }
}
