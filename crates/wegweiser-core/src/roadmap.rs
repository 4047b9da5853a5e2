//! Phased relocation roadmap assembly.
//!
//! Produces four or five ordered phases; the Job Search phase is included
//! only when no offer exists yet, and phases are renumbered 1..N so the
//! labels stay contiguous either way.

use serde::{Deserialize, Serialize};

use crate::answers::{FamilyStatus, GermanLevel, QuizAnswers};

/// One phase of the roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub phase: String,
    pub title: String,
    pub duration: String,
    pub tasks: Vec<String>,
}

/// Whether the German course tasks apply.
fn needs_german(answers: &QuizAnswers) -> bool {
    matches!(answers.german_level, GermanLevel::None | GermanLevel::A1)
}

/// Build the full roadmap for an answer set.
pub fn generate_roadmap(answers: &QuizAnswers) -> Vec<RoadmapPhase> {
    let needs_german = needs_german(answers);
    let needs_job = !answers.has_job_offer.is_confirmed();
    let has_family = answers.family_status != FamilyStatus::Single;

    let mut roadmap = Vec::with_capacity(5);
    let mut phase_no = 0u32;
    let mut next_phase = || {
        phase_no += 1;
        phase_no.to_string()
    };

    // Preparation.
    let mut prep_tasks = vec![
        "Verify degree/qualification recognition on anabin.kmk.org".to_string(),
        "Gather documents: certificates, work references, passport (6+ months validity)"
            .to_string(),
    ];
    if needs_german {
        prep_tasks.push("Start German course - aim for A1 minimum (we can help!)".into());
    }
    if has_family {
        prep_tasks.push("Gather family documents: marriage certificate, birth certificates".into());
        prep_tasks.push("Research family visa requirements at your embassy".into());
    }
    prep_tasks.push("Open blocked bank account if going Opportunity Card route".into());
    roadmap.push(RoadmapPhase {
        phase: next_phase(),
        title: "Preparation".into(),
        duration: "1-2 months".into(),
        tasks: prep_tasks,
    });

    // Job search, only without an offer in hand.
    if needs_job {
        roadmap.push(RoadmapPhase {
            phase: next_phase(),
            title: "Job Search".into(),
            duration: "2-4 months".into(),
            tasks: vec![
                "Update LinkedIn with German-focused profile".into(),
                "Apply daily: LinkedIn, StepStone, Glassdoor, XING".into(),
                "Target companies known to sponsor: SAP, Siemens, Delivery Hero, N26, Zalando"
                    .into(),
                "Prepare for video interviews (common for international hiring)".into(),
                "Negotiate salary above €44K threshold if possible (for Blue Card)".into(),
            ],
        });
    }

    // Visa application.
    let mut visa_tasks = vec![
        "Book embassy appointment ASAP (4-8 weeks wait in most countries)".to_string(),
        "Prepare visa documents (check specific list for your embassy)".to_string(),
        "Get documents apostilled/legalized if required".to_string(),
    ];
    if has_family {
        visa_tasks.push("Apply for family visas simultaneously (spouse + children)".into());
        visa_tasks.push("Prepare proof of relationship (marriage certificate, etc.)".into());
    }
    visa_tasks.push("Attend visa interview".into());
    roadmap.push(RoadmapPhase {
        phase: next_phase(),
        title: "Visa Application".into(),
        duration: "2-4 months".into(),
        tasks: visa_tasks,
    });

    // Arrival and settlement.
    let mut arrival_tasks = vec![
        "Anmeldung (register address) within 14 days - CRITICAL!".to_string(),
        "Open German bank account (N26, Commerzbank)".to_string(),
        "Activate health insurance".to_string(),
        "Apply for residence permit at Ausländerbehörde".to_string(),
        "Get tax ID (Steuer-ID) - sent automatically after Anmeldung".to_string(),
    ];
    if has_family {
        arrival_tasks.push("Register family members (Anmeldung for all)".into());
        if answers.family_status.has_children() {
            arrival_tasks.push("Apply for Kindergeld (€250/month per child)".into());
            arrival_tasks.push("Register children for Kita/school".into());
        }
    }
    roadmap.push(RoadmapPhase {
        phase: next_phase(),
        title: "Land & Settle".into(),
        duration: "First 2-4 weeks".into(),
        tasks: arrival_tasks,
    });

    // Integration and the PR clock.
    roadmap.push(RoadmapPhase {
        phase: next_phase(),
        title: "Integration & Path to PR".into(),
        duration: "Months 1-21/33".into(),
        tasks: vec![
            "Continue German learning - aim for B1 for faster PR".into(),
            "Build professional network in Germany".into(),
            "Explore German culture, join local groups/sports clubs".into(),
            if has_family {
                "Support family integration: spouse German classes, children school adaptation"
                    .into()
            } else {
                "Build social connections".into()
            },
            "Track pension contributions (needed for PR)".into(),
            "After 21-33 months: Apply for permanent residence (Niederlassungserlaubnis)".into(),
        ],
    });

    roadmap
}
