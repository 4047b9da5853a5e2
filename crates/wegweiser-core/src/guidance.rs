//! Free-text guidance: how much German is needed, and the overall timeline.

use crate::answers::{ProfessionalField, QuizAnswers};
use crate::visa::{MatchLevel, VisaOption};

/// German-language requirement text, keyed on the professional field.
pub fn german_requirement(answers: &QuizAnswers) -> String {
    match answers.field {
        ProfessionalField::Healthcare => {
            "B1-B2 German is MANDATORY for healthcare roles. This is your #1 priority. \
             Patient communication requires fluent German. Start immediately - it takes \
             6-12 months to reach B1."
        }
        ProfessionalField::It => {
            "Not required for most tech jobs - English is common. However, A2-B1 German \
             helps with: daily life, faster permanent residence (21 vs 33 months), career \
             growth, and actually enjoying life in Germany."
        }
        ProfessionalField::Engineering | ProfessionalField::Science => {
            "A2-B1 recommended. Many engineering roles involve German documentation, \
             client meetings, or teamwork with German colleagues. The higher your German, \
             the more job options you have."
        }
        _ => {
            "A2-B1 recommended for daily life and career growth. While you can start work \
             in English at international companies, German opens more opportunities and \
             helps you integrate."
        }
    }
    .to_string()
}

/// Overall time-to-arrival estimate.
pub fn estimated_timeline(answers: &QuizAnswers, visa_types: &[VisaOption]) -> String {
    if answers.has_job_offer.is_confirmed() {
        return "3-5 months to arrival in Germany".to_string();
    }
    if visa_types.iter().any(|v| v.match_level == MatchLevel::High) {
        return "5-8 months including job search".to_string();
    }
    "6-12 months depending on job search and visa processing".to_string()
}
