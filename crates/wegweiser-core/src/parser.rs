//! Answers-file loading and validation.
//!
//! Answer sets arrive as TOML or JSON files matching the questionnaire's
//! wire shape. Parsing is lenient (unknown enum values become `Unknown`);
//! a separate validation pass reports anything that will be scored as zero.

use std::path::{Path, PathBuf};

use crate::answers::QuizAnswers;
use crate::error::ParseError;

/// Parse a single answers file, dispatching on the extension.
pub fn parse_answers(path: &Path) -> Result<QuizAnswers, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => parse_answers_toml(&content, path),
        Some("json") => parse_answers_json(&content, path),
        _ => Err(ParseError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Parse a TOML answers document.
pub fn parse_answers_toml(content: &str, source_path: &Path) -> Result<QuizAnswers, ParseError> {
    toml::from_str(content).map_err(|source| ParseError::Toml {
        path: source_path.to_path_buf(),
        source,
    })
}

/// Parse a JSON answers document.
pub fn parse_answers_json(content: &str, source_path: &Path) -> Result<QuizAnswers, ParseError> {
    serde_json::from_str(content).map_err(|source| ParseError::Json {
        path: source_path.to_path_buf(),
        source,
    })
}

/// Recursively load all `.toml`/`.json` answers files from a directory.
///
/// Unparseable files are skipped with a warning rather than failing the
/// whole batch.
pub fn load_answers_directory(dir: &Path) -> Result<Vec<(PathBuf, QuizAnswers)>, ParseError> {
    let mut loaded = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|source| ParseError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| ParseError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if path.is_dir() {
            loaded.extend(load_answers_directory(&path)?);
        } else if matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("toml") | Some("json")
        ) {
            match parse_answers(&path) {
                Ok(answers) => loaded.push((path, answers)),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(loaded)
}

/// A warning from answers validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The field the warning refers to (wire name), if any.
    pub field: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn field(field: &str, message: impl Into<String>) -> Self {
        ValidationWarning {
            field: Some(field.to_string()),
            message: message.into(),
        }
    }
}

/// Validate an answer set for values that will score as zero or be ignored.
pub fn validate_answers(answers: &QuizAnswers) -> Vec<ValidationWarning> {
    use crate::answers::*;

    let mut warnings = Vec::new();
    let unrecognized = "unrecognized or missing value, will score zero points";

    if answers.education == Education::Unknown {
        warnings.push(ValidationWarning::field("education", unrecognized));
    }
    if answers.field == ProfessionalField::Unknown {
        warnings.push(ValidationWarning::field("field", unrecognized));
    }
    if answers.experience == Experience::Unknown {
        warnings.push(ValidationWarning::field("experience", unrecognized));
    }
    if answers.age == AgeBand::Unknown {
        warnings.push(ValidationWarning::field("age", unrecognized));
    }
    if answers.german_level == GermanLevel::Unknown {
        warnings.push(ValidationWarning::field("germanLevel", unrecognized));
    }
    if answers.english_level == EnglishLevel::Unknown {
        warnings.push(ValidationWarning::field("englishLevel", unrecognized));
    }
    if answers.current_country == Country::Unknown {
        warnings.push(ValidationWarning::field(
            "currentCountry",
            "unrecognized or missing value",
        ));
    }
    if answers.has_job_offer == JobOffer::Unknown {
        warnings.push(ValidationWarning::field(
            "hasJobOffer",
            "unrecognized or missing value, treated as no offer",
        ));
    }
    if answers.salary == SalaryBand::Unknown {
        warnings.push(ValidationWarning::field(
            "salary",
            "unrecognized or missing value, no salary-gated visa will match",
        ));
    }
    if answers.family_status == FamilyStatus::Unknown {
        warnings.push(ValidationWarning::field(
            "familyStatus",
            "unrecognized or missing value, family guidance will be generic",
        ));
    }

    // Conditional-field consistency.
    if answers.family_status.has_spouse() {
        if answers.spouse_education.is_none() {
            warnings.push(ValidationWarning::field(
                "spouseEducation",
                "missing although family status implies a partner",
            ));
        }
    } else if answers.spouse_education.is_some() {
        warnings.push(ValidationWarning::field(
            "spouseEducation",
            "present although family status implies no partner, will be ignored",
        ));
    }

    if answers.family_status.has_children() {
        if answers.children.is_none() {
            warnings.push(ValidationWarning::field(
                "children",
                "missing although family status implies children",
            ));
        }
    } else if answers.children.is_some() {
        warnings.push(ValidationWarning::field(
            "children",
            "present although family status implies no children, will be ignored",
        ));
    }

    warnings
}
