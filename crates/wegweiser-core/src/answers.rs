//! Questionnaire answer model.
//!
//! Every categorical answer is a closed enum carrying the wire value the
//! intake form submits. Deserialization is total: unrecognized strings map to
//! the `Unknown` variant instead of failing, and missing fields take their
//! defaults, so the engine can always evaluate whatever it is handed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest completed education.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Education {
    #[serde(rename = "masters")]
    Masters,
    #[serde(rename = "bachelors")]
    Bachelors,
    #[serde(rename = "vocational")]
    Vocational,
    #[serde(rename = "none")]
    NoDegree,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl Education {
    pub fn as_str(&self) -> &'static str {
        match self {
            Education::Masters => "masters",
            Education::Bachelors => "bachelors",
            Education::Vocational => "vocational",
            Education::NoDegree => "none",
            Education::Unknown => "unknown",
        }
    }

    /// University degree (Bachelor's or above).
    pub fn has_degree(&self) -> bool {
        matches!(self, Education::Bachelors | Education::Masters)
    }
}

impl From<&str> for Education {
    fn from(s: &str) -> Self {
        match s {
            "masters" => Education::Masters,
            "bachelors" => Education::Bachelors,
            "vocational" => Education::Vocational,
            "none" => Education::NoDegree,
            _ => Education::Unknown,
        }
    }
}

/// Professional field, coarse-grained to the shortage-occupation list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum ProfessionalField {
    #[serde(rename = "it")]
    It,
    #[serde(rename = "engineering")]
    Engineering,
    #[serde(rename = "healthcare")]
    Healthcare,
    #[serde(rename = "science")]
    Science,
    #[serde(rename = "finance")]
    Finance,
    #[serde(rename = "other")]
    Other,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl ProfessionalField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfessionalField::It => "it",
            ProfessionalField::Engineering => "engineering",
            ProfessionalField::Healthcare => "healthcare",
            ProfessionalField::Science => "science",
            ProfessionalField::Finance => "finance",
            ProfessionalField::Other => "other",
            ProfessionalField::Unknown => "unknown",
        }
    }

    /// Designated shortage occupation (reduced Blue Card threshold applies).
    pub fn is_shortage(&self) -> bool {
        matches!(
            self,
            ProfessionalField::It
                | ProfessionalField::Engineering
                | ProfessionalField::Healthcare
                | ProfessionalField::Science
        )
    }
}

impl From<&str> for ProfessionalField {
    fn from(s: &str) -> Self {
        match s {
            "it" => ProfessionalField::It,
            "engineering" => ProfessionalField::Engineering,
            "healthcare" => ProfessionalField::Healthcare,
            "science" => ProfessionalField::Science,
            "finance" => ProfessionalField::Finance,
            "other" => ProfessionalField::Other,
            _ => ProfessionalField::Unknown,
        }
    }
}

/// Years of relevant work experience.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Experience {
    #[serde(rename = "0-2")]
    UpToTwo,
    #[serde(rename = "2-5")]
    TwoToFive,
    #[serde(rename = "5-10")]
    FiveToTen,
    #[serde(rename = "10+")]
    TenPlus,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl Experience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Experience::UpToTwo => "0-2",
            Experience::TwoToFive => "2-5",
            Experience::FiveToTen => "5-10",
            Experience::TenPlus => "10+",
            Experience::Unknown => "unknown",
        }
    }

    /// Two or more years.
    pub fn has_any(&self) -> bool {
        matches!(
            self,
            Experience::TwoToFive | Experience::FiveToTen | Experience::TenPlus
        )
    }

    /// Five or more years.
    pub fn is_significant(&self) -> bool {
        matches!(self, Experience::FiveToTen | Experience::TenPlus)
    }
}

impl From<&str> for Experience {
    fn from(s: &str) -> Self {
        match s {
            "0-2" => Experience::UpToTwo,
            "2-5" => Experience::TwoToFive,
            "5-10" => Experience::FiveToTen,
            "10+" => Experience::TenPlus,
            _ => Experience::Unknown,
        }
    }
}

/// Age bucket as asked on the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum AgeBand {
    #[serde(rename = "under30")]
    Under30,
    #[serde(rename = "30-35")]
    From30To35,
    #[serde(rename = "35-40")]
    From35To40,
    #[serde(rename = "40-45")]
    From40To45,
    #[serde(rename = "45+")]
    Over45,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl AgeBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBand::Under30 => "under30",
            AgeBand::From30To35 => "30-35",
            AgeBand::From35To40 => "35-40",
            AgeBand::From40To45 => "40-45",
            AgeBand::Over45 => "45+",
            AgeBand::Unknown => "unknown",
        }
    }
}

impl From<&str> for AgeBand {
    fn from(s: &str) -> Self {
        match s {
            "under30" => AgeBand::Under30,
            "30-35" => AgeBand::From30To35,
            "35-40" => AgeBand::From35To40,
            "40-45" => AgeBand::From40To45,
            "45+" => AgeBand::Over45,
            _ => AgeBand::Unknown,
        }
    }
}

/// CEFR German level. C1 and C2 are collapsed, as on the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum GermanLevel {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "a1")]
    A1,
    #[serde(rename = "a2")]
    A2,
    #[serde(rename = "b1")]
    B1,
    #[serde(rename = "b2")]
    B2,
    #[serde(rename = "c1+")]
    C1Plus,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl GermanLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            GermanLevel::None => "none",
            GermanLevel::A1 => "a1",
            GermanLevel::A2 => "a2",
            GermanLevel::B1 => "b1",
            GermanLevel::B2 => "b2",
            GermanLevel::C1Plus => "c1+",
            GermanLevel::Unknown => "unknown",
        }
    }

    /// B1 or better — the fast-track threshold for permanent residence.
    pub fn at_least_b1(&self) -> bool {
        matches!(self, GermanLevel::B1 | GermanLevel::B2 | GermanLevel::C1Plus)
    }
}

impl From<&str> for GermanLevel {
    fn from(s: &str) -> Self {
        match s {
            "none" => GermanLevel::None,
            "a1" => GermanLevel::A1,
            "a2" => GermanLevel::A2,
            "b1" => GermanLevel::B1,
            "b2" => GermanLevel::B2,
            "c1+" => GermanLevel::C1Plus,
            _ => GermanLevel::Unknown,
        }
    }
}

/// Self-reported English proficiency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum EnglishLevel {
    #[serde(rename = "basic")]
    Basic,
    #[serde(rename = "b2")]
    B2,
    #[serde(rename = "c1+")]
    C1Plus,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl EnglishLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnglishLevel::Basic => "basic",
            EnglishLevel::B2 => "b2",
            EnglishLevel::C1Plus => "c1+",
            EnglishLevel::Unknown => "unknown",
        }
    }

    /// B2 or better satisfies the Opportunity Card language requirement.
    pub fn at_least_b2(&self) -> bool {
        matches!(self, EnglishLevel::B2 | EnglishLevel::C1Plus)
    }
}

impl From<&str> for EnglishLevel {
    fn from(s: &str) -> Self {
        match s {
            "basic" => EnglishLevel::Basic,
            "b2" => EnglishLevel::B2,
            "c1+" => EnglishLevel::C1Plus,
            _ => EnglishLevel::Unknown,
        }
    }
}

/// Current country of residence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Country {
    #[serde(rename = "india")]
    India,
    #[serde(rename = "brazil")]
    Brazil,
    #[serde(rename = "philippines")]
    Philippines,
    #[serde(rename = "turkey")]
    Turkey,
    #[serde(rename = "nigeria")]
    Nigeria,
    #[serde(rename = "pakistan")]
    Pakistan,
    #[serde(rename = "egypt")]
    Egypt,
    #[serde(rename = "eu")]
    Eu,
    #[serde(rename = "other")]
    Other,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl Country {
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::India => "india",
            Country::Brazil => "brazil",
            Country::Philippines => "philippines",
            Country::Turkey => "turkey",
            Country::Nigeria => "nigeria",
            Country::Pakistan => "pakistan",
            Country::Egypt => "egypt",
            Country::Eu => "eu",
            Country::Other => "other",
            Country::Unknown => "unknown",
        }
    }
}

impl From<&str> for Country {
    fn from(s: &str) -> Self {
        match s {
            "india" => Country::India,
            "brazil" => Country::Brazil,
            "philippines" => Country::Philippines,
            "turkey" => Country::Turkey,
            "nigeria" => Country::Nigeria,
            "pakistan" => Country::Pakistan,
            "egypt" => Country::Egypt,
            "eu" => Country::Eu,
            "other" => Country::Other,
            _ => Country::Unknown,
        }
    }
}

/// Job-offer status with a German employer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum JobOffer {
    #[serde(rename = "yes")]
    Yes,
    #[serde(rename = "interviewing")]
    Interviewing,
    #[serde(rename = "no")]
    No,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl JobOffer {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobOffer::Yes => "yes",
            JobOffer::Interviewing => "interviewing",
            JobOffer::No => "no",
            JobOffer::Unknown => "unknown",
        }
    }

    /// A signed offer or contract is in hand.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, JobOffer::Yes)
    }
}

impl From<&str> for JobOffer {
    fn from(s: &str) -> Self {
        match s {
            "yes" => JobOffer::Yes,
            "interviewing" => JobOffer::Interviewing,
            "no" => JobOffer::No,
            _ => JobOffer::Unknown,
        }
    }
}

/// Expected or offered gross annual salary, bucketed around the Blue Card
/// thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum SalaryBand {
    #[serde(rename = "under40")]
    Under40,
    #[serde(rename = "40-44")]
    From40To44,
    #[serde(rename = "44-48")]
    From44To48,
    #[serde(rename = "48-60")]
    From48To60,
    #[serde(rename = "60+")]
    Over60,
    #[serde(rename = "unsure")]
    Unsure,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl SalaryBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryBand::Under40 => "under40",
            SalaryBand::From40To44 => "40-44",
            SalaryBand::From44To48 => "44-48",
            SalaryBand::From48To60 => "48-60",
            SalaryBand::Over60 => "60+",
            SalaryBand::Unsure => "unsure",
            SalaryBand::Unknown => "unknown",
        }
    }

    /// Meets the standard Blue Card threshold.
    pub fn is_high(&self) -> bool {
        matches!(self, SalaryBand::From48To60 | SalaryBand::Over60)
    }

    /// Sits in the reduced shortage-occupation threshold band.
    pub fn is_mid(&self) -> bool {
        matches!(self, SalaryBand::From44To48)
    }

    /// At or above the shortage-occupation threshold.
    pub fn in_blue_card_range(&self) -> bool {
        self.is_high() || self.is_mid()
    }
}

impl From<&str> for SalaryBand {
    fn from(s: &str) -> Self {
        match s {
            "under40" => SalaryBand::Under40,
            "40-44" => SalaryBand::From40To44,
            "44-48" => SalaryBand::From44To48,
            "48-60" => SalaryBand::From48To60,
            "60+" => SalaryBand::Over60,
            "unsure" => SalaryBand::Unsure,
            _ => SalaryBand::Unknown,
        }
    }
}

/// Family situation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum FamilyStatus {
    #[serde(rename = "single")]
    Single,
    #[serde(rename = "married-no-kids")]
    MarriedNoKids,
    #[serde(rename = "married-kids")]
    MarriedKids,
    #[serde(rename = "single-parent")]
    SingleParent,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl FamilyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FamilyStatus::Single => "single",
            FamilyStatus::MarriedNoKids => "married-no-kids",
            FamilyStatus::MarriedKids => "married-kids",
            FamilyStatus::SingleParent => "single-parent",
            FamilyStatus::Unknown => "unknown",
        }
    }

    pub fn has_spouse(&self) -> bool {
        matches!(self, FamilyStatus::MarriedNoKids | FamilyStatus::MarriedKids)
    }

    pub fn has_children(&self) -> bool {
        matches!(self, FamilyStatus::MarriedKids | FamilyStatus::SingleParent)
    }
}

impl From<&str> for FamilyStatus {
    fn from(s: &str) -> Self {
        match s {
            "single" => FamilyStatus::Single,
            "married-no-kids" => FamilyStatus::MarriedNoKids,
            "married-kids" => FamilyStatus::MarriedKids,
            "single-parent" => FamilyStatus::SingleParent,
            _ => FamilyStatus::Unknown,
        }
    }
}

/// Spouse's qualification, asked only when a partner exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum SpouseEducation {
    #[serde(rename = "degree")]
    Degree,
    #[serde(rename = "vocational")]
    Vocational,
    #[serde(rename = "none")]
    NoQualification,
    #[serde(rename = "homemaker")]
    Homemaker,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl SpouseEducation {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpouseEducation::Degree => "degree",
            SpouseEducation::Vocational => "vocational",
            SpouseEducation::NoQualification => "none",
            SpouseEducation::Homemaker => "homemaker",
            SpouseEducation::Unknown => "unknown",
        }
    }
}

impl From<&str> for SpouseEducation {
    fn from(s: &str) -> Self {
        match s {
            "degree" => SpouseEducation::Degree,
            "vocational" => SpouseEducation::Vocational,
            "none" => SpouseEducation::NoQualification,
            "homemaker" => SpouseEducation::Homemaker,
            _ => SpouseEducation::Unknown,
        }
    }
}

/// Children age bracket, asked only when children exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum ChildrenAges {
    #[serde(rename = "young")]
    Young,
    #[serde(rename = "school-age")]
    SchoolAge,
    #[serde(rename = "mixed")]
    Mixed,
    #[serde(rename = "adult")]
    Adult,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl ChildrenAges {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChildrenAges::Young => "young",
            ChildrenAges::SchoolAge => "school-age",
            ChildrenAges::Mixed => "mixed",
            ChildrenAges::Adult => "adult",
            ChildrenAges::Unknown => "unknown",
        }
    }
}

impl From<&str> for ChildrenAges {
    fn from(s: &str) -> Self {
        match s {
            "young" => ChildrenAges::Young,
            "school-age" => ChildrenAges::SchoolAge,
            "mixed" => ChildrenAges::Mixed,
            "adult" => ChildrenAges::Adult,
            _ => ChildrenAges::Unknown,
        }
    }
}

macro_rules! impl_string_conversions {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<String> for $ty {
                fn from(s: String) -> Self {
                    Self::from(s.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = std::convert::Infallible;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Ok(Self::from(s))
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_string_conversions!(
    Education,
    ProfessionalField,
    Experience,
    AgeBand,
    GermanLevel,
    EnglishLevel,
    Country,
    JobOffer,
    SalaryBand,
    FamilyStatus,
    SpouseEducation,
    ChildrenAges,
);

/// The full questionnaire answer set.
///
/// Field names follow the intake form's JSON shape. `spouse_education` and
/// `children` are present only when `family_status` implies a partner or
/// children; the parser warns about inconsistent combinations but the engine
/// tolerates them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizAnswers {
    pub education: Education,
    pub field: ProfessionalField,
    pub experience: Experience,
    pub age: AgeBand,
    pub german_level: GermanLevel,
    pub english_level: EnglishLevel,
    pub current_country: Country,
    pub has_job_offer: JobOffer,
    pub salary: SalaryBand,
    pub family_status: FamilyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse_education: Option<SpouseEducation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<ChildrenAges>,
}
