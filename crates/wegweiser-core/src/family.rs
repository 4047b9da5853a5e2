//! Family-reunification guidance.
//!
//! Guidance texts are selected by small decision tables keyed on the family
//! answers, not on the recommended visa type, to stay valid whichever path
//! the applicant ends up on.

use serde::{Deserialize, Serialize};

use crate::answers::{ChildrenAges, FamilyStatus, QuizAnswers, SpouseEducation};

/// Family guidance block, present only for non-single applicants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyInfo {
    pub spouse_visa: String,
    pub spouse_work_rights: String,
    pub spouse_german_needed: String,
    pub children_info: String,
    pub family_benefits: Vec<String>,
    pub tax_benefits: Vec<String>,
}

/// Derive family guidance. Returns `None` iff the applicant is single.
pub fn family_info(answers: &QuizAnswers) -> Option<FamilyInfo> {
    if answers.family_status == FamilyStatus::Single {
        return None;
    }

    let has_spouse = answers.family_status.has_spouse();
    let has_children = answers.family_status.has_children();

    let (spouse_visa, spouse_work_rights, spouse_german_needed) = if has_spouse {
        let german_needed = match answers.spouse_education {
            Some(SpouseEducation::Degree) => {
                "No German required for visa if joining Blue Card holder. However, learning \
                 German will help with job search and integration. If spouse wants their own \
                 work visa, German A1-B1 may be needed depending on field."
            }
            _ => {
                "Basic German (A1) is officially required for family reunification, but often \
                 waived for spouses of Blue Card holders. Strongly recommend starting German \
                 lessons for better integration and job prospects."
            }
        };
        (
            "Your spouse can apply for a family reunification visa (Familiennachzug) at the \
             same time as your visa, or join you after you arrive."
                .to_string(),
            "With Blue Card: Your spouse gets UNLIMITED work permit - can work any job \
             without restrictions. With Skilled Worker visa: Same unlimited work rights. \
             With Opportunity Card: Spouse can work up to 20h/week."
                .to_string(),
            german_needed.to_string(),
        )
    } else {
        (String::new(), String::new(), String::new())
    };

    let children_info = if has_children {
        match answers.children.unwrap_or_default() {
            ChildrenAges::Young => {
                "Children under 6: Free daycare (Kita) available in most cities (though \
                 waitlists exist). No school enrollment needed yet. Children automatically \
                 get residence permit tied to yours."
            }
            ChildrenAges::SchoolAge => {
                "School-age children: Will attend German public school (free). Many cities \
                 have \"welcome classes\" (Willkommensklassen) for non-German speakers. \
                 Children typically become fluent within 1-2 years. Consider international \
                 schools in big cities if budget allows (€10-20K/year)."
            }
            ChildrenAges::Mixed => {
                "Mixed ages: Younger children adapt faster to German. School-age children \
                 will attend public school with language support. The German education \
                 system has excellent support for immigrant children."
            }
            ChildrenAges::Adult | ChildrenAges::Unknown => {
                "Adult children (18+): Cannot come on family reunification. Would need \
                 their own visa (student visa, work visa, etc.)."
            }
        }
        .to_string()
    } else {
        String::new()
    };

    let family_benefits = vec![
        "Kindergeld: €250/month per child (tax-free!) regardless of your income".into(),
        "Elterngeld: Up to 67% of salary (max €1,800/month) if parent takes parental leave"
            .into(),
        "Free public schooling from age 6 through university".into(),
        "Subsidized daycare (Kita) - often €0-400/month depending on city and income".into(),
        "Family health insurance: Spouse and children covered under your insurance at no \
         extra cost"
            .into(),
    ];

    let mut tax_benefits = Vec::new();
    if has_spouse {
        tax_benefits.push(
            "Ehegattensplitting: Married couples can file jointly, potentially saving \
             €5,000-15,000/year in taxes if one spouse earns significantly less"
                .into(),
        );
        tax_benefits.push(
            "Tax class optimization: You can choose tax classes (III/V or IV/IV) to \
             optimize monthly take-home pay"
                .into(),
        );
    }
    if has_children {
        tax_benefits.push(
            "Kinderfreibetrag: Tax deduction of €8,952 per child (alternative to \
             Kindergeld, whichever is higher)"
                .into(),
        );
        tax_benefits.push("Childcare costs: Up to €4,000/year per child tax deductible".into());
        tax_benefits.push("School supplies and extracurriculars may be partially deductible".into());
    }

    Some(FamilyInfo {
        spouse_visa,
        spouse_work_rights,
        spouse_german_needed,
        children_info,
        family_benefits,
        tax_benefits,
    })
}
