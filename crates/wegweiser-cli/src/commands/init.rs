//! The `wegweiser init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create wegweiser.toml
    if std::path::Path::new("wegweiser.toml").exists() {
        println!("wegweiser.toml already exists, skipping.");
    } else {
        std::fs::write("wegweiser.toml", SAMPLE_CONFIG)?;
        println!("Created wegweiser.toml");
    }

    // Create sample answers file
    std::fs::create_dir_all("profiles")?;
    let sample_path = std::path::Path::new("profiles/sample.toml");
    if sample_path.exists() {
        println!("profiles/sample.toml already exists, skipping.");
    } else {
        std::fs::write(sample_path, SAMPLE_ANSWERS)?;
        println!("Created profiles/sample.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit profiles/sample.toml with your answers");
    println!("  2. Run: wegweiser validate --answers profiles/sample.toml");
    println!("  3. Run: wegweiser assess --answers profiles/sample.toml");
    println!("  4. Run: wegweiser simulate --seed 42");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# wegweiser configuration

[simulation]
# Days to simulate per archetype.
days = 30
# Phrases a full daily session aims to complete.
daily_quota = 5
# Size of the generated phrase set when no phrase file is given.
phrase_count = 150
# Uncomment for reproducible simulation runs.
# seed = 42
"#;

const SAMPLE_ANSWERS: &str = r#"# wegweiser answers file
#
# Every value must come from the closed set the intake form offers;
# anything else scores zero points. Run `wegweiser validate` to check.

education = "masters"        # masters | bachelors | vocational | none
field = "it"                 # it | engineering | healthcare | science | finance | other
experience = "5-10"          # 0-2 | 2-5 | 5-10 | 10+
age = "under30"              # under30 | 30-35 | 35-40 | 40-45 | 45+
germanLevel = "a1"           # none | a1 | a2 | b1 | b2 | c1+
englishLevel = "b2"          # basic | b2 | c1+
currentCountry = "india"     # india | brazil | philippines | turkey | nigeria | pakistan | egypt | eu | other
hasJobOffer = "no"           # yes | interviewing | no
salary = "48-60"             # under40 | 40-44 | 44-48 | 48-60 | 60+ | unsure
familyStatus = "single"      # single | married-no-kids | married-kids | single-parent

# Required when familyStatus implies a partner:
# spouseEducation = "degree" # degree | vocational | none | homemaker

# Required when familyStatus implies children:
# children = "young"         # young | school-age | mixed | adult
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use wegweiser_core::parser::{parse_answers_toml, validate_answers};

    #[test]
    fn sample_answers_parse_cleanly() {
        let answers = parse_answers_toml(SAMPLE_ANSWERS, Path::new("sample.toml")).unwrap();
        assert!(validate_answers(&answers).is_empty());
    }

    #[test]
    fn sample_config_parses() {
        let config: toml::Value = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config["simulation"]["days"].as_integer(), Some(30));
    }
}
