//! Phrase material for simulation runs.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use wegweiser_mastery::PhraseId;

/// One learnable phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub id: PhraseId,
    pub german: String,
    #[serde(default)]
    pub english: String,
}

/// A named collection of phrases, loaded from a JSON file or generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseSet {
    pub name: String,
    pub phrases: Vec<Phrase>,
}

impl PhraseSet {
    /// Load a phrase set from a JSON file containing an array of phrases.
    /// The set is named after the file stem.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read phrase file: {}", path.display()))?;
        let phrases: Vec<Phrase> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse phrase file: {}", path.display()))?;
        anyhow::ensure!(!phrases.is_empty(), "phrase file is empty: {}", path.display());

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("phrases")
            .to_string();
        Ok(PhraseSet { name, phrases })
    }

    /// Generate a placeholder set for runs without real material.
    pub fn placeholder(count: u32) -> Self {
        let phrases = (1..=count.max(1))
            .map(|id| Phrase {
                id,
                german: format!("Satz {id}"),
                english: format!("Sentence {id}"),
            })
            .collect();
        PhraseSet {
            name: "placeholder".into(),
            phrases,
        }
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_has_requested_size() {
        let set = PhraseSet::placeholder(25);
        assert_eq!(set.len(), 25);
        assert_eq!(set.phrases[0].id, 1);
        assert_eq!(set.phrases[24].id, 25);
    }

    #[test]
    fn placeholder_never_empty() {
        assert_eq!(PhraseSet::placeholder(0).len(), 1);
    }

    #[test]
    fn load_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a1-basics.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 1, "german": "Guten Morgen", "english": "Good morning"},
                {"id": 2, "german": "Wie geht's?"}
            ]"#,
        )
        .unwrap();

        let set = PhraseSet::from_json_file(&path).unwrap();
        assert_eq!(set.name, "a1-basics");
        assert_eq!(set.len(), 2);
        assert_eq!(set.phrases[1].english, "");
    }

    #[test]
    fn empty_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, "[]").unwrap();
        assert!(PhraseSet::from_json_file(&path).is_err());
    }
}
