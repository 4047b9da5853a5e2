//! The `wegweiser validate` command.

use std::path::PathBuf;

use anyhow::Result;

use wegweiser_core::answers::QuizAnswers;
use wegweiser_core::parser::{load_answers_directory, parse_answers, validate_answers};

pub fn execute(answers_path: PathBuf) -> Result<()> {
    let answer_sets: Vec<(PathBuf, QuizAnswers)> = if answers_path.is_dir() {
        load_answers_directory(&answers_path)?
    } else {
        vec![(answers_path.clone(), parse_answers(&answers_path)?)]
    };

    anyhow::ensure!(
        !answer_sets.is_empty(),
        "no answers files found in {}",
        answers_path.display()
    );

    let mut total_warnings = 0;

    for (path, answers) in &answer_sets {
        let warnings = validate_answers(answers);
        println!("{}: {} warning(s)", path.display(), warnings.len());
        for w in &warnings {
            let prefix = w
                .field
                .as_ref()
                .map(|f| format!("  [{f}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All answers files valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
