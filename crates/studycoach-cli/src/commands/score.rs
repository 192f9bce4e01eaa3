//! Score prediction and exam urgency subcommand.

use clap::Subcommand;
use studycoach_core::state::{keys, StateStore, DEFAULT_TARGET_SCORE};
use studycoach_core::{compute_lock_in, predict_score_raw};

#[derive(Subcommand)]
pub enum ScoreAction {
    /// Predict the next exam score from practice results
    Predict {
        /// Practice scores, newest last
        practice: Vec<String>,
        /// Most recent exam score
        #[arg(long, default_value = "")]
        exam: String,
    },
    /// Exam urgency on a 1-10 scale, from the stored exam date
    LockIn,
    /// Show or set the target score
    Target {
        /// New target score; omit to show the current value
        value: Option<f64>,
    },
}

pub fn run(action: ScoreAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ScoreAction::Predict { practice, exam } => {
            let refs: Vec<&str> = practice.iter().map(String::as_str).collect();
            println!("{}", predict_score_raw(&refs, &exam));
        }
        ScoreAction::LockIn => {
            let store = StateStore::open_default();
            let exam_date = store.get(keys::EXAM_DATE, String::new());
            let level = compute_lock_in(&exam_date, chrono::Utc::now());
            if exam_date.is_empty() {
                println!("{level} (exam date not set)");
            } else {
                println!("{level}");
            }
        }
        ScoreAction::Target { value } => {
            let mut store = StateStore::open_default();
            match value {
                Some(target) => {
                    store.set(keys::TARGET_SCORE, target);
                    let stored = store.get(keys::TARGET_SCORE, DEFAULT_TARGET_SCORE);
                    println!("target score set to {stored}");
                }
                None => {
                    println!("{}", store.get(keys::TARGET_SCORE, DEFAULT_TARGET_SCORE));
                }
            }
        }
    }
    Ok(())
}
