//! Study log subcommand: daily activities, attachments, and the exam date.

use std::collections::{BTreeMap, BTreeSet};

use clap::Subcommand;
use studycoach_core::state::coerce::is_iso_date;
use studycoach_core::state::{keys, Attachment, StateStore, MAX_ENTRIES_PER_DAY};

/// Number of most recent days shown by `overview`.
const OVERVIEW_DAYS: usize = 7;
/// Number of entries shown by `overview` across those days.
const OVERVIEW_ITEMS: usize = 10;

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Record a study activity for a day
    Add {
        /// Activity description
        activity: String,
        /// Day in YYYY-MM-DD form (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Record an attachment (worksheet, notes) for a day
    Attach {
        /// Attachment file name
        name: String,
        /// Day in YYYY-MM-DD form (defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Size in bytes
        #[arg(long, default_value_t = 0)]
        size: u64,
    },
    /// Show the study log, optionally for a single day
    List {
        /// Day in YYYY-MM-DD form
        date: Option<String>,
    },
    /// Show or set the exam date
    ExamDate {
        /// Day in YYYY-MM-DD form; omit to show the current value
        date: Option<String>,
    },
    /// Recent activity across the last recorded days
    Overview,
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = StateStore::open_default();
    match action {
        ScheduleAction::Add { activity, date } => {
            let day = resolve_day(date)?;
            let mut activities: BTreeMap<String, Vec<String>> =
                store.get(keys::STUDENT_ACTIVITIES, BTreeMap::new());
            let entries = activities.entry(day.clone()).or_default();
            if entries.len() >= MAX_ENTRIES_PER_DAY {
                return Err(format!("{day} already holds {MAX_ENTRIES_PER_DAY} entries").into());
            }
            entries.push(activity);
            store.set(keys::STUDENT_ACTIVITIES, activities);
            println!("recorded for {day}");
        }
        ScheduleAction::Attach { name, date, size } => {
            let day = resolve_day(date)?;
            let mut attachments: BTreeMap<String, Vec<Attachment>> =
                store.get(keys::ATTACHMENTS, BTreeMap::new());
            let entries = attachments.entry(day.clone()).or_default();
            if entries.len() >= MAX_ENTRIES_PER_DAY {
                return Err(format!("{day} already holds {MAX_ENTRIES_PER_DAY} entries").into());
            }
            entries.push(Attachment { name, size });
            store.set(keys::ATTACHMENTS, attachments);
            println!("attached for {day}");
        }
        ScheduleAction::List { date } => {
            let activities: BTreeMap<String, Vec<String>> =
                store.get(keys::STUDENT_ACTIVITIES, BTreeMap::new());
            let attachments: BTreeMap<String, Vec<Attachment>> =
                store.get(keys::ATTACHMENTS, BTreeMap::new());
            match date {
                Some(day) => {
                    for entry in activities.get(&day).into_iter().flatten() {
                        println!("{day}  {entry}");
                    }
                    for att in attachments.get(&day).into_iter().flatten() {
                        println!("{day}  [file] {} ({} bytes)", att.name, att.size);
                    }
                }
                None => {
                    for (day, entries) in &activities {
                        for entry in entries {
                            println!("{day}  {entry}");
                        }
                    }
                    for (day, entries) in &attachments {
                        for att in entries {
                            println!("{day}  [file] {} ({} bytes)", att.name, att.size);
                        }
                    }
                }
            }
        }
        ScheduleAction::ExamDate { date } => match date {
            Some(day) => {
                if !is_iso_date(&day) {
                    return Err(format!("not a calendar date: {day}").into());
                }
                store.set(keys::EXAM_DATE, day.clone());
                println!("exam date set to {day}");
            }
            None => {
                let current = store.get(keys::EXAM_DATE, String::new());
                if current.is_empty() {
                    println!("exam date not set");
                } else {
                    println!("{current}");
                }
            }
        },
        ScheduleAction::Overview => {
            let activities: BTreeMap<String, Vec<String>> =
                store.get(keys::STUDENT_ACTIVITIES, BTreeMap::new());
            let attachments: BTreeMap<String, Vec<Attachment>> =
                store.get(keys::ATTACHMENTS, BTreeMap::new());
            for line in overview_lines(&activities, &attachments) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn resolve_day(date: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    let day = date.unwrap_or_else(|| chrono::Utc::now().date_naive().to_string());
    if !is_iso_date(&day) {
        return Err(format!("not a calendar date: {day}").into());
    }
    Ok(day)
}

/// Most recent entries: the last [`OVERVIEW_DAYS`] recorded days, newest
/// first, flattened and capped at [`OVERVIEW_ITEMS`] lines.
fn overview_lines(
    activities: &BTreeMap<String, Vec<String>>,
    attachments: &BTreeMap<String, Vec<Attachment>>,
) -> Vec<String> {
    let days: BTreeSet<&String> = activities.keys().chain(attachments.keys()).collect();
    let mut lines = Vec::new();
    for day in days.into_iter().rev().take(OVERVIEW_DAYS) {
        for entry in activities.get(day).into_iter().flatten() {
            lines.push(format!("{day}  {entry}"));
        }
        for att in attachments.get(day).into_iter().flatten() {
            lines.push(format!("{day}  [file] {} ({} bytes)", att.name, att.size));
        }
    }
    lines.truncate(OVERVIEW_ITEMS);
    lines
}
