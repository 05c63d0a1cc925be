// Cleaning pass over the raw table: drop rows missing the fields every view
// depends on, and derive the per-row win indicator.
use std::path::Path;
use chrono::NaiveDate;
use crate::io::{load_csv, LoadError, RawFightRow};

/// Cleaned fight record. Weight class, age and stance are guaranteed present;
/// everything else is carried through from the source as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct FightRecord {
    pub weight_class: String,
    pub fighter_age: u32,
    pub fighter_stance: String,
    /// 1 exactly when the source row's win count is 1, else 0.
    pub win: u32,
    pub result: Option<String>,
    pub finish_round: Option<u32>,
    pub title_fight: Option<bool>,
    pub event_date: Option<NaiveDate>,
}

/// Turn raw rows into `FightRecord`s, preserving source order.
pub fn preprocess(rows: &[RawFightRow]) -> Vec<FightRecord> {
    let mut cleaned = Vec::with_capacity(rows.len());

    for r in rows {
        // keep or skip: the three columns every view filters or groups on
        let weight_class = match &r.weight_class {
            Some(w) => w.clone(),
            None => continue,
        };
        let fighter_age = match r.fighter_age {
            Some(a) => a,
            None => continue,
        };
        let fighter_stance = match &r.fighter_stance {
            Some(s) => s.clone(),
            None => continue,
        };

        let win = if r.win_count == Some(1) { 1 } else { 0 };

        cleaned.push(FightRecord {
            weight_class,
            fighter_age,
            fighter_stance,
            win,
            result: r.result.clone(),
            finish_round: r.finish_round,
            title_fight: r.title_fight,
            event_date: r.event_date,
        });
    }

    cleaned
}

/// Helper to load and clean the dataset in one call.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<FightRecord>, LoadError> {
    let raw = load_csv(path)?;
    Ok(preprocess(&raw))
}
