// Module for loading the raw fight table. It reads the csv file, validates the header,
// and turns each line into a typed row, skipping lines the reader cannot make sense of.
use std::fs::File;
use std::path::Path;
use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use chrono::NaiveDate;
use thiserror::Error;

/// Columns the pipeline cannot work without; their absence is a startup failure.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Weight Class",
    "Fighter Age",
    "Fighter Stance",
    "Win Count",
    "Result",
    "Finish Round",
    "Title Fight",
];

mod date_format {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer};
    const FMT: &str = "%Y-%m-%d";

    pub fn deserialize<'de, D>(d: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(d)?;
        if s.trim().is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(s.trim(), FMT)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

mod flag_format {
    use serde::{self, Deserialize, Deserializer};

    pub fn deserialize<'de, D>(d: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(d)?;
        match s.trim() {
            "" => Ok(None),
            "True" | "TRUE" | "true" | "1" => Ok(Some(true)),
            "False" | "FALSE" | "false" | "0" => Ok(Some(false)),
            other => Err(serde::de::Error::custom(format!("unrecognized flag: {other}"))),
        }
    }
}

/// One line of the joined fight dataset, before cleaning. Every field may be
/// empty in the source, so everything is optional here; `preprocess` decides
/// which gaps are fatal to a row.
#[derive(Debug, Deserialize)]
pub struct RawFightRow {
    #[serde(rename = "Weight Class")]   pub weight_class: Option<String>,
    #[serde(rename = "Fighter Age")]    pub fighter_age: Option<u32>,
    #[serde(rename = "Fighter Stance")] pub fighter_stance: Option<String>,
    #[serde(rename = "Win Count")]      pub win_count: Option<u32>,
    #[serde(rename = "Result")]         pub result: Option<String>,
    #[serde(rename = "Finish Round")]   pub finish_round: Option<u32>,
    #[serde(rename = "Title Fight", deserialize_with = "flag_format::deserialize")]
                                        pub title_fight: Option<bool>,
    // Not part of the required schema; the joined export carries it.
    #[serde(rename = "Event Date", deserialize_with = "date_format::deserialize", default)]
                                        pub event_date: Option<NaiveDate>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("input is missing required column(s): {0}")]
    MissingColumns(String),
    #[error("failed to read csv input: {0}")]
    Csv(#[from] csv::Error),
}

pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<RawFightRow>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut rdr = ReaderBuilder::new()
        .delimiter(b',')
        .flexible(true)
        .has_headers(true)
        .from_reader(file);

    // Grab and own the header row, then check the schema in one pass so a
    // broken export reports every missing column at once.
    let headers = rdr.headers()?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing.join(", ")));
    }

    let mut out = Vec::new();
    for result in rdr.records() {
        let raw: StringRecord = result?;

        // Skip completely empty lines
        if raw.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        // Attempt to deserialize; if it fails, skip that row
        match raw.deserialize::<RawFightRow>(Some(&headers)) {
            Ok(row) => out.push(row),
            Err(e) => {
                eprintln!(
                    "Skipping malformed record at line {}: {}",
                    raw.position().map(|p| p.line()).unwrap_or(0),
                    e
                );
            }
        }
    }

    Ok(out)
}
