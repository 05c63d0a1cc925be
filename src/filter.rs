// Weight class selection. The sidebar hands the pipeline one string; either
// the sentinel "All" or an exact weight class value.
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use crate::preprocess::FightRecord;

/// Sentinel selection that leaves the dataset unfiltered.
pub const ALL: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    WeightClass(String),
}

impl FromStr for Selection {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(Selection::All)
        } else {
            Ok(Selection::WeightClass(s.to_string()))
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL),
            Selection::WeightClass(class) => f.write_str(class),
        }
    }
}

/// Narrow the dataset to the selected weight class. `All` returns the rows
/// untouched and in order; a class with no matches returns an empty vec.
pub fn filter_records(records: &[FightRecord], selection: &Selection) -> Vec<FightRecord> {
    match selection {
        Selection::All => records.to_vec(),
        Selection::WeightClass(class) => records
            .iter()
            .filter(|r| r.weight_class == *class)
            .cloned()
            .collect(),
    }
}

/// The distinct weight classes present in the dataset, sorted, as offered by
/// the selector (without the leading sentinel).
pub fn weight_classes(records: &[FightRecord]) -> Vec<String> {
    let mut classes: Vec<String> = records.iter().map(|r| r.weight_class.clone()).collect();
    classes.sort();
    classes.dedup();
    classes
}
