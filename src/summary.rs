// Group-and-sum reduction of fight records into chart-ready tables, plus the
// catalog of the four views the dashboard renders.
use std::collections::HashMap;
use thiserror::Error;
use crate::filter::Selection;
use crate::preprocess::FightRecord;

/// Columns a summary may group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupColumn {
    Result,
    FinishRound,
    FighterAge,
    FighterStance,
}

/// Columns a summary may sum over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueColumn {
    WinIndicator,
    FighterAge,
    FinishRound,
}

/// The pairings `summarize` accepts; everything the dashboard asks for sums
/// the win indicator. Anything outside this table is a caller mistake and is
/// rejected before any row is read.
const SUPPORTED_PAIRINGS: [(GroupColumn, ValueColumn); 4] = [
    (GroupColumn::Result, ValueColumn::WinIndicator),
    (GroupColumn::FinishRound, ValueColumn::WinIndicator),
    (GroupColumn::FighterAge, ValueColumn::WinIndicator),
    (GroupColumn::FighterStance, ValueColumn::WinIndicator),
];

impl GroupColumn {
    pub fn name(self) -> &'static str {
        match self {
            GroupColumn::Result => "Result",
            GroupColumn::FinishRound => "Finish Round",
            GroupColumn::FighterAge => "Fighter Age",
            GroupColumn::FighterStance => "Fighter Stance",
        }
    }

    /// Group label for one record, or `None` when the record has no value in
    /// this column (such rows stay out of the summary).
    fn key(self, record: &FightRecord) -> Option<String> {
        match self {
            GroupColumn::Result => record.result.clone(),
            GroupColumn::FinishRound => record.finish_round.map(|r| r.to_string()),
            GroupColumn::FighterAge => Some(record.fighter_age.to_string()),
            GroupColumn::FighterStance => Some(record.fighter_stance.clone()),
        }
    }
}

impl ValueColumn {
    pub fn name(self) -> &'static str {
        match self {
            ValueColumn::WinIndicator => "Win",
            ValueColumn::FighterAge => "Fighter Age",
            ValueColumn::FinishRound => "Finish Round",
        }
    }

    fn value(self, record: &FightRecord) -> Option<u32> {
        match self {
            ValueColumn::WinIndicator => Some(record.win),
            ValueColumn::FighterAge => Some(record.fighter_age),
            ValueColumn::FinishRound => record.finish_round,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    #[error("unsupported aggregation: group by {group} summing {value}")]
    UnsupportedPairing {
        group: &'static str,
        value: &'static str,
    },
}

/// One bar of a chart: a group label and the summed value for that group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: String,
    pub total: u32,
}

/// Ordered summary rows, highest total first. Empty input gives an empty
/// table, which renders as an empty chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryTable {
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Partition records by `group`, sum `value` per partition, and sort the
/// resulting rows by total, descending. Rows with equal totals keep the order
/// their group value first appeared in the input.
pub fn summarize(
    records: &[FightRecord],
    group: GroupColumn,
    value: ValueColumn,
) -> Result<SummaryTable, AggregateError> {
    if !SUPPORTED_PAIRINGS.contains(&(group, value)) {
        return Err(AggregateError::UnsupportedPairing {
            group: group.name(),
            value: value.name(),
        });
    }

    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, u32> = HashMap::new();
    for record in records {
        let Some(key) = group.key(record) else { continue };
        let Some(v) = value.value(record) else { continue };
        if !totals.contains_key(&key) {
            order.push(key.clone());
        }
        *totals.entry(key).or_insert(0) += v;
    }

    let mut rows: Vec<SummaryRow> = order
        .into_iter()
        .map(|label| {
            let total = totals[&label];
            SummaryRow { label, total }
        })
        .collect();
    // stable sort, so first-seen order breaks ties
    rows.sort_by_key(|row| std::cmp::Reverse(row.total));

    Ok(SummaryTable { rows })
}

/// The four views of the dashboard, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Results,
    TitleFightFinishRound,
    FighterAge,
    FighterStance,
}

pub const DASHBOARD_VIEWS: [View; 4] = [
    View::Results,
    View::TitleFightFinishRound,
    View::FighterAge,
    View::FighterStance,
];

impl View {
    /// Chart caption, with the current weight class selection embedded.
    pub fn chart_title(self, selection: &Selection) -> String {
        match self {
            View::Results => format!("{selection} - Results Distribution"),
            View::TitleFightFinishRound => {
                format!("{selection} - Title Fight Finish Round Distribution")
            }
            View::FighterAge => format!("{selection} - Age Distribution"),
            View::FighterStance => format!("{selection} - Stance Distribution"),
        }
    }

    /// Label of the grouped axis.
    pub fn axis_label(self) -> &'static str {
        self.group_column().name()
    }

    /// File stem the chart image is written under.
    pub fn file_stem(self) -> &'static str {
        match self {
            View::Results => "results_distribution",
            View::TitleFightFinishRound => "title_fight_finish_round_distribution",
            View::FighterAge => "age_distribution",
            View::FighterStance => "stance_distribution",
        }
    }

    fn group_column(self) -> GroupColumn {
        match self {
            View::Results => GroupColumn::Result,
            View::TitleFightFinishRound => GroupColumn::FinishRound,
            View::FighterAge => GroupColumn::FighterAge,
            View::FighterStance => GroupColumn::FighterStance,
        }
    }

    /// Reduce the (already weight-class-filtered) records into this view's
    /// summary table. The finish round view only counts title fights.
    pub fn summarize(self, records: &[FightRecord]) -> Result<SummaryTable, AggregateError> {
        match self {
            View::TitleFightFinishRound => {
                let title_fights: Vec<FightRecord> = records
                    .iter()
                    .filter(|r| r.title_fight == Some(true))
                    .cloned()
                    .collect();
                summarize(&title_fights, self.group_column(), ValueColumn::WinIndicator)
            }
            _ => summarize(records, self.group_column(), ValueColumn::WinIndicator),
        }
    }
}
