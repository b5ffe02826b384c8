//! Ranked destination results and their table ordering.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{CoreError, CoreResult};

/// One ranked destination from the ranking pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub rank: u32,
    #[serde(rename = "IATA")]
    pub iata: String,
    pub city: String,
    pub destination_fit: f64,
    pub distance_fit: f64,
    pub vibe_fit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl ResultRow {
    /// Map coordinates, when the pipeline provided both
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

/// Sortable table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Rank,
    Iata,
    DestinationFit,
    DistanceFit,
    VibeFit,
}

impl SortColumn {
    /// Columns in table order
    pub fn all() -> &'static [SortColumn] {
        &[
            SortColumn::Rank,
            SortColumn::Iata,
            SortColumn::DestinationFit,
            SortColumn::DistanceFit,
            SortColumn::VibeFit,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Rank => "Rank",
            SortColumn::Iata => "IATA",
            SortColumn::DestinationFit => "Destination",
            SortColumn::DistanceFit => "Distance",
            SortColumn::VibeFit => "Vibe",
        }
    }

    fn compare(&self, a: &ResultRow, b: &ResultRow) -> Ordering {
        match self {
            SortColumn::Rank => a.rank.cmp(&b.rank),
            SortColumn::Iata => a.iata.cmp(&b.iata),
            SortColumn::DestinationFit => a.destination_fit.total_cmp(&b.destination_fit),
            SortColumn::DistanceFit => a.distance_fit.total_cmp(&b.distance_fit),
            SortColumn::VibeFit => a.vibe_fit.total_cmp(&b.vibe_fit),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    fn flipped(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Current column and direction of the results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub order: SortOrder,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: SortColumn::Rank,
            order: SortOrder::Ascending,
        }
    }
}

impl SortState {
    /// Header click: flip the active column, or switch to a new one ascending.
    pub fn select(&mut self, column: SortColumn) {
        if self.column == column {
            self.order = self.order.flipped();
        } else {
            self.column = column;
            self.order = SortOrder::Ascending;
        }
    }

    /// A sorted copy of `rows`; ties keep their input order.
    pub fn apply(&self, rows: &[ResultRow]) -> Vec<ResultRow> {
        let mut sorted = rows.to_vec();
        sorted.sort_by(|a, b| {
            let ordering = self.column.compare(a, b);
            match self.order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
        sorted
    }
}

/// What the results page shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultsStatus {
    #[default]
    Loading,
    Error(String),
    Empty,
    Ready(Vec<ResultRow>),
}

impl From<CoreResult<Vec<ResultRow>>> for ResultsStatus {
    fn from(result: CoreResult<Vec<ResultRow>>) -> Self {
        match result {
            Ok(rows) if rows.is_empty() => ResultsStatus::Empty,
            Ok(rows) => ResultsStatus::Ready(rows),
            Err(e) => ResultsStatus::Error(e.to_string()),
        }
    }
}

/// Read a results file.
pub async fn load_results(path: impl AsRef<Path>) -> CoreResult<Vec<ResultRow>> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Try each location in turn and return the first that loads.
///
/// When every location fails, the error lists each failure in order.
pub async fn load_results_from(paths: &[PathBuf]) -> CoreResult<Vec<ResultRow>> {
    let mut failures = Vec::new();
    for path in paths {
        match load_results(path).await {
            Ok(rows) => return Ok(rows),
            Err(e) => {
                warn!("Could not load results from {:?}: {}", path, e);
                failures.push(format!("{}: {}", path.display(), e));
            }
        }
    }

    if failures.is_empty() {
        return Err(CoreError::Config("no results location configured".into()));
    }
    Err(CoreError::Load(failures.join("; ")))
}
