//! The JSON document handed to persistence on finalize.
//!
//! ```json
//! { "timestamp": "2026-10-18T09:30:00.000Z",
//!   "dateRange": {"startDate": "2026-07-01", "endDate": "2026-07-08"},
//!   "travelers": [
//!     { "travelerNumber": 1,
//!       "budgetRange": {"min": 0, "max": 1000},
//!       "preferredVibes": ["beach"],
//!       "preferredDestination": "Lisbon",
//!       "startingPoint": "Madrid" } ] }
//! ```

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::dates::DateRange;
use crate::form::TravelerAnswer;
use crate::session::SessionState;
use crate::types::BudgetRange;

/// `dateRange` object; serializes as `{}` when no dates were chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadDateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl PayloadDateRange {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }
}

/// One traveler's entry in the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelerRecord {
    pub traveler_number: u32,
    /// Budget in euros
    pub budget_range: BudgetRange,
    pub preferred_vibes: Vec<String>,
    pub preferred_destination: String,
    pub starting_point: String,
}

impl TravelerRecord {
    fn from_answer(answer: &TravelerAnswer, currency_scale: u32) -> Self {
        Self {
            traveler_number: answer.traveler.get(),
            budget_range: answer.budget.scaled(currency_scale),
            preferred_vibes: answer.vibes.as_slice().to_vec(),
            preferred_destination: answer.destination.clone(),
            starting_point: answer.starting_point.clone(),
        }
    }
}

/// Everything one finalize writes out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    /// ISO-8601 UTC, millisecond precision
    pub timestamp: String,
    #[serde(default)]
    pub date_range: PayloadDateRange,
    pub travelers: Vec<TravelerRecord>,
}

impl SubmissionPayload {
    /// Build the payload from the session's frozen answers.
    ///
    /// Travelers appear once each in ascending number order, whatever order
    /// they submitted in. The date range is included whenever both dates
    /// are set and in order.
    pub fn assemble(session: &SessionState, at: DateTime<Utc>) -> Self {
        let scale = session.config().currency_scale;
        let date_range = match session.dates().selected() {
            Some((start, end)) => match DateRange::new(start, end) {
                Ok(range) => PayloadDateRange {
                    start_date: Some(range.start),
                    end_date: Some(range.end),
                },
                Err(_) => {
                    tracing::warn!(
                        %start,
                        %end,
                        "start date is after end date; omitting the date range"
                    );
                    PayloadDateRange::default()
                }
            },
            None => {
                tracing::debug!("date range is incomplete; omitting it from the payload");
                PayloadDateRange::default()
            }
        };

        Self {
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            date_range,
            travelers: session
                .answers()
                .map(|answer| TravelerRecord::from_answer(answer, scale))
                .collect(),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
