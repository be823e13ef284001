//! Call log domain model and the call-history filter set.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::format_duration;
use crate::error::NexusError;

/// Filter value meaning "do not restrict on this field".
pub const FILTER_ALL: &str = "all";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CallStatus {
    Completed,
    Missed,
    Failed,
}

impl CallStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CallStatus::Completed => "Completed",
            CallStatus::Missed => "Missed",
            CallStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CallStatus {
    type Err = NexusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "completed" => Ok(CallStatus::Completed),
            "missed" => Ok(CallStatus::Missed),
            "failed" => Ok(CallStatus::Failed),
            other => Err(NexusError::Validation {
                message: format!("unknown call status: {other}"),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// One historical voice-agent phone interaction. Never mutated after
/// generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CallLog {
    pub id: String,
    pub tenant_id: String,
    pub brand: String,
    pub caller_number: String,
    pub agent_name: String,
    pub start_time: DateTime<Utc>,
    /// Call length in seconds.
    pub duration_secs: u32,
    pub status: CallStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_url: Option<String>,
    pub sentiment: Sentiment,
    pub outcome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
}

impl CallLog {
    pub fn duration(&self) -> String {
        format_duration(self.duration_secs)
    }

    /// Calendar day the call started on, time of day stripped.
    pub fn start_date(&self) -> NaiveDate {
        self.start_time.date_naive()
    }
}

/// Call-history filter set.
///
/// `Default` is the permissive initial state: empty search, every
/// status, every brand, no date bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallFilters {
    /// Case-insensitive substring matched against caller number,
    /// agent name, call id, and outcome.
    pub search: String,
    /// `None` means all statuses.
    pub status: Option<CallStatus>,
    /// `None` means all brands.
    pub brand: Option<String>,
    /// Inclusive lower bound on the start date.
    pub date_start: Option<NaiveDate>,
    /// Inclusive upper bound on the start date.
    pub date_end: Option<NaiveDate>,
}

impl CallFilters {
    /// Build a filter set from the raw values of the history form,
    /// where `"all"` disables the status or brand restriction.
    pub fn from_form(
        search: &str,
        status: &str,
        brand: &str,
        date_start: Option<NaiveDate>,
        date_end: Option<NaiveDate>,
    ) -> Result<Self, NexusError> {
        let status = if status.eq_ignore_ascii_case(FILTER_ALL) {
            None
        } else {
            Some(status.parse()?)
        };
        let brand = (brand != FILTER_ALL).then(|| brand.to_string());

        Ok(Self {
            search: search.to_string(),
            status,
            brand,
            date_start,
            date_end,
        })
    }

    /// True when no restriction is applied.
    pub fn is_identity(&self) -> bool {
        self == &Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("missed".parse::<CallStatus>().unwrap(), CallStatus::Missed);
        assert_eq!(
            "Completed".parse::<CallStatus>().unwrap(),
            CallStatus::Completed
        );
        assert!("ringing".parse::<CallStatus>().is_err());
    }

    #[test]
    fn form_all_values_mean_no_restriction() {
        let filters = CallFilters::from_form("", "all", "all", None, None).unwrap();
        assert!(filters.is_identity());
    }

    #[test]
    fn form_values_become_restrictions() {
        let mut filters =
            CallFilters::from_form("bot", "missed", "Sales Team A", None, None).unwrap();
        assert_eq!(filters.status, Some(CallStatus::Missed));
        assert_eq!(filters.brand.as_deref(), Some("Sales Team A"));
        assert!(!filters.is_identity());

        filters.reset();
        assert!(filters.is_identity());
    }
}
