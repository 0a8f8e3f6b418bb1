//! Trip Entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A planned trip, owned by the caller and never mutated by the planner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub destination: String,
    /// Serialized as `YYYY-MM-DD`
    pub return_date: NaiveDate,
}

impl Trip {
    pub fn new(destination: impl Into<String>, return_date: NaiveDate) -> Self {
        Self {
            destination: destination.into(),
            return_date,
        }
    }
}
