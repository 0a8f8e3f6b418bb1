//! Feedback schedule types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Delivery status of the post-trip feedback email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmailStatus {
    /// No trip supplied yet
    #[default]
    Pending,
    Scheduled,
    Sent,
    Error,
}

impl EmailStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailStatus::Pending => "pending",
            EmailStatus::Scheduled => "scheduled",
            EmailStatus::Sent => "sent",
            EmailStatus::Error => "error",
        }
    }

    /// Capitalised label for display
    pub fn label(&self) -> &'static str {
        match self {
            EmailStatus::Pending => "Pending",
            EmailStatus::Scheduled => "Scheduled",
            EmailStatus::Sent => "Sent",
            EmailStatus::Error => "Error",
        }
    }
}

/// When the feedback email goes out and where it stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSchedule {
    pub scheduled_date: NaiveDate,
    pub status: EmailStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&EmailStatus::Sent).unwrap(), r#""sent""#);
        assert_eq!(EmailStatus::Scheduled.label(), "Scheduled");
        assert_eq!(EmailStatus::default(), EmailStatus::Pending);
    }

    #[test]
    fn test_schedule_wire_format() {
        let schedule = FeedbackSchedule {
            scheduled_date: NaiveDate::from_ymd_opt(2025, 4, 11).unwrap(),
            status: EmailStatus::Scheduled,
        };
        assert_eq!(
            serde_json::to_string(&schedule).unwrap(),
            r#"{"scheduledDate":"2025-04-11","status":"scheduled"}"#
        );
    }
}
