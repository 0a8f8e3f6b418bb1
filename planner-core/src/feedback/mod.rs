//! Post-trip feedback email scheduling
//!
//! The schedule is derived from the trip's return date:
//! `scheduled = return + timing offset` (one day by default), and the email
//! counts as sent once the return date is today or earlier. A manual
//! reschedule overrides the derived value until a different trip comes in.

mod email;

pub use email::FeedbackEmail;

use chrono::{Days, NaiveDate};
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::PlannerConfig;
use crate::domain::{EmailStatus, FeedbackSchedule, PlannerError, PlannerResult, Trip};
use crate::session::SessionContext;

/// How long after the return date the email goes out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum FeedbackTiming {
    #[default]
    OneDay,
    TwoDays,
    ThreeDays,
    OneWeek,
}

impl FeedbackTiming {
    pub const ALL: [FeedbackTiming; 4] = [
        FeedbackTiming::OneDay,
        FeedbackTiming::TwoDays,
        FeedbackTiming::ThreeDays,
        FeedbackTiming::OneWeek,
    ];

    pub fn days(&self) -> u64 {
        match self {
            FeedbackTiming::OneDay => 1,
            FeedbackTiming::TwoDays => 2,
            FeedbackTiming::ThreeDays => 3,
            FeedbackTiming::OneWeek => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeedbackTiming::OneDay => "1 day after return",
            FeedbackTiming::TwoDays => "2 days after return",
            FeedbackTiming::ThreeDays => "3 days after return",
            FeedbackTiming::OneWeek => "1 week after return",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSettings {
    pub timing: FeedbackTiming,
    pub include_photo_upload: bool,
    pub include_discount_offer: bool,
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self {
            timing: FeedbackTiming::OneDay,
            include_photo_upload: true,
            include_discount_offer: true,
        }
    }
}

/// Derive the schedule for a trip. Pure: same inputs, same output.
pub fn estimate(trip: &Trip, timing: FeedbackTiming, today: NaiveDate) -> FeedbackSchedule {
    let scheduled_date = add_days(trip.return_date, timing.days());
    let status = if trip.return_date <= today {
        EmailStatus::Sent
    } else {
        EmailStatus::Scheduled
    };
    FeedbackSchedule { scheduled_date, status }
}

fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

/// Feedback email state for one trip view
#[derive(Debug, Clone)]
pub struct FeedbackScheduler {
    settings: FeedbackSettings,
    reschedule_days: u64,
    trip: Option<Trip>,
    schedule: Option<FeedbackSchedule>,
    overridden: bool,
}

impl FeedbackScheduler {
    pub fn new(settings: FeedbackSettings, reschedule_days: u64) -> Self {
        Self {
            settings,
            reschedule_days,
            trip: None,
            schedule: None,
            overridden: false,
        }
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(FeedbackSettings::default(), config.reschedule_days)
    }

    pub fn trip(&self) -> Option<&Trip> {
        self.trip.as_ref()
    }

    pub fn schedule(&self) -> Option<FeedbackSchedule> {
        self.schedule
    }

    /// `pending` until a trip has been supplied
    pub fn status(&self) -> EmailStatus {
        self.schedule.map(|s| s.status).unwrap_or_default()
    }

    pub fn scheduled_date(&self) -> Option<NaiveDate> {
        self.schedule.map(|s| s.scheduled_date)
    }

    pub fn settings(&self) -> FeedbackSettings {
        self.settings
    }

    pub fn is_overridden(&self) -> bool {
        self.overridden
    }

    /// Supply the trip. A changed trip recomputes and drops any manual
    /// reschedule; the same trip again leaves everything as is.
    pub fn set_trip(&mut self, trip: Trip, today: NaiveDate) -> FeedbackSchedule {
        if let (Some(current), Some(schedule)) = (&self.trip, self.schedule) {
            if *current == trip {
                return schedule;
            }
        }
        let schedule = estimate(&trip, self.settings.timing, today);
        self.trip = Some(trip);
        self.schedule = Some(schedule);
        self.overridden = false;
        schedule
    }

    /// Change settings; the derived date follows the new timing unless a
    /// manual reschedule is in force.
    pub fn update_settings(&mut self, settings: FeedbackSettings, today: NaiveDate) {
        self.settings = settings;
        if self.overridden {
            return;
        }
        if let Some(trip) = &self.trip {
            self.schedule = Some(estimate(trip, settings.timing, today));
        }
    }

    /// Manual reschedule: `today + reschedule_days`, status back to scheduled
    pub fn reschedule(&mut self, today: NaiveDate) -> FeedbackSchedule {
        let schedule = FeedbackSchedule {
            scheduled_date: add_days(today, self.reschedule_days),
            status: EmailStatus::Scheduled,
        };
        self.schedule = Some(schedule);
        self.overridden = true;
        info!("Feedback email rescheduled for {}", schedule.scheduled_date);
        schedule
    }

    pub fn can_send(&self, session: &SessionContext) -> bool {
        session.is_authenticated() && self.trip.is_some() && self.status() != EmailStatus::Sent
    }

    /// Send immediately to the signed-in user.
    ///
    /// Fails with `Unauthenticated` when nobody is signed in; the status is
    /// left untouched on every failure.
    pub fn send_now(&mut self, session: &SessionContext) -> PlannerResult<FeedbackEmail> {
        let user = session.require_user()?;
        let trip = self
            .trip
            .as_ref()
            .ok_or_else(|| PlannerError::Validation("no trip to send feedback for".to_string()))?;
        let recipient = user.email.unwrap_or_default();
        let email = FeedbackEmail::compose(trip, &recipient, &self.settings);

        info!("Sending feedback email to {}", recipient);
        let scheduled_date = self.scheduled_date().unwrap_or(trip.return_date);
        self.schedule = Some(FeedbackSchedule {
            scheduled_date,
            status: EmailStatus::Sent,
        });
        Ok(email)
    }
}

impl Default for FeedbackScheduler {
    fn default() -> Self {
        Self::from_config(&PlannerConfig::default())
    }
}
