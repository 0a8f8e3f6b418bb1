//! Time source
//!
//! "Today" and the millisecond counter behind local ids are injected so the
//! estimator stays pure and tests can pin the date.

use std::fmt::Debug;
use std::sync::Arc;

use chrono::{Local, NaiveDate, Utc};

pub trait Clock: Debug + Send + Sync {
    /// Current calendar date in the user's timezone
    fn today(&self) -> NaiveDate;

    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

pub type SharedClock = Arc<dyn Clock>;

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub today: NaiveDate,
    pub millis: i64,
}

impl FixedClock {
    pub fn on(today: NaiveDate) -> Self {
        let millis = today
            .and_hms_opt(12, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or_default();
        Self { today, millis }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now_millis(&self) -> i64 {
        self.millis
    }
}

pub fn system_clock() -> SharedClock {
    Arc::new(SystemClock)
}
