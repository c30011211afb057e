//! Unit tests for the task domain and store.


use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to noon local time on a fixed date.
#[derive(Debug, Clone, Copy)]
pub(super) struct FixedClock {
    now: DateTime<Local>,
}

impl FixedClock {
    pub(super) fn on(day: NaiveDate) -> Self {
        let noon = day.and_hms_opt(12, 0, 0).expect("noon is a valid time");
        let now = Local
            .from_local_datetime(&noon)
            .earliest()
            .expect("noon exists in local time");
        Self { now }
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.now
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now.with_timezone(&Utc)
    }
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
