//! Date and time generators.
//!
//! All values fall between the UNIX epoch and the current time.

use super::pick;
use crate::locales::shared::TIMEZONES;
use chrono::{DateTime, NaiveDateTime, Utc};
use rand::{Rng, RngCore};

/// Random UNIX timestamp between the epoch and now.
pub fn unix_time(rng: &mut dyn RngCore) -> i64 {
    let now = Utc::now().timestamp();
    rng.gen_range(0..=now)
}

/// Random date and time between the epoch and now.
pub fn date_time(rng: &mut dyn RngCore) -> NaiveDateTime {
    let ts = unix_time(rng);
    DateTime::from_timestamp(ts, 0)
        .unwrap_or_default()
        .naive_utc()
}

/// Date as `YYYY-MM-DD`.
pub fn date(rng: &mut dyn RngCore) -> String {
    date_time(rng).format("%Y-%m-%d").to_string()
}

/// Time as `HH:MM:SS`.
pub fn time(rng: &mut dyn RngCore) -> String {
    date_time(rng).format("%H:%M:%S").to_string()
}

pub fn iso8601(rng: &mut dyn RngCore) -> String {
    date_time(rng).format("%Y-%m-%dT%H:%M:%S").to_string()
}

pub fn timezone(rng: &mut dyn RngCore) -> String {
    pick(rng, TIMEZONES).to_string()
}
