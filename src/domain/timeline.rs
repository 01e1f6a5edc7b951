use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::domain::render::RenderModel;

pub const REFRESH_INTERVAL_SECONDS: i64 = 3600;

/// Source of the current local wall-clock time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub render_model: RenderModel,
    pub captured_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSnapshot {
    pub render_model: RenderModel,
    pub captured_at: NaiveDateTime,
    pub next_refresh_at: NaiveDateTime,
}

impl TimelineSnapshot {
    pub fn from_entry(entry: TimelineEntry) -> Self {
        Self {
            next_refresh_at: next_refresh_at(entry.captured_at),
            render_model: entry.render_model,
            captured_at: entry.captured_at,
        }
    }
}

/// Fixed hourly policy, independent of what was rendered.
pub fn next_refresh_at(captured_at: NaiveDateTime) -> NaiveDateTime {
    captured_at + Duration::seconds(REFRESH_INTERVAL_SECONDS)
}
