use std::cell::Cell;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::app::preview::sample_trip;
use crate::domain::timeline::Clock;
use crate::domain::trip::Trip;

pub struct FakeClock {
    now: Cell<NaiveDateTime>,
}

impl FakeClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, value: NaiveDateTime) {
        self.now.set(value);
    }
}

impl Clock for FakeClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

/// Paris to Lyon on TGV 6942, leaving 2025-04-24 at 14:04.
pub fn lyon_trip() -> Trip {
    Trip {
        distance: None,
        price: None,
        ..sample_trip()
    }
}

pub fn trips_json(trips: &[Trip]) -> String {
    serde_json::to_string(trips).expect("trips should serialize")
}

pub fn write_suite_file(group_dir: &Path, suite_name: &str, content: &str) {
    std::fs::create_dir_all(group_dir).expect("group dir should be creatable");
    std::fs::write(group_dir.join(format!("{suite_name}.json")), content)
        .expect("suite file should be writable");
}
