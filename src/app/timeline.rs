use chrono::{Local, NaiveDateTime};

use crate::adapters::shared_store::{NEXT_TRIPS_KEY, SharedStore};
use crate::domain::date_format::DisplayLocale;
use crate::domain::render::{DisplayContext, select_render};
use crate::domain::timeline::{Clock, TimelineEntry, TimelineSnapshot};
use crate::domain::trip::{decode_trips, select_next_trip};

#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Rebuilds every entry from the shared store outward; holds no state between
/// calls beyond its collaborators.
pub struct TimelineProvider<S, C> {
    store: S,
    clock: C,
    locale: DisplayLocale,
}

impl<S, C> TimelineProvider<S, C>
where
    S: SharedStore,
    C: Clock,
{
    pub fn new(store: S, clock: C, locale: DisplayLocale) -> Self {
        Self {
            store,
            clock,
            locale,
        }
    }

    /// Entry shown while the widget is being prepared; never touches storage.
    pub fn placeholder(&self, context: DisplayContext) -> TimelineEntry {
        let now = self.clock.now();
        TimelineEntry {
            render_model: select_render(None, now, context, self.locale),
            captured_at: now,
        }
    }

    pub fn snapshot(&self, context: DisplayContext) -> TimelineEntry {
        let raw = self.store.read_string(NEXT_TRIPS_KEY);
        let trips = decode_trips(raw.as_deref());
        let now = self.clock.now();

        TimelineEntry {
            render_model: select_render(select_next_trip(&trips), now, context, self.locale),
            captured_at: now,
        }
    }

    pub fn refresh(&self, context: DisplayContext) -> TimelineSnapshot {
        let snapshot = TimelineSnapshot::from_entry(self.snapshot(context));

        tracing::debug!(
            captured_at = %snapshot.captured_at,
            next_refresh_at = %snapshot.next_refresh_at,
            layout = ?snapshot.render_model.layout(),
            "timeline refreshed"
        );

        snapshot
    }
}
