use std::io::Write;

use crate::adapters::shared_store::{InMemoryStore, NEXT_TRIPS_KEY};
use crate::app::error::AppError;
use crate::app::runtime::run_once;
use crate::app::timeline::TimelineProvider;
use crate::domain::date_format::DisplayLocale;
use crate::domain::render::DisplayContext;
use crate::domain::timeline::Clock;
use crate::domain::trip::Trip;

pub fn sample_trip() -> Trip {
    Trip {
        id: "1".to_string(),
        departure_time: "2025-04-24T14:04:00.000".to_string(),
        departure_station: "Paris".to_string(),
        arrival_station: "Lyon".to_string(),
        train_number: Some("TGV 6942".to_string()),
        train_type: Some("TGV".to_string()),
        distance: Some(450.0),
        price: Some(65.0),
        departure_city_name: Some("Paris".to_string()),
        arrival_city_name: Some("Lyon".to_string()),
    }
}

fn sample_store() -> Result<InMemoryStore, AppError> {
    let payload = serde_json::to_string(&[sample_trip()]).map_err(AppError::output)?;
    Ok(InMemoryStore::new().with_value(NEXT_TRIPS_KEY, payload))
}

/// Writes the preview timeline: the sample trip, then no trip, for each context.
pub fn write_preview<C, W>(
    clock: &C,
    locale: DisplayLocale,
    writer: &mut W,
) -> Result<(), AppError>
where
    C: Clock,
    W: Write,
{
    let with_trip = TimelineProvider::new(sample_store()?, clock, locale);
    let without_trip = TimelineProvider::new(InMemoryStore::new(), clock, locale);

    for context in [DisplayContext::Detailed, DisplayContext::Compact] {
        run_once(&with_trip, context, &mut *writer)?;
        run_once(&without_trip, context, &mut *writer)?;
    }

    Ok(())
}
