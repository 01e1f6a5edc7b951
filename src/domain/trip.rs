use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wall-clock layout of `departureTime`, e.g. `2025-04-24T14:04:00.000`.
pub const DEPARTURE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%3f";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub departure_time: String,
    pub departure_station: String,
    pub arrival_station: String,
    #[serde(default)]
    pub train_number: Option<String>,
    #[serde(default)]
    pub train_type: Option<String>,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub departure_city_name: Option<String>,
    #[serde(default)]
    pub arrival_city_name: Option<String>,
}

impl Trip {
    /// Departure as a naive local time, `None` when the literal does not match
    /// [`DEPARTURE_TIME_FORMAT`].
    pub fn departure(&self) -> Option<NaiveDateTime> {
        parse_departure_time(&self.departure_time)
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("no payload stored")]
    Absent,
    #[error("payload is not a valid trip list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Byte offsets of the separators in `yyyy-MM-ddTHH:mm:ss.SSS`.
const DEPARTURE_SEPARATORS: [(usize, u8); 6] = [
    (4, b'-'),
    (7, b'-'),
    (10, b'T'),
    (13, b':'),
    (16, b':'),
    (19, b'.'),
];
const DEPARTURE_TIME_LEN: usize = 23;

pub fn parse_departure_time(raw: &str) -> Option<NaiveDateTime> {
    if !has_departure_shape(raw) {
        return None;
    }

    NaiveDateTime::parse_from_str(raw, DEPARTURE_TIME_FORMAT).ok()
}

/// chrono tolerates padding, short fields and leap seconds; the stored literal
/// must not.
fn has_departure_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    if bytes.len() != DEPARTURE_TIME_LEN {
        return false;
    }

    let layout_matches = bytes.iter().enumerate().all(|(index, byte)| {
        match DEPARTURE_SEPARATORS.iter().find(|(at, _)| *at == index) {
            Some((_, separator)) => byte == separator,
            None => byte.is_ascii_digit(),
        }
    });

    layout_matches && &raw[17..19] < "60"
}

/// Decodes the stored trip list. Any schema violation discards the whole list.
pub fn decode_trips(raw: Option<&str>) -> Vec<Trip> {
    match try_decode_trips(raw) {
        Ok(trips) => trips,
        Err(error) => {
            tracing::debug!(error = %error, "stored trip list unusable, treating as empty");
            Vec::new()
        }
    }
}

fn try_decode_trips(raw: Option<&str>) -> Result<Vec<Trip>, DecodeError> {
    let raw = raw.ok_or(DecodeError::Absent)?;
    serde_json::from_str::<Vec<Trip>>(raw).map_err(DecodeError::from)
}

/// The stored order is authoritative: the head of the list is the next trip.
pub fn select_next_trip(trips: &[Trip]) -> Option<&Trip> {
    trips.first()
}
