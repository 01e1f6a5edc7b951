use chrono::NaiveDateTime;
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::domain::countdown::format_countdown;
use crate::domain::date_format::{DisplayLocale, format_departure};
use crate::domain::trip::Trip;

pub const TRAIN_GLYPH: &str = "train.side.front.car";
pub const ORIGIN_BADGE: &str = "SNCF";
pub const EMPTY_STATE_TEXT: &str = "Aucun voyage prévu";
pub const DESTINATION_PREFIX_CHARS: usize = 6;

const COMPACT_FAMILIES: &[&str] = &["compact", "accessorycircular"];

/// Size class requested by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayContext {
    Compact,
    #[default]
    Detailed,
}

impl DisplayContext {
    /// Anything that is not a known compact family renders as the detailed card.
    pub fn from_family(family: &str) -> Self {
        let normalized = family.trim().to_ascii_lowercase();
        if COMPACT_FAMILIES.contains(&normalized.as_str()) {
            Self::Compact
        } else {
            Self::Detailed
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Layout {
    Compact,
    Detailed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactFace {
    pub glyph: &'static str,
    pub countdown_label: String,
    pub destination: String,
    pub trip: Trip,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedCard {
    pub origin_badge: &'static str,
    pub countdown_pill: Option<String>,
    pub heading: String,
    pub station_line: String,
    pub train_number: String,
    pub train_type_badge: String,
    pub formatted_departure: Option<String>,
    pub trip: Trip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyState {
    pub glyph: &'static str,
    pub text: &'static str,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            glyph: TRAIN_GLYPH,
            text: EMPTY_STATE_TEXT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "variant", rename_all = "camelCase")]
pub enum RenderModel {
    Compact(CompactFace),
    /// Compact face with nothing drawn on it.
    CompactBlank,
    Detailed(DetailedCard),
    Empty(EmptyState),
}

impl RenderModel {
    pub fn layout(&self) -> Option<Layout> {
        match self {
            Self::Compact(_) => Some(Layout::Compact),
            Self::Detailed(_) => Some(Layout::Detailed),
            Self::CompactBlank | Self::Empty(_) => None,
        }
    }

    pub fn display_trip(&self) -> Option<&Trip> {
        match self {
            Self::Compact(face) => Some(&face.trip),
            Self::Detailed(card) => Some(&card.trip),
            Self::CompactBlank | Self::Empty(_) => None,
        }
    }

    pub fn countdown_label(&self) -> Option<&str> {
        match self {
            Self::Compact(face) => Some(face.countdown_label.as_str()),
            Self::Detailed(card) => card.countdown_pill.as_deref(),
            Self::CompactBlank | Self::Empty(_) => None,
        }
    }

    pub fn formatted_departure(&self) -> Option<&str> {
        match self {
            Self::Detailed(card) => card.formatted_departure.as_deref(),
            _ => None,
        }
    }
}

pub fn select_render(
    trip: Option<&Trip>,
    now: NaiveDateTime,
    context: DisplayContext,
    locale: DisplayLocale,
) -> RenderModel {
    match context {
        DisplayContext::Compact => compact_face(trip, now),
        DisplayContext::Detailed => match trip {
            Some(trip) => RenderModel::Detailed(detailed_card(trip, now, locale)),
            None => RenderModel::Empty(EmptyState::default()),
        },
    }
}

fn compact_face(trip: Option<&Trip>, now: NaiveDateTime) -> RenderModel {
    let Some(trip) = trip else {
        return RenderModel::CompactBlank;
    };
    let Some(departure) = trip.departure() else {
        tracing::debug!(trip_id = %trip.id, "departure time unparseable, compact face left blank");
        return RenderModel::CompactBlank;
    };

    RenderModel::Compact(CompactFace {
        glyph: TRAIN_GLYPH,
        countdown_label: format_countdown(now, departure),
        destination: trip
            .arrival_station
            .graphemes(true)
            .take(DESTINATION_PREFIX_CHARS)
            .collect(),
        trip: trip.clone(),
    })
}

fn detailed_card(trip: &Trip, now: NaiveDateTime, locale: DisplayLocale) -> DetailedCard {
    let departure = trip.departure();
    if departure.is_none() {
        tracing::debug!(trip_id = %trip.id, "departure time unparseable, countdown and date hidden");
    }

    DetailedCard {
        origin_badge: ORIGIN_BADGE,
        countdown_pill: departure.map(|departure| format_countdown(now, departure)),
        heading: trip.arrival_city_name.clone().unwrap_or_default(),
        station_line: trip.arrival_station.clone(),
        train_number: trip.train_number.clone().unwrap_or_default(),
        train_type_badge: trip.train_type.clone().unwrap_or_default(),
        formatted_departure: departure.map(|departure| format_departure(departure, locale)),
        trip: trip.clone(),
    }
}
