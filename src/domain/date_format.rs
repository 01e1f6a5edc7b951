use chrono::{Datelike, NaiveDateTime, Timelike};

const FRENCH_WEEKDAYS: [&str; 7] = ["lun.", "mar.", "mer.", "jeu.", "ven.", "sam.", "dim."];
const FRENCH_MONTHS: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

const ENGLISH_WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const ENGLISH_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayLocale {
    #[default]
    French,
    English,
}

impl DisplayLocale {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "fr" | "fr_fr" | "fr-fr" => Some(Self::French),
            "en" | "en_us" | "en-us" | "en_gb" | "en-gb" => Some(Self::English),
            _ => None,
        }
    }

    fn weekdays(self) -> &'static [&'static str; 7] {
        match self {
            Self::French => &FRENCH_WEEKDAYS,
            Self::English => &ENGLISH_WEEKDAYS,
        }
    }

    fn months(self) -> &'static [&'static str; 12] {
        match self {
            Self::French => &FRENCH_MONTHS,
            Self::English => &ENGLISH_MONTHS,
        }
    }
}

/// Renders `EEE dd MMM - HH:mm` from the locale tables.
pub fn format_departure(departure: NaiveDateTime, locale: DisplayLocale) -> String {
    let weekday = locale.weekdays()[departure.weekday().num_days_from_monday() as usize];
    let month = locale.months()[departure.month0() as usize];

    format!(
        "{weekday} {:02} {month} - {:02}:{:02}",
        departure.day(),
        departure.hour(),
        departure.minute()
    )
}
