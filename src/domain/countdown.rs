use chrono::NaiveDateTime;

pub const IMMINENT_LABEL: &str = "Départ imminent";

/// Whole-unit breakdown of the time left before departure. Each component is
/// taken from the remainder once the larger units have been consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRemaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl TimeRemaining {
    /// Measured on naive wall-clock times: across a DST change the result is
    /// one hour off from the elapsed absolute time.
    pub fn between(now: NaiveDateTime, departure: NaiveDateTime) -> Self {
        let delta = departure.signed_duration_since(now);
        let days = delta.num_days();
        let hours = delta.num_hours() - days * 24;
        let minutes = delta.num_minutes() - delta.num_hours() * 60;

        Self {
            days,
            hours,
            minutes,
        }
    }
}

/// Banded label for the countdown pill; only the largest non-zero unit is shown.
pub fn format_countdown(now: NaiveDateTime, departure: NaiveDateTime) -> String {
    let remaining = TimeRemaining::between(now, departure);

    if remaining.days > 0 {
        plural(remaining.days, "jour", "jours")
    } else if remaining.hours > 0 {
        plural(remaining.hours, "heure", "heures")
    } else if remaining.minutes > 0 {
        plural(remaining.minutes, "min", "mins")
    } else {
        IMMINENT_LABEL.to_string()
    }
}

fn plural(count: i64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {plural}")
    }
}
