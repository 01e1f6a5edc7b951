use std::io::Write;
use std::time::Duration;

use crate::adapters::shared_store::{GroupFileStore, SharedStore};
use crate::app::config::AppConfig;
use crate::app::error::AppError;
use crate::app::timeline::{SystemClock, TimelineProvider};
use crate::domain::render::DisplayContext;
use crate::domain::timeline::{Clock, TimelineSnapshot};

/// Serializes one snapshot as a single JSON line.
pub fn emit_snapshot<W: Write>(
    writer: &mut W,
    snapshot: &TimelineSnapshot,
) -> Result<(), AppError> {
    serde_json::to_writer(&mut *writer, snapshot).map_err(AppError::output)?;
    writer.write_all(b"\n").map_err(AppError::output)?;
    writer.flush().map_err(AppError::output)
}

/// Time left until the requested refresh, zero when it is already due.
pub fn wait_until_refresh(snapshot: &TimelineSnapshot, now: chrono::NaiveDateTime) -> Duration {
    snapshot
        .next_refresh_at
        .signed_duration_since(now)
        .to_std()
        .unwrap_or(Duration::ZERO)
}

pub fn run_once<S, C, W>(
    provider: &TimelineProvider<S, C>,
    context: DisplayContext,
    writer: &mut W,
) -> Result<TimelineSnapshot, AppError>
where
    S: SharedStore,
    C: Clock,
    W: Write,
{
    let snapshot = provider.refresh(context);
    emit_snapshot(writer, &snapshot)?;
    Ok(snapshot)
}

pub fn run(config: AppConfig) -> Result<(), AppError> {
    let store = GroupFileStore::new(&config.group_dir, &config.suite_name);
    let provider = TimelineProvider::new(store, SystemClock, config.locale);
    let stdout = std::io::stdout();

    loop {
        let snapshot = run_once(&provider, config.display_context, &mut stdout.lock())?;

        tracing::info!(
            captured_at = %snapshot.captured_at,
            next_refresh_at = %snapshot.next_refresh_at,
            has_trip = snapshot.render_model.display_trip().is_some(),
            "snapshot published"
        );

        if config.one_shot {
            return Ok(());
        }

        std::thread::sleep(wait_until_refresh(&snapshot, SystemClock.now()));
    }
}
