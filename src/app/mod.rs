mod config;
mod error;
mod logging;
pub mod preview;
pub mod runtime;
pub mod timeline;

pub use config::AppConfig;
pub use error::AppError;

use crate::domain::widget::PROCHAIN_TRAIN;

pub fn run_host() -> Result<(), AppError> {
    let _ = dotenvy::dotenv();
    logging::init()?;

    let config = AppConfig::from_env()?;

    tracing::info!(
        widget = PROCHAIN_TRAIN.kind,
        group_dir = %config.group_dir,
        suite_name = %config.suite_name,
        display_context = ?config.display_context,
        locale = ?config.locale,
        one_shot = config.one_shot,
        "widget host initialized"
    );

    runtime::run(config)
}

pub fn run_preview() -> Result<(), AppError> {
    let _ = dotenvy::dotenv();
    logging::init()?;

    let config = AppConfig::from_env()?;

    tracing::info!(
        widget = PROCHAIN_TRAIN.kind,
        display_name = PROCHAIN_TRAIN.display_name,
        description = PROCHAIN_TRAIN.description,
        "rendering preview timeline"
    );

    let stdout = std::io::stdout();
    preview::write_preview(&timeline::SystemClock, config.locale, &mut stdout.lock())
}
