use crate::adapters::shared_store::DEFAULT_SUITE_NAME;
use crate::app::AppError;
use crate::domain::date_format::DisplayLocale;
use crate::domain::render::DisplayContext;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub group_dir: String,
    pub suite_name: String,
    pub display_context: DisplayContext,
    pub locale: DisplayLocale,
    pub one_shot: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let locale = match non_blank(&lookup, "WIDGET_LOCALE") {
            Some(raw) => DisplayLocale::from_code(&raw)
                .ok_or_else(|| AppError::config("WIDGET_LOCALE must be one of: fr, en"))?,
            None => DisplayLocale::default(),
        };

        Ok(Self {
            group_dir: non_blank(&lookup, "WIDGET_GROUP_DIR")
                .unwrap_or_else(|| "./data/group".to_string()),
            suite_name: non_blank(&lookup, "WIDGET_SUITE_NAME")
                .unwrap_or_else(|| DEFAULT_SUITE_NAME.to_string()),
            display_context: non_blank(&lookup, "WIDGET_CONTEXT")
                .map(|family| DisplayContext::from_family(&family))
                .unwrap_or_default(),
            locale,
            one_shot: parse_or_default(&lookup, "WIDGET_ONE_SHOT", false)?,
        })
    }
}

fn non_blank<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or_default<T, F>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr + Copy,
    F: Fn(&str) -> Option<String>,
{
    match non_blank(lookup, key) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| AppError::config(format!("{key} has an invalid value"))),
        None => Ok(default),
    }
}
