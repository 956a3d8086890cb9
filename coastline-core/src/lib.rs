pub mod app_config;
pub mod schedule;
pub mod search;

pub use app_config::SiteConfig;
pub use schedule::{ManualTimer, RepeatingTask, TaskState, Timer};
pub use search::{date_diff_days, parse_guests, TripSearch};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type CoreResult<T> = Result<T, CoreError>;
