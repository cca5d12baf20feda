pub mod headhunter;
pub mod salary;
pub mod stats;
pub mod superjob;
pub mod table;

use thiserror::Error;

pub use stats::{aggregate, collect_statistics, LanguageStatistic, SearchConfig, VacancySource};
pub use table::render_statistics;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request not successful: '{0}'")]
    RequestNotOk(String),
    #[error("Secret key is not a valid header value: '{0}'")]
    InvalidSecretKey(#[from] reqwest::header::InvalidHeaderValue),
}
