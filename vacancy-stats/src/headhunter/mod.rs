pub mod api;
pub mod types;

pub use api::{HeadHunter, MOSCOW_AREA};
