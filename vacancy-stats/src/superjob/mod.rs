pub mod api;
pub mod types;

pub use api::{SuperJob, MOSCOW_TOWN};
