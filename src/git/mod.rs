pub mod log;
pub mod runner;

pub use log::{parse_count, parse_file_listing, parse_full_history};
pub use runner::GitRunner;
