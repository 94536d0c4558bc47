pub mod config;
pub mod finder;

pub use config::Config;
pub use finder::{FindReport, FindRequest, Finder};
