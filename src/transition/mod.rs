pub mod config;
pub mod progress;
pub mod scroll;
pub mod style;
