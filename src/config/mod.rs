mod config;
pub use config::{Config, UserEntry};
