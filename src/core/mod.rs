//! Core data models: density tables, configuration and errors

mod config;
mod density;
mod error;

pub use config::*;
pub use density::*;
pub use error::*;
