//! CLI commands

pub mod new;
pub mod utils;
