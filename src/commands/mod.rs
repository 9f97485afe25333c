//! CLI commands

pub mod category;
pub mod list;
