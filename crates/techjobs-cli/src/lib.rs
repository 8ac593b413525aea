//! CLI library components for the job listing query tool.

pub mod commands;
pub mod logging;
pub mod output;
