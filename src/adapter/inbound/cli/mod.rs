//! CLI module graph.

pub mod command;
pub mod config;
pub mod format;
pub mod output;
pub mod products;
pub mod report;
pub mod sales;
pub mod serve;
pub mod summary;
