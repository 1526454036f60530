//! CLI subcommands.

pub mod batch;
pub mod classify;
pub mod config;
pub mod input;
pub mod output;
pub mod process;
