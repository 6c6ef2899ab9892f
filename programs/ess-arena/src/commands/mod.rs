//! Subcommand handlers

pub mod ess;
pub mod list;
pub mod round_robin;
