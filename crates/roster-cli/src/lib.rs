//! Candidate roster command-line interface.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
pub mod settings;
