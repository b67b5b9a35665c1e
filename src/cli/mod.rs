//! Command-line interface: interactive play and headless training

pub mod commands;
pub mod output;
