//! Core library for the shipdir deployment helper.
//!
//! The binary wires the interactive prompts to the deployment runner; the
//! runner, validation, command builders and settings store live here so they
//! can be exercised without a terminal.

pub mod cli;
pub mod config;
pub mod deploy;
pub mod system;
pub mod ui;
