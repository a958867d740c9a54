// src/application/commands/mod.rs
//
// Command Handlers

pub mod export_commands;
pub mod resolution_commands;
pub mod term_commands;

pub use export_commands::*;
pub use resolution_commands::*;
pub use term_commands::*;
