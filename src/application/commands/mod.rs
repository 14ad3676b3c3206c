// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the CLI and services
// - Commands accept DTOs, return DTOs
// - Commands NEVER contain business logic

pub mod database_commands;
pub mod entry_commands;
pub mod report_commands;

pub use database_commands::*;
pub use entry_commands::*;
pub use report_commands::*;
