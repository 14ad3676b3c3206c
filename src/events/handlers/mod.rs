// src/events/handlers/mod.rs
//
// Event Handlers - INTERNAL MODULE
//
// Handlers use closure-based subscription via EventBus::subscribe.
// Only registration functions are exported.

pub mod activity_log_handler;

pub use activity_log_handler::register_activity_log_handlers;
