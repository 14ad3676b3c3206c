// src/events/handlers/activity_log_handler.rs
//
// Writes a human-readable activity line for every catalog and report fact.
// Purely observational: never touches repositories or services.

use log::info;

use crate::events::{
    EntryCreated, EntryDeleted, EntryUpdated, EventBus, ReportExported, ReportGenerated,
};

/// Registers the activity log handlers with the event bus.
pub fn register_activity_log_handlers(bus: &EventBus) {
    bus.subscribe::<EntryCreated, _>(|event| {
        info!("Added \"{}\" ({}) as {}", event.title, event.kind, event.entry_id);
    });

    bus.subscribe::<EntryUpdated, _>(|event| {
        info!("Updated entry {}", event.entry_id);
    });

    bus.subscribe::<EntryDeleted, _>(|event| {
        info!("Removed entry {}", event.entry_id);
    });

    bus.subscribe::<ReportGenerated, _>(|event| {
        info!(
            "Computed {} report over {} entries",
            event.year, event.total_count
        );
    });

    bus.subscribe::<ReportExported, _>(|event| {
        info!(
            "Exported {} report as {} to {}",
            event.year, event.format, event.path
        );
    });
}
