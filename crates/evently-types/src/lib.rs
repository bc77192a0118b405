//! Shared type definitions for the Evently event-discovery core.
//!
//! This crate is the single source of truth for all types used across the
//! Evently workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the SPA client.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for entity identifiers
//! - [`enums`] -- Enumeration types (categories, roles, sort controls)
//! - [`structs`] -- Core entity structs (events, users, preferences)

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{Category, Role, SortKey, SortOrder};
pub use ids::{EventId, UserId};
pub use structs::{
    CategoryInfo, Coordinates, Event, EventDraft, NotificationPreferences, User,
};

#[cfg(test)]
mod tests {
    //! Integration tests for type exports and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers generation.
        // The actual files are written to the `bindings/` directory
        // relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::EventId::export_all();
        let _ = crate::ids::UserId::export_all();

        // Enums
        let _ = crate::enums::Category::export_all();
        let _ = crate::enums::Role::export_all();
        let _ = crate::enums::SortKey::export_all();
        let _ = crate::enums::SortOrder::export_all();

        // Structs
        let _ = crate::structs::Coordinates::export_all();
        let _ = crate::structs::Event::export_all();
        let _ = crate::structs::EventDraft::export_all();
        let _ = crate::structs::CategoryInfo::export_all();
        let _ = crate::structs::User::export_all();
        let _ = crate::structs::NotificationPreferences::export_all();
    }
}
