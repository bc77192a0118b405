//! Core entity structs for the Evently event-discovery core.
//!
//! Covers the event record and its creation draft, the session user, the
//! geographic coordinate pair, the category display projection, and the
//! notification preference state. Everything here flows to the SPA client
//! through `ts-rs` bindings.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Category, Role};
use crate::ids::{EventId, UserId};

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

/// A latitude/longitude pair in decimal degrees.
///
/// Values are unchecked: the distance math is defined for all real inputs,
/// and the client never produces out-of-range degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Coordinates {
    /// Degrees north of the equator (negative = south).
    pub latitude: f64,
    /// Degrees east of the prime meridian (negative = west).
    pub longitude: f64,
}

impl Coordinates {
    /// Build a coordinate pair.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// A schedulable happening with location, time, and category metadata.
///
/// Events are immutable once stored: there is no update or delete flow.
/// `distance_km` is a stored attribute relative to the configured viewpoint;
/// the catalog derives it at creation time and seed data carries curated
/// values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Event {
    /// Unique identifier, generated at insertion time.
    pub id: EventId,
    /// Headline shown in lists and on the detail screen.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Calendar date of the event.
    pub date: NaiveDate,
    /// Local clock time, no timezone.
    pub time: NaiveTime,
    /// Free-text venue label ("Parc Central, Paris").
    pub location: String,
    /// Venue latitude in decimal degrees.
    pub latitude: f64,
    /// Venue longitude in decimal degrees.
    pub longitude: f64,
    /// Kilometers from the viewpoint, stored at creation.
    pub distance_km: f64,
    /// Classification tag, validated at the creation boundary.
    pub category: Category,
    /// Base attendee count, excluding the current session's own
    /// participation.
    pub attendees: u32,
    /// Optional image reference.
    pub image: Option<String>,
    /// Organizer display name.
    pub organizer: String,
}

/// The caller-supplied fields of a new event.
///
/// Everything the creation form collects. The category arrives as a raw
/// slug and is resolved against the registry when the draft is submitted;
/// coordinates default to the viewpoint when the form provides none, which
/// is all the original client ever did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EventDraft {
    /// Headline for the new event.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Local clock time.
    pub time: NaiveTime,
    /// Free-text venue label.
    pub location: String,
    /// Raw category slug from the form; rejected if unknown.
    pub category: String,
    /// Venue coordinates; `None` falls back to the viewpoint.
    pub coordinates: Option<Coordinates>,
    /// Optional image reference.
    pub image: Option<String>,
}

// ---------------------------------------------------------------------------
// CategoryInfo
// ---------------------------------------------------------------------------

/// Display metadata for one category, projected for the client.
///
/// The SPA renders its filter chips and badges from this shape instead of a
/// hand-maintained parallel array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CategoryInfo {
    /// Lowercase identifier.
    pub slug: String,
    /// Human-readable name.
    pub name: String,
    /// CSS gradient descriptor for the badge background.
    pub color: String,
    /// Icon glyph.
    pub icon: String,
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// The currently authenticated identity.
///
/// This is exactly the JSON object mirrored to durable storage under the
/// `"user"` key: `{id, name, email, role}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct User {
    /// Placeholder identifier (see [`UserId::placeholder`]).
    pub id: UserId,
    /// Display name, derived from the email local-part at login.
    pub name: String,
    /// Login email, kept verbatim.
    pub email: String,
    /// Role chosen at registration.
    pub role: Role,
}

// ---------------------------------------------------------------------------
// NotificationPreferences
// ---------------------------------------------------------------------------

/// Per-session notification preference state.
///
/// Backs the preferences screen. Held in memory only; the original client
/// never persisted it either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NotificationPreferences {
    /// Master switch for all notifications.
    pub enabled: bool,
    /// Alert when an event appears within the radius.
    pub nearby_events: bool,
    /// Remind shortly before a joined event starts.
    pub upcoming_events: bool,
    /// Notify on changes to joined events.
    pub event_updates: bool,
    /// Alert radius in kilometers for nearby-event notifications.
    pub radius_km: u32,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            enabled: true,
            nearby_events: true,
            upcoming_events: true,
            event_updates: true,
            radius_km: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> Event {
        Event {
            id: EventId::new(),
            title: "Festival de Musique Électronique".to_owned(),
            description: "Un festival avec les meilleurs DJ du moment.".to_owned(),
            date: NaiveDate::from_ymd_opt(2024, 2, 15).unwrap_or_default(),
            time: NaiveTime::from_hms_opt(20, 0, 0).unwrap_or_default(),
            location: "Parc Central, Paris".to_owned(),
            latitude: 48.8566,
            longitude: 2.3522,
            distance_km: 0.8,
            category: Category::Music,
            attendees: 340,
            image: None,
            organizer: "EventsMax".to_owned(),
        }
    }

    #[test]
    fn event_serde_roundtrip() {
        let event = sample_event();
        let json = serde_json::to_string(&event).ok();
        assert!(json.is_some());
        let back: Option<Event> = json.as_deref().and_then(|j| serde_json::from_str(j).ok());
        assert_eq!(back.as_ref(), Some(&event));
    }

    #[test]
    fn event_date_serializes_as_calendar_date() {
        let event = sample_event();
        let json = serde_json::to_string(&event).unwrap_or_default();
        assert!(json.contains("\"2024-02-15\""));
        assert!(json.contains("\"music\""));
    }

    #[test]
    fn user_matches_the_durable_json_shape() {
        let user = User {
            id: UserId::placeholder(),
            name: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            role: Role::Organizer,
        };
        let json = serde_json::to_string(&user).unwrap_or_default();
        assert!(json.contains("\"name\":\"alice\""));
        assert!(json.contains("\"email\":\"alice@example.com\""));
        assert!(json.contains("\"role\":\"organizer\""));
    }

    #[test]
    fn notification_defaults_match_the_original_screen() {
        let prefs = NotificationPreferences::default();
        assert!(prefs.enabled);
        assert!(prefs.nearby_events);
        assert!(prefs.upcoming_events);
        assert!(prefs.event_updates);
        assert_eq!(prefs.radius_km, 10);
    }
}
