//! The event catalog: an in-memory, create-only store.
//!
//! The catalog owns every [`Event`] record for the lifetime of the process.
//! Records are never updated or deleted; creation prepends, so iteration
//! order is newest-created-first with the seed catalog at the tail.
//!
//! Creation is the one validated boundary in the system: the raw category
//! slug from the form must resolve through the registry, and only
//! organizers get through at all. Both rejections are typed errors the
//! caller recovers from (redirect plus message), never a crash.

use evently_geo::haversine_km;
use evently_types::{Category, Coordinates, Event, EventDraft, EventId, Role, User};

use crate::seed;

/// Why an event draft was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateEventError {
    /// The acting user does not hold the organizer role.
    #[error("only organizers can create events")]
    NotOrganizer {
        /// The role the acting user actually holds.
        role: Role,
    },

    /// The draft's category slug does not resolve through the registry.
    #[error("unknown category slug: {slug:?}")]
    UnknownCategory {
        /// The slug as submitted.
        slug: String,
    },
}

/// In-memory collection of event records.
///
/// Holds the configured viewpoint so creation can derive the stored
/// distance of new records; see [`EventStore::create`].
#[derive(Debug, Clone)]
pub struct EventStore {
    viewpoint: Coordinates,
    events: Vec<Event>,
}

impl EventStore {
    /// Create an empty catalog measuring distances from `viewpoint`.
    pub const fn new(viewpoint: Coordinates) -> Self {
        Self {
            viewpoint,
            events: Vec::new(),
        }
    }

    /// Create a catalog pre-populated with the sample events.
    pub fn with_seed(viewpoint: Coordinates) -> Self {
        Self {
            viewpoint,
            events: seed::seed_events(),
        }
    }

    /// All events, newest-created-first.
    pub fn list_all(&self) -> &[Event] {
        &self.events
    }

    /// Look up one event by id.
    ///
    /// A miss is the tolerated "entity not found" outcome -- the caller
    /// renders a not-found affordance.
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the catalog holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Validate a draft and store it as a new event.
    ///
    /// Generates a fresh identifier, resolves the category slug, derives
    /// the stored distance from the viewpoint (the original client wrote a
    /// literal `0` here), prepends the record, and returns a copy of it.
    /// Attendees start at zero; the organizer display name comes from the
    /// acting user.
    ///
    /// # Errors
    ///
    /// Returns [`CreateEventError::NotOrganizer`] when the acting user is
    /// not an organizer, or [`CreateEventError::UnknownCategory`] when the
    /// slug does not resolve.
    pub fn create(
        &mut self,
        draft: EventDraft,
        organizer: &User,
    ) -> Result<Event, CreateEventError> {
        if organizer.role != Role::Organizer {
            return Err(CreateEventError::NotOrganizer {
                role: organizer.role,
            });
        }

        let category = Category::from_slug(&draft.category).ok_or_else(|| {
            CreateEventError::UnknownCategory {
                slug: draft.category.clone(),
            }
        })?;

        let venue = draft.coordinates.unwrap_or(self.viewpoint);
        let event = Event {
            id: EventId::new(),
            title: draft.title,
            description: draft.description,
            date: draft.date,
            time: draft.time,
            location: draft.location,
            latitude: venue.latitude,
            longitude: venue.longitude,
            distance_km: haversine_km(self.viewpoint, venue),
            category,
            attendees: 0,
            image: draft.image,
            organizer: organizer.name.clone(),
        };

        tracing::info!(
            event_id = %event.id,
            title = event.title,
            category = category.slug(),
            "Event published"
        );

        self.events.insert(0, event.clone());
        Ok(event)
    }
}
