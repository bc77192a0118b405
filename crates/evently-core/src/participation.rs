//! Session-scoped participation tracking.
//!
//! A [`ParticipationTracker`] holds the set of event identifiers the
//! current session has joined. Membership is a pure toggle: joining twice
//! is leaving. The set references catalog entries weakly -- events are
//! never deleted, so there is nothing to cascade -- and it accepts
//! identifiers with no matching record at all.
//!
//! Participation is deliberately not persisted; a restart clears it, as in
//! the original client.

use std::collections::BTreeSet;

use evently_types::{Event, EventId};

/// The outcome of a participation toggle.
///
/// This is the user-facing signal the presentation layer turns into a
/// transient notification: success styling for [`Joined`], informational
/// styling for [`Left`].
///
/// [`Joined`]: ParticipationChange::Joined
/// [`Left`]: ParticipationChange::Left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipationChange {
    /// The session now participates in the event.
    Joined,
    /// The session no longer participates in the event.
    Left,
}

/// The set of events the current session has joined.
#[derive(Debug, Clone, Default)]
pub struct ParticipationTracker {
    joined: BTreeSet<EventId>,
}

impl ParticipationTracker {
    /// Create an empty tracker.
    pub const fn new() -> Self {
        Self {
            joined: BTreeSet::new(),
        }
    }

    /// Flip membership of `id` and report the resulting state.
    pub fn toggle(&mut self, id: EventId) -> ParticipationChange {
        if self.joined.remove(&id) {
            tracing::info!(event_id = %id, "Left event");
            ParticipationChange::Left
        } else {
            self.joined.insert(id);
            tracing::info!(event_id = %id, "Joined event");
            ParticipationChange::Joined
        }
    }

    /// Whether the session currently participates in `id`.
    ///
    /// Pure lookup, no side effects.
    pub fn is_joined(&self, id: EventId) -> bool {
        self.joined.contains(&id)
    }

    /// Number of events the session has joined.
    pub fn count(&self) -> usize {
        self.joined.len()
    }

    /// The attendee count to display for `event`.
    ///
    /// The stored count excludes the current session; the detail screen
    /// shows one more while the session participates.
    pub fn display_attendees(&self, event: &Event) -> u32 {
        if self.is_joined(event.id) {
            event.attendees.saturating_add(1)
        } else {
            event.attendees
        }
    }
}
