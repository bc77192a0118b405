//! Event catalog, participation tracking, and query engine for Evently.
//!
//! This crate owns the in-memory application state the SPA screens read:
//! the seeded event catalog, the set of events the current session has
//! joined, and the filter/sort pipeline behind the list screen.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `evently.yaml` into
//!   strongly-typed structs.
//! - [`events`] -- The [`EventStore`]: seeded, newest-first, create-only.
//! - [`participation`] -- The [`ParticipationTracker`] join/leave set.
//! - [`query`] -- The [`EventQuery`] filter/sort engine and the home
//!   screen's [`query::nearby`] helper.
//!
//! [`EventStore`]: events::EventStore
//! [`ParticipationTracker`]: participation::ParticipationTracker
//! [`EventQuery`]: query::EventQuery

pub mod config;
pub mod events;
pub mod participation;
pub mod query;

mod seed;
