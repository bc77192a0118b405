//! The application's service graph.
//!
//! The original client hung its state off module-level React contexts.
//! Here every service is an explicit struct, built once at startup with
//! its dependencies passed through constructors, and borrowed by whatever
//! flow needs it. Tear-down is process exit.

use evently_core::config::AppConfig;
use evently_core::events::EventStore;
use evently_core::participation::ParticipationTracker;
use evently_storage::{LocalStore, SessionStore, StorageError};
use evently_types::NotificationPreferences;

/// Every service the application runs on.
pub struct App {
    /// The loaded configuration.
    pub config: AppConfig,
    /// The event catalog.
    pub catalog: EventStore,
    /// The session's join/leave set.
    pub participation: ParticipationTracker,
    /// The mock-authentication store.
    pub session: SessionStore,
    /// The notification preference state.
    pub preferences: NotificationPreferences,
}

impl App {
    /// Build the service graph from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the local storage root cannot be
    /// opened.
    pub fn bootstrap(config: AppConfig) -> Result<Self, StorageError> {
        let kv = LocalStore::open(&config.storage.root)?;
        let session = SessionStore::open(kv, config.auth.login_delay());

        let viewpoint = config.viewpoint.coordinates();
        let catalog = if config.catalog.seed {
            EventStore::with_seed(viewpoint)
        } else {
            EventStore::new(viewpoint)
        };

        Ok(Self {
            config,
            catalog,
            participation: ParticipationTracker::new(),
            session,
            preferences: NotificationPreferences::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn config_in(dir: &tempfile::TempDir) -> AppConfig {
        let mut config = AppConfig::default();
        config.storage.root = dir.path().to_path_buf();
        config
    }

    #[test]
    fn bootstrap_seeds_the_catalog_by_default() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let app = App::bootstrap(config_in(&dir)).expect("bootstrap failed");
        assert_eq!(app.catalog.len(), 8);
        assert!(!app.session.is_authenticated());
        assert_eq!(app.participation.count(), 0);
        assert_eq!(app.preferences.radius_km, 10);
    }

    #[test]
    fn bootstrap_honors_the_seed_toggle() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let mut config = config_in(&dir);
        config.catalog.seed = false;
        let app = App::bootstrap(config).expect("bootstrap failed");
        assert!(app.catalog.is_empty());
    }
}
