//! The session state machine: anonymous or authenticated.
//!
//! Authentication is mock: logging in constructs a user from the email
//! (display name = local-part before the first `@`) and the chosen role,
//! then mirrors the record to durable storage so it survives a reload.
//! There is no password check and no server round-trip -- only an
//! artificial delay kept for parity with the original client's perceived
//! responsiveness.
//!
//! The delay makes login the one real suspension point in the system, so
//! the store guards it: a second submission while one is outstanding is
//! the typed [`SessionError::LoginInFlight`] instead of a race. The guard
//! resets on drop, so an abandoned login cannot wedge the store.
//!
//! Rehydration tolerates malformed persisted payloads by starting
//! anonymous. The original client let `JSON.parse` throw here; that was a
//! defect, not a behavior to preserve.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use evently_types::{Role, User, UserId};

use crate::error::StorageError;
use crate::kv::LocalStore;

/// The durable storage key holding the active session.
pub const SESSION_KEY: &str = "user";

/// Errors that can occur in the session store.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A login was submitted while another one is still completing.
    #[error("a login is already in flight")]
    LoginInFlight,

    /// Mirroring the session to durable storage failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Holds the current user identity and role.
///
/// States are `anonymous` and `authenticated(user)`; `login` and `logout`
/// are the only transitions. The initial state is whatever rehydration
/// finds in durable storage. Methods take `&self` so the composition root
/// can share one instance across flows.
pub struct SessionStore {
    kv: LocalStore,
    current: RwLock<Option<User>>,
    login_in_flight: AtomicBool,
    login_delay: Duration,
}

impl SessionStore {
    /// Open the session store, rehydrating from durable storage.
    ///
    /// An absent `user` key starts the session anonymous. A present but
    /// malformed payload also starts anonymous, with a warning.
    pub fn open(kv: LocalStore, login_delay: Duration) -> Self {
        let current = match kv.get_json::<User>(SESSION_KEY) {
            Ok(user) => {
                tracing::info!(name = user.name, "Session rehydrated");
                Some(user)
            }
            Err(StorageError::KeyNotFound(_)) => None,
            Err(error) => {
                tracing::warn!(%error, "Ignoring unreadable persisted session");
                None
            }
        };

        Self {
            kv,
            current: RwLock::new(current),
            login_in_flight: AtomicBool::new(false),
            login_delay,
        }
    }

    /// Authenticate as `email` with the given role.
    ///
    /// Completes after the configured artificial delay. The stored record
    /// carries the fixed placeholder id, the name derived from the email
    /// local-part, the email verbatim, and the role. On success the record
    /// is mirrored to durable storage under [`SESSION_KEY`] and returned.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::LoginInFlight`] if another login has not
    /// completed yet, or [`SessionError::Storage`] if the durable mirror
    /// cannot be written (the session is not changed in that case).
    pub async fn login(&self, email: &str, role: Role) -> Result<User, SessionError> {
        if self.login_in_flight.swap(true, Ordering::SeqCst) {
            return Err(SessionError::LoginInFlight);
        }
        let _guard = InFlightGuard(&self.login_in_flight);

        tokio::time::sleep(self.login_delay).await;

        let user = User {
            id: UserId::placeholder(),
            name: local_part(email).to_owned(),
            email: email.to_owned(),
            role,
        };
        self.kv.set_json(SESSION_KEY, &user)?;

        *write_current(&self.current) = Some(user.clone());
        tracing::info!(name = user.name, role = ?user.role, "Logged in");
        Ok(user)
    }

    /// End the active session.
    ///
    /// Clears the in-memory state and removes the durable entry. Logging
    /// out of an anonymous session is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the durable entry cannot be
    /// removed.
    pub fn logout(&self) -> Result<(), SessionError> {
        *write_current(&self.current) = None;
        self.kv.delete(SESSION_KEY)?;
        tracing::info!("Logged out");
        Ok(())
    }

    /// The active user, if any.
    pub fn current_user(&self) -> Option<User> {
        read_current(&self.current).clone()
    }

    /// Whether a session is active.
    pub fn is_authenticated(&self) -> bool {
        read_current(&self.current).is_some()
    }
}

impl core::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .field("login_delay", &self.login_delay)
            .finish_non_exhaustive()
    }
}

/// Resets the in-flight flag when the login future completes or is dropped.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// The display name is the email's local-part before the first `@`.
fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

fn read_current(
    lock: &RwLock<Option<User>>,
) -> std::sync::RwLockReadGuard<'_, Option<User>> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_current(
    lock: &RwLock<Option<User>>,
) -> std::sync::RwLockWriteGuard<'_, Option<User>> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_the_local_part() {
        assert_eq!(local_part("alice@example.com"), "alice");
        assert_eq!(local_part("jean.dupont@mail.fr"), "jean.dupont");
        // Only the first @ splits.
        assert_eq!(local_part("a@b@c"), "a");
        // Degenerate inputs fall through unchanged.
        assert_eq!(local_part("no-at-sign"), "no-at-sign");
        assert_eq!(local_part(""), "");
    }
}
