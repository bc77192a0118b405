//! Durable local storage and the session store for Evently.
//!
//! The original client kept the logged-in user in the browser's
//! `localStorage`. The Rust analog is [`LocalStore`], a small file-backed
//! JSON key-value store, and [`SessionStore`], the mock-authentication
//! state machine built on top of it: anonymous or authenticated, login and
//! logout as the only transitions, rehydration at startup.
//!
//! # Modules
//!
//! - [`kv`] -- Typed JSON get/set/delete over per-key files.
//! - [`session`] -- The session state machine with its artificial login
//!   delay and overlap guard.
//!
//! [`LocalStore`]: kv::LocalStore
//! [`SessionStore`]: session::SessionStore

pub mod error;
pub mod kv;
pub mod session;

pub use error::StorageError;
pub use kv::LocalStore;
pub use session::{SESSION_KEY, SessionError, SessionStore};
