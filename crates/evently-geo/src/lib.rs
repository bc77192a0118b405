//! Geography for the Evently event-discovery core.
//!
//! One concern lives here: turning two latitude/longitude pairs into a
//! great-circle distance. The event catalog uses it to derive the stored
//! `distance_km` of newly created events from the configured viewpoint.

pub mod distance;

pub use distance::{DEFAULT_VIEWPOINT, EARTH_RADIUS_KM, haversine_km};
