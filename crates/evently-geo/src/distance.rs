//! Great-circle distance via the haversine formula.
//!
//! Pure and total: inputs are unchecked decimal degrees and the math is
//! defined for all real values. Deterministic, no side effects.

use evently_types::Coordinates;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// The fixed reference point distances are measured from.
///
/// Central Paris -- the position the original client assumed for every
/// user. There is no live geolocation; see the catalog's creation flow for
/// how this feeds the stored per-event distance.
pub const DEFAULT_VIEWPOINT: Coordinates = Coordinates::new(48.8566, 2.3522);

/// Great-circle distance between two points, in kilometers.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
