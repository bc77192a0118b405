//! Enumeration types for the Evently event-discovery core.
//!
//! The category set is closed: the original client accepted arbitrary
//! category strings on event creation and silently rendered nothing for
//! unknown ones. Here [`Category`] is a tagged enumeration and the creation
//! boundary rejects slugs that do not resolve through [`Category::from_slug`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Classification tag for an event, with associated display styling.
///
/// Serialized as the lowercase slug (`"music"`, `"sports"`, ...) so stored
/// events and the SPA's filter chips share one vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Category {
    /// Concerts, festivals, live performances.
    Music,
    /// Competitions, tournaments, group exercise.
    Sports,
    /// Tastings, markets, shared meals.
    Food,
    /// Exhibitions, galleries, cultural showings.
    Art,
    /// Conferences, meetups, demos.
    Tech,
    /// Community gatherings without a narrower theme.
    Social,
}

impl Category {
    /// Every category, in the display order of the original client.
    pub const ALL: [Self; 6] = [
        Self::Music,
        Self::Sports,
        Self::Food,
        Self::Art,
        Self::Tech,
        Self::Social,
    ];

    /// The lowercase identifier used in serialized form and filter chips.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Music => "music",
            Self::Sports => "sports",
            Self::Food => "food",
            Self::Art => "art",
            Self::Tech => "tech",
            Self::Social => "social",
        }
    }

    /// Human-readable display name (the client ships in French).
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Music => "Musique",
            Self::Sports => "Sports",
            Self::Food => "Gastronomie",
            Self::Art => "Art & Culture",
            Self::Tech => "Technologie",
            Self::Social => "Social",
        }
    }

    /// CSS gradient descriptor for the category badge.
    pub const fn color_gradient(self) -> &'static str {
        match self {
            Self::Music => "from-pink-500 to-rose-500",
            Self::Sports => "from-orange-500 to-red-500",
            Self::Food => "from-yellow-500 to-orange-500",
            Self::Art => "from-purple-500 to-indigo-500",
            Self::Tech => "from-blue-500 to-cyan-500",
            Self::Social => "from-green-500 to-emerald-500",
        }
    }

    /// Icon glyph rendered inside the category badge.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Music => "\u{1f3b5}",
            Self::Sports => "\u{26bd}",
            Self::Food => "\u{1f37d}\u{fe0f}",
            Self::Art => "\u{1f3a8}",
            Self::Tech => "\u{1f4bb}",
            Self::Social => "\u{1f465}",
        }
    }

    /// Registry lookup: resolve a slug to its category.
    ///
    /// A miss is a tolerated outcome, not an error -- callers decide whether
    /// to fall back (rendering) or reject (creation boundary).
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.slug() == slug)
    }

    /// Bundle the display metadata into one projection for the client.
    pub fn info(self) -> crate::structs::CategoryInfo {
        crate::structs::CategoryInfo {
            slug: self.slug().to_owned(),
            name: self.display_name().to_owned(),
            color: self.color_gradient().to_owned(),
            icon: self.icon().to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// The role chosen at registration.
///
/// Logging in through the login tab always yields [`Role::Participant`];
/// only registration offers the choice. Organizers are the only users
/// allowed through the event-creation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Role {
    /// Can browse and join events.
    Participant,
    /// Can additionally create events.
    Organizer,
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// The attribute the event list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum SortKey {
    /// Chronological order of the event's calendar date.
    Date,
    /// Numeric order of the stored distance in kilometers.
    Distance,
}

/// Direction of the sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum SortOrder {
    /// Smallest key first.
    #[serde(rename = "asc")]
    Ascending,
    /// Largest key first.
    #[serde(rename = "desc")]
    Descending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
        }
    }

    #[test]
    fn unknown_slug_is_a_tolerated_miss() {
        assert_eq!(Category::from_slug("knitting"), None);
        assert_eq!(Category::from_slug(""), None);
        // Lookup is exact: no case folding.
        assert_eq!(Category::from_slug("Music"), None);
    }

    #[test]
    fn serde_uses_the_slug() {
        let json = serde_json::to_string(&Category::Food).ok();
        assert_eq!(json.as_deref(), Some("\"food\""));
        let back: Result<Category, _> = serde_json::from_str("\"tech\"");
        assert_eq!(back.ok(), Some(Category::Tech));
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Organizer).ok();
        assert_eq!(json.as_deref(), Some("\"organizer\""));
    }

    #[test]
    fn sort_order_uses_client_tokens() {
        let asc = serde_json::to_string(&SortOrder::Ascending).ok();
        let desc = serde_json::to_string(&SortOrder::Descending).ok();
        assert_eq!(asc.as_deref(), Some("\"asc\""));
        assert_eq!(desc.as_deref(), Some("\"desc\""));
    }

    #[test]
    fn info_projection_carries_display_metadata() {
        let info = Category::Music.info();
        assert_eq!(info.slug, "music");
        assert_eq!(info.name, "Musique");
        assert!(info.color.starts_with("from-pink"));
    }
}
