//! Filtering and sorting behind the event list screen.
//!
//! An [`EventQuery`] captures the list screen's controls: an optional
//! category filter, the sort key, and the sort direction. Running it over
//! the catalog yields an ordered view of borrowed records. The sort is
//! stable, so events with equal keys keep their relative catalog order --
//! the list does not reshuffle when the user flips between equal entries.

use evently_types::{Category, Event, SortKey, SortOrder};

/// The list screen's filter and sort state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventQuery {
    /// Retain only events with exactly this category, if set.
    pub category: Option<Category>,
    /// Attribute to order by.
    pub sort_key: SortKey,
    /// Direction of the ordering.
    pub sort_order: SortOrder,
}

impl Default for EventQuery {
    /// The screen's initial state: every category, nearest first.
    fn default() -> Self {
        Self {
            category: None,
            sort_key: SortKey::Distance,
            sort_order: SortOrder::Ascending,
        }
    }
}

impl EventQuery {
    /// Produce the ordered, filtered view of `events`.
    ///
    /// An empty result is a valid outcome (the screen renders an
    /// empty-state affordance), not an error.
    pub fn run<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        let mut view: Vec<&Event> = events
            .iter()
            .filter(|event| self.category.is_none_or(|c| event.category == c))
            .collect();

        view.sort_by(|a, b| {
            let ordering = match self.sort_key {
                SortKey::Date => a.date.cmp(&b.date),
                SortKey::Distance => a.distance_km.total_cmp(&b.distance_km),
            };
            match self.sort_order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });

        view
    }
}

/// The home screen's "nearby" strip: the first `limit` catalog entries,
/// ordered by distance.
///
/// Note the order of operations -- take first, sort second -- matches the
/// original screen, which sliced the list before sorting it.
pub fn nearby(events: &[Event], limit: usize) -> Vec<&Event> {
    let mut view: Vec<&Event> = events.iter().take(limit).collect();
    view.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    view
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use evently_types::EventId;

    use super::*;

    /// Three events matching the canonical fixture: A(2024-02-15, 0.8 km),
    /// B(2024-02-16, 3.2 km), C(2024-02-17, 1.5 km).
    fn fixture() -> Vec<Event> {
        vec![
            event("A", (2024, 2, 15), 0.8, Category::Music),
            event("B", (2024, 2, 16), 3.2, Category::Sports),
            event("C", (2024, 2, 17), 1.5, Category::Food),
        ]
    }

    fn event(
        title: &str,
        (year, month, day): (i32, u32, u32),
        distance_km: f64,
        category: Category,
    ) -> Event {
        Event {
            id: EventId::new(),
            title: title.to_owned(),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
            time: NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default(),
            location: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            distance_km,
            category,
            attendees: 0,
            image: None,
            organizer: String::new(),
        }
    }

    fn titles<'a>(view: &[&'a Event]) -> Vec<&'a str> {
        view.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn distance_ascending() {
        let events = fixture();
        let query = EventQuery::default();
        assert_eq!(titles(&query.run(&events)), vec!["A", "C", "B"]);
    }

    #[test]
    fn date_descending() {
        let events = fixture();
        let query = EventQuery {
            category: None,
            sort_key: SortKey::Date,
            sort_order: SortOrder::Descending,
        };
        assert_eq!(titles(&query.run(&events)), vec!["C", "B", "A"]);
    }

    #[test]
    fn category_filter_retains_exact_matches_only() {
        let events = fixture();
        for sort_key in [SortKey::Date, SortKey::Distance] {
            let query = EventQuery {
                category: Some(Category::Music),
                sort_key,
                sort_order: SortOrder::Ascending,
            };
            assert_eq!(titles(&query.run(&events)), vec!["A"]);
        }
    }

    #[test]
    fn filter_matching_nothing_yields_an_empty_view() {
        let events = fixture();
        let query = EventQuery {
            category: Some(Category::Tech),
            ..EventQuery::default()
        };
        assert!(query.run(&events).is_empty());
    }

    #[test]
    fn empty_catalog_is_not_an_error() {
        let query = EventQuery::default();
        assert!(query.run(&[]).is_empty());
    }

    #[test]
    fn equal_distances_keep_catalog_order() {
        let events = vec![
            event("first", (2024, 2, 15), 2.0, Category::Music),
            event("second", (2024, 2, 16), 2.0, Category::Music),
            event("nearer", (2024, 2, 17), 1.0, Category::Music),
        ];
        let query = EventQuery::default();
        assert_eq!(
            titles(&query.run(&events)),
            vec!["nearer", "first", "second"]
        );
    }

    #[test]
    fn equal_dates_keep_catalog_order() {
        let events = vec![
            event("first", (2024, 2, 15), 3.0, Category::Music),
            event("second", (2024, 2, 15), 1.0, Category::Music),
        ];
        let query = EventQuery {
            category: None,
            sort_key: SortKey::Date,
            sort_order: SortOrder::Ascending,
        };
        assert_eq!(titles(&query.run(&events)), vec!["first", "second"]);
    }

    #[test]
    fn nearby_takes_first_then_sorts() {
        // Catalog order: B(3.2), A(0.8), C(1.5), D(0.1). The strip slices
        // the first three and only then orders them, so D never appears.
        let events = vec![
            event("B", (2024, 2, 16), 3.2, Category::Sports),
            event("A", (2024, 2, 15), 0.8, Category::Music),
            event("C", (2024, 2, 17), 1.5, Category::Food),
            event("D", (2024, 2, 18), 0.1, Category::Tech),
        ];
        assert_eq!(titles(&nearby(&events, 3)), vec!["A", "C", "B"]);
    }

    #[test]
    fn nearby_handles_short_catalogs() {
        let events = fixture();
        assert_eq!(nearby(&events, 10).len(), 3);
        assert!(nearby(&[], 3).is_empty());
    }
}
