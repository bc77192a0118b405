//! Sample events seeded into a fresh catalog.
//!
//! The eight records the original client shipped as mock data, kept
//! verbatim (French copy, curated distances). Identifiers are generated at
//! seed time; nothing outside the catalog references them by value.

use chrono::{NaiveDate, NaiveTime};
use evently_types::{Category, Event, EventId};

/// Build one seed record.
///
/// Dates and times are hard-coded and valid; the `unwrap_or_default`
/// fallbacks are never taken.
fn event(
    title: &str,
    description: &str,
    (year, month, day): (i32, u32, u32),
    (hour, minute): (u32, u32),
    location: &str,
    latitude: f64,
    longitude: f64,
    distance_km: f64,
    category: Category,
    attendees: u32,
    organizer: &str,
) -> Event {
    Event {
        id: EventId::new(),
        title: title.to_owned(),
        description: description.to_owned(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default(),
        location: location.to_owned(),
        latitude,
        longitude,
        distance_km,
        category,
        attendees,
        image: None,
        organizer: organizer.to_owned(),
    }
}

/// The sample catalog, in the original's display order.
pub(crate) fn seed_events() -> Vec<Event> {
    vec![
        event(
            "Festival de Musique Électronique",
            "Un festival de musique électronique avec les meilleurs DJ du moment. \
             Ambiance energétique et divertissante.",
            (2024, 2, 15),
            (20, 0),
            "Parc Central, Paris",
            48.8566,
            2.3522,
            0.8,
            Category::Music,
            340,
            "EventsMax",
        ),
        event(
            "Marathon de la Ville",
            "Participez au grand marathon annuel de la ville. 42 km à parcourir \
             avec amis et famille.",
            (2024, 2, 16),
            (8, 0),
            "Stade Municipal, Lyon",
            45.764,
            4.8357,
            3.2,
            Category::Sports,
            850,
            "Sports City",
        ),
        event(
            "Dégustation de Vins Français",
            "Découvrez les meilleurs crus français dans une ambiance conviviale. \
             Animation et conseils d'experts.",
            (2024, 2, 17),
            (19, 0),
            "Cave du Coin, Bordeaux",
            44.8378,
            -0.5792,
            1.5,
            Category::Food,
            120,
            "Wine Lovers",
        ),
        event(
            "Exposition d'Art Contemporain",
            "Galerie contemporaine présentant les œuvres des artistes émergents. \
             Vernissage avec cocktail.",
            (2024, 2, 18),
            (18, 0),
            "Musée d'Art Moderne, Marseille",
            43.2965,
            5.3698,
            2.1,
            Category::Art,
            280,
            "Modern Arts",
        ),
        event(
            "Conférence sur l'IA et le Futur",
            "Les experts débattent de l'impact de l'IA sur la société. Questions \
             et réponses en direct.",
            (2024, 2, 20),
            (14, 0),
            "Centre des Congrès, Nice",
            43.7102,
            7.262,
            4.7,
            Category::Tech,
            620,
            "Tech Innovators",
        ),
        event(
            "Pique-nique Communautaire",
            "Venez vous détendre en famille ou entre amis au parc. Partage de \
             repas et jeux collectifs.",
            (2024, 2, 21),
            (11, 0),
            "Parc de la Tête d'Or, Lyon",
            45.7595,
            4.8367,
            2.8,
            Category::Social,
            450,
            "Community Events",
        ),
        event(
            "Concert Symphonique Classique",
            "Orchestre philharmonique jouant les plus belles symphonies \
             classiques. Un événement incontournable.",
            (2024, 2, 22),
            (20, 30),
            "Opéra Garnier, Paris",
            48.8721,
            2.3909,
            1.2,
            Category::Music,
            1200,
            "Classical Music Society",
        ),
        event(
            "Tournoi de Tennis",
            "Compétition de tennis avec des joueurs amateurs et \
             semi-professionnels. Inscriptions ouvertes.",
            (2024, 2, 23),
            (9, 0),
            "Club de Tennis Roland Garros, Paris",
            48.8453,
            2.2465,
            3.5,
            Category::Sports,
            180,
            "Tennis Club",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_seed_events_in_display_order() {
        let events = seed_events();
        assert_eq!(events.len(), 8);
        assert_eq!(
            events.first().map(|e| e.title.as_str()),
            Some("Festival de Musique Électronique")
        );
        assert_eq!(
            events.last().map(|e| e.title.as_str()),
            Some("Tournoi de Tennis")
        );
    }

    #[test]
    fn seed_dates_are_valid() {
        // A typo in the hard-coded data would fall back to the epoch date.
        let epoch = NaiveDate::default();
        assert!(seed_events().iter().all(|e| e.date > epoch));
    }

    #[test]
    fn seed_ids_are_unique() {
        let events = seed_events();
        let mut ids: Vec<EventId> = events.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), events.len());
    }
}
