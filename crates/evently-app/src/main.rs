//! Composition-root binary for the Evently event-discovery core.
//!
//! Wires the service graph together and drives one full user journey
//! against it: restore or open a session, browse the catalog through the
//! query engine, join and leave an event, run into the recovered
//! unauthorized-creation error, publish as an organizer, and log out.
//! Each step logs what a screen of the SPA would render.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `evently.yaml` (defaults if absent)
//! 3. Build the service graph (storage, session, catalog, tracker)
//! 4. Run the walkthrough
//! 5. Log out and exit

mod state;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use evently_core::config::AppConfig;
use evently_core::events::CreateEventError;
use evently_core::query::{self, EventQuery};
use evently_types::{Category, EventDraft, EventId, Role, SortKey, SortOrder};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::state::App;

/// Configuration file looked up in the working directory.
const CONFIG_PATH: &str = "evently.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, storage, or any walkthrough step
/// fails in a way the flows do not recover from.
#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("evently starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        storage_root = %config.storage.root.display(),
        login_delay_ms = config.auth.login_delay_ms,
        seed = config.catalog.seed,
        "Configuration loaded"
    );

    // 3. Build the service graph.
    let mut app = App::bootstrap(config).context("failed to build the service graph")?;
    info!(events = app.catalog.len(), "Service graph ready");

    // 4. Restore the persisted session or open a fresh one.
    if let Some(user) = app.session.current_user() {
        info!(name = user.name, "Session restored from storage");
    } else {
        let user = app
            .session
            .login("camille@example.com", Role::Participant)
            .await
            .context("login failed")?;
        info!(name = user.name, "Fresh session opened");
    }

    browse(&app);
    join_and_leave(&mut app);
    publish(&mut app).await?;

    info!(
        enabled = app.preferences.enabled,
        radius_km = app.preferences.radius_km,
        "Notification preferences"
    );

    // 5. Log out and exit.
    app.session.logout().context("logout failed")?;
    info!("evently done");
    Ok(())
}

/// Read `evently.yaml`, falling back to defaults when it is absent.
fn load_config() -> Result<AppConfig> {
    let path = Path::new(CONFIG_PATH);
    if path.exists() {
        AppConfig::from_file(path).with_context(|| format!("failed to load {CONFIG_PATH}"))
    } else {
        info!(path = CONFIG_PATH, "No config file, using defaults");
        // An empty mapping takes every default (and the env override).
        AppConfig::parse("{}").context("failed to build the default configuration")
    }
}

/// The list and home screens: sort, filter, and the nearby strip.
fn browse(app: &App) {
    let nearest_first = EventQuery::default().run(app.catalog.list_all());
    info!(count = nearest_first.len(), "Events, nearest first");
    if let Some(closest) = nearest_first.first() {
        let badge = closest.category.info();
        info!(
            title = closest.title,
            km = closest.distance_km,
            category = badge.name,
            icon = badge.icon,
            "Closest event"
        );
    }

    let latest_music = EventQuery {
        category: Some(Category::Music),
        sort_key: SortKey::Date,
        sort_order: SortOrder::Descending,
    };
    for event in latest_music.run(app.catalog.list_all()) {
        info!(title = event.title, date = %event.date, "Music, latest first");
    }

    let strip = query::nearby(app.catalog.list_all(), 3);
    info!(count = strip.len(), "Nearby strip");
}

/// The detail screen: lookup, participation toggle, displayed attendees.
fn join_and_leave(app: &mut App) {
    let Some(event) = app.catalog.list_all().first() else {
        warn!("Catalog is empty, nothing to join");
        return;
    };

    let change = app.participation.toggle(event.id);
    info!(
        ?change,
        title = event.title,
        attendees = app.participation.display_attendees(event),
        "Participation updated"
    );

    // An id with no record is the not-found screen, never a crash.
    if app.catalog.get(EventId::new()).is_none() {
        info!("Unknown event id renders the not-found screen");
    }
}

/// The creation flow, including the recovered unauthorized path.
async fn publish(app: &mut App) -> Result<()> {
    let draft = EventDraft {
        title: "Atelier Cuisine de Quartier".to_owned(),
        description: "Apprenez des recettes de saison avec un chef local.".to_owned(),
        date: NaiveDate::from_ymd_opt(2024, 3, 8).unwrap_or_default(),
        time: NaiveTime::from_hms_opt(18, 30, 0).unwrap_or_default(),
        location: "Marché Couvert, Paris".to_owned(),
        category: "food".to_owned(),
        coordinates: None,
        image: None,
    };

    // The participant hits the creation flow first; the rejection is a
    // redirect plus a message, not a failure of the program.
    if let Some(user) = app.session.current_user() {
        match app.catalog.create(draft.clone(), &user) {
            Ok(event) => info!(title = event.title, "Event published"),
            Err(CreateEventError::NotOrganizer { role }) => {
                warn!(?role, "Event creation refused: organizer role required");
            }
            Err(error) => warn!(%error, "Event creation refused"),
        }
    }

    app.session.logout().context("logout before re-login failed")?;
    let organizer = app
        .session
        .login("marie@organisateur.fr", Role::Organizer)
        .await
        .context("organizer login failed")?;

    let event = app
        .catalog
        .create(draft, &organizer)
        .context("failed to publish the event")?;
    info!(
        title = event.title,
        organizer = event.organizer,
        km = event.distance_km,
        "Event published"
    );

    Ok(())
}
