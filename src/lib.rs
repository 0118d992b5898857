pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod report;

#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use app::{
    events::AppEvent,
    favorites::{FavoritesStore, JsonFileFavorites, favorites_path},
    state::{AppMode, AppState},
};
use cli::Cli;
use data::{geolocate::Geolocator, openweather::OpenWeatherClient};
use domain::weather::{LocationQuery, Units};
use tokio::sync::mpsc;

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;

    let mut favorites =
        favorites_path().map(|path| FavoritesStore::open(JsonFileFavorites::new(path)));
    if let Some(store) = favorites.as_mut() {
        manage_favorites(&cli, store);
    }

    let client = || build_client(&cli);

    if let Some(query) = &cli.search {
        let matches = client()?.search(query).await?;
        println!("{}", report::render_matches(&matches));
    }

    if cli.is_management_only() {
        return Ok(());
    }

    let units = cli.units();
    let query = if cli.here {
        match Geolocator::new().locate().await {
            Ok(coords) => LocationQuery::Coords(coords),
            Err(err) => {
                let mut state = AppState::new(units);
                state.fail(err);
                return finish(&state);
            }
        }
    } else {
        cli.location()
            .or_else(|| {
                favorites
                    .as_ref()
                    .and_then(|store| store.list().first().cloned())
                    .map(LocationQuery::City)
            })
            .context("no location given: pass a city, --lat/--lon or --here")?
    };

    let state = load(&client()?, query, units).await;
    finish(&state)
}

/// Runs one request generation to completion and returns the settled state.
pub async fn load(client: &OpenWeatherClient, query: LocationQuery, units: Units) -> AppState {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(16);
    let mut state = AppState::new(units);
    state.start_fetch(&tx, client, query);
    drop(tx);
    settle(&mut state, &mut rx).await;
    state
}

/// Feeds events into `state` until the current generation has settled or
/// every sender is gone.
pub async fn settle(state: &mut AppState, rx: &mut mpsc::Receiver<AppEvent>) {
    while !state.is_settled() {
        let Some(event) = rx.recv().await else {
            break;
        };
        state.handle_event(event);
    }
}

fn finish(state: &AppState) -> Result<()> {
    match state.mode {
        AppMode::Ready => {
            let dashboard = state
                .dashboard(chrono::Utc::now())
                .context("weather loaded without a dashboard")?;
            println!("{}", report::render(&dashboard));
            Ok(())
        }
        _ => match &state.last_error {
            Some(err) => Err(err.clone().into()),
            None => anyhow::bail!("weather request did not complete"),
        },
    }
}

fn manage_favorites(cli: &Cli, store: &mut FavoritesStore<JsonFileFavorites>) {
    if let Some(city) = &cli.add_favorite
        && store.add(city)
    {
        eprintln!("Added {} to favourites", city.trim());
    }
    if let Some(city) = &cli.remove_favorite
        && store.remove(city)
    {
        eprintln!("Removed {} from favourites", city.trim());
    }
    if cli.favorites {
        if store.list().is_empty() {
            println!("No favourites saved");
        }
        for name in store.list() {
            println!("{name}");
        }
    }
}

fn build_client(cli: &Cli) -> Result<OpenWeatherClient> {
    let api_key = cli
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .context("missing API key: set OPENWEATHER_API_KEY or pass --api-key")?;
    match (&cli.api_url, &cli.geo_url) {
        (None, None) => OpenWeatherClient::new(api_key),
        (api, geo) => OpenWeatherClient::with_base_urls(
            api_key,
            api.as_deref().unwrap_or(data::openweather::API_URL),
            geo.as_deref().unwrap_or(data::openweather::GEO_URL),
        ),
    }
}
