use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;

/// Storage behind the favourites list.
///
/// Implementations never fail towards the caller: unreadable state loads as an
/// empty list and failed writes are logged.
pub trait FavoritesPersistence {
    fn load(&self) -> Vec<String>;
    fn save(&self, favorites: &[String]);
}

/// JSON array of city names on disk.
#[derive(Debug, Clone)]
pub struct JsonFileFavorites {
    path: PathBuf,
}

impl JsonFileFavorites {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, favorites: &[String]) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("creating favorites directory failed")?;
        }
        let payload = serde_json::to_string_pretty(favorites)
            .context("serializing favorites payload failed")?;
        fs::write(&self.path, payload).context("writing favorites file failed")
    }
}

impl FavoritesPersistence for JsonFileFavorites {
    fn load(&self) -> Vec<String> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&content).unwrap_or_else(|err| {
            tracing::warn!(path = %self.path.display(), %err, "ignoring unreadable favorites file");
            Vec::new()
        })
    }

    fn save(&self, favorites: &[String]) {
        if let Err(err) = self.write(favorites) {
            tracing::warn!(path = %self.path.display(), err = %format!("{err:#}"), "saving favorites failed");
        }
    }
}

pub fn favorites_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os("WEATHER_OUTLOOK_CONFIG_DIR") {
        return Some(PathBuf::from(base).join("favorites.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("weather-outlook")
            .join("favorites.json"),
    )
}

/// Ordered list of favourite city names, unique ignoring case.
#[derive(Debug)]
pub struct FavoritesStore<P> {
    port: P,
    favorites: Vec<String>,
}

impl<P: FavoritesPersistence> FavoritesStore<P> {
    pub fn open(port: P) -> Self {
        let mut favorites: Vec<String> = Vec::new();
        for name in port.load() {
            let name = name.trim().to_string();
            if !name.is_empty() && !contains_name(&favorites, &name) {
                favorites.push(name);
            }
        }
        Self { port, favorites }
    }

    #[must_use]
    pub fn list(&self) -> &[String] {
        &self.favorites
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        contains_name(&self.favorites, name.trim())
    }

    /// Appends `name` unless it is blank or already present. Returns whether
    /// the list changed.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.favorites.push(name.to_string());
        self.port.save(&self.favorites);
        true
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let name = name.trim();
        let before = self.favorites.len();
        self.favorites.retain(|fav| !fav.eq_ignore_ascii_case(name));
        let changed = self.favorites.len() != before;
        if changed {
            self.port.save(&self.favorites);
        }
        changed
    }

    /// Removes `name` when present, adds it otherwise. Returns whether it is a
    /// favourite afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.contains(name) {
            self.remove(name);
            false
        } else {
            self.add(name)
        }
    }
}

fn contains_name(favorites: &[String], name: &str) -> bool {
    favorites.iter().any(|fav| fav.eq_ignore_ascii_case(name))
}
