use crate::{
    log::{Log, log},
    strerr::Strerr,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The values worth keeping between sessions. `offset` stays in frames here
/// because that is the granularity the player adjusts it in; it becomes
/// seconds only when a config is built.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    pub offset: f32,
    pub scroll_speed: f32,
    pub gutter: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            offset: 0.0,
            scroll_speed: 300.0,
            gutter: false,
        }
    }
}

/// Injected persistence capability. The track never sees this; only the
/// host wiring reads and writes it.
pub trait SettingsStore {
    fn load(&self) -> Option<Settings>;
    fn save(&mut self, settings: &Settings) -> Result<(), String>;
}

/// One fixed JSON file, relative to the working directory.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Option<Settings> {
        let text = std::fs::read_to_string(&self.path).ok()?;

        match serde_json::from_str(&text) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log(Log::Warning, format!("ignoring unreadable settings ({e})"));
                None
            }
        }
    }

    fn save(&mut self, settings: &Settings) -> Result<(), String> {
        let text = serde_json::to_string_pretty(settings).strerr()?;
        std::fs::write(&self.path, text).strerr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cuedrill-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn round_trip() {
        let path = temp_path("round-trip");
        let mut store = JsonFileStore::new(&path);
        let settings = Settings {
            offset: -2.0,
            scroll_speed: 450.0,
            gutter: true,
        };

        store.save(&settings).unwrap();
        assert_eq!(store.load(), Some(settings));

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_yields_none() {
        let store = JsonFileStore::new(temp_path("missing"));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn garbage_file_yields_none() {
        let path = temp_path("garbage");
        std::fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::new(&path);
        assert_eq!(store.load(), None);

        std::fs::remove_file(path).unwrap();
    }
}
