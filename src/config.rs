//! Data directory and persisted preferences.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

const APP_DIR: &str = "spectral-mind";
const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "spectral-mind.log";

/// Directory holding settings, custom cards and the log file.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Preferences that survive between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Start at theme selection instead of the rules screen.
    pub skip_intro: bool,
}

impl Settings {
    /// Load settings from `dir`; a missing file yields the defaults.
    pub fn load(dir: &Path) -> Result<Self> {
        match fs::read_to_string(dir.join(SETTINGS_FILE)) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        let path = dir.join(SETTINGS_FILE);
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        debug!(path = %path.display(), "Settings saved");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{
        env,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    /// Fresh, empty directory under the system temp dir.
    pub fn scratch_dir(label: &str) -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let dir = env::temp_dir().join(format!(
            "spectral-mind-{label}-{}-{n}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_settings_are_default() {
        let dir = scratch_dir("settings-missing");
        assert_eq!(Settings::load(&dir).unwrap(), Settings::default());
    }

    #[test]
    fn test_settings_round_trip_through_disk() {
        let dir = scratch_dir("settings-save");
        let settings = Settings { skip_intro: true };
        settings.save(&dir).unwrap();
        assert!(Settings::load(&dir).unwrap().skip_intro);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let dir = scratch_dir("settings-extra");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(SETTINGS_FILE), r#"{"skip_intro":true,"volume":3}"#).unwrap();
        assert!(Settings::load(&dir).unwrap().skip_intro);
        let _ = fs::remove_dir_all(&dir);
    }
}
