use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use super::errors::SettingsError;
use super::model::SettingsData;

/// Status describing how settings were loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum SettingsLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading settings from disk.
#[derive(Debug, Clone)]
pub(crate) struct SettingsLoad {
    settings: SettingsData,
    status: SettingsLoadStatus,
}

impl SettingsLoad {
    pub(crate) fn new(
        settings: SettingsData,
        status: SettingsLoadStatus,
    ) -> Self {
        Self { settings, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (SettingsData, SettingsLoadStatus) {
        (self.settings, self.status)
    }
}

pub(crate) fn load_settings() -> Result<SettingsLoad, SettingsError> {
    load_settings_from_path(&settings_path())
}

pub(crate) fn save_settings(
    settings: &SettingsData,
) -> Result<(), SettingsError> {
    save_settings_to_path(&settings_path(), settings)
}

fn load_settings_from_path(path: &Path) -> Result<SettingsLoad, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(SettingsLoad::new(
                SettingsData::default(),
                SettingsLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<SettingsData>(&data) {
        Ok(settings) => {
            Ok(SettingsLoad::new(settings, SettingsLoadStatus::Loaded))
        },
        Err(err) => Ok(SettingsLoad::new(
            SettingsData::default(),
            SettingsLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

fn save_settings_to_path(
    path: &Path,
    settings: &SettingsData,
) -> Result<(), SettingsError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let payload = serde_json::to_string_pretty(settings)?;
    write_atomic(path, payload.as_bytes())?;

    Ok(())
}

fn settings_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("folio")
            .join("settings.json");
    }

    std::env::temp_dir().join("folio").join("settings.json")
}

/// Per-process sequence giving every write its own temp file.
static WRITE_SEQ: AtomicU64 = AtomicU64::new(0);

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = temp_path_for(path);
    fs::write(&tmp_path, payload)?;
    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let seq = WRITE_SEQ.fetch_add(1, Ordering::Relaxed);
    path.with_extension(format!("json.{}.{seq}.tmp", std::process::id()))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::{Arc, Barrier};
    use std::thread;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{
        SettingsData, SettingsLoadStatus, load_settings_from_path,
        save_settings_to_path, temp_path_for,
    };
    use crate::theme::ThemeName;

    #[test]
    fn given_saved_theme_when_loaded_then_round_trip_matches() {
        let root = test_temp_dir("round_trip");
        let path = root.join("nested").join("settings.json");
        let settings = SettingsData {
            theme: ThemeName::Light,
        };

        save_settings_to_path(&path, &settings)
            .expect("settings should save successfully");
        let loaded = load_settings_from_path(&path)
            .expect("settings should load successfully");
        let (loaded_settings, loaded_status) = loaded.into_parts();

        assert!(matches!(loaded_status, SettingsLoadStatus::Loaded));
        assert_eq!(loaded_settings, settings);
        let leftovers = fs::read_dir(path.parent().expect("path has parent"))
            .expect("settings dir should be readable")
            .count();
        assert_eq!(leftovers, 1);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_missing_file_when_load_then_defaults_are_reported_missing() {
        let root = test_temp_dir("missing");
        let path = root.join("settings.json");

        let loaded = load_settings_from_path(&path)
            .expect("missing settings should not be an error");
        let (loaded_settings, loaded_status) = loaded.into_parts();

        assert!(matches!(loaded_status, SettingsLoadStatus::Missing));
        assert_eq!(loaded_settings.theme, ThemeName::Dark);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_load_then_returns_default_with_invalid_status() {
        let root = test_temp_dir("invalid_json");
        let path = root.join("settings.json");
        fs::write(&path, "{ this is not valid json")
            .expect("invalid test payload should be written");

        let loaded = load_settings_from_path(&path)
            .expect("loading invalid settings should not fail with io error");
        let (loaded_settings, loaded_status) = loaded.into_parts();

        assert_eq!(loaded_settings, SettingsData::default());
        match loaded_status {
            SettingsLoadStatus::Invalid(message) => {
                assert!(!message.is_empty());
            },
            other => panic!("expected invalid status, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_unknown_keys_when_load_then_they_are_ignored() {
        let root = test_temp_dir("unknown_keys");
        let path = root.join("settings.json");
        fs::write(&path, r#"{ "theme": "light", "font": "mono" }"#)
            .expect("test payload should be written");

        let loaded = load_settings_from_path(&path)
            .expect("settings should load successfully");
        let (loaded_settings, loaded_status) = loaded.into_parts();

        assert!(matches!(loaded_status, SettingsLoadStatus::Loaded));
        assert_eq!(loaded_settings.theme, ThemeName::Light);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_same_path_when_temp_names_are_taken_then_they_differ() {
        let path = std::path::Path::new("/tmp/folio/settings.json");

        assert_ne!(temp_path_for(path), temp_path_for(path));
    }

    #[test]
    fn given_concurrent_saves_when_racing_then_every_save_succeeds() {
        const ROUNDS: usize = 100;
        let root = test_temp_dir("concurrent");
        let path = root.join("settings.json");

        for _ in 0..ROUNDS {
            let barrier = Arc::new(Barrier::new(2));
            let writers: Vec<_> = [ThemeName::Light, ThemeName::Dark]
                .into_iter()
                .map(|theme| {
                    let barrier = Arc::clone(&barrier);
                    let path = path.clone();
                    thread::spawn(move || {
                        barrier.wait();
                        save_settings_to_path(&path, &SettingsData { theme })
                            .map_err(|err| format!("{err}"))
                    })
                })
                .collect();

            for writer in writers {
                let result = writer.join().expect("writer should not panic");
                assert_eq!(result, Ok(()));
            }
        }

        let loaded = load_settings_from_path(&path)
            .expect("settings should load successfully");
        let (_, status) = loaded.into_parts();
        assert!(matches!(status, SettingsLoadStatus::Loaded));
        let leftovers = fs::read_dir(&root)
            .expect("settings dir should be readable")
            .count();
        assert_eq!(leftovers, 1);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "folio-settings-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
