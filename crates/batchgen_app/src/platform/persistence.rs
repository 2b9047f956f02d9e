use std::fs;
use std::path::{Path, PathBuf};

use batchgen_core::ThemePreference;
use batchgen_engine::{AtomicFileWriter, PersistError};
use batchgen_logging::{batch_info, batch_warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PREFS_FILENAME: &str = ".batchgen_prefs.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedPrefs {
    #[serde(default)]
    theme: Option<String>,
}

#[derive(Debug, Error)]
pub(crate) enum PreferenceError {
    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] ron::Error),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Reads the stored theme; any problem is logged and treated as "not set".
pub(crate) fn load_theme(prefs_dir: &Path) -> Option<ThemePreference> {
    let path = prefs_dir.join(PREFS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
        Err(err) => {
            batch_warn!("Failed to read preferences from {:?}: {}", path, err);
            return None;
        }
    };

    let prefs: PersistedPrefs = match ron::from_str(&content) {
        Ok(prefs) => prefs,
        Err(err) => {
            batch_warn!("Failed to parse preferences from {:?}: {}", path, err);
            return None;
        }
    };

    match prefs.theme?.parse::<ThemePreference>() {
        Ok(theme) => {
            batch_info!("Loaded theme preference {} from {:?}", theme, path);
            Some(theme)
        }
        Err(err) => {
            batch_warn!("Ignoring stored theme in {:?}: {}", path, err);
            None
        }
    }
}

pub(crate) fn save_theme(prefs_dir: &Path, theme: ThemePreference) -> Result<PathBuf, PreferenceError> {
    let prefs = PersistedPrefs {
        theme: Some(theme.as_str().to_string()),
    };
    let content = ron::ser::to_string_pretty(&prefs, ron::ser::PrettyConfig::new())?;
    let writer = AtomicFileWriter::new(prefs_dir.to_path_buf());
    Ok(writer.write(PREFS_FILENAME, &content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_means_no_preference() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_theme(temp.path()), None);
    }

    #[test]
    fn saved_theme_is_loaded_back() {
        let temp = TempDir::new().unwrap();
        let path = save_theme(temp.path(), ThemePreference::Dark).unwrap();

        assert!(path.ends_with(PREFS_FILENAME));
        assert_eq!(load_theme(temp.path()), Some(ThemePreference::Dark));

        save_theme(temp.path(), ThemePreference::System).unwrap();
        assert_eq!(load_theme(temp.path()), Some(ThemePreference::System));
    }

    #[test]
    fn corrupt_or_unknown_values_are_ignored() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PREFS_FILENAME), "not ron at all (").unwrap();
        assert_eq!(load_theme(temp.path()), None);

        fs::write(temp.path().join(PREFS_FILENAME), "(theme: Some(\"sepia\"))").unwrap();
        assert_eq!(load_theme(temp.path()), None);
    }

    #[test]
    fn save_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("config");
        save_theme(&dir, ThemePreference::Light).unwrap();
        assert_eq!(load_theme(&dir), Some(ThemePreference::Light));
    }
}
