use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use ts_core::{PathResolver, TestScriptError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptSettings {
    pub base_dir: PathBuf,
    #[serde(default = "default_relative_paths")]
    pub relative_paths: bool,
}

fn default_relative_paths() -> bool {
    true
}

pub fn load_settings(path: &Path) -> Result<ScriptSettings, TestScriptError> {
    let raw = fs::read_to_string(path).map_err(|source| TestScriptError::SettingsRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| TestScriptError::SettingsParse {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptDir {
    settings: ScriptSettings,
}

impl ScriptDir {
    pub fn new(base_dir: impl Into<PathBuf>, relative_paths: bool) -> Self {
        Self::from_settings(ScriptSettings {
            base_dir: base_dir.into(),
            relative_paths,
        })
    }

    pub fn from_settings(settings: ScriptSettings) -> Self {
        Self { settings }
    }

    pub fn base_dir(&self) -> &Path {
        &self.settings.base_dir
    }
}

impl PathResolver for ScriptDir {
    fn absolute_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.settings.base_dir.join(path)
        }
    }

    fn relative_paths(&self) -> bool {
        self.settings.relative_paths
    }
}
