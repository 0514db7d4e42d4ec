//! Configuration types.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default reminder window in days.
pub const DEFAULT_REMINDER_DAYS: i64 = 7;

/// Where the record files live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory that relative file names are resolved against.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_tasks_file")]
    pub tasks_file: PathBuf,

    #[serde(default = "default_wishes_file")]
    pub wishes_file: PathBuf,

    #[serde(default = "default_achievements_file")]
    pub achievements_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            tasks_file: default_tasks_file(),
            wishes_file: default_wishes_file(),
            achievements_file: default_achievements_file(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_tasks_file() -> PathBuf {
    PathBuf::from("Task.txt")
}

fn default_wishes_file() -> PathBuf {
    PathBuf::from("Wish.txt")
}

fn default_achievements_file() -> PathBuf {
    PathBuf::from("Achievements.txt")
}

impl StorageConfig {
    /// Resolve the three store paths. Absolute file names are kept as-is.
    pub fn resolve(&self) -> StoragePaths {
        let resolve = |file: &Path| {
            if file.is_absolute() {
                file.to_path_buf()
            } else {
                self.data_dir.join(file)
            }
        };
        StoragePaths {
            tasks: resolve(&self.tasks_file),
            wishes: resolve(&self.wishes_file),
            achievements: resolve(&self.achievements_file),
        }
    }
}

/// Resolved backing-file paths, one per store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub tasks: PathBuf,
    pub wishes: PathBuf,
    pub achievements: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandsConfig {
    /// Command log processed by `run` when no file is given.
    #[serde(default = "default_commands_file")]
    pub file: PathBuf,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            file: default_commands_file(),
        }
    }
}

fn default_commands_file() -> PathBuf {
    PathBuf::from("Commands.txt")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemindersConfig {
    /// `SHOW_REMINDERS` threshold when none (or an invalid one) is given.
    #[serde(default = "default_reminder_days")]
    pub default_days: i64,
}

impl Default for RemindersConfig {
    fn default() -> Self {
        Self {
            default_days: default_reminder_days(),
        }
    }
}

fn default_reminder_days() -> i64 {
    DEFAULT_REMINDER_DAYS
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub commands: CommandsConfig,

    #[serde(default)]
    pub reminders: RemindersConfig,
}

impl Config {
    /// Load one configuration file. An empty file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Option<Config> = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config.unwrap_or_default())
    }
}
