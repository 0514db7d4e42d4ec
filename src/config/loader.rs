//! Configuration loader with tier-based merging.
//!
//! Loads configuration from multiple tiers and merges them field-by-field.

use super::merge::deep_merge_all;
use super::types::Config;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Explicit config file; replaces the project and user tiers.
pub const CONFIG_PATH_ENV: &str = "CHORE_TRACKER_CONFIG_PATH";
pub const DATA_DIR_ENV: &str = "CHORE_TRACKER_DATA_DIR";
pub const COMMANDS_ENV: &str = "CHORE_TRACKER_COMMANDS";
pub const REMINDER_DAYS_ENV: &str = "CHORE_TRACKER_REMINDER_DAYS";

const CONFIG_FILE: &str = "config.yaml";

/// Configuration tier priority (lowest to highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigTier {
    Defaults = 0,
    /// `./chore-tracker/`
    Project = 1,
    /// `~/.chore-tracker/`
    User = 2,
    Environment = 3,
}

impl std::fmt::Display for ConfigTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigTier::Defaults => write!(f, "defaults"),
            ConfigTier::Project => write!(f, "project"),
            ConfigTier::User => write!(f, "user"),
            ConfigTier::Environment => write!(f, "environment"),
        }
    }
}

/// Directories searched for `config.yaml`.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub project_dir: Option<PathBuf>,
    pub user_dir: Option<PathBuf>,
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::discover()
    }
}

impl ConfigPaths {
    /// `./chore-tracker` and `~/.chore-tracker`.
    pub fn discover() -> Self {
        Self {
            project_dir: Some(PathBuf::from("chore-tracker")),
            user_dir: dirs::home_dir().map(|h| h.join(".chore-tracker")),
        }
    }

    pub fn with_dirs(project_dir: Option<PathBuf>, user_dir: Option<PathBuf>) -> Self {
        Self {
            project_dir,
            user_dir,
        }
    }

    fn tier_files(&self) -> Vec<(ConfigTier, PathBuf)> {
        let mut files = Vec::new();
        if let Some(dir) = &self.project_dir {
            files.push((ConfigTier::Project, dir.join(CONFIG_FILE)));
        }
        if let Some(dir) = &self.user_dir {
            files.push((ConfigTier::User, dir.join(CONFIG_FILE)));
        }
        files
    }
}

/// Configuration loader that handles tier-based merging.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    pub paths: ConfigPaths,
    config: Config,
    /// Config files that contributed, lowest tier first.
    sources: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Load configuration from all tiers and the process environment.
    pub fn load() -> Result<Self> {
        Self::load_with_paths(ConfigPaths::discover())
    }

    /// Load configuration with explicit tier directories.
    pub fn load_with_paths(paths: ConfigPaths) -> Result<Self> {
        Self::load_with(paths, |key| std::env::var(key).ok())
    }

    /// Load one explicit file, then apply environment overrides.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_file_with(path.as_ref(), ConfigPaths::discover(), |key| {
            std::env::var(key).ok()
        })
    }

    /// Load with a custom variable lookup in place of the process environment.
    pub fn load_with<F>(paths: ConfigPaths, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(explicit) = env(CONFIG_PATH_ENV) {
            return Self::load_file_with(Path::new(&explicit), paths, env);
        }

        // Tier 1: Defaults
        let mut configs: Vec<Value> = vec![serde_json::to_value(Config::default())?];
        let mut sources = Vec::new();

        // Tiers 2 and 3: project, then user
        for (tier, file) in paths.tier_files() {
            if !file.exists() {
                continue;
            }
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {} config {}", tier, file.display()))?;
            let value: Value = serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid {} config {}", tier, file.display()))?;
            debug!(%tier, path = %file.display(), "Loaded config tier");
            configs.push(value);
            sources.push(file);
        }

        let merged = deep_merge_all(configs);
        let mut config: Config =
            serde_json::from_value(merged).context("Invalid merged configuration")?;

        // Tier 4: Environment
        Self::apply_env_overrides(&mut config, &env);

        Ok(Self {
            paths,
            config,
            sources,
        })
    }

    fn load_file_with<F>(path: &Path, paths: ConfigPaths, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::load(path)?;
        Self::apply_env_overrides(&mut config, &env);
        Ok(Self {
            paths,
            config,
            sources: vec![path.to_path_buf()],
        })
    }

    fn apply_env_overrides<F>(config: &mut Config, env: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(data_dir) = env(DATA_DIR_ENV) {
            config.storage.data_dir = PathBuf::from(data_dir);
        }

        if let Some(commands) = env(COMMANDS_ENV) {
            config.commands.file = PathBuf::from(commands);
        }

        if let Some(days) = env(REMINDER_DAYS_ENV) {
            match days.trim().parse() {
                Ok(days) => config.reminders.default_days = days,
                Err(_) => warn!(
                    var = REMINDER_DAYS_ENV,
                    value = %days,
                    "Ignoring non-integer reminder days"
                ),
            }
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }

    /// Config files that were read, lowest priority first.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_load_defaults_only() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::with_dirs(
            Some(temp.path().join("project")),
            Some(temp.path().join("user")),
        );

        let loader = ConfigLoader::load_with(paths, no_env).unwrap();
        assert_eq!(loader.config(), &Config::default());
        assert!(loader.sources().is_empty());
    }

    #[test]
    fn test_user_config_overrides_project() {
        let temp = TempDir::new().unwrap();
        let project_dir = temp.path().join("chore-tracker");
        let user_dir = temp.path().join("user");
        std::fs::create_dir_all(&project_dir).unwrap();
        std::fs::create_dir_all(&user_dir).unwrap();

        std::fs::write(
            project_dir.join("config.yaml"),
            "storage:\n  data_dir: project-data\n  tasks_file: Chores.txt\n",
        )
        .unwrap();
        std::fs::write(user_dir.join("config.yaml"), "storage:\n  data_dir: user-data\n").unwrap();

        let paths = ConfigPaths::with_dirs(Some(project_dir), Some(user_dir));
        let loader = ConfigLoader::load_with(paths, no_env).unwrap();
        let config = loader.config();

        assert_eq!(config.storage.data_dir, PathBuf::from("user-data"));
        assert_eq!(config.storage.tasks_file, PathBuf::from("Chores.txt"));
        assert_eq!(config.storage.wishes_file, PathBuf::from("Wish.txt"));
        assert_eq!(loader.sources().len(), 2);
    }

    #[test]
    fn test_env_overrides_files() {
        let temp = TempDir::new().unwrap();
        let project_dir = temp.path().join("chore-tracker");
        std::fs::create_dir_all(&project_dir).unwrap();
        std::fs::write(project_dir.join("config.yaml"), "reminders:\n  default_days: 3\n").unwrap();

        let env: HashMap<&str, &str> = HashMap::from([
            (DATA_DIR_ENV, "/var/chores"),
            (COMMANDS_ENV, "today.txt"),
            (REMINDER_DAYS_ENV, "14"),
        ]);
        let paths = ConfigPaths::with_dirs(Some(project_dir), None);
        let loader = ConfigLoader::load_with(paths, |k| env.get(k).map(|v| v.to_string())).unwrap();
        let config = loader.config();

        assert_eq!(config.storage.data_dir, PathBuf::from("/var/chores"));
        assert_eq!(config.commands.file, PathBuf::from("today.txt"));
        assert_eq!(config.reminders.default_days, 14);
    }

    #[test]
    fn test_bad_env_days_keeps_file_value() {
        let paths = ConfigPaths::with_dirs(None, None);
        let loader = ConfigLoader::load_with(paths, |k| {
            (k == REMINDER_DAYS_ENV).then(|| "a week".to_string())
        })
        .unwrap();
        assert_eq!(loader.config().reminders.default_days, 7);
    }

    #[test]
    fn test_explicit_path_skips_tiers() {
        let temp = TempDir::new().unwrap();
        let project_dir = temp.path().join("chore-tracker");
        std::fs::create_dir_all(&project_dir).unwrap();
        std::fs::write(project_dir.join("config.yaml"), "commands:\n  file: project.txt\n").unwrap();
        let explicit = temp.path().join("explicit.yaml");
        std::fs::write(&explicit, "reminders:\n  default_days: 2\n").unwrap();

        let explicit_str = explicit.to_string_lossy().to_string();
        let paths = ConfigPaths::with_dirs(Some(project_dir), None);
        let loader = ConfigLoader::load_with(paths, |k| {
            (k == CONFIG_PATH_ENV).then(|| explicit_str.clone())
        })
        .unwrap();

        assert_eq!(loader.config().reminders.default_days, 2);
        assert_eq!(loader.config().commands.file, PathBuf::from("Commands.txt"));
        assert_eq!(loader.sources(), &[explicit]);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let temp = TempDir::new().unwrap();
        let project_dir = temp.path().join("chore-tracker");
        std::fs::create_dir_all(&project_dir).unwrap();
        std::fs::write(project_dir.join("config.yaml"), "storage: [unclosed\n").unwrap();

        let paths = ConfigPaths::with_dirs(Some(project_dir), None);
        assert!(ConfigLoader::load_with(paths, no_env).is_err());
    }
}
