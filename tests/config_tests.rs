//! Integration tests for configuration loading and store path resolution.

use chore_tracker::config::{
    COMMANDS_ENV, ConfigLoader, ConfigPaths, DATA_DIR_ENV, REMINDER_DAYS_ENV,
};
use chore_tracker::store::{AchievementStore, TaskStore, WishStore};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Project and user config dirs inside a temp dir, with optional file contents.
fn setup_tiers(project: Option<&str>, user: Option<&str>) -> (TempDir, ConfigPaths) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let project_dir = temp.path().join("chore-tracker");
    let user_dir = temp.path().join("home").join(".chore-tracker");
    for (dir, content) in [(&project_dir, project), (&user_dir, user)] {
        if let Some(content) = content {
            fs::create_dir_all(dir).unwrap();
            fs::write(dir.join("config.yaml"), content).unwrap();
        }
    }
    let paths = ConfigPaths::with_dirs(Some(project_dir), Some(user_dir));
    (temp, paths)
}

fn env_from(pairs: &[(&'static str, String)]) -> impl Fn(&str) -> Option<String> + use<> {
    let map: HashMap<&'static str, String> = pairs.iter().cloned().collect();
    move |key: &str| map.get(key).cloned()
}

mod tier_tests {
    use super::*;

    #[test]
    fn tiers_merge_field_by_field() {
        let (_temp, paths) = setup_tiers(
            Some("storage:\n  tasks_file: Chores.txt\nreminders:\n  default_days: 3\n"),
            Some("reminders:\n  default_days: 5\n"),
        );
        let loader = ConfigLoader::load_with(paths, env_from(&[])).unwrap();
        let config = loader.config();

        assert_eq!(config.storage.tasks_file, PathBuf::from("Chores.txt"));
        assert_eq!(config.storage.achievements_file, PathBuf::from("Achievements.txt"));
        assert_eq!(config.reminders.default_days, 5);
    }

    #[test]
    fn environment_beats_every_file() {
        let (temp, paths) = setup_tiers(
            Some("storage:\n  data_dir: from-project\n"),
            Some("commands:\n  file: from-user.txt\n"),
        );
        let data_dir = temp.path().join("env-data").to_string_lossy().to_string();
        let env = env_from(&[
            (DATA_DIR_ENV, data_dir.clone()),
            (COMMANDS_ENV, "from-env.txt".to_string()),
            (REMINDER_DAYS_ENV, "10".to_string()),
        ]);
        let loader = ConfigLoader::load_with(paths, env).unwrap();
        let config = loader.config();

        assert_eq!(config.storage.data_dir, PathBuf::from(data_dir));
        assert_eq!(config.commands.file, PathBuf::from("from-env.txt"));
        assert_eq!(config.reminders.default_days, 10);
    }

    #[test]
    fn explicit_file_must_exist() {
        let temp = TempDir::new().unwrap();
        assert!(ConfigLoader::load_file(temp.path().join("missing.yaml")).is_err());
    }
}

mod storage_tests {
    use super::*;

    fn assert_in(dir: &Path, file: &Path) {
        assert_eq!(file.parent().unwrap(), dir);
        assert!(file.exists(), "{} was not created", file.display());
    }

    #[test]
    fn stores_open_under_configured_data_dir() {
        let (temp, paths) = setup_tiers(None, None);
        let data_dir = temp.path().join("household");
        let env = env_from(&[(DATA_DIR_ENV, data_dir.to_string_lossy().to_string())]);
        let config = ConfigLoader::load_with(paths, env).unwrap().into_config();

        let resolved = config.storage.resolve();
        let _tasks = TaskStore::open(&resolved.tasks);
        let _wishes = WishStore::open(&resolved.wishes);
        let achievements = AchievementStore::open(&resolved.achievements);

        assert_in(&data_dir, &resolved.tasks);
        assert_in(&data_dir, &resolved.wishes);
        assert_in(&data_dir, &resolved.achievements);
        assert_eq!(achievements.len(), 12);
    }
}
