//! Tiered configuration.
//!
//! Sources, lowest priority first, merged field by field:
//! 1. **Defaults** built into [`Config::default`]
//! 2. **Project** `./chore-tracker/config.yaml`
//! 3. **User** `~/.chore-tracker/config.yaml`
//! 4. **Environment**
//!
//! ## Environment Variables
//! - `CHORE_TRACKER_CONFIG_PATH` - Explicit config file (replaces tiers 2 and 3)
//! - `CHORE_TRACKER_DATA_DIR` - Directory holding the record files
//! - `CHORE_TRACKER_COMMANDS` - Default command log
//! - `CHORE_TRACKER_REMINDER_DAYS` - Default reminder window

mod loader;
mod merge;
mod types;

pub use loader::{
    COMMANDS_ENV, CONFIG_PATH_ENV, ConfigLoader, ConfigPaths, ConfigTier, DATA_DIR_ENV,
    REMINDER_DAYS_ENV,
};
pub use merge::{deep_merge, deep_merge_all};
pub use types::*;
