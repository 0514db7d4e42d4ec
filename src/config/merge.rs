//! Field-by-field merge of configuration tiers.
//!
//! Higher tiers override lower ones key by key; anything that is not an
//! object is replaced wholesale.

use serde_json::Value;

/// Overlay one config tier onto a lower one, returning the merged tree.
///
/// Sections (`storage`, `commands`, `reminders`) merge key by key, so a
/// tier that only sets `storage.data_dir` keeps the lower tier's file
/// names. A null in `overlay` leaves the lower value alone; any other
/// non-section value replaces it.
///
/// # Example
/// ```
/// use serde_json::json;
/// use chore_tracker::config::deep_merge;
///
/// let base = json!({
///     "storage": { "data_dir": ".", "tasks_file": "Task.txt" },
///     "reminders": { "default_days": 7 }
/// });
/// let overlay = json!({
///     "storage": { "data_dir": "/srv/chores" }
/// });
/// let result = deep_merge(base, overlay);
/// assert_eq!(result["storage"]["data_dir"], "/srv/chores");
/// assert_eq!(result["storage"]["tasks_file"], "Task.txt");
/// assert_eq!(result["reminders"]["default_days"], 7);
/// ```
pub fn deep_merge(mut base: Value, overlay: Value) -> Value {
    merge_into(&mut base, overlay);
    base
}

fn merge_into(target: &mut Value, overlay: Value) {
    match (target, overlay) {
        (_, Value::Null) => {}
        (Value::Object(section), Value::Object(overrides)) => {
            for (key, value) in overrides {
                merge_into(section.entry(key).or_insert(Value::Null), value);
            }
        }
        (target, value) => *target = value,
    }
}

/// Merge tiers lowest first; later tiers win.
pub fn deep_merge_all(values: impl IntoIterator<Item = Value>) -> Value {
    values.into_iter().fold(Value::Null, deep_merge)
}
