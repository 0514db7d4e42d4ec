//! Achievement line codec: `id,name,description,TYPE,threshold,true|false`.
//!
//! Fields are not quoted, so a comma inside a name or description shifts the
//! remaining fields and the line no longer round-trips. Known limitation.

use crate::error::{Error, Result};
use crate::types::{Achievement, AchievementType};

const KIND: &str = "achievement";
const FIELD_COUNT: usize = 6;

/// Decode one line of the persisted achievement file. Extra fields are ignored.
pub fn decode_line(line: &str) -> Result<Achievement> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < FIELD_COUNT {
        return Err(Error::malformed(
            KIND,
            format!("expected {} fields, found {}", FIELD_COUNT, parts.len()),
        ));
    }

    let kind = AchievementType::from_name(parts[3])
        .ok_or_else(|| Error::malformed(KIND, format!("unknown achievement type '{}'", parts[3])))?;
    let threshold = parts[4]
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::malformed(KIND, format!("invalid threshold '{}'", parts[4])))?;

    let mut achievement = Achievement::new(parts[0], parts[1], parts[2], kind, threshold);
    achievement.unlocked = parts[5].trim().eq_ignore_ascii_case("true");
    Ok(achievement)
}

/// Encode an achievement as a persisted line.
pub fn encode(achievement: &Achievement) -> String {
    format!(
        "{},{},{},{},{},{}",
        achievement.id,
        achievement.name,
        achievement.description,
        achievement.kind.as_str(),
        achievement.threshold,
        achievement.unlocked
    )
}
