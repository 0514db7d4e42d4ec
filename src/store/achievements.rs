//! Achievement catalog and unlock bookkeeping.
//!
//! The catalog is seeded before the file is read; persisted lines only merge
//! their unlocked flag into the matching catalog entry. Lines for unknown ids
//! are appended as extra achievements.

use super::{Record, Store};
use crate::codec::achievement;
use crate::error::Result;
use crate::types::{Achievement, AchievementType};
use tracing::info;

pub type AchievementStore = Store<Achievement>;

/// The fixed set of achievements every store starts with.
pub fn default_catalog() -> Vec<Achievement> {
    use AchievementType::*;
    vec![
        Achievement::new("TC1", "Task Beginner", "Complete 5 tasks", TaskCompletion, 5),
        Achievement::new("TC2", "Task Master", "Complete 20 tasks", TaskCompletion, 20),
        Achievement::new("PE1", "Point Collector", "Earn 50 points", PointsEarned, 50),
        Achievement::new("PE2", "Point Hoarder", "Earn 200 points", PointsEarned, 200),
        Achievement::new("PE3", "Point Master", "Earn 500 points", PointsEarned, 500),
        Achievement::new("RE1", "Good Ratings", "Achieve an average rating of 3", RatingEarned, 3),
        Achievement::new("RE2", "Excellent Ratings", "Achieve an average rating of 5", RatingEarned, 5),
        Achievement::new("LR1", "Level Up", "Reach level 2", LevelReached, 2),
        Achievement::new("LR2", "High Level", "Reach level 3", LevelReached, 3),
        Achievement::new("LR3", "Max Level", "Reach level 4", LevelReached, 4),
        Achievement::new("WA1", "Wish Granted", "Get a wish approved", WishApproved, 1),
        Achievement::new("WA2", "Dream Achiever", "Get 3 wishes approved", WishApproved, 3),
    ]
}

impl Record for Achievement {
    const KIND: &'static str = "achievement";

    fn id(&self) -> &str {
        &self.id
    }

    fn decode_line(line: &str) -> Result<Self> {
        achievement::decode_line(line)
    }

    fn encode_line(&self) -> String {
        achievement::encode(self)
    }

    // First id wins; a later line can unlock it but never lock it again.
    fn absorb(records: &mut Vec<Self>, loaded: Self) {
        match records.iter_mut().find(|a| a.id == loaded.id) {
            Some(existing) => existing.unlocked |= loaded.unlocked,
            None => records.push(loaded),
        }
    }

    fn seed() -> Vec<Self> {
        default_catalog()
    }
}

impl Store<Achievement> {
    /// Offer `value` to every achievement of `kind` and return the ones that
    /// unlocked on this call. The file is rewritten only if something unlocked.
    pub fn check(&mut self, kind: AchievementType, value: i64) -> Result<Vec<Achievement>> {
        let mut unlocked = Vec::new();
        for achievement in self.records_mut().iter_mut().filter(|a| a.kind == kind) {
            if achievement.check_and_unlock(value) {
                info!(id = %achievement.id, name = %achievement.name, "Achievement unlocked");
                unlocked.push(achievement.clone());
            }
        }
        if !unlocked.is_empty() {
            self.save()?;
        }
        Ok(unlocked)
    }

    pub fn unlocked(&self) -> Vec<Achievement> {
        self.query(|a| a.unlocked)
    }

    pub fn locked(&self) -> Vec<Achievement> {
        self.query(|a| !a.unlocked)
    }
}
