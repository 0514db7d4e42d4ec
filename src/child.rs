//! The tracked child: budget, ratings and progress counters.
//!
//! Held in memory for the duration of a run; nothing here is persisted.

use crate::error::Result;
use crate::store::AchievementStore;
use crate::types::{Achievement, AchievementType};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Child {
    pub points: i64,
    pub ratings: Vec<i32>,
    pub completed_tasks: u32,
    pub approved_wishes: u32,
}

impl Child {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add to the budget. Returns the new total, or `None` on overflow with
    /// the budget left unchanged.
    pub fn add_points(&mut self, points: i64) -> Option<i64> {
        let total = self.points.checked_add(points)?;
        self.points = total;
        debug!(added = points, total, "Points added");
        Some(total)
    }

    pub fn add_rating(&mut self, rating: i32) {
        self.ratings.push(rating);
        debug!(rating, count = self.ratings.len(), "Rating added");
    }

    pub fn increment_completed_tasks(&mut self) {
        self.completed_tasks = self.completed_tasks.saturating_add(1);
    }

    pub fn increment_approved_wishes(&mut self) {
        self.approved_wishes = self.approved_wishes.saturating_add(1);
    }

    /// Level is a step function of points: 1 below 50, then 2, 3 and 4 at 50, 75 and 100.
    pub fn level(&self) -> i64 {
        match self.points {
            p if p >= 100 => 4,
            p if p >= 75 => 3,
            p if p >= 50 => 2,
            _ => 1,
        }
    }

    /// Mean of all ratings, 0.0 when there are none.
    pub fn average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        let sum: i64 = self.ratings.iter().map(|&r| i64::from(r)).sum();
        sum as f64 / self.ratings.len() as f64
    }

    /// The value each achievement type is measured against.
    pub fn progress(&self, kind: AchievementType) -> i64 {
        match kind {
            AchievementType::TaskCompletion => i64::from(self.completed_tasks),
            AchievementType::PointsEarned => self.points,
            AchievementType::RatingEarned => self.average_rating().round() as i64,
            AchievementType::LevelReached => self.level(),
            AchievementType::WishApproved => i64::from(self.approved_wishes),
        }
    }

    /// Evaluate every achievement type against current progress and return
    /// what unlocked, in type order.
    pub fn check_achievements(&self, achievements: &mut AchievementStore) -> Result<Vec<Achievement>> {
        let mut unlocked = Vec::new();
        for kind in AchievementType::ALL {
            unlocked.extend(achievements.check(kind, self.progress(kind))?);
        }
        Ok(unlocked)
    }
}
