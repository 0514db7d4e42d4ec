//! Core record types for the tracker.

use chrono::NaiveDateTime;

/// Subject area of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskCategory {
    Homework,
    Chore,
    Study,
    Reading,
    Exercise,
    Other,
}

impl TaskCategory {
    pub const ALL: [TaskCategory; 6] = [
        TaskCategory::Homework,
        TaskCategory::Chore,
        TaskCategory::Study,
        TaskCategory::Reading,
        TaskCategory::Exercise,
        TaskCategory::Other,
    ];

    /// Canonical name as written to the task file.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::Homework => "HOMEWORK",
            TaskCategory::Chore => "CHORE",
            TaskCategory::Study => "STUDY",
            TaskCategory::Reading => "READING",
            TaskCategory::Exercise => "EXERCISE",
            TaskCategory::Other => "OTHER",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TaskCategory::Homework => "Homework",
            TaskCategory::Chore => "Chore",
            TaskCategory::Study => "Study",
            TaskCategory::Reading => "Reading",
            TaskCategory::Exercise => "Exercise",
            TaskCategory::Other => "Other",
        }
    }

    /// Case-insensitive lookup by canonical or display name.
    /// Returns `Other` for empty or unrecognized input.
    pub fn from_name(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s) || c.display_name().eq_ignore_ascii_case(s))
            .unwrap_or_default()
    }
}

impl Default for TaskCategory {
    fn default() -> Self {
        TaskCategory::Other
    }
}

/// Urgency of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [TaskPriority::High, TaskPriority::Medium, TaskPriority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::High => "HIGH",
            TaskPriority::Medium => "MEDIUM",
            TaskPriority::Low => "LOW",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TaskPriority::High => "High",
            TaskPriority::Medium => "Medium",
            TaskPriority::Low => "Low",
        }
    }

    /// Case-insensitive lookup by canonical or display name.
    /// Returns `Medium` for empty or unrecognized input.
    pub fn from_name(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s) || p.display_name().eq_ignore_ascii_case(s))
            .unwrap_or_default()
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::Medium
    }
}

/// What an achievement measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementType {
    TaskCompletion,
    PointsEarned,
    RatingEarned,
    LevelReached,
    WishApproved,
}

impl AchievementType {
    pub const ALL: [AchievementType; 5] = [
        AchievementType::TaskCompletion,
        AchievementType::PointsEarned,
        AchievementType::RatingEarned,
        AchievementType::LevelReached,
        AchievementType::WishApproved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementType::TaskCompletion => "TASK_COMPLETION",
            AchievementType::PointsEarned => "POINTS_EARNED",
            AchievementType::RatingEarned => "RATING_EARNED",
            AchievementType::LevelReached => "LEVEL_REACHED",
            AchievementType::WishApproved => "WISH_APPROVED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AchievementType::TaskCompletion => "Task Completion",
            AchievementType::PointsEarned => "Points Earned",
            AchievementType::RatingEarned => "Rating Earned",
            AchievementType::LevelReached => "Level Reached",
            AchievementType::WishApproved => "Wish Approved",
        }
    }

    /// Case-insensitive lookup by canonical or display name.
    ///
    /// Unlike categories and priorities there is no fallback: the persisted
    /// type decides which counter unlocks the achievement.
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s) || t.display_name().eq_ignore_ascii_case(s))
    }
}

/// A start/end pair of local timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Timing of a task: either a single deadline or a start/end window, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    Deadline(NaiveDateTime),
    Window(TimeWindow),
}

/// A task assigned to the child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    /// Origin marker: `T` for teacher, `F` for family.
    pub assigned_by: String,
    pub title: String,
    pub description: String,
    pub schedule: Schedule,
    pub points: u32,
    pub completed: bool,
    pub approved: bool,
    /// Meaningful only once approved.
    pub rating: i32,
    pub category: TaskCategory,
    pub priority: TaskPriority,
}

impl Task {
    /// Creates a pending task with the default category and priority.
    pub fn new(
        id: impl Into<String>,
        assigned_by: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        schedule: Schedule,
        points: u32,
    ) -> Self {
        Self {
            id: id.into(),
            assigned_by: assigned_by.into(),
            title: title.into(),
            description: description.into(),
            schedule,
            points,
            completed: false,
            approved: false,
            rating: 0,
            category: TaskCategory::default(),
            priority: TaskPriority::default(),
        }
    }

    pub fn with_category(mut self, category: TaskCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn deadline(&self) -> Option<NaiveDateTime> {
        match self.schedule {
            Schedule::Deadline(at) => Some(at),
            Schedule::Window(_) => None,
        }
    }
}

/// Something the child wishes for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wish {
    pub id: String,
    pub title: String,
    pub description: String,
    pub window: Option<TimeWindow>,
    pub approved: bool,
    /// Meaningful only once approved.
    pub required_level: u32,
}

impl Wish {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        window: Option<TimeWindow>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            window,
            approved: false,
            required_level: 0,
        }
    }
}

/// A milestone unlocked once a counter reaches its threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub kind: AchievementType,
    pub threshold: i64,
    pub unlocked: bool,
}

impl Achievement {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        kind: AchievementType,
        threshold: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            kind,
            threshold,
            unlocked: false,
        }
    }

    /// Unlocks the achievement when `value` reaches the threshold.
    ///
    /// Returns true only on the call that performs the unlock; the flag never
    /// reverts, so every later call returns false.
    pub fn check_and_unlock(&mut self, value: i64) -> bool {
        if !self.unlocked && value >= self.threshold {
            self.unlocked = true;
            return true;
        }
        false
    }
}
