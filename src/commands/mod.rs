//! Command interpreter.
//!
//! One command per line. The first whitespace-separated word selects the
//! handler; `ADD_TASK*` and `ADD_WISH*` re-split the whole line with the
//! quote-aware tokenizer, every other command splits on whitespace.

mod progress;
mod tasks;
mod wishes;

use crate::child::Child;
use crate::error::{Error, Result};
use crate::store::{AchievementStore, TaskStore, WishStore};
use chrono::NaiveDateTime;
use std::str::FromStr;
use tracing::debug;

/// Every keyword the interpreter understands.
pub const KEYWORDS: [&str; 17] = [
    "ADD_TASK1",
    "ADD_TASK2",
    "LIST_ALL_TASKS",
    "LIST_TASKS_BY_CATEGORY",
    "LIST_TASKS_BY_PRIORITY",
    "LIST_ALL_WISHES",
    "TASK_DONE",
    "TASK_CHECKED",
    "ADD_WISH1",
    "ADD_WISH2",
    "ADD_BUDGET_COIN",
    "WISH_CHECKED",
    "PRINT_BUDGET",
    "PRINT_STATUS",
    "SHOW_REMINDERS",
    "SHOW_ACHIEVEMENTS",
    "CHECK_ACHIEVEMENTS",
];

type Clock = Box<dyn Fn() -> NaiveDateTime>;

/// Owns the three stores and the child for one run.
pub struct Interpreter {
    tasks: TaskStore,
    wishes: WishStore,
    achievements: AchievementStore,
    child: Child,
    reminder_days: i64,
    clock: Clock,
}

impl Interpreter {
    pub fn new(
        tasks: TaskStore,
        wishes: WishStore,
        achievements: AchievementStore,
        reminder_days: i64,
    ) -> Self {
        Self {
            tasks,
            wishes,
            achievements,
            child: Child::new(),
            reminder_days,
            clock: Box::new(|| chrono::Local::now().naive_local()),
        }
    }

    /// Replace the wall clock used for reminders.
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> NaiveDateTime + 'static,
    {
        self.clock = Box::new(clock);
        self
    }

    pub fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    pub fn wishes(&self) -> &WishStore {
        &self.wishes
    }

    pub fn achievements(&self) -> &AchievementStore {
        &self.achievements
    }

    pub fn child(&self) -> &Child {
        &self.child
    }

    /// Run one command line and return its printable output.
    ///
    /// Blank lines yield `Ok(None)`. Errors are scoped to this line; the
    /// interpreter stays usable for the next one.
    pub fn execute(&mut self, line: &str) -> Result<Option<String>> {
        if line.trim().is_empty() {
            debug!("Skipping blank command line");
            return Ok(None);
        }
        // Single spaces only, the same separator `tokenize` uses.
        let args: Vec<&str> = line.split(' ').filter(|s| !s.is_empty()).collect();
        let Some(&keyword) = args.first() else {
            return Ok(None);
        };
        debug!(keyword, "Executing command");

        let output = match keyword {
            // Tasks
            "ADD_TASK1" | "ADD_TASK2" => tasks::add(self, keyword, line),
            "LIST_ALL_TASKS" => tasks::list_all(self, &args),
            "LIST_TASKS_BY_CATEGORY" => tasks::list_by_category(self, &args),
            "LIST_TASKS_BY_PRIORITY" => tasks::list_by_priority(self, &args),
            "TASK_DONE" => tasks::done(self, &args),
            "TASK_CHECKED" => tasks::checked(self, &args),

            // Wishes
            "ADD_WISH1" | "ADD_WISH2" => wishes::add(self, keyword, line),
            "LIST_ALL_WISHES" => wishes::list_all(self),
            "WISH_CHECKED" => wishes::checked(self, &args),

            // Budget, status and achievements
            "ADD_BUDGET_COIN" => progress::add_budget_coin(self, &args),
            "PRINT_BUDGET" => progress::print_budget(self),
            "PRINT_STATUS" => progress::print_status(self),
            "SHOW_REMINDERS" => progress::show_reminders(self, &args),
            "SHOW_ACHIEVEMENTS" => progress::show_achievements(self),
            "CHECK_ACHIEVEMENTS" => progress::check_achievements(self),

            _ => Err(Error::UnknownCommand(keyword.to_string())),
        }?;
        Ok(Some(output))
    }
}

/// Positional argument `index`, or an `InvalidArgument` naming `what`.
fn required<'a>(args: &[&'a str], index: usize, what: &str) -> Result<&'a str> {
    args.get(index)
        .copied()
        .ok_or_else(|| Error::invalid_argument(args[0], format!("missing {}", what)))
}

/// Parse a numeric argument, reporting the raw text on failure.
fn parse_number<T: FromStr>(command: &str, what: &str, raw: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| Error::invalid_argument(command, format!("invalid {} '{}'", what, raw)))
}
