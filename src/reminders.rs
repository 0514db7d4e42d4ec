//! Deadline and expiry reminders.

use crate::codec::timestamp::format_display;
use crate::types::{Task, TaskPriority, Wish};
use chrono::NaiveDateTime;

/// Whole days from `now` until `at`, truncated toward zero.
fn days_between(now: NaiveDateTime, at: NaiveDateTime) -> i64 {
    (at - now).num_days()
}

/// Reminders for open tasks with a single deadline.
///
/// Completed or approved tasks and tasks with a start/end window are ignored.
/// Tasks due within `days` get a reminder; tasks past due get an overdue alert.
pub fn task_reminders(tasks: &[Task], now: NaiveDateTime, days: i64) -> Vec<String> {
    let mut reminders = Vec::new();
    for task in tasks {
        if task.completed || task.approved {
            continue;
        }
        let Some(deadline) = task.deadline() else {
            continue;
        };

        let until = days_between(now, deadline);
        if (0..=days).contains(&until) {
            let mut reminder = format!(
                "REMINDER: Task '{}' (ID: {}) is due in {} days (on {}).",
                task.title,
                task.id,
                until,
                format_display(&deadline)
            );
            if task.priority == TaskPriority::High {
                reminder.push_str(" This is a HIGH priority task!");
            }
            reminders.push(reminder);
        } else if until < 0 {
            reminders.push(format!(
                "ALERT: Task '{}' (ID: {}) is OVERDUE by {} days (was due on {})!",
                task.title,
                task.id,
                until.abs(),
                format_display(&deadline)
            ));
        }
    }
    reminders
}

/// Reminders for unapproved wishes whose window ends within `days`.
pub fn wish_reminders(wishes: &[Wish], now: NaiveDateTime, days: i64) -> Vec<String> {
    wishes
        .iter()
        .filter(|wish| !wish.approved)
        .filter_map(|wish| {
            let end = wish.window?.end;
            let until = days_between(now, end);
            (0..=days).contains(&until).then(|| {
                format!(
                    "REMINDER: Wish '{}' (ID: {}) will expire in {} days (on {}).",
                    wish.title,
                    wish.id,
                    until,
                    format_display(&end)
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Schedule, TimeWindow};

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn task(id: &str, due: &str) -> Task {
        Task::new(id, "T", "Essay", "History", Schedule::Deadline(at(due)), 10)
    }

    #[test]
    fn upcoming_overdue_and_out_of_range_tasks() {
        let now = at("2025-05-01 12:00");
        let mut urgent = task("T2", "2025-05-02 12:00");
        urgent.priority = TaskPriority::High;
        let mut done = task("T4", "2025-05-02 12:00");
        done.completed = true;
        let tasks = vec![
            task("T1", "2025-05-04 13:00"),
            urgent,
            task("T3", "2025-04-28 11:00"),
            done,
            task("T5", "2025-06-01 12:00"),
        ];

        let reminders = task_reminders(&tasks, now, 7);
        assert_eq!(reminders.len(), 3);
        assert_eq!(
            reminders[0],
            "REMINDER: Task 'Essay' (ID: T1) is due in 3 days (on 2025-05-04 13:00)."
        );
        assert!(reminders[1].ends_with("This is a HIGH priority task!"));
        assert_eq!(
            reminders[2],
            "ALERT: Task 'Essay' (ID: T3) is OVERDUE by 3 days (was due on 2025-04-28 11:00)!"
        );
    }

    #[test]
    fn window_tasks_never_remind() {
        let window = Schedule::Window(TimeWindow {
            start: at("2025-05-01 09:00"),
            end: at("2025-05-01 10:00"),
        });
        let tasks = vec![Task::new("T1", "F", "Swim", "Pool", window, 5)];
        assert!(task_reminders(&tasks, at("2025-05-01 08:00"), 7).is_empty());
    }

    #[test]
    fn expiring_wishes() {
        let now = at("2025-05-01 12:00");
        let window = |end: &str| {
            Some(TimeWindow {
                start: at("2025-04-01 00:00"),
                end: at(end),
            })
        };
        let mut approved = Wish::new("W3", "Zoo", "Lions", window("2025-05-02 12:00"));
        approved.approved = true;
        let wishes = vec![
            Wish::new("W1", "Cinema", "Movie", window("2025-05-03 12:00")),
            Wish::new("W2", "Park", "Picnic", None),
            approved,
            Wish::new("W4", "Beach", "Sand", window("2025-04-30 12:00")),
        ];

        let reminders = wish_reminders(&wishes, now, 7);
        assert_eq!(
            reminders,
            vec!["REMINDER: Wish 'Cinema' (ID: W1) will expire in 2 days (on 2025-05-03 12:00)."]
        );
    }
}
