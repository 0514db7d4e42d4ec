//! Task store operations.

use super::{Record, Store};
use crate::codec::task;
use crate::error::Result;
use crate::types::{Task, TaskCategory, TaskPriority};

pub type TaskStore = Store<Task>;

impl Record for Task {
    const KIND: &'static str = "task";

    fn id(&self) -> &str {
        &self.id
    }

    fn decode_line(line: &str) -> Result<Self> {
        task::decode_file_line(line)
    }

    fn encode_line(&self) -> String {
        task::encode(self)
    }
}

impl Store<Task> {
    /// Mark a task as completed. Returns false when the id is unknown.
    pub fn complete(&mut self, id: &str) -> Result<bool> {
        self.update(id, |task| task.completed = true)
    }

    /// Approve a task with a parent/teacher rating. Returns false when the id is unknown.
    pub fn approve(&mut self, id: &str, rating: i32) -> Result<bool> {
        self.update(id, |task| {
            task.approved = true;
            task.rating = rating;
        })
    }

    pub fn by_category(&self, category: TaskCategory) -> Vec<Task> {
        self.query(|task| task.category == category)
    }

    pub fn by_priority(&self, priority: TaskPriority) -> Vec<Task> {
        self.query(|task| task.priority == priority)
    }

    /// Point value of the first task with `id`, or 0 when there is none.
    pub fn points_for(&self, id: &str) -> u32 {
        self.get(id).map(|task| task.points).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Schedule;
    use chrono::NaiveDateTime;
    use tempfile::TempDir;

    fn sample(id: &str, category: TaskCategory, priority: TaskPriority) -> Task {
        let at = NaiveDateTime::parse_from_str("2025-03-10 15:00", "%Y-%m-%d %H:%M").unwrap();
        Task::new(id, "T", "Math", "Worksheet", Schedule::Deadline(at), 10)
            .with_category(category)
            .with_priority(priority)
    }

    #[test]
    fn filters_by_category_and_priority_in_order() {
        let temp = TempDir::new().unwrap();
        let mut store = TaskStore::open(temp.path().join("Task.txt"));
        store.add(sample("T1", TaskCategory::Homework, TaskPriority::High)).unwrap();
        store.add(sample("T2", TaskCategory::Chore, TaskPriority::High)).unwrap();
        store.add(sample("T3", TaskCategory::Homework, TaskPriority::Low)).unwrap();

        let homework: Vec<String> = store.by_category(TaskCategory::Homework).into_iter().map(|t| t.id).collect();
        assert_eq!(homework, vec!["T1", "T3"]);
        let high: Vec<String> = store.by_priority(TaskPriority::High).into_iter().map(|t| t.id).collect();
        assert_eq!(high, vec!["T1", "T2"]);
        assert!(store.by_category(TaskCategory::Exercise).is_empty());
    }

    #[test]
    fn approve_sets_rating_on_first_match() {
        let temp = TempDir::new().unwrap();
        let mut store = TaskStore::open(temp.path().join("Task.txt"));
        store.add(sample("T1", TaskCategory::Other, TaskPriority::Medium)).unwrap();
        store.add(sample("T1", TaskCategory::Other, TaskPriority::Medium)).unwrap();

        assert!(store.approve("T1", 4).unwrap());
        let all = store.all();
        assert!(all[0].approved);
        assert_eq!(all[0].rating, 4);
        assert!(!all[1].approved);

        assert!(!store.complete("missing").unwrap());
        assert_eq!(store.points_for("T1"), 10);
        assert_eq!(store.points_for("missing"), 0);
    }
}
