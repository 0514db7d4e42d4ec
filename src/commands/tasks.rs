use super::{Interpreter, parse_number, required};
use crate::codec::task::{self, TaskShape};
use crate::codec::tokenize;
use crate::error::{Error, Result};
use crate::format::task_line;
use crate::types::{Task, TaskCategory, TaskPriority};
use tracing::{info, warn};

pub(super) fn add(interp: &mut Interpreter, keyword: &str, line: &str) -> Result<String> {
    let shape = if keyword == TaskShape::Window.command_keyword() {
        TaskShape::Window
    } else {
        TaskShape::Deadline
    };
    let fields = tokenize(line);
    let task = task::decode_command(shape, &fields)?;
    let summary = task_line(&task);
    interp.tasks.add(task)?;
    Ok(format!("Task added: {}", summary))
}

pub(super) fn list_all(interp: &Interpreter, args: &[&str]) -> Result<String> {
    // D and W pick the heading only; every task is listed either way.
    let heading = match args.get(1).copied() {
        Some("D") => "Daily Tasks:",
        Some("W") => "Weekly Tasks:",
        _ => "All Tasks:",
    };
    Ok(render(heading, &interp.tasks.all()))
}

pub(super) fn list_by_category(interp: &Interpreter, args: &[&str]) -> Result<String> {
    let Some(name) = args.get(1) else {
        return Ok("Usage: LIST_TASKS_BY_CATEGORY <category>".to_string());
    };
    let category = TaskCategory::from_name(name);
    let heading = format!("Tasks in category {}:", category.display_name());
    Ok(render(&heading, &interp.tasks.by_category(category)))
}

pub(super) fn list_by_priority(interp: &Interpreter, args: &[&str]) -> Result<String> {
    let Some(name) = args.get(1) else {
        return Ok("Usage: LIST_TASKS_BY_PRIORITY <priority>".to_string());
    };
    let priority = TaskPriority::from_name(name);
    let heading = format!("Tasks with priority {}:", priority.display_name());
    Ok(render(&heading, &interp.tasks.by_priority(priority)))
}

pub(super) fn done(interp: &mut Interpreter, args: &[&str]) -> Result<String> {
    let id = required(args, 1, "task id")?;
    if interp.tasks.complete(id)? {
        Ok(format!("Task {} marked as completed.", id))
    } else {
        Ok(format!("Task {} not found.", id))
    }
}

/// Approve a task and credit the child with its rating and points.
pub(super) fn checked(interp: &mut Interpreter, args: &[&str]) -> Result<String> {
    let id = required(args, 1, "task id")?;
    let rating: i32 = parse_number(args[0], "rating", required(args, 2, "rating")?)?;

    // A missing task only skips the store update; the child is credited either way.
    let found = interp.tasks.approve(id, rating)?;
    let points = interp.tasks.points_for(id);
    interp.child.add_points(i64::from(points)).ok_or_else(|| {
        Error::invalid_argument(args[0], format!("{} points would overflow the budget", points))
    })?;
    interp.child.add_rating(rating);
    interp.child.increment_completed_tasks();

    if !found {
        warn!(id, rating, "Rating recorded for unknown task");
        return Ok(format!(
            "Task {} not found. Rating {} recorded, 0 points added.",
            id, rating
        ));
    }
    info!(id, rating, points, "Task approved");
    Ok(format!(
        "Task {} approved with rating {}. {} points added.",
        id, rating, points
    ))
}

fn render(heading: &str, tasks: &[Task]) -> String {
    let mut out = String::from(heading);
    if tasks.is_empty() {
        out.push_str("\nNo tasks found.");
    }
    for task in tasks {
        out.push('\n');
        out.push_str(&task_line(task));
    }
    out
}
