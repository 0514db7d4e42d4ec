//! Task line codec.
//!
//! Two input grammars exist and are deliberately kept apart.
//!
//! Persisted file line, split on raw spaces (not quote-aware):
//! ```text
//! TASK1 <by> <id> "<title>" "<desc>" <date> <time> CATEGORY <c> PRIORITY <p> POINT <n>
//! TASK2 <by> <id> "<title>" "<desc>" <date> <time> <date> <time> CATEGORY <c> PRIORITY <p> POINT <n>
//! ```
//! The point value is always the last field, and `CATEGORY`/`PRIORITY` pairs
//! are picked up wherever they appear on the line.
//!
//! Command line, split with the quote-aware tokenizer:
//! ```text
//! ADD_TASK1 <by> <id> "<title>" "<desc>" <date> <time> <points> [CATEGORY <c>] [PRIORITY <p>]
//! ADD_TASK2 <by> <id> "<title>" "<desc>" <date> <time> <date> <time> <points> [CATEGORY <c>] [PRIORITY <p>]
//! ```
//! Here the point value is positional and tags are only read after it.

use super::timestamp::{format_pair, parse_pair};
use super::tokenizer::split_raw;
use crate::error::{Error, Result};
use crate::types::{Schedule, Task, TaskCategory, TaskPriority, TimeWindow};

const KIND: &str = "task";

/// Which timing shape a task line carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskShape {
    /// `TASK1` / `ADD_TASK1`: a single deadline.
    Deadline,
    /// `TASK2` / `ADD_TASK2`: a start and an end.
    Window,
}

impl TaskShape {
    pub fn file_tag(&self) -> &'static str {
        match self {
            TaskShape::Deadline => "TASK1",
            TaskShape::Window => "TASK2",
        }
    }

    pub fn command_keyword(&self) -> &'static str {
        match self {
            TaskShape::Deadline => "ADD_TASK1",
            TaskShape::Window => "ADD_TASK2",
        }
    }

    /// Number of fields up to and including the last time field.
    fn fixed_fields(&self) -> usize {
        match self {
            TaskShape::Deadline => 7,
            TaskShape::Window => 9,
        }
    }

    fn from_file_tag(tag: &str) -> Option<Self> {
        match tag {
            "TASK1" => Some(TaskShape::Deadline),
            "TASK2" => Some(TaskShape::Window),
            _ => None,
        }
    }

    fn of(task: &Task) -> Self {
        match task.schedule {
            Schedule::Deadline(_) => TaskShape::Deadline,
            Schedule::Window(_) => TaskShape::Window,
        }
    }
}

/// Decode one line of the persisted task file.
pub fn decode_file_line(line: &str) -> Result<Task> {
    let parts = split_raw(line);
    let shape = TaskShape::from_file_tag(parts[0])
        .ok_or_else(|| Error::malformed(KIND, format!("unknown record tag '{}'", parts[0])))?;
    require_fields(shape, &parts, shape.fixed_fields() + 1)?;

    let points = parse_points(parts[parts.len() - 1])?;
    let (category, priority) = scan_tags(&parts);
    let schedule = parse_schedule(shape, &parts[5..])?;

    Ok(Task::new(
        parts[2],
        parts[1],
        parts[3].replace('"', ""),
        parts[4].replace('"', ""),
        schedule,
        points,
    )
    .with_category(category)
    .with_priority(priority))
}

/// Decode the tokenized fields of an `ADD_TASK1`/`ADD_TASK2` command.
///
/// `fields[0]` is the command keyword itself.
pub fn decode_command(shape: TaskShape, fields: &[String]) -> Result<Task> {
    let fixed = shape.fixed_fields();
    require_fields(shape, fields, fixed + 1)?;

    let points = parse_points(&fields[fixed])?;
    let (category, priority) = scan_tags(&fields[fixed + 1..]);
    let schedule = parse_schedule(shape, &fields[5..])?;

    Ok(Task::new(
        fields[2].as_str(),
        fields[1].as_str(),
        fields[3].as_str(),
        fields[4].as_str(),
        schedule,
        points,
    )
    .with_category(category)
    .with_priority(priority))
}

/// Encode a task as a persisted file line.
pub fn encode(task: &Task) -> String {
    let timing = match &task.schedule {
        Schedule::Deadline(at) => {
            let (date, time) = format_pair(at);
            format!("{} {}", date, time)
        }
        Schedule::Window(window) => {
            let (start_date, start_time) = format_pair(&window.start);
            let (end_date, end_time) = format_pair(&window.end);
            format!("{} {} {} {}", start_date, start_time, end_date, end_time)
        }
    };

    format!(
        "{} {} {} \"{}\" \"{}\" {} CATEGORY {} PRIORITY {} POINT {}",
        TaskShape::of(task).file_tag(),
        task.assigned_by,
        task.id,
        task.title,
        task.description,
        timing,
        task.category.as_str(),
        task.priority.as_str(),
        task.points
    )
}

fn require_fields<S: AsRef<str>>(shape: TaskShape, fields: &[S], min: usize) -> Result<()> {
    if fields.len() < min {
        return Err(Error::malformed(
            KIND,
            format!(
                "{} needs at least {} fields, found {}",
                shape.file_tag(),
                min,
                fields.len()
            ),
        ));
    }
    Ok(())
}

fn parse_points(field: &str) -> Result<u32> {
    field
        .parse::<u32>()
        .map_err(|_| Error::malformed(KIND, format!("invalid point value '{}'", field)))
}

/// Parse the timing fields; `fields` starts at the first date.
fn parse_schedule<S: AsRef<str>>(shape: TaskShape, fields: &[S]) -> Result<Schedule> {
    let pair = |i: usize| {
        parse_pair(fields[i].as_ref(), fields[i + 1].as_ref()).map_err(|e| Error::malformed(KIND, e))
    };
    match shape {
        TaskShape::Deadline => Ok(Schedule::Deadline(pair(0)?)),
        TaskShape::Window => Ok(Schedule::Window(TimeWindow {
            start: pair(0)?,
            end: pair(2)?,
        })),
    }
}

/// Pick up `CATEGORY <name>` and `PRIORITY <name>` pairs; the last one wins.
fn scan_tags<S: AsRef<str>>(fields: &[S]) -> (TaskCategory, TaskPriority) {
    let mut category = TaskCategory::default();
    let mut priority = TaskPriority::default();
    for pair in fields.windows(2) {
        match pair[0].as_ref() {
            "CATEGORY" => category = TaskCategory::from_name(pair[1].as_ref()),
            "PRIORITY" => priority = TaskPriority::from_name(pair[1].as_ref()),
            _ => {}
        }
    }
    (category, priority)
}
