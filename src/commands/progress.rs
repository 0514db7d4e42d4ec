//! Budget, status, reminder and achievement commands.

use super::{Interpreter, parse_number, required};
use crate::error::{Error, Result};
use crate::format::{achievement_line, achievements_report, child_status, reminders_report};
use crate::reminders::{task_reminders, wish_reminders};

pub(super) fn add_budget_coin(interp: &mut Interpreter, args: &[&str]) -> Result<String> {
    let amount: i64 = parse_number(args[0], "amount", required(args, 1, "amount")?)?;
    let total = interp.child.add_points(amount).ok_or_else(|| {
        Error::invalid_argument(
            args[0],
            format!("adding {} would overflow the budget of {}", amount, interp.child.points),
        )
    })?;
    Ok(format!(
        "Added {} points to budget. Current Budget: {} points",
        amount, total
    ))
}

pub(super) fn print_budget(interp: &Interpreter) -> Result<String> {
    Ok(format!("Current Budget: {} points", interp.child.points))
}

pub(super) fn print_status(interp: &Interpreter) -> Result<String> {
    Ok(child_status(&interp.child))
}

/// `SHOW_REMINDERS [days]`. An unparseable threshold falls back to the default.
pub(super) fn show_reminders(interp: &Interpreter, args: &[&str]) -> Result<String> {
    let mut out = String::new();
    let days = match args.get(1) {
        None => interp.reminder_days,
        Some(raw) => match raw.parse::<i64>() {
            Ok(days) => days,
            Err(_) => {
                out.push_str(&format!(
                    "Invalid days threshold, using default of {} days.\n",
                    interp.reminder_days
                ));
                interp.reminder_days
            }
        },
    };

    let now = (interp.clock)();
    let tasks = task_reminders(&interp.tasks.all(), now, days);
    let wishes = wish_reminders(&interp.wishes.all(), now, days);
    out.push_str(&reminders_report(&tasks, &wishes));
    Ok(out)
}

pub(super) fn show_achievements(interp: &Interpreter) -> Result<String> {
    Ok(achievements_report(&interp.achievements.all()))
}

pub(super) fn check_achievements(interp: &mut Interpreter) -> Result<String> {
    let unlocked = interp.child.check_achievements(&mut interp.achievements)?;
    if unlocked.is_empty() {
        return Ok("No new achievements unlocked.".to_string());
    }
    let mut out = String::from("New achievements unlocked:");
    for achievement in &unlocked {
        out.push_str("\n- ");
        out.push_str(&achievement_line(achievement));
    }
    Ok(out)
}
