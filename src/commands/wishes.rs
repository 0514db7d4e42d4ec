use super::{Interpreter, parse_number, required};
use crate::codec::tokenize;
use crate::codec::wish::{self, WishShape};
use crate::error::{Error, Result};
use crate::format::wish_line;
use tracing::{info, warn};

pub(super) fn add(interp: &mut Interpreter, keyword: &str, line: &str) -> Result<String> {
    let shape = if keyword == WishShape::Timed.command_keyword() {
        WishShape::Timed
    } else {
        WishShape::Untimed
    };
    let fields = tokenize(line);
    let wish = wish::decode_command(shape, &fields)?;
    let summary = wish_line(&wish);
    interp.wishes.add(wish)?;
    Ok(format!("Wish added: {}", summary))
}

pub(super) fn list_all(interp: &Interpreter) -> Result<String> {
    let wishes = interp.wishes.all();
    let mut out = String::from("All Wishes:");
    if wishes.is_empty() {
        out.push_str("\nNo wishes found.");
    }
    for wish in &wishes {
        out.push('\n');
        out.push_str(&wish_line(wish));
    }
    Ok(out)
}

/// `WISH_CHECKED <id> APPROVED <level>` or `WISH_CHECKED <id> REJECTED`.
pub(super) fn checked(interp: &mut Interpreter, args: &[&str]) -> Result<String> {
    let id = required(args, 1, "wish id")?;
    match required(args, 2, "decision")? {
        "APPROVED" => {
            let level: u32 = parse_number(args[0], "level", required(args, 3, "level")?)?;
            let found = interp.wishes.approve(id, level)?;
            interp.child.increment_approved_wishes();
            if !found {
                warn!(id, level, "Approval counted for unknown wish");
                return Ok(format!("Wish {} not found. Approval counted.", id));
            }
            info!(id, level, "Wish approved");
            Ok(format!("Wish {} approved with required level {}.", id, level))
        }
        "REJECTED" => {
            let removed = interp.wishes.reject(id)?;
            if removed == 0 {
                Ok(format!("Wish {} not found.", id))
            } else {
                info!(id, removed, "Wish rejected");
                Ok(format!("Wish {} rejected and removed.", id))
            }
        }
        other => Err(Error::invalid_argument(
            args[0],
            format!("unknown decision '{}', expected APPROVED or REJECTED", other),
        )),
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::Interpreter;
    use crate::error::ErrorCode;
    use crate::store::{AchievementStore, TaskStore, WishStore};
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Interpreter) {
        let temp = TempDir::new().unwrap();
        let interpreter = Interpreter::new(
            TaskStore::open(temp.path().join("Task.txt")),
            WishStore::open(temp.path().join("Wish.txt")),
            AchievementStore::open(temp.path().join("Achievements.txt")),
            7,
        );
        (temp, interpreter)
    }

    fn run(interpreter: &mut Interpreter, line: &str) -> String {
        interpreter.execute(line).unwrap().unwrap()
    }

    #[test]
    fn add_and_list_wishes() {
        let (_temp, mut interp) = setup();
        assert_eq!(
            run(&mut interp, r#"ADD_WISH1 W1 "Go to the park" "A fun day out""#),
            "Wish added: Wish[ID: W1, Title: Go to the park, Status: Pending]"
        );
        run(
            &mut interp,
            r#"ADD_WISH2 W2 "Cinema" "Movie night" 2025-07-01 10:00 2025-07-01 12:00"#,
        );

        let listing = run(&mut interp, "LIST_ALL_WISHES");
        assert!(listing.starts_with("All Wishes:\n"));
        assert!(listing.contains("Time: 2025-07-01 10:00 to 2025-07-01 12:00"));
        assert_eq!(listing.lines().count(), 3);
    }

    #[test]
    fn approve_persists_level_and_counts() {
        let (temp, mut interp) = setup();
        run(&mut interp, r#"ADD_WISH1 W1 "Lego" "Big set""#);

        assert_eq!(
            run(&mut interp, "WISH_CHECKED W1 APPROVED 3"),
            "Wish W1 approved with required level 3."
        );
        assert_eq!(interp.child().approved_wishes, 1);
        let content = fs::read_to_string(temp.path().join("Wish.txt")).unwrap();
        assert!(content.trim_end().ends_with("LEVEL 3"));

        assert_eq!(
            run(&mut interp, "WISH_CHECKED W9 APPROVED 1"),
            "Wish W9 not found. Approval counted."
        );
        assert_eq!(interp.child().approved_wishes, 2);
        assert_eq!(interp.wishes().len(), 1);
    }

    #[test]
    fn reject_removes_every_duplicate() {
        let (_temp, mut interp) = setup();
        run(&mut interp, r#"ADD_WISH1 W1 "Lego" "Big set""#);
        run(&mut interp, r#"ADD_WISH1 W1 "Lego" "Again""#);
        run(&mut interp, r#"ADD_WISH1 W2 "Book" "Comics""#);

        assert_eq!(run(&mut interp, "WISH_CHECKED W1 REJECTED"), "Wish W1 rejected and removed.");
        let ids: Vec<String> = interp.wishes().all().into_iter().map(|w| w.id).collect();
        assert_eq!(ids, vec!["W2"]);
    }

    #[test]
    fn bad_decisions_and_levels() {
        let (_temp, mut interp) = setup();
        run(&mut interp, r#"ADD_WISH1 W1 "Lego" "Big set""#);

        let err = interp.execute("WISH_CHECKED W1 MAYBE").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
        let err = interp.execute("WISH_CHECKED W1 APPROVED high").unwrap_err();
        assert_eq!(err.to_string(), "WISH_CHECKED: invalid level 'high'");
        let err = interp.execute("WISH_CHECKED W1 APPROVED").unwrap_err();
        assert_eq!(err.to_string(), "WISH_CHECKED: missing level");
        assert!(!interp.wishes().get("W1").unwrap().approved);
    }
}
