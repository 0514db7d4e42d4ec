//! Wish line codec.
//!
//! Both grammars use the quote-aware tokenizer:
//! ```text
//! WISH1 <id> "<title>" "<desc>" [LEVEL <n>]
//! WISH2 <id> "<title>" "<desc>" <date> <time> <date> <time> [LEVEL <n>]
//! ADD_WISH1 <id> "<title>" "<desc>"
//! ADD_WISH2 <id> "<title>" "<desc>" <date> <time> <date> <time>
//! ```
//! A `LEVEL` pair is only written for approved wishes and marks the wish as
//! approved again when read back.

use super::timestamp::{format_pair, parse_pair};
use super::tokenizer::tokenize;
use crate::error::{Error, Result};
use crate::types::{TimeWindow, Wish};

const KIND: &str = "wish";

/// Whether a wish line carries a time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishShape {
    /// `WISH1` / `ADD_WISH1`: no timing.
    Untimed,
    /// `WISH2` / `ADD_WISH2`: start and end timestamps.
    Timed,
}

impl WishShape {
    pub fn file_tag(&self) -> &'static str {
        match self {
            WishShape::Untimed => "WISH1",
            WishShape::Timed => "WISH2",
        }
    }

    pub fn command_keyword(&self) -> &'static str {
        match self {
            WishShape::Untimed => "ADD_WISH1",
            WishShape::Timed => "ADD_WISH2",
        }
    }

    fn fixed_fields(&self) -> usize {
        match self {
            WishShape::Untimed => 4,
            WishShape::Timed => 8,
        }
    }

    fn from_file_tag(tag: &str) -> Option<Self> {
        match tag {
            "WISH1" => Some(WishShape::Untimed),
            "WISH2" => Some(WishShape::Timed),
            _ => None,
        }
    }
}

/// Decode one line of the persisted wish file.
pub fn decode_file_line(line: &str) -> Result<Wish> {
    let fields = tokenize(line);
    let tag = fields.first().map(String::as_str).unwrap_or("");
    let shape = WishShape::from_file_tag(tag)
        .ok_or_else(|| Error::malformed(KIND, format!("unknown record tag '{}'", tag)))?;

    let mut wish = decode_fields(shape, &fields)?;
    if let Some(level) = scan_level(&fields[shape.fixed_fields()..])? {
        wish.approved = true;
        wish.required_level = level;
    }
    Ok(wish)
}

/// Decode the tokenized fields of an `ADD_WISH1`/`ADD_WISH2` command.
///
/// `fields[0]` is the command keyword itself; trailing fields are ignored.
pub fn decode_command(shape: WishShape, fields: &[String]) -> Result<Wish> {
    decode_fields(shape, fields)
}

/// Encode a wish as a persisted file line.
pub fn encode(wish: &Wish) -> String {
    let shape = if wish.window.is_some() {
        WishShape::Timed
    } else {
        WishShape::Untimed
    };
    let mut line = format!(
        "{} {} \"{}\" \"{}\"",
        shape.file_tag(),
        wish.id,
        wish.title,
        wish.description
    );

    if let Some(window) = &wish.window {
        let (start_date, start_time) = format_pair(&window.start);
        let (end_date, end_time) = format_pair(&window.end);
        line.push_str(&format!(" {} {} {} {}", start_date, start_time, end_date, end_time));
    }

    if wish.approved {
        line.push_str(&format!(" LEVEL {}", wish.required_level));
    }

    line
}

fn decode_fields(shape: WishShape, fields: &[String]) -> Result<Wish> {
    if fields.len() < shape.fixed_fields() {
        return Err(Error::malformed(
            KIND,
            format!(
                "{} needs at least {} fields, found {}",
                shape.file_tag(),
                shape.fixed_fields(),
                fields.len()
            ),
        ));
    }

    let window = match shape {
        WishShape::Untimed => None,
        WishShape::Timed => {
            let start = parse_pair(&fields[4], &fields[5]).map_err(|e| Error::malformed(KIND, e))?;
            let end = parse_pair(&fields[6], &fields[7]).map_err(|e| Error::malformed(KIND, e))?;
            Some(TimeWindow { start, end })
        }
    };

    Ok(Wish::new(
        fields[1].as_str(),
        fields[2].as_str(),
        fields[3].as_str(),
        window,
    ))
}

fn scan_level(trailing: &[String]) -> Result<Option<u32>> {
    let mut level = None;
    for pair in trailing.windows(2) {
        if pair[0] == "LEVEL" {
            let value = pair[1]
                .parse::<u32>()
                .map_err(|_| Error::malformed(KIND, format!("invalid level '{}'", pair[1])))?;
            level = Some(value);
        }
    }
    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::NaiveDateTime;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn window() -> TimeWindow {
        TimeWindow {
            start: at("2025-07-01 10:00"),
            end: at("2025-07-01 16:30"),
        }
    }

    #[test]
    fn decodes_spaced_title_from_file() {
        let wish = decode_file_line(r#"WISH1 W1 "Go to the park" "A fun day out""#).unwrap();
        assert_eq!(wish.id, "W1");
        assert_eq!(wish.title, "Go to the park");
        assert_eq!(wish.description, "A fun day out");
        assert_eq!(wish.window, None);
        assert!(!wish.approved);
    }

    #[test]
    fn level_tag_restores_approval() {
        let wish = decode_file_line(
            r#"WISH2 W2 "Cinema" "New movie" 2025-07-01 10:00 2025-07-01 16:30 LEVEL 3"#,
        )
        .unwrap();
        assert_eq!(wish.window, Some(window()));
        assert!(wish.approved);
        assert_eq!(wish.required_level, 3);
    }

    #[test]
    fn quoted_level_title_is_not_a_tag() {
        let wish = decode_file_line(r#"WISH1 W3 "LEVEL" "5""#).unwrap();
        assert_eq!(wish.title, "LEVEL");
        assert!(!wish.approved);
    }

    #[test]
    fn rejects_malformed_lines() {
        let cases = [
            r#"WISH3 W1 "a" "b""#,
            r#"WISH1 W1 "a""#,
            r#"WISH2 W1 "a" "b" 2025-07-01 10:00"#,
            r#"WISH2 W1 "a" "b" 2025-07-01 10:00 2025-07-01 noon"#,
            r#"WISH1 W1 "a" "b" LEVEL high"#,
            "",
        ];
        for line in cases {
            let err = decode_file_line(line).unwrap_err();
            assert_eq!(err.code(), ErrorCode::MalformedRecord, "line: {line}");
        }
    }

    #[test]
    fn command_decode_ignores_trailing_fields() {
        let fields = tokenize(r#"ADD_WISH1 W4 "Ice cream" "Chocolate" LEVEL 2"#);
        let wish = decode_command(WishShape::Untimed, &fields).unwrap();
        assert_eq!(wish.title, "Ice cream");
        assert!(!wish.approved);
    }

    #[test]
    fn encode_writes_level_only_when_approved() {
        let mut wish = Wish::new("W1", "Bike", "Red one", None);
        assert_eq!(encode(&wish), r#"WISH1 W1 "Bike" "Red one""#);

        wish.approved = true;
        wish.required_level = 2;
        assert_eq!(encode(&wish), r#"WISH1 W1 "Bike" "Red one" LEVEL 2"#);
    }

    #[test]
    fn file_shape_round_trips() {
        for timing in [None, Some(window())] {
            for approved in [false, true] {
                let mut wish = Wish::new("W5", "Zoo trip", "See the lions", timing);
                if approved {
                    wish.approved = true;
                    wish.required_level = 4;
                }
                assert_eq!(decode_file_line(&encode(&wish)).unwrap(), wish);
            }
        }
    }
}
