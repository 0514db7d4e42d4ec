//! Quote-aware field splitting.
//!
//! Fields are separated by ASCII spaces that are not inside a double-quoted
//! span. Quote characters are removed from the resulting fields; there is no
//! escape syntax. The tokenizer never fails: an unbalanced quote simply runs
//! to the end of the line.

/// Split a line into fields, keeping double-quoted spans together.
///
/// Runs of unquoted spaces do not produce empty fields, but an explicit `""`
/// yields one empty field. An empty line yields no fields.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            ' ' if !in_quotes => {
                if !current.is_empty() || quoted {
                    fields.push(std::mem::take(&mut current));
                }
                quoted = false;
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() || quoted {
        fields.push(current);
    }

    fields
}

/// Split on single ASCII spaces with no quote handling.
///
/// Used by the persisted task format, which has always been read this way:
/// quoted titles containing spaces spill across several fields.
pub fn split_raw(line: &str) -> Vec<&str> {
    line.split(' ').collect()
}
