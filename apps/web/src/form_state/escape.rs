//! Pipe-joined list encoding.
//!
//! Items are joined on `|`. A literal `|` or `\` inside an item is written as
//! `\|` or `\\`, so item text never collides with the separator.

const SEPARATOR: char = '|';
const ESCAPE: char = '\\';

pub fn join_list(items: &[String]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        for c in item.chars() {
            if c == SEPARATOR || c == ESCAPE {
                out.push(ESCAPE);
            }
            out.push(c);
        }
    }
    out
}

/// Splits on unescaped pipes. Empty items are dropped, so an empty string
/// decodes to an empty list.
pub fn split_list(encoded: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut chars = encoded.chars();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE => match chars.next() {
                Some(next) => current.push(next),
                None => current.push(ESCAPE),
            },
            SEPARATOR => items.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    items.push(current);

    items.into_iter().filter(|item| !item.is_empty()).collect()
}
