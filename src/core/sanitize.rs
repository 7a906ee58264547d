// src/core/sanitize.rs

use crate::config::consts::BREAK_MARKER;

/// Replace the upstream `<br/>` marker with a plain newline.
pub fn break_to_newline(s: &str) -> String {
    s.replace(BREAK_MARKER, "\n")
}

/// Split menu text into display lines: one per dish, blanks dropped.
pub fn menu_lines(s: &str) -> Vec<String> {
    break_to_newline(s)
        .lines()
        .map(normalize_ws)
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Flatten multi-line cell text for single-line table cells.
pub fn single_line(s: &str) -> String {
    normalize_ws(&break_to_newline(s))
}
