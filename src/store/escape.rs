//! Escape transform for values embedded in single-quoted literals
//!
//! `escape` adds a backslash before `\`, `'` and `"`, and writes NUL as `\0`.
//! `unescape` strips one level of backslashes and is its exact inverse.

/// Escape a string for embedding in the literal form
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' | '\'' | '"' => {
                out.push('\\');
                out.push(c);
            },
            '\0' => out.push_str("\\0"),
            _ => out.push(c),
        }
    }
    out
}

/// Remove one level of backslash escaping
pub fn unescape(input: &str) -> String {
    if !input.contains('\\') {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('\0'),
            Some(next) => out.push(next),
            // lone trailing backslash is dropped
            None => {},
        }
    }
    out
}
