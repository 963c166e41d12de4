//! Escaping and small markup helpers shared by the renderers

use serde::Serialize;

/// Escape text for an HTML text node or a quoted attribute value
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Make text safe inside an HTML comment.
///
/// Only `&`, `<` and `>` are entity-escaped; `--` is broken up so the comment
/// cannot be closed early. Everything else stays verbatim.
pub fn escape_comment(s: &str) -> String {
    let escaped = s
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    let mut out = String::with_capacity(escaped.len());
    let mut previous_dash = false;
    for c in escaped.chars() {
        if c == '-' && previous_dash {
            out.push(' ');
        }
        previous_dash = c == '-';
        out.push(c);
    }
    out
}

/// Serialize a value as JSON that can sit inside a `<script>` element.
///
/// `<`, `>` and `&` become unicode escapes so the payload cannot terminate the
/// script or open a comment.
pub fn script_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

/// Icon markup.
///
/// Values starting with `<` are treated as pre-rendered markup and inserted
/// verbatim. Anything else is a Lucide icon name.
pub fn icon(value: &str, class: &str) -> String {
    let value = value.trim();
    if value.starts_with('<') {
        value.to_string()
    } else {
        format!(
            r#"<i data-lucide="{}" class="{}"></i>"#,
            escape_html(value),
            class
        )
    }
}

/// Icon markup for an optional icon, or nothing
pub fn opt_icon(value: Option<&str>, class: &str) -> String {
    value.map(|v| icon(v, class)).unwrap_or_default()
}

/// Format a number without a trailing `.0`, at most one decimal place
pub fn format_number(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

/// Indent every non-empty line of a block by `spaces`
pub fn indent(block: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    block
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Initials for an avatar placeholder, at most two letters
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
