//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `-` for absent or blank optional text.
pub fn dash_if_empty(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// Wrap long free text for the detail view, indenting continuation lines.
pub fn wrap_block(text: &str, width: usize, indent: &str) -> String {
    let opts = textwrap::Options::new(width.max(20)).subsequent_indent(indent);
    textwrap::fill(text, opts)
}
