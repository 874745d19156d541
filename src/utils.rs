//! Small display helpers shared across commands.

/// Truncate a string safely by character count, not byte count.
/// This ensures we don't break UTF-8 encoding by cutting mid-character.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Collapse a command's output to a single display line.
///
/// Multi-line stdout from build tools is noisy in the transcript; the
/// success confirmation only needs a short prefix.
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render a banner separator line of the given width.
pub fn banner(width: usize) -> String {
    "=".repeat(width)
}
