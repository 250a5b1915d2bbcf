/// Normalizes extracted hymn text line by line:
/// - trailing whitespace (including no-break spaces) is stripped from every line
/// - runs of blank lines collapse to a single blank line
/// - leading and trailing whitespace of the whole text is trimmed
pub fn normalize_text(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut prev_blank = false;

    for line in text.lines() {
        let line = line.trim_end();
        let blank = is_blank(line);
        if blank && prev_blank {
            continue;
        }
        lines.push(line);
        prev_blank = blank;
    }

    lines.join("\n").trim().to_string()
}

/// Returns true if the string is empty or all whitespace.
pub(crate) fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}
