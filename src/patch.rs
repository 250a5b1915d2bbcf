use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::locate::{depth_at, find_record};

/// Name of the record field that receives the translation.
pub const TRANSLATION_FIELD: &str = "translation";

/// Indentation of a field line: `\n<indent>"key"`.
static INDENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"\n([ \t]*)""#).unwrap());
/// Key and separator of a field: `"key"<sep>`.
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(?:[^"\\]|\\.)*"([ \t]*:[ \t]*)"#).unwrap());
/// An existing translation whose value is a string literal or null.
static TRANSLATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""translation"\s*:\s*("(?:[^"\\]|\\.)*"|null)"#).unwrap()
});

const DEFAULT_INDENT: &str = "        ";
const DEFAULT_SEPARATOR: &str = ": ";

/// How the fields of a record are laid out in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldStyle {
    indent: String,
    separator: String,
}

impl FieldStyle {
    /// Read the layout off the first field of `record`.
    fn detect(record: &str) -> Self {
        let indent = INDENT_RE
            .captures(record)
            .and_then(|caps| caps.get(1))
            .map_or(DEFAULT_INDENT, |m| m.as_str());
        let separator = SEPARATOR_RE
            .captures(record)
            .and_then(|caps| caps.get(1))
            .map_or(DEFAULT_SEPARATOR, |m| m.as_str());
        Self {
            indent: indent.to_string(),
            separator: separator.to_string(),
        }
    }
}

/// Set the translation of record (`mandala`, `sukta`) inside `blob`.
///
/// Only the record's own bytes are rewritten; the rest of the text is copied
/// through untouched. An existing `"translation"` value is replaced in place
/// (key, separator and trailing comma kept); otherwise a new field is added
/// before the record's closing brace, in the record's own indentation.
///
/// Returns the new text and whether a record was matched. A matched record
/// reports `true` even when the text ends up identical, so callers compare
/// the blobs to detect real changes.
pub fn patch_translation(
    blob: &str,
    mandala: u32,
    sukta: u32,
    translation: &str,
) -> (String, bool) {
    let Some(range) = find_record(blob, mandala, sukta) else {
        return (blob.to_string(), false);
    };
    let record = &blob[range.clone()];
    let value = serde_json::Value::from(translation).to_string();

    let patched = match existing_value(record) {
        Some(span) => format!("{}{}{}", &record[..span.start], value, &record[span.end..]),
        None => insert_field(record, &value),
    };

    let mut out = String::with_capacity(blob.len() - record.len() + patched.len());
    out.push_str(&blob[..range.start]);
    out.push_str(&patched);
    out.push_str(&blob[range.end..]);
    (out, true)
}

/// Byte range of the value token of the record's own translation field.
fn existing_value(record: &str) -> Option<Range<usize>> {
    TRANSLATION_RE
        .captures_iter(record)
        .find(|caps| {
            caps.get(0)
                .is_some_and(|m| depth_at(record, m.start()) == Some(1))
        })
        .and_then(|caps| caps.get(1))
        .map(|m| m.range())
}

/// Append the translation field before the closing brace of `record`.
fn insert_field(record: &str, value: &str) -> String {
    let style = FieldStyle::detect(record);
    let body = &record[..record.len() - 1];
    let content = body.trim_end();
    let before_close = &body[content.len()..];
    let comma = if content.ends_with(',') || content.ends_with('{') {
        ""
    } else {
        ","
    };

    let field = format!("\"{TRANSLATION_FIELD}\"{}{value}", style.separator);
    if record.contains('\n') {
        format!("{content}{comma}\n{}{field}{before_close}}}", style.indent)
    } else {
        format!("{content}{comma} {field}{before_close}}}")
    }
}
