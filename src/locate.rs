// Record lookup over the raw JSON text of the dataset.
//
// The document is never parsed into a tree here, so untouched regions keep
// their exact bytes. Record boundaries come from a string-aware brace scan:
// only `{`/`}` nesting is tracked, and braces or quotes inside string
// literals are ignored.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static SUKTA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""sukta"\s*:\s*(\d+)\b"#).unwrap());
static MANDALA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""mandala"\s*:\s*(\d+)\b"#).unwrap());

/// Brace bookkeeping for a left-to-right pass over JSON text.
#[derive(Default)]
struct BraceScanner {
    /// Byte offsets of the currently open `{`.
    open: Vec<usize>,
    in_string: bool,
    escaped: bool,
}

impl BraceScanner {
    /// Feed the byte at offset `i`. Returns the offset of the matching `{`
    /// when `b` closes an object.
    fn step(&mut self, i: usize, b: u8) -> Option<usize> {
        if self.in_string {
            if self.escaped {
                self.escaped = false;
            } else if b == b'\\' {
                self.escaped = true;
            } else if b == b'"' {
                self.in_string = false;
            }
            return None;
        }
        match b {
            b'"' => self.in_string = true,
            b'{' => self.open.push(i),
            b'}' => return self.open.pop(),
            _ => {}
        }
        None
    }
}

/// Object nesting depth at byte offset `pos`, or `None` if `pos` falls
/// inside a string literal.
pub(crate) fn depth_at(text: &str, pos: usize) -> Option<usize> {
    let mut scanner = BraceScanner::default();
    for (i, &b) in text.as_bytes()[..pos.min(text.len())].iter().enumerate() {
        scanner.step(i, b);
    }
    (!scanner.in_string).then_some(scanner.open.len())
}

/// Byte range (braces included) of the innermost object enclosing `pos`.
fn enclosing_object(text: &str, pos: usize) -> Option<Range<usize>> {
    let mut scanner = BraceScanner::default();
    let mut start = None;
    for (i, &b) in text.as_bytes().iter().enumerate() {
        if i == pos {
            if scanner.in_string {
                return None;
            }
            start = Some(*scanner.open.last()?);
        }
        if let Some(opened) = scanner.step(i, b) {
            if start == Some(opened) {
                return Some(opened..i + 1);
            }
        }
    }
    None
}

/// Find the first record whose top-level fields carry `"mandala": mandala`
/// followed by `"sukta": sukta`.
///
/// Returns the byte range of the whole object, braces included. A sukta
/// marker that sits inside a string literal, or a mandala marker belonging
/// to a nested object, is not considered.
pub fn find_record(blob: &str, mandala: u32, sukta: u32) -> Option<Range<usize>> {
    SUKTA_RE
        .captures_iter(blob)
        .filter(|caps| caps[1].parse::<u32>().ok() == Some(sukta))
        .filter_map(|caps| {
            let marker = caps.get(0)?.start();
            let record = enclosing_object(blob, marker)?;
            has_mandala(&blob[record.start..marker], mandala).then_some(record)
        })
        .next()
}

/// True if `head` (a record from its `{` up to the sukta marker) declares
/// the mandala as one of its own fields.
fn has_mandala(head: &str, mandala: u32) -> bool {
    MANDALA_RE.captures_iter(head).any(|caps| {
        caps[1].parse::<u32>().ok() == Some(mandala)
            && caps
                .get(0)
                .is_some_and(|m| depth_at(head, m.start()) == Some(1))
    })
}
