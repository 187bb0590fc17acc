use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---\n(.*?)\n---").unwrap());

const QUOTES: &[char] = &['"', '\'', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}'];

/// Extract the leading `---`-delimited header block as key/value pairs.
///
/// Returns an empty map when no header block anchors the content. Only the
/// first `:` on a line splits key from value, so values may themselves
/// contain colons. Lines without `:` are ignored; keys are not validated.
pub fn extract(content: &str) -> HashMap<String, String> {
    let Some(caps) = HEADER_RE.captures(content) else {
        return HashMap::new();
    };

    let mut fields = HashMap::new();
    for line in caps[1].lines() {
        if let Some((key, value)) = line.split_once(':') {
            fields.insert(
                key.trim().to_string(),
                strip_quotes(value.trim()).to_string(),
            );
        }
    }
    fields
}

/// Remove one layer of surrounding quote characters, straight or curly.
fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix(QUOTES).unwrap_or(value);
    value.strip_suffix(QUOTES).unwrap_or(value)
}

// ── Tests ──
