//! Structural lookup inside the generated models module.
//!
//! The generated file is a JavaScript object literal keyed by model id. Only
//! enough of the syntax is understood to find one entry and its top-level
//! string properties: string literals (all three quote styles), comments and
//! bracket nesting. Everything else is treated as opaque text.

use std::ops::Range;

/// A top-level `name: "value"` property inside an object body.
///
/// Ranges are byte offsets into the text that was scanned. `value` excludes
/// the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringProperty {
    pub name: Range<usize>,
    pub value: Range<usize>,
}

impl StringProperty {
    pub fn name<'a>(&self, text: &'a str) -> &'a str {
        &text[self.name.clone()]
    }

    pub fn value<'a>(&self, text: &'a str) -> &'a str {
        &text[self.value.clone()]
    }
}

/// Byte index just past the string literal opening at `start`.
fn string_end(bytes: &[u8], start: usize) -> Option<usize> {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}

/// Byte index just past the comment opening at `start`, if there is one.
fn comment_end(bytes: &[u8], start: usize) -> Option<usize> {
    match bytes.get(start + 1) {
        Some(b'/') => Some(
            bytes[start..]
                .iter()
                .position(|&b| b == b'\n')
                .map_or(bytes.len(), |offset| start + offset + 1),
        ),
        Some(b'*') => bytes[start + 2..]
            .windows(2)
            .position(|pair| pair == b"*/")
            .map(|offset| start + 2 + offset + 2),
        _ => None,
    }
}

fn is_quote(b: u8) -> bool {
    matches!(b, b'"' | b'\'' | b'`')
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// Index of the `}` closing the brace at `open`.
fn matching_brace(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        let b = bytes[i];
        if is_quote(b) {
            i = string_end(bytes, i)?;
            continue;
        }
        if b == b'/' {
            if let Some(end) = comment_end(bytes, i) {
                i = end;
                continue;
            }
        }
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

/// Locate the bodies of every object stored under the quoted key `key`.
///
/// Matches `"<key>": {` with any whitespace around the colon and returns the
/// ranges strictly between the braces, in source order. Occurrences of the
/// key in value position are ignored.
pub fn find_object_bodies(source: &str, key: &str) -> Vec<Range<usize>> {
    let bytes = source.as_bytes();
    let needle = format!("\"{}\"", key);

    source
        .match_indices(needle.as_str())
        .filter_map(|(pos, _)| {
            let colon = skip_whitespace(bytes, pos + needle.len());
            if bytes.get(colon) != Some(&b':') {
                return None;
            }
            let open = skip_whitespace(bytes, colon + 1);
            if bytes.get(open) != Some(&b'{') {
                return None;
            }
            let close = matching_brace(bytes, open)?;
            Some(open + 1..close)
        })
        .collect()
}

#[derive(Debug)]
enum Expect {
    Key,
    Colon(Range<usize>),
    Value(Range<usize>),
    Separator,
}

/// Collect the top-level properties of `body` whose value is a plain string.
///
/// Nested objects and arrays are skipped. Returns `None` when the body has an
/// unterminated string or unbalanced brackets.
pub fn string_properties(body: &str) -> Option<Vec<StringProperty>> {
    let bytes = body.as_bytes();
    let mut properties = Vec::new();
    let mut depth = 0usize;
    let mut state = Expect::Key;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if is_quote(b) {
            let end = string_end(bytes, i)?;
            if depth == 0 {
                let inner = i + 1..end - 1;
                state = match state {
                    Expect::Key => Expect::Colon(inner),
                    Expect::Value(name) => {
                        properties.push(StringProperty { name, value: inner });
                        Expect::Separator
                    }
                    _ => Expect::Separator,
                };
            }
            i = end;
            continue;
        }

        if b == b'/' {
            if let Some(end) = comment_end(bytes, i) {
                i = end;
                continue;
            }
        }

        match b {
            b'{' | b'[' | b'(' => {
                if depth == 0 {
                    state = Expect::Separator;
                }
                depth += 1;
            }
            b'}' | b']' | b')' => depth = depth.checked_sub(1)?,
            _ if depth > 0 || b.is_ascii_whitespace() => {}
            b',' => state = Expect::Key,
            b':' => {
                state = match state {
                    Expect::Colon(name) => Expect::Value(name),
                    _ => Expect::Separator,
                }
            }
            _ if is_ident_start(b) && matches!(state, Expect::Key) => {
                let start = i;
                while i < bytes.len() && is_ident_continue(bytes[i]) {
                    i += 1;
                }
                state = Expect::Colon(start..i);
                continue;
            }
            _ => state = Expect::Separator,
        }
        i += 1;
    }

    (depth == 0).then_some(properties)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"export const MODELS = {
    "vercel-ai-gateway": {
        "xai/grok-3": {
            id: "xai/grok-3",
            name: "Grok 3 Beta",
            // routed through the gateway
            tags: ["a", "b}"],
            cost: { input: 3, output: 15 },
            'quoted': 'single',
            contextWindow: 131072,
            baseUrl: "https://ai-gateway.vercel.sh",
        },
        "xai/grok-3-mini": {
            id: "xai/grok-3-mini",
        },
    },
};
"#;

    fn find_object_body(source: &str, key: &str) -> Option<Range<usize>> {
        find_object_bodies(source, key).into_iter().next()
    }

    fn props(body: &str) -> Vec<(&str, &str)> {
        string_properties(body)
            .unwrap()
            .iter()
            .map(|p| (p.name(body), p.value(body)))
            .collect()
    }

    #[test]
    fn test_find_object_body_skips_value_occurrences() {
        let range = find_object_body(SOURCE, "xai/grok-3").unwrap();
        let body = &SOURCE[range];
        assert!(body.contains("name: \"Grok 3 Beta\""));
        assert!(!body.contains("grok-3-mini"));
    }

    #[test]
    fn test_find_object_body_distinguishes_prefixed_keys() {
        let range = find_object_body(SOURCE, "xai/grok-3-mini").unwrap();
        assert_eq!(SOURCE[range].trim(), "id: \"xai/grok-3-mini\",");
    }

    #[test]
    fn test_find_object_bodies_returns_every_entry() {
        let source = r#"{
    "xai": { "xai/grok-3": { provider: "xai" } },
    "gateway": { "xai/grok-3": { provider: "vercel-ai-gateway" } },
    ids: ["xai/grok-3"],
}"#;
        let bodies: Vec<&str> = find_object_bodies(source, "xai/grok-3")
            .into_iter()
            .map(|range| source[range].trim())
            .collect();
        assert_eq!(
            bodies,
            vec!["provider: \"xai\"", "provider: \"vercel-ai-gateway\""]
        );
    }

    #[test]
    fn test_find_object_body_missing_key() {
        assert_eq!(find_object_body(SOURCE, "xai/grok-4"), None);
    }

    #[test]
    fn test_string_properties_top_level_only() {
        let range = find_object_body(SOURCE, "xai/grok-3").unwrap();
        assert_eq!(
            props(&SOURCE[range]),
            vec![
                ("id", "xai/grok-3"),
                ("name", "Grok 3 Beta"),
                ("quoted", "single"),
                ("baseUrl", "https://ai-gateway.vercel.sh"),
            ]
        );
    }

    #[test]
    fn test_string_properties_ignore_escaped_quotes() {
        let body = r#" name: "say \"hi\"", api: "x" "#;
        assert_eq!(props(body), vec![("name", r#"say \"hi\""#), ("api", "x")]);
    }

    #[test]
    fn test_string_properties_reject_unbalanced() {
        assert_eq!(string_properties("name: \"open"), None);
        assert_eq!(string_properties("cost: { input: 3"), None);
        assert_eq!(string_properties("a: 1 }"), None);
    }

    #[test]
    fn test_unterminated_object_is_not_found() {
        assert_eq!(find_object_body("\"k\": { a: \"b\"", "k"), None);
    }
}
