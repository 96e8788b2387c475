//! `{identifier}` template scanning.

/// A piece of a template string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text copied to the output as-is
    Text(&'a str),
    /// Phrase key referenced by a `{key}` placeholder (braces stripped)
    Placeholder(&'a str),
}

/// Returns true if `text` can appear between braces as a phrase key.
fn is_identifier(text: &str) -> bool {
    !text.is_empty()
        && text.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Split a template into literal text and placeholders.
///
/// A `{` that does not start a well-formed `{identifier}` is kept as literal
/// text, so `"{ not a key }"` and `"{}"` pass through untouched.
///
/// # Examples
/// ```
/// use response_localizer::phrase::{Segment, segments};
///
/// let parts = segments("{greeting} Mark");
/// assert_eq!(parts, vec![Segment::Placeholder("greeting"), Segment::Text(" Mark")]);
/// ```
#[must_use]
pub fn segments(template: &str) -> Vec<Segment<'_>> {
    let mut result = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let (before, from_brace) = rest.split_at(open);
        let after_brace = from_brace.strip_prefix('{').unwrap_or(from_brace);

        let placeholder = after_brace.find('}').and_then(|close| {
            let (key, from_close) = after_brace.split_at(close);
            let tail = from_close.strip_prefix('}')?;
            is_identifier(key).then_some((key, tail))
        });

        if let Some((key, tail)) = placeholder {
            if !before.is_empty() {
                result.push(Segment::Text(before));
            }
            result.push(Segment::Placeholder(key));
            rest = tail;
        } else {
            // '{' is one byte, so `open + 1` is a char boundary.
            let (literal, tail) = rest.split_at(open + 1);
            result.push(Segment::Text(literal));
            rest = tail;
        }
    }

    if !rest.is_empty() {
        result.push(Segment::Text(rest));
    }

    result
}

/// Phrase keys referenced by a template, in order of appearance.
#[must_use]
pub fn placeholders(template: &str) -> Vec<&str> {
    segments(template)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder(key) => Some(key),
            Segment::Text(_) => None,
        })
        .collect()
}
