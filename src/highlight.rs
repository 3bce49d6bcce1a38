//! Anchor highlighting inside a suggestion's context
//!
//! Matching is literal and case-insensitive; the emitted segments keep the
//! context's own casing and concatenate back to the exact context string.

use regex::RegexBuilder;

/// A run of context text, emphasized when it matches the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub emphasized: bool,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            emphasized: false,
        }
    }

    fn emphasized(text: &'a str) -> Self {
        Self {
            text,
            emphasized: true,
        }
    }
}

/// Split `context` around every case-insensitive occurrence of `anchor`
///
/// An empty anchor leaves the context as a single plain segment; an empty
/// context yields no segments.
pub fn split_context<'a>(context: &'a str, anchor: &str) -> Vec<Segment<'a>> {
    if context.is_empty() {
        return Vec::new();
    }
    if anchor.is_empty() {
        return vec![Segment::plain(context)];
    }

    let pattern = match RegexBuilder::new(&regex::escape(anchor))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(e) => {
            log::warn!("Could not build anchor matcher: {}", e);
            return vec![Segment::plain(context)];
        }
    };

    let mut segments = Vec::new();
    let mut last_end = 0;

    for found in pattern.find_iter(context) {
        if found.start() > last_end {
            segments.push(Segment::plain(&context[last_end..found.start()]));
        }
        segments.push(Segment::emphasized(found.as_str()));
        last_end = found.end();
    }

    if last_end < context.len() {
        segments.push(Segment::plain(&context[last_end..]));
    }

    segments
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod highlight_tests;
