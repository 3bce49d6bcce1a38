//! Tests for suggestion cards

use super::*;
use crate::ai::suggestion::{Suggestion, review_suggestions};

fn reviewed(anchor: &str, link: &str, context: &str, listed: &[&str]) -> Vec<ReviewedSuggestion> {
    let links: Vec<String> = listed.iter().map(|s| s.to_string()).collect();
    review_suggestions(
        vec![Suggestion {
            anchor_text: anchor.to_string(),
            link: link.to_string(),
            context: context.to_string(),
        }],
        &links,
    )
}

fn line_text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn test_card_shows_context_and_link() {
    let suggestions = reviewed("Foo", "https://x/foo", "See Foo here", &["https://x/foo"]);
    let layout = build_cards(&suggestions, None, 60);

    let text: Vec<String> = layout.lines.iter().map(line_text).collect();
    assert_eq!(text, vec!["  See Foo here", "  Link to: https://x/foo"]);
    assert_eq!(layout.card_starts, vec![0]);
}

#[test]
fn test_anchor_span_is_emphasized() {
    let suggestions = reviewed("Foo", "https://x/foo", "See Foo here", &["https://x/foo"]);
    let layout = build_cards(&suggestions, None, 60);

    let emphasized: Vec<&str> = layout.lines[0]
        .spans
        .iter()
        .filter(|s| s.style == emphasis_style())
        .map(|s| s.content.as_ref())
        .collect();
    assert_eq!(emphasized, vec!["Foo"]);
}

#[test]
fn test_every_case_insensitive_occurrence_is_emphasized() {
    let suggestions = reviewed("foo", "https://x", "foo and FOO", &["https://x"]);
    let layout = build_cards(&suggestions, None, 60);

    let emphasized: Vec<&str> = layout.lines[0]
        .spans
        .iter()
        .filter(|s| s.style == emphasis_style())
        .map(|s| s.content.as_ref())
        .collect();
    assert_eq!(emphasized, vec!["foo", "FOO"]);
}

#[test]
fn test_link_is_underlined() {
    let suggestions = reviewed("Foo", "https://x/foo", "See Foo here", &["https://x/foo"]);
    let layout = build_cards(&suggestions, None, 60);

    let link_span = layout.lines[1]
        .spans
        .iter()
        .find(|s| s.content == "https://x/foo")
        .unwrap();
    assert!(link_span.style.add_modifier.contains(Modifier::UNDERLINED));
}

#[test]
fn test_flagged_card_has_warning_lines() {
    let suggestions = reviewed("Bar", "https://y", "See Foo here", &["https://x"]);
    let layout = build_cards(&suggestions, None, 80);

    let text: Vec<String> = layout.lines.iter().map(line_text).collect();
    assert_eq!(text.len(), 4);
    assert_eq!(text[2], "  ⚠ Anchor text not found verbatim in context");
    assert_eq!(text[3], "  ⚠ Link is not in your list");
}

#[test]
fn test_cards_are_separated_and_indexed() {
    let mut suggestions = reviewed("a", "https://x", "a b", &["https://x"]);
    suggestions.extend(reviewed("b", "https://x", "a b", &["https://x"]));
    let layout = build_cards(&suggestions, None, 40);

    assert_eq!(layout.card_starts, vec![0, 3]);
    assert_eq!(line_text(&layout.lines[2]), "");
    assert_eq!(layout.card_span(0), Some((0, 2)));
    assert_eq!(layout.card_span(1), Some((3, 5)));
    assert_eq!(layout.card_span(2), None);
}

#[test]
fn test_selected_card_has_marker() {
    let mut suggestions = reviewed("a", "https://x", "a b", &["https://x"]);
    suggestions.extend(reviewed("b", "https://x", "a b", &["https://x"]));
    let layout = build_cards(&suggestions, Some(1), 40);

    assert!(line_text(&layout.lines[0]).starts_with("  "));
    assert!(line_text(&layout.lines[3]).starts_with("▌ "));
    assert!(line_text(&layout.lines[4]).starts_with("▌ "));
}

#[test]
fn test_long_context_wraps_within_width() {
    let context = "word ".repeat(30);
    let suggestions = reviewed("word", "https://x", context.trim_end(), &["https://x"]);
    let layout = build_cards(&suggestions, None, 22);

    let link_line = layout
        .lines
        .iter()
        .position(|l| line_text(l).contains("Link to:"))
        .unwrap();
    assert!(link_line > 1);
    for line in &layout.lines[..link_line] {
        assert!(line_text(line).trim_end().chars().count() <= 22);
    }
}

#[test]
fn test_no_suggestions_no_lines() {
    let layout = build_cards(&[], None, 40);
    assert!(layout.lines.is_empty());
    assert!(layout.card_starts.is_empty());
}

#[test]
fn test_anchor_inside_word_does_not_split_word() {
    let suggestions = reviewed("link", "https://x", "aaaa linking", &["https://x"]);
    // Inner width 9: "aaaa link" would fit exactly, "aaaa linking" does not
    let layout = build_cards(&suggestions, None, 11);

    assert_eq!(line_text(&layout.lines[0]).trim_end(), "  aaaa");
    assert_eq!(line_text(&layout.lines[1]), "  linking");

    let emphasized: Vec<&str> = layout.lines[1]
        .spans
        .iter()
        .filter(|s| s.style == emphasis_style())
        .map(|s| s.content.as_ref())
        .collect();
    assert_eq!(emphasized, vec!["link"]);
}
