//! Message formatting for the chat transcript.
//!
//! [`format_message`] converts the constrained markdown-like subset the
//! backend speaks (bold, line breaks, flat bullet/numbered lists) into
//! structural markup. [`render_markup`] parses that markup back into styled
//! line segments for terminal display.
//!
//! The list rules run as independent passes over the `<br>`-converted text.
//! A numbered line whose leading boundary was consumed by an adjacent bullet
//! conversion is no longer at a line start and stays literal (and vice
//! versa). That interaction is long-standing product behavior, pinned by
//! tests below; swap in a real parser behind this module if it ever changes.

use std::mem;

use anstyle::Style;
use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold regex"));
static BULLET_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^- (.*)$").expect("bullet regex"));
static NUMBERED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s+(.*)$").expect("numbered regex"));

/// Convert raw message text into structural markup.
///
/// Pure function; transformation rules in order:
/// 1. `**text**` becomes `<strong>text</strong>` (non-greedy, never across a
///    line break);
/// 2. newlines become `<br>`;
/// 3. lines beginning with `- ` become single-item `<ul>` blocks, adjacent
///    blocks coalesced into one list;
/// 4. lines beginning with digits followed by `. ` become single-item `<ol>`
///    blocks, coalesced the same way.
pub fn format_message(raw: &str) -> String {
    let bolded = BOLD_SPAN.replace_all(raw, "<strong>$1</strong>");
    let with_breaks = bolded.replace('\n', "<br>");
    let bulleted = list_pass(&with_breaks, &BULLET_LINE, "<ul>", "</ul>");
    list_pass(&bulleted, &NUMBERED_LINE, "<ol>", "</ol>")
}

/// One list conversion pass.
///
/// A "line" is a `<br>`-delimited segment of the input. A matching line
/// becomes `<open><li>item</li><close>` and consumes its terminating `<br>`;
/// the boundary markers between consecutive converted lines are then
/// collapsed, whether a `<br>` separates them or not.
fn list_pass(input: &str, line: &Regex, open: &str, close: &str) -> String {
    let segments: Vec<&str> = input.split("<br>").collect();
    let last = segments.len() - 1;
    let mut out = String::with_capacity(input.len());
    for (idx, segment) in segments.iter().enumerate() {
        match line.captures(segment) {
            Some(caps) => {
                let item = caps.get(1).map_or("", |m| m.as_str());
                out.push_str(open);
                out.push_str("<li>");
                out.push_str(item);
                out.push_str("</li>");
                out.push_str(close);
            }
            None => {
                out.push_str(segment);
                if idx != last {
                    out.push_str("<br>");
                }
            }
        }
    }
    let broken_boundary = format!("{close}<br>{open}");
    let adjacent_boundary = format!("{close}{open}");
    out.replace(&broken_boundary, "")
        .replace(&adjacent_boundary, "")
}

/// A styled run of text within a rendered line.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkupSegment {
    pub style: Style,
    pub text: String,
}

impl MarkupSegment {
    fn new(style: Style, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }
}

/// A rendered line composed of styled segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkupLine {
    pub segments: Vec<MarkupSegment>,
}

impl MarkupLine {
    fn push_segment(&mut self, style: Style, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(last) = self.segments.last_mut() {
            if last.style == style {
                last.text.push_str(text);
                return;
            }
        }
        self.segments.push(MarkupSegment::new(style, text));
    }

    /// Concatenated text of the line, styles dropped.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect()
    }
}

#[derive(Clone, Copy)]
enum Tag {
    StrongOpen,
    StrongClose,
    Break,
    UnorderedOpen,
    UnorderedClose,
    OrderedOpen,
    OrderedClose,
    ItemOpen,
    ItemClose,
}

const TAGS: &[(&str, Tag)] = &[
    ("<strong>", Tag::StrongOpen),
    ("</strong>", Tag::StrongClose),
    ("<br>", Tag::Break),
    ("<ul>", Tag::UnorderedOpen),
    ("</ul>", Tag::UnorderedClose),
    ("<ol>", Tag::OrderedOpen),
    ("</ol>", Tag::OrderedClose),
    ("<li>", Tag::ItemOpen),
    ("</li>", Tag::ItemClose),
];

#[derive(Clone, Copy)]
enum ListKind {
    Unordered,
    Ordered { next: usize },
}

/// Parse [`format_message`] output into styled lines.
///
/// Lenient by construction: unknown tags and stray `<` render literally, and
/// mis-nested list markup degrades to plain lines instead of failing.
pub fn render_markup(markup: &str, base_style: Style) -> Vec<MarkupLine> {
    let mut lines: Vec<MarkupLine> = Vec::new();
    let mut current = MarkupLine::default();
    let mut bold_depth = 0usize;
    let mut list: Option<ListKind> = None;

    let text_style = |bold_depth: usize| {
        if bold_depth > 0 {
            base_style.bold()
        } else {
            base_style
        }
    };

    let mut rest = markup;
    while !rest.is_empty() {
        match rest.find('<') {
            None => {
                current.push_segment(text_style(bold_depth), rest);
                break;
            }
            Some(at) => {
                let (literal, tail) = rest.split_at(at);
                current.push_segment(text_style(bold_depth), literal);
                match TAGS.iter().find(|(token, _)| tail.starts_with(token)) {
                    None => {
                        // Not part of the supported markup; keep the '<'.
                        current.push_segment(text_style(bold_depth), "<");
                        rest = &tail[1..];
                    }
                    Some((token, tag)) => {
                        rest = &tail[token.len()..];
                        match tag {
                            Tag::StrongOpen => bold_depth += 1,
                            Tag::StrongClose => bold_depth = bold_depth.saturating_sub(1),
                            Tag::Break => lines.push(mem::take(&mut current)),
                            Tag::UnorderedOpen => {
                                flush_partial(&mut lines, &mut current);
                                list = Some(ListKind::Unordered);
                            }
                            Tag::OrderedOpen => {
                                flush_partial(&mut lines, &mut current);
                                list = Some(ListKind::Ordered { next: 1 });
                            }
                            Tag::UnorderedClose | Tag::OrderedClose => {
                                flush_partial(&mut lines, &mut current);
                                list = None;
                            }
                            Tag::ItemOpen => {
                                flush_partial(&mut lines, &mut current);
                                let prefix = match &mut list {
                                    Some(ListKind::Ordered { next }) => {
                                        let prefix = format!("{next}. ");
                                        *next += 1;
                                        prefix
                                    }
                                    _ => "• ".to_string(),
                                };
                                current.push_segment(base_style, &prefix);
                            }
                            Tag::ItemClose => lines.push(mem::take(&mut current)),
                        }
                    }
                }
            }
        }
    }

    if !current.segments.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn flush_partial(lines: &mut Vec<MarkupLine>, current: &mut MarkupLine) {
    if !current.segments.is_empty() {
        lines.push(mem::take(current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain_lines(markup: &str) -> Vec<String> {
        render_markup(markup, Style::new())
            .iter()
            .map(MarkupLine::text)
            .collect()
    }

    #[test]
    fn bold_wraps_emphasized_span() {
        assert_eq!(format_message("**hi**"), "<strong>hi</strong>");
    }

    #[test]
    fn bold_is_non_greedy_per_pair() {
        assert_eq!(
            format_message("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn unpaired_bold_marker_stays_literal() {
        assert_eq!(format_message("**a** and **b"), "<strong>a</strong> and **b");
    }

    #[test]
    fn bold_never_crosses_a_line_break() {
        assert_eq!(format_message("**a\nb**"), "**a<br>b**");
    }

    #[test]
    fn newline_becomes_exactly_one_break() {
        let markup = format_message("line1\nline2");
        assert_eq!(markup, "line1<br>line2");
        assert_eq!(markup.matches("<br>").count(), 1);
    }

    #[test]
    fn adjacent_bullet_lines_coalesce_into_one_list() {
        assert_eq!(
            format_message("- a\n- b"),
            "<ul><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn bullets_separated_by_a_blank_line_still_coalesce() {
        assert_eq!(
            format_message("- a\n\n- b"),
            "<ul><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn numbered_lines_coalesce_into_one_list() {
        assert_eq!(
            format_message("1. a\n2. b"),
            "<ol><li>a</li><li>b</li></ol>"
        );
    }

    #[test]
    fn text_around_a_list_keeps_its_breaks() {
        assert_eq!(
            format_message("intro\n- a\ntail"),
            "intro<br><ul><li>a</li></ul>tail"
        );
    }

    #[test]
    fn bullet_marker_requires_the_trailing_space() {
        assert_eq!(format_message("-a"), "-a");
        assert_eq!(format_message("1.a"), "1.a");
    }

    #[test]
    fn numbered_line_between_bullets_stays_literal() {
        // The numbered pass runs after the bullet pass consumed the
        // surrounding boundaries, so "1. b" is no longer at a line start.
        // Long-standing behavior; see the module docs.
        assert_eq!(
            format_message("- a\n1. b\n- c"),
            "<ul><li>a</li></ul>1. b<br><ul><li>c</li></ul>"
        );
    }

    #[test]
    fn bold_survives_inside_list_items() {
        assert_eq!(
            format_message("- **a**\n- b"),
            "<ul><li><strong>a</strong></li><li>b</li></ul>"
        );
    }

    #[test]
    fn render_emphasized_span_is_bold() {
        let lines = render_markup("<strong>hi</strong> there", Style::new());
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0].segments,
            vec![
                MarkupSegment::new(Style::new().bold(), "hi"),
                MarkupSegment::new(Style::new(), " there"),
            ]
        );
    }

    #[test]
    fn render_break_splits_lines() {
        assert_eq!(plain_lines("a<br>b"), vec!["a", "b"]);
        assert_eq!(plain_lines("a<br><br>b"), vec!["a", "", "b"]);
    }

    #[test]
    fn render_bullet_items_get_prefixes() {
        assert_eq!(
            plain_lines("<ul><li>a</li><li>b</li></ul>"),
            vec!["• a", "• b"]
        );
    }

    #[test]
    fn render_ordered_items_are_renumbered_in_sequence() {
        assert_eq!(
            plain_lines("<ol><li>x</li><li>y</li></ol>"),
            vec!["1. x", "2. y"]
        );
    }

    #[test]
    fn render_unknown_markup_is_literal() {
        assert_eq!(plain_lines("a < b and <em>c</em>"), vec!["a < b and <em>c</em>"]);
    }

    #[test]
    fn render_empty_markup_yields_one_empty_line() {
        assert_eq!(plain_lines(""), vec![""]);
    }

    #[test]
    fn format_then_render_round_trip_for_mixed_content() {
        let lines = plain_lines(&format_message("**Hi!**\nOptions:\n- one\n- two"));
        assert_eq!(lines, vec!["Hi!", "Options:", "• one", "• two"]);
    }
}
