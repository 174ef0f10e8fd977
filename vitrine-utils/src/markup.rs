// Vitrine Reply Markup
// STORY-002: Assistant reply formatting
//
// Minimal markdown-like substitution over assistant replies: `**text**`
// spans become strong segments, lines starting with `* ` become list items.
// Nothing else is interpreted; unknown markup passes through as plain text.

use ansi_term::Style;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `**text**` spans, non-greedy so adjacent spans stay separate
    static ref STRONG: Regex = Regex::new(r"\*\*(.*?)\*\*").unwrap();
    /// List items: the `* ` marker must sit at line start
    static ref LIST_ITEM: Regex = Regex::new(r"^\* (.*)$").unwrap();
}

/// One inline run of reply text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Strong(String),
}

/// One block of reply text: running prose or a bullet list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Segment>),
    List(Vec<Vec<Segment>>),
}

/// Parse a raw assistant reply into blocks.
///
/// Consecutive `* ` lines collapse into a single list block; everything
/// else becomes paragraphs, one per non-blank line. Strong spans are
/// resolved inside both.
pub fn parse(reply: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut items: Vec<Vec<Segment>> = Vec::new();

    for line in reply.lines() {
        if let Some(caps) = LIST_ITEM.captures(line) {
            items.push(parse_segments(&caps[1]));
            continue;
        }

        // A non-item line ends any open list
        if !items.is_empty() {
            blocks.push(Block::List(std::mem::take(&mut items)));
        }

        if !line.trim().is_empty() {
            blocks.push(Block::Paragraph(parse_segments(line)));
        }
    }

    if !items.is_empty() {
        blocks.push(Block::List(items));
    }

    blocks
}

/// Split one line into plain/strong segments
fn parse_segments(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in STRONG.captures_iter(line) {
        let span = caps.get(0).expect("capture 0 always present");
        if span.start() > cursor {
            segments.push(Segment::Plain(line[cursor..span.start()].to_string()));
        }
        segments.push(Segment::Strong(caps[1].to_string()));
        cursor = span.end();
    }

    if cursor < line.len() {
        segments.push(Segment::Plain(line[cursor..].to_string()));
    }

    segments
}

/// Render parsed blocks to an ANSI string for the terminal transcript.
///
/// Strong segments render bold; list items render with a bullet indent.
pub fn to_ansi(blocks: &[Block]) -> String {
    let bold = Style::new().bold();
    let mut out = String::new();

    for block in blocks {
        match block {
            Block::Paragraph(segments) => {
                push_segments(&mut out, segments, bold);
                out.push('\n');
            }
            Block::List(items) => {
                for item in items {
                    out.push_str("  • ");
                    push_segments(&mut out, item, bold);
                    out.push('\n');
                }
            }
        }
    }

    out
}

fn push_segments(out: &mut String, segments: &[Segment], bold: Style) {
    for segment in segments {
        match segment {
            Segment::Plain(text) => out.push_str(text),
            Segment::Strong(text) => out.push_str(&bold.paint(text.as_str()).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_span() {
        let blocks = parse("a **b** c");
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![
                Segment::Plain("a ".to_string()),
                Segment::Strong("b".to_string()),
                Segment::Plain(" c".to_string()),
            ])]
        );
    }

    #[test]
    fn test_roundtrip_bold_and_single_item() {
        let blocks = parse("**bold** and\n* item");

        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[0],
            Block::Paragraph(vec![
                Segment::Strong("bold".to_string()),
                Segment::Plain(" and".to_string()),
            ])
        );
        // The list container holds exactly one entry
        assert_eq!(
            blocks[1],
            Block::List(vec![vec![Segment::Plain("item".to_string())]])
        );
    }

    #[test]
    fn test_midline_asterisk_is_not_an_item() {
        let blocks = parse("three * four");
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![Segment::Plain(
                "three * four".to_string()
            )])]
        );
    }

    #[test]
    fn test_consecutive_items_share_one_list() {
        let blocks = parse("* one\n* two\n* three");
        match &blocks[..] {
            [Block::List(items)] => assert_eq!(items.len(), 3),
            other => panic!("Expected a single list, got {:?}", other),
        }
    }

    #[test]
    fn test_item_with_strong_span() {
        let blocks = parse("* shipped **five** lines");
        assert_eq!(
            blocks,
            vec![Block::List(vec![vec![
                Segment::Plain("shipped ".to_string()),
                Segment::Strong("five".to_string()),
                Segment::Plain(" lines".to_string()),
            ]])]
        );
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let blocks = parse("first\n\nsecond");
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_list_interrupted_by_prose() {
        let blocks = parse("* one\nplain\n* two");
        assert_eq!(blocks.len(), 3);
        assert!(matches!(blocks[0], Block::List(_)));
        assert!(matches!(blocks[1], Block::Paragraph(_)));
        assert!(matches!(blocks[2], Block::List(_)));
    }

    #[test]
    fn test_render_marks_items_and_bold() {
        let rendered = to_ansi(&parse("**bold** and\n* item"));
        assert!(rendered.contains("  • item"));
        assert!(rendered.contains("\x1b[1m")); // bold on
        assert!(rendered.contains("bold"));
    }

    #[test]
    fn test_empty_reply_renders_empty() {
        assert!(parse("").is_empty());
        assert_eq!(to_ansi(&[]), "");
    }
}
