//! Assistant Reply Formatting
//!
//! Turns the light markdown the backend's model writes into structured
//! blocks. Each line is classified on its own: `**bold**` becomes strong
//! text, `- ` / `* ` lines become list items, other non-blank lines become
//! paragraphs and blank lines become breaks. Lists are not grouped and bold
//! spans do not cross lines.

use regex::Regex;
use std::sync::OnceLock;

/// Inline run of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Strong(String),
}

/// One formatted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Span>),
    ListItem(Vec<Span>),
    Break,
}

fn bold_pattern() -> Option<&'static Regex> {
    static BOLD: OnceLock<Option<Regex>> = OnceLock::new();
    BOLD.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").ok()).as_ref()
}

/// Split a line into plain and strong runs
pub fn parse_inline(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;

    let Some(bold) = bold_pattern() else {
        return vec![Span::Text(line.to_string())];
    };

    for caps in bold.captures_iter(line) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            spans.push(Span::Text(line[last..whole.start()].to_string()));
        }
        spans.push(Span::Strong(inner.as_str().to_string()));
        last = whole.end();
    }

    if last < line.len() {
        spans.push(Span::Text(line[last..].to_string()));
    }
    spans
}

/// Format a reply line by line
pub fn format_reply(content: &str) -> Vec<Block> {
    content
        .split('\n')
        .map(|line| {
            let trimmed = line.trim();
            if let Some(item) = trimmed
                .strip_prefix("- ")
                .or_else(|| trimmed.strip_prefix("* "))
            {
                Block::ListItem(parse_inline(item))
            } else if !trimmed.is_empty() {
                Block::Paragraph(parse_inline(line))
            } else {
                Block::Break
            }
        })
        .collect()
}

fn spans_plain(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::Text(t) | Span::Strong(t) => t.as_str(),
        })
        .collect()
}

/// Terminal rendering: markers removed, list items bulleted
pub fn to_plain(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| match block {
            Block::Paragraph(spans) => spans_plain(spans),
            Block::ListItem(spans) => format!("  • {}", spans_plain(spans)),
            Block::Break => String::new(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_and_list_items() {
        let blocks = format_reply("**Total**: $100\n- Groceries\n- Gas");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph(vec![
                    Span::Strong("Total".into()),
                    Span::Text(": $100".into())
                ]),
                Block::ListItem(vec![Span::Text("Groceries".into())]),
                Block::ListItem(vec![Span::Text("Gas".into())]),
            ]
        );
        assert!(!to_plain(&blocks).contains("**"));
    }

    #[test]
    fn test_star_bullet_and_blank_line() {
        let blocks = format_reply("Summary\n\n* Rent is **high**");
        assert_eq!(blocks[1], Block::Break);
        assert_eq!(
            blocks[2],
            Block::ListItem(vec![
                Span::Text("Rent is ".into()),
                Span::Strong("high".into())
            ])
        );
    }

    #[test]
    fn test_indented_bullet_strips_marker() {
        let blocks = format_reply("   - Dining");
        assert_eq!(blocks, vec![Block::ListItem(vec![Span::Text("Dining".into())])]);
    }

    #[test]
    fn test_bold_line_is_not_a_bullet() {
        // "**x**" starts with '*' but not "* "
        let blocks = format_reply("**Top** categories");
        assert!(matches!(blocks[0], Block::Paragraph(_)));
    }

    #[test]
    fn test_unclosed_bold_left_literal() {
        assert_eq!(
            parse_inline("a **b c"),
            vec![Span::Text("a **b c".into())]
        );
    }

    #[test]
    fn test_multiple_bold_runs_lazy() {
        assert_eq!(
            parse_inline("**a** and **b**"),
            vec![
                Span::Strong("a".into()),
                Span::Text(" and ".into()),
                Span::Strong("b".into())
            ]
        );
    }

    #[test]
    fn test_plain_rendering() {
        let text = to_plain(&format_reply("**Total**: $100\n- Groceries\n\nDone"));
        assert_eq!(text, "Total: $100\n  • Groceries\n\nDone");
    }
}
