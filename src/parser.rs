use once_cell::sync::Lazy;
use regex::Regex;

use crate::block::{Block, Line, LineKind, List, ListItem};
use crate::inline;

/// Heading patterns, most specific first so `######` is never read as `#`.
static HEADINGS: Lazy<Vec<(u8, Regex)>> = Lazy::new(|| {
    (1..=6u8)
        .rev()
        .map(|level| {
            let pattern = format!("^#{{{level}}} (.*)$");
            (level, Regex::new(&pattern).unwrap())
        })
        .collect()
});

static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[-*+]\s+(.*)$").unwrap());

/// Parse text into a list of blocks, one per output line.
pub fn parse(text: &str) -> Vec<Block> {
    let lines = classify_headings(split_lines(text));
    let lines = render_inline(lines);
    let lines = classify_list_items(lines);
    let grouped = group_lists(lines);
    let blocks = wrap_paragraphs(grouped);
    let blocks = collapse_adjacent_lists(blocks);

    log::debug!("parsed {} blocks", blocks.len());
    blocks
}

/// Split on `\n`, dropping a trailing `\r`. A trailing newline yields a final
/// empty line so it survives the round trip.
fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

fn classify_heading(raw: &str) -> Line {
    if raw.trim().is_empty() {
        return Line {
            kind: LineKind::Blank,
            text: raw.to_string(),
        };
    }
    for (level, pattern) in HEADINGS.iter() {
        if let Some(caps) = pattern.captures(raw) {
            return Line {
                kind: LineKind::Heading(*level),
                text: caps[1].to_string(),
            };
        }
    }
    Line {
        kind: LineKind::Plain,
        text: raw.to_string(),
    }
}

/// Stage 1: tag heading lines and strip their `#` prefix.
pub fn classify_headings(raw: Vec<&str>) -> Vec<Line> {
    raw.into_iter().map(classify_heading).collect()
}

/// Stages 2-4: bold, italic and link spans on every line.
pub fn render_inline(lines: Vec<Line>) -> Vec<Line> {
    lines
        .into_iter()
        .map(|line| Line {
            text: inline::render(&line.text),
            kind: line.kind,
        })
        .collect()
}

/// Stage 5: tag list items among plain lines and strip their marker.
///
/// Runs after the inline passes, so a `*` marker already consumed as italic
/// no longer starts a list item.
pub fn classify_list_items(lines: Vec<Line>) -> Vec<Line> {
    lines
        .into_iter()
        .map(|line| {
            if line.kind != LineKind::Plain {
                return line;
            }
            match LIST_ITEM.captures(&line.text) {
                Some(caps) => Line {
                    kind: LineKind::ListItem,
                    text: caps[1].to_string(),
                },
                None => line,
            }
        })
        .inspect(|line| log::trace!("{:?}: {}", line.kind, line.text))
        .collect()
}

/// Output of list grouping: a line that is not a list item, or a run of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grouped {
    Line(Line),
    List(List),
}

/// Stage 6: gather every maximal run of consecutive list items into one list.
pub fn group_lists(lines: Vec<Line>) -> Vec<Grouped> {
    let mut out: Vec<Grouped> = Vec::new();

    for line in lines {
        if line.kind == LineKind::ListItem {
            let item = ListItem { content: line.text };
            match out.last_mut() {
                Some(Grouped::List(list)) => list.items.push(item),
                _ => out.push(Grouped::List(List { items: vec![item] })),
            }
        } else {
            out.push(Grouped::Line(line));
        }
    }

    out
}

/// Stage 7: every plain line becomes a paragraph of its trimmed text. Blank
/// lines, headings and lists pass through.
pub fn wrap_paragraphs(grouped: Vec<Grouped>) -> Vec<Block> {
    grouped
        .into_iter()
        .map(|group| match group {
            Grouped::List(list) => Block::List(list),
            Grouped::Line(line) => match line.kind {
                LineKind::Blank => Block::Blank(line.text),
                LineKind::Heading(level) => Block::Heading {
                    level,
                    content: line.text,
                },
                LineKind::Plain => Block::Paragraph {
                    content: line.text.trim().to_string(),
                },
                // Grouping leaves no bare items behind
                LineKind::ListItem => Block::List(List {
                    items: vec![ListItem { content: line.text }],
                }),
            },
        })
        .collect()
}

/// Stage 8: merge lists separated only by blank lines into a single list.
pub fn collapse_adjacent_lists(blocks: Vec<Block>) -> Vec<Block> {
    let mut out: Vec<Block> = Vec::with_capacity(blocks.len());
    // Blank lines seen since the last list, dropped if another list follows
    let mut pending: Vec<Block> = Vec::new();

    for block in blocks {
        match block {
            Block::Blank(_) if matches!(out.last(), Some(Block::List(_))) => {
                pending.push(block);
            }
            Block::List(list) => {
                if let Some(Block::List(prev)) = out.last_mut() {
                    prev.items.extend(list.items);
                    pending.clear();
                } else {
                    out.push(Block::List(list));
                }
            }
            other => {
                out.append(&mut pending);
                out.push(other);
            }
        }
    }
    out.append(&mut pending);

    out
}
