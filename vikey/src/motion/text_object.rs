//! Word, paragraph, and section scanning over a buffer snapshot.

use crate::buffer::{Position, Snapshot};

/// Word granularity of a word motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordKind {
    /// Runs of alphanumerics/underscore; punctuation runs are their own
    /// pseudo-words.
    Normal,
    /// Blank-delimited runs only.
    Big,
}

/// Check if a character is a word character (alphanumeric or underscore).
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Check if a character is a blank (space or tab).
pub fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Check if a character is punctuation (non-blank, non-word).
pub fn is_punct(c: char) -> bool {
    !is_blank(c) && !is_word_char(c)
}

/// Character class under a word kind. For `Big` words every non-blank
/// belongs to the same class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Word,
    Punct,
    Blank,
}

fn classify(c: char, kind: WordKind) -> CharClass {
    if is_blank(c) {
        CharClass::Blank
    } else if kind == WordKind::Big || is_word_char(c) {
        CharClass::Word
    } else {
        CharClass::Punct
    }
}

fn line_chars(snapshot: &Snapshot, line: usize) -> Option<Vec<char>> {
    snapshot.line(line).map(|l| l.chars().collect())
}

/// Find the start of the next word after `pos`, crossing line boundaries.
/// `None` when no word follows.
pub fn next_word_start(snapshot: &Snapshot, pos: Position, kind: WordKind) -> Option<Position> {
    let mut line = pos.line;
    let mut col = pos.column;

    // Skip the run the caret sits on.
    let chars = line_chars(snapshot, line)?;
    if let Some(&c) = chars.get(col) {
        let class = classify(c, kind);
        if class != CharClass::Blank {
            while col < chars.len() && classify(chars[col], kind) == class {
                col += 1;
            }
        }
    }

    // The next non-blank character, on this line or a later one, starts
    // the next word.
    loop {
        let chars = line_chars(snapshot, line)?;
        while col < chars.len() && is_blank(chars[col]) {
            col += 1;
        }
        if col < chars.len() {
            return Some(Position::new(line, col));
        }
        if line + 1 >= snapshot.line_count() {
            return None;
        }
        line += 1;
        col = 0;
    }
}

/// Find the start of the word before `pos`, crossing line boundaries.
/// `None` when nothing precedes.
pub fn prev_word_start(snapshot: &Snapshot, pos: Position, kind: WordKind) -> Option<Position> {
    let mut line = pos.line;
    let mut col = pos.column;

    // Step to the previous character, then keep stepping while blank.
    loop {
        if col > 0 {
            col -= 1;
        } else {
            if line == 0 {
                return None;
            }
            line -= 1;
            let len = snapshot.line_len(line);
            if len == 0 {
                continue;
            }
            col = len - 1;
        }
        let c = snapshot.char_at(Position::new(line, col))?;
        if !is_blank(c) {
            break;
        }
    }

    // Walk back to the start of the run.
    let chars = line_chars(snapshot, line)?;
    let class = classify(chars[col], kind);
    while col > 0 && classify(chars[col - 1], kind) == class {
        col -= 1;
    }
    Some(Position::new(line, col))
}

/// Find the end of the current or next word, advancing at least one
/// character. A maximal punctuation run counts as its own word. `None`
/// when the scan runs past the end of the buffer.
pub fn next_word_end(snapshot: &Snapshot, pos: Position, kind: WordKind) -> Option<Position> {
    let mut line = pos.line;
    let mut col = pos.column + 1;

    loop {
        if line >= snapshot.line_count() {
            return None;
        }
        let chars = line_chars(snapshot, line)?;
        if col >= chars.len() {
            line += 1;
            col = 0;
            continue;
        }
        if is_blank(chars[col]) {
            col += 1;
            continue;
        }
        let class = classify(chars[col], kind);
        let mut end = col;
        while end + 1 < chars.len() && classify(chars[end + 1], kind) == class {
            end += 1;
        }
        return Some(Position::new(line, end));
    }
}

/// Check if a line is blank (empty or whitespace only).
pub fn is_blank_line(snapshot: &Snapshot, line: usize) -> bool {
    match snapshot.line(line) {
        Some(content) => content.chars().all(is_blank),
        None => true,
    }
}

/// Check if a line opens a section: the boundary marker in column zero.
/// The marker elsewhere on the line is ignored.
pub fn is_section_boundary(snapshot: &Snapshot, line: usize, marker: char) -> bool {
    snapshot
        .line(line)
        .and_then(|l| l.chars().next())
        .map(|c| c == marker)
        .unwrap_or(false)
}

/// Check if a line bounds a paragraph: a blank line or a section boundary.
pub fn is_paragraph_boundary(snapshot: &Snapshot, line: usize, marker: char) -> bool {
    is_blank_line(snapshot, line) || is_section_boundary(snapshot, line, marker)
}

/// Find the quoted string on the caret line: the column pair of the
/// opening and closing quote. Quotes preceded by the escape character do
/// not count. Returns the pair containing the caret, or the first pair
/// after it.
pub fn find_quoted_pair(
    snapshot: &Snapshot,
    pos: Position,
    quote: char,
    escape: char,
) -> Option<(usize, usize)> {
    let chars = line_chars(snapshot, pos.line)?;
    let mut quotes = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == escape {
            i += 2;
            continue;
        }
        if chars[i] == quote {
            quotes.push(i);
        }
        i += 1;
    }

    for pair in quotes.chunks(2) {
        if let [start, end] = pair {
            if pos.column <= *end {
                return Some((*start, *end));
            }
        }
    }
    None
}
