//! Immutable buffer snapshot consumed by the motion engine.

use super::position::{LineRange, Position};

/// An immutable view of the host buffer at one version.
///
/// The host constructs a fresh snapshot whenever the buffer changes; the
/// engine never observes a snapshot mutating mid-computation. Columns are
/// character offsets, lines are 0-indexed and stored without their
/// trailing newline.
#[derive(Debug, Clone)]
pub struct Snapshot {
    lines: Vec<String>,
    version: u64,
    caret: Position,
    visible: LineRange,
}

impl Snapshot {
    /// Create a snapshot from host data.
    pub fn new(lines: Vec<String>, version: u64, caret: Position, visible: LineRange) -> Self {
        Self {
            lines,
            version,
            caret,
            visible,
        }
    }

    /// Create a snapshot from text, with the caret at the origin and the
    /// whole buffer visible.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = if text.is_empty() {
            Vec::new()
        } else {
            text.lines().map(str::to_string).collect()
        };
        let last = lines.len().saturating_sub(1);
        Self {
            lines,
            version: 0,
            caret: Position::origin(),
            visible: LineRange::new(0, last),
        }
    }

    /// Return the snapshot with the caret moved.
    pub fn with_caret(mut self, caret: Position) -> Self {
        self.caret = caret;
        self
    }

    /// Return the snapshot with a different visible line range.
    pub fn with_visible(mut self, visible: LineRange) -> Self {
        self.visible = visible;
        self
    }

    /// The buffer version this snapshot was taken at.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The caret position.
    pub fn caret(&self) -> Position {
        self.caret
    }

    /// The visible line range supplied by the host viewport.
    pub fn visible(&self) -> LineRange {
        self.visible
    }

    /// Number of lines in the snapshot.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the snapshot holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the last line (0 for an empty snapshot).
    pub fn last_line(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    /// Get a line's content (0-indexed).
    pub fn line(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }

    /// Character count of a line, or 0 if the line does not exist.
    pub fn line_len(&self, line: usize) -> usize {
        self.line(line).map(|l| l.chars().count()).unwrap_or(0)
    }

    /// The character at a position.
    pub fn char_at(&self, pos: Position) -> Option<char> {
        self.line(pos.line)?.chars().nth(pos.column)
    }

    /// Column of the first non-blank character of a line, 0 when the line
    /// is empty or all blank.
    pub fn first_non_blank(&self, line: usize) -> usize {
        self.line(line)
            .and_then(|l| l.chars().position(|c| c != ' ' && c != '\t'))
            .unwrap_or(0)
    }

    /// Column of the last character of a line, 0 when the line is empty.
    pub fn last_char_column(&self, line: usize) -> usize {
        self.line_len(line).saturating_sub(1)
    }

    /// The position one past the last character of the buffer.
    pub fn end_position(&self) -> Position {
        let line = self.last_line();
        Position::new(line, self.line_len(line))
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::from_text("")
    }
}
