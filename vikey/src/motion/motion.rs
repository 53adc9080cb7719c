//! Motion primitives: pure evaluation over a buffer snapshot.
//!
//! Every function here is pure with respect to the supplied snapshot: the
//! same (snapshot, count) input always yields the same result, and nothing
//! mutates the buffer or the caret.

use super::result::{MotionKind, MotionResult};
use super::text_object::{
    self, find_quoted_pair, is_blank, is_paragraph_boundary, is_section_boundary, WordKind,
};
use crate::buffer::{Position, Snapshot, Span};
use crate::options::Options;

/// Scan direction of a motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// To-char or till-char flavor of a character search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharSearchKind {
    /// Land on the target character (`f`/`F`).
    ToChar,
    /// Stop one short of the target character (`t`/`T`).
    TillChar,
}

/// A motion request, resolved by the motion sub-grammar and evaluated
/// against a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Start of the next word (`w`/`W`).
    WordForward(WordKind),
    /// Start of the previous word (`b`/`B`).
    WordBackward(WordKind),
    /// End of the current or next word (`e`/`E`).
    EndOfWord(WordKind),
    /// One line up (`k`).
    LineUp,
    /// One line down (`j`).
    LineDown,
    /// Last character of the line (`$`).
    EndOfLine,
    /// Column zero (`0`).
    BeginningOfLine,
    /// First non-blank of the line (`^`).
    FirstNonWhitespace,
    /// Absolute line, last line without a count (`G`).
    GoToLine,
    /// Character search on the caret line (`f`/`F`/`t`/`T`).
    CharSearch {
        kind: CharSearchKind,
        direction: Direction,
        target: char,
    },
    /// Top of the visible window (`H`).
    LineFromTop,
    /// Bottom of the visible window (`L`).
    LineFromBottom,
    /// Middle of the visible window (`M`).
    MiddleOfWindow,
    /// Next section boundary (`]]`).
    SectionForward,
    /// Previous section boundary (`[[`).
    SectionBackward,
    /// Next paragraph boundary (`}`).
    ParagraphForward,
    /// Previous paragraph boundary (`{`).
    ParagraphBackward,
    /// Surrounding quoted string on the caret line (`a"` and friends).
    QuotedString { quote: char },
}

/// Evaluate a motion against a snapshot. `None` means the motion is not
/// applicable at the current position.
pub fn evaluate(
    motion: &Motion,
    snapshot: &Snapshot,
    options: &Options,
    count: Option<usize>,
) -> Option<MotionResult> {
    let n = count.unwrap_or(1);
    log::trace!("evaluate {:?} count {}", motion, n);
    match *motion {
        Motion::WordForward(kind) => Some(word_forward(snapshot, n, kind)),
        Motion::WordBackward(kind) => Some(word_backward(snapshot, n, kind)),
        Motion::EndOfWord(kind) => end_of_word(snapshot, n, kind),
        Motion::LineUp => Some(line_up(snapshot, n)),
        Motion::LineDown => Some(line_down(snapshot, n)),
        Motion::EndOfLine => Some(end_of_line(snapshot, n)),
        Motion::BeginningOfLine => Some(beginning_of_line(snapshot)),
        Motion::FirstNonWhitespace => Some(first_non_whitespace(snapshot)),
        Motion::GoToLine => Some(go_to_line(snapshot, options, count)),
        Motion::CharSearch {
            kind,
            direction,
            target,
        } => char_search(snapshot, target, n, kind, direction),
        Motion::LineFromTop => Some(line_from_top(snapshot, options, count)),
        Motion::LineFromBottom => Some(line_from_bottom(snapshot, options, count)),
        Motion::MiddleOfWindow => Some(middle_of_window(snapshot, options)),
        Motion::SectionForward => Some(section_forward(snapshot, options, n)),
        Motion::SectionBackward => Some(section_backward(snapshot, options, n)),
        Motion::ParagraphForward => Some(paragraph_forward(snapshot, options, n)),
        Motion::ParagraphBackward => Some(paragraph_backward(snapshot, options, n)),
        Motion::QuotedString { quote } => quoted_string(snapshot, options, quote),
    }
}

/// Forward to the start of the count-th next word; clamps at the end of
/// the buffer.
pub fn word_forward(snapshot: &Snapshot, count: usize, kind: WordKind) -> MotionResult {
    let caret = snapshot.caret();
    let mut pos = caret;
    for _ in 0..count {
        match text_object::next_word_start(snapshot, pos, kind) {
            Some(next) => pos = next,
            None => {
                pos = snapshot.end_position();
                break;
            }
        }
    }
    MotionResult::character_wise(Span::new(caret, pos), MotionKind::Exclusive, true)
}

/// Backward to the start of the count-th previous word; clamps at the
/// start of the buffer.
pub fn word_backward(snapshot: &Snapshot, count: usize, kind: WordKind) -> MotionResult {
    let caret = snapshot.caret();
    let mut pos = caret;
    for _ in 0..count {
        match text_object::prev_word_start(snapshot, pos, kind) {
            Some(prev) => pos = prev,
            None => {
                pos = Position::origin();
                break;
            }
        }
    }
    MotionResult::character_wise(Span::new(pos, caret), MotionKind::Exclusive, false)
}

/// Forward to the end of the count-th word. Unlike `word_forward`, a count
/// that runs past the end of the buffer makes the motion inapplicable.
pub fn end_of_word(snapshot: &Snapshot, count: usize, kind: WordKind) -> Option<MotionResult> {
    let caret = snapshot.caret();
    let mut pos = caret;
    for _ in 0..count {
        pos = text_object::next_word_end(snapshot, pos, kind)?;
    }
    Some(MotionResult::character_wise(
        Span::new(caret, pos),
        MotionKind::Inclusive,
        true,
    ))
}

/// Down `count` lines, clamped to the last line.
pub fn line_down(snapshot: &Snapshot, count: usize) -> MotionResult {
    let caret = snapshot.caret();
    let target = (caret.line + count).min(snapshot.last_line());
    let span = Span::new(Position::new(caret.line, 0), Position::new(target, 0));
    MotionResult::line_wise(span, MotionKind::Inclusive, true)
}

/// Up `count` lines, clamped to the first line.
pub fn line_up(snapshot: &Snapshot, count: usize) -> MotionResult {
    let caret = snapshot.caret();
    let target = caret.line.saturating_sub(count);
    let span = Span::new(Position::new(target, 0), Position::new(caret.line, 0));
    MotionResult::line_wise(span, MotionKind::Inclusive, false)
}

/// To the last character of the line; a count moves to the end of the
/// line `count - 1` below, clamped.
pub fn end_of_line(snapshot: &Snapshot, count: usize) -> MotionResult {
    let caret = snapshot.caret();
    let target_line = (caret.line + count - 1).min(snapshot.last_line());
    let end = Position::new(target_line, snapshot.last_char_column(target_line));
    MotionResult::character_wise(Span::new(caret, end), MotionKind::Inclusive, true)
}

/// To column zero of the caret line.
pub fn beginning_of_line(snapshot: &Snapshot) -> MotionResult {
    let caret = snapshot.caret();
    let start = Position::new(caret.line, 0);
    MotionResult::character_wise(Span::new(start, caret), MotionKind::Exclusive, false)
}

/// To the first non-blank of the caret line.
pub fn first_non_whitespace(snapshot: &Snapshot) -> MotionResult {
    let caret = snapshot.caret();
    let target = Position::new(caret.line, snapshot.first_non_blank(caret.line));
    let is_forward = target.column > caret.column;
    MotionResult::character_wise(Span::new(target, caret), MotionKind::Exclusive, is_forward)
}

/// To an absolute line: the count names a 1-based line number, no count
/// means the last line. Clamped to the buffer.
pub fn go_to_line(snapshot: &Snapshot, options: &Options, count: Option<usize>) -> MotionResult {
    let target = match count {
        Some(n) => n.saturating_sub(1).min(snapshot.last_line()),
        None => snapshot.last_line(),
    };
    line_wise_to(snapshot, options, target)
}

/// Search the caret line for the count-th occurrence of `target`. An
/// absent target or an out-of-range count yields `None`, never a
/// zero-length span.
pub fn char_search(
    snapshot: &Snapshot,
    target: char,
    count: usize,
    kind: CharSearchKind,
    direction: Direction,
) -> Option<MotionResult> {
    let caret = snapshot.caret();
    let chars: Vec<char> = snapshot.line(caret.line)?.chars().collect();

    match direction {
        Direction::Forward => {
            let mut remaining = count;
            let mut hit = None;
            for (col, &c) in chars.iter().enumerate().skip(caret.column + 1) {
                if c == target {
                    remaining -= 1;
                    if remaining == 0 {
                        hit = Some(col);
                        break;
                    }
                }
            }
            let mut col = hit?;
            if kind == CharSearchKind::TillChar {
                col -= 1;
            }
            if col <= caret.column {
                return None;
            }
            let span = Span::new(caret, Position::new(caret.line, col));
            Some(MotionResult::character_wise(span, MotionKind::Inclusive, true))
        }
        Direction::Backward => {
            let mut remaining = count;
            let mut hit = None;
            for col in (0..caret.column.min(chars.len())).rev() {
                if chars[col] == target {
                    remaining -= 1;
                    if remaining == 0 {
                        hit = Some(col);
                        break;
                    }
                }
            }
            let mut col = hit?;
            if kind == CharSearchKind::TillChar {
                col += 1;
            }
            if col >= caret.column {
                return None;
            }
            let span = Span::new(Position::new(caret.line, col), caret);
            Some(MotionResult::character_wise(
                span,
                MotionKind::Exclusive,
                false,
            ))
        }
    }
}

/// To the count-th line from the top of the visible window.
pub fn line_from_top(snapshot: &Snapshot, options: &Options, count: Option<usize>) -> MotionResult {
    let visible = snapshot.visible();
    let target = (visible.first + count.unwrap_or(1) - 1)
        .min(visible.last)
        .min(snapshot.last_line());
    line_wise_to(snapshot, options, target)
}

/// To the count-th line from the bottom of the visible window.
pub fn line_from_bottom(
    snapshot: &Snapshot,
    options: &Options,
    count: Option<usize>,
) -> MotionResult {
    let visible = snapshot.visible();
    let bottom = visible.last.min(snapshot.last_line());
    let target = bottom
        .saturating_sub(count.unwrap_or(1) - 1)
        .max(visible.first.min(bottom));
    line_wise_to(snapshot, options, target)
}

/// To the middle line of the visible window.
pub fn middle_of_window(snapshot: &Snapshot, options: &Options) -> MotionResult {
    let visible = snapshot.visible();
    let bottom = visible.last.min(snapshot.last_line());
    let target = (visible.first.min(bottom) + bottom) / 2;
    line_wise_to(snapshot, options, target)
}

/// Line-wise span from the caret line to `target`, reporting the first
/// non-blank column when the start-of-line option is set.
fn line_wise_to(snapshot: &Snapshot, options: &Options, target: usize) -> MotionResult {
    let caret = snapshot.caret();
    let (start, end, is_forward) = if target >= caret.line {
        (caret.line, target, true)
    } else {
        (target, caret.line, false)
    };
    let span = Span::new(Position::new(start, 0), Position::new(end, 0));
    let mut result = MotionResult::line_wise(span, MotionKind::Inclusive, is_forward);
    if options.start_of_line {
        result = result.with_caret_column(snapshot.first_non_blank(target));
    }
    result
}

/// Forward to the count-th section boundary; clamps to the last line.
pub fn section_forward(snapshot: &Snapshot, options: &Options, count: usize) -> MotionResult {
    let caret = snapshot.caret();
    let mut line = caret.line;
    for _ in 0..count {
        let next = (line + 1..=snapshot.last_line())
            .find(|&n| is_section_boundary(snapshot, n, options.section_marker));
        match next {
            Some(n) => line = n,
            None => {
                line = snapshot.last_line();
                break;
            }
        }
    }
    let span = Span::new(Position::new(caret.line, 0), Position::new(line, 0));
    MotionResult::line_wise(span, MotionKind::Exclusive, true)
}

/// Backward to the count-th section boundary; clamps to the first line.
pub fn section_backward(snapshot: &Snapshot, options: &Options, count: usize) -> MotionResult {
    let caret = snapshot.caret();
    let mut line = caret.line;
    for _ in 0..count {
        let prev = (0..line)
            .rev()
            .find(|&n| is_section_boundary(snapshot, n, options.section_marker));
        match prev {
            Some(n) => line = n,
            None => {
                line = 0;
                break;
            }
        }
    }
    let span = Span::new(Position::new(line, 0), Position::new(caret.line, 0));
    MotionResult::line_wise(span, MotionKind::Exclusive, false)
}

/// Forward to the count-th paragraph boundary; clamps to the last line.
pub fn paragraph_forward(snapshot: &Snapshot, options: &Options, count: usize) -> MotionResult {
    let caret = snapshot.caret();
    let mut line = caret.line;
    for _ in 0..count {
        let next = (line + 1..=snapshot.last_line())
            .find(|&n| is_paragraph_boundary(snapshot, n, options.section_marker));
        match next {
            Some(n) => line = n,
            None => {
                line = snapshot.last_line();
                break;
            }
        }
    }
    let span = Span::new(Position::new(caret.line, 0), Position::new(line, 0));
    MotionResult::line_wise(span, MotionKind::Exclusive, true)
}

/// Backward to the count-th paragraph boundary; clamps to the first line.
pub fn paragraph_backward(snapshot: &Snapshot, options: &Options, count: usize) -> MotionResult {
    let caret = snapshot.caret();
    let mut line = caret.line;
    for _ in 0..count {
        let prev = (0..line)
            .rev()
            .find(|&n| is_paragraph_boundary(snapshot, n, options.section_marker));
        match prev {
            Some(n) => line = n,
            None => {
                line = 0;
                break;
            }
        }
    }
    let span = Span::new(Position::new(line, 0), Position::new(caret.line, 0));
    MotionResult::line_wise(span, MotionKind::Exclusive, false)
}

/// The quoted string around or after the caret on its line, including the
/// quotes. Trailing whitespace is preferred over leading whitespace when
/// both are adjacent. Quotes escaped with the configured escape character
/// are skipped.
pub fn quoted_string(snapshot: &Snapshot, options: &Options, quote: char) -> Option<MotionResult> {
    let caret = snapshot.caret();
    let (mut start, mut end) =
        find_quoted_pair(snapshot, caret, quote, options.quote_escape)?;
    let chars: Vec<char> = snapshot.line(caret.line)?.chars().collect();

    let mut trailing = end;
    while trailing + 1 < chars.len() && is_blank(chars[trailing + 1]) {
        trailing += 1;
    }
    if trailing > end {
        end = trailing;
    } else {
        while start > 0 && is_blank(chars[start - 1]) {
            start -= 1;
        }
    }

    let span = Span::new(
        Position::new(caret.line, start),
        Position::new(caret.line, end),
    );
    Some(MotionResult::character_wise(span, MotionKind::Inclusive, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::LineRange;
    use crate::motion::OperationKind;

    fn snap(text: &str) -> Snapshot {
        Snapshot::from_text(text)
    }

    #[test]
    fn test_word_forward_basic() {
        let result = word_forward(&snap("foo bar"), 1, WordKind::Normal);
        assert_eq!(
            result.span,
            Span::new(Position::new(0, 0), Position::new(0, 4))
        );
        assert_eq!(result.kind, MotionKind::Exclusive);
        assert_eq!(result.op_kind, OperationKind::CharacterWise);
        assert!(result.is_forward);
    }

    #[test]
    fn test_word_forward_clamps_at_buffer_end() {
        let result = word_forward(&snap("foo bar"), 10, WordKind::Normal);
        assert_eq!(result.span.end(), Position::new(0, 7));
    }

    #[test]
    fn test_word_backward() {
        let s = snap("foo bar").with_caret(Position::new(0, 4));
        let result = word_backward(&s, 1, WordKind::Normal);
        assert_eq!(
            result.span,
            Span::new(Position::new(0, 0), Position::new(0, 4))
        );
        assert!(!result.is_forward);
    }

    #[test]
    fn test_end_of_word() {
        let result = end_of_word(&snap("foo bar"), 1, WordKind::Normal).unwrap();
        assert_eq!(result.span.end(), Position::new(0, 2));
        assert_eq!(result.kind, MotionKind::Inclusive);
    }

    #[test]
    fn test_end_of_word_count_past_buffer() {
        assert_eq!(end_of_word(&snap("foo bar"), 3, WordKind::Normal), None);
    }

    #[test]
    fn test_line_down_clamps() {
        let result = line_down(&snap("a\nb\nc"), 10);
        assert_eq!(result.span.end().line, 2);
        assert_eq!(result.op_kind, OperationKind::LineWise);
    }

    #[test]
    fn test_line_up() {
        let s = snap("a\nb\nc").with_caret(Position::new(2, 0));
        let result = line_up(&s, 1);
        assert_eq!(result.span.start().line, 1);
        assert_eq!(result.span.end().line, 2);
        assert!(!result.is_forward);
    }

    #[test]
    fn test_end_of_line_whole_line() {
        let result = end_of_line(&snap("foo"), 1);
        assert_eq!(
            result.span,
            Span::new(Position::new(0, 0), Position::new(0, 2))
        );
        assert_eq!(result.kind, MotionKind::Inclusive);
        assert_eq!(result.op_kind, OperationKind::CharacterWise);
    }

    #[test]
    fn test_end_of_line_with_count() {
        let result = end_of_line(&snap("ab\ncdef"), 2);
        assert_eq!(result.span.end(), Position::new(1, 3));
    }

    #[test]
    fn test_beginning_of_line() {
        let s = snap("hello").with_caret(Position::new(0, 3));
        let result = beginning_of_line(&s);
        assert_eq!(
            result.span,
            Span::new(Position::new(0, 0), Position::new(0, 3))
        );
        assert_eq!(result.kind, MotionKind::Exclusive);
        assert!(!result.is_forward);
    }

    #[test]
    fn test_first_non_whitespace() {
        let s = snap("   abc").with_caret(Position::new(0, 5));
        let result = first_non_whitespace(&s);
        assert_eq!(result.span.start(), Position::new(0, 3));
        assert!(!result.is_forward);

        let s = snap("   abc").with_caret(Position::new(0, 0));
        let result = first_non_whitespace(&s);
        assert!(result.is_forward);
    }

    #[test]
    fn test_go_to_line() {
        let options = Options::default();
        let s = snap("a\n  b\nc");
        let result = go_to_line(&s, &options, Some(2));
        assert_eq!(result.span.end().line, 1);
        assert_eq!(result.caret_column, Some(2));

        let result = go_to_line(&s, &options, None);
        assert_eq!(result.span.end().line, 2);
    }

    #[test]
    fn test_char_search_forward() {
        let result = char_search(
            &snap("hello world"),
            'o',
            1,
            CharSearchKind::ToChar,
            Direction::Forward,
        )
        .unwrap();
        assert_eq!(result.span.end(), Position::new(0, 4));
        assert_eq!(result.kind, MotionKind::Inclusive);
    }

    #[test]
    fn test_char_search_second_occurrence() {
        let result = char_search(
            &snap("hello world"),
            'o',
            2,
            CharSearchKind::ToChar,
            Direction::Forward,
        )
        .unwrap();
        assert_eq!(result.span.end(), Position::new(0, 7));
    }

    #[test]
    fn test_char_search_till() {
        let result = char_search(
            &snap("hello"),
            'l',
            1,
            CharSearchKind::TillChar,
            Direction::Forward,
        )
        .unwrap();
        assert_eq!(result.span.end(), Position::new(0, 1));
    }

    #[test]
    fn test_char_search_absent_target() {
        assert_eq!(
            char_search(
                &snap("hello"),
                'z',
                1,
                CharSearchKind::ToChar,
                Direction::Forward
            ),
            None
        );
    }

    #[test]
    fn test_char_search_count_out_of_range() {
        assert_eq!(
            char_search(
                &snap("hello"),
                'l',
                3,
                CharSearchKind::ToChar,
                Direction::Forward
            ),
            None
        );
    }

    #[test]
    fn test_char_search_till_adjacent_is_inapplicable() {
        // Caret just before the target: a till-search would be zero-length.
        let s = snap("ab").with_caret(Position::new(0, 0));
        assert_eq!(
            char_search(&s, 'b', 1, CharSearchKind::TillChar, Direction::Forward),
            None
        );
    }

    #[test]
    fn test_char_search_backward() {
        let s = snap("hello world").with_caret(Position::new(0, 10));
        let result =
            char_search(&s, 'o', 1, CharSearchKind::ToChar, Direction::Backward).unwrap();
        assert_eq!(result.span.start(), Position::new(0, 7));
        assert_eq!(result.kind, MotionKind::Exclusive);
        assert!(!result.is_forward);
    }

    #[test]
    fn test_line_from_bottom_viewport() {
        let options = Options {
            start_of_line: false,
            ..Options::default()
        };
        let s = snap("a\nb\nc\nd").with_visible(LineRange::new(0, 2));
        let result = line_from_bottom(&s, &options, None);
        assert_eq!(result.span.start().line, 0);
        assert_eq!(result.span.end().line, 2);
        assert!(result.is_forward);
        assert_eq!(result.caret_column, None);
    }

    #[test]
    fn test_line_from_top_start_of_line_column() {
        let options = Options::default();
        let s = snap("  a\nb\nc\nd")
            .with_visible(LineRange::new(0, 2))
            .with_caret(Position::new(2, 0));
        let result = line_from_top(&s, &options, None);
        assert_eq!(result.span.start().line, 0);
        assert_eq!(result.caret_column, Some(2));
        assert!(!result.is_forward);
    }

    #[test]
    fn test_middle_of_window() {
        let options = Options::default();
        let s = snap("a\nb\nc\nd\ne").with_visible(LineRange::new(0, 4));
        let result = middle_of_window(&s, &options);
        assert_eq!(result.span.end().line, 2);
    }

    #[test]
    fn test_viewport_clamped_to_buffer() {
        // The viewport may extend past a short buffer.
        let options = Options::default();
        let s = snap("a\nb").with_visible(LineRange::new(0, 10));
        let result = line_from_bottom(&s, &options, None);
        assert_eq!(result.span.end().line, 1);
    }

    #[test]
    fn test_section_forward() {
        let options = Options::default();
        let s = snap("text\n{\nmore\n{\nend");
        let result = section_forward(&s, &options, 1);
        assert_eq!(result.span.end().line, 1);
        let result = section_forward(&s, &options, 2);
        assert_eq!(result.span.end().line, 3);
    }

    #[test]
    fn test_section_forward_ignores_mid_line_marker() {
        let options = Options::default();
        let s = snap("fn f() {\nbody\n{\nend");
        let result = section_forward(&s, &options, 1);
        assert_eq!(result.span.end().line, 2);
    }

    #[test]
    fn test_section_forward_clamps() {
        let options = Options::default();
        let s = snap("a\nb\nc");
        let result = section_forward(&s, &options, 5);
        assert_eq!(result.span.end().line, 2);
    }

    #[test]
    fn test_section_backward() {
        let options = Options::default();
        let s = snap("{\na\n{\nb").with_caret(Position::new(3, 0));
        let result = section_backward(&s, &options, 1);
        assert_eq!(result.span.start().line, 2);
        assert!(!result.is_forward);
    }

    #[test]
    fn test_paragraph_forward() {
        let options = Options::default();
        let s = snap("one\ntwo\n\nthree");
        let result = paragraph_forward(&s, &options, 1);
        assert_eq!(result.span.end().line, 2);
        assert_eq!(result.op_kind, OperationKind::LineWise);
    }

    #[test]
    fn test_paragraph_backward() {
        let options = Options::default();
        let s = snap("one\n\ntwo\nthree").with_caret(Position::new(3, 0));
        let result = paragraph_backward(&s, &options, 1);
        assert_eq!(result.span.start().line, 1);
    }

    #[test]
    fn test_quoted_string_trailing_whitespace_preferred() {
        let options = Options::default();
        let s = snap(r#"x "ab" y"#).with_caret(Position::new(0, 4));
        let result = quoted_string(&s, &options, '"').unwrap();
        // Quotes at 2 and 5, one trailing blank extends the span to 6.
        assert_eq!(
            result.span,
            Span::new(Position::new(0, 2), Position::new(0, 6))
        );
        assert_eq!(result.kind, MotionKind::Inclusive);
    }

    #[test]
    fn test_quoted_string_leading_whitespace_fallback() {
        let options = Options::default();
        let s = snap(r#"x "ab""#).with_caret(Position::new(0, 4));
        let result = quoted_string(&s, &options, '"').unwrap();
        // No trailing blanks: the leading blank before the quote joins in.
        assert_eq!(
            result.span,
            Span::new(Position::new(0, 1), Position::new(0, 5))
        );
    }

    #[test]
    fn test_quoted_string_absent() {
        let options = Options::default();
        assert_eq!(quoted_string(&snap("plain"), &options, '"'), None);
    }

    #[test]
    fn test_evaluate_dispatch() {
        let options = Options::default();
        let s = snap("foo bar");
        let result = evaluate(&Motion::WordForward(WordKind::Normal), &s, &options, None).unwrap();
        assert_eq!(result.span.end(), Position::new(0, 4));

        let result = evaluate(&Motion::EndOfWord(WordKind::Normal), &s, &options, Some(9));
        assert_eq!(result, None);
    }
}
