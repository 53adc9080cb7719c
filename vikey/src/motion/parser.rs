//! Incremental parser for the motion half of an operator command.

use super::motion::{evaluate, CharSearchKind, Direction, Motion};
use super::result::MotionResult;
use super::text_object::WordKind;
use crate::buffer::Snapshot;
use crate::command::{BindResult, KeyRemapMode};
use crate::error::BindError;
use crate::input::KeyEvent;
use crate::options::Options;

/// Parse state of the motion sub-grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Accumulating count digits or waiting for the motion name.
    Start,
    /// First key of a two-key motion name was seen.
    Pending(char),
    /// Motion name seen; waiting for its character argument.
    CharArg {
        kind: CharSearchKind,
        direction: Direction,
    },
}

/// The motion sub-grammar the resolution engine delegates to once an
/// operator is selected: optional count digits, a one- or two-key motion
/// name, then a character argument for the search motions.
#[derive(Debug)]
pub struct MotionParser {
    count: usize,
    has_count: bool,
    state: ParseState,
}

impl MotionParser {
    /// Create a parser ready for the first motion key.
    pub fn new() -> Self {
        Self {
            count: 0,
            has_count: false,
            state: ParseState::Start,
        }
    }

    /// The remap mode the next key should be interpreted under.
    pub fn remap_mode(&self) -> KeyRemapMode {
        match self.state {
            ParseState::CharArg { .. } => KeyRemapMode::Language,
            _ => KeyRemapMode::OperatorPending,
        }
    }

    /// Combine the operator's count with the motion's own count. `None`
    /// when neither was typed.
    pub fn combined_count(&self, outer: Option<usize>) -> Option<usize> {
        if outer.is_none() && !self.has_count {
            return None;
        }
        let inner = if self.has_count { self.count } else { 1 };
        Some(outer.unwrap_or(1).saturating_mul(inner))
    }

    /// Feed one key. Completion evaluates the motion against the snapshot;
    /// an inapplicable motion reports `Cancelled`.
    pub fn step(
        &mut self,
        key: KeyEvent,
        snapshot: &Snapshot,
        options: &Options,
        outer_count: Option<usize>,
    ) -> BindResult<MotionResult> {
        if key.is_escape() {
            return BindResult::Cancelled;
        }
        let Some(c) = key.as_char() else {
            return BindResult::Error(BindError::NoMatchingBinding);
        };

        match self.state {
            ParseState::Start => self.step_start(c, snapshot, options, outer_count),
            ParseState::Pending(first) => {
                let motion = match (first, c) {
                    (']', ']') => Motion::SectionForward,
                    ('[', '[') => Motion::SectionBackward,
                    ('a', '"') | ('a', '\'') | ('a', '`') => Motion::QuotedString { quote: c },
                    _ => return BindResult::Error(BindError::NoMatchingBinding),
                };
                self.finish(motion, snapshot, options, outer_count)
            }
            ParseState::CharArg { kind, direction } => self.finish(
                Motion::CharSearch {
                    kind,
                    direction,
                    target: c,
                },
                snapshot,
                options,
                outer_count,
            ),
        }
    }

    fn step_start(
        &mut self,
        c: char,
        snapshot: &Snapshot,
        options: &Options,
        outer_count: Option<usize>,
    ) -> BindResult<MotionResult> {
        // A leading 0 is the beginning-of-line motion, not a count digit.
        if let Some(d) = c.to_digit(10) {
            if d != 0 || self.has_count {
                self.count = self.count.saturating_mul(10).saturating_add(d as usize);
                self.has_count = true;
                return BindResult::NeedMoreInput(KeyRemapMode::OperatorPending);
            }
        }

        let motion = match c {
            'w' => Motion::WordForward(WordKind::Normal),
            'W' => Motion::WordForward(WordKind::Big),
            'b' => Motion::WordBackward(WordKind::Normal),
            'B' => Motion::WordBackward(WordKind::Big),
            'e' => Motion::EndOfWord(WordKind::Normal),
            'E' => Motion::EndOfWord(WordKind::Big),
            'j' => Motion::LineDown,
            'k' => Motion::LineUp,
            '$' => Motion::EndOfLine,
            '0' => Motion::BeginningOfLine,
            '^' => Motion::FirstNonWhitespace,
            'G' => Motion::GoToLine,
            'H' => Motion::LineFromTop,
            'L' => Motion::LineFromBottom,
            'M' => Motion::MiddleOfWindow,
            '}' => Motion::ParagraphForward,
            '{' => Motion::ParagraphBackward,
            ']' | '[' | 'a' => {
                self.state = ParseState::Pending(c);
                return BindResult::NeedMoreInput(KeyRemapMode::OperatorPending);
            }
            'f' => {
                self.state = ParseState::CharArg {
                    kind: CharSearchKind::ToChar,
                    direction: Direction::Forward,
                };
                return BindResult::NeedMoreInput(KeyRemapMode::Language);
            }
            'F' => {
                self.state = ParseState::CharArg {
                    kind: CharSearchKind::ToChar,
                    direction: Direction::Backward,
                };
                return BindResult::NeedMoreInput(KeyRemapMode::Language);
            }
            't' => {
                self.state = ParseState::CharArg {
                    kind: CharSearchKind::TillChar,
                    direction: Direction::Forward,
                };
                return BindResult::NeedMoreInput(KeyRemapMode::Language);
            }
            'T' => {
                self.state = ParseState::CharArg {
                    kind: CharSearchKind::TillChar,
                    direction: Direction::Backward,
                };
                return BindResult::NeedMoreInput(KeyRemapMode::Language);
            }
            _ => return BindResult::Error(BindError::NoMatchingBinding),
        };
        self.finish(motion, snapshot, options, outer_count)
    }

    fn finish(
        &mut self,
        motion: Motion,
        snapshot: &Snapshot,
        options: &Options,
        outer_count: Option<usize>,
    ) -> BindResult<MotionResult> {
        let count = self.combined_count(outer_count);
        match evaluate(&motion, snapshot, options, count) {
            Some(result) => BindResult::Complete(result),
            None => BindResult::Cancelled,
        }
    }
}

impl Default for MotionParser {
    fn default() -> Self {
        Self::new()
    }
}
