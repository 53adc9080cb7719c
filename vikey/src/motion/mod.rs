//! Motion calculus engine.
//!
//! Pure computation of the textual extent a motion denotes: the span, its
//! inclusive/exclusive and character-wise/line-wise classification, and
//! its direction. The incremental sub-grammar that turns keys into motion
//! requests lives here too.

#[allow(clippy::module_inception)]
mod motion;
mod parser;
mod result;
mod text_object;

pub use motion::{
    beginning_of_line, char_search, end_of_line, end_of_word, evaluate, first_non_whitespace,
    go_to_line, line_down, line_from_bottom, line_from_top, line_up, middle_of_window,
    paragraph_backward, paragraph_forward, quoted_string, section_backward, section_forward,
    word_backward, word_forward, CharSearchKind, Direction, Motion,
};
pub use parser::MotionParser;
pub use result::{MotionKind, MotionResult, OperationKind};
pub use text_object::{
    is_blank, is_blank_line, is_paragraph_boundary, is_punct, is_section_boundary, is_word_char,
    next_word_end, next_word_start, prev_word_start, WordKind,
};
