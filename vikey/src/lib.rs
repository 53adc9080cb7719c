//! vikey: the keystroke-interpretation core of a modal text editor.
//!
//! Two engines make up the crate. The command resolution engine turns an
//! incrementally-delivered stream of key events into fully-resolved
//! command runs, handling count and register prefixes, prefix ambiguity
//! between bindings, escape cancellation, and long-command continuations.
//! The motion calculus engine computes the textual extent a motion
//! denotes over an immutable buffer snapshot, with its inclusive/
//! exclusive and character-wise/line-wise classification.
//!
//! The host editor owns the text buffer, the key-remapping table, and
//! command execution; this crate consumes snapshots and produces resolved
//! run records.

pub mod buffer;
pub mod command;
pub mod error;
pub mod input;
pub mod motion;
pub mod options;

pub use buffer::{LineRange, Position, Snapshot, Span};
pub use command::{
    BindResult, CommandBinding, CommandCatalog, CommandFlags, CommandKind, CommandRunData,
    CommandRunner, KeyRemapMode,
};
pub use error::{BindError, Result};
pub use input::{KeyCode, KeyEvent, KeyModifiers, KeyTrigger};
pub use motion::{
    CharSearchKind, Direction, Motion, MotionKind, MotionParser, MotionResult, OperationKind,
    WordKind,
};
pub use options::Options;
