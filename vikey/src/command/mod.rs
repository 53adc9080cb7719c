//! Command catalog and resolution engine.
//!
//! Bindings are registered once and matched incrementally against the
//! key stream; the runner resolves counts, registers, ambiguous prefixes,
//! motions, and long-command continuations into command runs.

mod binding;
mod catalog;
mod result;
mod runner;

pub use binding::{CommandBinding, CommandFlags, CommandFn, CommandKind, LongFn, LongStartFn};
pub use catalog::{CommandCatalog, PrefixMatch};
pub use result::{BindResult, CommandRunData, KeyRemapMode};
pub use runner::{CommandRanFn, CommandRunner};
