//! Buffer snapshot abstraction.
//!
//! The host text buffer lives outside this crate; the motion engine works
//! over the immutable, versioned view defined here.

mod position;
mod snapshot;

pub use position::{LineRange, Position, Span};
pub use snapshot::Snapshot;
