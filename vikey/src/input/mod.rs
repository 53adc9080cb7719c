//! Key input primitives.
//!
//! This module provides the value types a command binding is made of:
//! single key events and the ordered sequences that trigger commands.

mod key;
mod trigger;

pub use key::{KeyCode, KeyEvent, KeyModifiers};
pub use trigger::KeyTrigger;
