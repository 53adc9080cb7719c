//! Command bindings: a trigger, its behavior kind, and its flags.

use std::rc::Rc;

use super::result::{BindResult, CommandRunData, KeyRemapMode};
use super::runner::CommandRunner;
use crate::input::{KeyEvent, KeyTrigger};

/// Handler invoked when a simple or operator command completes. The
/// runner passes itself so a handler can start further full runs (macro
/// replay) after its own run has finished.
pub type CommandFn = Rc<dyn Fn(&mut CommandRunner, &CommandRunData)>;

/// Continuation that consumes the keys of a long command, one per call.
/// It owns whatever state it accumulates between keys.
pub type LongFn = Box<dyn FnMut(&mut CommandRunner, KeyEvent) -> BindResult<()>>;

/// Factory producing a fresh continuation each time a long command's
/// trigger is selected, keeping the binding itself reusable.
pub type LongStartFn = Rc<dyn Fn() -> LongFn>;

/// Behavior of a binding once its trigger is matched.
pub enum CommandKind {
    /// Runs as soon as its full trigger is seen.
    Simple(CommandFn),
    /// Requires a motion sub-sequence after the trigger.
    Motion(CommandFn),
    /// Hands control key-by-key to a caller-supplied continuation that
    /// decides completion.
    Long(LongStartFn),
}

impl std::fmt::Debug for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandKind::Simple(_) => write!(f, "Simple"),
            CommandKind::Motion(_) => write!(f, "Motion"),
            CommandKind::Long(_) => write!(f, "Long"),
        }
    }
}

/// Cross-cutting behavior flags of a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommandFlags {
    /// The binding wants to see Escape as input instead of having it
    /// cancel the run (e.g. replace-char collecting a literal character).
    pub handles_escape: bool,
    /// Remap mode the binding's argument collection runs under, once the
    /// binding is uniquely selected.
    pub remap_mode: Option<KeyRemapMode>,
}

impl CommandFlags {
    /// No special behavior.
    pub const NONE: CommandFlags = CommandFlags {
        handles_escape: false,
        remap_mode: None,
    };

    /// Set the handles-escape flag.
    pub fn with_handles_escape(mut self) -> Self {
        self.handles_escape = true;
        self
    }

    /// Set the argument remap mode.
    pub fn with_remap_mode(mut self, mode: KeyRemapMode) -> Self {
        self.remap_mode = Some(mode);
        self
    }
}

/// A registered command binding. Bindings live in the catalog for the
/// life of the process (or until removed); runs reference them but never
/// own them.
pub struct CommandBinding {
    trigger: KeyTrigger,
    kind: CommandKind,
    flags: CommandFlags,
}

impl CommandBinding {
    /// A binding that runs as soon as its trigger is seen.
    pub fn simple<F>(trigger: KeyTrigger, handler: F) -> Self
    where
        F: Fn(&mut CommandRunner, &CommandRunData) + 'static,
    {
        Self {
            trigger,
            kind: CommandKind::Simple(Rc::new(handler)),
            flags: CommandFlags::NONE,
        }
    }

    /// An operator binding: the trigger must be followed by a motion.
    pub fn motion<F>(trigger: KeyTrigger, handler: F) -> Self
    where
        F: Fn(&mut CommandRunner, &CommandRunData) + 'static,
    {
        Self {
            trigger,
            kind: CommandKind::Motion(Rc::new(handler)),
            flags: CommandFlags::NONE,
        }
    }

    /// A long command: once selected, `start` produces the continuation
    /// that consumes the remaining keys.
    pub fn long<F>(trigger: KeyTrigger, start: F) -> Self
    where
        F: Fn() -> LongFn + 'static,
    {
        Self {
            trigger,
            kind: CommandKind::Long(Rc::new(start)),
            flags: CommandFlags::NONE,
        }
    }

    /// Replace the binding's flags.
    pub fn with_flags(mut self, flags: CommandFlags) -> Self {
        self.flags = flags;
        self
    }

    /// The trigger that names this binding.
    pub fn trigger(&self) -> &KeyTrigger {
        &self.trigger
    }

    /// The behavior kind.
    pub fn kind(&self) -> &CommandKind {
        &self.kind
    }

    /// The behavior flags.
    pub fn flags(&self) -> CommandFlags {
        self.flags
    }

    /// Check if this is an operator binding.
    pub fn is_motion(&self) -> bool {
        matches!(self.kind, CommandKind::Motion(_))
    }

    /// Check if this is a simple binding.
    pub fn is_simple(&self) -> bool {
        matches!(self.kind, CommandKind::Simple(_))
    }

    /// Check if this is a long-command binding.
    pub fn is_long(&self) -> bool {
        matches!(self.kind, CommandKind::Long(_))
    }
}

impl std::fmt::Debug for CommandBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandBinding")
            .field("trigger", &self.trigger.to_string())
            .field("kind", &self.kind)
            .field("flags", &self.flags)
            .finish()
    }
}
