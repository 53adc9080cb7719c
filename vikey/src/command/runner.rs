//! The command resolution engine.
//!
//! Consumes one key event at a time and resolves the stream into command
//! runs: count and register prefixes, trie-backed name matching with
//! delayed commitment on ambiguous prefixes, motion capture for operator
//! bindings, and caller-supplied continuations for long commands.

use std::mem;

use super::binding::{CommandBinding, CommandFn, CommandKind, LongFn, LongStartFn};
use super::catalog::{CommandCatalog, PrefixMatch};
use super::result::{BindResult, CommandRunData, KeyRemapMode};
use crate::buffer::Snapshot;
use crate::error::{BindError, Result};
use crate::input::{KeyEvent, KeyTrigger};
use crate::motion::MotionParser;
use crate::options::Options;

/// Listener for the `CommandRan` notification, fired once per completed
/// run after the handler executed. Used by macro recording and status
/// feedback layers.
pub type CommandRanFn = Box<dyn FnMut(&CommandRunData)>;

/// The register-select marker key.
const REGISTER_MARKER: char = '"';

/// A binding captured out of the catalog at selection time. Holding the
/// clones here keeps an in-flight run stable when the catalog is mutated
/// mid-run.
struct Selected {
    trigger: KeyTrigger,
    kind: SelectedKind,
    handles_escape: bool,
    remap_mode: Option<KeyRemapMode>,
}

enum SelectedKind {
    Simple(CommandFn),
    Motion(CommandFn),
    Long(LongStartFn),
}

impl Selected {
    fn capture(binding: &CommandBinding) -> Self {
        let kind = match binding.kind() {
            CommandKind::Simple(f) => SelectedKind::Simple(f.clone()),
            CommandKind::Motion(f) => SelectedKind::Motion(f.clone()),
            CommandKind::Long(f) => SelectedKind::Long(f.clone()),
        };
        Self {
            trigger: binding.trigger().clone(),
            kind,
            handles_escape: binding.flags().handles_escape,
            remap_mode: binding.flags().remap_mode,
        }
    }

    fn is_motion(&self) -> bool {
        matches!(self.kind, SelectedKind::Motion(_))
    }
}

/// State while count/register prefixes are collected and the command name
/// is being disambiguated.
struct MatchState {
    /// Product of count segments closed off by a register marker.
    count_product: Option<usize>,
    /// Count segment currently being typed.
    count: Option<usize>,
    register: Option<char>,
    /// The previous key was the register marker.
    reading_register: bool,
    /// Keys consumed toward the command name so far.
    name_keys: Vec<KeyEvent>,
    /// Binding exactly matched by a prefix of `name_keys` while longer
    /// triggers remain possible.
    ambiguous: Option<Selected>,
}

impl MatchState {
    fn new() -> Self {
        Self {
            count_product: None,
            count: None,
            register: None,
            reading_register: false,
            name_keys: Vec::new(),
            ambiguous: None,
        }
    }

    /// The effective explicit count: all typed segments multiplied.
    fn effective_count(&self) -> Option<usize> {
        match (self.count_product, self.count) {
            (None, None) => None,
            (product, current) => {
                Some(product.unwrap_or(1).saturating_mul(current.unwrap_or(1)))
            }
        }
    }
}

/// State while the motion half of an operator is being captured.
struct MotionPendingState {
    trigger: KeyTrigger,
    count: Option<usize>,
    register: Option<char>,
    handles_escape: bool,
    handler: CommandFn,
    parser: MotionParser,
}

/// State while a long command's continuation owns the keys.
struct LongPendingState {
    trigger: KeyTrigger,
    count: Option<usize>,
    register: Option<char>,
    handles_escape: bool,
    remap_mode: KeyRemapMode,
    bind: LongFn,
}

enum RunState {
    /// No key has been consumed toward a run.
    Idle,
    Matching(MatchState),
    MotionPending(MotionPendingState),
    LongPending(LongPendingState),
}

/// The command resolution engine.
///
/// Single-threaded and synchronous: every `run` call either resolves,
/// asks for more input, or fails, and the engine holds its continuation
/// as explicit state between calls.
pub struct CommandRunner {
    catalog: CommandCatalog,
    snapshot: Snapshot,
    options: Options,
    state: RunState,
    /// Set while a long-command continuation is executing; `run` is
    /// rejected for the duration.
    in_continuation: bool,
    on_command_ran: Option<CommandRanFn>,
}

impl CommandRunner {
    /// Create a runner with an empty catalog and an empty snapshot.
    pub fn new() -> Self {
        Self {
            catalog: CommandCatalog::new(),
            snapshot: Snapshot::default(),
            options: Options::default(),
            state: RunState::Idle,
            in_continuation: false,
            on_command_ran: None,
        }
    }

    /// Register a binding.
    pub fn add(&mut self, binding: CommandBinding) -> Result<()> {
        log::debug!("add binding {}", binding.trigger());
        self.catalog.add(binding)
    }

    /// Remove a binding. Legal while a run is in progress; only future
    /// matching decisions are affected.
    pub fn remove(&mut self, trigger: &KeyTrigger) -> Option<CommandBinding> {
        log::debug!("remove binding {}", trigger);
        self.catalog.remove(trigger)
    }

    /// The registered bindings.
    pub fn catalog(&self) -> &CommandCatalog {
        &self.catalog
    }

    /// Supply a fresh buffer snapshot. The host must call this whenever
    /// the buffer, caret, or viewport changes.
    pub fn set_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
    }

    /// The snapshot motions are currently evaluated against.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Supply new editor options.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    /// The current editor options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Install the `CommandRan` listener.
    pub fn set_command_ran<F>(&mut self, listener: F)
    where
        F: FnMut(&CommandRunData) + 'static,
    {
        self.on_command_ran = Some(Box::new(listener));
    }

    /// Abandon any in-progress parse and return to the initial state.
    pub fn reset_state(&mut self) {
        self.state = RunState::Idle;
    }

    /// True exactly when at least one key has been consumed toward a
    /// not-yet-complete run.
    pub fn is_waiting_for_more_input(&self) -> bool {
        !matches!(self.state, RunState::Idle)
    }

    /// The key-remapping context the next keystroke should be interpreted
    /// under.
    pub fn key_remap_mode(&self) -> KeyRemapMode {
        match &self.state {
            RunState::Idle => KeyRemapMode::None,
            RunState::Matching(ms) => match &ms.ambiguous {
                Some(selected) if selected.is_motion() => KeyRemapMode::OperatorPending,
                _ => KeyRemapMode::None,
            },
            RunState::MotionPending(ms) => ms.parser.remap_mode(),
            RunState::LongPending(ls) => ls.remap_mode,
        }
    }

    /// Feed one key event. The engine resets itself on `Complete`,
    /// `Cancelled`, and `Error`; on `NeedMoreInput` it waits for the next
    /// call.
    pub fn run(&mut self, key: KeyEvent) -> BindResult<CommandRunData> {
        if self.in_continuation {
            log::debug!("rejecting re-entrant run during a key continuation");
            return BindResult::Error(BindError::ReentrantRun);
        }
        self.run_key(key)
    }

    fn run_key(&mut self, key: KeyEvent) -> BindResult<CommandRunData> {
        log::trace!("run key {}", key);
        if key.is_escape() && self.is_waiting_for_more_input() && !self.selected_handles_escape() {
            log::trace!("escape cancels the in-progress run");
            self.state = RunState::Idle;
            return BindResult::Cancelled;
        }
        match mem::replace(&mut self.state, RunState::Idle) {
            RunState::Idle => self.step_matching(MatchState::new(), key),
            RunState::Matching(ms) => self.step_matching(ms, key),
            RunState::MotionPending(ms) => self.step_motion(ms, key),
            RunState::LongPending(ls) => self.step_long(ls, key),
        }
    }

    fn selected_handles_escape(&self) -> bool {
        match &self.state {
            RunState::MotionPending(ms) => ms.handles_escape,
            RunState::LongPending(ls) => ls.handles_escape,
            _ => false,
        }
    }

    fn step_matching(&mut self, mut ms: MatchState, key: KeyEvent) -> BindResult<CommandRunData> {
        if ms.reading_register {
            return match key.as_char() {
                Some(c) if c.is_ascii_alphanumeric() || c == REGISTER_MARKER => {
                    ms.register = Some(c);
                    ms.reading_register = false;
                    // A register marker closes off the current count segment.
                    if let Some(current) = ms.count.take() {
                        ms.count_product =
                            Some(ms.count_product.unwrap_or(1).saturating_mul(current));
                    }
                    self.state = RunState::Matching(ms);
                    BindResult::NeedMoreInput(KeyRemapMode::None)
                }
                Some(c) => BindResult::Error(BindError::InvalidRegister(c)),
                None => BindResult::Error(BindError::NoMatchingBinding),
            };
        }

        if ms.name_keys.is_empty() {
            if key.as_char() == Some(REGISTER_MARKER) {
                ms.reading_register = true;
                self.state = RunState::Matching(ms);
                return BindResult::NeedMoreInput(KeyRemapMode::None);
            }
            if let Some(d) = key.as_digit() {
                // A standalone leading 0 is not a count; it falls through
                // to name matching.
                if d != 0 || ms.count.is_some() {
                    let current = ms.count.unwrap_or(0);
                    ms.count = Some(current.saturating_mul(10).saturating_add(d as usize));
                    self.state = RunState::Matching(ms);
                    return BindResult::NeedMoreInput(KeyRemapMode::None);
                }
            }
        }

        ms.name_keys.push(key);
        enum NameStep {
            Dead,
            Pending,
            Exact(Selected, bool),
        }
        let step = match self.catalog.lookup(&ms.name_keys) {
            PrefixMatch::None => NameStep::Dead,
            PrefixMatch::Prefix => NameStep::Pending,
            PrefixMatch::Ambiguous(binding) => NameStep::Exact(Selected::capture(binding), false),
            PrefixMatch::Unique(binding) => NameStep::Exact(Selected::capture(binding), true),
        };

        match step {
            NameStep::Exact(selected, unique) if unique => {
                let count = ms.effective_count();
                self.commit(selected, count, ms.register, Vec::new())
            }
            NameStep::Exact(selected, _) => {
                // Exactly matched, but a longer trigger is still possible:
                // stay ambiguous until the next key confirms or disproves it.
                let mode = if selected.is_motion() {
                    KeyRemapMode::OperatorPending
                } else {
                    KeyRemapMode::None
                };
                ms.ambiguous = Some(selected);
                self.state = RunState::Matching(ms);
                BindResult::NeedMoreInput(mode)
            }
            NameStep::Pending => {
                // A proper prefix of longer triggers; an earlier exact
                // match (if any) stays on file as the fallback.
                let mode = match &ms.ambiguous {
                    Some(selected) if selected.is_motion() => KeyRemapMode::OperatorPending,
                    _ => KeyRemapMode::None,
                };
                self.state = RunState::Matching(ms);
                BindResult::NeedMoreInput(mode)
            }
            NameStep::Dead => match ms.ambiguous.take() {
                Some(selected) => {
                    // The longer candidates are disproven: commit the
                    // shorter match and replay the keys typed past it.
                    let leftover = ms.name_keys[selected.trigger.len()..].to_vec();
                    let count = ms.effective_count();
                    self.commit(selected, count, ms.register, leftover)
                }
                None => {
                    log::trace!("no binding matches {:?}", ms.name_keys);
                    BindResult::Error(BindError::NoMatchingBinding)
                }
            },
        }
    }

    /// Enter the committed binding's follow-on state and replay any keys
    /// consumed past its trigger.
    fn commit(
        &mut self,
        selected: Selected,
        count: Option<usize>,
        register: Option<char>,
        leftover: Vec<KeyEvent>,
    ) -> BindResult<CommandRunData> {
        log::trace!("commit binding {}", selected.trigger);
        let mut result = match selected.kind {
            SelectedKind::Simple(handler) => {
                let data = CommandRunData {
                    trigger: selected.trigger,
                    count,
                    register,
                    motion: None,
                };
                self.finish_run(data, Some(handler))
            }
            SelectedKind::Motion(handler) => {
                self.state = RunState::MotionPending(MotionPendingState {
                    trigger: selected.trigger,
                    count,
                    register,
                    handles_escape: selected.handles_escape,
                    handler,
                    parser: MotionParser::new(),
                });
                BindResult::NeedMoreInput(KeyRemapMode::OperatorPending)
            }
            SelectedKind::Long(start) => {
                let remap_mode = selected.remap_mode.unwrap_or(KeyRemapMode::None);
                self.state = RunState::LongPending(LongPendingState {
                    trigger: selected.trigger,
                    count,
                    register,
                    handles_escape: selected.handles_escape,
                    remap_mode,
                    bind: start(),
                });
                BindResult::NeedMoreInput(remap_mode)
            }
        };
        for key in leftover {
            result = self.run_key(key);
        }
        result
    }

    fn step_motion(
        &mut self,
        mut ms: MotionPendingState,
        key: KeyEvent,
    ) -> BindResult<CommandRunData> {
        match ms.parser.step(key, &self.snapshot, &self.options, ms.count) {
            BindResult::NeedMoreInput(mode) => {
                self.state = RunState::MotionPending(ms);
                BindResult::NeedMoreInput(mode)
            }
            BindResult::Complete(motion) => {
                let count = ms.parser.combined_count(ms.count);
                let data = CommandRunData {
                    trigger: ms.trigger,
                    count,
                    register: ms.register,
                    motion: Some(motion),
                };
                self.finish_run(data, Some(ms.handler))
            }
            BindResult::Cancelled => {
                log::trace!("motion cancelled or inapplicable; run produced nothing");
                BindResult::Cancelled
            }
            BindResult::Error(e) => BindResult::Error(e),
        }
    }

    fn step_long(&mut self, mut ls: LongPendingState, key: KeyEvent) -> BindResult<CommandRunData> {
        self.in_continuation = true;
        let result = (ls.bind)(self, key);
        self.in_continuation = false;
        match result {
            BindResult::NeedMoreInput(mode) => {
                ls.remap_mode = mode;
                self.state = RunState::LongPending(ls);
                BindResult::NeedMoreInput(mode)
            }
            BindResult::Complete(()) => {
                let data = CommandRunData {
                    trigger: ls.trigger,
                    count: ls.count,
                    register: ls.register,
                    motion: None,
                };
                self.finish_run(data, None)
            }
            BindResult::Cancelled => BindResult::Cancelled,
            BindResult::Error(e) => BindResult::Error(e),
        }
    }

    /// Reset, execute the handler, and fire the `CommandRan` notification.
    fn finish_run(
        &mut self,
        data: CommandRunData,
        handler: Option<CommandFn>,
    ) -> BindResult<CommandRunData> {
        log::debug!("command run complete: {}", data.trigger);
        self.state = RunState::Idle;
        if let Some(handler) = handler {
            handler(self, &data);
        }
        self.notify_command_ran(&data);
        BindResult::Complete(data)
    }

    fn notify_command_ran(&mut self, data: &CommandRunData) {
        if let Some(mut listener) = self.on_command_ran.take() {
            listener(data);
            if self.on_command_ran.is_none() {
                self.on_command_ran = Some(listener);
            }
        }
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
