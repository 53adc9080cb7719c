//! Command catalog: the binding registry and its key-prefix trie.

use std::collections::HashMap;

use super::binding::CommandBinding;
use crate::error::{BindError, Result};
use crate::input::{KeyEvent, KeyTrigger};

#[derive(Default)]
struct TrieNode {
    children: HashMap<KeyEvent, TrieNode>,
    /// Trigger of the binding that ends exactly at this node.
    terminal: Option<KeyTrigger>,
}

/// What the catalog knows about a key prefix.
#[derive(Debug)]
pub enum PrefixMatch<'a> {
    /// No registered trigger has this prefix.
    None,
    /// The keys are a proper prefix of one or more triggers, naming none.
    Prefix,
    /// The keys exactly name `binding`, but longer triggers remain
    /// consistent with them.
    Ambiguous(&'a CommandBinding),
    /// The keys exactly name `binding` and no longer trigger extends them.
    Unique(&'a CommandBinding),
}

/// The set of registered command bindings, indexed by trigger and by an
/// explicit prefix trie so matching never re-scans the whole catalog.
pub struct CommandCatalog {
    bindings: HashMap<KeyTrigger, CommandBinding>,
    root: TrieNode,
}

impl CommandCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            root: TrieNode::default(),
        }
    }

    /// Register a binding. Registering a second binding with the same
    /// trigger is a caller bug, reported as `DuplicateTrigger`.
    pub fn add(&mut self, binding: CommandBinding) -> Result<()> {
        let trigger = binding.trigger().clone();
        if self.bindings.contains_key(&trigger) {
            return Err(BindError::DuplicateTrigger(trigger.to_string()));
        }
        let mut node = &mut self.root;
        for &key in trigger.keys() {
            node = node.children.entry(key).or_default();
        }
        node.terminal = Some(trigger.clone());
        self.bindings.insert(trigger, binding);
        Ok(())
    }

    /// Remove the binding with this trigger, pruning the trie path.
    pub fn remove(&mut self, trigger: &KeyTrigger) -> Option<CommandBinding> {
        let binding = self.bindings.remove(trigger)?;
        remove_path(&mut self.root, trigger.keys());
        Some(binding)
    }

    /// Get a binding by its exact trigger.
    pub fn get(&self, trigger: &KeyTrigger) -> Option<&CommandBinding> {
        self.bindings.get(trigger)
    }

    /// Check if a trigger is registered.
    pub fn contains(&self, trigger: &KeyTrigger) -> bool {
        self.bindings.contains_key(trigger)
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if no bindings are registered.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Classify a key prefix against the registered triggers.
    pub fn lookup(&self, keys: &[KeyEvent]) -> PrefixMatch<'_> {
        let mut node = &self.root;
        for key in keys {
            match node.children.get(key) {
                Some(child) => node = child,
                None => return PrefixMatch::None,
            }
        }
        match &node.terminal {
            Some(trigger) => match self.bindings.get(trigger) {
                Some(binding) if node.children.is_empty() => PrefixMatch::Unique(binding),
                Some(binding) => PrefixMatch::Ambiguous(binding),
                None => PrefixMatch::None,
            },
            None => PrefixMatch::Prefix,
        }
    }
}

impl Default for CommandCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove the terminal at the end of `keys`, pruning nodes left with no
/// terminal and no children. Returns whether `node` itself is prunable.
fn remove_path(node: &mut TrieNode, keys: &[KeyEvent]) -> bool {
    match keys.split_first() {
        None => node.terminal = None,
        Some((first, rest)) => {
            if let Some(child) = node.children.get_mut(first) {
                if remove_path(child, rest) {
                    node.children.remove(first);
                }
            }
        }
    }
    node.terminal.is_none() && node.children.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple(trigger: &str) -> CommandBinding {
        CommandBinding::simple(KeyTrigger::from_chars(trigger).unwrap(), |_, _| {})
    }

    fn motion(trigger: &str) -> CommandBinding {
        CommandBinding::motion(KeyTrigger::from_chars(trigger).unwrap(), |_, _| {})
    }

    fn keys(s: &str) -> Vec<KeyEvent> {
        s.chars().map(KeyEvent::from_char).collect()
    }

    #[test]
    fn test_add_and_get() {
        let mut catalog = CommandCatalog::new();
        catalog.add(simple("x")).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains(&KeyTrigger::from_chars("x").unwrap()));
    }

    #[test]
    fn test_duplicate_trigger_rejected() {
        let mut catalog = CommandCatalog::new();
        catalog.add(simple("dd")).unwrap();
        let err = catalog.add(motion("dd")).unwrap_err();
        assert_eq!(err, BindError::DuplicateTrigger("dd".to_string()));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_lookup_unique() {
        let mut catalog = CommandCatalog::new();
        catalog.add(simple("x")).unwrap();
        assert!(matches!(catalog.lookup(&keys("x")), PrefixMatch::Unique(_)));
    }

    #[test]
    fn test_lookup_prefix_and_none() {
        let mut catalog = CommandCatalog::new();
        catalog.add(simple("ab")).unwrap();
        assert!(matches!(catalog.lookup(&keys("a")), PrefixMatch::Prefix));
        assert!(matches!(catalog.lookup(&keys("q")), PrefixMatch::None));
        assert!(matches!(catalog.lookup(&keys("abc")), PrefixMatch::None));
    }

    #[test]
    fn test_lookup_ambiguous() {
        let mut catalog = CommandCatalog::new();
        catalog.add(motion("aa")).unwrap();
        catalog.add(simple("aab")).unwrap();
        match catalog.lookup(&keys("aa")) {
            PrefixMatch::Ambiguous(binding) => assert!(binding.is_motion()),
            other => panic!("expected ambiguous match, got {:?}", other),
        }
    }

    #[test]
    fn test_remove_prunes_trie() {
        let mut catalog = CommandCatalog::new();
        catalog.add(simple("ab")).unwrap();
        catalog.add(simple("ac")).unwrap();

        assert!(catalog.remove(&KeyTrigger::from_chars("ab").unwrap()).is_some());
        assert!(matches!(catalog.lookup(&keys("ab")), PrefixMatch::None));
        // The shared prefix still leads to the surviving binding.
        assert!(matches!(catalog.lookup(&keys("a")), PrefixMatch::Prefix));
        assert!(matches!(catalog.lookup(&keys("ac")), PrefixMatch::Unique(_)));

        assert!(catalog.remove(&KeyTrigger::from_chars("ac").unwrap()).is_some());
        assert!(matches!(catalog.lookup(&keys("a")), PrefixMatch::None));
    }

    #[test]
    fn test_remove_inner_keeps_longer() {
        let mut catalog = CommandCatalog::new();
        catalog.add(motion("d")).unwrap();
        catalog.add(simple("dd")).unwrap();

        assert!(catalog.remove(&KeyTrigger::from_chars("d").unwrap()).is_some());
        assert!(matches!(catalog.lookup(&keys("d")), PrefixMatch::Prefix));
        assert!(matches!(catalog.lookup(&keys("dd")), PrefixMatch::Unique(_)));
    }

    #[test]
    fn test_remove_missing() {
        let mut catalog = CommandCatalog::new();
        assert!(catalog.remove(&KeyTrigger::from_chars("z").unwrap()).is_none());
    }
}
