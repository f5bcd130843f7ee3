//! Ancestor tracking for recursive descent.
//!
//! A node is identified by its address and fully qualified type; the type is
//! part of the key because a record and its first member share an address.
//! Only the current path is tracked, so a value reached twice through
//! separate branches (shared, not cyclic) is walked both times.

use crate::error::Diagnostic;
use crate::subject::Subject;

#[derive(Debug, PartialEq, Eq)]
struct NodeKey {
    identity: usize,
    type_key: &'static str,
}

/// Stack of the nodes between the root and the current position.
#[derive(Debug)]
pub(crate) struct PathGuard {
    ancestors: Vec<NodeKey>,
    labels: Vec<String>,
    max_depth: usize,
}

impl PathGuard {
    pub(crate) const fn new(max_depth: usize) -> Self {
        Self {
            ancestors: Vec::new(),
            labels: Vec::new(),
            max_depth,
        }
    }

    /// Pushes `subject` onto the path, or reports why descent must stop.
    pub(crate) fn enter(&mut self, subject: &dyn Subject, label: &str) -> Result<(), Diagnostic> {
        let key = NodeKey {
            identity: subject.identity(),
            type_key: subject.type_key(),
        };

        if self.ancestors.contains(&key) {
            let type_name = subject.descriptor().name().to_owned();
            return Err(Diagnostic::cycle(type_name, self.path_with(label)));
        }
        if self.ancestors.len() >= self.max_depth {
            let type_name = subject.descriptor().name().to_owned();
            return Err(Diagnostic::depth(type_name, self.max_depth));
        }

        self.ancestors.push(key);
        self.labels.push(label.to_owned());
        Ok(())
    }

    /// Pops the most recently entered node.
    pub(crate) fn leave(&mut self) {
        self.ancestors.pop();
        self.labels.pop();
    }

    /// Number of nodes on the current path.
    pub(crate) fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// Dotted path of the current position extended by `label`.
    pub(crate) fn path_with(&self, label: &str) -> String {
        let mut path = self.labels.join(".");
        if !path.is_empty() {
            path.push('.');
        }
        path.push_str(label);
        path
    }
}
