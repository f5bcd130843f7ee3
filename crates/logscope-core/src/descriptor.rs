//! Member and type descriptors.
//!
//! These are the runtime view of a type's declaration: which members it has,
//! how visible each one is, which annotations it carries, and how the type
//! itself is named in the type index.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::subject::Subject;

/// Default marker prepended to the names of values held through a pointer.
pub const INDIRECTION_MARKER: &str = "*";

/// Visibility of a member, taken from the type's declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Public member: walked, classified, and projected.
    Exposed,
    /// Non-public member: only listed in the name index.
    Hidden,
}

impl Visibility {
    /// Returns true for [`Visibility::Exposed`].
    #[must_use]
    pub const fn is_exposed(self) -> bool {
        matches!(self, Self::Exposed)
    }
}

/// Per-member annotations recognized by the inspector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemberOptions {
    /// Leave the member out of the JSON projection entirely.
    pub skip: bool,
    /// Leave the member out of the JSON projection when it is the zero value.
    pub omit_empty: bool,
    /// Do not descend into the member for the name/type indices.
    pub omit_nested: bool,
    /// JSON key to use instead of the declared name.
    pub rename: Option<&'static str>,
}

impl MemberOptions {
    /// Options with every annotation off.
    pub const NONE: Self = Self {
        skip: false,
        omit_empty: false,
        omit_nested: false,
        rename: None,
    };
}

/// A single named slot of a record, borrowed for the duration of a visit.
#[derive(Clone, Copy)]
pub struct Member<'a> {
    /// Declared name.
    pub name: &'a str,
    /// Declared visibility.
    pub visibility: Visibility,
    /// Declared annotations.
    pub options: MemberOptions,
    /// The member's current value.
    pub value: &'a dyn Subject,
}

impl<'a> Member<'a> {
    /// Creates an exposed member without annotations.
    #[must_use]
    pub fn exposed(name: &'a str, value: &'a dyn Subject) -> Self {
        Self {
            name,
            visibility: Visibility::Exposed,
            options: MemberOptions::NONE,
            value,
        }
    }

    /// Creates a hidden member without annotations.
    #[must_use]
    pub fn hidden(name: &'a str, value: &'a dyn Subject) -> Self {
        Self {
            name,
            visibility: Visibility::Hidden,
            options: MemberOptions::NONE,
            value,
        }
    }

    /// Replaces the member's annotations.
    #[must_use]
    pub const fn with_options(mut self, options: MemberOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns true if the member is exposed.
    #[must_use]
    pub const fn is_exposed(&self) -> bool {
        self.visibility.is_exposed()
    }

    /// Returns true if the member takes part in the JSON projection
    /// (exposed and not skipped). Zero-value omission is decided later.
    #[must_use]
    pub const fn is_projected(&self) -> bool {
        self.is_exposed() && !self.options.skip
    }

    /// JSON key for the member.
    #[must_use]
    pub fn json_key(&self) -> &str {
        self.options.rename.unwrap_or(self.name)
    }
}

impl fmt::Debug for Member<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .field("options", &self.options)
            .field("type", &self.value.descriptor())
            .finish()
    }
}

/// Structural classification of a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Scalar value, projected through [`Subject::leaf_value`].
    Leaf,
    /// Record with named members; the only composite shape.
    Record,
    /// Ordered collection of elements.
    Sequence,
    /// String-keyed collection of entries.
    Map,
}

impl Shape {
    /// Returns true if values of this shape are descended into by the
    /// traversal engine.
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Record)
    }
}

/// Formatted runtime type of a subject.
///
/// Carries the bare type name and the number of pointer hops the value is
/// held through. Used for the type index only, never for dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    name: Cow<'static, str>,
    indirection: u8,
}

impl TypeDescriptor {
    /// Descriptor for a value held directly.
    #[must_use]
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            indirection: 0,
        }
    }

    /// Adds one level of indirection.
    #[must_use]
    pub fn through_pointer(mut self) -> Self {
        self.indirection = self.indirection.saturating_add(1);
        self
    }

    /// Bare type name, without indirection markers.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the value is held through at least one pointer.
    #[must_use]
    pub const fn is_indirect(&self) -> bool {
        self.indirection > 0
    }

    /// Number of pointer hops.
    #[must_use]
    pub const fn indirection(&self) -> u8 {
        self.indirection
    }

    /// Renders the descriptor with a custom indirection marker.
    #[must_use]
    pub fn render(&self, marker: &str) -> String {
        let mut out = marker.repeat(usize::from(self.indirection));
        out.push_str(&self.name);
        out
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(INDIRECTION_MARKER))
    }
}
