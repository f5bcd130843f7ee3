//! The capabilities a value offers to the inspector.
//!
//! [`Subject`] is the runtime descriptor table of a type: its name, its
//! shape, and a way to enumerate its members with their visibility and
//! annotations. `#[derive(Inspect)]` generates it for records; this crate
//! implements it for the std scalars, collections, and pointers.
//!
//! [`Describe`] is the override: a type that implements it (and declares so
//! with `#[inspect(describe)]`) produces its own [`ResultTriple`] and owns the
//! representation of its whole subtree.

use std::borrow::Cow;

use serde_json::Value;

use crate::descriptor::{Member, Shape, TypeDescriptor};
use crate::error::ProjectionError;
use crate::triple::ResultTriple;

/// A value that can be inspected.
///
/// Every method has a default suited to an opaque leaf, so manual
/// implementations only override what applies. The trait is object safe;
/// the engine works exclusively on `&dyn Subject`.
pub trait Subject {
    /// Bare name of the implementing type.
    ///
    /// Used to name collection types and absent optional values. Defaults
    /// to the last path segments of [`std::any::type_name`].
    fn type_name() -> Cow<'static, str>
    where
        Self: Sized,
    {
        Cow::Owned(short_type_name(std::any::type_name::<Self>()))
    }

    /// Descriptor of this value, including pointer indirection.
    fn descriptor(&self) -> TypeDescriptor;

    /// Structural classification of this value.
    fn shape(&self) -> Shape {
        Shape::Leaf
    }

    /// Visits every declared member in declaration order, exposed and
    /// hidden alike. Records only.
    fn visit_members(&self, _visitor: &mut dyn FnMut(Member<'_>)) {}

    /// Visits every element in order. Sequences only.
    fn visit_elements(&self, _visitor: &mut dyn FnMut(&dyn Subject)) {}

    /// Visits every entry with its rendered key. Maps only.
    fn visit_entries(&self, _visitor: &mut dyn FnMut(&str, &dyn Subject)) {}

    /// JSON value of a leaf.
    fn leaf_value(&self) -> Result<Value, ProjectionError> {
        Ok(Value::Null)
    }

    /// Returns true if this is the zero value of its type.
    ///
    /// Informational only; it never changes traversal, it only feeds the
    /// `omit_empty` annotation.
    fn is_zero(&self) -> bool {
        false
    }

    /// Returns true if the type supplies an override.
    fn has_override(&self) -> bool {
        false
    }

    /// Runs the override, if the type supplies one.
    fn describe_override(&self) -> Option<ResultTriple> {
        None
    }

    /// Address of the value, used to recognise a node that is revisited
    /// through shared pointers.
    fn identity(&self) -> usize {
        std::ptr::from_ref(self).cast::<()>().addr()
    }

    /// Fully qualified type of the value, pointers resolved.
    ///
    /// Paired with [`Subject::identity`] to tell nodes apart: a record and
    /// its first member share an address, and bare names collide across
    /// modules and generic instantiations.
    fn type_key(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Returns true if the engine descends into this value: records, and
    /// anything that supplies an override.
    fn is_composite(&self) -> bool {
        self.shape().is_composite() || self.has_override()
    }
}

/// A type-supplied replacement for generic traversal.
///
/// The returned triple is taken verbatim as the representation of the value
/// and everything beneath it.
///
/// # Example
///
/// ```rust
/// use logscope_core::{Describe, JsonBody, ResultTriple};
///
/// struct Secret {
///     owner: String,
/// }
///
/// impl Describe for Secret {
///     fn describe(&self) -> ResultTriple {
///         let body = JsonBody::new().set(["secret", "owner"], self.owner.as_str());
///         ResultTriple::new(["secret"], ["Secret"], body.to_string())
///     }
/// }
/// ```
pub trait Describe {
    /// Produces the names, types, and JSON body for this value.
    fn describe(&self) -> ResultTriple;
}

/// Strips module paths from a fully qualified type name.
///
/// `alloc::vec::Vec<my_crate::Car>` becomes `Vec<Car>`.
#[must_use]
pub fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut ident = String::new();
    let mut chars = full.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            ident.clear();
        } else if c.is_alphanumeric() || c == '_' {
            ident.push(c);
        } else {
            out.push_str(&ident);
            ident.clear();
            out.push(c);
        }
    }
    out.push_str(&ident);
    out
}
