//! [`Subject`] implementations for std types.
//!
//! Scalars are leaves. Collections are sequences or maps; they are projected
//! into JSON but never indexed by the traversal engine. Pointers carry an
//! indirection marker in their descriptor and delegate everything else to the
//! pointee, so a pointer to a record is walked exactly like the record.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt::Display;
use std::hash::BuildHasher;
use std::rc::{Rc, Weak as RcWeak};
use std::sync::{Arc, Weak as ArcWeak};

use serde_json::Value;

use crate::descriptor::{Member, Shape, TypeDescriptor};
use crate::error::ProjectionError;
use crate::subject::{Subject, short_type_name};
use crate::triple::ResultTriple;

macro_rules! integer_subject {
    ($($ty:ty),* $(,)?) => {$(
        impl Subject for $ty {
            fn type_name() -> Cow<'static, str> {
                Cow::Borrowed(stringify!($ty))
            }

            fn descriptor(&self) -> TypeDescriptor {
                TypeDescriptor::named(stringify!($ty))
            }

            fn leaf_value(&self) -> Result<Value, ProjectionError> {
                Ok(Value::from(*self))
            }

            fn is_zero(&self) -> bool {
                *self == 0
            }
        }
    )*};
}

integer_subject!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! wide_integer_subject {
    ($($ty:ty),* $(,)?) => {$(
        impl Subject for $ty {
            fn type_name() -> Cow<'static, str> {
                Cow::Borrowed(stringify!($ty))
            }

            fn descriptor(&self) -> TypeDescriptor {
                TypeDescriptor::named(stringify!($ty))
            }

            // serde_json rejects values outside the 64-bit range
            fn leaf_value(&self) -> Result<Value, ProjectionError> {
                Ok(serde_json::to_value(self)?)
            }

            fn is_zero(&self) -> bool {
                *self == 0
            }
        }
    )*};
}

wide_integer_subject!(i128, u128);

macro_rules! float_subject {
    ($($ty:ty),* $(,)?) => {$(
        impl Subject for $ty {
            fn type_name() -> Cow<'static, str> {
                Cow::Borrowed(stringify!($ty))
            }

            fn descriptor(&self) -> TypeDescriptor {
                TypeDescriptor::named(stringify!($ty))
            }

            fn leaf_value(&self) -> Result<Value, ProjectionError> {
                serde_json::Number::from_f64(f64::from(*self))
                    .map(Value::Number)
                    .ok_or_else(|| {
                        ProjectionError::unsupported(format!(
                            "{} value {} has no JSON representation",
                            stringify!($ty),
                            self
                        ))
                    })
            }

            fn is_zero(&self) -> bool {
                *self == 0.0
            }
        }
    )*};
}

float_subject!(f32, f64);

impl Subject for bool {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("bool")
    }

    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::named("bool")
    }

    fn leaf_value(&self) -> Result<Value, ProjectionError> {
        Ok(Value::Bool(*self))
    }

    fn is_zero(&self) -> bool {
        !*self
    }
}

impl Subject for char {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("char")
    }

    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::named("char")
    }

    fn leaf_value(&self) -> Result<Value, ProjectionError> {
        Ok(Value::String(self.to_string()))
    }

    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

impl Subject for String {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("String")
    }

    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::named("String")
    }

    fn leaf_value(&self) -> Result<Value, ProjectionError> {
        Ok(Value::String(self.clone()))
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Subject for str {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::named("str")
    }

    fn leaf_value(&self) -> Result<Value, ProjectionError> {
        Ok(Value::String(self.to_owned()))
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Subject for () {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("()")
    }

    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::named("()")
    }

    fn is_zero(&self) -> bool {
        true
    }
}

impl<T: Subject> Subject for Option<T> {
    fn type_name() -> Cow<'static, str> {
        Cow::Owned(format!("Option<{}>", T::type_name()))
    }

    // An absent value is reported under the type it would hold.
    fn descriptor(&self) -> TypeDescriptor {
        match self {
            Some(value) => value.descriptor(),
            None => TypeDescriptor::named(T::type_name()),
        }
    }

    fn shape(&self) -> Shape {
        self.as_ref().map_or(Shape::Leaf, Subject::shape)
    }

    fn visit_members(&self, visitor: &mut dyn FnMut(Member<'_>)) {
        if let Some(value) = self {
            value.visit_members(visitor);
        }
    }

    fn visit_elements(&self, visitor: &mut dyn FnMut(&dyn Subject)) {
        if let Some(value) = self {
            value.visit_elements(visitor);
        }
    }

    fn visit_entries(&self, visitor: &mut dyn FnMut(&str, &dyn Subject)) {
        if let Some(value) = self {
            value.visit_entries(visitor);
        }
    }

    fn leaf_value(&self) -> Result<Value, ProjectionError> {
        self.as_ref().map_or(Ok(Value::Null), Subject::leaf_value)
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn has_override(&self) -> bool {
        self.as_ref().is_some_and(Subject::has_override)
    }

    fn describe_override(&self) -> Option<ResultTriple> {
        self.as_ref().and_then(Subject::describe_override)
    }

    fn identity(&self) -> usize {
        match self {
            Some(value) => value.identity(),
            None => std::ptr::from_ref(self).cast::<()>().addr(),
        }
    }

    fn type_key(&self) -> &'static str {
        match self {
            Some(value) => value.type_key(),
            None => std::any::type_name::<T>(),
        }
    }
}

macro_rules! pointer_subject {
    ($([$($generics:tt)*] $ty:ty),* $(,)?) => {$(
        impl<$($generics)*> Subject for $ty {
            fn descriptor(&self) -> TypeDescriptor {
                (**self).descriptor().through_pointer()
            }

            fn shape(&self) -> Shape {
                (**self).shape()
            }

            fn visit_members(&self, visitor: &mut dyn FnMut(Member<'_>)) {
                (**self).visit_members(visitor);
            }

            fn visit_elements(&self, visitor: &mut dyn FnMut(&dyn Subject)) {
                (**self).visit_elements(visitor);
            }

            fn visit_entries(&self, visitor: &mut dyn FnMut(&str, &dyn Subject)) {
                (**self).visit_entries(visitor);
            }

            fn leaf_value(&self) -> Result<Value, ProjectionError> {
                (**self).leaf_value()
            }

            fn is_zero(&self) -> bool {
                (**self).is_zero()
            }

            fn has_override(&self) -> bool {
                (**self).has_override()
            }

            fn describe_override(&self) -> Option<ResultTriple> {
                (**self).describe_override()
            }

            fn identity(&self) -> usize {
                (**self).identity()
            }

            fn type_key(&self) -> &'static str {
                (**self).type_key()
            }
        }
    )*};
}

pointer_subject!(
    [T: Subject + ?Sized] &T,
    [T: Subject + ?Sized] &mut T,
    [T: Subject + ?Sized] Box<T>,
    [T: Subject + ?Sized] Rc<T>,
    [T: Subject + ?Sized] Arc<T>,
);

macro_rules! weak_subject {
    ($($weak:ident),* $(,)?) => {$(
        /// A dangling pointer is a zero leaf; a live one is walked like the
        /// pointee.
        impl<T: Subject> Subject for $weak<T> {
            fn descriptor(&self) -> TypeDescriptor {
                self.upgrade().map_or_else(
                    || TypeDescriptor::named(T::type_name()),
                    |target| T::descriptor(&target),
                )
                .through_pointer()
            }

            fn shape(&self) -> Shape {
                self.upgrade().map_or(Shape::Leaf, |target| target.shape())
            }

            fn visit_members(&self, visitor: &mut dyn FnMut(Member<'_>)) {
                if let Some(target) = self.upgrade() {
                    target.visit_members(visitor);
                }
            }

            fn visit_elements(&self, visitor: &mut dyn FnMut(&dyn Subject)) {
                if let Some(target) = self.upgrade() {
                    target.visit_elements(visitor);
                }
            }

            fn visit_entries(&self, visitor: &mut dyn FnMut(&str, &dyn Subject)) {
                if let Some(target) = self.upgrade() {
                    target.visit_entries(visitor);
                }
            }

            fn leaf_value(&self) -> Result<Value, ProjectionError> {
                self.upgrade().map_or(Ok(Value::Null), |target| target.leaf_value())
            }

            fn is_zero(&self) -> bool {
                self.strong_count() == 0
            }

            fn has_override(&self) -> bool {
                self.upgrade().is_some_and(|target| target.has_override())
            }

            fn describe_override(&self) -> Option<ResultTriple> {
                self.upgrade().and_then(|target| target.describe_override())
            }

            fn identity(&self) -> usize {
                self.as_ptr().cast::<()>().addr()
            }

            fn type_key(&self) -> &'static str {
                self.upgrade()
                    .map_or_else(std::any::type_name::<T>, |target| T::type_key(&target))
            }
        }
    )*};
}

weak_subject!(RcWeak, ArcWeak);

macro_rules! sequence_subject {
    ($([$($generics:tt)*] $ty:ty => $name:expr),* $(,)?) => {$(
        impl<$($generics)*> Subject for $ty {
            fn type_name() -> Cow<'static, str> {
                Cow::Owned($name)
            }

            fn descriptor(&self) -> TypeDescriptor {
                TypeDescriptor::named($name)
            }

            fn shape(&self) -> Shape {
                Shape::Sequence
            }

            fn visit_elements(&self, visitor: &mut dyn FnMut(&dyn Subject)) {
                for element in self.iter() {
                    visitor(element);
                }
            }

            fn is_zero(&self) -> bool {
                self.is_empty()
            }
        }
    )*};
}

sequence_subject!(
    [T: Subject] Vec<T> => format!("Vec<{}>", T::type_name()),
    [T: Subject] VecDeque<T> => format!("VecDeque<{}>", T::type_name()),
    [T: Subject, const N: usize] [T; N] => format!("[{}; {}]", T::type_name(), N),
);

impl<T: Subject> Subject for [T] {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::named(format!("[{}]", T::type_name()))
    }

    fn shape(&self) -> Shape {
        Shape::Sequence
    }

    fn visit_elements(&self, visitor: &mut dyn FnMut(&dyn Subject)) {
        for element in self {
            visitor(element);
        }
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

fn map_name<K, V: Subject>(container: &str) -> String {
    format!(
        "{container}<{}, {}>",
        short_type_name(std::any::type_name::<K>()),
        V::type_name()
    )
}

impl<K: Display, V: Subject, S: BuildHasher> Subject for HashMap<K, V, S> {
    fn type_name() -> Cow<'static, str> {
        Cow::Owned(map_name::<K, V>("HashMap"))
    }

    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::named(map_name::<K, V>("HashMap"))
    }

    fn shape(&self) -> Shape {
        Shape::Map
    }

    fn visit_entries(&self, visitor: &mut dyn FnMut(&str, &dyn Subject)) {
        for (key, value) in self {
            visitor(&key.to_string(), value);
        }
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K: Display, V: Subject> Subject for BTreeMap<K, V> {
    fn type_name() -> Cow<'static, str> {
        Cow::Owned(map_name::<K, V>("BTreeMap"))
    }

    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::named(map_name::<K, V>("BTreeMap"))
    }

    fn shape(&self) -> Shape {
        Shape::Map
    }

    fn visit_entries(&self, visitor: &mut dyn FnMut(&str, &dyn Subject)) {
        for (key, value) in self {
            visitor(&key.to_string(), value);
        }
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}
