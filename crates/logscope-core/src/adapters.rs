//! Leaf adapters for values that do not implement [`Subject`] themselves.
//!
//! `#[inspect(serialize)]` wraps a field in [`Serialized`] and
//! `#[inspect(display)]` wraps it in [`Displayed`]; both are usable directly
//! from manual `Subject` implementations as well.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use crate::descriptor::TypeDescriptor;
use crate::error::ProjectionError;
use crate::subject::{Subject, short_type_name};

/// A leaf projected through its `serde::Serialize` implementation.
#[derive(Debug, Clone, Copy)]
pub struct Serialized<'a, T: ?Sized>(pub &'a T);

impl<T: Serialize + ?Sized> Subject for Serialized<'_, T> {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::named(short_type_name(std::any::type_name::<T>()))
    }

    fn leaf_value(&self) -> Result<Value, ProjectionError> {
        Ok(serde_json::to_value(self.0)?)
    }

    fn is_zero(&self) -> bool {
        serde_json::to_value(self.0).is_ok_and(|value| is_zero_value(&value))
    }

    fn identity(&self) -> usize {
        std::ptr::from_ref(self.0).cast::<()>().addr()
    }
}

/// A leaf projected as its `Display` string.
#[derive(Debug, Clone, Copy)]
pub struct Displayed<'a, T: ?Sized>(pub &'a T);

impl<T: Display + ?Sized> Subject for Displayed<'_, T> {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::named(short_type_name(std::any::type_name::<T>()))
    }

    fn leaf_value(&self) -> Result<Value, ProjectionError> {
        Ok(Value::String(self.0.to_string()))
    }

    fn is_zero(&self) -> bool {
        self.0.to_string().is_empty()
    }

    fn identity(&self) -> usize {
        std::ptr::from_ref(self.0).cast::<()>().addr()
    }
}

/// Zero test on an already projected value.
#[must_use]
pub fn is_zero_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
