//! Core types for the projection pipeline
//!
//! This module defines the callable types a projector stores and the
//! [`Modifier`] steps it replays against every record.
//!
//! Copyright (c) 2025 Structomap Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// The projected key/value map
pub type FieldMap = serde_json::Map<String, Value>;

/// Gate evaluated against the record being transformed
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Transforms a single field value
pub type ValueConverter = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// Computes a value from the whole record
pub type RecordConverter<T> = Arc<dyn Fn(&T) -> Value + Send + Sync>;

/// Renames an output key
pub type KeyConverter = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// One registered step of a projector
pub enum Modifier<T> {
    /// Replace the map with every field of the record
    PickAll,
    /// Copy named fields, optionally through a converter
    Pick {
        names: Vec<String>,
        converter: Option<ValueConverter>,
    },
    /// Remove named keys; absent keys are ignored
    Omit {
        names: Vec<String>,
    },
    /// Store a literal value
    Add {
        key: String,
        value: Value,
    },
    /// Store a value computed from the record
    AddComputed {
        key: String,
        compute: RecordConverter<T>,
    },
    /// Read a field from the record and store its converted value
    Convert {
        key: String,
        converter: ValueConverter,
    },
    /// Apply the inner step only when the predicate holds for the record
    Conditional {
        predicate: Predicate<T>,
        inner: Box<Modifier<T>>,
    },
}

impl<T> Modifier<T> {
    /// Short operation name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Modifier::PickAll => "pick_all",
            Modifier::Pick { converter: None, .. } => "pick",
            Modifier::Pick { converter: Some(_), .. } => "pick_with",
            Modifier::Omit { .. } => "omit",
            Modifier::Add { .. } => "add",
            Modifier::AddComputed { .. } => "add_computed",
            Modifier::Convert { .. } => "convert",
            Modifier::Conditional { inner, .. } => inner.name(),
        }
    }

    /// Wrap this step so it only applies when `predicate` holds
    pub fn when(self, predicate: Predicate<T>) -> Self {
        Modifier::Conditional {
            predicate,
            inner: Box::new(self),
        }
    }
}

impl<T> Clone for Modifier<T> {
    fn clone(&self) -> Self {
        match self {
            Modifier::PickAll => Modifier::PickAll,
            Modifier::Pick { names, converter } => Modifier::Pick {
                names: names.clone(),
                converter: converter.clone(),
            },
            Modifier::Omit { names } => Modifier::Omit {
                names: names.clone(),
            },
            Modifier::Add { key, value } => Modifier::Add {
                key: key.clone(),
                value: value.clone(),
            },
            Modifier::AddComputed { key, compute } => Modifier::AddComputed {
                key: key.clone(),
                compute: Arc::clone(compute),
            },
            Modifier::Convert { key, converter } => Modifier::Convert {
                key: key.clone(),
                converter: Arc::clone(converter),
            },
            Modifier::Conditional { predicate, inner } => Modifier::Conditional {
                predicate: Arc::clone(predicate),
                inner: inner.clone(),
            },
        }
    }
}

impl<T> fmt::Debug for Modifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::PickAll => f.write_str("PickAll"),
            Modifier::Pick { names, converter } => f
                .debug_struct("Pick")
                .field("names", names)
                .field("converted", &converter.is_some())
                .finish(),
            Modifier::Omit { names } => f.debug_struct("Omit").field("names", names).finish(),
            Modifier::Add { key, value } => f
                .debug_struct("Add")
                .field("key", key)
                .field("value", value)
                .finish(),
            Modifier::AddComputed { key, .. } => {
                f.debug_struct("AddComputed").field("key", key).finish_non_exhaustive()
            }
            Modifier::Convert { key, .. } => {
                f.debug_struct("Convert").field("key", key).finish_non_exhaustive()
            }
            Modifier::Conditional { inner, .. } => {
                f.debug_struct("Conditional").field("inner", inner).finish_non_exhaustive()
            }
        }
    }
}
