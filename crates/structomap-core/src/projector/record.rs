//! Field access over serializable records
//!
//! A record exposes its fields through `serde::Serialize`: it is introspected
//! by serialising it to a JSON value, and it is record-like only if that value
//! is an object. Field names are the serialised names.
//!
//! Copyright (c) 2025 Structomap Team
//! Licensed under the Apache-2.0 license

use serde::Serialize;
use serde_json::Value;
use std::cell::OnceCell;

use crate::error::{value_kind, Error, Result};

use super::types::FieldMap;

/// Read every serialised field of `record`
pub(crate) fn introspect<T: Serialize + ?Sized>(record: &T) -> Result<FieldMap> {
    let value = serde_json::to_value(record).map_err(|e| {
        Error::unsupported_type::<T>(format!("record could not be serialized: {}", e), Some(e))
    })?;

    match value {
        Value::Object(fields) => Ok(fields),
        other => Err(Error::unsupported_type::<T>(
            format!("expected a struct-like record, found {}", value_kind(&other)),
            None,
        )),
    }
}

/// The record bound for a single transform call
///
/// Fields are introspected at most once, and only when a step asks for them.
pub(crate) struct RecordView<'a, T: ?Sized> {
    record: &'a T,
    fields: OnceCell<FieldMap>,
}

impl<'a, T: Serialize + ?Sized> RecordView<'a, T> {
    pub fn new(record: &'a T) -> Self {
        Self {
            record,
            fields: OnceCell::new(),
        }
    }

    /// The underlying record
    pub fn record(&self) -> &'a T {
        self.record
    }

    /// All fields of the record
    pub fn fields(&self) -> Result<&FieldMap> {
        if let Some(fields) = self.fields.get() {
            return Ok(fields);
        }
        let fields = introspect(self.record)?;
        Ok(self.fields.get_or_init(|| fields))
    }

    /// A single field by its serialised name
    pub fn field(&self, name: &str) -> Result<Value> {
        self.fields()?
            .get(name)
            .cloned()
            .ok_or_else(|| Error::no_such_field::<T>(name))
    }
}

/// An ordered sequence of homogeneous records accepted by batch transforms
pub trait RecordBatch<T> {
    /// The records in order, or `NotASequence` if this is not a sequence
    fn records(&self) -> Result<&[T]>;
}

impl<T> RecordBatch<T> for [T] {
    fn records(&self) -> Result<&[T]> {
        Ok(self)
    }
}

impl<T> RecordBatch<T> for Vec<T> {
    fn records(&self) -> Result<&[T]> {
        Ok(self.as_slice())
    }
}

impl<T, const N: usize> RecordBatch<T> for [T; N] {
    fn records(&self) -> Result<&[T]> {
        Ok(self.as_slice())
    }
}

/// Dynamic input: only a JSON array is a sequence
impl RecordBatch<Value> for Value {
    fn records(&self) -> Result<&[Value]> {
        match self {
            Value::Array(items) => Ok(items.as_slice()),
            other => Err(Error::NotASequence {
                found: value_kind(other).to_string(),
            }),
        }
    }
}
