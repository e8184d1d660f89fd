//! Projection pipeline implementation
//!
//! This module contains the [`Projector`] itself and the logic that replays
//! its registered steps against a record. Every transform starts from an empty
//! map, runs the steps in registration order and then renames keys once.
//!
//! Copyright (c) 2025 Structomap Team
//! Licensed under the Apache-2.0 license

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::config::{self, ProjectorConfig};
use crate::error::Result;

use super::record::{RecordBatch, RecordView};
use super::types::{FieldMap, KeyConverter, Modifier};

/// A reusable set of field-selection rules for records of type `T`
///
/// Builder methods mutate the projector in place and return `&mut Self`, so
/// wrapper types embedding a projector keep every step registered through
/// them. The record is supplied per call to [`Projector::transform`], so one
/// projector can be shared across threads and reused for any number of
/// records.
pub struct Projector<T> {
    /// Ordered list of steps
    pub(super) modifiers: Vec<Modifier<T>>,
    /// Applied to every output key after all steps ran
    pub(super) key_converter: Option<KeyConverter>,
}

impl<T: Serialize> Projector<T> {
    /// Create a projector using the process-wide default configuration
    pub fn new() -> Self {
        Self::with_config(&config::default_config())
    }

    /// Create a projector from an explicit configuration
    pub fn with_config(config: &ProjectorConfig) -> Self {
        let mut projector = Self {
            modifiers: Vec::new(),
            key_converter: None,
        };
        if let Some(key_case) = config.key_case {
            projector.use_key_case(key_case);
        }
        projector
    }

    /// Project a single record
    pub fn transform(&self, record: &T) -> Result<FieldMap> {
        let view = RecordView::new(record);
        let mut result = FieldMap::new();

        for modifier in &self.modifiers {
            self.apply_modifier(modifier, &mut result, &view)?;
        }

        Ok(self.convert_keys_of(result))
    }

    /// Project every record of a sequence, preserving order
    ///
    /// Stops at the first record that fails to project.
    pub fn transform_batch<B>(&self, records: &B) -> Result<Vec<FieldMap>>
    where
        B: RecordBatch<T> + ?Sized,
    {
        let records = records.records()?;
        let span = tracing::debug_span!("transform_batch", records = records.len());
        let _guard = span.enter();

        records.iter().map(|record| self.transform(record)).collect()
    }

    /// Like [`Projector::transform_batch`], but panics on error
    pub fn must_transform_batch<B>(&self, records: &B) -> Vec<FieldMap>
    where
        B: RecordBatch<T> + ?Sized,
    {
        match self.transform_batch(records) {
            Ok(result) => result,
            Err(e) => panic!("must_transform_batch failed: {}", e),
        }
    }

    /// Apply a single step to the accumulating map
    fn apply_modifier(
        &self,
        modifier: &Modifier<T>,
        result: &mut FieldMap,
        view: &RecordView<'_, T>,
    ) -> Result<()> {
        match modifier {
            Modifier::PickAll => {
                *result = view.fields()?.clone();
            }
            Modifier::Pick { names, converter } => {
                for name in names {
                    let value = view.field(name)?;
                    let value = match converter {
                        Some(convert) => convert(value),
                        None => value,
                    };
                    result.insert(name.clone(), value);
                }
            }
            Modifier::Omit { names } => {
                for name in names {
                    result.remove(name);
                }
            }
            Modifier::Add { key, value } => {
                result.insert(key.clone(), value.clone());
            }
            Modifier::AddComputed { key, compute } => {
                result.insert(key.clone(), compute(view.record()));
            }
            Modifier::Convert { key, converter } => {
                let value = view.field(key)?;
                result.insert(key.clone(), converter(value));
            }
            Modifier::Conditional { predicate, inner } => {
                if predicate(view.record()) {
                    self.apply_modifier(inner, result, view)?;
                } else {
                    log::trace!("Skipping '{}' step, predicate is false", inner.name());
                }
            }
        }
        Ok(())
    }

    /// Rename every key of the final map
    fn convert_keys_of(&self, result: FieldMap) -> FieldMap {
        let Some(key_converter) = &self.key_converter else {
            return result;
        };

        let mut converted = FieldMap::new();
        for (key, value) in result {
            let new_key = key_converter(&key);
            if converted.contains_key(&new_key) {
                log::warn!(
                    "Key '{}' collides with another key as '{}', keeping the later one",
                    key,
                    new_key
                );
            }
            converted.insert(new_key, value);
        }
        converted
    }
}

impl<T> Projector<T> {
    /// Number of registered steps
    pub fn modifier_count(&self) -> usize {
        self.modifiers.len()
    }

    /// Registered steps in execution order
    pub fn modifiers(&self) -> &[Modifier<T>] {
        &self.modifiers
    }

    /// Whether output keys are renamed
    pub fn has_key_converter(&self) -> bool {
        self.key_converter.is_some()
    }
}

impl<T: Serialize> Default for Projector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Projector<T> {
    fn clone(&self) -> Self {
        Self {
            modifiers: self.modifiers.clone(),
            key_converter: self.key_converter.as_ref().map(Arc::clone),
        }
    }
}

impl<T> fmt::Debug for Projector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Projector")
            .field("modifiers", &self.modifiers)
            .field("key_converter", &self.key_converter.is_some())
            .finish()
    }
}
