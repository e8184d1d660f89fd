//! Fluent builder API for registering projection steps
//!
//! Each method appends one step and returns `&mut Self`. Predicates passed to
//! the `_if` variants are evaluated when a record is transformed, against that
//! record, never at registration time.
//!
//! Copyright (c) 2025 Structomap Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;
use std::sync::Arc;

use crate::casing::KeyCase;

use super::pipeline::Projector;
use super::types::{Modifier, Predicate, ValueConverter};

fn collect_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}

impl<T> Projector<T> {
    fn push(&mut self, modifier: Modifier<T>) -> &mut Self {
        self.modifiers.push(modifier);
        self
    }

    fn push_if<P>(&mut self, predicate: P, modifier: Modifier<T>) -> &mut Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let predicate: Predicate<T> = Arc::new(predicate);
        self.push(modifier.when(predicate))
    }

    fn pick_modifier<I, S, F>(converter: Option<F>, names: I) -> Modifier<T>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Modifier::Pick {
            names: collect_names(names),
            converter: converter.map(|f| Arc::new(f) as ValueConverter),
        }
    }

    /// Replace the result with every field of the record
    pub fn pick_all(&mut self) -> &mut Self {
        self.push(Modifier::PickAll)
    }

    /// [`Projector::pick_all`] when the predicate holds
    pub fn pick_all_if<P>(&mut self, predicate: P) -> &mut Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.push_if(predicate, Modifier::PickAll)
    }

    /// Copy the named fields, overwriting existing keys
    pub fn pick<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Self::pick_modifier(None::<fn(Value) -> Value>, names))
    }

    /// [`Projector::pick`] when the predicate holds
    pub fn pick_if<P, I, S>(&mut self, predicate: P, names: I) -> &mut Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_if(predicate, Self::pick_modifier(None::<fn(Value) -> Value>, names))
    }

    /// Copy the named fields after passing each value through `converter`
    pub fn pick_with<F, I, S>(&mut self, converter: F, names: I) -> &mut Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Self::pick_modifier(Some(converter), names))
    }

    /// [`Projector::pick_with`] when the predicate holds
    pub fn pick_with_if<P, F, I, S>(&mut self, predicate: P, converter: F, names: I) -> &mut Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
        F: Fn(Value) -> Value + Send + Sync + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_if(predicate, Self::pick_modifier(Some(converter), names))
    }

    /// Remove the named keys; missing keys are ignored
    pub fn omit<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Modifier::Omit {
            names: collect_names(names),
        })
    }

    /// [`Projector::omit`] when the predicate holds
    pub fn omit_if<P, I, S>(&mut self, predicate: P, names: I) -> &mut Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_if(
            predicate,
            Modifier::Omit {
                names: collect_names(names),
            },
        )
    }

    /// Store a literal value under `key`
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.push(Modifier::Add {
            key: key.into(),
            value: value.into(),
        })
    }

    /// [`Projector::add`] when the predicate holds
    pub fn add_if<P>(
        &mut self,
        predicate: P,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.push_if(
            predicate,
            Modifier::Add {
                key: key.into(),
                value: value.into(),
            },
        )
    }

    /// Store the value computed from the whole record under `key`
    pub fn add_computed<F>(&mut self, key: impl Into<String>, compute: F) -> &mut Self
    where
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        self.push(Modifier::AddComputed {
            key: key.into(),
            compute: Arc::new(compute),
        })
    }

    /// [`Projector::add_computed`] when the predicate holds
    pub fn add_computed_if<P, F>(
        &mut self,
        predicate: P,
        key: impl Into<String>,
        compute: F,
    ) -> &mut Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        self.push_if(
            predicate,
            Modifier::AddComputed {
                key: key.into(),
                compute: Arc::new(compute),
            },
        )
    }

    /// Read field `key` from the record and store its converted value
    ///
    /// The field is read from the record, not from the result, so it does
    /// not need to have been picked first.
    pub fn convert<F>(&mut self, key: impl Into<String>, converter: F) -> &mut Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.push(Modifier::Convert {
            key: key.into(),
            converter: Arc::new(converter),
        })
    }

    /// [`Projector::convert`] when the predicate holds
    pub fn convert_if<P, F>(
        &mut self,
        predicate: P,
        key: impl Into<String>,
        converter: F,
    ) -> &mut Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.push_if(
            predicate,
            Modifier::Convert {
                key: key.into(),
                converter: Arc::new(converter),
            },
        )
    }

    /// Rename every output key with `converter`, replacing any previous one
    pub fn convert_keys<F>(&mut self, converter: F) -> &mut Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.key_converter = Some(Arc::new(converter));
        self
    }

    /// Rename every output key to the given case
    pub fn use_key_case(&mut self, key_case: KeyCase) -> &mut Self {
        self.convert_keys(move |key| key_case.apply(key))
    }

    /// `FirstName` -> `first_name`
    pub fn use_snake_case(&mut self) -> &mut Self {
        self.use_key_case(KeyCase::Snake)
    }

    /// `FirstName` -> `firstName`
    pub fn use_camel_case(&mut self) -> &mut Self {
        self.use_key_case(KeyCase::Camel)
    }

    /// `first_name` -> `FirstName`
    pub fn use_pascal_case(&mut self) -> &mut Self {
        self.use_key_case(KeyCase::Pascal)
    }

    /// Keep keys exactly as produced by the steps
    pub fn clear_key_case(&mut self) -> &mut Self {
        self.key_converter = None;
        self
    }
}
