//! Declarative field projection from records into key/value maps
//!
//! A [`Projector`] records an ordered list of steps (pick, omit, add, convert
//! and their conditional variants) and replays them against each record handed
//! to [`Projector::transform`]. Later steps win: omitting a key and then
//! picking it again leaves it present.
//!
//! # Module Organization
//!
//! - [`types`] - Step and callable types
//! - [`record`] - Batch inputs; field access itself is crate-internal
//! - [`pipeline`] - The projector and its transform logic
//! - [`builder`] - Fluent methods registering steps
//! - [`built_in`] - Ready-made converters and predicates
//!
//! # Examples
//!
//! ```
//! use serde::Serialize;
//! use serde_json::json;
//! use structomap_core::Projector;
//!
//! #[derive(Serialize)]
//! #[serde(rename_all = "PascalCase")]
//! struct User {
//!     first_name: String,
//!     last_name: String,
//!     hide_email: bool,
//!     email: String,
//! }
//!
//! let mut projector = Projector::<User>::new();
//! projector
//!     .use_snake_case()
//!     .pick(["FirstName", "Email"])
//!     .omit_if(|u: &User| u.hide_email, ["Email"])
//!     .add_computed("FullName", |u: &User| json!(format!("{} {}", u.first_name, u.last_name)));
//!
//! let user = User {
//!     first_name: "Foo".to_string(),
//!     last_name: "Bar".to_string(),
//!     hide_email: true,
//!     email: "x@example.com".to_string(),
//! };
//! let map = projector.transform(&user).unwrap();
//! assert_eq!(map["first_name"], json!("Foo"));
//! assert_eq!(map["full_name"], json!("Foo Bar"));
//! assert!(!map.contains_key("email"));
//! ```
//!
//! Copyright (c) 2025 Structomap Team
//! Licensed under the Apache-2.0 license

pub mod types;

pub mod record;

pub mod pipeline;

pub mod builder;

pub mod built_in;


pub use types::{FieldMap, KeyConverter, Modifier, Predicate, RecordConverter, ValueConverter};
pub use record::RecordBatch;
pub use pipeline::Projector;
