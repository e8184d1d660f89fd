//! Structomap Core - declarative projection of records into key/value maps
//!
//! Select, rename, omit, transform and augment the fields of any
//! `serde::Serialize` record to build a [`FieldMap`] ready for a downstream
//! encoder. Encoding the map (JSON, YAML, ...) is left to the caller.
//!
//! # Main Components
//!
//! - **Projector**: ordered, reusable field-selection rules ([`Projector`])
//! - **Key casing**: snake_case / camelCase / PascalCase output keys ([`KeyCase`])
//! - **Configuration**: injected or process-wide defaults ([`ProjectorConfig`])
//! - **Error Handling**: a single `thiserror` error type ([`Error`])
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use structomap_core::{Projector, Result};
//!
//! fn example() -> Result<()> {
//!     let mut projector = Projector::<serde_json::Value>::new();
//!     projector.pick(["id"]).add("kind", "user").use_pascal_case();
//!
//!     let map = projector.transform(&json!({"id": 7, "secret": "x"}))?;
//!     assert_eq!(serde_json::Value::Object(map), json!({"Id": 7, "Kind": "user"}));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod casing;
pub mod config;
pub mod error;
pub mod projector;

// Re-export main types for convenience
pub use casing::KeyCase;
pub use config::{default_config, set_default_config, set_default_key_case, ProjectorConfig};
pub use error::{Error, Result};
pub use projector::{built_in, FieldMap, Modifier, Projector, RecordBatch};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
