//! Marshalling core
//!
//! Pure policy layer for the property surface: value model, error taxonomy,
//! enum registries, bitflag codec, field tables with mode gating, and the
//! get/set engine over the `NativeStore` seam. Nothing here depends on
//! FFmpeg or Node, so this layer builds and tests everywhere.

pub mod engine;
pub mod enums;
pub mod error;
pub mod fields;
pub mod flags;
pub mod options;
pub mod value;

pub use engine::{get_field, set_field, snapshot, Mode, NativeStore};
pub use error::{BridgeError, BridgeResult, DenyReason};
pub use fields::{context_field, parameter_field, FieldId, FieldKind, FieldSpec, Rule};
pub use value::Value;
