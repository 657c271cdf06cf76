//! Hand-written FFmpeg C bindings (no bindgen)
//!
//! All FFmpeg structs are opaque - field access goes through the thin C
//! accessor library compiled from accessors.c.

pub mod accessors;
pub mod avcodec;
pub mod avutil;
pub mod error;
pub mod types;

pub use error::{check_error, FFmpegError, FFmpegResult};
pub use types::*;
