#![deny(clippy::all)]

//! FFmpeg codec property bridge for Node.js
//!
//! Exposes AVCodecContext and AVCodecParameters to JavaScript as gated
//! property-surface objects, backed by hand-written FFmpeg bindings.
//!
//! The marshalling core is pure Rust and builds without FFmpeg; the FFI,
//! codec, and bridge layers require FFmpeg headers and libraries at build
//! time (`cfg(has_ffmpeg)`, probed by the build script).

// Field policy, value model, and the get/set engine (no native deps)
pub mod marshal;

// FFmpeg C bindings (hand-written, no bindgen)
#[cfg(has_ffmpeg)]
pub mod ffi;

// Safe codec wrappers (RAII)
#[cfg(has_ffmpeg)]
pub mod codec;

// JavaScript API surface (NAPI classes); compiled out of test binaries so
// the unit tests never reference napi symbols
#[cfg(all(has_ffmpeg, not(test)))]
pub mod bridge;

#[cfg(all(has_ffmpeg, not(test)))]
pub use bridge::{codec_parameters, create_decoder, create_encoder};
