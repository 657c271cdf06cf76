//! Safe Rust wrappers for FFmpeg codec structs
//!
//! RAII wrappers around AVCodecContext and AVCodecParameters that own the
//! native allocations and implement the marshalling `NativeStore` seam.

pub mod context;
pub mod options;
pub mod params;

pub use context::CodecContext;
pub use params::CodecParameters;

/// Codec wrapper error type
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
  #[error("FFmpeg error: {0}")]
  Ffmpeg(#[from] crate::ffi::FFmpegError),

  #[error("Codec not found: {0}")]
  CodecNotFound(String),

  #[error("Allocation failed: {0}")]
  AllocationFailed(&'static str),

  #[error("Invalid codec name: {0}")]
  InvalidName(String),
}

pub type CodecResult<T> = Result<T, CodecError>;
