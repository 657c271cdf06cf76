//! FFmpeg error handling
//!
//! Error codes, error conversion, and result types.

use std::ffi::CStr;
use std::fmt;
use std::os::raw::c_int;

/// Out of memory (same negated errno across platforms)
pub const AVERROR_ENOMEM: c_int = -12;

/// Invalid argument
pub const AVERROR_EINVAL: c_int = -22;

/// Option not found
pub const AVERROR_OPTION_NOT_FOUND: c_int = fferrtag(0xF8, b'O', b'P', b'T');

/// Create FFmpeg error tag from 4 bytes
const fn fferrtag(a: u8, b: u8, c: u8, d: u8) -> c_int {
  -((a as c_int) | ((b as c_int) << 8) | ((c as c_int) << 16) | ((d as c_int) << 24))
}

/// FFmpeg error with code and message
#[derive(Clone)]
pub struct FFmpegError {
  /// Error code (negative)
  pub code: c_int,
  /// Human-readable message
  pub message: String,
}

impl FFmpegError {
  /// Create error from FFmpeg error code
  pub fn from_code(code: c_int) -> Self {
    let mut buf = [0 as std::os::raw::c_char; 256];
    unsafe {
      super::avutil::av_strerror(code, buf.as_mut_ptr(), buf.len());
      let message = CStr::from_ptr(buf.as_ptr()).to_string_lossy().into_owned();
      Self { code, message }
    }
  }

  /// Create error with custom message
  pub fn new(code: c_int, message: impl Into<String>) -> Self {
    Self {
      code,
      message: message.into(),
    }
  }
}

impl fmt::Debug for FFmpegError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("FFmpegError")
      .field("code", &self.code)
      .field("message", &self.message)
      .finish()
  }
}

impl fmt::Display for FFmpegError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "FFmpeg error {}: {}", self.code, self.message)
  }
}

impl std::error::Error for FFmpegError {}

/// Result type for FFmpeg operations
pub type FFmpegResult<T> = Result<T, FFmpegError>;

/// Check FFmpeg return code and convert to Result
///
/// Returns Ok with the value if >= 0, Err with FFmpegError if < 0
#[inline]
pub fn check_error(ret: c_int) -> FFmpegResult<c_int> {
  if ret < 0 {
    Err(FFmpegError::from_code(ret))
  } else {
    Ok(ret)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn error_codes_are_negative() {
    assert!(AVERROR_ENOMEM < 0);
    assert!(AVERROR_EINVAL < 0);
    assert!(AVERROR_OPTION_NOT_FOUND < 0);
  }
}
