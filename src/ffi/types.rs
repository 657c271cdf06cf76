//! Core FFmpeg type definitions
//!
//! All FFmpeg structs are opaque (zero-sized) to avoid version-specific
//! layout dependencies. Field access is done via the thin C accessor library
//! in accessors.c

use std::marker::PhantomData;
use std::os::raw::c_int;

// ============================================================================
// Rational Number
// ============================================================================

/// Rational number for time bases and aspect ratios
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AVRational {
  /// Numerator
  pub num: c_int,
  /// Denominator
  pub den: c_int,
}

impl AVRational {
  pub const fn new(num: c_int, den: c_int) -> Self {
    Self { num, den }
  }
}

// ============================================================================
// Opaque Struct Types
// ============================================================================

macro_rules! opaque_struct {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[repr(C)]
    pub struct $name {
      _data: [u8; 0],
      _marker: PhantomData<(*mut u8, std::marker::PhantomPinned)>,
    }
  };
}

opaque_struct!(
  /// Codec descriptor and capabilities (read-only, owned by FFmpeg)
  AVCodec
);
opaque_struct!(
  /// Main codec state for encoding or decoding
  AVCodecContext
);
opaque_struct!(
  /// Codec parameters detached from any context
  AVCodecParameters
);
opaque_struct!(
  /// Static per-codec-id properties
  AVCodecDescriptor
);
opaque_struct!(
  /// One entry of an AVClass option table
  AVOption
);

// ============================================================================
// Constants
// ============================================================================

/// AVPixelFormat / AVSampleFormat "none"
pub const AV_FMT_NONE: c_int = -1;
