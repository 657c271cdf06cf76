//! libavcodec function declarations
//!
//! Codec discovery, context and parameters lifecycle, codec descriptors.

use super::types::*;
use std::os::raw::{c_char, c_int};

unsafe extern "C" {
  // ========================================================================
  // Codec Discovery
  // ========================================================================

  /// Find an encoder by codec ID
  pub fn avcodec_find_encoder(id: c_int) -> *const AVCodec;

  /// Find an encoder by name (e.g., "libx264")
  pub fn avcodec_find_encoder_by_name(name: *const c_char) -> *const AVCodec;

  /// Find a decoder by codec ID
  pub fn avcodec_find_decoder(id: c_int) -> *const AVCodec;

  /// Find a decoder by name
  pub fn avcodec_find_decoder_by_name(name: *const c_char) -> *const AVCodec;

  // ========================================================================
  // Codec Context Lifecycle
  // ========================================================================

  /// Allocate an AVCodecContext and set its fields to default values
  pub fn avcodec_alloc_context3(codec: *const AVCodec) -> *mut AVCodecContext;

  /// Free the codec context and everything associated with it
  pub fn avcodec_free_context(avctx: *mut *mut AVCodecContext);

  // ========================================================================
  // Codec Parameters Lifecycle
  // ========================================================================

  /// Allocate a fresh AVCodecParameters set to defaults
  pub fn avcodec_parameters_alloc() -> *mut AVCodecParameters;

  /// Free an AVCodecParameters and any contained data
  pub fn avcodec_parameters_free(par: *mut *mut AVCodecParameters);

  // ========================================================================
  // Codec Descriptors
  // ========================================================================

  /// Descriptor for a codec ID, or NULL if the ID is not registered
  pub fn avcodec_descriptor_get(id: c_int) -> *const AVCodecDescriptor;

  /// Descriptor matching a codec name, or NULL
  pub fn avcodec_descriptor_get_by_name(name: *const c_char) -> *const AVCodecDescriptor;
}
