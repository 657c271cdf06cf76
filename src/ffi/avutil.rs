//! libavutil function declarations
//!
//! Memory helpers, format/layout name lookups, and the AVOption API used by
//! the private-data option bridge.

use super::types::*;
use std::os::raw::{c_char, c_int, c_void};

unsafe extern "C" {
  // ========================================================================
  // Memory
  // ========================================================================

  /// Free a memory block which has been allocated with av_malloc
  pub fn av_free(ptr: *mut c_void);

  // ========================================================================
  // Error Strings
  // ========================================================================

  /// Put a description of the AVERROR code in errbuf
  pub fn av_strerror(errnum: c_int, errbuf: *mut c_char, errbuf_size: usize) -> c_int;

  // ========================================================================
  // Format Name Lookups
  // ========================================================================

  /// Pixel format for a name, or AV_PIX_FMT_NONE
  pub fn av_get_pix_fmt(name: *const c_char) -> c_int;

  /// Name of a pixel format, or NULL for invalid values
  pub fn av_get_pix_fmt_name(pix_fmt: c_int) -> *const c_char;

  /// Sample format for a name, or AV_SAMPLE_FMT_NONE
  pub fn av_get_sample_fmt(name: *const c_char) -> c_int;

  /// Name of a sample format, or NULL for invalid values
  pub fn av_get_sample_fmt_name(sample_fmt: c_int) -> *const c_char;

  // ========================================================================
  // Channel Layouts
  // ========================================================================

  /// Channel layout mask for a layout name, 0 when unrecognized
  pub fn av_get_channel_layout(name: *const c_char) -> u64;

  /// Render a channel layout description into buf
  pub fn av_get_channel_layout_string(
    buf: *mut c_char,
    buf_size: c_int,
    nb_channels: c_int,
    channel_layout: u64,
  );

  // ========================================================================
  // AVOption API
  // ========================================================================

  /// Iterate the options of an AVClass-carrying object; NULL prev starts over
  pub fn av_opt_next(obj: *const c_void, prev: *const AVOption) -> *const AVOption;

  /// Look up an option by name
  pub fn av_opt_find(
    obj: *mut c_void,
    name: *const c_char,
    unit: *const c_char,
    opt_flags: c_int,
    search_flags: c_int,
  ) -> *const AVOption;

  /// Read an option as a freshly allocated string (caller frees with av_free)
  pub fn av_opt_get(
    obj: *mut c_void,
    name: *const c_char,
    search_flags: c_int,
    out_val: *mut *mut u8,
  ) -> c_int;

  pub fn av_opt_get_int(
    obj: *mut c_void,
    name: *const c_char,
    search_flags: c_int,
    out_val: *mut i64,
  ) -> c_int;

  pub fn av_opt_get_double(
    obj: *mut c_void,
    name: *const c_char,
    search_flags: c_int,
    out_val: *mut f64,
  ) -> c_int;

  pub fn av_opt_get_q(
    obj: *mut c_void,
    name: *const c_char,
    search_flags: c_int,
    out_val: *mut AVRational,
  ) -> c_int;

  pub fn av_opt_set(
    obj: *mut c_void,
    name: *const c_char,
    val: *const c_char,
    search_flags: c_int,
  ) -> c_int;

  pub fn av_opt_set_int(
    obj: *mut c_void,
    name: *const c_char,
    val: i64,
    search_flags: c_int,
  ) -> c_int;

  pub fn av_opt_set_double(
    obj: *mut c_void,
    name: *const c_char,
    val: f64,
    search_flags: c_int,
  ) -> c_int;
}
