//! Rust declarations for C accessor functions
//!
//! These functions provide access to FFmpeg struct fields via the thin C
//! accessor library. Setters that allocate return 0 or a negative AVERROR.

use super::types::*;
use std::os::raw::{c_char, c_float, c_int, c_void};

unsafe extern "C" {
  // ========================================================================
  // AVCodecContext Getters
  // ========================================================================

  pub fn ffctx_get_codec_id(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_codec_name(ctx: *const AVCodecContext) -> *const c_char;
  pub fn ffctx_get_codec_long_name(ctx: *const AVCodecContext) -> *const c_char;
  pub fn ffctx_get_codec_tag(ctx: *const AVCodecContext) -> u32;
  pub fn ffctx_get_bit_rate(ctx: *const AVCodecContext) -> i64;
  pub fn ffctx_get_bit_rate_tolerance(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_global_quality(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_compression_level(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_flags(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_flags2(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_extradata(ctx: *const AVCodecContext) -> *const u8;
  pub fn ffctx_get_extradata_size(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_time_base(ctx: *const AVCodecContext, num: *mut c_int, den: *mut c_int);
  pub fn ffctx_get_ticks_per_frame(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_delay(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_width(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_height(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_coded_width(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_coded_height(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_gop_size(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_pix_fmt(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_max_b_frames(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_b_quant_factor(ctx: *const AVCodecContext) -> c_float;
  pub fn ffctx_get_b_quant_offset(ctx: *const AVCodecContext) -> c_float;
  pub fn ffctx_get_i_quant_factor(ctx: *const AVCodecContext) -> c_float;
  pub fn ffctx_get_i_quant_offset(ctx: *const AVCodecContext) -> c_float;
  pub fn ffctx_get_lumi_masking(ctx: *const AVCodecContext) -> c_float;
  pub fn ffctx_get_temporal_cplx_masking(ctx: *const AVCodecContext) -> c_float;
  pub fn ffctx_get_spatial_cplx_masking(ctx: *const AVCodecContext) -> c_float;
  pub fn ffctx_get_p_masking(ctx: *const AVCodecContext) -> c_float;
  pub fn ffctx_get_dark_masking(ctx: *const AVCodecContext) -> c_float;
  pub fn ffctx_get_has_b_frames(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_slice_count(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_slice_offset(ctx: *const AVCodecContext) -> *const c_int;
  pub fn ffctx_get_sample_aspect_ratio(
    ctx: *const AVCodecContext,
    num: *mut c_int,
    den: *mut c_int,
  );
  pub fn ffctx_get_me_cmp(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_me_sub_cmp(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_mb_cmp(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_ildct_cmp(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_me_pre_cmp(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_dia_size(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_last_predictor_count(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_pre_dia_size(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_me_subpel_quality(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_me_range(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_slice_flags(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_mb_decision(ctx: *const AVCodecContext) -> c_int;
  pub fn ffctx_get_intra_matrix(ctx: *const AVCodecContext) -> *const u16;
  pub fn ffctx_get_inter_matrix(ctx: *const AVCodecContext) -> *const u16;
  pub fn ffctx_get_priv_data(ctx: *const AVCodecContext) -> *mut c_void;
  pub fn ffctx_get_priv_class_name(ctx: *const AVCodecContext) -> *const c_char;

  // ========================================================================
  // AVCodecContext Setters
  // ========================================================================

  pub fn ffctx_set_bit_rate(ctx: *mut AVCodecContext, bit_rate: i64);
  pub fn ffctx_set_bit_rate_tolerance(ctx: *mut AVCodecContext, tolerance: c_int);
  pub fn ffctx_set_global_quality(ctx: *mut AVCodecContext, quality: c_int);
  pub fn ffctx_set_compression_level(ctx: *mut AVCodecContext, level: c_int);
  pub fn ffctx_set_flags(ctx: *mut AVCodecContext, flags: c_int);
  pub fn ffctx_set_flags2(ctx: *mut AVCodecContext, flags2: c_int);
  pub fn ffctx_set_extradata(ctx: *mut AVCodecContext, data: *const u8, size: c_int) -> c_int;
  pub fn ffctx_set_time_base(ctx: *mut AVCodecContext, num: c_int, den: c_int);
  pub fn ffctx_set_ticks_per_frame(ctx: *mut AVCodecContext, ticks: c_int);
  pub fn ffctx_set_width(ctx: *mut AVCodecContext, width: c_int);
  pub fn ffctx_set_height(ctx: *mut AVCodecContext, height: c_int);
  pub fn ffctx_set_coded_width(ctx: *mut AVCodecContext, width: c_int);
  pub fn ffctx_set_coded_height(ctx: *mut AVCodecContext, height: c_int);
  pub fn ffctx_set_gop_size(ctx: *mut AVCodecContext, gop_size: c_int);
  pub fn ffctx_set_pix_fmt(ctx: *mut AVCodecContext, pix_fmt: c_int);
  pub fn ffctx_set_max_b_frames(ctx: *mut AVCodecContext, max_b_frames: c_int);
  pub fn ffctx_set_b_quant_factor(ctx: *mut AVCodecContext, v: c_float);
  pub fn ffctx_set_b_quant_offset(ctx: *mut AVCodecContext, v: c_float);
  pub fn ffctx_set_i_quant_factor(ctx: *mut AVCodecContext, v: c_float);
  pub fn ffctx_set_i_quant_offset(ctx: *mut AVCodecContext, v: c_float);
  pub fn ffctx_set_lumi_masking(ctx: *mut AVCodecContext, v: c_float);
  pub fn ffctx_set_temporal_cplx_masking(ctx: *mut AVCodecContext, v: c_float);
  pub fn ffctx_set_spatial_cplx_masking(ctx: *mut AVCodecContext, v: c_float);
  pub fn ffctx_set_p_masking(ctx: *mut AVCodecContext, v: c_float);
  pub fn ffctx_set_dark_masking(ctx: *mut AVCodecContext, v: c_float);
  pub fn ffctx_set_slice_offset(
    ctx: *mut AVCodecContext,
    offsets: *const c_int,
    count: c_int,
  ) -> c_int;
  pub fn ffctx_set_sample_aspect_ratio(ctx: *mut AVCodecContext, num: c_int, den: c_int);
  pub fn ffctx_set_me_cmp(ctx: *mut AVCodecContext, v: c_int);
  pub fn ffctx_set_me_sub_cmp(ctx: *mut AVCodecContext, v: c_int);
  pub fn ffctx_set_mb_cmp(ctx: *mut AVCodecContext, v: c_int);
  pub fn ffctx_set_ildct_cmp(ctx: *mut AVCodecContext, v: c_int);
  pub fn ffctx_set_me_pre_cmp(ctx: *mut AVCodecContext, v: c_int);
  pub fn ffctx_set_dia_size(ctx: *mut AVCodecContext, v: c_int);
  pub fn ffctx_set_last_predictor_count(ctx: *mut AVCodecContext, v: c_int);
  pub fn ffctx_set_pre_dia_size(ctx: *mut AVCodecContext, v: c_int);
  pub fn ffctx_set_me_subpel_quality(ctx: *mut AVCodecContext, v: c_int);
  pub fn ffctx_set_me_range(ctx: *mut AVCodecContext, v: c_int);
  pub fn ffctx_set_slice_flags(ctx: *mut AVCodecContext, v: c_int);
  pub fn ffctx_set_mb_decision(ctx: *mut AVCodecContext, v: c_int);
  pub fn ffctx_set_intra_matrix(ctx: *mut AVCodecContext, matrix: *const u16) -> c_int;
  pub fn ffctx_set_inter_matrix(ctx: *mut AVCodecContext, matrix: *const u16) -> c_int;

  // ========================================================================
  // AVCodecParameters Getters
  // ========================================================================

  pub fn ffpar_get_codec_type(par: *const AVCodecParameters) -> c_int;
  pub fn ffpar_get_codec_id(par: *const AVCodecParameters) -> c_int;
  pub fn ffpar_get_codec_tag(par: *const AVCodecParameters) -> u32;
  pub fn ffpar_get_extradata(par: *const AVCodecParameters) -> *const u8;
  pub fn ffpar_get_extradata_size(par: *const AVCodecParameters) -> c_int;
  pub fn ffpar_get_format(par: *const AVCodecParameters) -> c_int;
  pub fn ffpar_get_bit_rate(par: *const AVCodecParameters) -> i64;
  pub fn ffpar_get_bits_per_coded_sample(par: *const AVCodecParameters) -> c_int;
  pub fn ffpar_get_bits_per_raw_sample(par: *const AVCodecParameters) -> c_int;
  pub fn ffpar_get_profile(par: *const AVCodecParameters) -> c_int;
  pub fn ffpar_get_level(par: *const AVCodecParameters) -> c_int;
  pub fn ffpar_get_width(par: *const AVCodecParameters) -> c_int;
  pub fn ffpar_get_height(par: *const AVCodecParameters) -> c_int;
  pub fn ffpar_get_sample_aspect_ratio(
    par: *const AVCodecParameters,
    num: *mut c_int,
    den: *mut c_int,
  );
  pub fn ffpar_get_field_order(par: *const AVCodecParameters) -> c_int;
  pub fn ffpar_get_color_range(par: *const AVCodecParameters) -> c_int;
  pub fn ffpar_get_color_primaries(par: *const AVCodecParameters) -> c_int;
  pub fn ffpar_get_color_trc(par: *const AVCodecParameters) -> c_int;
  pub fn ffpar_get_color_space(par: *const AVCodecParameters) -> c_int;
  pub fn ffpar_get_chroma_location(par: *const AVCodecParameters) -> c_int;
  pub fn ffpar_get_video_delay(par: *const AVCodecParameters) -> c_int;
  pub fn ffpar_get_channel_layout(par: *const AVCodecParameters) -> u64;
  pub fn ffpar_get_channels(par: *const AVCodecParameters) -> c_int;
  pub fn ffpar_get_sample_rate(par: *const AVCodecParameters) -> c_int;
  pub fn ffpar_get_block_align(par: *const AVCodecParameters) -> c_int;
  pub fn ffpar_get_frame_size(par: *const AVCodecParameters) -> c_int;
  pub fn ffpar_get_initial_padding(par: *const AVCodecParameters) -> c_int;
  pub fn ffpar_get_trailing_padding(par: *const AVCodecParameters) -> c_int;
  pub fn ffpar_get_seek_preroll(par: *const AVCodecParameters) -> c_int;

  // ========================================================================
  // AVCodecParameters Setters
  // ========================================================================

  pub fn ffpar_set_codec_type(par: *mut AVCodecParameters, v: c_int);
  pub fn ffpar_set_codec_id(par: *mut AVCodecParameters, v: c_int);
  pub fn ffpar_set_extradata(par: *mut AVCodecParameters, data: *const u8, size: c_int) -> c_int;
  pub fn ffpar_set_format(par: *mut AVCodecParameters, v: c_int);
  pub fn ffpar_set_bit_rate(par: *mut AVCodecParameters, v: i64);
  pub fn ffpar_set_bits_per_coded_sample(par: *mut AVCodecParameters, v: c_int);
  pub fn ffpar_set_bits_per_raw_sample(par: *mut AVCodecParameters, v: c_int);
  pub fn ffpar_set_profile(par: *mut AVCodecParameters, v: c_int);
  pub fn ffpar_set_level(par: *mut AVCodecParameters, v: c_int);
  pub fn ffpar_set_width(par: *mut AVCodecParameters, v: c_int);
  pub fn ffpar_set_height(par: *mut AVCodecParameters, v: c_int);
  pub fn ffpar_set_sample_aspect_ratio(par: *mut AVCodecParameters, num: c_int, den: c_int);
  pub fn ffpar_set_field_order(par: *mut AVCodecParameters, v: c_int);
  pub fn ffpar_set_color_range(par: *mut AVCodecParameters, v: c_int);
  pub fn ffpar_set_color_primaries(par: *mut AVCodecParameters, v: c_int);
  pub fn ffpar_set_color_trc(par: *mut AVCodecParameters, v: c_int);
  pub fn ffpar_set_color_space(par: *mut AVCodecParameters, v: c_int);
  pub fn ffpar_set_chroma_location(par: *mut AVCodecParameters, v: c_int);
  pub fn ffpar_set_video_delay(par: *mut AVCodecParameters, v: c_int);
  pub fn ffpar_set_channel_layout(par: *mut AVCodecParameters, v: u64);
  pub fn ffpar_set_channels(par: *mut AVCodecParameters, v: c_int);
  pub fn ffpar_set_sample_rate(par: *mut AVCodecParameters, v: c_int);
  pub fn ffpar_set_block_align(par: *mut AVCodecParameters, v: c_int);
  pub fn ffpar_set_frame_size(par: *mut AVCodecParameters, v: c_int);
  pub fn ffpar_set_initial_padding(par: *mut AVCodecParameters, v: c_int);
  pub fn ffpar_set_trailing_padding(par: *mut AVCodecParameters, v: c_int);
  pub fn ffpar_set_seek_preroll(par: *mut AVCodecParameters, v: c_int);

  // ========================================================================
  // AVOption Accessors
  // ========================================================================

  pub fn ffopt_name(opt: *const AVOption) -> *const c_char;
  pub fn ffopt_type(opt: *const AVOption) -> c_int;
  pub fn ffopt_unit(opt: *const AVOption) -> *const c_char;
  pub fn ffopt_default_i64(opt: *const AVOption) -> i64;

  // ========================================================================
  // AVCodecDescriptor Accessors
  // ========================================================================

  pub fn ffdesc_name(desc: *const AVCodecDescriptor) -> *const c_char;
  pub fn ffdesc_id(desc: *const AVCodecDescriptor) -> c_int;
}
