//! Safe wrapper around FFmpeg AVCodecContext
//!
//! Owns the native context and its side allocations with RAII cleanup, and
//! implements the `NativeStore` seam over the C accessor library. The
//! direction (decode or encode) is fixed at construction and drives the
//! property gating upstream.

use crate::ffi::{
  accessors::*,
  avcodec::{
    avcodec_alloc_context3, avcodec_descriptor_get_by_name, avcodec_find_decoder,
    avcodec_find_decoder_by_name, avcodec_find_encoder, avcodec_find_encoder_by_name,
    avcodec_free_context,
  },
  avutil::{av_get_pix_fmt, av_get_pix_fmt_name},
  AVCodec, AVCodecContext, AV_FMT_NONE,
};
use crate::marshal::{FieldId, Mode, NativeStore};
use std::ffi::{CStr, CString};
use std::os::raw::c_int;
use std::ptr::NonNull;

use super::{CodecError, CodecResult};

/// Safe wrapper around AVCodecContext
pub struct CodecContext {
  ptr: NonNull<AVCodecContext>,
  mode: Mode,
}

// The context is confined to one thread at a time; no interior aliasing
unsafe impl Send for CodecContext {}

impl CodecContext {
  /// Create a decoding context for the named codec
  pub fn decoder(name: &str) -> CodecResult<Self> {
    let c_name = CString::new(name).map_err(|_| CodecError::InvalidName(name.to_string()))?;
    let mut codec = unsafe { avcodec_find_decoder_by_name(c_name.as_ptr()) };
    if codec.is_null() {
      codec = unsafe { find_by_descriptor(c_name.as_ptr(), avcodec_find_decoder) };
    }
    if codec.is_null() {
      return Err(CodecError::CodecNotFound(name.to_string()));
    }
    Self::from_codec(codec, Mode::Decode)
  }

  /// Create an encoding context for the named codec
  pub fn encoder(name: &str) -> CodecResult<Self> {
    let c_name = CString::new(name).map_err(|_| CodecError::InvalidName(name.to_string()))?;
    let mut codec = unsafe { avcodec_find_encoder_by_name(c_name.as_ptr()) };
    if codec.is_null() {
      codec = unsafe { find_by_descriptor(c_name.as_ptr(), avcodec_find_encoder) };
    }
    if codec.is_null() {
      return Err(CodecError::CodecNotFound(name.to_string()));
    }
    Self::from_codec(codec, Mode::Encode)
  }

  fn from_codec(codec: *const AVCodec, mode: Mode) -> CodecResult<Self> {
    let raw = unsafe { avcodec_alloc_context3(codec) };
    let ptr =
      NonNull::new(raw).ok_or(CodecError::AllocationFailed("avcodec_alloc_context3"))?;
    Ok(Self { ptr, mode })
  }

  pub fn mode(&self) -> Mode {
    self.mode
  }

  pub(crate) fn as_ptr(&self) -> *const AVCodecContext {
    self.ptr.as_ptr()
  }

  pub(crate) fn as_mut_ptr(&mut self) -> *mut AVCodecContext {
    self.ptr.as_ptr()
  }
}

/// Names like "h264" match the descriptor table even when the default
/// decoder/encoder registers under another name
unsafe fn find_by_descriptor(
  name: *const std::os::raw::c_char,
  find: unsafe extern "C" fn(c_int) -> *const AVCodec,
) -> *const AVCodec {
  let desc = unsafe { avcodec_descriptor_get_by_name(name) };
  if desc.is_null() {
    return std::ptr::null();
  }
  unsafe { find(ffdesc_id(desc)) }
}

impl Drop for CodecContext {
  fn drop(&mut self) {
    unsafe {
      // The slice offset array is ours; the context frees everything else
      ffctx_set_slice_offset(self.ptr.as_ptr(), std::ptr::null(), 0);
      let mut raw = self.ptr.as_ptr();
      avcodec_free_context(&mut raw);
    }
  }
}

fn cstr_owned(ptr: *const std::os::raw::c_char) -> Option<String> {
  if ptr.is_null() {
    None
  } else {
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
  }
}

impl NativeStore for CodecContext {
  fn get_i32(&self, id: FieldId) -> i32 {
    let p = self.as_ptr();
    unsafe {
      match id {
        FieldId::CodecId => ffctx_get_codec_id(p),
        FieldId::BitRateTolerance => ffctx_get_bit_rate_tolerance(p),
        FieldId::GlobalQuality => ffctx_get_global_quality(p),
        FieldId::CompressionLevel => ffctx_get_compression_level(p),
        FieldId::TicksPerFrame => ffctx_get_ticks_per_frame(p),
        FieldId::Delay => ffctx_get_delay(p),
        FieldId::Width => ffctx_get_width(p),
        FieldId::Height => ffctx_get_height(p),
        FieldId::CodedWidth => ffctx_get_coded_width(p),
        FieldId::CodedHeight => ffctx_get_coded_height(p),
        FieldId::GopSize => ffctx_get_gop_size(p),
        FieldId::PixFmt => ffctx_get_pix_fmt(p),
        FieldId::MaxBFrames => ffctx_get_max_b_frames(p),
        FieldId::HasBFrames => ffctx_get_has_b_frames(p),
        FieldId::MeCmp => ffctx_get_me_cmp(p),
        FieldId::MeSubCmp => ffctx_get_me_sub_cmp(p),
        FieldId::MbCmp => ffctx_get_mb_cmp(p),
        FieldId::IldctCmp => ffctx_get_ildct_cmp(p),
        FieldId::MePreCmp => ffctx_get_me_pre_cmp(p),
        FieldId::DiaSize => ffctx_get_dia_size(p),
        FieldId::LastPredictorCount => ffctx_get_last_predictor_count(p),
        FieldId::PreDiaSize => ffctx_get_pre_dia_size(p),
        FieldId::MeSubpelQuality => ffctx_get_me_subpel_quality(p),
        FieldId::MeRange => ffctx_get_me_range(p),
        FieldId::MbDecision => ffctx_get_mb_decision(p),
        _ => 0,
      }
    }
  }

  fn set_i32(&mut self, id: FieldId, v: i32) {
    let p = self.as_mut_ptr();
    unsafe {
      match id {
        FieldId::BitRateTolerance => ffctx_set_bit_rate_tolerance(p, v),
        FieldId::GlobalQuality => ffctx_set_global_quality(p, v),
        FieldId::CompressionLevel => ffctx_set_compression_level(p, v),
        FieldId::TicksPerFrame => ffctx_set_ticks_per_frame(p, v),
        FieldId::Width => ffctx_set_width(p, v),
        FieldId::Height => ffctx_set_height(p, v),
        FieldId::CodedWidth => ffctx_set_coded_width(p, v),
        FieldId::CodedHeight => ffctx_set_coded_height(p, v),
        FieldId::GopSize => ffctx_set_gop_size(p, v),
        FieldId::PixFmt => ffctx_set_pix_fmt(p, v),
        FieldId::MaxBFrames => ffctx_set_max_b_frames(p, v),
        FieldId::MeCmp => ffctx_set_me_cmp(p, v),
        FieldId::MeSubCmp => ffctx_set_me_sub_cmp(p, v),
        FieldId::MbCmp => ffctx_set_mb_cmp(p, v),
        FieldId::IldctCmp => ffctx_set_ildct_cmp(p, v),
        FieldId::MePreCmp => ffctx_set_me_pre_cmp(p, v),
        FieldId::DiaSize => ffctx_set_dia_size(p, v),
        FieldId::LastPredictorCount => ffctx_set_last_predictor_count(p, v),
        FieldId::PreDiaSize => ffctx_set_pre_dia_size(p, v),
        FieldId::MeSubpelQuality => ffctx_set_me_subpel_quality(p, v),
        FieldId::MeRange => ffctx_set_me_range(p, v),
        FieldId::MbDecision => ffctx_set_mb_decision(p, v),
        _ => {}
      }
    }
  }

  fn get_i64(&self, id: FieldId) -> i64 {
    match id {
      FieldId::BitRate => unsafe { ffctx_get_bit_rate(self.as_ptr()) },
      _ => 0,
    }
  }

  fn set_i64(&mut self, id: FieldId, v: i64) {
    if let FieldId::BitRate = id {
      unsafe { ffctx_set_bit_rate(self.as_mut_ptr(), v) }
    }
  }

  fn get_f64(&self, id: FieldId) -> f64 {
    let p = self.as_ptr();
    let v = unsafe {
      match id {
        FieldId::BQuantFactor => ffctx_get_b_quant_factor(p),
        FieldId::BQuantOffset => ffctx_get_b_quant_offset(p),
        FieldId::IQuantFactor => ffctx_get_i_quant_factor(p),
        FieldId::IQuantOffset => ffctx_get_i_quant_offset(p),
        FieldId::LumiMasking => ffctx_get_lumi_masking(p),
        FieldId::TemporalCplxMasking => ffctx_get_temporal_cplx_masking(p),
        FieldId::SpatialCplxMasking => ffctx_get_spatial_cplx_masking(p),
        FieldId::PMasking => ffctx_get_p_masking(p),
        FieldId::DarkMasking => ffctx_get_dark_masking(p),
        _ => 0.0,
      }
    };
    v as f64
  }

  fn set_f64(&mut self, id: FieldId, v: f64) {
    let p = self.as_mut_ptr();
    let v = v as f32;
    unsafe {
      match id {
        FieldId::BQuantFactor => ffctx_set_b_quant_factor(p, v),
        FieldId::BQuantOffset => ffctx_set_b_quant_offset(p, v),
        FieldId::IQuantFactor => ffctx_set_i_quant_factor(p, v),
        FieldId::IQuantOffset => ffctx_set_i_quant_offset(p, v),
        FieldId::LumiMasking => ffctx_set_lumi_masking(p, v),
        FieldId::TemporalCplxMasking => ffctx_set_temporal_cplx_masking(p, v),
        FieldId::SpatialCplxMasking => ffctx_set_spatial_cplx_masking(p, v),
        FieldId::PMasking => ffctx_set_p_masking(p, v),
        FieldId::DarkMasking => ffctx_set_dark_masking(p, v),
        _ => {}
      }
    }
  }

  fn get_u32(&self, id: FieldId) -> u32 {
    let p = self.as_ptr();
    unsafe {
      match id {
        FieldId::CodecTag => ffctx_get_codec_tag(p),
        FieldId::Flags => ffctx_get_flags(p) as u32,
        FieldId::Flags2 => ffctx_get_flags2(p) as u32,
        FieldId::SliceFlags => ffctx_get_slice_flags(p) as u32,
        _ => 0,
      }
    }
  }

  fn set_u32(&mut self, id: FieldId, v: u32) {
    let p = self.as_mut_ptr();
    unsafe {
      match id {
        FieldId::Flags => ffctx_set_flags(p, v as c_int),
        FieldId::Flags2 => ffctx_set_flags2(p, v as c_int),
        FieldId::SliceFlags => ffctx_set_slice_flags(p, v as c_int),
        _ => {}
      }
    }
  }

  fn get_rational(&self, id: FieldId) -> (i32, i32) {
    let p = self.as_ptr();
    let mut num = 0;
    let mut den = 0;
    unsafe {
      match id {
        FieldId::TimeBase => ffctx_get_time_base(p, &mut num, &mut den),
        FieldId::SampleAspectRatio => ffctx_get_sample_aspect_ratio(p, &mut num, &mut den),
        _ => {}
      }
    }
    (num, den)
  }

  fn set_rational(&mut self, id: FieldId, v: (i32, i32)) {
    let p = self.as_mut_ptr();
    unsafe {
      match id {
        FieldId::TimeBase => ffctx_set_time_base(p, v.0, v.1),
        FieldId::SampleAspectRatio => ffctx_set_sample_aspect_ratio(p, v.0, v.1),
        _ => {}
      }
    }
  }

  fn const_str(&self, id: FieldId) -> Option<String> {
    let p = self.as_ptr();
    match id {
      FieldId::Name => cstr_owned(unsafe { ffctx_get_codec_name(p) }),
      FieldId::LongName => cstr_owned(unsafe { ffctx_get_codec_long_name(p) }),
      _ => None,
    }
  }

  fn get_bytes(&self, id: FieldId) -> Option<Vec<u8>> {
    if id != FieldId::Extradata {
      return None;
    }
    unsafe {
      let data = ffctx_get_extradata(self.as_ptr());
      let size = ffctx_get_extradata_size(self.as_ptr());
      if data.is_null() || size < 0 {
        return None;
      }
      Some(std::slice::from_raw_parts(data, size as usize).to_vec())
    }
  }

  fn set_bytes(&mut self, id: FieldId, v: Option<&[u8]>) -> Result<(), i32> {
    if id != FieldId::Extradata {
      return Ok(());
    }
    let (data, size) = match v {
      Some(bytes) => (bytes.as_ptr(), bytes.len() as c_int),
      None => (std::ptr::null(), 0),
    };
    let ret = unsafe { ffctx_set_extradata(self.as_mut_ptr(), data, size) };
    if ret < 0 {
      Err(ret)
    } else {
      Ok(())
    }
  }

  fn get_matrix(&self, id: FieldId) -> Option<[u16; 64]> {
    let raw = unsafe {
      match id {
        FieldId::IntraMatrix => ffctx_get_intra_matrix(self.as_ptr()),
        FieldId::InterMatrix => ffctx_get_inter_matrix(self.as_ptr()),
        _ => return None,
      }
    };
    if raw.is_null() {
      return None;
    }
    let mut out = [0u16; 64];
    out.copy_from_slice(unsafe { std::slice::from_raw_parts(raw, 64) });
    Some(out)
  }

  fn set_matrix(&mut self, id: FieldId, v: Option<&[u16; 64]>) -> Result<(), i32> {
    let matrix = v.map_or(std::ptr::null(), |m| m.as_ptr());
    let ret = unsafe {
      match id {
        FieldId::IntraMatrix => ffctx_set_intra_matrix(self.as_mut_ptr(), matrix),
        FieldId::InterMatrix => ffctx_set_inter_matrix(self.as_mut_ptr(), matrix),
        _ => 0,
      }
    };
    if ret < 0 {
      Err(ret)
    } else {
      Ok(())
    }
  }

  fn get_slice_offsets(&self) -> Option<Vec<i32>> {
    unsafe {
      let count = ffctx_get_slice_count(self.as_ptr());
      let data = ffctx_get_slice_offset(self.as_ptr());
      if data.is_null() || count <= 0 {
        return None;
      }
      Some(std::slice::from_raw_parts(data, count as usize).to_vec())
    }
  }

  fn set_slice_offsets(&mut self, v: Option<&[i32]>) -> Result<(), i32> {
    let (data, count) = match v {
      Some(offsets) => (offsets.as_ptr(), offsets.len() as c_int),
      None => (std::ptr::null(), 0),
    };
    let ret = unsafe { ffctx_set_slice_offset(self.as_mut_ptr(), data, count) };
    if ret < 0 {
      Err(ret)
    } else {
      Ok(())
    }
  }

  fn pix_fmt_name(&self, value: i32) -> Option<String> {
    cstr_owned(unsafe { av_get_pix_fmt_name(value) })
  }

  fn pix_fmt_value(&self, name: &str) -> Option<i32> {
    let c_name = CString::new(name).ok()?;
    let fmt = unsafe { av_get_pix_fmt(c_name.as_ptr()) };
    if fmt == AV_FMT_NONE {
      None
    } else {
      Some(fmt)
    }
  }
}
