//! Safe wrapper around FFmpeg AVCodecParameters

use crate::ffi::{
  accessors::*,
  avcodec::{
    avcodec_descriptor_get, avcodec_descriptor_get_by_name, avcodec_parameters_alloc,
    avcodec_parameters_free,
  },
  avutil::{
    av_get_channel_layout, av_get_channel_layout_string, av_get_pix_fmt, av_get_pix_fmt_name,
    av_get_sample_fmt, av_get_sample_fmt_name,
  },
  AVCodecParameters, AV_FMT_NONE,
};
use crate::marshal::{FieldId, NativeStore};
use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};
use std::ptr::NonNull;

use super::{CodecError, CodecResult};

/// Safe wrapper around AVCodecParameters
pub struct CodecParameters {
  ptr: NonNull<AVCodecParameters>,
}

unsafe impl Send for CodecParameters {}

impl CodecParameters {
  /// Allocate fresh parameters set to FFmpeg defaults
  pub fn new() -> CodecResult<Self> {
    let raw = unsafe { avcodec_parameters_alloc() };
    let ptr = NonNull::new(raw).ok_or(CodecError::AllocationFailed("avcodec_parameters_alloc"))?;
    Ok(Self { ptr })
  }

  pub(crate) fn as_ptr(&self) -> *const AVCodecParameters {
    self.ptr.as_ptr()
  }

  pub(crate) fn as_mut_ptr(&mut self) -> *mut AVCodecParameters {
    self.ptr.as_ptr()
  }
}

impl Drop for CodecParameters {
  fn drop(&mut self) {
    unsafe {
      // Frees the contained extradata as well
      let mut raw = self.ptr.as_ptr();
      avcodec_parameters_free(&mut raw);
    }
  }
}

fn cstr_owned(ptr: *const c_char) -> Option<String> {
  if ptr.is_null() {
    None
  } else {
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
  }
}

impl NativeStore for CodecParameters {
  fn get_i32(&self, id: FieldId) -> i32 {
    let p = self.as_ptr();
    unsafe {
      match id {
        FieldId::ParCodecType => ffpar_get_codec_type(p),
        FieldId::ParCodecId | FieldId::ParName => ffpar_get_codec_id(p),
        FieldId::ParFormat => ffpar_get_format(p),
        FieldId::ParBitsPerCodedSample => ffpar_get_bits_per_coded_sample(p),
        FieldId::ParBitsPerRawSample => ffpar_get_bits_per_raw_sample(p),
        FieldId::ParProfile => ffpar_get_profile(p),
        FieldId::ParLevel => ffpar_get_level(p),
        FieldId::ParWidth => ffpar_get_width(p),
        FieldId::ParHeight => ffpar_get_height(p),
        FieldId::ParFieldOrder => ffpar_get_field_order(p),
        FieldId::ParColorRange => ffpar_get_color_range(p),
        FieldId::ParColorPrimaries => ffpar_get_color_primaries(p),
        FieldId::ParColorTrc => ffpar_get_color_trc(p),
        FieldId::ParColorSpace => ffpar_get_color_space(p),
        FieldId::ParChromaLocation => ffpar_get_chroma_location(p),
        FieldId::ParVideoDelay => ffpar_get_video_delay(p),
        FieldId::ParChannels => ffpar_get_channels(p),
        FieldId::ParSampleRate => ffpar_get_sample_rate(p),
        FieldId::ParBlockAlign => ffpar_get_block_align(p),
        FieldId::ParFrameSize => ffpar_get_frame_size(p),
        FieldId::ParInitialPadding => ffpar_get_initial_padding(p),
        FieldId::ParTrailingPadding => ffpar_get_trailing_padding(p),
        FieldId::ParSeekPreroll => ffpar_get_seek_preroll(p),
        _ => 0,
      }
    }
  }

  fn set_i32(&mut self, id: FieldId, v: i32) {
    let p = self.as_mut_ptr();
    unsafe {
      match id {
        FieldId::ParCodecType => ffpar_set_codec_type(p, v),
        FieldId::ParCodecId | FieldId::ParName => ffpar_set_codec_id(p, v),
        FieldId::ParFormat => ffpar_set_format(p, v),
        FieldId::ParBitsPerCodedSample => ffpar_set_bits_per_coded_sample(p, v),
        FieldId::ParBitsPerRawSample => ffpar_set_bits_per_raw_sample(p, v),
        FieldId::ParProfile => ffpar_set_profile(p, v),
        FieldId::ParLevel => ffpar_set_level(p, v),
        FieldId::ParWidth => ffpar_set_width(p, v),
        FieldId::ParHeight => ffpar_set_height(p, v),
        FieldId::ParFieldOrder => ffpar_set_field_order(p, v),
        FieldId::ParColorRange => ffpar_set_color_range(p, v),
        FieldId::ParColorPrimaries => ffpar_set_color_primaries(p, v),
        FieldId::ParColorTrc => ffpar_set_color_trc(p, v),
        FieldId::ParColorSpace => ffpar_set_color_space(p, v),
        FieldId::ParChromaLocation => ffpar_set_chroma_location(p, v),
        FieldId::ParVideoDelay => ffpar_set_video_delay(p, v),
        FieldId::ParChannels => ffpar_set_channels(p, v),
        FieldId::ParSampleRate => ffpar_set_sample_rate(p, v),
        FieldId::ParBlockAlign => ffpar_set_block_align(p, v),
        FieldId::ParFrameSize => ffpar_set_frame_size(p, v),
        FieldId::ParInitialPadding => ffpar_set_initial_padding(p, v),
        FieldId::ParTrailingPadding => ffpar_set_trailing_padding(p, v),
        FieldId::ParSeekPreroll => ffpar_set_seek_preroll(p, v),
        _ => {}
      }
    }
  }

  fn get_i64(&self, id: FieldId) -> i64 {
    match id {
      FieldId::ParBitRate => unsafe { ffpar_get_bit_rate(self.as_ptr()) },
      _ => 0,
    }
  }

  fn set_i64(&mut self, id: FieldId, v: i64) {
    if let FieldId::ParBitRate = id {
      unsafe { ffpar_set_bit_rate(self.as_mut_ptr(), v) }
    }
  }

  fn get_f64(&self, _id: FieldId) -> f64 {
    0.0
  }

  fn set_f64(&mut self, _id: FieldId, _v: f64) {}

  fn get_u32(&self, id: FieldId) -> u32 {
    match id {
      FieldId::ParCodecTag => unsafe { ffpar_get_codec_tag(self.as_ptr()) },
      _ => 0,
    }
  }

  fn set_u32(&mut self, _id: FieldId, _v: u32) {}

  fn get_rational(&self, id: FieldId) -> (i32, i32) {
    let mut num = 0;
    let mut den = 0;
    if let FieldId::ParSampleAspectRatio = id {
      unsafe { ffpar_get_sample_aspect_ratio(self.as_ptr(), &mut num, &mut den) }
    }
    (num, den)
  }

  fn set_rational(&mut self, id: FieldId, v: (i32, i32)) {
    if let FieldId::ParSampleAspectRatio = id {
      unsafe { ffpar_set_sample_aspect_ratio(self.as_mut_ptr(), v.0, v.1) }
    }
  }

  fn get_bytes(&self, id: FieldId) -> Option<Vec<u8>> {
    if id != FieldId::ParExtradata {
      return None;
    }
    unsafe {
      let data = ffpar_get_extradata(self.as_ptr());
      let size = ffpar_get_extradata_size(self.as_ptr());
      if data.is_null() || size < 0 {
        return None;
      }
      Some(std::slice::from_raw_parts(data, size as usize).to_vec())
    }
  }

  fn set_bytes(&mut self, id: FieldId, v: Option<&[u8]>) -> Result<(), i32> {
    if id != FieldId::ParExtradata {
      return Ok(());
    }
    let (data, size) = match v {
      Some(bytes) => (bytes.as_ptr(), bytes.len() as c_int),
      None => (std::ptr::null(), 0),
    };
    let ret = unsafe { ffpar_set_extradata(self.as_mut_ptr(), data, size) };
    if ret < 0 {
      Err(ret)
    } else {
      Ok(())
    }
  }

  fn channel_layout_name(&self) -> String {
    let mut buf = [0 as c_char; 64];
    unsafe {
      av_get_channel_layout_string(
        buf.as_mut_ptr(),
        buf.len() as c_int,
        ffpar_get_channels(self.as_ptr()),
        ffpar_get_channel_layout(self.as_ptr()),
      );
      CStr::from_ptr(buf.as_ptr()).to_string_lossy().into_owned()
    }
  }

  fn set_channel_layout_by_name(&mut self, name: &str) {
    let Ok(c_name) = CString::new(name) else {
      return;
    };
    // Unrecognized names resolve to 0, matching the library behavior
    let layout = unsafe { av_get_channel_layout(c_name.as_ptr()) };
    unsafe { ffpar_set_channel_layout(self.as_mut_ptr(), layout) };
  }

  fn codec_descriptor_name(&self, codec_id: i32) -> Option<String> {
    unsafe {
      let desc = avcodec_descriptor_get(codec_id);
      if desc.is_null() {
        return None;
      }
      cstr_owned(ffdesc_name(desc))
    }
  }

  fn codec_descriptor_id(&self, name: &str) -> Option<i32> {
    let c_name = CString::new(name).ok()?;
    unsafe {
      let desc = avcodec_descriptor_get_by_name(c_name.as_ptr());
      if desc.is_null() {
        None
      } else {
        Some(ffdesc_id(desc))
      }
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

  fn sample_fmt_name(&self, value: i32) -> Option<String> {
    cstr_owned(unsafe { av_get_sample_fmt_name(value) })
  }

  fn sample_fmt_value(&self, name: &str) -> Option<i32> {
    let c_name = CString::new(name).ok()?;
    let fmt = unsafe { av_get_sample_fmt(c_name.as_ptr()) };
    if fmt == AV_FMT_NONE {
      None
    } else {
      Some(fmt)
    }
  }
}
