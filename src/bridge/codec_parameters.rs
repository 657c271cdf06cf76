//! CodecParameters JavaScript class
//!
//! Property surface over AVCodecParameters plus the `codecParameters`
//! factory, which shallow-copies an optional options object through the
//! individual setters.

use napi::bindgen_prelude::*;
use napi_derive::napi;

use crate::codec;
use crate::marshal::{self, fields::PARAMETER_FIELDS, parameter_field, Mode, Value};

use super::convert::{bridge_error, codec_error, HostValue};

#[napi(js_name = "CodecParameters")]
pub struct JsCodecParameters {
  inner: codec::CodecParameters,
}

/// Create fresh codec parameters, optionally seeded from a plain object.
/// Own-enumerable keys are applied through the individual setters in order;
/// unrecognized keys are skipped.
#[napi]
pub fn codec_parameters(options: Option<HostValue>) -> Result<JsCodecParameters> {
  let inner = codec::CodecParameters::new().map_err(codec_error)?;
  let mut params = JsCodecParameters { inner };

  match options.map(|h| h.0) {
    None | Some(Value::Null) => {}
    Some(Value::Map(entries)) => {
      for (key, value) in entries {
        if parameter_field(&key).is_none() {
          tracing::warn!(key = %key, "unrecognized codec parameter, skipped");
          continue;
        }
        params.set(&key, HostValue(value))?;
      }
    }
    Some(_) => {
      return Err(Error::new(
        Status::InvalidArg,
        "An object of codec parameters is required to construct codec parameters.",
      ));
    }
  }
  Ok(params)
}

impl JsCodecParameters {
  // Parameters carry no direction; gating never applies to this table
  const MODE: Mode = Mode::Decode;

  fn get(&self, name: &str) -> Result<HostValue> {
    let spec = parameter_field(name)
      .ok_or_else(|| Error::new(Status::InvalidArg, format!("Unknown property name '{name}'.")))?;
    marshal::get_field(&self.inner, Self::MODE, spec)
      .map(HostValue)
      .map_err(bridge_error)
  }

  fn set(&mut self, name: &str, value: HostValue) -> Result<()> {
    let spec = parameter_field(name)
      .ok_or_else(|| Error::new(Status::InvalidArg, format!("Unknown property name '{name}'.")))?;
    marshal::set_field(&mut self.inner, Self::MODE, spec, &value.0).map_err(bridge_error)
  }
}

#[napi]
impl JsCodecParameters {
  #[napi(getter)]
  pub fn codec_type(&self) -> Result<HostValue> {
    self.get("codec_type")
  }

  #[napi(setter)]
  pub fn set_codec_type(&mut self, value: HostValue) -> Result<()> {
    self.set("codec_type", value)
  }

  #[napi(getter)]
  pub fn codec_id(&self) -> Result<HostValue> {
    self.get("codec_id")
  }

  #[napi(setter)]
  pub fn set_codec_id(&mut self, value: HostValue) -> Result<()> {
    self.set("codec_id", value)
  }

  #[napi(getter)]
  pub fn name(&self) -> Result<HostValue> {
    self.get("name")
  }

  #[napi(setter)]
  pub fn set_name(&mut self, value: HostValue) -> Result<()> {
    self.set("name", value)
  }

  #[napi(getter)]
  pub fn codec_tag(&self) -> Result<HostValue> {
    self.get("codec_tag")
  }

  #[napi(setter)]
  pub fn set_codec_tag(&mut self, value: HostValue) -> Result<()> {
    self.set("codec_tag", value)
  }

  #[napi(getter)]
  pub fn extradata(&self) -> Result<HostValue> {
    self.get("extradata")
  }

  #[napi(setter)]
  pub fn set_extradata(&mut self, value: HostValue) -> Result<()> {
    self.set("extradata", value)
  }

  #[napi(getter)]
  pub fn format(&self) -> Result<HostValue> {
    self.get("format")
  }

  #[napi(setter)]
  pub fn set_format(&mut self, value: HostValue) -> Result<()> {
    self.set("format", value)
  }

  #[napi(getter)]
  pub fn bit_rate(&self) -> Result<HostValue> {
    self.get("bit_rate")
  }

  #[napi(setter)]
  pub fn set_bit_rate(&mut self, value: HostValue) -> Result<()> {
    self.set("bit_rate", value)
  }

  #[napi(getter)]
  pub fn bits_per_coded_sample(&self) -> Result<HostValue> {
    self.get("bits_per_coded_sample")
  }

  #[napi(setter)]
  pub fn set_bits_per_coded_sample(&mut self, value: HostValue) -> Result<()> {
    self.set("bits_per_coded_sample", value)
  }

  #[napi(getter)]
  pub fn bits_per_raw_sample(&self) -> Result<HostValue> {
    self.get("bits_per_raw_sample")
  }

  #[napi(setter)]
  pub fn set_bits_per_raw_sample(&mut self, value: HostValue) -> Result<()> {
    self.set("bits_per_raw_sample", value)
  }

  #[napi(getter)]
  pub fn profile(&self) -> Result<HostValue> {
    self.get("profile")
  }

  #[napi(setter)]
  pub fn set_profile(&mut self, value: HostValue) -> Result<()> {
    self.set("profile", value)
  }

  #[napi(getter)]
  pub fn level(&self) -> Result<HostValue> {
    self.get("level")
  }

  #[napi(setter)]
  pub fn set_level(&mut self, value: HostValue) -> Result<()> {
    self.set("level", value)
  }

  #[napi(getter)]
  pub fn width(&self) -> Result<HostValue> {
    self.get("width")
  }

  #[napi(setter)]
  pub fn set_width(&mut self, value: HostValue) -> Result<()> {
    self.set("width", value)
  }

  #[napi(getter)]
  pub fn height(&self) -> Result<HostValue> {
    self.get("height")
  }

  #[napi(setter)]
  pub fn set_height(&mut self, value: HostValue) -> Result<()> {
    self.set("height", value)
  }

  #[napi(getter)]
  pub fn sample_aspect_ratio(&self) -> Result<HostValue> {
    self.get("sample_aspect_ratio")
  }

  #[napi(setter)]
  pub fn set_sample_aspect_ratio(&mut self, value: HostValue) -> Result<()> {
    self.set("sample_aspect_ratio", value)
  }

  #[napi(getter)]
  pub fn field_order(&self) -> Result<HostValue> {
    self.get("field_order")
  }

  #[napi(setter)]
  pub fn set_field_order(&mut self, value: HostValue) -> Result<()> {
    self.set("field_order", value)
  }

  #[napi(getter)]
  pub fn color_range(&self) -> Result<HostValue> {
    self.get("color_range")
  }

  #[napi(setter)]
  pub fn set_color_range(&mut self, value: HostValue) -> Result<()> {
    self.set("color_range", value)
  }

  #[napi(getter)]
  pub fn color_primaries(&self) -> Result<HostValue> {
    self.get("color_primaries")
  }

  #[napi(setter)]
  pub fn set_color_primaries(&mut self, value: HostValue) -> Result<()> {
    self.set("color_primaries", value)
  }

  #[napi(getter)]
  pub fn color_trc(&self) -> Result<HostValue> {
    self.get("color_trc")
  }

  #[napi(setter)]
  pub fn set_color_trc(&mut self, value: HostValue) -> Result<()> {
    self.set("color_trc", value)
  }

  #[napi(getter)]
  pub fn color_space(&self) -> Result<HostValue> {
    self.get("color_space")
  }

  #[napi(setter)]
  pub fn set_color_space(&mut self, value: HostValue) -> Result<()> {
    self.set("color_space", value)
  }

  #[napi(getter)]
  pub fn chroma_location(&self) -> Result<HostValue> {
    self.get("chroma_location")
  }

  #[napi(setter)]
  pub fn set_chroma_location(&mut self, value: HostValue) -> Result<()> {
    self.set("chroma_location", value)
  }

  #[napi(getter)]
  pub fn video_delay(&self) -> Result<HostValue> {
    self.get("video_delay")
  }

  #[napi(setter)]
  pub fn set_video_delay(&mut self, value: HostValue) -> Result<()> {
    self.set("video_delay", value)
  }

  #[napi(getter)]
  pub fn channel_layout(&self) -> Result<HostValue> {
    self.get("channel_layout")
  }

  #[napi(setter)]
  pub fn set_channel_layout(&mut self, value: HostValue) -> Result<()> {
    self.set("channel_layout", value)
  }

  #[napi(getter)]
  pub fn channels(&self) -> Result<HostValue> {
    self.get("channels")
  }

  #[napi(setter)]
  pub fn set_channels(&mut self, value: HostValue) -> Result<()> {
    self.set("channels", value)
  }

  #[napi(getter)]
  pub fn sample_rate(&self) -> Result<HostValue> {
    self.get("sample_rate")
  }

  #[napi(setter)]
  pub fn set_sample_rate(&mut self, value: HostValue) -> Result<()> {
    self.set("sample_rate", value)
  }

  #[napi(getter)]
  pub fn block_align(&self) -> Result<HostValue> {
    self.get("block_align")
  }

  #[napi(setter)]
  pub fn set_block_align(&mut self, value: HostValue) -> Result<()> {
    self.set("block_align", value)
  }

  #[napi(getter)]
  pub fn frame_size(&self) -> Result<HostValue> {
    self.get("frame_size")
  }

  #[napi(setter)]
  pub fn set_frame_size(&mut self, value: HostValue) -> Result<()> {
    self.set("frame_size", value)
  }

  #[napi(getter)]
  pub fn initial_padding(&self) -> Result<HostValue> {
    self.get("initial_padding")
  }

  #[napi(setter)]
  pub fn set_initial_padding(&mut self, value: HostValue) -> Result<()> {
    self.set("initial_padding", value)
  }

  #[napi(getter)]
  pub fn trailing_padding(&self) -> Result<HostValue> {
    self.get("trailing_padding")
  }

  #[napi(setter)]
  pub fn set_trailing_padding(&mut self, value: HostValue) -> Result<()> {
    self.set("trailing_padding", value)
  }

  #[napi(getter)]
  pub fn seek_preroll(&self) -> Result<HostValue> {
    self.get("seek_preroll")
  }

  #[napi(setter)]
  pub fn set_seek_preroll(&mut self, value: HostValue) -> Result<()> {
    self.set("seek_preroll", value)
  }

  /// Plain-object dump of every property
  #[napi(js_name = "toObject")]
  pub fn to_object(&self) -> Result<HostValue> {
    let entries = marshal::snapshot(&self.inner, Self::MODE, PARAMETER_FIELDS);
    Ok(HostValue(Value::Map(entries)))
  }
}
