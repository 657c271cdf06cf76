//! CodecContext JavaScript class
//!
//! One getter/setter pair per exposed property, all routed through the field
//! engine so gating and validation behave identically everywhere. The
//! direction is fixed by the factory used to create the object.

use napi::bindgen_prelude::*;
use napi_derive::napi;

use crate::codec;
use crate::marshal::{self, context_field, fields::CONTEXT_FIELDS, Mode, Value};

use super::convert::{bridge_error, codec_error, HostValue};

#[napi(js_name = "CodecContext")]
pub struct JsCodecContext {
  inner: codec::CodecContext,
}

/// Create a decoding context for the named codec
#[napi]
pub fn create_decoder(name: String) -> Result<JsCodecContext> {
  let inner = codec::CodecContext::decoder(&name).map_err(codec_error)?;
  Ok(JsCodecContext { inner })
}

/// Create an encoding context for the named codec
#[napi]
pub fn create_encoder(name: String) -> Result<JsCodecContext> {
  let inner = codec::CodecContext::encoder(&name).map_err(codec_error)?;
  Ok(JsCodecContext { inner })
}

impl JsCodecContext {
  fn get(&self, name: &str) -> Result<HostValue> {
    let spec = context_field(name)
      .ok_or_else(|| Error::new(Status::InvalidArg, format!("Unknown property name '{name}'.")))?;
    marshal::get_field(&self.inner, self.inner.mode(), spec)
      .map(HostValue)
      .map_err(bridge_error)
  }

  fn set(&mut self, name: &str, value: HostValue) -> Result<()> {
    let spec = context_field(name)
      .ok_or_else(|| Error::new(Status::InvalidArg, format!("Unknown property name '{name}'.")))?;
    let mode = self.inner.mode();
    marshal::set_field(&mut self.inner, mode, spec, &value.0).map_err(bridge_error)
  }
}

#[napi]
impl JsCodecContext {
  /// "decoder" or "encoder"
  #[napi(getter, js_name = "type")]
  pub fn kind(&self) -> &'static str {
    match self.inner.mode() {
      Mode::Decode => "decoder",
      Mode::Encode => "encoder",
    }
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
  pub fn long_name(&self) -> Result<HostValue> {
    self.get("long_name")
  }

  #[napi(setter)]
  pub fn set_long_name(&mut self, value: HostValue) -> Result<()> {
    self.set("long_name", value)
  }

  #[napi(getter)]
  pub fn codec_tag(&self) -> Result<HostValue> {
    self.get("codec_tag")
  }

  #[napi(setter)]
  pub fn set_codec_tag(&mut self, value: HostValue) -> Result<()> {
    self.set("codec_tag", value)
  }

  /// Codec-specific private options, `null` when the codec has none
  #[napi(getter)]
  pub fn priv_data(&self) -> Result<HostValue> {
    Ok(HostValue(match self.inner.priv_options() {
      Some(entries) => Value::Map(entries),
      None => Value::Null,
    }))
  }

  #[napi(setter)]
  pub fn set_priv_data(&mut self, value: HostValue) -> Result<()> {
    match value.0 {
      // Clearing is accepted and ignored; options keep their current values
      Value::Null => Ok(()),
      Value::Map(entries) => {
        self.inner.set_priv_options(&entries);
        Ok(())
      }
      _ => Err(Error::new(
        Status::InvalidArg,
        "An object of codec-specific properties is required to set the priv_data property.",
      )),
    }
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
  pub fn bit_rate_tolerance(&self) -> Result<HostValue> {
    self.get("bit_rate_tolerance")
  }

  #[napi(setter)]
  pub fn set_bit_rate_tolerance(&mut self, value: HostValue) -> Result<()> {
    self.set("bit_rate_tolerance", value)
  }

  #[napi(getter)]
  pub fn global_quality(&self) -> Result<HostValue> {
    self.get("global_quality")
  }

  #[napi(setter)]
  pub fn set_global_quality(&mut self, value: HostValue) -> Result<()> {
    self.set("global_quality", value)
  }

  #[napi(getter)]
  pub fn compression_level(&self) -> Result<HostValue> {
    self.get("compression_level")
  }

  #[napi(setter)]
  pub fn set_compression_level(&mut self, value: HostValue) -> Result<()> {
    self.set("compression_level", value)
  }

  #[napi(getter)]
  pub fn flags(&self) -> Result<HostValue> {
    self.get("flags")
  }

  #[napi(setter)]
  pub fn set_flags(&mut self, value: HostValue) -> Result<()> {
    self.set("flags", value)
  }

  #[napi(getter)]
  pub fn flags2(&self) -> Result<HostValue> {
    self.get("flags2")
  }

  #[napi(setter)]
  pub fn set_flags2(&mut self, value: HostValue) -> Result<()> {
    self.set("flags2", value)
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
  pub fn time_base(&self) -> Result<HostValue> {
    self.get("time_base")
  }

  #[napi(setter)]
  pub fn set_time_base(&mut self, value: HostValue) -> Result<()> {
    self.set("time_base", value)
  }

  #[napi(getter)]
  pub fn ticks_per_frame(&self) -> Result<HostValue> {
    self.get("ticks_per_frame")
  }

  #[napi(setter)]
  pub fn set_ticks_per_frame(&mut self, value: HostValue) -> Result<()> {
    self.set("ticks_per_frame", value)
  }

  #[napi(getter)]
  pub fn delay(&self) -> Result<HostValue> {
    self.get("delay")
  }

  #[napi(setter)]
  pub fn set_delay(&mut self, value: HostValue) -> Result<()> {
    self.set("delay", value)
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
  pub fn coded_width(&self) -> Result<HostValue> {
    self.get("coded_width")
  }

  #[napi(setter)]
  pub fn set_coded_width(&mut self, value: HostValue) -> Result<()> {
    self.set("coded_width", value)
  }

  #[napi(getter)]
  pub fn coded_height(&self) -> Result<HostValue> {
    self.get("coded_height")
  }

  #[napi(setter)]
  pub fn set_coded_height(&mut self, value: HostValue) -> Result<()> {
    self.set("coded_height", value)
  }

  #[napi(getter)]
  pub fn gop_size(&self) -> Result<HostValue> {
    self.get("gop_size")
  }

  #[napi(setter)]
  pub fn set_gop_size(&mut self, value: HostValue) -> Result<()> {
    self.set("gop_size", value)
  }

  #[napi(getter)]
  pub fn pix_fmt(&self) -> Result<HostValue> {
    self.get("pix_fmt")
  }

  #[napi(setter)]
  pub fn set_pix_fmt(&mut self, value: HostValue) -> Result<()> {
    self.set("pix_fmt", value)
  }

  #[napi(getter)]
  pub fn max_b_frames(&self) -> Result<HostValue> {
    self.get("max_b_frames")
  }

  #[napi(setter)]
  pub fn set_max_b_frames(&mut self, value: HostValue) -> Result<()> {
    self.set("max_b_frames", value)
  }

  #[napi(getter)]
  pub fn b_quant_factor(&self) -> Result<HostValue> {
    self.get("b_quant_factor")
  }

  #[napi(setter)]
  pub fn set_b_quant_factor(&mut self, value: HostValue) -> Result<()> {
    self.set("b_quant_factor", value)
  }

  #[napi(getter)]
  pub fn b_quant_offset(&self) -> Result<HostValue> {
    self.get("b_quant_offset")
  }

  #[napi(setter)]
  pub fn set_b_quant_offset(&mut self, value: HostValue) -> Result<()> {
    self.set("b_quant_offset", value)
  }

  #[napi(getter)]
  pub fn i_quant_factor(&self) -> Result<HostValue> {
    self.get("i_quant_factor")
  }

  #[napi(setter)]
  pub fn set_i_quant_factor(&mut self, value: HostValue) -> Result<()> {
    self.set("i_quant_factor", value)
  }

  #[napi(getter)]
  pub fn i_quant_offset(&self) -> Result<HostValue> {
    self.get("i_quant_offset")
  }

  #[napi(setter)]
  pub fn set_i_quant_offset(&mut self, value: HostValue) -> Result<()> {
    self.set("i_quant_offset", value)
  }

  #[napi(getter)]
  pub fn lumi_masking(&self) -> Result<HostValue> {
    self.get("lumi_masking")
  }

  #[napi(setter)]
  pub fn set_lumi_masking(&mut self, value: HostValue) -> Result<()> {
    self.set("lumi_masking", value)
  }

  #[napi(getter)]
  pub fn temporal_cplx_masking(&self) -> Result<HostValue> {
    self.get("temporal_cplx_masking")
  }

  #[napi(setter)]
  pub fn set_temporal_cplx_masking(&mut self, value: HostValue) -> Result<()> {
    self.set("temporal_cplx_masking", value)
  }

  #[napi(getter)]
  pub fn spatial_cplx_masking(&self) -> Result<HostValue> {
    self.get("spatial_cplx_masking")
  }

  #[napi(setter)]
  pub fn set_spatial_cplx_masking(&mut self, value: HostValue) -> Result<()> {
    self.set("spatial_cplx_masking", value)
  }

  #[napi(getter)]
  pub fn p_masking(&self) -> Result<HostValue> {
    self.get("p_masking")
  }

  #[napi(setter)]
  pub fn set_p_masking(&mut self, value: HostValue) -> Result<()> {
    self.set("p_masking", value)
  }

  #[napi(getter)]
  pub fn dark_masking(&self) -> Result<HostValue> {
    self.get("dark_masking")
  }

  #[napi(setter)]
  pub fn set_dark_masking(&mut self, value: HostValue) -> Result<()> {
    self.set("dark_masking", value)
  }

  #[napi(getter)]
  pub fn has_b_frames(&self) -> Result<HostValue> {
    self.get("has_b_frames")
  }

  #[napi(setter)]
  pub fn set_has_b_frames(&mut self, value: HostValue) -> Result<()> {
    self.set("has_b_frames", value)
  }

  #[napi(getter)]
  pub fn slice_offset(&self) -> Result<HostValue> {
    self.get("slice_offset")
  }

  #[napi(setter)]
  pub fn set_slice_offset(&mut self, value: HostValue) -> Result<()> {
    self.set("slice_offset", value)
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
  pub fn me_cmp(&self) -> Result<HostValue> {
    self.get("me_cmp")
  }

  #[napi(setter)]
  pub fn set_me_cmp(&mut self, value: HostValue) -> Result<()> {
    self.set("me_cmp", value)
  }

  #[napi(getter)]
  pub fn me_sub_cmp(&self) -> Result<HostValue> {
    self.get("me_sub_cmp")
  }

  #[napi(setter)]
  pub fn set_me_sub_cmp(&mut self, value: HostValue) -> Result<()> {
    self.set("me_sub_cmp", value)
  }

  #[napi(getter)]
  pub fn mb_cmp(&self) -> Result<HostValue> {
    self.get("mb_cmp")
  }

  #[napi(setter)]
  pub fn set_mb_cmp(&mut self, value: HostValue) -> Result<()> {
    self.set("mb_cmp", value)
  }

  #[napi(getter)]
  pub fn ildct_cmp(&self) -> Result<HostValue> {
    self.get("ildct_cmp")
  }

  #[napi(setter)]
  pub fn set_ildct_cmp(&mut self, value: HostValue) -> Result<()> {
    self.set("ildct_cmp", value)
  }

  #[napi(getter)]
  pub fn me_pre_cmp(&self) -> Result<HostValue> {
    self.get("me_pre_cmp")
  }

  #[napi(setter)]
  pub fn set_me_pre_cmp(&mut self, value: HostValue) -> Result<()> {
    self.set("me_pre_cmp", value)
  }

  #[napi(getter)]
  pub fn dia_size(&self) -> Result<HostValue> {
    self.get("dia_size")
  }

  #[napi(setter)]
  pub fn set_dia_size(&mut self, value: HostValue) -> Result<()> {
    self.set("dia_size", value)
  }

  #[napi(getter)]
  pub fn last_predictor_count(&self) -> Result<HostValue> {
    self.get("last_predictor_count")
  }

  #[napi(setter)]
  pub fn set_last_predictor_count(&mut self, value: HostValue) -> Result<()> {
    self.set("last_predictor_count", value)
  }

  #[napi(getter)]
  pub fn pre_dia_size(&self) -> Result<HostValue> {
    self.get("pre_dia_size")
  }

  #[napi(setter)]
  pub fn set_pre_dia_size(&mut self, value: HostValue) -> Result<()> {
    self.set("pre_dia_size", value)
  }

  #[napi(getter)]
  pub fn me_subpel_quality(&self) -> Result<HostValue> {
    self.get("me_subpel_quality")
  }

  #[napi(setter)]
  pub fn set_me_subpel_quality(&mut self, value: HostValue) -> Result<()> {
    self.set("me_subpel_quality", value)
  }

  #[napi(getter)]
  pub fn me_range(&self) -> Result<HostValue> {
    self.get("me_range")
  }

  #[napi(setter)]
  pub fn set_me_range(&mut self, value: HostValue) -> Result<()> {
    self.set("me_range", value)
  }

  #[napi(getter)]
  pub fn slice_flags(&self) -> Result<HostValue> {
    self.get("slice_flags")
  }

  #[napi(setter)]
  pub fn set_slice_flags(&mut self, value: HostValue) -> Result<()> {
    self.set("slice_flags", value)
  }

  #[napi(getter)]
  pub fn mb_decision(&self) -> Result<HostValue> {
    self.get("mb_decision")
  }

  #[napi(setter)]
  pub fn set_mb_decision(&mut self, value: HostValue) -> Result<()> {
    self.set("mb_decision", value)
  }

  #[napi(getter)]
  pub fn intra_matrix(&self) -> Result<HostValue> {
    self.get("intra_matrix")
  }

  #[napi(setter)]
  pub fn set_intra_matrix(&mut self, value: HostValue) -> Result<()> {
    self.set("intra_matrix", value)
  }

  #[napi(getter)]
  pub fn inter_matrix(&self) -> Result<HostValue> {
    self.get("inter_matrix")
  }

  #[napi(setter)]
  pub fn set_inter_matrix(&mut self, value: HostValue) -> Result<()> {
    self.set("inter_matrix", value)
  }

  /// Plain-object dump of every property readable in the current mode
  #[napi(js_name = "toObject")]
  pub fn to_object(&self) -> Result<HostValue> {
    let mut entries = marshal::snapshot(&self.inner, self.inner.mode(), CONTEXT_FIELDS);
    if let Some(options) = self.inner.priv_options() {
      entries.push(("priv_data".to_string(), Value::Map(options)));
    }
    Ok(HostValue(Value::Map(entries)))
  }
}
