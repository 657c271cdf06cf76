//! Field specification tables
//!
//! One `FieldSpec` per exposed property, carrying the storage kind and the
//! per-mode access rules. The tables are the single source of truth for the
//! property surface; the engine consults them on every get and set.

use super::enums::{
  EnumTable, CHROMA_LOCATION, CMP_FUNCTIONS, COLOR_PRIMARIES, COLOR_RANGE, COLOR_SPACE, COLOR_TRC,
  FIELD_ORDER, MB_DECISION, MEDIA_TYPE,
};
use super::flags::{FlagDef, CODEC_FLAGS, CODEC_FLAGS2, SLICE_FLAGS};

/// Identifies a storage slot on the native struct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
  // AVCodecContext
  CodecId,
  Name,
  LongName,
  CodecTag,
  PrivData,
  BitRate,
  BitRateTolerance,
  GlobalQuality,
  CompressionLevel,
  Flags,
  Flags2,
  Extradata,
  TimeBase,
  TicksPerFrame,
  Delay,
  Width,
  Height,
  CodedWidth,
  CodedHeight,
  GopSize,
  PixFmt,
  MaxBFrames,
  BQuantFactor,
  BQuantOffset,
  IQuantFactor,
  IQuantOffset,
  LumiMasking,
  TemporalCplxMasking,
  SpatialCplxMasking,
  PMasking,
  DarkMasking,
  HasBFrames,
  SliceOffset,
  SampleAspectRatio,
  MeCmp,
  MeSubCmp,
  MbCmp,
  IldctCmp,
  MePreCmp,
  DiaSize,
  LastPredictorCount,
  PreDiaSize,
  MeSubpelQuality,
  MeRange,
  SliceFlags,
  MbDecision,
  IntraMatrix,
  InterMatrix,
  // AVCodecParameters
  ParCodecType,
  ParCodecId,
  ParName,
  ParCodecTag,
  ParExtradata,
  ParFormat,
  ParBitRate,
  ParBitsPerCodedSample,
  ParBitsPerRawSample,
  ParProfile,
  ParLevel,
  ParWidth,
  ParHeight,
  ParSampleAspectRatio,
  ParFieldOrder,
  ParColorRange,
  ParColorPrimaries,
  ParColorTrc,
  ParColorSpace,
  ParChromaLocation,
  ParVideoDelay,
  ParChannelLayout,
  ParChannels,
  ParSampleRate,
  ParBlockAlign,
  ParFrameSize,
  ParInitialPadding,
  ParTrailingPadding,
  ParSeekPreroll,
}

/// How a field's storage is represented on each side of the boundary
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
  Int32,
  Int64,
  /// f32-backed, exchanged as f64
  Float,
  /// `[num, den]` pair of integers
  Rational,
  /// Identity string fixed at construction
  ConstStr,
  /// u32 rendered as a fourcc string
  FourCc,
  EnumName(&'static EnumTable),
  /// Pixel format name resolved through the library
  PixelFormat,
  /// Pixel or sample format name, keyed by the object's media type
  ParamsFormat,
  /// Channel layout name resolved through the library
  ChannelLayout,
  Flags(&'static [FlagDef]),
  /// Owned byte buffer (extradata)
  Bytes,
  /// 64-entry quantization matrix of u16
  Matrix,
  /// Variable-length i32 array with an owned native allocation
  SliceOffsets,
  /// Codec descriptor name; setting resolves the descriptor by name
  CodecName,
  /// Handled outside the engine by the option bridge
  PrivData,
}

/// Access rule, checked against the wrapper's fixed mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
  Both,
  EncodeOnly,
  DecodeOnly,
  /// Setter always refused
  ReadOnly,
  /// Setter accepted and discarded
  Ignored,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
  pub name: &'static str,
  pub id: FieldId,
  pub kind: FieldKind,
  pub get: Rule,
  pub set: Rule,
}

const fn spec(name: &'static str, id: FieldId, kind: FieldKind, get: Rule, set: Rule) -> FieldSpec {
  FieldSpec {
    name,
    id,
    kind,
    get,
    set,
  }
}

use FieldId as F;
use FieldKind as K;
use Rule::{Both, DecodeOnly, EncodeOnly, Ignored, ReadOnly};

/// AVCodecContext property surface
pub static CONTEXT_FIELDS: &[FieldSpec] = &[
  spec("codec_id", F::CodecId, K::Int32, Both, Ignored),
  spec("name", F::Name, K::ConstStr, Both, Ignored),
  spec("long_name", F::LongName, K::ConstStr, Both, ReadOnly),
  spec("codec_tag", F::CodecTag, K::FourCc, Both, ReadOnly),
  spec("priv_data", F::PrivData, K::PrivData, Both, Both),
  spec("bit_rate", F::BitRate, K::Int64, Both, Both),
  spec(
    "bit_rate_tolerance",
    F::BitRateTolerance,
    K::Int32,
    Both,
    EncodeOnly,
  ),
  spec("global_quality", F::GlobalQuality, K::Int32, Both, EncodeOnly),
  spec(
    "compression_level",
    F::CompressionLevel,
    K::Int32,
    Both,
    EncodeOnly,
  ),
  spec("flags", F::Flags, K::Flags(CODEC_FLAGS), Both, Both),
  spec("flags2", F::Flags2, K::Flags(CODEC_FLAGS2), Both, Both),
  spec("extradata", F::Extradata, K::Bytes, Both, DecodeOnly),
  spec("time_base", F::TimeBase, K::Rational, Both, EncodeOnly),
  spec("ticks_per_frame", F::TicksPerFrame, K::Int32, Both, Both),
  spec("delay", F::Delay, K::Int32, Both, ReadOnly),
  spec("width", F::Width, K::Int32, Both, Both),
  spec("height", F::Height, K::Int32, Both, Both),
  spec("coded_width", F::CodedWidth, K::Int32, DecodeOnly, DecodeOnly),
  spec(
    "coded_height",
    F::CodedHeight,
    K::Int32,
    DecodeOnly,
    DecodeOnly,
  ),
  spec("gop_size", F::GopSize, K::Int32, EncodeOnly, EncodeOnly),
  spec("pix_fmt", F::PixFmt, K::PixelFormat, Both, Both),
  spec("max_b_frames", F::MaxBFrames, K::Int32, EncodeOnly, EncodeOnly),
  spec(
    "b_quant_factor",
    F::BQuantFactor,
    K::Float,
    EncodeOnly,
    EncodeOnly,
  ),
  spec(
    "b_quant_offset",
    F::BQuantOffset,
    K::Float,
    EncodeOnly,
    EncodeOnly,
  ),
  spec(
    "i_quant_factor",
    F::IQuantFactor,
    K::Float,
    EncodeOnly,
    EncodeOnly,
  ),
  spec(
    "i_quant_offset",
    F::IQuantOffset,
    K::Float,
    EncodeOnly,
    EncodeOnly,
  ),
  spec(
    "lumi_masking",
    F::LumiMasking,
    K::Float,
    EncodeOnly,
    EncodeOnly,
  ),
  spec(
    "temporal_cplx_masking",
    F::TemporalCplxMasking,
    K::Float,
    EncodeOnly,
    EncodeOnly,
  ),
  spec(
    "spatial_cplx_masking",
    F::SpatialCplxMasking,
    K::Float,
    EncodeOnly,
    EncodeOnly,
  ),
  spec("p_masking", F::PMasking, K::Float, EncodeOnly, EncodeOnly),
  spec(
    "dark_masking",
    F::DarkMasking,
    K::Float,
    EncodeOnly,
    EncodeOnly,
  ),
  spec("has_b_frames", F::HasBFrames, K::Int32, Both, ReadOnly),
  spec(
    "slice_offset",
    F::SliceOffset,
    K::SliceOffsets,
    Both,
    DecodeOnly,
  ),
  spec(
    "sample_aspect_ratio",
    F::SampleAspectRatio,
    K::Rational,
    Both,
    EncodeOnly,
  ),
  spec(
    "me_cmp",
    F::MeCmp,
    K::EnumName(&CMP_FUNCTIONS),
    EncodeOnly,
    EncodeOnly,
  ),
  spec(
    "me_sub_cmp",
    F::MeSubCmp,
    K::EnumName(&CMP_FUNCTIONS),
    EncodeOnly,
    EncodeOnly,
  ),
  spec(
    "mb_cmp",
    F::MbCmp,
    K::EnumName(&CMP_FUNCTIONS),
    EncodeOnly,
    EncodeOnly,
  ),
  spec(
    "ildct_cmp",
    F::IldctCmp,
    K::EnumName(&CMP_FUNCTIONS),
    EncodeOnly,
    EncodeOnly,
  ),
  spec(
    "me_pre_cmp",
    F::MePreCmp,
    K::EnumName(&CMP_FUNCTIONS),
    EncodeOnly,
    EncodeOnly,
  ),
  spec("dia_size", F::DiaSize, K::Int32, EncodeOnly, EncodeOnly),
  spec(
    "last_predictor_count",
    F::LastPredictorCount,
    K::Int32,
    EncodeOnly,
    EncodeOnly,
  ),
  spec(
    "pre_dia_size",
    F::PreDiaSize,
    K::Int32,
    EncodeOnly,
    EncodeOnly,
  ),
  spec(
    "me_subpel_quality",
    F::MeSubpelQuality,
    K::Int32,
    EncodeOnly,
    EncodeOnly,
  ),
  spec("me_range", F::MeRange, K::Int32, EncodeOnly, EncodeOnly),
  spec(
    "slice_flags",
    F::SliceFlags,
    K::Flags(SLICE_FLAGS),
    DecodeOnly,
    DecodeOnly,
  ),
  spec(
    "mb_decision",
    F::MbDecision,
    K::EnumName(&MB_DECISION),
    EncodeOnly,
    EncodeOnly,
  ),
  spec(
    "intra_matrix",
    F::IntraMatrix,
    K::Matrix,
    Both,
    EncodeOnly,
  ),
  spec(
    "inter_matrix",
    F::InterMatrix,
    K::Matrix,
    Both,
    EncodeOnly,
  ),
];

/// AVCodecParameters property surface
pub static PARAMETER_FIELDS: &[FieldSpec] = &[
  spec(
    "codec_type",
    F::ParCodecType,
    K::EnumName(&MEDIA_TYPE),
    Both,
    Both,
  ),
  spec("codec_id", F::ParCodecId, K::Int32, Both, Both),
  spec("name", F::ParName, K::CodecName, Both, Both),
  spec("codec_tag", F::ParCodecTag, K::FourCc, Both, ReadOnly),
  spec("extradata", F::ParExtradata, K::Bytes, Both, Both),
  spec("format", F::ParFormat, K::ParamsFormat, Both, Both),
  spec("bit_rate", F::ParBitRate, K::Int64, Both, Both),
  spec(
    "bits_per_coded_sample",
    F::ParBitsPerCodedSample,
    K::Int32,
    Both,
    Both,
  ),
  spec(
    "bits_per_raw_sample",
    F::ParBitsPerRawSample,
    K::Int32,
    Both,
    Both,
  ),
  spec("profile", F::ParProfile, K::Int32, Both, Both),
  spec("level", F::ParLevel, K::Int32, Both, Both),
  spec("width", F::ParWidth, K::Int32, Both, Both),
  spec("height", F::ParHeight, K::Int32, Both, Both),
  spec(
    "sample_aspect_ratio",
    F::ParSampleAspectRatio,
    K::Rational,
    Both,
    Both,
  ),
  spec(
    "field_order",
    F::ParFieldOrder,
    K::EnumName(&FIELD_ORDER),
    Both,
    Both,
  ),
  spec(
    "color_range",
    F::ParColorRange,
    K::EnumName(&COLOR_RANGE),
    Both,
    Both,
  ),
  spec(
    "color_primaries",
    F::ParColorPrimaries,
    K::EnumName(&COLOR_PRIMARIES),
    Both,
    Both,
  ),
  spec(
    "color_trc",
    F::ParColorTrc,
    K::EnumName(&COLOR_TRC),
    Both,
    Both,
  ),
  spec(
    "color_space",
    F::ParColorSpace,
    K::EnumName(&COLOR_SPACE),
    Both,
    Both,
  ),
  spec(
    "chroma_location",
    F::ParChromaLocation,
    K::EnumName(&CHROMA_LOCATION),
    Both,
    Both,
  ),
  spec("video_delay", F::ParVideoDelay, K::Int32, Both, Both),
  spec(
    "channel_layout",
    F::ParChannelLayout,
    K::ChannelLayout,
    Both,
    Both,
  ),
  spec("channels", F::ParChannels, K::Int32, Both, Both),
  spec("sample_rate", F::ParSampleRate, K::Int32, Both, Both),
  spec("block_align", F::ParBlockAlign, K::Int32, Both, Both),
  spec("frame_size", F::ParFrameSize, K::Int32, Both, Both),
  spec(
    "initial_padding",
    F::ParInitialPadding,
    K::Int32,
    Both,
    Both,
  ),
  spec(
    "trailing_padding",
    F::ParTrailingPadding,
    K::Int32,
    Both,
    Both,
  ),
  spec("seek_preroll", F::ParSeekPreroll, K::Int32, Both, Both),
];

pub fn context_field(name: &str) -> Option<&'static FieldSpec> {
  CONTEXT_FIELDS.iter().find(|s| s.name == name)
}

pub fn parameter_field(name: &str) -> Option<&'static FieldSpec> {
  PARAMETER_FIELDS.iter().find(|s| s.name == name)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn names_and_ids_are_unique_per_table() {
    for table in [CONTEXT_FIELDS, PARAMETER_FIELDS] {
      let mut names = HashSet::new();
      let mut ids = HashSet::new();
      for spec in table {
        assert!(names.insert(spec.name), "duplicate name {}", spec.name);
        assert!(ids.insert(spec.id), "duplicate id {:?}", spec.id);
      }
    }
  }

  #[test]
  fn lookup_finds_known_fields_only() {
    assert!(context_field("gop_size").is_some());
    assert!(context_field("frame_size").is_none());
    assert!(parameter_field("frame_size").is_some());
    assert!(parameter_field("gop_size").is_none());
  }

  #[test]
  fn identity_fields_use_the_nop_setter_rule() {
    assert_eq!(context_field("codec_id").unwrap().set, Rule::Ignored);
    assert_eq!(context_field("name").unwrap().set, Rule::Ignored);
    assert_eq!(context_field("long_name").unwrap().set, Rule::ReadOnly);
  }

  #[test]
  fn encoder_only_fields_are_gated_on_read_too() {
    let gop = context_field("gop_size").unwrap();
    assert_eq!(gop.get, Rule::EncodeOnly);
    let coded = context_field("coded_width").unwrap();
    assert_eq!(coded.get, Rule::DecodeOnly);
  }
}
