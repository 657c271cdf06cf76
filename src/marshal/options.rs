//! Private-data option type model
//!
//! Closed catalogue of FFmpeg option types. Kinds with no host mapping read
//! back as a visible placeholder string rather than disappearing from the
//! option map.

use super::value::Value;

/// AVOptionType discriminants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
  Flags,
  Int,
  Int64,
  Double,
  Float,
  String,
  Rational,
  Binary,
  Dict,
  Const,
  ImageSize,
  PixelFmt,
  SampleFmt,
  VideoRate,
  Duration,
  Color,
  ChannelLayout,
  Bool,
  Uint64,
  Unsupported(i32),
}

impl OptionKind {
  /// Raw AVOptionType value -> kind
  pub fn from_raw(raw: i32) -> Self {
    match raw {
      0 => OptionKind::Flags,
      1 => OptionKind::Int,
      2 => OptionKind::Int64,
      3 => OptionKind::Double,
      4 => OptionKind::Float,
      5 => OptionKind::String,
      6 => OptionKind::Rational,
      7 => OptionKind::Binary,
      8 => OptionKind::Dict,
      9 => OptionKind::Const,
      10 => OptionKind::ImageSize,
      11 => OptionKind::PixelFmt,
      12 => OptionKind::SampleFmt,
      13 => OptionKind::VideoRate,
      14 => OptionKind::Duration,
      15 => OptionKind::Color,
      16 => OptionKind::ChannelLayout,
      17 => OptionKind::Uint64,
      18 => OptionKind::Bool,
      other => OptionKind::Unsupported(other),
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      OptionKind::Flags => "flags",
      OptionKind::Int => "int",
      OptionKind::Int64 => "int64",
      OptionKind::Double => "double",
      OptionKind::Float => "float",
      OptionKind::String => "string",
      OptionKind::Rational => "rational",
      OptionKind::Binary => "binary",
      OptionKind::Dict => "dict",
      OptionKind::Const => "const",
      OptionKind::ImageSize => "image_size",
      OptionKind::PixelFmt => "pixel_fmt",
      OptionKind::SampleFmt => "sample_fmt",
      OptionKind::VideoRate => "video_rate",
      OptionKind::Duration => "duration",
      OptionKind::Color => "color",
      OptionKind::ChannelLayout => "channel_layout",
      OptionKind::Bool => "bool",
      OptionKind::Uint64 => "uint64",
      OptionKind::Unsupported(_) => "unsupported",
    }
  }

  /// Placeholder surfaced for kinds the bridge does not map
  pub fn placeholder(&self) -> Value {
    Value::Str(format!("unmapped type: {}", self.label()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn raw_values_map_to_kinds() {
    assert_eq!(OptionKind::from_raw(1), OptionKind::Int);
    assert_eq!(OptionKind::from_raw(18), OptionKind::Bool);
    assert_eq!(OptionKind::from_raw(42), OptionKind::Unsupported(42));
  }

  #[test]
  fn unmapped_kinds_surface_a_placeholder() {
    assert_eq!(
      OptionKind::Binary.placeholder(),
      Value::Str("unmapped type: binary".into())
    );
    assert_eq!(
      OptionKind::Unsupported(42).placeholder(),
      Value::Str("unmapped type: unsupported".into())
    );
  }
}
