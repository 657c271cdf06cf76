//! Field access engine
//!
//! `get_field`/`set_field` apply the rule checks and kind-directed
//! marshalling from the field tables. Native storage is reached through the
//! `NativeStore` trait so the whole policy layer runs against an in-memory
//! store under test.

use super::error::{BridgeError, BridgeResult, DenyReason};
use super::fields::{FieldId, FieldKind, FieldSpec, Rule};
use super::flags;
use super::value::{fourcc_string, Value};

/// Fixed direction of a codec context, set at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  Decode,
  Encode,
}

/// Storage seam between marshalling policy and the native structs.
///
/// Primitive accessors are infallible reads/writes of struct fields. Buffer
/// accessors own native allocations and may fail with an FFmpeg error code.
/// The name-resolution hooks wrap the library lookup functions so the engine
/// never links FFmpeg directly.
pub trait NativeStore {
  fn get_i32(&self, id: FieldId) -> i32;
  fn set_i32(&mut self, id: FieldId, v: i32);
  fn get_i64(&self, id: FieldId) -> i64;
  fn set_i64(&mut self, id: FieldId, v: i64);
  fn get_f64(&self, id: FieldId) -> f64;
  fn set_f64(&mut self, id: FieldId, v: f64);
  fn get_u32(&self, id: FieldId) -> u32;
  fn set_u32(&mut self, id: FieldId, v: u32);
  fn get_rational(&self, id: FieldId) -> (i32, i32);
  fn set_rational(&mut self, id: FieldId, v: (i32, i32));

  /// Identity strings fixed at construction (codec name, long name)
  fn const_str(&self, _id: FieldId) -> Option<String> {
    None
  }

  fn get_bytes(&self, id: FieldId) -> Option<Vec<u8>>;
  /// `None` releases the owned buffer; `Some` replaces it, freeing the
  /// previous allocation exactly once
  fn set_bytes(&mut self, id: FieldId, v: Option<&[u8]>) -> Result<(), i32>;

  // Quantization matrices and slice offsets exist on contexts only
  fn get_matrix(&self, _id: FieldId) -> Option<[u16; 64]> {
    None
  }
  fn set_matrix(&mut self, _id: FieldId, _v: Option<&[u16; 64]>) -> Result<(), i32> {
    Ok(())
  }
  fn get_slice_offsets(&self) -> Option<Vec<i32>> {
    None
  }
  fn set_slice_offsets(&mut self, _v: Option<&[i32]>) -> Result<(), i32> {
    Ok(())
  }

  // Channel layouts and codec descriptors exist on parameters only
  fn channel_layout_name(&self) -> String {
    "unknown".to_string()
  }
  fn set_channel_layout_by_name(&mut self, _name: &str) {}
  fn codec_descriptor_name(&self, _codec_id: i32) -> Option<String> {
    None
  }
  fn codec_descriptor_id(&self, _name: &str) -> Option<i32> {
    None
  }

  // Library name lookups
  fn pix_fmt_name(&self, value: i32) -> Option<String>;
  fn pix_fmt_value(&self, name: &str) -> Option<i32>;
  fn sample_fmt_name(&self, _value: i32) -> Option<String> {
    None
  }
  fn sample_fmt_value(&self, _name: &str) -> Option<i32> {
    None
  }
}

const AV_MEDIA_TYPE_VIDEO: i32 = 0;
const AV_MEDIA_TYPE_AUDIO: i32 = 1;
const FORMAT_NONE: i32 = -1;

fn check_get(spec: &FieldSpec, mode: Mode) -> BridgeResult<()> {
  let allowed = match spec.get {
    Rule::Both | Rule::ReadOnly | Rule::Ignored => true,
    Rule::EncodeOnly => mode == Mode::Encode,
    Rule::DecodeOnly => mode == Mode::Decode,
  };
  if allowed {
    Ok(())
  } else {
    Err(BridgeError::not_permitted(spec.name, DenyReason::NotReadable))
  }
}

enum SetDecision {
  Proceed,
  Nop,
}

fn check_set(spec: &FieldSpec, mode: Mode) -> BridgeResult<SetDecision> {
  match (spec.set, mode) {
    (Rule::Ignored, _) => Ok(SetDecision::Nop),
    (Rule::ReadOnly, _) => Err(BridgeError::not_permitted(spec.name, DenyReason::ReadOnly)),
    (Rule::EncodeOnly, Mode::Decode) => {
      Err(BridgeError::not_permitted(spec.name, DenyReason::Decoding))
    }
    (Rule::DecodeOnly, Mode::Encode) => {
      Err(BridgeError::not_permitted(spec.name, DenyReason::Encoding))
    }
    _ => Ok(SetDecision::Proceed),
  }
}

/// Read one field as a host value
pub fn get_field(store: &dyn NativeStore, mode: Mode, spec: &FieldSpec) -> BridgeResult<Value> {
  check_get(spec, mode)?;
  let value = match spec.kind {
    FieldKind::Int32 => Value::Int(store.get_i32(spec.id) as i64),
    FieldKind::Int64 => Value::Int(store.get_i64(spec.id)),
    FieldKind::Float => Value::Double(store.get_f64(spec.id)),
    FieldKind::Rational => {
      let (num, den) = store.get_rational(spec.id);
      Value::Array(vec![Value::Int(num as i64), Value::Int(den as i64)])
    }
    FieldKind::ConstStr => match store.const_str(spec.id) {
      Some(s) => Value::Str(s),
      None => Value::Null,
    },
    FieldKind::FourCc => Value::Str(fourcc_string(store.get_u32(spec.id))),
    FieldKind::EnumName(table) => Value::Str(table.name_of(store.get_i32(spec.id)).to_string()),
    FieldKind::PixelFormat => {
      let raw = store.get_i32(spec.id);
      match store.pix_fmt_name(raw) {
        Some(name) => Value::Str(name),
        None => Value::Null,
      }
    }
    FieldKind::ParamsFormat => get_params_format(store, spec.id),
    FieldKind::ChannelLayout => Value::Str(store.channel_layout_name()),
    FieldKind::Flags(table) => flags::expand(table, store.get_u32(spec.id)),
    FieldKind::Bytes => match store.get_bytes(spec.id) {
      Some(bytes) => Value::Bytes(bytes),
      None => Value::Null,
    },
    FieldKind::Matrix => match store.get_matrix(spec.id) {
      Some(m) => Value::Array(m.iter().map(|v| Value::Int(*v as i64)).collect()),
      None => Value::Null,
    },
    FieldKind::SliceOffsets => match store.get_slice_offsets() {
      Some(offsets) => Value::Array(offsets.iter().map(|v| Value::Int(*v as i64)).collect()),
      None => Value::Null,
    },
    FieldKind::CodecName => {
      let id = store.get_i32(spec.id);
      match store.codec_descriptor_name(id) {
        Some(name) => Value::Str(name),
        None => Value::Str("unknown".to_string()),
      }
    }
    // Routed through the option bridge, never the engine
    FieldKind::PrivData => Value::Null,
  };
  Ok(value)
}

/// Write one field from a host value
pub fn set_field(
  store: &mut dyn NativeStore,
  mode: Mode,
  spec: &FieldSpec,
  value: &Value,
) -> BridgeResult<()> {
  if let SetDecision::Nop = check_set(spec, mode)? {
    return Ok(());
  }
  match spec.kind {
    FieldKind::Int32 => {
      require(spec, value)?;
      store.set_i32(spec.id, value.expect_i32(spec.name)?);
    }
    FieldKind::Int64 => {
      require(spec, value)?;
      store.set_i64(spec.id, value.expect_i64(spec.name)?);
    }
    FieldKind::Float => {
      require(spec, value)?;
      store.set_f64(spec.id, value.expect_f64(spec.name)?);
    }
    FieldKind::Rational => {
      require(spec, value)?;
      store.set_rational(spec.id, expect_rational(spec.name, value)?);
    }
    FieldKind::EnumName(table) => {
      require(spec, value)?;
      let name = value.expect_str(spec.name)?;
      store.set_i32(spec.id, table.value_of(spec.name, name)?);
    }
    FieldKind::PixelFormat => set_named_format(store, spec, value, FormatDomain::Pixel)?,
    FieldKind::ParamsFormat => set_params_format(store, spec, value)?,
    FieldKind::ChannelLayout => {
      require(spec, value)?;
      store.set_channel_layout_by_name(value.expect_str(spec.name)?);
    }
    FieldKind::Flags(table) => {
      require(spec, value)?;
      let word = flags::collapse(table, spec.name, store.get_u32(spec.id), value)?;
      store.set_u32(spec.id, word);
    }
    FieldKind::Bytes => match value {
      Value::Null => native(spec, store.set_bytes(spec.id, None))?,
      Value::Bytes(bytes) => native(spec, store.set_bytes(spec.id, Some(bytes)))?,
      _ => return Err(BridgeError::type_mismatch(spec.name, "Buffer")),
    },
    FieldKind::Matrix => match value {
      Value::Null => native(spec, store.set_matrix(spec.id, None))?,
      Value::Array(items) => {
        // The native matrix always carries 64 entries; missing and
        // non-numeric elements land as zero, surplus elements are ignored
        let mut m = [0u16; 64];
        for (slot, item) in m.iter_mut().zip(items) {
          *slot = item.as_i64().unwrap_or(0) as u16;
        }
        native(spec, store.set_matrix(spec.id, Some(&m)))?;
      }
      _ => return Err(BridgeError::type_mismatch(spec.name, "array of numbers")),
    },
    FieldKind::SliceOffsets => match value {
      Value::Null => native(spec, store.set_slice_offsets(None))?,
      Value::Array(items) => {
        // Every element validates before any mutation
        let mut offsets = Vec::with_capacity(items.len());
        for item in items {
          offsets.push(item.expect_i32(spec.name)?);
        }
        native(spec, store.set_slice_offsets(Some(&offsets)))?;
      }
      _ => return Err(BridgeError::type_mismatch(spec.name, "array of numbers")),
    },
    FieldKind::CodecName => {
      require(spec, value)?;
      let name = value.expect_str(spec.name)?;
      let id = store
        .codec_descriptor_id(name)
        .ok_or_else(|| BridgeError::unknown_enum(spec.name, name, "h264"))?;
      store.set_i32(spec.id, id);
    }
    FieldKind::ConstStr | FieldKind::FourCc | FieldKind::PrivData => {
      // ConstStr/FourCc are ReadOnly or Ignored in every table; PrivData is
      // handled by the option bridge
    }
  }
  Ok(())
}

/// Read every mode-visible field into an ordered map
pub fn snapshot(store: &dyn NativeStore, mode: Mode, table: &[FieldSpec]) -> Vec<(String, Value)> {
  table
    .iter()
    .filter(|spec| !matches!(spec.kind, FieldKind::PrivData))
    .filter_map(|spec| {
      get_field(store, mode, spec)
        .ok()
        .map(|v| (spec.name.to_string(), v))
    })
    .collect()
}

fn require(spec: &FieldSpec, value: &Value) -> BridgeResult<()> {
  if value.is_null() {
    Err(BridgeError::missing(spec.name))
  } else {
    Ok(())
  }
}

fn native(spec: &FieldSpec, result: Result<(), i32>) -> BridgeResult<()> {
  result.map_err(|code| BridgeError::Native {
    field: spec.name,
    code,
  })
}

fn expect_rational(field: &'static str, value: &Value) -> BridgeResult<(i32, i32)> {
  let Value::Array(items) = value else {
    return Err(BridgeError::type_mismatch(field, "array of 2 numbers"));
  };
  if items.len() != 2 {
    return Err(BridgeError::type_mismatch(field, "array of 2 numbers"));
  }
  Ok((items[0].expect_i32(field)?, items[1].expect_i32(field)?))
}

enum FormatDomain {
  Pixel,
  Sample,
  /// Media type unset: pixel first, then sample
  Either,
}

fn format_domain(store: &dyn NativeStore) -> FormatDomain {
  match store.get_i32(FieldId::ParCodecType) {
    AV_MEDIA_TYPE_VIDEO => FormatDomain::Pixel,
    AV_MEDIA_TYPE_AUDIO => FormatDomain::Sample,
    _ => FormatDomain::Either,
  }
}

fn get_params_format(store: &dyn NativeStore, id: FieldId) -> Value {
  let raw = store.get_i32(id);
  if raw == FORMAT_NONE {
    return Value::Null;
  }
  let name = match format_domain(store) {
    FormatDomain::Pixel => store.pix_fmt_name(raw),
    FormatDomain::Sample => store.sample_fmt_name(raw),
    FormatDomain::Either => store.pix_fmt_name(raw).or_else(|| store.sample_fmt_name(raw)),
  };
  match name {
    Some(n) => Value::Str(n),
    None => Value::Null,
  }
}

fn set_params_format(
  store: &mut dyn NativeStore,
  spec: &FieldSpec,
  value: &Value,
) -> BridgeResult<()> {
  let domain = format_domain(store);
  set_named_format(store, spec, value, domain)
}

fn set_named_format(
  store: &mut dyn NativeStore,
  spec: &FieldSpec,
  value: &Value,
  domain: FormatDomain,
) -> BridgeResult<()> {
  if value.is_null() {
    store.set_i32(spec.id, FORMAT_NONE);
    return Ok(());
  }
  let name = value.expect_str(spec.name)?;
  let (resolved, hint) = match domain {
    FormatDomain::Pixel => (store.pix_fmt_value(name), "yuv420p"),
    FormatDomain::Sample => (store.sample_fmt_value(name), "s16"),
    FormatDomain::Either => (
      store.pix_fmt_value(name).or_else(|| store.sample_fmt_value(name)),
      "yuv420p",
    ),
  };
  match resolved {
    Some(v) => {
      store.set_i32(spec.id, v);
      Ok(())
    }
    None => Err(BridgeError::unknown_enum(spec.name, name, hint)),
  }
}

#[cfg(test)]
pub(crate) mod mem {
  //! In-memory store used by the engine tests

  use super::*;
  use std::collections::HashMap;

  static PIX_FMTS: &[(&str, i32)] = &[("yuv420p", 0), ("rgb24", 2), ("yuv422p", 4)];
  static SAMPLE_FMTS: &[(&str, i32)] = &[("u8", 0), ("s16", 1), ("flt", 3)];
  static DESCRIPTORS: &[(&str, i32)] = &[("h264", 27), ("hevc", 173), ("aac", 86018)];
  static LAYOUTS: &[(&str, u64)] = &[("mono", 0x4), ("stereo", 0x3), ("5.1", 0x3f)];

  #[derive(Default)]
  pub struct MemStore {
    i32s: HashMap<FieldId, i32>,
    i64s: HashMap<FieldId, i64>,
    f64s: HashMap<FieldId, f64>,
    u32s: HashMap<FieldId, u32>,
    rationals: HashMap<FieldId, (i32, i32)>,
    strs: HashMap<FieldId, String>,
    bytes: HashMap<FieldId, Vec<u8>>,
    matrices: HashMap<FieldId, [u16; 64]>,
    slice_offsets: Option<Vec<i32>>,
    channel_layout: u64,
  }

  impl MemStore {
    pub fn new() -> Self {
      let mut store = Self::default();
      store.i32s.insert(FieldId::ParFormat, FORMAT_NONE);
      store.strs.insert(FieldId::Name, "h264".to_string());
      store
        .strs
        .insert(FieldId::LongName, "H.264 / AVC / MPEG-4 AVC".to_string());
      store
    }

    pub fn raw_u32(&self, id: FieldId) -> u32 {
      self.u32s.get(&id).copied().unwrap_or(0)
    }

    pub fn raw_i32(&self, id: FieldId) -> i32 {
      self.i32s.get(&id).copied().unwrap_or(0)
    }
  }

  impl NativeStore for MemStore {
    fn get_i32(&self, id: FieldId) -> i32 {
      self.i32s.get(&id).copied().unwrap_or(0)
    }
    fn set_i32(&mut self, id: FieldId, v: i32) {
      self.i32s.insert(id, v);
    }
    fn get_i64(&self, id: FieldId) -> i64 {
      self.i64s.get(&id).copied().unwrap_or(0)
    }
    fn set_i64(&mut self, id: FieldId, v: i64) {
      self.i64s.insert(id, v);
    }
    fn get_f64(&self, id: FieldId) -> f64 {
      self.f64s.get(&id).copied().unwrap_or(0.0)
    }
    fn set_f64(&mut self, id: FieldId, v: f64) {
      self.f64s.insert(id, v as f32 as f64);
    }
    fn get_u32(&self, id: FieldId) -> u32 {
      self.u32s.get(&id).copied().unwrap_or(0)
    }
    fn set_u32(&mut self, id: FieldId, v: u32) {
      self.u32s.insert(id, v);
    }
    fn get_rational(&self, id: FieldId) -> (i32, i32) {
      self.rationals.get(&id).copied().unwrap_or((0, 1))
    }
    fn set_rational(&mut self, id: FieldId, v: (i32, i32)) {
      self.rationals.insert(id, v);
    }
    fn const_str(&self, id: FieldId) -> Option<String> {
      self.strs.get(&id).cloned()
    }
    fn get_bytes(&self, id: FieldId) -> Option<Vec<u8>> {
      self.bytes.get(&id).cloned()
    }
    fn set_bytes(&mut self, id: FieldId, v: Option<&[u8]>) -> Result<(), i32> {
      // Zero length is the release sentinel, same as the native setter
      match v {
        Some(data) if !data.is_empty() => self.bytes.insert(id, data.to_vec()),
        _ => self.bytes.remove(&id),
      };
      Ok(())
    }
    fn get_matrix(&self, id: FieldId) -> Option<[u16; 64]> {
      self.matrices.get(&id).copied()
    }
    fn set_matrix(&mut self, id: FieldId, v: Option<&[u16; 64]>) -> Result<(), i32> {
      match v {
        Some(m) => self.matrices.insert(id, *m),
        None => self.matrices.remove(&id),
      };
      Ok(())
    }
    fn get_slice_offsets(&self) -> Option<Vec<i32>> {
      self.slice_offsets.clone()
    }
    fn set_slice_offsets(&mut self, v: Option<&[i32]>) -> Result<(), i32> {
      self.slice_offsets = v.map(|s| s.to_vec());
      Ok(())
    }
    fn channel_layout_name(&self) -> String {
      LAYOUTS
        .iter()
        .find(|(_, v)| *v == self.channel_layout)
        .map(|(n, _)| n.to_string())
        .unwrap_or_else(|| "unknown".to_string())
    }
    fn set_channel_layout_by_name(&mut self, name: &str) {
      self.channel_layout = LAYOUTS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| *v)
        .unwrap_or(0);
    }
    fn pix_fmt_name(&self, value: i32) -> Option<String> {
      PIX_FMTS
        .iter()
        .find(|(_, v)| *v == value)
        .map(|(n, _)| n.to_string())
    }
    fn pix_fmt_value(&self, name: &str) -> Option<i32> {
      PIX_FMTS.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }
    fn sample_fmt_name(&self, value: i32) -> Option<String> {
      SAMPLE_FMTS
        .iter()
        .find(|(_, v)| *v == value)
        .map(|(n, _)| n.to_string())
    }
    fn sample_fmt_value(&self, name: &str) -> Option<i32> {
      SAMPLE_FMTS.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }
    fn codec_descriptor_name(&self, codec_id: i32) -> Option<String> {
      DESCRIPTORS
        .iter()
        .find(|(_, v)| *v == codec_id)
        .map(|(n, _)| n.to_string())
    }
    fn codec_descriptor_id(&self, name: &str) -> Option<i32> {
      DESCRIPTORS.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::mem::MemStore;
  use super::*;
  use crate::marshal::fields::{context_field, parameter_field};

  fn ctx_get(store: &MemStore, mode: Mode, name: &str) -> BridgeResult<Value> {
    get_field(store, mode, context_field(name).unwrap())
  }

  fn ctx_set(store: &mut MemStore, mode: Mode, name: &str, value: Value) -> BridgeResult<()> {
    set_field(store, mode, context_field(name).unwrap(), &value)
  }

  fn par_get(store: &MemStore, name: &str) -> BridgeResult<Value> {
    get_field(store, Mode::Decode, parameter_field(name).unwrap())
  }

  fn par_set(store: &mut MemStore, name: &str, value: Value) -> BridgeResult<()> {
    set_field(store, Mode::Decode, parameter_field(name).unwrap(), &value)
  }

  #[test]
  fn scalar_round_trips() {
    let mut store = MemStore::new();
    ctx_set(&mut store, Mode::Encode, "bit_rate", Value::Int(3_500_000)).unwrap();
    assert_eq!(
      ctx_get(&store, Mode::Encode, "bit_rate").unwrap(),
      Value::Int(3_500_000)
    );

    ctx_set(&mut store, Mode::Encode, "width", Value::Double(1920.0)).unwrap();
    assert_eq!(
      ctx_get(&store, Mode::Encode, "width").unwrap(),
      Value::Int(1920)
    );

    ctx_set(&mut store, Mode::Encode, "b_quant_factor", Value::Double(1.25)).unwrap();
    assert_eq!(
      ctx_get(&store, Mode::Encode, "b_quant_factor").unwrap(),
      Value::Double(1.25)
    );

    ctx_set(
      &mut store,
      Mode::Encode,
      "time_base",
      Value::Array(vec![Value::Int(1), Value::Int(25)]),
    )
    .unwrap();
    assert_eq!(
      ctx_get(&store, Mode::Encode, "time_base").unwrap(),
      Value::Array(vec![Value::Int(1), Value::Int(25)])
    );
  }

  #[test]
  fn doubles_truncate_into_integer_fields() {
    let mut store = MemStore::new();
    ctx_set(&mut store, Mode::Encode, "gop_size", Value::Double(12.9)).unwrap();
    assert_eq!(
      ctx_get(&store, Mode::Encode, "gop_size").unwrap(),
      Value::Int(12)
    );
  }

  #[test]
  fn null_is_a_missing_argument_for_required_fields() {
    let mut store = MemStore::new();
    let err = ctx_set(&mut store, Mode::Encode, "bit_rate", Value::Null).unwrap_err();
    assert_eq!(
      err.to_string(),
      "A value is required to set the bit_rate property."
    );
  }

  #[test]
  fn rational_rejects_bad_shapes() {
    let mut store = MemStore::new();
    let err = ctx_set(
      &mut store,
      Mode::Encode,
      "time_base",
      Value::Array(vec![Value::Int(1)]),
    )
    .unwrap_err();
    assert!(err.to_string().contains("array of 2 numbers"));

    let err = ctx_set(&mut store, Mode::Encode, "time_base", Value::Int(25)).unwrap_err();
    assert!(err.to_string().contains("time_base"));
  }

  #[test]
  fn mode_gating_denies_with_exact_wording() {
    let mut store = MemStore::new();

    let err = ctx_set(&mut store, Mode::Decode, "gop_size", Value::Int(12)).unwrap_err();
    assert!(err.to_string().starts_with("Cannot set property when decoding."));

    let err = ctx_set(
      &mut store,
      Mode::Encode,
      "slice_flags",
      Value::Map(vec![("CODED_ORDER".to_string(), Value::Bool(true))]),
    )
    .unwrap_err();
    assert!(err.to_string().starts_with("Cannot set property when encoding."));

    let err = ctx_set(&mut store, Mode::Encode, "delay", Value::Int(2)).unwrap_err();
    assert!(err.to_string().starts_with("User cannot set this property."));
  }

  #[test]
  fn gated_reads_are_denied() {
    let store = MemStore::new();
    assert!(ctx_get(&store, Mode::Decode, "gop_size").is_err());
    assert!(ctx_get(&store, Mode::Encode, "coded_width").is_err());
    assert!(ctx_get(&store, Mode::Encode, "gop_size").is_ok());
  }

  #[test]
  fn identity_setters_are_silent_nops() {
    let mut store = MemStore::new();
    ctx_set(&mut store, Mode::Decode, "codec_id", Value::Int(999)).unwrap();
    assert_eq!(store.raw_i32(FieldId::CodecId), 0);

    ctx_set(&mut store, Mode::Decode, "name", Value::Str("vp9".into())).unwrap();
    assert_eq!(
      ctx_get(&store, Mode::Decode, "name").unwrap(),
      Value::Str("h264".into())
    );
  }

  #[test]
  fn flag_writes_preserve_unnamed_mask_bits() {
    let mut store = MemStore::new();
    store.set_u32(FieldId::Flags, (1 << 5) | (1 << 1));

    ctx_set(
      &mut store,
      Mode::Encode,
      "flags",
      Value::Map(vec![
        ("QSCALE".to_string(), Value::Bool(false)),
        ("GLOBAL_HEADER".to_string(), Value::Bool(true)),
      ]),
    )
    .unwrap();
    assert_eq!(store.raw_u32(FieldId::Flags), (1 << 5) | (1 << 22));

    let Value::Map(entries) = ctx_get(&store, Mode::Encode, "flags").unwrap() else {
      panic!("expected a flag map");
    };
    let global = entries.iter().find(|(n, _)| n == "GLOBAL_HEADER").unwrap();
    assert_eq!(global.1, Value::Bool(true));
  }

  #[test]
  fn enum_fields_round_trip_and_reject_unknown_names() {
    let mut store = MemStore::new();
    ctx_set(&mut store, Mode::Encode, "me_cmp", Value::Str("satd".into())).unwrap();
    assert_eq!(
      ctx_get(&store, Mode::Encode, "me_cmp").unwrap(),
      Value::Str("satd".into())
    );

    let err = ctx_set(&mut store, Mode::Encode, "me_cmp", Value::Str("fancy".into())).unwrap_err();
    assert!(err.to_string().contains("fancy"));
    assert!(err.to_string().contains("sad"));
  }

  #[test]
  fn pix_fmt_resolves_names_and_null_unsets() {
    let mut store = MemStore::new();
    ctx_set(&mut store, Mode::Decode, "pix_fmt", Value::Str("yuv422p".into())).unwrap();
    assert_eq!(
      ctx_get(&store, Mode::Decode, "pix_fmt").unwrap(),
      Value::Str("yuv422p".into())
    );

    ctx_set(&mut store, Mode::Decode, "pix_fmt", Value::Null).unwrap();
    assert_eq!(ctx_get(&store, Mode::Decode, "pix_fmt").unwrap(), Value::Null);
    assert_eq!(store.raw_i32(FieldId::PixFmt), -1);

    let err = ctx_set(&mut store, Mode::Decode, "pix_fmt", Value::Str("nope".into())).unwrap_err();
    assert!(err.to_string().contains("yuv420p"));
  }

  #[test]
  fn extradata_round_trips_and_null_clears() {
    let mut store = MemStore::new();
    for size in [1usize, 4096] {
      let data = vec![0xABu8; size];
      ctx_set(&mut store, Mode::Decode, "extradata", Value::Bytes(data.clone())).unwrap();
      assert_eq!(
        ctx_get(&store, Mode::Decode, "extradata").unwrap(),
        Value::Bytes(data)
      );
    }

    // An empty buffer releases the allocation, reading back as null
    ctx_set(&mut store, Mode::Decode, "extradata", Value::Bytes(Vec::new())).unwrap();
    assert_eq!(
      ctx_get(&store, Mode::Decode, "extradata").unwrap(),
      Value::Null
    );

    ctx_set(&mut store, Mode::Decode, "extradata", Value::Bytes(vec![0xCD])).unwrap();
    ctx_set(&mut store, Mode::Decode, "extradata", Value::Null).unwrap();
    assert_eq!(
      ctx_get(&store, Mode::Decode, "extradata").unwrap(),
      Value::Null
    );

    let err =
      ctx_set(&mut store, Mode::Encode, "extradata", Value::Bytes(vec![1, 2])).unwrap_err();
    assert!(err.to_string().starts_with("Cannot set property when encoding."));
  }

  #[test]
  fn matrix_substitutes_zero_for_non_numeric_elements() {
    let mut store = MemStore::new();
    let mut items: Vec<Value> = (0..64).map(|i| Value::Int(i + 1)).collect();
    items[7] = Value::Str("x".into());
    items[40] = Value::Null;

    ctx_set(&mut store, Mode::Encode, "intra_matrix", Value::Array(items)).unwrap();
    let m = store.get_matrix(FieldId::IntraMatrix).unwrap();
    assert_eq!(m[0], 1);
    assert_eq!(m[7], 0);
    assert_eq!(m[40], 0);
    assert_eq!(m[63], 64);
  }

  #[test]
  fn matrix_zero_fills_short_arrays_and_drops_surplus() {
    let mut store = MemStore::new();
    let short: Vec<Value> = (1..=10).map(Value::Int).collect();
    ctx_set(&mut store, Mode::Encode, "inter_matrix", Value::Array(short)).unwrap();
    let m = store.get_matrix(FieldId::InterMatrix).unwrap();
    assert_eq!(m[0], 1);
    assert_eq!(m[9], 10);
    assert_eq!(m[10], 0);
    assert_eq!(m[63], 0);

    let long: Vec<Value> = (1..=70).map(Value::Int).collect();
    ctx_set(&mut store, Mode::Encode, "inter_matrix", Value::Array(long)).unwrap();
    let m = store.get_matrix(FieldId::InterMatrix).unwrap();
    assert_eq!(m[63], 64);
  }

  #[test]
  fn matrix_null_clears() {
    let mut store = MemStore::new();
    let items: Vec<Value> = (0..64).map(Value::Int).collect();
    ctx_set(&mut store, Mode::Encode, "intra_matrix", Value::Array(items)).unwrap();
    ctx_set(&mut store, Mode::Encode, "intra_matrix", Value::Null).unwrap();
    assert_eq!(
      ctx_get(&store, Mode::Encode, "intra_matrix").unwrap(),
      Value::Null
    );
  }

  #[test]
  fn slice_offsets_are_all_or_nothing() {
    let mut store = MemStore::new();
    ctx_set(
      &mut store,
      Mode::Decode,
      "slice_offset",
      Value::Array(vec![Value::Int(0), Value::Int(1024)]),
    )
    .unwrap();

    let err = ctx_set(
      &mut store,
      Mode::Decode,
      "slice_offset",
      Value::Array(vec![Value::Int(0), Value::Str("bad".into())]),
    )
    .unwrap_err();
    assert!(err.to_string().contains("slice_offset"));
    // Prior contents survive the failed write
    assert_eq!(
      ctx_get(&store, Mode::Decode, "slice_offset").unwrap(),
      Value::Array(vec![Value::Int(0), Value::Int(1024)])
    );

    ctx_set(&mut store, Mode::Decode, "slice_offset", Value::Null).unwrap();
    assert_eq!(
      ctx_get(&store, Mode::Decode, "slice_offset").unwrap(),
      Value::Null
    );
  }

  #[test]
  fn fourcc_reads_as_a_string() {
    let mut store = MemStore::new();
    store.set_u32(FieldId::CodecTag, u32::from_le_bytes(*b"avc1"));
    assert_eq!(
      ctx_get(&store, Mode::Decode, "codec_tag").unwrap(),
      Value::Str("avc1".into())
    );
  }

  #[test]
  fn params_format_follows_the_media_type() {
    let mut store = MemStore::new();

    par_set(&mut store, "codec_type", Value::Str("video".into())).unwrap();
    par_set(&mut store, "format", Value::Str("rgb24".into())).unwrap();
    assert_eq!(par_get(&store, "format").unwrap(), Value::Str("rgb24".into()));

    par_set(&mut store, "codec_type", Value::Str("audio".into())).unwrap();
    par_set(&mut store, "format", Value::Str("s16".into())).unwrap();
    assert_eq!(par_get(&store, "format").unwrap(), Value::Str("s16".into()));

    let err = par_set(&mut store, "format", Value::Str("rgb24".into())).unwrap_err();
    assert!(err.to_string().contains("s16"));

    par_set(&mut store, "format", Value::Null).unwrap();
    assert_eq!(par_get(&store, "format").unwrap(), Value::Null);
  }

  #[test]
  fn params_name_resolves_the_descriptor() {
    let mut store = MemStore::new();
    par_set(&mut store, "name", Value::Str("hevc".into())).unwrap();
    assert_eq!(store.raw_i32(FieldId::ParName), 173);
    assert_eq!(par_get(&store, "name").unwrap(), Value::Str("hevc".into()));

    let err = par_set(&mut store, "name", Value::Str("notacodec".into())).unwrap_err();
    assert!(err.to_string().contains("h264"));
  }

  #[test]
  fn channel_layout_round_trips_by_name() {
    let mut store = MemStore::new();
    par_set(&mut store, "channel_layout", Value::Str("stereo".into())).unwrap();
    assert_eq!(
      par_get(&store, "channel_layout").unwrap(),
      Value::Str("stereo".into())
    );
  }

  #[test]
  fn encoder_configures_what_a_decoder_cannot() {
    let mut enc = MemStore::new();
    ctx_set(&mut enc, Mode::Encode, "gop_size", Value::Int(25)).unwrap();
    ctx_set(&mut enc, Mode::Encode, "max_b_frames", Value::Int(2)).unwrap();
    ctx_set(&mut enc, Mode::Encode, "mb_decision", Value::Str("rd".into())).unwrap();
    ctx_set(
      &mut enc,
      Mode::Encode,
      "sample_aspect_ratio",
      Value::Array(vec![Value::Int(16), Value::Int(11)]),
    )
    .unwrap();

    let mut dec = MemStore::new();
    for (name, value) in [
      ("gop_size", Value::Int(25)),
      ("max_b_frames", Value::Int(2)),
    ] {
      assert!(ctx_set(&mut dec, Mode::Decode, name, value).is_err());
    }
    ctx_set(&mut dec, Mode::Decode, "extradata", Value::Bytes(vec![9; 32])).unwrap();
    assert!(ctx_set(&mut enc, Mode::Encode, "extradata", Value::Bytes(vec![9; 32])).is_err());
  }

  #[test]
  fn snapshot_skips_gated_and_priv_data_fields() {
    let store = MemStore::new();
    let dump = snapshot(&store, Mode::Decode, crate::marshal::fields::CONTEXT_FIELDS);
    let names: Vec<&str> = dump.iter().map(|(n, _)| n.as_str()).collect();
    assert!(names.contains(&"bit_rate"));
    assert!(names.contains(&"coded_width"));
    assert!(!names.contains(&"gop_size"));
    assert!(!names.contains(&"priv_data"));
  }
}
