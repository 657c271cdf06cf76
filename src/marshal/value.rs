//! Host value model
//!
//! `Value` is the dynamically-typed value exchanged between the JavaScript
//! boundary and the field engine. JS numbers always arrive as `Double`;
//! integer-backed fields accept `Int` or `Double` and truncate.

use super::error::{BridgeError, BridgeResult};

/// A dynamically-typed host value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
  Null,
  Bool(bool),
  Int(i64),
  Double(f64),
  Str(String),
  Bytes(Vec<u8>),
  Array(Vec<Value>),
  /// Plain key/value object, insertion-ordered
  Map(Vec<(String, Value)>),
}

impl Value {
  pub fn is_null(&self) -> bool {
    matches!(self, Value::Null)
  }

  pub fn is_number(&self) -> bool {
    matches!(self, Value::Int(_) | Value::Double(_))
  }

  /// Numeric view, truncating doubles
  pub fn as_i64(&self) -> Option<i64> {
    match self {
      Value::Int(v) => Some(*v),
      Value::Double(v) => Some(*v as i64),
      _ => None,
    }
  }

  pub fn as_f64(&self) -> Option<f64> {
    match self {
      Value::Int(v) => Some(*v as f64),
      Value::Double(v) => Some(*v),
      _ => None,
    }
  }

  pub fn as_str(&self) -> Option<&str> {
    match self {
      Value::Str(s) => Some(s),
      _ => None,
    }
  }

  /// Require a numeric value for `field`, truncating to i64
  pub fn expect_i64(&self, field: &'static str) -> BridgeResult<i64> {
    self
      .as_i64()
      .ok_or(BridgeError::type_mismatch(field, "number"))
  }

  /// Require a numeric value for `field`, truncating to i32
  pub fn expect_i32(&self, field: &'static str) -> BridgeResult<i32> {
    Ok(self.expect_i64(field)? as i32)
  }

  pub fn expect_f64(&self, field: &'static str) -> BridgeResult<f64> {
    self
      .as_f64()
      .ok_or(BridgeError::type_mismatch(field, "number"))
  }

  pub fn expect_str(&self, field: &'static str) -> BridgeResult<&str> {
    self
      .as_str()
      .ok_or(BridgeError::type_mismatch(field, "string"))
  }

  /// Require a plain (non-array) object of flag booleans
  pub fn expect_map(&self, field: &'static str) -> BridgeResult<&[(String, Value)]> {
    match self {
      Value::Map(entries) => Ok(entries),
      _ => Err(BridgeError::type_mismatch(
        field,
        "object of Boolean-valued flags",
      )),
    }
  }
}

impl From<bool> for Value {
  fn from(v: bool) -> Self {
    Value::Bool(v)
  }
}

impl From<i32> for Value {
  fn from(v: i32) -> Self {
    Value::Int(v as i64)
  }
}

impl From<i64> for Value {
  fn from(v: i64) -> Self {
    Value::Int(v)
  }
}

impl From<f64> for Value {
  fn from(v: f64) -> Self {
    Value::Double(v)
  }
}

impl From<&str> for Value {
  fn from(v: &str) -> Self {
    Value::Str(v.to_string())
  }
}

impl From<String> for Value {
  fn from(v: String) -> Self {
    Value::Str(v)
  }
}

/// Render a codec tag the way `av_fourcc_make_string` does: printable bytes
/// literally, everything else as `[N]`
pub fn fourcc_string(tag: u32) -> String {
  let mut out = String::new();
  for shift in [0u32, 8, 16, 24] {
    let byte = ((tag >> shift) & 0xff) as u8;
    if byte.is_ascii_graphic() || byte == b' ' {
      out.push(byte as char);
    } else {
      out.push_str(&format!("[{byte}]"));
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn numeric_views_truncate_doubles() {
    assert_eq!(Value::Double(24.9).as_i64(), Some(24));
    assert_eq!(Value::Int(-3).as_f64(), Some(-3.0));
    assert_eq!(Value::Str("x".into()).as_i64(), None);
  }

  #[test]
  fn expect_reports_field_and_type() {
    let err = Value::Str("nope".into()).expect_i32("gop_size").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("gop_size"), "{msg}");
    assert!(msg.contains("number"), "{msg}");
  }

  #[test]
  fn fourcc_renders_printable_and_raw_bytes() {
    let avc1 = u32::from_le_bytes(*b"avc1");
    assert_eq!(fourcc_string(avc1), "avc1");
    assert_eq!(fourcc_string(0), "[0][0][0][0]");
    let mixed = u32::from_le_bytes([b'a', 0x01, b'c', b'1']);
    assert_eq!(fourcc_string(mixed), "a[1]c1");
  }
}
