//! JS <-> host value conversion
//!
//! `HostValue` adapts the marshalling `Value` model to the N-API boundary in
//! both directions, so getters and setters exchange plain dynamic values and
//! the engine owns all validation.

use crate::marshal::Value;
use napi::bindgen_prelude::*;

/// Newtype carrying a marshalling value across the N-API boundary
pub struct HostValue(pub Value);

impl From<Value> for HostValue {
  fn from(v: Value) -> Self {
    HostValue(v)
  }
}

impl TypeName for HostValue {
  fn type_name() -> &'static str {
    "unknown"
  }

  fn value_type() -> ValueType {
    ValueType::Unknown
  }
}

impl ValidateNapiValue for HostValue {}

impl FromNapiValue for HostValue {
  unsafe fn from_napi_value(raw_env: sys::napi_env, raw_val: sys::napi_value) -> Result<Self> {
    let unknown = unsafe { Unknown::from_napi_value(raw_env, raw_val)? };
    Ok(HostValue(unknown_to_value(&unknown)?))
  }
}

fn unknown_to_value(unknown: &Unknown) -> Result<Value> {
  // Every cast is checked against the value type probed just before it
  match unknown.get_type()? {
    ValueType::Null | ValueType::Undefined => Ok(Value::Null),
    ValueType::Boolean => Ok(Value::Bool(unsafe { unknown.cast::<bool>()? })),
    // JS numbers are always doubles; integer-backed fields truncate downstream
    ValueType::Number => Ok(Value::Double(unsafe { unknown.cast::<f64>()? })),
    ValueType::BigInt => {
      let (value, _lossless) = unsafe { unknown.cast::<BigInt>()? }.get_i64();
      Ok(Value::Int(value))
    }
    ValueType::String => Ok(Value::Str(unsafe { unknown.cast::<String>()? })),
    ValueType::Object => {
      if unknown.is_buffer()? {
        let buffer = unsafe { unknown.cast::<Buffer>()? };
        return Ok(Value::Bytes(buffer.as_ref().to_vec()));
      }
      if unknown.is_typedarray()? {
        let array = unsafe { unknown.cast::<Uint8Array>()? };
        return Ok(Value::Bytes(array.as_ref().to_vec()));
      }
      if unknown.is_array()? {
        let array = unsafe { unknown.cast::<Array>()? };
        let mut items = Vec::with_capacity(array.len() as usize);
        for i in 0..array.len() {
          let item = array.get::<HostValue>(i)?.map(|h| h.0).unwrap_or(Value::Null);
          items.push(item);
        }
        return Ok(Value::Array(items));
      }
      let object = unsafe { unknown.cast::<Object>()? };
      let mut entries = Vec::new();
      for key in Object::keys(&object)? {
        let value = object.get::<HostValue>(&key)?.map(|h| h.0).unwrap_or(Value::Null);
        entries.push((key, value));
      }
      Ok(Value::Map(entries))
    }
    other => Err(Error::new(
      Status::InvalidArg,
      format!("Unsupported value type {other:?}."),
    )),
  }
}

impl ToNapiValue for HostValue {
  unsafe fn to_napi_value(raw_env: sys::napi_env, val: Self) -> Result<sys::napi_value> {
    let env = unsafe { Env::from_raw(raw_env) };
    match val.0 {
      Value::Null => unsafe { Null::to_napi_value(raw_env, Null) },
      Value::Bool(b) => unsafe { bool::to_napi_value(raw_env, b) },
      Value::Int(i) => unsafe { i64::to_napi_value(raw_env, i) },
      Value::Double(d) => unsafe { f64::to_napi_value(raw_env, d) },
      Value::Str(s) => unsafe { String::to_napi_value(raw_env, s) },
      Value::Bytes(bytes) => unsafe { Buffer::to_napi_value(raw_env, Buffer::from(bytes)) },
      Value::Array(items) => {
        let mut array = env.create_array(items.len() as u32)?;
        for (i, item) in items.into_iter().enumerate() {
          array.set(i as u32, HostValue(item))?;
        }
        unsafe { Array::to_napi_value(raw_env, array) }
      }
      Value::Map(entries) => {
        let mut object = Object::new(&env)?;
        for (key, value) in entries {
          object.set(key.as_str(), HostValue(value))?;
        }
        unsafe { Object::to_napi_value(raw_env, object) }
      }
    }
  }
}

/// Map a marshalling error onto the N-API error surface
pub fn bridge_error(err: crate::marshal::BridgeError) -> Error {
  use crate::marshal::BridgeError::*;
  let status = match err {
    MissingArgument { .. } | TypeMismatch { .. } | UnknownEnumName { .. } | UnknownField { .. } => {
      Status::InvalidArg
    }
    NotPermitted { .. } | Native { .. } => Status::GenericFailure,
  };
  Error::new(status, err.to_string())
}

pub fn codec_error(err: crate::codec::CodecError) -> Error {
  Error::new(Status::GenericFailure, err.to_string())
}
