//! Bridge error taxonomy
//!
//! Every validation failure surfaces synchronously to the caller with a
//! message naming the offending field. Messages follow the long-standing
//! wording of the JavaScript API ("A value is required to set ...") so
//! existing callers keep matching on them.

use thiserror::Error;

/// Why a gated accessor refused an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
  /// Setter gated out while the context is decoding
  Decoding,
  /// Setter gated out while the context is encoding
  Encoding,
  /// Field is never writable
  ReadOnly,
  /// Getter gated out in the current mode
  NotReadable,
}

impl DenyReason {
  pub fn as_str(&self) -> &'static str {
    match self {
      DenyReason::Decoding => "Cannot set property when decoding.",
      DenyReason::Encoding => "Cannot set property when encoding.",
      DenyReason::ReadOnly => "User cannot set this property.",
      DenyReason::NotReadable => "Property is not available in this mode.",
    }
  }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BridgeError {
  #[error("A value is required to set the {field} property.")]
  MissingArgument { field: &'static str },

  #[error("A {expected} is required to set the {field} property.")]
  TypeMismatch {
    field: &'static str,
    expected: &'static str,
  },

  #[error("Unknown value '{name}' for the {field} property. Did you mean e.g. '{hint}'?")]
  UnknownEnumName {
    field: &'static str,
    name: String,
    hint: &'static str,
  },

  #[error("{} ({field})", reason.as_str())]
  NotPermitted {
    field: &'static str,
    reason: DenyReason,
  },

  #[error("Unknown property name '{name}'.")]
  UnknownField { name: String },

  #[error("Native call failed setting the {field} property (error code {code}).")]
  Native { field: &'static str, code: i32 },
}

impl BridgeError {
  pub fn missing(field: &'static str) -> Self {
    BridgeError::MissingArgument { field }
  }

  pub fn type_mismatch(field: &'static str, expected: &'static str) -> Self {
    BridgeError::TypeMismatch { field, expected }
  }

  pub fn unknown_enum(field: &'static str, name: &str, hint: &'static str) -> Self {
    BridgeError::UnknownEnumName {
      field,
      name: name.to_string(),
      hint,
    }
  }

  pub fn not_permitted(field: &'static str, reason: DenyReason) -> Self {
    BridgeError::NotPermitted { field, reason }
  }
}

pub type BridgeResult<T> = Result<T, BridgeError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages_carry_field_names() {
    let err = BridgeError::type_mismatch("bit_rate", "number");
    assert_eq!(
      err.to_string(),
      "A number is required to set the bit_rate property."
    );

    let err = BridgeError::not_permitted("gop_size", DenyReason::Decoding);
    assert!(err.to_string().contains("decoding"));
    assert!(err.to_string().contains("gop_size"));
  }

  #[test]
  fn unknown_enum_suggests_an_example() {
    let err = BridgeError::unknown_enum("field_order", "sideways", "progressive");
    let msg = err.to_string();
    assert!(msg.contains("sideways"));
    assert!(msg.contains("progressive"));
  }
}
