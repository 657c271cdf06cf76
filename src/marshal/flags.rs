//! Bitflag codec
//!
//! Expands packed flag words into `{ NAME: bool }` maps and collapses such
//! maps back into the word. Collapse starts from the current word so bits
//! with no named entry survive a write untouched, and names the table does
//! not know are skipped rather than rejected.

use super::error::{BridgeError, BridgeResult};
use super::value::Value;

/// One named bit within a flag word
#[derive(Debug, Clone, Copy)]
pub struct FlagDef {
  pub name: &'static str,
  pub bit: u32,
}

const fn f(name: &'static str, bit: u32) -> FlagDef {
  FlagDef { name, bit }
}

/// AV_CODEC_FLAG_*
pub static CODEC_FLAGS: &[FlagDef] = &[
  f("UNALIGNED", 1 << 0),
  f("QSCALE", 1 << 1),
  f("4MV", 1 << 2),
  f("OUTPUT_CORRUPT", 1 << 3),
  f("QPEL", 1 << 4),
  f("PASS1", 1 << 9),
  f("PASS2", 1 << 10),
  f("LOOP_FILTER", 1 << 11),
  f("GRAY", 1 << 13),
  f("PSNR", 1 << 15),
  f("TRUNCATED", 1 << 16),
  f("INTERLACED_DCT", 1 << 18),
  f("LOW_DELAY", 1 << 19),
  f("GLOBAL_HEADER", 1 << 22),
  f("BITEXACT", 1 << 23),
  f("AC_PRED", 1 << 24),
  f("INTERLACED_ME", 1 << 29),
  f("CLOSED_GOP", 1 << 31),
];

/// AV_CODEC_FLAG2_*
pub static CODEC_FLAGS2: &[FlagDef] = &[
  f("FAST", 1 << 0),
  f("NO_OUTPUT", 1 << 2),
  f("LOCAL_HEADER", 1 << 3),
  f("DROP_FRAME_TIMECODE", 1 << 13),
  f("CHUNKS", 1 << 15),
  f("IGNORE_CROP", 1 << 16),
  f("SHOW_ALL", 1 << 22),
  f("EXPORT_MVS", 1 << 28),
  f("SKIP_MANUAL", 1 << 29),
  f("RO_FLUSH_NOOP", 1 << 30),
];

/// SLICE_FLAG_*
pub static SLICE_FLAGS: &[FlagDef] = &[
  f("CODED_ORDER", 1 << 0),
  f("ALLOW_FIELD", 1 << 1),
  f("ALLOW_PLANE", 1 << 2),
];

/// Flag word -> `{ NAME: bool }` map covering every bit the table names
pub fn expand(table: &[FlagDef], word: u32) -> Value {
  let entries = table
    .iter()
    .map(|def| (def.name.to_string(), Value::Bool(word & def.bit != 0)))
    .collect();
  Value::Map(entries)
}

/// Fold a flag map into `current`, leaving bits the map does not mention
/// unchanged. Unknown names are skipped, but every value must be boolean,
/// known name or not.
pub fn collapse(
  table: &[FlagDef],
  field: &'static str,
  current: u32,
  value: &Value,
) -> BridgeResult<u32> {
  let entries = value.expect_map(field)?;
  for (_, flag_value) in entries {
    if !matches!(flag_value, Value::Bool(_)) {
      return Err(BridgeError::type_mismatch(
        field,
        "object of Boolean-valued flags",
      ));
    }
  }
  let mut word = current;
  for (name, flag_value) in entries {
    let Some(def) = table.iter().find(|d| d.name == name.as_str()) else {
      continue;
    };
    if matches!(flag_value, Value::Bool(true)) {
      word |= def.bit;
    } else {
      word &= !def.bit;
    }
  }
  Ok(word)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn map(entries: &[(&str, Value)]) -> Value {
    Value::Map(
      entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect(),
    )
  }

  #[test]
  fn expand_names_every_table_bit() {
    let word = (1 << 1) | (1 << 22);
    let Value::Map(entries) = expand(CODEC_FLAGS, word) else {
      panic!("expected a map");
    };
    assert_eq!(entries.len(), CODEC_FLAGS.len());
    let lookup = |name: &str| {
      entries
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.clone())
        .unwrap()
    };
    assert_eq!(lookup("QSCALE"), Value::Bool(true));
    assert_eq!(lookup("GLOBAL_HEADER"), Value::Bool(true));
    assert_eq!(lookup("GRAY"), Value::Bool(false));
  }

  #[test]
  fn collapse_preserves_unmentioned_bits() {
    // bit 5 has no name in the table and must ride through
    let current = (1 << 5) | (1 << 13);
    let update = map(&[("GRAY", Value::Bool(false)), ("QPEL", Value::Bool(true))]);
    let word = collapse(CODEC_FLAGS, "flags", current, &update).unwrap();
    assert_eq!(word, (1 << 5) | (1 << 4));
  }

  #[test]
  fn collapse_skips_unknown_names() {
    let update = map(&[("NOT_A_FLAG", Value::Bool(true)), ("FAST", Value::Bool(true))]);
    let word = collapse(CODEC_FLAGS2, "flags2", 0, &update).unwrap();
    assert_eq!(word, 1 << 0);
  }

  #[test]
  fn collapse_rejects_non_boolean_values() {
    let update = map(&[("FAST", Value::Int(1))]);
    let err = collapse(CODEC_FLAGS2, "flags2", 0, &update).unwrap_err();
    assert!(err.to_string().contains("flags2"));

    // Non-boolean values fail even under names the table does not know
    let update = map(&[("NOT_A_FLAG", Value::Int(42))]);
    let err = collapse(CODEC_FLAGS2, "flags2", 0, &update).unwrap_err();
    assert!(err.to_string().contains("Boolean"));

    let err = collapse(CODEC_FLAGS, "flags", 0, &Value::Int(3)).unwrap_err();
    assert!(err.to_string().contains("Boolean"));
  }

  #[test]
  fn expand_collapse_round_trips_named_bits() {
    for table in [CODEC_FLAGS, CODEC_FLAGS2, SLICE_FLAGS] {
      let mut word = 0u32;
      for def in table.iter().step_by(2) {
        word |= def.bit;
      }
      let expanded = expand(table, word);
      let collapsed = collapse(table, "flags", 0, &expanded).unwrap();
      assert_eq!(collapsed, word);
    }
  }
}
