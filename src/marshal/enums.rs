//! Enum registries
//!
//! Immutable value<->name tables for the enumerated FFmpeg fields surfaced as
//! strings. Unknown values degrade to the `"unknown"` sentinel on read
//! (FFmpeg grows codes faster than this table); unknown names on write fail
//! with an `UnknownEnumName` carrying a valid example.
//!
//! Pixel formats, sample formats, channel layouts, and codec descriptors are
//! not listed here; those resolve through the library-provided name functions
//! exposed on the `NativeStore` trait.

use super::error::{BridgeError, BridgeResult};

/// Display sentinel for values missing from a table
pub const UNKNOWN_NAME: &str = "unknown";

/// One enumeration domain: a static value<->name mapping
#[derive(Debug)]
pub struct EnumTable {
  pub entries: &'static [(i32, &'static str)],
  /// Example offered in `UnknownEnumName` messages
  pub hint: &'static str,
}

impl EnumTable {
  /// Value -> canonical name, degrading to the `"unknown"` sentinel
  pub fn name_of(&self, value: i32) -> &'static str {
    self
      .entries
      .iter()
      .find(|(v, _)| *v == value)
      .map(|(_, n)| *n)
      .unwrap_or(UNKNOWN_NAME)
  }

  /// Name -> value, failing with a suggestion for unrecognised names
  pub fn value_of(&self, field: &'static str, name: &str) -> BridgeResult<i32> {
    self
      .entries
      .iter()
      .find(|(_, n)| *n == name)
      .map(|(v, _)| *v)
      .ok_or_else(|| BridgeError::unknown_enum(field, name, self.hint))
  }
}

/// Comparison functions for motion estimation (FF_CMP_*)
pub static CMP_FUNCTIONS: EnumTable = EnumTable {
  entries: &[
    (0, "sad"),
    (1, "sse"),
    (2, "satd"),
    (3, "dct"),
    (4, "psnr"),
    (5, "bit"),
    (6, "rd"),
    (7, "zero"),
    (8, "vsad"),
    (9, "vsse"),
    (10, "nsse"),
    (11, "w53"),
    (12, "w97"),
    (13, "dctmax"),
    (14, "dct264"),
    (15, "median_sad"),
    (256, "chroma"),
  ],
  hint: "sad",
};

/// Macroblock decision modes (FF_MB_DECISION_*)
pub static MB_DECISION: EnumTable = EnumTable {
  entries: &[(0, "simple"), (1, "bits"), (2, "rd")],
  hint: "simple",
};

/// Interlaced field order (AVFieldOrder)
pub static FIELD_ORDER: EnumTable = EnumTable {
  entries: &[
    (0, "unknown"),
    (1, "progressive"),
    (2, "tt"),
    (3, "bb"),
    (4, "tb"),
    (5, "bt"),
  ],
  hint: "progressive",
};

/// Color range (AVColorRange)
pub static COLOR_RANGE: EnumTable = EnumTable {
  entries: &[(0, "unknown"), (1, "tv"), (2, "pc")],
  hint: "tv",
};

/// Color primaries (AVColorPrimaries)
pub static COLOR_PRIMARIES: EnumTable = EnumTable {
  entries: &[
    (1, "bt709"),
    (2, "unknown"),
    (4, "bt470m"),
    (5, "bt470bg"),
    (6, "smpte170m"),
    (7, "smpte240m"),
    (8, "film"),
    (9, "bt2020"),
    (10, "smpte428"),
    (11, "smpte431"),
    (12, "smpte432"),
    (22, "jedec-p22"),
  ],
  hint: "bt709",
};

/// Color transfer characteristics (AVColorTransferCharacteristic)
pub static COLOR_TRC: EnumTable = EnumTable {
  entries: &[
    (1, "bt709"),
    (2, "unknown"),
    (4, "gamma22"),
    (5, "gamma28"),
    (6, "smpte170m"),
    (7, "smpte240m"),
    (8, "linear"),
    (9, "log100"),
    (10, "log316"),
    (11, "iec61966-2-4"),
    (12, "bt1361e"),
    (13, "iec61966-2-1"),
    (14, "bt2020-10"),
    (15, "bt2020-12"),
    (16, "smpte2084"),
    (17, "smpte428"),
    (18, "arib-std-b67"),
  ],
  hint: "bt709",
};

/// Color space / matrix coefficients (AVColorSpace)
pub static COLOR_SPACE: EnumTable = EnumTable {
  entries: &[
    (0, "gbr"),
    (1, "bt709"),
    (2, "unknown"),
    (4, "fcc"),
    (5, "bt470bg"),
    (6, "smpte170m"),
    (7, "smpte240m"),
    (8, "ycgco"),
    (9, "bt2020nc"),
    (10, "bt2020c"),
    (11, "smpte2085"),
    (12, "chroma-derived-nc"),
    (13, "chroma-derived-c"),
    (14, "ictcp"),
  ],
  hint: "bt709",
};

/// Chroma sample location (AVChromaLocation)
pub static CHROMA_LOCATION: EnumTable = EnumTable {
  entries: &[
    (0, "unspecified"),
    (1, "left"),
    (2, "center"),
    (3, "topleft"),
    (4, "top"),
    (5, "bottomleft"),
    (6, "bottom"),
  ],
  hint: "left",
};

/// Media type (AVMediaType)
pub static MEDIA_TYPE: EnumTable = EnumTable {
  entries: &[
    (-1, "unknown"),
    (0, "video"),
    (1, "audio"),
    (2, "data"),
    (3, "subtitle"),
    (4, "attachment"),
  ],
  hint: "video",
};

#[cfg(test)]
mod tests {
  use super::*;

  static ALL_TABLES: &[(&str, &EnumTable)] = &[
    ("cmp", &CMP_FUNCTIONS),
    ("mb_decision", &MB_DECISION),
    ("field_order", &FIELD_ORDER),
    ("color_range", &COLOR_RANGE),
    ("color_primaries", &COLOR_PRIMARIES),
    ("color_trc", &COLOR_TRC),
    ("color_space", &COLOR_SPACE),
    ("chroma_location", &CHROMA_LOCATION),
    ("media_type", &MEDIA_TYPE),
  ];

  #[test]
  fn every_name_round_trips() {
    for (field, table) in ALL_TABLES {
      for (value, name) in table.entries {
        let looked_up = table.value_of("test", name).unwrap();
        assert_eq!(looked_up, *value, "{field}:{name}");
        assert_eq!(table.name_of(*value), *name, "{field}:{value}");
      }
    }
  }

  #[test]
  fn hints_are_valid_members() {
    for (field, table) in ALL_TABLES {
      assert!(
        table.value_of("test", table.hint).is_ok(),
        "hint for {field} is not in its own table"
      );
    }
  }

  #[test]
  fn unknown_value_degrades_to_sentinel() {
    assert_eq!(CMP_FUNCTIONS.name_of(9999), UNKNOWN_NAME);
    assert_eq!(FIELD_ORDER.name_of(-5), UNKNOWN_NAME);
  }

  #[test]
  fn unknown_name_fails_with_hint() {
    let err = FIELD_ORDER.value_of("field_order", "sideways").unwrap_err();
    match err {
      BridgeError::UnknownEnumName { field, name, hint } => {
        assert_eq!(field, "field_order");
        assert_eq!(name, "sideways");
        assert_eq!(hint, "progressive");
      }
      other => panic!("unexpected error {other:?}"),
    }
  }
}
