//! Private-data option bridge
//!
//! Reads and writes codec private options through the AVOption API. Reads
//! surface every option the private class declares; kinds with no host
//! mapping come back as a visible placeholder string. Writes are lenient:
//! unknown names and native failures are logged and skipped so one bad entry
//! never fails a whole options object.

use crate::ffi::{
  accessors::{
    ffctx_get_priv_class_name, ffctx_get_priv_data, ffopt_default_i64, ffopt_name, ffopt_type,
    ffopt_unit,
  },
  avutil::{
    av_free, av_opt_find, av_opt_get, av_opt_get_double, av_opt_get_int, av_opt_get_q, av_opt_next,
    av_opt_set, av_opt_set_double, av_opt_set_int,
  },
  check_error, AVOption, AVRational,
};
use crate::marshal::{options::OptionKind, Value};
use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_void};

use super::CodecContext;

fn opt_name(opt: *const AVOption) -> Option<String> {
  let raw = unsafe { ffopt_name(opt) };
  if raw.is_null() {
    None
  } else {
    Some(unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned())
  }
}

/// Const descriptor name in `unit` matching `value`, if any
unsafe fn const_name_for(obj: *const c_void, unit: *const c_char, value: i64) -> Option<String> {
  let unit_str = unsafe { CStr::from_ptr(unit) };
  let mut opt = unsafe { av_opt_next(obj, std::ptr::null()) };
  while !opt.is_null() {
    unsafe {
      if OptionKind::from_raw(ffopt_type(opt)) == OptionKind::Const {
        let this_unit = ffopt_unit(opt);
        if !this_unit.is_null()
          && CStr::from_ptr(this_unit) == unit_str
          && ffopt_default_i64(opt) == value
        {
          return opt_name(opt);
        }
      }
      opt = av_opt_next(obj, opt);
    }
  }
  None
}

unsafe fn read_option(obj: *mut c_void, opt: *const AVOption, name: &CString) -> Value {
  let kind = OptionKind::from_raw(unsafe { ffopt_type(opt) });
  match kind {
    OptionKind::Flags | OptionKind::Int | OptionKind::Int64 | OptionKind::Uint64
    | OptionKind::Bool => {
      let mut v: i64 = 0;
      if unsafe { av_opt_get_int(obj, name.as_ptr(), 0, &mut v) } < 0 {
        return Value::Null;
      }
      if kind == OptionKind::Int {
        let unit = unsafe { ffopt_unit(opt) };
        if !unit.is_null() {
          return match unsafe { const_name_for(obj, unit, v) } {
            Some(n) => Value::Str(n),
            None => Value::Str("unknown".to_string()),
          };
        }
      }
      if kind == OptionKind::Bool {
        Value::Bool(v != 0)
      } else {
        Value::Int(v)
      }
    }
    OptionKind::Double | OptionKind::Float => {
      let mut v: f64 = 0.0;
      if unsafe { av_opt_get_double(obj, name.as_ptr(), 0, &mut v) } < 0 {
        Value::Null
      } else {
        Value::Double(v)
      }
    }
    OptionKind::String => {
      let mut raw: *mut u8 = std::ptr::null_mut();
      if unsafe { av_opt_get(obj, name.as_ptr(), 0, &mut raw) } < 0 || raw.is_null() {
        Value::Null
      } else {
        let s = unsafe { CStr::from_ptr(raw as *const c_char) }
          .to_string_lossy()
          .into_owned();
        unsafe { av_free(raw as *mut c_void) };
        Value::Str(s)
      }
    }
    OptionKind::Rational => {
      let mut q = AVRational::new(0, 1);
      if unsafe { av_opt_get_q(obj, name.as_ptr(), 0, &mut q) } < 0 {
        Value::Null
      } else {
        Value::Array(vec![Value::Int(q.num as i64), Value::Int(q.den as i64)])
      }
    }
    other => other.placeholder(),
  }
}

impl CodecContext {
  /// Snapshot of the codec's private options, or `None` when the codec has
  /// no private class. The `type` key carries the private class name.
  pub fn priv_options(&self) -> Option<Vec<(String, Value)>> {
    let obj = unsafe { ffctx_get_priv_data(self.as_ptr()) };
    if obj.is_null() {
      return None;
    }
    let class_name = unsafe { ffctx_get_priv_class_name(self.as_ptr()) };
    let mut entries = Vec::new();
    if !class_name.is_null() {
      let name = unsafe { CStr::from_ptr(class_name) }
        .to_string_lossy()
        .into_owned();
      entries.push(("type".to_string(), Value::Str(name)));
    }

    let mut opt = unsafe { av_opt_next(obj, std::ptr::null()) };
    while !opt.is_null() {
      let kind = OptionKind::from_raw(unsafe { ffopt_type(opt) });
      // Const entries describe named values of other options
      if kind != OptionKind::Const {
        if let Some(name) = opt_name(opt) {
          if let Ok(c_name) = CString::new(name.clone()) {
            let value = unsafe { read_option(obj, opt, &c_name) };
            entries.push((name, value));
          }
        }
      }
      opt = unsafe { av_opt_next(obj, opt) };
    }
    Some(entries)
  }

  /// Apply caller-supplied private options. Unknown names, unsupported value
  /// types, and native failures are logged and skipped.
  pub fn set_priv_options(&mut self, entries: &[(String, Value)]) {
    let obj = unsafe { ffctx_get_priv_data(self.as_mut_ptr()) };
    if obj.is_null() {
      tracing::debug!("codec has no private options, ignoring priv_data assignment");
      return;
    }
    for (name, value) in entries {
      let Ok(c_name) = CString::new(name.as_str()) else {
        tracing::warn!(option = %name, "private option name contains a NUL, skipped");
        continue;
      };
      let found =
        unsafe { av_opt_find(obj, c_name.as_ptr(), std::ptr::null(), 0, 0) };
      if found.is_null() {
        tracing::warn!(option = %name, "unknown private option, skipped");
        continue;
      }
      let ret = match value {
        Value::Bool(b) => unsafe { av_opt_set_int(obj, c_name.as_ptr(), *b as i64, 0) },
        Value::Int(v) => unsafe { av_opt_set_int(obj, c_name.as_ptr(), *v, 0) },
        Value::Double(v) => unsafe { av_opt_set_double(obj, c_name.as_ptr(), *v, 0) },
        Value::Str(s) => match CString::new(s.as_str()) {
          Ok(c_val) => unsafe { av_opt_set(obj, c_name.as_ptr(), c_val.as_ptr(), 0) },
          Err(_) => {
            tracing::warn!(option = %name, "private option value contains a NUL, skipped");
            continue;
          }
        },
        other => {
          tracing::warn!(option = %name, value = ?other, "unsupported private option value, skipped");
          continue;
        }
      };
      if let Err(err) = check_error(ret) {
        tracing::warn!(option = %name, error = %err, "failed to set private option, skipped");
      }
    }
  }
}
