//! Build script for codec-bridge-node
//!
//! Handles:
//! 1. NAPI-RS setup
//! 2. Locating FFmpeg and compiling the C accessor library via `cc`
//! 3. Linking libavcodec/libavutil
//!
//! When FFmpeg cannot be found the FFI, codec, and bridge layers are compiled
//! out (`cfg(has_ffmpeg)` stays unset) so the marshalling core still builds
//! and its tests still run.

use std::env;
use std::path::{Path, PathBuf};

fn main() {
  // NAPI-RS build setup
  napi_build::setup();

  println!("cargo::rustc-check-cfg=cfg(has_ffmpeg)");
  println!("cargo:rerun-if-changed=src/ffi/accessors.c");
  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-env-changed=FFMPEG_DIR");

  let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

  match find_ffmpeg_dir(&target_os) {
    Some(ffmpeg_dir) => {
      compile_accessors(&ffmpeg_dir);
      link_ffmpeg(&ffmpeg_dir, &target_os);
      println!("cargo::rustc-cfg=has_ffmpeg");
    }
    None => {
      println!(
        "cargo:warning=FFmpeg headers not found; building the marshalling core only. \
         Set FFMPEG_DIR or install FFmpeg development packages to build the addon."
      );
    }
  }
}

/// Locate an FFmpeg installation that carries libavcodec headers
fn find_ffmpeg_dir(target_os: &str) -> Option<PathBuf> {
  // Check for custom FFMPEG_DIR environment variable
  if let Ok(dir) = env::var("FFMPEG_DIR") {
    let path = PathBuf::from(dir);
    if has_avcodec_headers(&path) {
      return Some(path);
    }
  }

  // Check for pkg-config on Unix systems
  #[cfg(unix)]
  {
    if let Ok(output) = std::process::Command::new("pkg-config")
      .args(["--variable=prefix", "libavcodec"])
      .output()
    {
      if output.status.success() {
        let prefix = String::from_utf8_lossy(&output.stdout);
        let path = PathBuf::from(prefix.trim());
        if has_avcodec_headers(&path) {
          return Some(path);
        }
      }
    }
  }

  // Try common installation paths
  let common_paths = match target_os {
    "macos" => vec![
      "/opt/homebrew", // Apple Silicon Homebrew
      "/usr/local",    // Intel Homebrew / manual install
      "/opt/local",    // MacPorts
    ],
    "linux" => vec!["/usr", "/usr/local", "/opt/ffmpeg"],
    "windows" => vec!["C:\\ffmpeg", "C:\\Program Files\\ffmpeg"],
    _ => vec![],
  };

  common_paths
    .into_iter()
    .map(PathBuf::from)
    .find(|p| has_avcodec_headers(p))
}

fn has_avcodec_headers(prefix: &Path) -> bool {
  prefix.join("include/libavcodec/avcodec.h").exists()
}

/// Compile the C accessor library
fn compile_accessors(ffmpeg_dir: &Path) {
  let include_dir = ffmpeg_dir.join("include");

  let mut build = cc::Build::new();
  build
    .file("src/ffi/accessors.c")
    .include(&include_dir)
    .warnings(true)
    .extra_warnings(true);

  #[cfg(target_os = "macos")]
  {
    build.flag("-Wno-deprecated-declarations");
  }

  build.compile("ffmpeg_accessors");
}

/// Link FFmpeg libraries, preferring dynamic linking against the located prefix
fn link_ffmpeg(ffmpeg_dir: &Path, target_os: &str) {
  let lib_dir = ffmpeg_dir.join("lib");
  if lib_dir.exists() {
    println!("cargo:rustc-link-search=native={}", lib_dir.display());
  }

  for lib in ["avcodec", "avutil"] {
    println!("cargo:rustc-link-lib={lib}");
  }

  match target_os {
    "macos" => {
      println!("cargo:rustc-link-lib=z");
      println!("cargo:rustc-link-lib=bz2");
      println!("cargo:rustc-link-lib=iconv");
      println!("cargo:rustc-link-lib=lzma");
    }
    "linux" => {
      println!("cargo:rustc-link-lib=z");
      println!("cargo:rustc-link-lib=m");
      println!("cargo:rustc-link-lib=pthread");
      println!("cargo:rustc-link-lib=dl");
    }
    _ => {}
  }
}
