//! JavaScript API surface
//!
//! N-API classes and factory functions. All property access routes through
//! the marshalling engine; this layer only converts values and errors.

pub mod codec_context;
pub mod codec_parameters;
pub mod convert;

pub use codec_context::{create_decoder, create_encoder, JsCodecContext};
pub use codec_parameters::{codec_parameters, JsCodecParameters};
