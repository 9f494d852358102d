#![warn(missing_docs)]
//! Core LiteRT tensor type scaffolding.
//!
//! Re-declares the stable tags that serialized `.tflite` models and C
//! callers agree on: the element-type enumeration, the legacy affine
//! quantization parameters, and the per-dimension encoding enumeration.
//! Tag values are wire format; they are never renumbered.

mod element;
mod error;
mod quant;
mod sparsity;

pub use element::ElementType;
pub use error::TypeError;
pub use quant::QuantizationParams;
pub use sparsity::DimensionType;
