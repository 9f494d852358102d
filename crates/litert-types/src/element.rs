//! Tensor element types.

use std::fmt;

use crate::error::TypeError;

/// The scalar kind of a tensor element.
///
/// Discriminants match the upstream TensorFlow Lite `TfLiteType` values
/// byte for byte. Serialized models and C callers identify element types
/// by these integers, so the assignments are permanent.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum ElementType {
    /// Placeholder for tensors whose type has not been assigned.
    NoType = 0,
    /// 32-bit IEEE 754 floating point.
    Float32 = 1,
    /// 32-bit signed integer.
    Int32 = 2,
    /// 8-bit unsigned integer.
    UInt8 = 3,
    /// 64-bit signed integer.
    Int64 = 4,
    /// Variable-length string payload.
    String = 5,
    /// Boolean.
    Bool = 6,
    /// 16-bit signed integer.
    Int16 = 7,
    /// Complex number with 32-bit real and imaginary parts.
    Complex64 = 8,
    /// 8-bit signed integer.
    Int8 = 9,
    /// 16-bit IEEE 754 floating point.
    Float16 = 10,
    /// 64-bit IEEE 754 floating point.
    Float64 = 11,
    /// 64-bit unsigned integer.
    UInt64 = 12,
    /// Handle to a runtime resource.
    Resource = 13,
    /// Dynamically typed runtime value.
    Variant = 14,
    /// 32-bit unsigned integer.
    UInt32 = 15,
    /// 16-bit unsigned integer.
    UInt16 = 16,
}

impl ElementType {
    /// Every element type, in ascending tag order.
    pub const ALL: [Self; 17] = [
        Self::NoType,
        Self::Float32,
        Self::Int32,
        Self::UInt8,
        Self::Int64,
        Self::String,
        Self::Bool,
        Self::Int16,
        Self::Complex64,
        Self::Int8,
        Self::Float16,
        Self::Float64,
        Self::UInt64,
        Self::Resource,
        Self::Variant,
        Self::UInt32,
        Self::UInt16,
    ];

    /// Returns the wire tag for this element type.
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Decodes a wire tag.
    ///
    /// Total over all inputs: tags outside the table produce
    /// [`TypeError::UnknownElementType`] rather than a panic.
    pub fn from_raw(raw: i32) -> Result<Self, TypeError> {
        Ok(match raw {
            0 => Self::NoType,
            1 => Self::Float32,
            2 => Self::Int32,
            3 => Self::UInt8,
            4 => Self::Int64,
            5 => Self::String,
            6 => Self::Bool,
            7 => Self::Int16,
            8 => Self::Complex64,
            9 => Self::Int8,
            10 => Self::Float16,
            11 => Self::Float64,
            12 => Self::UInt64,
            13 => Self::Resource,
            14 => Self::Variant,
            15 => Self::UInt32,
            16 => Self::UInt16,
            _ => return Err(TypeError::UnknownElementType { raw }),
        })
    }

    /// Storage width of one element in bytes.
    ///
    /// `None` for kinds with no fixed width: [`Self::NoType`],
    /// [`Self::String`], [`Self::Resource`], and [`Self::Variant`].
    pub fn byte_size(self) -> Option<usize> {
        match self {
            Self::NoType | Self::String | Self::Resource | Self::Variant => None,
            Self::UInt8 | Self::Bool | Self::Int8 => Some(1),
            Self::Int16 | Self::Float16 | Self::UInt16 => Some(2),
            Self::Float32 | Self::Int32 | Self::UInt32 => Some(4),
            Self::Int64 | Self::Complex64 | Self::Float64 | Self::UInt64 => Some(8),
        }
    }

    /// Upstream name of this element type (e.g. `"FLOAT32"`).
    pub fn name(self) -> &'static str {
        match self {
            Self::NoType => "NOTYPE",
            Self::Float32 => "FLOAT32",
            Self::Int32 => "INT32",
            Self::UInt8 => "UINT8",
            Self::Int64 => "INT64",
            Self::String => "STRING",
            Self::Bool => "BOOL",
            Self::Int16 => "INT16",
            Self::Complex64 => "COMPLEX64",
            Self::Int8 => "INT8",
            Self::Float16 => "FLOAT16",
            Self::Float64 => "FLOAT64",
            Self::UInt64 => "UINT64",
            Self::Resource => "RESOURCE",
            Self::Variant => "VARIANT",
            Self::UInt32 => "UINT32",
            Self::UInt16 => "UINT16",
        }
    }

    /// Returns `true` for the floating-point kinds.
    pub fn is_float(self) -> bool {
        matches!(self, Self::Float16 | Self::Float32 | Self::Float64)
    }

    /// Returns `true` for the signed and unsigned integer kinds.
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::UInt8
                | Self::UInt16
                | Self::UInt32
                | Self::UInt64
        )
    }

    /// Returns `true` for the integer kinds that carry affine
    /// quantization parameters in practice.
    pub fn is_quantizable(self) -> bool {
        matches!(
            self,
            Self::UInt8 | Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64
        )
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for ElementType {
    type Error = TypeError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}
