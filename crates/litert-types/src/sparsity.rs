//! Per-dimension encoding of tensor shapes.

use std::fmt;

use crate::error::TypeError;

/// How one axis of a tensor's shape is stored.
///
/// Discriminants match the upstream `TfLiteDimensionType` values and are
/// never renumbered.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum DimensionType {
    /// Every index along the axis is stored.
    Dense = 0,
    /// Compressed sparse row encoding.
    SparseCsr = 1,
    /// Coordinate list encoding.
    SparseCoo = 2,
}

impl DimensionType {
    /// Every dimension encoding, in ascending tag order.
    pub const ALL: [Self; 3] = [Self::Dense, Self::SparseCsr, Self::SparseCoo];

    /// Returns the wire tag for this encoding.
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Decodes a wire tag.
    pub fn from_raw(raw: i32) -> Result<Self, TypeError> {
        match raw {
            0 => Ok(Self::Dense),
            1 => Ok(Self::SparseCsr),
            2 => Ok(Self::SparseCoo),
            _ => Err(TypeError::UnknownDimensionType { raw }),
        }
    }

    /// Upstream name of this encoding (e.g. `"SPARSE_CSR"`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Dense => "DENSE",
            Self::SparseCsr => "SPARSE_CSR",
            Self::SparseCoo => "SPARSE_COO",
        }
    }

    /// Returns `true` for the sparse encodings.
    pub fn is_sparse(self) -> bool {
        !matches!(self, Self::Dense)
    }
}

impl fmt::Display for DimensionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for DimensionType {
    type Error = TypeError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_values_are_stable() {
        assert_eq!(DimensionType::Dense.as_raw(), 0);
        assert_eq!(DimensionType::SparseCsr.as_raw(), 1);
        assert_eq!(DimensionType::SparseCoo.as_raw(), 2);
    }

    #[test]
    fn from_raw_round_trips() {
        for dim in DimensionType::ALL {
            assert_eq!(DimensionType::from_raw(dim.as_raw()).unwrap(), dim);
        }
    }

    #[test]
    fn from_raw_rejects_unknown_tags() {
        for raw in [-1, 3, i32::MAX] {
            let err = DimensionType::from_raw(raw).unwrap_err();
            assert!(matches!(err, TypeError::UnknownDimensionType { raw: r } if r == raw));
        }
    }

    #[test]
    fn sparse_predicate() {
        assert!(!DimensionType::Dense.is_sparse());
        assert!(DimensionType::SparseCsr.is_sparse());
        assert!(DimensionType::SparseCoo.is_sparse());
    }

    #[test]
    fn display_uses_upstream_names() {
        assert_eq!(format!("{}", DimensionType::Dense), "DENSE");
        assert_eq!(format!("{}", DimensionType::SparseCsr), "SPARSE_CSR");
        assert_eq!(format!("{}", DimensionType::SparseCoo), "SPARSE_COO");
    }
}
