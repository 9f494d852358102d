#![warn(missing_docs)]
//! Opaque stand-ins for MLIR C API handles.
//!
//! The real MLIR context and type objects live behind an external
//! dependency boundary that this workspace does not link. Each handle
//! wraps exactly one untyped pointer and carries identity only: no
//! ownership, no lifetime contract, no dereferencing. A backing
//! allocation and disposal contract must come from whoever populates
//! the handle.

use std::ffi::c_void;
use std::fmt;

/// Opaque handle to an MLIR context.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct MlirContext {
    ptr: *mut c_void,
}

impl MlirContext {
    /// The null handle.
    pub fn null() -> Self {
        Self {
            ptr: std::ptr::null_mut(),
        }
    }

    /// Wraps a raw pointer without taking ownership.
    pub fn from_raw(ptr: *mut c_void) -> Self {
        Self { ptr }
    }

    /// Returns the wrapped pointer unchanged.
    pub fn as_raw(self) -> *mut c_void {
        self.ptr
    }

    /// Returns `true` if this is the null handle.
    pub fn is_null(self) -> bool {
        self.ptr.is_null()
    }
}

impl Default for MlirContext {
    fn default() -> Self {
        Self::null()
    }
}

impl PartialEq for MlirContext {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl Eq for MlirContext {}

impl fmt::Debug for MlirContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MlirContext({:p})", self.ptr)
    }
}

/// Opaque handle to an MLIR type.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct MlirType {
    ptr: *mut c_void,
}

impl MlirType {
    /// The null handle.
    pub fn null() -> Self {
        Self {
            ptr: std::ptr::null_mut(),
        }
    }

    /// Wraps a raw pointer without taking ownership.
    pub fn from_raw(ptr: *mut c_void) -> Self {
        Self { ptr }
    }

    /// Returns the wrapped pointer unchanged.
    pub fn as_raw(self) -> *mut c_void {
        self.ptr
    }

    /// Returns `true` if this is the null handle.
    pub fn is_null(self) -> bool {
        self.ptr.is_null()
    }
}

impl Default for MlirType {
    fn default() -> Self {
        Self::null()
    }
}

impl PartialEq for MlirType {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl Eq for MlirType {}

impl fmt::Debug for MlirType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MlirType({:p})", self.ptr)
    }
}
