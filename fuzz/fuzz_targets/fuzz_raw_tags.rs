#![no_main]

use libfuzzer_sys::fuzz_target;
use litert_types::{DimensionType, ElementType};

fuzz_target!(|raw: i32| {
    // Tag decoding is total: every i32 either maps back to itself or errors.
    if let Ok(ty) = ElementType::from_raw(raw) {
        assert_eq!(ty.as_raw(), raw);
        let _ = ty.byte_size();
        let _ = ty.name();
    }
    if let Ok(dim) = DimensionType::from_raw(raw) {
        assert_eq!(dim.as_raw(), raw);
        let _ = dim.name();
    }
});
