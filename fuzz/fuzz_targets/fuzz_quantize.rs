#![no_main]

use libfuzzer_sys::fuzz_target;
use litert_types::QuantizationParams;

fuzz_target!(|input: (f32, i32, f32)| {
    let (scale, zero_point, real) = input;
    let params = QuantizationParams::new(scale, zero_point);

    // Quantization must not panic for any parameters, including zero or
    // non-finite scales.
    let q = params.quantize(real);
    let _ = params.dequantize(q);
    let _ = params.validate();
});
