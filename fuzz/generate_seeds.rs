#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    for dir in ["fuzz/corpus/fuzz_decode", "fuzz/corpus/fuzz_roundtrip"] {
        fs::create_dir_all(dir).unwrap();

        // PPM 2x2
        let ppm = "P3\n2 2\n255\n255 0 0 0 255 0 \n0 0 255 128 128 128 \n";
        fs::write(format!("{dir}/ppm_2x2.ppm"), ppm).unwrap();

        // Comments before the dimensions
        let commented = "P3\n# one\n  # two\n1 1\n255\n1 2 3\n";
        fs::write(format!("{dir}/commented.ppm"), commented).unwrap();

        // Out-of-range channels (truncated on decode)
        fs::write(format!("{dir}/wide_values.ppm"), "P3\n1 1\n255\n256 -1 300\n").unwrap();

        // Truncated/malformed seeds for edge coverage
        fs::write(format!("{dir}/empty.bin"), b"").unwrap();
        fs::write(format!("{dir}/just_p3.bin"), b"P3").unwrap();
        fs::write(format!("{dir}/zero_width.bin"), b"P3\n0 5\n255\n").unwrap();
        fs::write(format!("{dir}/maxval_15.bin"), b"P3\n1 1\n15\n1 2 3").unwrap();
        fs::write(format!("{dir}/short_pixels.bin"), b"P3\n2 1\n255\n1 2 3 4").unwrap();
    }

    println!("Generated seed corpus in fuzz/corpus/");
}
