#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // PBM ASCII 2x2
    fs::write(format!("{dir}/p1_2x2.pbm"), b"P1\n2 2\n1 0\n0 1\n").unwrap();

    // PGM ASCII 3x1
    fs::write(format!("{dir}/p2_3x1.pgm"), b"P2\n3 1\n255\n10\n20\n30\n").unwrap();

    // PBM binary 10x2 (6 padding bits per row)
    fs::write(format!("{dir}/p4_10x2.pbm"), b"P4\n10 2\n\xb0\xc0\x00\x40").unwrap();

    // PGM binary 3x2, max value 200
    fs::write(format!("{dir}/p5_3x2.pgm"), b"P5\n3 2\n200\n\x00\x40\x80\xc0\xc8\x64").unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p5.bin"), b"P5").unwrap();
    fs::write(format!("{dir}/p4_short.bin"), b"P4\n9 2\n\xff").unwrap();
    fs::write(format!("{dir}/p2_comment.bin"), b"P2\n# c\n1 1\n255\n0\n").unwrap();
    fs::write(format!("{dir}/p2_over_max.bin"), b"P2\n1 1\n15\n16\n").unwrap();

    println!("Generated seed corpus in {dir}/");
}
