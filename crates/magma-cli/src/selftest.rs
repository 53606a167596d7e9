//! Self-test command.
//!
//! Runs the known-answer tests for both modes and prints one diagnostic
//! line per mode. The command reports through its output only; it exits
//! zero whenever the tests ran to completion.

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut failures = 0;

    match magma_crypto::selftest::kat_ecb() {
        Ok(()) => println!("magma-ecb: ok"),
        Err(e) => {
            failures += 1;
            println!("magma-ecb: FAILED ({e})");
        }
    }

    match magma_crypto::selftest::kat_ctr() {
        Ok(()) => println!("magma-ctr: ok"),
        Err(e) => {
            failures += 1;
            println!("magma-ctr: FAILED ({e})");
        }
    }

    if failures > 0 {
        eprintln!("{failures} self-test(s) failed");
    }
    Ok(())
}
