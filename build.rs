//! Stages the payload file into `OUT_DIR` so the crate can `include_bytes!` it.
//!
//! The file named by `EMBED_PAYLOAD` (or `version.txt` next to the manifest)
//! is copied verbatim; the program never touches the filesystem at runtime.

use std::env;
use std::fs;
use std::path::PathBuf;

const PAYLOAD_ENV: &str = "EMBED_PAYLOAD";
const DEFAULT_PAYLOAD: &str = "version.txt";

fn main() {
    println!("cargo:rerun-if-env-changed={PAYLOAD_ENV}");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let payload_file = match env::var_os(PAYLOAD_ENV) {
        Some(path) => PathBuf::from(path),
        None => manifest_dir.join(DEFAULT_PAYLOAD),
    };
    println!("cargo:rerun-if-changed={}", payload_file.display());

    let staged = PathBuf::from(env::var("OUT_DIR").unwrap()).join("payload.bin");
    if let Err(e) = fs::copy(&payload_file, &staged) {
        panic!(
            "failed to stage payload file {}: {e}",
            payload_file.display()
        );
    }
}
