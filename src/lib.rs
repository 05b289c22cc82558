//! Emits a byte payload embedded into the binary at build time.
//!
//! The build script stages an external data file into `OUT_DIR` (see
//! `build.rs`); it ends up in the process image via [`include_bytes!`] and
//! [`payload`] hands out a view of it. No file is read at runtime.

mod emit;
pub use emit::emit;

static PAYLOAD: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/payload.bin"));

/// The embedded payload: immutable for the lifetime of the process.
pub fn payload() -> &'static [u8] {
    PAYLOAD
}
