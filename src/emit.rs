//! Copies the embedded payload to an output stream, verbatim.

use std::io::Write;

/// Writes `payload` to `out` in order, unmodified. No framing, no trailing
/// additions; an empty payload writes nothing.
pub fn emit<W: Write>(payload: &[u8], out: &mut W) -> std::io::Result<()> {
    out.write_all(payload)?;
    out.flush()
}
