//! Bitwise reference implementation of the parameterized model.
//!
//! This module is the canonical "source of truth" for the crate: it computes
//! checksums one bit at a time, straight from the mathematical definition,
//! with no lookup tables. The table-driven engine in [`crate::Tabler`] must
//! produce identical results for every parameter set.
//!
//! The register here is always in normal (unreflected) bit order; input
//! bytes are reflected before application when `refin` is set, and
//! [`finalize`] reflects the register when `refout` is set. That differs
//! from the table-driven engine, whose register lives in the *input*
//! reflection's coordinate system — but the finalized values agree.
//!
//! Intentionally slow (~8 operations per bit). Use for:
//! - Correctness verification
//! - Test oracles
//! - Generating expected values
//! - Targets where a 256-entry table is unwelcome

// All array indexing uses bounded loop indices (0..data.len()). Clippy
// cannot prove this in const fn contexts, but bounds are statically
// guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::bits;
use crate::params::Params;

/// Apply message bytes to an unreflected register.
///
/// Start from [`Params::init`]; the returned register may be passed back in
/// to process further message content.
#[must_use]
pub const fn append(params: &Params, crc: u64, data: &[u8]) -> u64 {
  let mut rv = crc;
  let mut i = 0;
  while i < data.len() {
    let mut chunk = data[i] as u64;
    if params.refin() {
      chunk = bits::reflect(chunk, 8);
    }
    rv = bits::crc_apply(params.poly(), rv, chunk, 8, params.width());
    i += 1;
  }
  rv
}

/// Apply output reflection and the final XOR to a register.
#[must_use]
pub const fn finalize(params: &Params, crc: u64) -> u64 {
  let mut crc = crc;
  if params.refout() {
    crc = bits::reflect(crc, params.width());
  }
  (crc ^ params.xorout()) & params.mask()
}

/// Compute the finalized checksum of `data` in one shot.
#[must_use]
pub const fn checksum(params: &Params, data: &[u8]) -> u64 {
  finalize(params, append(params, params.init(), data))
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

// These const assertions verify the reference implementation against known
// catalogue check values at compile time. If these fail, the build fails.

/// Standard test input for CRC check values.
#[cfg(any(test, doc))]
pub const CHECK_INPUT: &[u8] = b"123456789";

const _: () = {
  use crate::catalog;
  assert!(checksum(&catalog::CRC32, b"123456789") == 0xCBF4_3926);
  assert!(checksum(&catalog::CRC16_XMODEM, b"123456789") == 0x31C3);
  assert!(checksum(&catalog::CRC16_X25, b"123456789") == 0x906E);
  assert!(checksum(&catalog::CRC64_XZ, b"123456789") == 0x995D_C9BB_DF19_39FA);
};

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
