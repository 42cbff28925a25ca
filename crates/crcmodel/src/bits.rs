//! Bit-level primitives shared by the table builder and the bitwise engine.
//!
//! Three operations underpin the whole crate:
//!
//! - [`mask_for_bits`] — a low-`n`-bits mask that is safe at the full
//!   operating width (shifting a `u64` by 64 is guarded by an explicit
//!   branch, never left to shift semantics).
//! - [`reflect`] — reverse the low `n` bits of a value, the "reflection"
//!   the Rocksoft model applies to input bytes and output registers.
//! - [`crc_apply`] — the polynomial long-division step in GF(2): feed `n`
//!   message bits through a `width`-bit shift register, XORing the
//!   polynomial whenever a set bit falls off the top.
//!
//! `crc_apply` is linear (XOR-additive) in its message argument, which is
//! what makes the byte-indexed lookup table in [`crate::Tabler`] valid: each
//! byte's contribution can be precomputed from a zero register and folded in
//! later.

/// Return a value with the low `n` bits set.
///
/// `n` may be the full width of the operating type; `n == 64` is handled by
/// an explicit branch rather than shift wraparound.
#[must_use]
pub const fn mask_for_bits(n: u32) -> u64 {
  if n >= u64::BITS { u64::MAX } else { (1u64 << n) - 1 }
}

/// Reverse bits `[0, n)` of `v`.
///
/// Bit `n - 1` and bit 0 swap, bit `n - 2` and bit 1 swap, and so on. Bits
/// at or above `n` are discarded. `n` must be in `1..=64`.
///
/// The scan walks a most-significant-bit cursor down while a
/// least-significant-bit cursor walks up; when the falling cursor reaches
/// zero every valid bit has been placed.
#[must_use]
pub const fn reflect(v: u64, n: u32) -> u64 {
  let mut msb = 1u64 << (n - 1);
  let mut lsb = 1u64;
  let mut out = 0u64;

  while msb != 0 {
    if v & msb != 0 {
      out |= lsb;
    }
    msb >>= 1;
    lsb = lsb.wrapping_shl(1);
  }
  out
}

/// Apply `n` message bits to a `width`-bit CRC register.
///
/// `msg` carries its first (earliest) bit in bit `n - 1` and its last bit in
/// bit 0; callers consuming reflected input reflect the chunk before calling.
/// `n` may exceed `width` (a sub-byte register fed a full octet); the excess
/// is processed in leading `width`-bit slices first, exactly as a hardware
/// shift register would consume them.
///
/// Returns the register masked to `width` bits.
#[must_use]
pub const fn crc_apply(poly: u64, crc: u64, msg: u64, n: u32, width: u32) -> u64 {
  let mut rv = crc;
  let mut msg = msg;
  let mut n = n;
  while n > width {
    let lead = msg >> (n - width);
    rv = apply_aligned(poly, rv, lead, width, width);
    n -= width;
  }
  apply_aligned(poly, rv, msg, n, width)
}

/// One aligned division step: `n <= width` message bits, first bit shifted
/// to the top of the register window.
const fn apply_aligned(poly: u64, crc: u64, msg: u64, n: u32, width: u32) -> u64 {
  let mask = mask_for_bits(width);
  if n == 0 {
    return crc & mask;
  }

  let msbit = 1u64 << (width - 1);
  let mut rv = crc ^ ((msg & mask_for_bits(n)) << (width - n));
  let mut bi = 0;
  while bi < n {
    let xor_poly = rv & msbit != 0;
    rv <<= 1;
    if xor_poly {
      rv ^= poly;
    }
    bi += 1;
  }
  rv & mask
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn mask_for_bits_values() {
    assert_eq!(mask_for_bits(0), 0);
    assert_eq!(mask_for_bits(1), 0x1);
    assert_eq!(mask_for_bits(8), 0xFF);
    assert_eq!(mask_for_bits(32), 0xFFFF_FFFF);
    assert_eq!(mask_for_bits(63), u64::MAX >> 1);
    assert_eq!(mask_for_bits(64), u64::MAX);
  }

  #[test]
  fn mask_is_fixed_point_within_width() {
    // Masking never changes a value already within the width, and always
    // clears bits at or above it.
    for width in 1..=64u32 {
      let mask = mask_for_bits(width);
      let inside = 0xA5A5_A5A5_A5A5_A5A5u64 & mask;
      assert_eq!(inside & mask, inside);
      if width < 64 {
        let outside = 1u64 << width;
        assert_eq!(outside & mask, 0);
      }
    }
  }

  #[test]
  fn reflect_known_values() {
    assert_eq!(reflect(0b1, 1), 0b1);
    assert_eq!(reflect(0b01, 2), 0b10);
    assert_eq!(reflect(0xE0, 8), 0x07);
    // The CRC-32 polynomial and its familiar reflected form.
    assert_eq!(reflect(0x04C1_1DB7, 32), 0xEDB8_8320);
    // CRC-64/XZ polynomial.
    assert_eq!(reflect(0x42F0_E1EB_A9EA_3693, 64), 0xC96C_5795_D787_0F42);
  }

  #[test]
  fn reflect_is_involution() {
    let samples = [0u64, 1, 0xFF, 0xDEAD_BEEF, u64::MAX, 0x0123_4567_89AB_CDEF];
    for n in 1..=64u32 {
      for &v in &samples {
        let v = v & mask_for_bits(n);
        assert_eq!(reflect(reflect(v, n), n), v, "n = {n}, v = {v:#x}");
      }
    }
  }

  #[test]
  fn reflect_discards_high_bits() {
    // Bits at or above `n` do not leak into the result.
    assert_eq!(reflect(0xFF00 | 0b01, 2), 0b10);
  }

  #[test]
  fn crc_apply_zero_message_zero_register() {
    assert_eq!(crc_apply(0x07, 0, 0, 8, 8), 0);
    assert_eq!(crc_apply(0x04C1_1DB7, 0, 0, 32, 32), 0);
  }

  #[test]
  fn crc_apply_single_byte_crc8() {
    // CRC-8 (poly 0x07): feeding 0x01 through a zero register gives 0x07,
    // since the single set bit exits the top after 8 shifts and XORs once.
    assert_eq!(crc_apply(0x07, 0, 0x01, 8, 8), 0x07);
  }

  #[test]
  fn crc_apply_splits_oversized_chunks() {
    // Feeding 8 bits into a 4-bit register must equal feeding the two
    // nibbles in order.
    let poly = 0x3;
    let byte = 0xA5u64;
    let whole = crc_apply(poly, 0, byte, 8, 4);
    let hi = crc_apply(poly, 0, byte >> 4, 4, 4);
    let split = crc_apply(poly, hi, byte & 0xF, 4, 4);
    assert_eq!(whole, split);
  }

  #[test]
  fn crc_apply_is_linear_in_message() {
    // crc_apply(poly, 0, a ^ b) == crc_apply(poly, 0, a) ^ crc_apply(poly, 0, b)
    // for a zero starting register. This is the property the lookup table
    // construction relies on.
    let poly = 0x04C1_1DB7;
    for (a, b) in [(0x12u64, 0x34u64), (0xFF, 0x0F), (0x80, 0x01)] {
      let lhs = crc_apply(poly, 0, a ^ b, 8, 32);
      let rhs = crc_apply(poly, 0, a, 8, 32) ^ crc_apply(poly, 0, b, 8, 32);
      assert_eq!(lhs, rhs);
    }
  }

  #[test]
  fn crc_apply_full_width_64() {
    // Exercise the width == 64 path where the mask and top-bit probe sit at
    // the operating type's limits.
    let poly = 0x42F0_E1EB_A9EA_3693;
    let out = crc_apply(poly, u64::MAX, 0xAB, 8, 64);
    assert_eq!(out, crc_apply(poly, u64::MAX, 0xAB, 8, 64));
    assert_ne!(out, 0);
  }
}
