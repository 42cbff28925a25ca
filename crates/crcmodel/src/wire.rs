//! Canonical on-wire layout of a finalized checksum.
//!
//! A stored CRC occupies `ceil(width / 8)` bytes immediately after the
//! message it covers. The byte order follows the bit order the shift
//! register consumed: least-significant byte first when `refin` is set
//! (little-endian), most-significant byte first otherwise. This asymmetry is
//! deliberate — store a reflected algorithm's checksum big-endian and the
//! receiver's residue self-check breaks, even though every per-byte
//! computation agrees.
//!
//! For widths that are not a multiple of 8 the stored value includes padding
//! bits and is not a faithful wire image; see [`Tabler::residue`](crate::Tabler::residue).

use crate::error::WireError;
use crate::params::Params;

/// Store a finalized checksum into the space following a message.
///
/// Writes [`Params::size`] bytes at the front of `out` and returns the
/// remainder of the buffer, mirroring a write cursor advancing past the
/// checksum.
///
/// # Errors
///
/// [`WireError::Truncated`] when `out` is shorter than the checksum.
pub fn store<'a>(params: &Params, crc: u64, out: &'a mut [u8]) -> Result<&'a mut [u8], WireError> {
  let size = params.size();
  if out.len() < size {
    return Err(WireError::Truncated { needed: size, available: out.len() });
  }
  let (dst, rest) = out.split_at_mut(size);

  if params.refin() {
    let mut crc = crc;
    for slot in dst.iter_mut() {
      *slot = crc as u8;
      crc >>= 8;
    }
  } else {
    for (i, slot) in dst.iter_mut().enumerate() {
      *slot = (crc >> (8 * (size - 1 - i))) as u8;
    }
  }
  Ok(rest)
}

/// Read a stored checksum back out of a buffer.
///
/// Consumes [`Params::size`] bytes from the front of `bytes` in the same
/// byte order [`store`] wrote them.
///
/// # Errors
///
/// [`WireError::Truncated`] when `bytes` is shorter than the checksum.
pub fn load(params: &Params, bytes: &[u8]) -> Result<u64, WireError> {
  let size = params.size();
  let Some(src) = bytes.get(..size) else {
    return Err(WireError::Truncated { needed: size, available: bytes.len() });
  };

  let mut crc = 0u64;
  if params.refin() {
    for (i, &byte) in src.iter().enumerate() {
      crc |= (byte as u64) << (8 * i);
    }
  } else {
    for &byte in src {
      crc = (crc << 8) | byte as u64;
    }
  }
  Ok(crc & params.mask())
}

/// Fixed-buffer variant of [`store`] usable in `const` context.
///
/// The residue computation inside [`Tabler::new`](crate::Tabler::new) stores
/// the empty-message checksum into a scratch buffer at table-construction
/// time, which may be compile time.
#[allow(clippy::indexing_slicing)] // indices bounded by size <= 8
pub(crate) const fn store_fixed(params: &Params, crc: u64, buf: &mut [u8; 8]) {
  let size = params.size();
  let mut i = 0;
  if params.refin() {
    let mut crc = crc;
    while i < size {
      buf[i] = crc as u8;
      crc >>= 8;
      i += 1;
    }
  } else {
    while i < size {
      buf[i] = (crc >> (8 * (size - 1 - i))) as u8;
      i += 1;
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog;

  #[test]
  fn reflected_algorithms_store_little_endian() {
    let mut buf = [0u8; 4];
    store(&catalog::CRC32, 0xCBF4_3926, &mut buf).unwrap();
    assert_eq!(buf, [0x26, 0x39, 0xF4, 0xCB]);
  }

  #[test]
  fn unreflected_algorithms_store_big_endian() {
    let mut buf = [0u8; 2];
    store(&catalog::CRC16_XMODEM, 0x31C3, &mut buf).unwrap();
    assert_eq!(buf, [0x31, 0xC3]);
  }

  #[test]
  fn store_returns_buffer_tail() {
    let mut buf = [0u8; 6];
    let rest = store(&catalog::CRC16_X25, 0x906E, &mut buf).unwrap();
    assert_eq!(rest.len(), 4);
    assert_eq!(buf[..2], [0x6E, 0x90]);
  }

  #[test]
  fn store_rejects_short_buffers() {
    let mut buf = [0u8; 3];
    assert_eq!(
      store(&catalog::CRC32, 0, &mut buf),
      Err(WireError::Truncated { needed: 4, available: 3 })
    );
  }

  #[test]
  fn load_round_trips_store() {
    for (params, crc) in [
      (catalog::CRC8, 0xF4u64),
      (catalog::CRC16_XMODEM, 0x31C3),
      (catalog::CRC16_X25, 0x906E),
      (catalog::CRC24_BLE, 0xC2_5A56),
      (catalog::CRC32, 0xCBF4_3926),
      (catalog::CRC64_XZ, 0x995D_C9BB_DF19_39FA),
    ] {
      let mut buf = [0u8; 8];
      store(&params, crc, &mut buf).unwrap();
      assert_eq!(load(&params, &buf).unwrap(), crc, "width {}", params.width());
    }
  }

  #[test]
  fn load_rejects_short_buffers() {
    assert_eq!(
      load(&catalog::CRC64_XZ, &[0u8; 7]),
      Err(WireError::Truncated { needed: 8, available: 7 })
    );
  }

  #[test]
  fn store_fixed_matches_store() {
    for (params, crc) in [(catalog::CRC16_DNP, 0xEA82u64), (catalog::CRC32_POSIX, 0x765E_7680)] {
      let mut fixed = [0u8; 8];
      store_fixed(&params, crc, &mut fixed);
      let mut slice = [0u8; 8];
      store(&params, crc, &mut slice).unwrap();
      assert_eq!(fixed, slice);
    }
  }
}
