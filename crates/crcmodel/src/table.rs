//! Table-driven CRC engine.
//!
//! [`Tabler`] packages everything needed for fast per-byte checksum updates
//! of one parameter set: the 256-entry lookup table, the pre-reflected
//! initial register, and the precomputed residue constant. It is built once
//! (possibly at compile time) and is thereafter read-only — safe to share
//! across any number of threads or concurrent accumulations without
//! locking.
//!
//! The register travels through `update` calls as a bare `u64`; the table's
//! coordinate system matches the input bit order, so reflected algorithms
//! shift right and unreflected ones shift left. [`Digest`] wraps the
//! register for callers that prefer a streaming object.

// Table indices are masked to 0..=255 and scratch indices bounded by the
// 8-byte checksum maximum; clippy cannot see this through const fn.
#![allow(clippy::indexing_slicing)]

use crate::bits;
use crate::error::{VerifyError, WireError};
use crate::params::Params;
use crate::tier::Tier;
use crate::wire;

/// Lookup table storage, tagged by width tier.
///
/// Entry `i` is the register contribution of input byte `i`, stored in the
/// smallest native unsigned type that holds the width.
enum Entries {
  B8([u8; 256]),
  B16([u16; 256]),
  B32([u32; 256]),
  B64([u64; 256]),
}

/// Compute one lookup table entry: the effective register contribution of a
/// single input byte fed through the width-bit shift register from a zero
/// remainder.
///
/// When `refin` is set the byte is reflected before division (the register
/// consumes least-significant bits first) and the result is reflected after
/// it, so the stored entry already lives in the reflected coordinate system
/// the update step operates in.
const fn lookup_for_byte(params: &Params, byte: u8) -> u64 {
  let mut chunk = byte as u64;
  if params.refin() {
    chunk = bits::reflect(chunk, 8);
  }
  let mut rv = bits::crc_apply(params.poly(), 0, chunk, 8, params.width());
  if params.refin() {
    rv = bits::reflect(rv, params.width());
  }
  rv & params.mask()
}

const fn build_entries(params: &Params) -> Entries {
  match params.tier() {
    Tier::B8 => {
      let mut table = [0u8; 256];
      let mut i = 0;
      while i < 256 {
        table[i] = lookup_for_byte(params, i as u8) as u8;
        i += 1;
      }
      Entries::B8(table)
    }
    Tier::B16 => {
      let mut table = [0u16; 256];
      let mut i = 0;
      while i < 256 {
        table[i] = lookup_for_byte(params, i as u8) as u16;
        i += 1;
      }
      Entries::B16(table)
    }
    Tier::B32 => {
      let mut table = [0u32; 256];
      let mut i = 0;
      while i < 256 {
        table[i] = lookup_for_byte(params, i as u8) as u32;
        i += 1;
      }
      Entries::B32(table)
    }
    Tier::B64 => {
      let mut table = [0u64; 256];
      let mut i = 0;
      while i < 256 {
        table[i] = lookup_for_byte(params, i as u8);
        i += 1;
      }
      Entries::B64(table)
    }
  }
}

const fn entry_of(entries: &Entries, index: usize) -> u64 {
  match entries {
    Entries::B8(t) => t[index] as u64,
    Entries::B16(t) => t[index] as u64,
    Entries::B32(t) => t[index] as u64,
    Entries::B64(t) => t[index],
  }
}

/// One table-driven register update.
///
/// Reflected algorithms index with the register's low byte and shift right;
/// unreflected ones index with the top byte and shift left. An unreflected
/// register narrower than 8 bits cannot absorb a whole octet through a
/// byte-indexed table, so that case runs the division primitive directly.
const fn update_with(params: &Params, entries: &Entries, crc: u64, octet: u8) -> u64 {
  let crc = if params.refin() {
    entry_of(entries, ((crc ^ octet as u64) & 0xFF) as usize) ^ (crc >> 8)
  } else if params.width() >= 8 {
    let index = ((crc >> (params.width() - 8)) ^ octet as u64) & 0xFF;
    entry_of(entries, index as usize) ^ (crc << 8)
  } else {
    bits::crc_apply(params.poly(), crc, octet as u64, 8, params.width())
  };
  crc & params.mask()
}

/// Post-processing of a table-coordinate register into the finalized value.
///
/// The table keeps the register in the input reflection's bit order, so only
/// a cross-endian parameter set (`refin != refout`) needs the corrective
/// reflection here; the XOR mask is applied after.
const fn finalize_with(params: &Params, crc: u64) -> u64 {
  let mut crc = crc;
  if params.refin() != params.refout() {
    crc = bits::reflect(crc, params.width());
  }
  (crc ^ params.xorout()) & params.mask()
}

/// Everything needed for table-driven CRC calculations of one algorithm.
///
/// # Example
///
/// ```rust
/// use crcmodel::{catalog, Tabler};
///
/// let tabler = Tabler::new(catalog::CRC16_XMODEM);
/// assert_eq!(tabler.checksum(b"123456789"), 0x31C3);
/// ```
///
/// Tables for algorithms fixed at build time can live in statics:
///
/// ```rust
/// use crcmodel::{catalog, Tabler};
///
/// static XMODEM: Tabler = Tabler::new(catalog::CRC16_XMODEM);
/// assert_eq!(XMODEM.entry(1), 0x1021);
/// ```
pub struct Tabler {
  params: Params,
  init: u64,
  residue: Option<u64>,
  entries: Entries,
}

impl Tabler {
  /// Build the lookup table for `params`.
  ///
  /// A pure function of the six parameters: rebuilding from an equal
  /// parameter set yields an identical table.
  #[must_use]
  pub const fn new(params: Params) -> Self {
    let entries = build_entries(&params);
    let init = if params.refin() {
      bits::reflect(params.init(), params.width())
    } else {
      params.init()
    };

    // Residue: the finalized CRC of an empty message, stored after it and
    // fed back through a fresh accumulation. Only meaningful when the
    // checksum occupies whole bytes.
    let residue = if params.width() % 8 == 0 {
      let empty = finalize_with(&params, init);
      let mut trailer = [0u8; 8];
      wire::store_fixed(&params, empty, &mut trailer);
      let mut reg = init;
      let mut i = 0;
      while i < params.size() {
        reg = update_with(&params, &entries, reg, trailer[i]);
        i += 1;
      }
      Some(finalize_with(&params, reg))
    } else {
      None
    };

    Self { params, init, residue, entries }
  }

  /// The parameter set this table was built from.
  #[must_use]
  pub const fn params(&self) -> &Params {
    &self.params
  }

  /// The initial register value for table calculations: the configured
  /// `init`, pre-reflected when `refin` is set (the table already operates
  /// in reflected bit order).
  #[must_use]
  pub const fn init(&self) -> u64 {
    self.init
  }

  /// Lookup table entry for input byte `index`.
  ///
  /// Exposed so fixed algorithms' tables can be exported or compared as
  /// plain constant data.
  #[must_use]
  pub const fn entry(&self, index: u8) -> u64 {
    entry_of(&self.entries, index as usize)
  }

  /// The value [`finalize`](Self::finalize) yields over any message that
  /// carries its own [`store`](Self::store)d checksum, or `None` when
  /// `width` is not a multiple of 8.
  ///
  /// Unlike the classic catalogue residue, this value reflects `xorout`
  /// (the catalogue computes its residue without the final XOR applied), so
  /// it compares directly against finalized checksums and will differ from
  /// the catalogue's residue column for algorithms with a non-zero
  /// `xorout`.
  #[must_use]
  pub const fn residue(&self) -> Option<u64> {
    self.residue
  }

  /// Feed one message byte into a register.
  ///
  /// Start from [`init`](Self::init); any `u8` is valid input and there is
  /// no error state.
  #[must_use]
  pub const fn update(&self, crc: u64, octet: u8) -> u64 {
    update_with(&self.params, &self.entries, crc, octet)
  }

  /// Feed a slice of message bytes into a register.
  ///
  /// The returned register may be captured mid-stream and extended later;
  /// `update_slice(update_slice(r, a), b)` equals `update_slice(r, a ++ b)`.
  #[must_use]
  pub const fn update_slice(&self, crc: u64, data: &[u8]) -> u64 {
    let mut reg = crc;
    let mut i = 0;
    while i < data.len() {
      reg = update_with(&self.params, &self.entries, reg, data[i]);
      i += 1;
    }
    reg
  }

  /// Feed any iterator of bytes into a register.
  #[must_use]
  pub fn update_iter<I>(&self, crc: u64, bytes: I) -> u64
  where
    I: IntoIterator<Item = u8>,
  {
    let mut reg = crc;
    for byte in bytes {
      reg = self.update(reg, byte);
    }
    reg
  }

  /// Apply output reflection and the final XOR to a register.
  #[must_use]
  pub const fn finalize(&self, crc: u64) -> u64 {
    finalize_with(&self.params, crc)
  }

  /// Invert [`finalize`](Self::finalize): recover the register that would
  /// finalize to `crc`, for resuming a computation from a stored checksum.
  #[must_use]
  pub const fn resume(&self, crc: u64) -> u64 {
    let mut reg = (crc & self.params.mask()) ^ self.params.xorout();
    if self.params.refin() != self.params.refout() {
      reg = bits::reflect(reg, self.params.width());
    }
    reg
  }

  /// Compute the finalized checksum of `data` in one shot.
  #[must_use]
  pub const fn checksum(&self, data: &[u8]) -> u64 {
    self.finalize(self.update_slice(self.init, data))
  }

  /// Store a finalized checksum into the space following its message, in
  /// the byte order required for [`verify`](Self::verify) to hold.
  ///
  /// Returns the unused remainder of `out`.
  ///
  /// # Errors
  ///
  /// [`WireError::Truncated`] when `out` is shorter than the checksum.
  pub fn store<'a>(&self, crc: u64, out: &'a mut [u8]) -> Result<&'a mut [u8], WireError> {
    wire::store(&self.params, crc, out)
  }

  /// Read a stored checksum back from the front of `bytes`.
  ///
  /// # Errors
  ///
  /// [`WireError::Truncated`] when `bytes` is shorter than the checksum.
  pub fn load(&self, bytes: &[u8]) -> Result<u64, WireError> {
    wire::load(&self.params, bytes)
  }

  /// Self-check an aggregate message (payload followed by its stored
  /// checksum).
  ///
  /// # Errors
  ///
  /// - [`VerifyError::UnsupportedWidth`] when no residue exists for this
  ///   width (not a multiple of 8).
  /// - [`VerifyError::Mismatch`] when the aggregate does not finalize to
  ///   the residue, i.e. the message or its trailer is corrupted.
  pub fn verify(&self, frame: &[u8]) -> Result<(), VerifyError> {
    let Some(residue) = self.residue else {
      return Err(VerifyError::UnsupportedWidth { width: self.params.width() });
    };
    if self.finalize(self.update_slice(self.init, frame)) == residue {
      Ok(())
    } else {
      Err(VerifyError::Mismatch)
    }
  }

  /// Create a streaming accumulator borrowing this table.
  #[must_use]
  pub const fn digest(&self) -> Digest<'_> {
    Digest { tabler: self, reg: self.init }
  }
}

/// Streaming accumulator over a [`Tabler`].
///
/// Holds nothing beyond the register value; trivially copyable, and two
/// digests over the same table are fully independent.
#[derive(Clone, Copy, Debug)]
pub struct Digest<'a> {
  tabler: &'a Tabler,
  reg: u64,
}

impl Digest<'_> {
  /// Update the accumulator with additional data.
  pub fn update(&mut self, data: &[u8]) {
    self.reg = self.tabler.update_slice(self.reg, data);
  }

  /// Finalize and return the checksum without consuming the accumulator.
  #[must_use]
  pub const fn finalize(&self) -> u64 {
    self.tabler.finalize(self.reg)
  }

  /// The raw register value, for capturing a computation mid-stream.
  #[must_use]
  pub const fn register(&self) -> u64 {
    self.reg
  }

  /// Reset to the initial state.
  pub fn reset(&mut self) {
    self.reg = self.tabler.init();
  }
}

impl core::fmt::Debug for Tabler {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Tabler")
      .field("params", &self.params)
      .field("init", &self.init)
      .field("residue", &self.residue)
      .finish_non_exhaustive()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
