//! Well-known CRC parameter sets.
//!
//! Parameters follow the CRC RevEng catalogue; each entry lists its check
//! value, the finalized checksum of the ASCII bytes `"123456789"`.
//!
//! | Preset | Width | Poly | Init | RefIn/Out | XorOut | Check |
//! |--------|-------|------|------|-----------|--------|-------|
//! | [`CRC4_ITU`] | 4 | 0x3 | 0x0 | yes/yes | 0x0 | 0x07 |
//! | [`CRC5_ITU`] | 5 | 0x15 | 0x00 | yes/yes | 0x00 | 0x07 |
//! | [`CRC5_USB`] | 5 | 0x05 | 0x1F | yes/yes | 0x1F | 0x19 |
//! | [`CRC8`] | 8 | 0x07 | 0x00 | no/no | 0x00 | 0xF4 |
//! | [`CRC12_3GPP`] | 12 | 0x80F | 0x000 | no/yes | 0x000 | 0xDAF |
//! | [`CRC12_CDMA2000`] | 12 | 0xF13 | 0xFFF | no/no | 0x000 | 0xD4D |
//! | [`CRC15_CAN`] | 15 | 0x4599 | 0x0000 | no/no | 0x0000 | 0x059E |
//! | [`CRC16_XMODEM`] | 16 | 0x1021 | 0x0000 | no/no | 0x0000 | 0x31C3 |
//! | [`CRC16_X25`] | 16 | 0x1021 | 0xFFFF | yes/yes | 0xFFFF | 0x906E |
//! | [`CRC16_DNP`] | 16 | 0x3D65 | 0x0000 | yes/yes | 0xFFFF | 0xEA82 |
//! | [`CRC16_EN13757`] | 16 | 0x3D65 | 0x0000 | no/no | 0xFFFF | 0xC2B7 |
//! | [`CRC16_DECT_R`] | 16 | 0x0589 | 0x0000 | no/no | 0x0001 | 0x007E |
//! | [`CRC24_OPENPGP`] | 24 | 0x864CFB | 0xB704CE | no/no | 0x000000 | 0x21CF02 |
//! | [`CRC24_BLE`] | 24 | 0x00065B | 0x555555 | yes/yes | 0x000000 | 0xC25A56 |
//! | [`CRC32`] | 32 | 0x04C11DB7 | 0xFFFFFFFF | yes/yes | 0xFFFFFFFF | 0xCBF43926 |
//! | [`CRC32_BZIP2`] | 32 | 0x04C11DB7 | 0xFFFFFFFF | no/no | 0xFFFFFFFF | 0xFC891918 |
//! | [`CRC32_MPEG2`] | 32 | 0x04C11DB7 | 0xFFFFFFFF | no/no | 0x00000000 | 0x0376E6E7 |
//! | [`CRC32_POSIX`] | 32 | 0x04C11DB7 | 0x00000000 | no/no | 0xFFFFFFFF | 0x765E7680 |
//! | [`CRC64_ECMA`] | 64 | 0x42F0E1EBA9EA3693 | 0 | no/no | 0 | 0x6C40DF5F0B497347 |
//! | [`CRC64_XZ`] | 64 | 0x42F0E1EBA9EA3693 | all-ones | yes/yes | all-ones | 0x995DC9BBDF1939FA |
//!
//! The flagship algorithms also come as ready-made hasher types
//! ([`Crc32`][struct@Crc32], [`Crc16Xmodem`], [`Crc16X25`], [`Crc24Ble`],
//! [`Crc64Xz`]) whose lookup tables are shared statics built at compile
//! time.

use traits::Checksum;

use crate::params::Params;
use crate::table::Tabler;

/// Unwrap a catalogue definition; every entry below has a valid width.
const fn preset(width: u32, poly: u64, init: u64, refin: bool, refout: bool, xorout: u64) -> Params {
  match Params::new(width, poly, init, refin, refout, xorout) {
    Ok(params) => params,
    Err(_) => panic!("catalogue parameters must be valid"),
  }
}

/// CRC-4/ITU (G.704).
pub const CRC4_ITU: Params = preset(4, 0x3, 0x0, true, true, 0x0);

/// CRC-5/ITU (G.704).
pub const CRC5_ITU: Params = preset(5, 0x15, 0x00, true, true, 0x00);

/// CRC-5/USB token CRC.
pub const CRC5_USB: Params = preset(5, 0x05, 0x1F, true, true, 0x1F);

/// CRC-8 (SMBus PEC).
pub const CRC8: Params = preset(8, 0x07, 0x00, false, false, 0x00);

/// CRC-12/3GPP (UMTS). Cross-endian: input is unreflected, output reflected.
pub const CRC12_3GPP: Params = preset(12, 0x80F, 0x000, false, true, 0x000);

/// CRC-12/CDMA2000.
pub const CRC12_CDMA2000: Params = preset(12, 0xF13, 0xFFF, false, false, 0x000);

/// CRC-15/CAN.
pub const CRC15_CAN: Params = preset(15, 0x4599, 0x0000, false, false, 0x0000);

/// CRC-16/XMODEM (ZMODEM, Kermit's big-endian cousin).
pub const CRC16_XMODEM: Params = preset(16, 0x1021, 0x0000, false, false, 0x0000);

/// CRC-16/X-25 (HDLC, IBM-SDLC).
pub const CRC16_X25: Params = preset(16, 0x1021, 0xFFFF, true, true, 0xFFFF);

/// CRC-16/DNP (distributed network protocol).
pub const CRC16_DNP: Params = preset(16, 0x3D65, 0x0000, true, true, 0xFFFF);

/// CRC-16/EN-13757 (wireless M-Bus).
pub const CRC16_EN13757: Params = preset(16, 0x3D65, 0x0000, false, false, 0xFFFF);

/// CRC-16/DECT-R (radio channel).
pub const CRC16_DECT_R: Params = preset(16, 0x0589, 0x0000, false, false, 0x0001);

/// CRC-24/OPENPGP (RFC 4880).
pub const CRC24_OPENPGP: Params = preset(24, 0x86_4CFB, 0xB7_04CE, false, false, 0x00_0000);

/// CRC-24/BLE (Bluetooth Low Energy link layer).
pub const CRC24_BLE: Params = preset(24, 0x00_065B, 0x55_5555, true, true, 0x00_0000);

/// CRC-32 (IEEE 802.3; Ethernet, gzip, zip, PNG).
pub const CRC32: Params = preset(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF);

/// CRC-32/BZIP2.
pub const CRC32_BZIP2: Params = preset(32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0xFFFF_FFFF);

/// CRC-32/MPEG-2.
pub const CRC32_MPEG2: Params = preset(32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0x0000_0000);

/// CRC-32/POSIX (`cksum`).
pub const CRC32_POSIX: Params = preset(32, 0x04C1_1DB7, 0x0000_0000, false, false, 0xFFFF_FFFF);

/// CRC-64/ECMA-182 (unreflected; DLT-1 cartridges).
pub const CRC64_ECMA: Params = preset(64, 0x42F0_E1EB_A9EA_3693, 0, false, false, 0);

/// CRC-64/XZ (XZ Utils, 7-Zip).
pub const CRC64_XZ: Params =
  preset(64, 0x42F0_E1EB_A9EA_3693, u64::MAX, true, true, u64::MAX);

// The table path is verified against a catalogue check value at compile
// time; the bitwise path has its own set of assertions.
const _: () = {
  let tabler = Tabler::new(CRC32);
  assert!(tabler.checksum(b"123456789") == 0xCBF4_3926);
};

// ─────────────────────────────────────────────────────────────────────────────
// Ready-made hasher types
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a hasher type over a compile-time-built shared table.
///
/// Each expansion creates:
/// - the struct holding the bare register
/// - a `tabler()` accessor to the shared static table
/// - `Checksum` and `Default` implementations
macro_rules! define_model_type {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      params: $params:expr,
      output: $output:ty,
      size: $size:expr,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Debug)]
    $vis struct $name {
      state: u64,
    }

    impl $name {
      /// The lookup table shared by every instance, built at compile time.
      #[must_use]
      pub fn tabler() -> &'static Tabler {
        static TABLER: Tabler = Tabler::new($params);
        &TABLER
      }
    }

    impl Checksum for $name {
      const OUTPUT_SIZE: usize = $size;
      type Output = $output;

      #[inline]
      fn new() -> Self {
        Self { state: Self::tabler().init() }
      }

      #[inline]
      fn with_initial(initial: $output) -> Self {
        Self { state: Self::tabler().resume(initial as u64) }
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.state = Self::tabler().update_slice(self.state, data);
      }

      #[inline]
      fn finalize(&self) -> $output {
        Self::tabler().finalize(self.state) as $output
      }

      #[inline]
      fn reset(&mut self) {
        self.state = Self::tabler().init();
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        <Self as Checksum>::new()
      }
    }
  };
}

define_model_type! {
  /// CRC-32 (IEEE 802.3) hasher.
  ///
  /// ```rust
  /// use crcmodel::{Checksum, Crc32};
  ///
  /// assert_eq!(Crc32::checksum(b"123456789"), 0xCBF4_3926);
  /// ```
  pub struct Crc32 {
    params: CRC32,
    output: u32,
    size: 4,
  }
}

define_model_type! {
  /// CRC-16/XMODEM hasher.
  pub struct Crc16Xmodem {
    params: CRC16_XMODEM,
    output: u16,
    size: 2,
  }
}

define_model_type! {
  /// CRC-16/X-25 hasher.
  pub struct Crc16X25 {
    params: CRC16_X25,
    output: u16,
    size: 2,
  }
}

define_model_type! {
  /// CRC-24/BLE hasher.
  ///
  /// The 24-bit value is returned in the low bits of a `u32`.
  pub struct Crc24Ble {
    params: CRC24_BLE,
    output: u32,
    size: 3,
  }
}

define_model_type! {
  /// CRC-64/XZ hasher.
  pub struct Crc64Xz {
    params: CRC64_XZ,
    output: u64,
    size: 8,
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
