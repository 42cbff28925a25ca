//! Differential fuzzing against the `crc` crate.
//!
//! Compares our table-driven engine against a well-established independent
//! implementation to catch any discrepancies.

#![no_main]

use crcmodel::{catalog, Tabler};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  test_crc32_differential(data);
  test_crc16_differential(data);
  test_crc64_differential(data);
});

fn test_crc32_differential(data: &[u8]) {
  let ours = Tabler::new(catalog::CRC32).checksum(data);
  let reference = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC).checksum(data) as u64;

  assert_eq!(
    ours,
    reference,
    "CRC-32 differential mismatch: ours={:#010x}, reference={:#010x}, len={}",
    ours,
    reference,
    data.len()
  );
}

fn test_crc16_differential(data: &[u8]) {
  let ours = Tabler::new(catalog::CRC16_X25).checksum(data);
  let reference = crc::Crc::<u16>::new(&crc::CRC_16_IBM_SDLC).checksum(data) as u64;

  assert_eq!(
    ours,
    reference,
    "CRC-16/X-25 differential mismatch: ours={:#06x}, reference={:#06x}, len={}",
    ours,
    reference,
    data.len()
  );
}

fn test_crc64_differential(data: &[u8]) {
  let ours = Tabler::new(catalog::CRC64_XZ).checksum(data);
  let reference = crc::Crc::<u64>::new(&crc::CRC_64_XZ).checksum(data);

  assert_eq!(
    ours,
    reference,
    "CRC-64/XZ differential mismatch: ours={:#018x}, reference={:#018x}, len={}",
    ours,
    reference,
    data.len()
  );
}
