//! Basic engine usage: one-shot, streaming, and framed self-verification.
//!
//! Run with: `cargo run --example basic -p crcmodel`

use crcmodel::{catalog, Checksum, Crc32, Params, Tabler};

fn main() {
  println!("=== crcmodel Basic Examples ===\n");

  one_shot_examples();
  streaming_example();
  frame_example();
  custom_params_example();
}

/// One-shot computation with catalogued parameter sets.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  let data = b"123456789";

  let crc32 = Tabler::new(catalog::CRC32).checksum(data);
  println!("CRC-32:        0x{crc32:08X}");
  assert_eq!(crc32, 0xCBF4_3926);

  let xmodem = Tabler::new(catalog::CRC16_XMODEM).checksum(data);
  println!("CRC-16/XMODEM: 0x{xmodem:04X}");
  assert_eq!(xmodem, 0x31C3);

  let xz = Tabler::new(catalog::CRC64_XZ).checksum(data);
  println!("CRC-64/XZ:     0x{xz:016X}");
  assert_eq!(xz, 0x995D_C9BB_DF19_39FA);

  println!();
}

/// Streaming computation through the ready-made hasher types.
fn streaming_example() {
  println!("--- Streaming Computation ---\n");

  let mut hasher = Crc32::new();
  hasher.update(b"1234");
  hasher.update(b"56789");
  let crc = hasher.finalize();
  println!("CRC-32 (streamed): 0x{crc:08X}");
  assert_eq!(crc, Crc32::checksum(b"123456789"));

  println!();
}

/// Append a checksum to a message and self-verify the aggregate.
fn frame_example() {
  println!("--- Framed Message Verification ---\n");

  let tabler = Tabler::new(catalog::CRC16_X25);
  let payload = b"framed payload";

  let mut frame = [0u8; 16];
  frame[..payload.len()].copy_from_slice(payload);
  let crc = tabler.checksum(payload);
  tabler
    .store(crc, &mut frame[payload.len()..])
    .expect("frame has room for the checksum");

  println!("frame: {frame:02X?}");
  match tabler.verify(&frame) {
    Ok(()) => println!("residue check passed"),
    Err(err) => println!("residue check failed: {err}"),
  }
  assert!(tabler.verify(&frame).is_ok());

  // A corrupted frame fails the check.
  let mut corrupt = frame;
  corrupt[3] ^= 0x01;
  assert!(tabler.verify(&corrupt).is_err());

  println!();
}

/// Any width from 1 to 64 bits works, not just the catalogue.
fn custom_params_example() {
  println!("--- Custom Parameter Set ---\n");

  let params = Params::new(21, 0x10_2899, 0, false, false, 0).expect("valid width");
  let tabler = Tabler::new(params);
  let crc = tabler.checksum(b"custom polynomial");
  println!("CRC-21: 0x{crc:06X}");
  assert_eq!(crc & !params.mask(), 0);
}
