//! Rocksoft model parameter sets.

use crate::bits;
use crate::error::ParamsError;
use crate::tier::Tier;

/// An immutable CRC algorithm description.
///
/// Six values fully determine one named CRC algorithm:
///
/// | Field | Meaning |
/// |-------|---------|
/// | `width` | Register width in bits, 1..=64 |
/// | `poly` | Generator polynomial in normal form (low `width` bits) |
/// | `init` | Register value before any message bits are processed |
/// | `refin` | Consume input bytes least-significant bit first |
/// | `refout` | Bit-reverse the register before the final XOR |
/// | `xorout` | Mask XORed into the finalized value |
///
/// `poly`, `init`, and `xorout` are masked to `width` bits at construction;
/// a width outside `1..=64` is rejected with [`ParamsError`], never coerced.
///
/// # Example
///
/// ```rust
/// use crcmodel::Params;
///
/// // CRC-16/XMODEM
/// let params = Params::new(16, 0x1021, 0, false, false, 0).unwrap();
/// assert_eq!(params.size(), 2);
///
/// assert!(Params::new(65, 0x1021, 0, false, false, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Params {
  width: u32,
  poly: u64,
  init: u64,
  refin: bool,
  refout: bool,
  xorout: u64,
}

impl Params {
  /// Construct a parameter set, masking `poly`, `init`, and `xorout` to
  /// `width` bits.
  ///
  /// # Errors
  ///
  /// [`ParamsError::WidthOutOfRange`] when `width` is 0 or exceeds 64.
  pub const fn new(
    width: u32,
    poly: u64,
    init: u64,
    refin: bool,
    refout: bool,
    xorout: u64,
  ) -> Result<Self, ParamsError> {
    if width == 0 || width > 64 {
      return Err(ParamsError::WidthOutOfRange { width });
    }
    let mask = bits::mask_for_bits(width);
    Ok(Self {
      width,
      poly: poly & mask,
      init: init & mask,
      refin,
      refout,
      xorout: xorout & mask,
    })
  }

  /// Register width in bits.
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  /// Generator polynomial in normal form.
  #[must_use]
  pub const fn poly(&self) -> u64 {
    self.poly
  }

  /// Initial register value, before input reflection.
  #[must_use]
  pub const fn init(&self) -> u64 {
    self.init
  }

  /// `true` when input bytes are consumed least-significant bit first.
  #[must_use]
  pub const fn refin(&self) -> bool {
    self.refin
  }

  /// `true` when the final register is bit-reversed before the output XOR.
  #[must_use]
  pub const fn refout(&self) -> bool {
    self.refout
  }

  /// Mask XORed into the finalized value.
  #[must_use]
  pub const fn xorout(&self) -> u64 {
    self.xorout
  }

  /// Mask that discards bits at or above `width`.
  #[must_use]
  pub const fn mask(&self) -> u64 {
    bits::mask_for_bits(self.width)
  }

  /// The checksum's stored size in bytes: `ceil(width / 8)`.
  #[must_use]
  pub const fn size(&self) -> usize {
    ((self.width as usize) + 7) / 8
  }

  /// Storage tier for this width.
  #[must_use]
  pub const fn tier(&self) -> Tier {
    Tier::for_width(self.width)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejects_invalid_widths() {
    assert_eq!(
      Params::new(0, 0x07, 0, false, false, 0),
      Err(ParamsError::WidthOutOfRange { width: 0 })
    );
    assert_eq!(
      Params::new(65, 0x07, 0, false, false, 0),
      Err(ParamsError::WidthOutOfRange { width: 65 })
    );
  }

  #[test]
  fn accepts_width_bounds() {
    assert!(Params::new(1, 1, 0, true, true, 0).is_ok());
    assert!(Params::new(64, 0x42F0_E1EB_A9EA_3693, 0, false, false, 0).is_ok());
  }

  #[test]
  fn masks_parameters_to_width() {
    let p = Params::new(8, 0xFFFF_FF07, 0xABCD, false, false, 0x1FF).unwrap();
    assert_eq!(p.poly(), 0x07);
    assert_eq!(p.init(), 0xCD);
    assert_eq!(p.xorout(), 0xFF);
  }

  #[test]
  fn all_ones_shorthand_masks_down() {
    // `u64::MAX` is the conventional way to say "all bits set"; masking
    // turns it into the width's all-ones value.
    let p = Params::new(16, 0x1021, u64::MAX, true, true, u64::MAX).unwrap();
    assert_eq!(p.init(), 0xFFFF);
    assert_eq!(p.xorout(), 0xFFFF);
  }

  #[test]
  fn size_rounds_up() {
    for (width, size) in [(1, 1), (5, 1), (8, 1), (12, 2), (16, 2), (24, 3), (32, 4), (64, 8)] {
      let p = Params::new(width, 1, 0, false, false, 0).unwrap();
      assert_eq!(p.size(), size, "width {width}");
    }
  }
}
