//! Error types.
//!
//! The domain is pure arithmetic, so the taxonomy is narrow: invalid
//! configuration at construction time, a too-short buffer at the wire
//! boundary, and a failed residue self-check. Nothing here is transient or
//! retryable; every failure is deterministic for the same inputs.

use core::fmt;

/// Invalid Rocksoft model parameters.
///
/// Reported by [`Params::new`](crate::Params::new); parameters are never
/// silently coerced into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParamsError {
  /// The register width is 0 or exceeds 64 bits.
  WidthOutOfRange {
    /// The rejected width.
    width: u32,
  },
}

impl fmt::Display for ParamsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::WidthOutOfRange { width } => {
        write!(f, "crc width {width} outside supported range 1..=64")
      }
    }
  }
}

impl core::error::Error for ParamsError {}

/// A buffer at the wire boundary is too short for the checksum.
///
/// Reported by [`wire::store`](crate::wire::store) and
/// [`wire::load`](crate::wire::load).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum WireError {
  /// The buffer holds fewer bytes than the checksum needs.
  Truncated {
    /// Bytes the checksum occupies on the wire.
    needed: usize,
    /// Bytes actually available.
    available: usize,
  },
}

impl fmt::Display for WireError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Truncated { needed, available } => {
        write!(f, "checksum needs {needed} bytes, buffer holds {available}")
      }
    }
  }
}

impl core::error::Error for WireError {}

/// The residue self-check failed.
///
/// Reported by [`Tabler::verify`](crate::Tabler::verify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum VerifyError {
  /// The parameter set's width is not a multiple of 8, so no residue
  /// constant exists for it and aggregate messages cannot be self-checked.
  UnsupportedWidth {
    /// The non-byte-granular width.
    width: u32,
  },
  /// The finalized CRC over payload plus trailing checksum did not equal
  /// the residue: the aggregate message is corrupted.
  Mismatch,
}

impl fmt::Display for VerifyError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnsupportedWidth { width } => {
        write!(f, "no residue is defined for crc width {width} (not a multiple of 8)")
      }
      Self::Mismatch => f.write_str("crc residue mismatch"),
    }
  }
}

impl core::error::Error for VerifyError {}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  #[test]
  fn params_error_display() {
    let err = ParamsError::WidthOutOfRange { width: 65 };
    assert_eq!(err.to_string(), "crc width 65 outside supported range 1..=64");
  }

  #[test]
  fn wire_error_display() {
    let err = WireError::Truncated { needed: 4, available: 2 };
    assert_eq!(err.to_string(), "checksum needs 4 bytes, buffer holds 2");
  }

  #[test]
  fn verify_error_display() {
    let err = VerifyError::UnsupportedWidth { width: 5 };
    assert_eq!(err.to_string(), "no residue is defined for crc width 5 (not a multiple of 8)");
    assert_eq!(VerifyError::Mismatch.to_string(), "crc residue mismatch");
  }

  #[test]
  fn errors_are_copy_eq() {
    let a = VerifyError::Mismatch;
    let b = a;
    assert_eq!(a, b);
    assert_ne!(VerifyError::Mismatch, VerifyError::UnsupportedWidth { width: 12 });
  }

  #[test]
  fn error_trait_impls() {
    fn assert_error<T: core::error::Error + Send + Sync>() {}
    assert_error::<ParamsError>();
    assert_error::<WireError>();
    assert_error::<VerifyError>();
  }
}
