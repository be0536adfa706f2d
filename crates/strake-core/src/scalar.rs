//! Scalar precision abstraction.
//!
//! Every aggregate shape is generic over [`Scalar`], which is
//! implemented for exactly `f32` and `f64` and sealed against further
//! implementations: the layout catalog, the offset validator, and the
//! fast backend's word-copy arithmetic all assume these two widths.

use std::fmt;

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A marshalable scalar: `f32` or `f64`.
///
/// Byte conversion uses the host's native order. The fast backend moves
/// raw machine words, so the bounds-checked path must encode scalars the
/// same way for the two backends to produce byte-identical buffers.
pub trait Scalar:
    private::Sealed + Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static
{
    /// Width of one scalar in bytes.
    const WIDTH: usize;
    /// The padding-policy zero constant.
    const ZERO: Self;
    /// The padding-policy one constant.
    const ONE: Self;

    /// Encode into exactly [`WIDTH`](Scalar::WIDTH) bytes, native order.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != WIDTH`.
    fn write_ne(self, out: &mut [u8]);

    /// Decode from exactly [`WIDTH`](Scalar::WIDTH) bytes, native order.
    ///
    /// # Panics
    ///
    /// Panics if `src.len() != WIDTH`.
    fn read_ne(src: &[u8]) -> Self;

    /// The scalar's raw bit pattern, widened to `u64`.
    ///
    /// Used by tests to compare values bit-for-bit (NaN payloads
    /// included) where `PartialEq` would be wrong.
    fn bit_pattern(self) -> u64;
}

impl Scalar for f32 {
    const WIDTH: usize = 4;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn write_ne(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_ne_bytes());
    }

    fn read_ne(src: &[u8]) -> Self {
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(src);
        f32::from_ne_bytes(bytes)
    }

    fn bit_pattern(self) -> u64 {
        u64::from(self.to_bits())
    }
}

impl Scalar for f64 {
    const WIDTH: usize = 8;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn write_ne(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_ne_bytes());
    }

    fn read_ne(src: &[u8]) -> Self {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(src);
        f64::from_ne_bytes(bytes)
    }

    fn bit_pattern(self) -> u64 {
        self.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f32_round_trips_through_native_bytes() {
        let mut buf = [0u8; 4];
        for v in [0.0f32, 1.0, -2.5, f32::MIN_POSITIVE, f32::INFINITY] {
            v.write_ne(&mut buf);
            assert_eq!(f32::read_ne(&buf).to_bits(), v.to_bits());
        }
    }

    #[test]
    fn f64_round_trips_through_native_bytes() {
        let mut buf = [0u8; 8];
        for v in [0.0f64, 1.0, -2.5, f64::MIN_POSITIVE, f64::NEG_INFINITY] {
            v.write_ne(&mut buf);
            assert_eq!(f64::read_ne(&buf).to_bits(), v.to_bits());
        }
    }

    #[test]
    fn nan_payload_survives_byte_round_trip() {
        let nan = f32::from_bits(0x7FC0_1234);
        let mut buf = [0u8; 4];
        nan.write_ne(&mut buf);
        assert_eq!(f32::read_ne(&buf).to_bits(), 0x7FC0_1234);
    }

    proptest::proptest! {
        #[test]
        fn every_f32_bit_pattern_round_trips(bits in proptest::prelude::any::<u32>()) {
            let v = f32::from_bits(bits);
            let mut buf = [0u8; 4];
            v.write_ne(&mut buf);
            proptest::prop_assert_eq!(f32::read_ne(&buf).to_bits(), bits);
        }

        #[test]
        fn every_f64_bit_pattern_round_trips(bits in proptest::prelude::any::<u64>()) {
            let v = f64::from_bits(bits);
            let mut buf = [0u8; 8];
            v.write_ne(&mut buf);
            proptest::prop_assert_eq!(f64::read_ne(&buf).to_bits(), bits);
        }
    }
}
