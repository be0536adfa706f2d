//! Position-relative untyped byte buffers.
//!
//! A [`ByteBuf`] is addressed in bytes: scalar slot `i` of an operation
//! at byte offset `o` lives at `o + i * WIDTH`. Scalars are encoded in
//! the host's native byte order — the fast backend moves raw machine
//! words, and the bounds-checked path must produce byte-identical
//! contents.
//!
//! Heap vs direct backing follows [`TypedBuf`](crate::TypedBuf).

use strake_core::{MarshalError, Scalar};

use crate::sink::{ScalarSink, ScalarSource};

enum Backing {
    Heap(Vec<u8>),
    Direct(Box<[u8]>),
}

impl Backing {
    fn as_slice(&self) -> &[u8] {
        match self {
            Backing::Heap(v) => v,
            Backing::Direct(b) => b,
        }
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            Backing::Heap(v) => v,
            Backing::Direct(b) => b,
        }
    }
}

/// A position-relative untyped byte buffer.
pub struct ByteBuf {
    data: Backing,
    position: usize,
}

impl ByteBuf {
    /// Allocate a zero-filled heap buffer of `capacity` bytes.
    pub fn allocate(capacity: usize) -> Self {
        Self {
            data: Backing::Heap(vec![0; capacity]),
            position: 0,
        }
    }

    /// Allocate a zero-filled direct buffer of `capacity` bytes.
    pub fn allocate_direct(capacity: usize) -> Self {
        Self {
            data: Backing::Direct(vec![0; capacity].into_boxed_slice()),
            position: 0,
        }
    }

    /// Wrap an existing vector as a heap buffer.
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self {
            data: Backing::Heap(data),
            position: 0,
        }
    }

    /// Capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.data.as_slice().len()
    }

    /// Whether this buffer exposes a stable base address.
    pub fn is_direct(&self) -> bool {
        matches!(self.data, Backing::Direct(_))
    }

    /// Current cursor position, in bytes.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the cursor to `position`.
    pub fn set_position(&mut self, position: usize) -> Result<(), MarshalError> {
        if position > self.capacity() {
            return Err(MarshalError::InvalidPosition {
                position,
                capacity: self.capacity(),
            });
        }
        self.position = position;
        Ok(())
    }

    /// Grow a heap buffer by `additional` zero bytes.
    ///
    /// Direct buffers have pinned capacity and return
    /// [`MarshalError::FixedCapacity`].
    pub fn grow(&mut self, additional: usize) -> Result<(), MarshalError> {
        match &mut self.data {
            Backing::Heap(v) => {
                let new_len = v.len() + additional;
                v.resize(new_len, 0);
                Ok(())
            }
            Backing::Direct(b) => Err(MarshalError::FixedCapacity { capacity: b.len() }),
        }
    }

    /// The full contents as a slice.
    pub fn as_slice(&self) -> &[u8] {
        self.data.as_slice()
    }

    /// The full contents as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        self.data.as_mut_slice()
    }
}

impl<T: Scalar> ScalarSink<T> for ByteBuf {
    fn check_range(&self, offset: usize, count: usize) -> Result<(), MarshalError> {
        let len = count * T::WIDTH;
        let end = offset.checked_add(len);
        match end {
            Some(end) if end <= self.capacity() => Ok(()),
            _ => Err(MarshalError::OutOfRange {
                offset,
                len,
                capacity: self.capacity(),
            }),
        }
    }

    fn byte_offset(&self, offset: usize) -> usize {
        offset
    }

    fn write_scalars(&mut self, offset: usize, values: &[T]) -> Result<(), MarshalError> {
        ScalarSink::<T>::check_range(self, offset, values.len())?;
        let bytes = &mut self.data.as_mut_slice()[offset..offset + values.len() * T::WIDTH];
        for (chunk, v) in bytes.chunks_exact_mut(T::WIDTH).zip(values) {
            v.write_ne(chunk);
        }
        Ok(())
    }

    fn direct_base_mut(&mut self) -> Result<*mut u8, MarshalError> {
        match &mut self.data {
            Backing::Direct(b) => Ok(b.as_mut_ptr()),
            Backing::Heap(_) => Err(MarshalError::NotDirect),
        }
    }
}

impl<T: Scalar> ScalarSource<T> for ByteBuf {
    fn check_range(&self, offset: usize, count: usize) -> Result<(), MarshalError> {
        ScalarSink::<T>::check_range(self, offset, count)
    }

    fn byte_offset(&self, offset: usize) -> usize {
        offset
    }

    fn read_scalars(&self, offset: usize, out: &mut [T]) -> Result<(), MarshalError> {
        ScalarSource::<T>::check_range(self, offset, out.len())?;
        let bytes = &self.data.as_slice()[offset..offset + out.len() * T::WIDTH];
        for (chunk, v) in bytes.chunks_exact(T::WIDTH).zip(out) {
            *v = T::read_ne(chunk);
        }
        Ok(())
    }

    fn direct_base(&self) -> Result<*const u8, MarshalError> {
        match &self.data {
            Backing::Direct(b) => Ok(b.as_ptr()),
            Backing::Heap(_) => Err(MarshalError::NotDirect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_land_at_byte_offsets() {
        let mut buf = ByteBuf::allocate(16);
        ScalarSink::<f32>::write_scalars(&mut buf, 4, &[1.0, 2.0]).unwrap();
        assert_eq!(&buf.as_slice()[4..8], &1.0f32.to_ne_bytes());
        assert_eq!(&buf.as_slice()[8..12], &2.0f32.to_ne_bytes());
        // Bytes around the write are untouched.
        assert_eq!(&buf.as_slice()[..4], &[0; 4]);
        assert_eq!(&buf.as_slice()[12..], &[0; 4]);
    }

    #[test]
    fn range_check_accounts_for_scalar_width() {
        let buf = ByteBuf::allocate(16);
        assert!(ScalarSink::<f64>::check_range(&buf, 0, 2).is_ok());
        let err = ScalarSink::<f64>::check_range(&buf, 1, 2).unwrap_err();
        assert_eq!(
            err,
            MarshalError::OutOfRange {
                offset: 1,
                len: 16,
                capacity: 16,
            }
        );
    }

    #[test]
    fn unaligned_byte_offsets_are_allowed() {
        let mut buf = ByteBuf::allocate(16);
        ScalarSink::<f32>::write_scalars(&mut buf, 3, &[1.5]).unwrap();
        let mut out = [0.0f32];
        ScalarSource::<f32>::read_scalars(&buf, 3, &mut out).unwrap();
        assert_eq!(out[0], 1.5);
    }

    #[test]
    fn cursor_is_never_advanced_by_absolute_ops() {
        let mut buf = ByteBuf::allocate_direct(32);
        buf.set_position(7).unwrap();
        ScalarSink::<f64>::write_scalars(&mut buf, 0, &[3.25, 4.5]).unwrap();
        let mut out = [0.0f64; 2];
        ScalarSource::<f64>::read_scalars(&buf, 0, &mut out).unwrap();
        assert_eq!(buf.position(), 7);
        assert_eq!(out, [3.25, 4.5]);
    }

    #[test]
    fn heap_refuses_address_direct_allows() {
        let mut heap = ByteBuf::allocate(8);
        assert_eq!(
            ScalarSink::<f32>::direct_base_mut(&mut heap).unwrap_err(),
            MarshalError::NotDirect
        );
        let mut direct = ByteBuf::allocate_direct(8);
        assert!(ScalarSink::<f32>::direct_base_mut(&mut direct).is_ok());
    }

    proptest::proptest! {
        #[test]
        fn scalars_round_trip_at_any_byte_offset(
            bits in proptest::prelude::any::<[u64; 4]>(),
            offset in 0usize..16,
        ) {
            let values = bits.map(f64::from_bits);
            let mut buf = ByteBuf::allocate(offset + 32);
            ScalarSink::<f64>::write_scalars(&mut buf, offset, &values).unwrap();
            let mut out = [0.0f64; 4];
            ScalarSource::<f64>::read_scalars(&buf, offset, &mut out).unwrap();
            for (v, w) in values.iter().zip(out) {
                proptest::prop_assert_eq!(v.to_bits(), w.to_bits());
            }
        }
    }
}
