//! Position-relative typed scalar buffers.
//!
//! A [`TypedBuf<T>`] holds `T` scalars and is addressed in scalar
//! units. It carries a cursor for callers that stream through it
//! sequentially ([`write_next`](TypedBuf::write_next) /
//! [`read_next`](TypedBuf::read_next)); marshal operations address the
//! buffer absolutely and never touch the cursor.
//!
//! Two backings:
//!
//! - **heap** ([`allocate`](TypedBuf::allocate)): a growable `Vec`.
//!   The base address is unstable across [`grow`](TypedBuf::grow), so
//!   raw-address access is refused.
//! - **direct** ([`allocate_direct`](TypedBuf::allocate_direct)): a
//!   pinned `Box<[T]>` with fixed capacity and a stable base address
//!   for the lifetime of the buffer, as the fast backend requires.

use strake_core::{MarshalError, Scalar};

use crate::sink::{ScalarSink, ScalarSource};

enum Backing<T> {
    Heap(Vec<T>),
    Direct(Box<[T]>),
}

impl<T: Scalar> Backing<T> {
    fn as_slice(&self) -> &[T] {
        match self {
            Backing::Heap(v) => v,
            Backing::Direct(b) => b,
        }
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            Backing::Heap(v) => v,
            Backing::Direct(b) => b,
        }
    }
}

/// A position-relative buffer of `T` scalars.
pub struct TypedBuf<T: Scalar> {
    data: Backing<T>,
    position: usize,
}

impl<T: Scalar> TypedBuf<T> {
    /// Allocate a zero-filled heap buffer of `capacity` scalars.
    ///
    /// Heap buffers are growable and therefore refuse raw-address
    /// access.
    pub fn allocate(capacity: usize) -> Self {
        Self {
            data: Backing::Heap(vec![T::default(); capacity]),
            position: 0,
        }
    }

    /// Allocate a zero-filled direct buffer of `capacity` scalars.
    ///
    /// Direct buffers are pinned: fixed capacity, stable base address.
    pub fn allocate_direct(capacity: usize) -> Self {
        Self {
            data: Backing::Direct(vec![T::default(); capacity].into_boxed_slice()),
            position: 0,
        }
    }

    /// Wrap an existing vector as a heap buffer.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            data: Backing::Heap(data),
            position: 0,
        }
    }

    /// Capacity in scalars.
    pub fn capacity(&self) -> usize {
        self.data.as_slice().len()
    }

    /// Whether this buffer exposes a stable base address.
    pub fn is_direct(&self) -> bool {
        matches!(self.data, Backing::Direct(_))
    }

    /// Current cursor position, in scalars.
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

    /// Write one scalar at the cursor and advance it.
    pub fn write_next(&mut self, value: T) -> Result<(), MarshalError> {
        let at = self.position;
        ScalarSink::check_range(self, at, 1)?;
        self.data.as_mut_slice()[at] = value;
        self.position = at + 1;
        Ok(())
    }

    /// Read one scalar at the cursor and advance it.
    pub fn read_next(&mut self) -> Result<T, MarshalError> {
        let at = self.position;
        ScalarSink::check_range(self, at, 1)?;
        let v = self.data.as_slice()[at];
        self.position = at + 1;
        Ok(v)
    }

    /// Grow a heap buffer by `additional` zero-filled scalars.
    ///
    /// Direct buffers have pinned capacity and return
    /// [`MarshalError::FixedCapacity`].
    pub fn grow(&mut self, additional: usize) -> Result<(), MarshalError> {
        match &mut self.data {
            Backing::Heap(v) => {
                let new_len = v.len() + additional;
                v.resize(new_len, T::default());
                Ok(())
            }
            Backing::Direct(b) => Err(MarshalError::FixedCapacity { capacity: b.len() }),
        }
    }

    /// The full contents as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// The full contents as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }
}

impl<T: Scalar> ScalarSink<T> for TypedBuf<T> {
    fn check_range(&self, offset: usize, count: usize) -> Result<(), MarshalError> {
        let end = offset.checked_add(count);
        match end {
            Some(end) if end <= self.capacity() => Ok(()),
            _ => Err(MarshalError::OutOfRange {
                offset,
                len: count,
                capacity: self.capacity(),
            }),
        }
    }

    fn byte_offset(&self, offset: usize) -> usize {
        offset * T::WIDTH
    }

    fn write_scalars(&mut self, offset: usize, values: &[T]) -> Result<(), MarshalError> {
        ScalarSink::check_range(self, offset, values.len())?;
        self.data.as_mut_slice()[offset..offset + values.len()].copy_from_slice(values);
        Ok(())
    }

    fn direct_base_mut(&mut self) -> Result<*mut u8, MarshalError> {
        match &mut self.data {
            Backing::Direct(b) => Ok(b.as_mut_ptr() as *mut u8),
            Backing::Heap(_) => Err(MarshalError::NotDirect),
        }
    }
}

impl<T: Scalar> ScalarSource<T> for TypedBuf<T> {
    fn check_range(&self, offset: usize, count: usize) -> Result<(), MarshalError> {
        ScalarSink::check_range(self, offset, count)
    }

    fn byte_offset(&self, offset: usize) -> usize {
        offset * T::WIDTH
    }

    fn read_scalars(&self, offset: usize, out: &mut [T]) -> Result<(), MarshalError> {
        ScalarSource::check_range(self, offset, out.len())?;
        out.copy_from_slice(&self.data.as_slice()[offset..offset + out.len()]);
        Ok(())
    }

    fn direct_base(&self) -> Result<*const u8, MarshalError> {
        match &self.data {
            Backing::Direct(b) => Ok(b.as_ptr() as *const u8),
            Backing::Heap(_) => Err(MarshalError::NotDirect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_scalars_leaves_cursor_alone() {
        let mut buf = TypedBuf::<f32>::allocate(8);
        buf.set_position(3).unwrap();
        buf.write_scalars(0, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(buf.position(), 3);
        assert_eq!(&buf.as_slice()[..4], &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn out_of_range_write_is_rejected() {
        let mut buf = TypedBuf::<f64>::allocate(4);
        let err = buf.write_scalars(2, &[0.0; 4]).unwrap_err();
        assert_eq!(
            err,
            MarshalError::OutOfRange {
                offset: 2,
                len: 4,
                capacity: 4,
            }
        );
    }

    #[test]
    fn heap_buffer_refuses_raw_address() {
        let mut buf = TypedBuf::<f32>::allocate(4);
        assert_eq!(buf.direct_base_mut().unwrap_err(), MarshalError::NotDirect);
        assert!(!buf.is_direct());
    }

    #[test]
    fn direct_buffer_exposes_stable_address() {
        let mut buf = TypedBuf::<f32>::allocate_direct(4);
        assert!(buf.is_direct());
        let a = buf.direct_base_mut().unwrap();
        let b = buf.direct_base_mut().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn direct_buffer_capacity_is_pinned() {
        let mut buf = TypedBuf::<f32>::allocate_direct(4);
        assert_eq!(
            buf.grow(4).unwrap_err(),
            MarshalError::FixedCapacity { capacity: 4 }
        );

        let mut heap = TypedBuf::<f32>::allocate(4);
        heap.grow(4).unwrap();
        assert_eq!(heap.capacity(), 8);
    }

    #[test]
    fn cursor_round_trip() {
        let mut buf = TypedBuf::<f32>::allocate(2);
        buf.write_next(5.0).unwrap();
        buf.write_next(6.0).unwrap();
        assert!(buf.write_next(7.0).is_err());
        buf.set_position(0).unwrap();
        assert_eq!(buf.read_next().unwrap(), 5.0);
        assert_eq!(buf.read_next().unwrap(), 6.0);
    }

    #[test]
    fn set_position_past_capacity_is_rejected() {
        let mut buf = TypedBuf::<f64>::allocate(4);
        assert!(buf.set_position(4).is_ok());
        assert_eq!(
            buf.set_position(5).unwrap_err(),
            MarshalError::InvalidPosition {
                position: 5,
                capacity: 4,
            }
        );
    }
}
