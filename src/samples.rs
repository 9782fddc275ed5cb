//! Typed sample arrays and the fixed-width words they are read and written as.

use std::fmt;
use std::io::{Read, Write};

use crate::types::ByteOrder;
use crate::{Result, SegyError};

/// An in-memory trace sample array.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    Int32(Vec<i32>),
    Int16(Vec<i16>),
}

/// Element type of a [`Samples`] array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Float32,
    Float64,
    Int32,
    Int16,
}

impl Samples {
    pub fn len(&self) -> usize {
        match self {
            Samples::Float32(v) => v.len(),
            Samples::Float64(v) => v.len(),
            Samples::Int32(v) => v.len(),
            Samples::Int16(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> SampleKind {
        match self {
            Samples::Float32(_) => SampleKind::Float32,
            Samples::Float64(_) => SampleKind::Float64,
            Samples::Int32(_) => SampleKind::Int32,
            Samples::Int16(_) => SampleKind::Int16,
        }
    }
}

impl From<Vec<f32>> for Samples {
    fn from(v: Vec<f32>) -> Self {
        Samples::Float32(v)
    }
}

impl From<Vec<f64>> for Samples {
    fn from(v: Vec<f64>) -> Self {
        Samples::Float64(v)
    }
}

impl From<Vec<i32>> for Samples {
    fn from(v: Vec<i32>) -> Self {
        Samples::Int32(v)
    }
}

impl From<Vec<i16>> for Samples {
    fn from(v: Vec<i16>) -> Self {
        Samples::Int16(v)
    }
}

impl fmt::Display for SampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float32 => write!(f, "float32"),
            Self::Float64 => write!(f, "float64"),
            Self::Int32 => write!(f, "int32"),
            Self::Int16 => write!(f, "int16"),
        }
    }
}

/// A fixed-width value stored contiguously in a sample block.
pub(crate) trait Word: Copy {
    const WIDTH: usize;

    fn swap_bytes(self) -> Self;
    fn write_ne(self, out: &mut [u8]);
    fn read_ne(bytes: &[u8]) -> Self;
}

macro_rules! impl_word {
    ($($ty:ty),*) => {$(
        impl Word for $ty {
            const WIDTH: usize = std::mem::size_of::<$ty>();

            fn swap_bytes(self) -> Self {
                <$ty>::swap_bytes(self)
            }

            fn write_ne(self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_ne_bytes());
            }

            fn read_ne(bytes: &[u8]) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$ty>()];
                raw.copy_from_slice(bytes);
                <$ty>::from_ne_bytes(raw)
            }
        }
    )*};
}

impl_word!(i16, i32, u32);

impl Word for f32 {
    const WIDTH: usize = 4;

    fn swap_bytes(self) -> Self {
        f32::from_bits(self.to_bits().swap_bytes())
    }

    fn write_ne(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_ne_bytes());
    }

    fn read_ne(bytes: &[u8]) -> Self {
        f32::from_bits(u32::read_ne(bytes))
    }
}

/// Serialize `values` in `byte_order` and write them with a single `write_all`.
///
/// Returns the number of bytes written.
pub(crate) fn write_words<W, T>(
    sink: &mut W,
    values: &[T],
    byte_order: ByteOrder,
) -> Result<usize>
where
    W: Write + ?Sized,
    T: Word,
{
    let swap = byte_order.needs_swap();
    let mut buf = vec![0u8; values.len() * T::WIDTH];
    for (chunk, &val) in buf.chunks_exact_mut(T::WIDTH).zip(values) {
        let val = if swap { val.swap_bytes() } else { val };
        val.write_ne(chunk);
    }
    sink.write_all(&buf)?;
    Ok(buf.len())
}

/// Read exactly `count` words stored in `byte_order`.
pub(crate) fn read_words<R, T>(
    source: &mut R,
    count: usize,
    byte_order: ByteOrder,
) -> Result<Vec<T>>
where
    R: Read + ?Sized,
    T: Word,
{
    let needed = count
        .checked_mul(T::WIDTH)
        .ok_or(SegyError::MalformedInput {
            expected: usize::MAX,
            actual: 0,
        })?;
    let buf = read_block(source, needed)?;
    let swap = byte_order.needs_swap();
    Ok(buf
        .chunks_exact(T::WIDTH)
        .map(|chunk| {
            let val = T::read_ne(chunk);
            if swap { val.swap_bytes() } else { val }
        })
        .collect())
}

/// Largest buffer reserved before any data has arrived.
const INITIAL_CAPACITY: usize = 64 * 1024;

/// Read exactly `needed` bytes, failing with `MalformedInput` on a short source.
///
/// The buffer grows as bytes arrive, so a bogus count from a corrupt header
/// costs no more memory than the source actually holds.
fn read_block<R: Read + ?Sized>(source: &mut R, needed: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(needed.min(INITIAL_CAPACITY));
    source.take(needed as u64).read_to_end(&mut buf)?;
    if buf.len() < needed {
        return Err(SegyError::MalformedInput {
            expected: needed,
            actual: buf.len(),
        });
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_words_big_endian() {
        let mut out = Vec::new();
        let n = write_words(&mut out, &[0x0102_0304i32], ByteOrder::Big).unwrap();
        assert_eq!(n, 4);
        assert_eq!(out, [1, 2, 3, 4]);
    }

    #[test]
    fn test_write_words_little_endian() {
        let mut out = Vec::new();
        write_words(&mut out, &[0x0102i16, -2], ByteOrder::Little).unwrap();
        assert_eq!(out, [2, 1, 0xFE, 0xFF]);
    }

    #[test]
    fn test_read_words_both_orders() {
        let data = [0x3Fu8, 0x80, 0, 0];
        let be: Vec<f32> = read_words(&mut &data[..], 1, ByteOrder::Big).unwrap();
        assert_eq!(be, [1.0]);

        let data = [0u8, 0, 0x80, 0x3F];
        let le: Vec<f32> = read_words(&mut &data[..], 1, ByteOrder::Little).unwrap();
        assert_eq!(le, [1.0]);
    }

    #[test]
    fn test_read_words_leaves_trailing_bytes() {
        let data = [0u8, 7, 0, 9, 0xAA];
        let mut source = &data[..];
        let vals: Vec<i16> = read_words(&mut source, 2, ByteOrder::Big).unwrap();
        assert_eq!(vals, [7, 9]);
        assert_eq!(source, [0xAA]);
    }

    #[test]
    fn test_read_words_short_source() {
        let data = [0u8; 7];
        let err = read_words::<_, i32>(&mut &data[..], 2, ByteOrder::Big).unwrap_err();
        assert!(matches!(
            err,
            SegyError::MalformedInput {
                expected: 8,
                actual: 7
            }
        ));
    }

    #[test]
    fn test_read_words_huge_count_short_source() {
        let data = [0u8; 3];
        let err = read_words::<_, i32>(&mut &data[..], 1 << 45, ByteOrder::Big).unwrap_err();
        match err {
            SegyError::MalformedInput { expected, actual } => {
                assert_eq!(expected, (1usize << 45) * 4);
                assert_eq!(actual, 3);
            }
            other => panic!("expected MalformedInput, got {other}"),
        }
    }

    #[test]
    fn test_read_words_overflowing_count() {
        let data = [0u8; 8];
        for count in [usize::MAX / 2, usize::MAX / 4 + 1, usize::MAX] {
            let err = read_words::<_, i32>(&mut &data[..], count, ByteOrder::Big).unwrap_err();
            assert!(
                matches!(err, SegyError::MalformedInput { .. }),
                "count {count}: got {err}"
            );
        }
        let err = read_words::<_, i16>(&mut &data[..], usize::MAX, ByteOrder::Big).unwrap_err();
        assert!(matches!(err, SegyError::MalformedInput { .. }));
    }

    #[test]
    fn test_samples_kind_and_len() {
        let s = Samples::from(vec![1i16, 2, 3]);
        assert_eq!(s.kind(), SampleKind::Int16);
        assert_eq!(s.len(), 3);
        assert!(Samples::Float64(vec![]).is_empty());
    }
}
