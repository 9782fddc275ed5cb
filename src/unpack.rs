//! Unpack SEG-Y trace data bytes into in-memory samples.
//!
//! Each function consumes exactly `count * width` bytes from the source.
//! A source that ends early yields [`SegyError::MalformedInput`].

use std::fs::File;
use std::io::Read;

use crate::ibm;
use crate::samples::{Samples, read_words};
use crate::types::{ByteOrder, EncodingFormat};
use crate::{Result, SegyError};

/// Signature shared by the per-encoding unpack functions, as stored by
/// [`LazyUnpacker`](crate::LazyUnpacker).
pub type UnpackFn = fn(&mut File, usize, ByteOrder) -> Result<Samples>;

impl EncodingFormat {
    /// The unpack function for this encoding.
    pub fn unpack_fn(self) -> UnpackFn {
        match self {
            Self::IbmFloat32 => unpack_ibm_float32::<File>,
            Self::Int32 => unpack_int32::<File>,
            Self::Int16 => unpack_int16::<File>,
            Self::FixedPoint32 => unpack_fixed_point32::<File>,
            Self::IeeeFloat32 => unpack_ieee_float32::<File>,
            Self::Int8 => unpack_int8::<File>,
        }
    }
}

/// Unpack `count` samples with the given encoding.
pub fn unpack<R: Read + ?Sized>(
    source: &mut R,
    count: usize,
    format: EncodingFormat,
    byte_order: ByteOrder,
) -> Result<Samples> {
    match format {
        EncodingFormat::IbmFloat32 => unpack_ibm_float32(source, count, byte_order),
        EncodingFormat::Int32 => unpack_int32(source, count, byte_order),
        EncodingFormat::Int16 => unpack_int16(source, count, byte_order),
        EncodingFormat::FixedPoint32 => unpack_fixed_point32(source, count, byte_order),
        EncodingFormat::IeeeFloat32 => unpack_ieee_float32(source, count, byte_order),
        EncodingFormat::Int8 => unpack_int8(source, count, byte_order),
    }
}

/// Unpack 4-byte IBM floats into IEEE singles.
pub fn unpack_ibm_float32<R: Read + ?Sized>(
    source: &mut R,
    count: usize,
    byte_order: ByteOrder,
) -> Result<Samples> {
    let words: Vec<u32> = read_words(source, count, byte_order)?;
    Ok(Samples::Float32(
        words.into_iter().map(ibm::ibm_to_ieee).collect(),
    ))
}

/// Unpack 4-byte IEEE floats.
pub fn unpack_ieee_float32<R: Read + ?Sized>(
    source: &mut R,
    count: usize,
    byte_order: ByteOrder,
) -> Result<Samples> {
    read_words(source, count, byte_order).map(Samples::Float32)
}

/// Unpack 4-byte two's complement integers.
pub fn unpack_int32<R: Read + ?Sized>(
    source: &mut R,
    count: usize,
    byte_order: ByteOrder,
) -> Result<Samples> {
    read_words(source, count, byte_order).map(Samples::Int32)
}

/// Unpack 2-byte two's complement integers.
pub fn unpack_int16<R: Read + ?Sized>(
    source: &mut R,
    count: usize,
    byte_order: ByteOrder,
) -> Result<Samples> {
    read_words(source, count, byte_order).map(Samples::Int16)
}

/// Always fails with `Unsupported`; the source is not read.
pub fn unpack_fixed_point32<R: Read + ?Sized>(
    _source: &mut R,
    _count: usize,
    _byte_order: ByteOrder,
) -> Result<Samples> {
    Err(SegyError::Unsupported(EncodingFormat::FixedPoint32))
}

/// Always fails with `Unsupported`; the source is not read.
pub fn unpack_int8<R: Read + ?Sized>(
    _source: &mut R,
    _count: usize,
    _byte_order: ByteOrder,
) -> Result<Samples> {
    Err(SegyError::Unsupported(EncodingFormat::Int8))
}
