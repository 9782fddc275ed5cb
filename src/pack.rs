//! Pack in-memory samples into SEG-Y trace data bytes.
//!
//! Every function writes `samples.len() * width` bytes to the sink and
//! returns that count. Input is validated in full before the first byte is
//! written, so a failed call leaves earlier traces in the sink untouched.

use std::io::Write;

use crate::ibm;
use crate::samples::{Samples, write_words};
use crate::types::{ByteOrder, EncodingFormat};
use crate::{Result, SegyError};

/// Pack `samples` with the given encoding.
pub fn pack<W: Write + ?Sized>(
    sink: &mut W,
    samples: &Samples,
    format: EncodingFormat,
    byte_order: ByteOrder,
) -> Result<usize> {
    match format {
        EncodingFormat::IbmFloat32 => pack_ibm_float32(sink, samples, byte_order),
        EncodingFormat::Int32 => pack_int32(sink, samples, byte_order),
        EncodingFormat::Int16 => pack_int16(sink, samples, byte_order),
        EncodingFormat::FixedPoint32 => pack_fixed_point32(sink, samples, byte_order),
        EncodingFormat::IeeeFloat32 => pack_ieee_float32(sink, samples, byte_order),
        EncodingFormat::Int8 => pack_int8(sink, samples, byte_order),
    }
}

/// Pack 4-byte IBM floats. Accepts `Float32` or `Float64` samples; doubles
/// are narrowed to single precision first.
pub fn pack_ibm_float32<W: Write + ?Sized>(
    sink: &mut W,
    samples: &Samples,
    byte_order: ByteOrder,
) -> Result<usize> {
    let words: Result<Vec<u32>> = match samples {
        Samples::Float32(v) => v.iter().map(|&x| ibm::ieee_to_ibm(x)).collect(),
        Samples::Float64(v) => v.iter().map(|&x| ibm::ieee_to_ibm(x as f32)).collect(),
        other => Err(wrong_type(EncodingFormat::IbmFloat32, other)),
    };
    write_words(sink, &words?, byte_order)
}

/// Pack 4-byte IEEE floats.
pub fn pack_ieee_float32<W: Write + ?Sized>(
    sink: &mut W,
    samples: &Samples,
    byte_order: ByteOrder,
) -> Result<usize> {
    match samples {
        Samples::Float32(v) => write_words(sink, v, byte_order),
        other => Err(wrong_type(EncodingFormat::IeeeFloat32, other)),
    }
}

/// Pack 4-byte two's complement integers.
pub fn pack_int32<W: Write + ?Sized>(
    sink: &mut W,
    samples: &Samples,
    byte_order: ByteOrder,
) -> Result<usize> {
    match samples {
        Samples::Int32(v) => write_words(sink, v, byte_order),
        other => Err(wrong_type(EncodingFormat::Int32, other)),
    }
}

/// Pack 2-byte two's complement integers.
pub fn pack_int16<W: Write + ?Sized>(
    sink: &mut W,
    samples: &Samples,
    byte_order: ByteOrder,
) -> Result<usize> {
    match samples {
        Samples::Int16(v) => write_words(sink, v, byte_order),
        other => Err(wrong_type(EncodingFormat::Int16, other)),
    }
}

/// Always fails with `Unsupported`; the sink is not touched.
pub fn pack_fixed_point32<W: Write + ?Sized>(
    _sink: &mut W,
    _samples: &Samples,
    _byte_order: ByteOrder,
) -> Result<usize> {
    Err(SegyError::Unsupported(EncodingFormat::FixedPoint32))
}

/// Always fails with `Unsupported`; the sink is not touched.
pub fn pack_int8<W: Write + ?Sized>(
    _sink: &mut W,
    _samples: &Samples,
    _byte_order: ByteOrder,
) -> Result<usize> {
    Err(SegyError::Unsupported(EncodingFormat::Int8))
}

fn wrong_type(encoding: EncodingFormat, samples: &Samples) -> SegyError {
    SegyError::WrongInputType {
        encoding,
        found: samples.kind(),
    }
}
