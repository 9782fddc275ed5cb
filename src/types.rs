//! Shared types: [`ByteOrder`], [`EncodingFormat`], and [`OpenMode`].

use std::fmt;
use std::fs::OpenOptions;

use crate::{Result, SegyError};

/// Byte order of samples on disk.
///
/// Defaults to big-endian, the historical SEG-Y convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    #[default]
    Big,
    Little,
}

impl ByteOrder {
    /// Byte order of the host, fixed at compile time.
    pub const NATIVE: ByteOrder = if cfg!(target_endian = "big") {
        ByteOrder::Big
    } else {
        ByteOrder::Little
    };

    /// Whether values must be byte-swapped to convert between this order
    /// and the host order.
    pub const fn needs_swap(self) -> bool {
        !matches!(
            (self, Self::NATIVE),
            (ByteOrder::Big, ByteOrder::Big) | (ByteOrder::Little, ByteOrder::Little)
        )
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Big => write!(f, "big-endian"),
            Self::Little => write!(f, "little-endian"),
        }
    }
}

/// Encoding of trace sample data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingFormat {
    /// 32-bit IBM hexadecimal float (code 1).
    IbmFloat32,
    /// 32-bit signed integer (code 2).
    Int32,
    /// 16-bit signed integer (code 3).
    Int16,
    /// 32-bit fixed point with gain (code 4). Not supported.
    FixedPoint32,
    /// 32-bit IEEE float (code 5).
    IeeeFloat32,
    /// 8-bit signed integer (code 8). Not supported.
    Int8,
}

impl EncodingFormat {
    /// Convert a SEG-Y binary header data sample format code to an
    /// `EncodingFormat`.
    pub fn from_code(code: u16) -> Result<Self> {
        match code {
            1 => Ok(Self::IbmFloat32),
            2 => Ok(Self::Int32),
            3 => Ok(Self::Int16),
            4 => Ok(Self::FixedPoint32),
            5 => Ok(Self::IeeeFloat32),
            8 => Ok(Self::Int8),
            _ => Err(SegyError::UnknownFormatCode(code)),
        }
    }

    /// Convert to the data sample format code.
    pub fn to_code(self) -> u16 {
        match self {
            Self::IbmFloat32 => 1,
            Self::Int32 => 2,
            Self::Int16 => 3,
            Self::FixedPoint32 => 4,
            Self::IeeeFloat32 => 5,
            Self::Int8 => 8,
        }
    }

    /// Width of one encoded sample in bytes.
    pub fn sample_width(self) -> usize {
        match self {
            Self::IbmFloat32 | Self::Int32 | Self::FixedPoint32 | Self::IeeeFloat32 => 4,
            Self::Int16 => 2,
            Self::Int8 => 1,
        }
    }

    /// Whether this crate can pack and unpack the format.
    pub fn is_supported(self) -> bool {
        !matches!(self, Self::FixedPoint32 | Self::Int8)
    }
}

impl fmt::Display for EncodingFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IbmFloat32 => write!(f, "IBM FLOAT32"),
            Self::Int32 => write!(f, "INT32"),
            Self::Int16 => write!(f, "INT16"),
            Self::FixedPoint32 => write!(f, "FIXED POINT32"),
            Self::IeeeFloat32 => write!(f, "IEEE FLOAT32"),
            Self::Int8 => write!(f, "INT8"),
        }
    }
}

/// Mode a backing file is opened with by [`LazyUnpacker`](crate::LazyUnpacker).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMode {
    #[default]
    Read,
    ReadWrite,
}

impl OpenMode {
    pub(crate) fn options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        options.read(true);
        if self == OpenMode::ReadWrite {
            options.write(true);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_order_matches_host() {
        let probe = 1u16.to_ne_bytes();
        let expected = if probe[0] == 1 {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        };
        assert_eq!(ByteOrder::NATIVE, expected);
        assert!(!ByteOrder::NATIVE.needs_swap());
    }

    #[test]
    fn test_exactly_one_order_needs_swap() {
        assert_ne!(ByteOrder::Big.needs_swap(), ByteOrder::Little.needs_swap());
    }

    #[test]
    fn test_default_is_big_endian() {
        assert_eq!(ByteOrder::default(), ByteOrder::Big);
    }

    #[test]
    fn test_format_codes() {
        for code in [1u16, 2, 3, 4, 5, 8] {
            let format = EncodingFormat::from_code(code).unwrap();
            assert_eq!(format.to_code(), code);
        }
        assert!(matches!(
            EncodingFormat::from_code(6),
            Err(SegyError::UnknownFormatCode(6))
        ));
    }

    #[test]
    fn test_sample_widths() {
        assert_eq!(EncodingFormat::IbmFloat32.sample_width(), 4);
        assert_eq!(EncodingFormat::IeeeFloat32.sample_width(), 4);
        assert_eq!(EncodingFormat::Int32.sample_width(), 4);
        assert_eq!(EncodingFormat::Int16.sample_width(), 2);
        assert!(!EncodingFormat::FixedPoint32.is_supported());
        assert!(!EncodingFormat::Int8.is_supported());
    }
}
