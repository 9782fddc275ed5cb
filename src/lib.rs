//! Pure Rust sample codec for SEG-Y and Seismic Unix trace data.
//!
//! Converts between in-memory sample arrays and the on-disk encodings of
//! legacy exploration-geophysics files: 32-bit IBM hexadecimal float, 32-bit
//! IEEE float, and 32/16-bit two's complement integers, in either byte
//! order regardless of the host. Which encoding applies to a trace is
//! decided by the caller, typically from the binary file header's data
//! sample format code (see [`EncodingFormat::from_code`]).
//!
//! # Packing and unpacking
//!
//! ```
//! use segy_codec::{pack, unpack, ByteOrder, EncodingFormat, Samples};
//!
//! let mut buf = Vec::new();
//! let written = pack(
//!     &mut buf,
//!     &Samples::Float32(vec![100.0]),
//!     EncodingFormat::IbmFloat32,
//!     ByteOrder::Big,
//! )
//! .unwrap();
//! assert_eq!(written, 4);
//! assert_eq!(buf, [0x42, 0x64, 0x00, 0x00]);
//!
//! let samples = unpack(&mut &buf[..], 1, EncodingFormat::IbmFloat32, ByteOrder::Big).unwrap();
//! assert_eq!(samples, Samples::Float32(vec![100.0]));
//! ```
//!
//! # Dispatching on a header format code
//!
//! ```
//! use segy_codec::{unpack, ByteOrder, EncodingFormat, Samples};
//!
//! let format = EncodingFormat::from_code(3).unwrap();
//! assert_eq!(format, EncodingFormat::Int16);
//!
//! let data = [0x00, 0x01, 0xFF, 0xFE];
//! let samples = unpack(&mut &data[..], 2, format, ByteOrder::Big).unwrap();
//! assert_eq!(samples, Samples::Int16(vec![1, -2]));
//! ```
//!
//! For deferred, file-backed decoding see [`LazyUnpacker`].

pub mod error;
pub mod ibm;
pub mod lazy;
pub mod pack;
pub mod samples;
pub mod types;
pub mod unpack;

pub use error::{Result, SegyError, StaleSource};
pub use lazy::{LazyUnpacker, Unpacked};
pub use samples::{SampleKind, Samples};
pub use types::{ByteOrder, EncodingFormat, OpenMode};
pub use unpack::UnpackFn;

pub use pack::pack;
pub use unpack::unpack;
