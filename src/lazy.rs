//! On-the-fly unpacking of trace data straight from disk.
//!
//! A [`LazyUnpacker`] remembers where one trace's samples live and how they
//! are encoded. Nothing is read until [`LazyUnpacker::unpack`] is called,
//! and every call re-reads the file.

use std::fs;
use std::io::{Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, warn};

use crate::Result;
use crate::error::StaleSource;
use crate::samples::Samples;
use crate::types::{ByteOrder, EncodingFormat, OpenMode};
use crate::unpack::UnpackFn;

/// Deferred read of one trace's sample block.
///
/// The modification time of the file is captured at construction. If it
/// has changed by the time [`unpack`](Self::unpack) runs, a warning is
/// logged and returned with the samples, but decoding still goes ahead.
/// The check is best effort: rewrites that keep the timestamp go unnoticed.
///
/// # Example
///
/// ```no_run
/// use segy_codec::{ByteOrder, EncodingFormat, LazyUnpacker, OpenMode};
///
/// // 3600-byte file header + 240-byte trace header
/// let lazy = LazyUnpacker::for_format(
///     EncodingFormat::IbmFloat32,
///     "line_001.sgy",
///     OpenMode::Read,
///     3840,
///     1500,
///     ByteOrder::Big,
/// )?;
/// let data = lazy.unpack()?;
/// assert_eq!(data.samples.len(), 1500);
/// # Ok::<(), segy_codec::SegyError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LazyUnpacker {
    unpack: UnpackFn,
    format: Option<EncodingFormat>,
    path: PathBuf,
    mode: OpenMode,
    offset: u64,
    count: usize,
    byte_order: ByteOrder,
    mtime: SystemTime,
}

/// Result of a [`LazyUnpacker::unpack`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct Unpacked {
    pub samples: Samples,
    /// Set when the file changed after the unpacker was created.
    pub stale: Option<StaleSource>,
}

impl Unpacked {
    pub fn is_stale(&self) -> bool {
        self.stale.is_some()
    }
}

impl LazyUnpacker {
    /// Tie `unpack` to a block of `count` samples at byte `offset` of `path`.
    ///
    /// Only the file's metadata is touched here; the data is not opened.
    pub fn new(
        unpack: UnpackFn,
        path: impl Into<PathBuf>,
        mode: OpenMode,
        offset: u64,
        count: usize,
        byte_order: ByteOrder,
    ) -> Result<Self> {
        let path = path.into();
        let mtime = modified(&path)?;
        Ok(Self {
            unpack,
            format: None,
            path,
            mode,
            offset,
            count,
            byte_order,
            mtime,
        })
    }

    /// Same as [`new`](Self::new) with the unpack function chosen by `format`.
    pub fn for_format(
        format: EncodingFormat,
        path: impl Into<PathBuf>,
        mode: OpenMode,
        offset: u64,
        count: usize,
        byte_order: ByteOrder,
    ) -> Result<Self> {
        let mut lazy = Self::new(format.unpack_fn(), path, mode, offset, count, byte_order)?;
        lazy.format = Some(format);
        Ok(lazy)
    }

    /// Read and decode the sample block.
    pub fn unpack(&self) -> Result<Unpacked> {
        let current = modified(&self.path)?;
        let stale = (current != self.mtime).then(|| StaleSource {
            path: self.path.clone(),
            captured: self.mtime,
            current,
        });
        if let Some(s) = &stale {
            warn!(
                path = %self.path.display(),
                captured = ?s.captured,
                current = ?s.current,
                "{s}"
            );
        }

        debug!(
            path = %self.path.display(),
            offset = self.offset,
            count = self.count,
            byte_order = %self.byte_order,
            "unpacking trace data"
        );
        let mut file = self.mode.options().open(&self.path)?;
        file.seek(SeekFrom::Start(self.offset))?;
        let samples = (self.unpack)(&mut file, self.count, self.byte_order)?;

        Ok(Unpacked { samples, stale })
    }

    /// Encoding, when built with [`for_format`](Self::for_format).
    pub fn format(&self) -> Option<EncodingFormat> {
        self.format
    }

    /// Size of the sample block in bytes, `count * sample_width`.
    ///
    /// `None` when the encoding is unknown (built from a bare [`UnpackFn`])
    /// or the size does not fit in a `u64`.
    pub fn byte_len(&self) -> Option<u64> {
        let width = self.format?.sample_width() as u64;
        (self.count as u64).checked_mul(width)
    }

    /// File the samples are read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Mode the file is opened with on each call.
    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    /// Byte offset of the first sample.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Number of samples decoded per call.
    pub fn count(&self) -> usize {
        self.count
    }

    /// On-disk byte order of the samples.
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Modification time observed when the unpacker was created.
    pub fn captured_mtime(&self) -> SystemTime {
        self.mtime
    }
}

fn modified(path: &Path) -> Result<SystemTime> {
    Ok(fs::metadata(path)?.modified()?)
}
