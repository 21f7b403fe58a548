//! Access to the zip container of an OpenDocument spreadsheet.

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use encoding_rs::UTF_8;
use log::{debug, error, info, warn};
use zip::ZipArchive;
use zip::result::ZipError;

use crate::dict::types::error::{DictError, Result};

/// Name of the archive entry holding the spreadsheet body.
pub const CONTENT_ENTRY: &str = "content.xml";

/// Upper bound on the buffer reserved from an entry's declared size.
const MAX_PREALLOCATION: u64 = 64 * 1024 * 1024;

/// Read-only view over a zip-style container.
pub struct ArchiveReader<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl ArchiveReader<BufReader<File>> {
    /// Opens the archive stored at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening archive: {}", path.display());
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl ArchiveReader<Cursor<Vec<u8>>> {
    /// Wraps an archive that is already in memory.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::new(Cursor::new(bytes))
    }
}

impl<R: Read + Seek> ArchiveReader<R> {
    pub fn new(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader)?;
        debug!("Archive contains {} entries", archive.len());
        Ok(Self { archive })
    }

    /// Returns the named entry decoded as UTF-8 text, or `None` if the entry does not exist.
    ///
    /// A leading byte-order mark is stripped. Malformed sequences are replaced
    /// rather than rejected, and reported as a warning.
    pub fn read_text_entry(&mut self, name: &str) -> Result<Option<String>> {
        let mut entry = match self.archive.by_name(name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // The declared size comes from the archive header and may be wrong.
        let mut bytes = Vec::with_capacity(entry.size().min(MAX_PREALLOCATION) as usize);
        entry.read_to_end(&mut bytes)?;
        debug!("Read entry '{}': {} bytes", name, bytes.len());

        let (text, _, had_errors) = UTF_8.decode(&bytes);
        if had_errors {
            warn!("Entry '{}' contains invalid UTF-8; replaced malformed sequences", name);
        }
        Ok(Some(text.into_owned()))
    }

    /// Returns the spreadsheet body, failing if the archive has none.
    pub fn read_content(&mut self) -> Result<String> {
        match self.read_text_entry(CONTENT_ENTRY)? {
            Some(text) => Ok(text),
            None => {
                error!("{} not found. Invalid ODS file.", CONTENT_ENTRY);
                Err(DictError::MissingContent(CONTENT_ENTRY.to_string()))
            }
        }
    }
}
