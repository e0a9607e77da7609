use std::fs::File;
use std::path::Path;

use bstr::ByteSlice;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("unable to open source file: {0}")]
    Io(#[from] std::io::Error),

    #[error("unable to map source file: {0}")]
    Map(#[from] mmap_rs::Error),

    #[error("source file is too large to map ({0} bytes)")]
    TooLarge(u64),

    #[error("source file is not valid utf-8, first invalid byte at offset {offset}")]
    InvalidUtf8 { offset: usize },
}

enum SourceBufferKind<'a> {
    File { buffer: Option<mmap_rs::Mmap> },
    Memory { string: &'a str },
}

/// Keeps source text and its file name in the same object, so they share a lifetime.
pub struct SourceBuffer<'a> {
    kind: SourceBufferKind<'a>,
    file_name: String,
}

impl<'a> SourceBuffer<'a> {
    /// Maps the file at `file_path` into memory and checks that it is valid utf-8.
    pub fn new_from_file(file_path: &Path) -> Result<SourceBuffer<'a>, SourceError> {
        let file = File::open(file_path)?;
        let len = file.metadata()?.len();
        let file_name = file_path.display().to_string();

        // Zero-length mappings are rejected by the OS, an empty file is just empty source.
        if len == 0 {
            tracing::debug!(file = %file_name, "mapped empty source file");
            return Ok(SourceBuffer { kind: SourceBufferKind::File { buffer: None }, file_name });
        }

        let size = usize::try_from(len).map_err(|_| SourceError::TooLarge(len))?;
        // SAFETY: the mapping is read-only and lives as long as the SourceBuffer. Concurrent
        // modification of the file by another process is outside of our control.
        let buffer = unsafe { mmap_rs::MmapOptions::new(size)?.with_file(&file, 0).map()? };
        if let Err(e) = buffer.as_slice().to_str() {
            return Err(SourceError::InvalidUtf8 { offset: e.valid_up_to() });
        }

        tracing::debug!(file = %file_name, bytes = size, "mapped source file");
        Ok(SourceBuffer { kind: SourceBufferKind::File { buffer: Some(buffer) }, file_name })
    }

    pub fn new_from_string(string: &'a str, name: &str) -> SourceBuffer<'a> {
        SourceBuffer { kind: SourceBufferKind::Memory { string }, file_name: String::from(name) }
    }

    pub fn code(&self) -> &'_ str {
        match &self.kind {
            SourceBufferKind::File { buffer: Some(buffer) } => {
                // SAFETY: contents were validated as utf-8 in new_from_file().
                unsafe { std::str::from_utf8_unchecked(buffer.as_slice()) }
            }
            SourceBufferKind::File { buffer: None } => "",
            SourceBufferKind::Memory { string } => string,
        }
    }

    pub fn file_name(&self) -> &str {
        self.file_name.as_str()
    }
}
