use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HuffmanError>;

#[derive(Error, Debug)]
pub enum HuffmanError {
    /// Unknown directive, missing table file name, or a directive the
    /// storage layout cannot encode.
    #[error("invalid Huffman configuration: {0}")]
    InvalidConfig(String),

    #[error("unable to read Huffman table file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line} of Huffman table file {} is corrupted: {reason}", .file.display())]
    CorruptTable {
        file: PathBuf,
        line: usize,
        reason: String,
    },

    /// Failure reported by the codec constructor, passed through untouched.
    #[error("failed to build Huffman codec: {0}")]
    CodecBuild(#[source] std::io::Error),
}

impl HuffmanError {
    pub(crate) fn invalid_config(msg: impl Into<String>) -> Self {
        HuffmanError::InvalidConfig(msg.into())
    }
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            HuffmanError::InvalidConfig(_) => ErrorKind::InvalidInput,
            HuffmanError::Io { source, .. } | HuffmanError::CodecBuild(source) => source.kind(),
            HuffmanError::CorruptTable { .. } => ErrorKind::InvalidData,
        }
    }
}

impl From<HuffmanError> for std::io::Error {
    fn from(e: HuffmanError) -> Self {
        std::io::Error::new(e.kind(), e)
    }
}
