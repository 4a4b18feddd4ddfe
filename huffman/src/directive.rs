use crate::error::{HuffmanError, Result};
use crate::table::SymbolWidth;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::io::{Error, ErrorKind};
use std::path::Path;
use std::str::FromStr;

pub const ENGLISH: &str = "english";
pub const UTF8_PREFIX: &str = "utf8";
pub const UTF16_PREFIX: &str = "utf16";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Column {
    Key,
    Value,
}
impl Display for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Column::Key => write!(f, "key"),
            Column::Value => write!(f, "value"),
        }
    }
}

/// How the table stores its records, which limits what may be encoded.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageLayout {
    #[default]
    #[serde(rename = "row")]
    Row,
    #[serde(rename = "fix")]
    FixedColumn,
    #[serde(rename = "var")]
    VariableColumn,
}
impl FromStr for StorageLayout {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "row" => Ok(StorageLayout::Row),
            "fix" => Ok(StorageLayout::FixedColumn),
            "var" => Ok(StorageLayout::VariableColumn),
            _ => Err(Error::new(
                ErrorKind::InvalidInput,
                format!("Unknown storage layout: {s}"),
            )),
        }
    }
}
impl Display for StorageLayout {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageLayout::Row => write!(f, "row"),
            StorageLayout::FixedColumn => write!(f, "fix"),
            StorageLayout::VariableColumn => write!(f, "var"),
        }
    }
}

/// Where a directive's frequency table comes from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TableSource<'a> {
    English,
    File { width: SymbolWidth, path: &'a Path },
}

/// Raw `huffman_key` / `huffman_value` setting. Empty means no encoding.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct EncodingDirective {
    raw: String,
}
impl EncodingDirective {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
    #[must_use]
    pub fn is_english(&self) -> bool {
        self.raw.eq_ignore_ascii_case(ENGLISH)
    }
    /// True for the three accepted forms; the file path is not looked at.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        self.is_english() || self.file_prefix().is_some()
    }
    fn file_prefix(&self) -> Option<(SymbolWidth, &str)> {
        if has_prefix_ignore_case(&self.raw, UTF8_PREFIX) {
            Some((SymbolWidth::Byte, &self.raw[UTF8_PREFIX.len()..]))
        } else if has_prefix_ignore_case(&self.raw, UTF16_PREFIX) {
            Some((SymbolWidth::Wide, &self.raw[UTF16_PREFIX.len()..]))
        } else {
            None
        }
    }
    /// `Ok(None)` for an empty directive. Everything after a `utf8`/`utf16`
    /// prefix is the path, with no separator stripped.
    pub fn source(&self) -> Result<Option<TableSource<'_>>> {
        if self.is_empty() {
            return Ok(None);
        }
        if self.is_english() {
            return Ok(Some(TableSource::English));
        }
        match self.file_prefix() {
            Some((_, "")) => Err(HuffmanError::invalid_config(format!(
                "no Huffman table file name specified in {}",
                self.raw
            ))),
            Some((width, path)) => Ok(Some(TableSource::File {
                width,
                path: Path::new(path),
            })),
            None => Err(HuffmanError::invalid_config(format!(
                "unknown Huffman configuration value {}",
                self.raw
            ))),
        }
    }
}
impl Display for EncodingDirective {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
impl From<&str> for EncodingDirective {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

fn has_prefix_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|p| p.eq_ignore_ascii_case(prefix))
}

/// Checks both directives against the accepted tokens and the storage layout.
pub fn validate(
    key: &EncodingDirective,
    value: &EncodingDirective,
    layout: StorageLayout,
) -> Result<()> {
    for (column, directive) in [(Column::Key, key), (Column::Value, value)] {
        if !directive.is_empty() && !directive.is_recognized() {
            return Err(HuffmanError::invalid_config(format!(
                "illegal Huffman {column} configuration: {directive}"
            )));
        }
    }
    match layout {
        StorageLayout::FixedColumn if !key.is_empty() || !value.is_empty() => {
            Err(HuffmanError::invalid_config(
                "fixed-size column-store files may not be Huffman encoded",
            ))
        }
        StorageLayout::VariableColumn if !key.is_empty() => Err(HuffmanError::invalid_config(
            "the keys of variable-length column-store files may not be Huffman encoded",
        )),
        _ => Ok(()),
    }
}
