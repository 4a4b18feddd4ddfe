use crate::corpus::english_table;
use crate::directive::{EncodingDirective, TableSource};
use crate::error::{HuffmanError, Result};
use crate::table::FrequencyTable;
use crate::table_file::read_table_file;
use std::io::Error;

/// Turns a frequency table into a codec and tears it down again.
///
/// `build` takes ownership of the table. `release` is called exactly once
/// for every codec `build` returned, even when the same codec serves both
/// the key and the value column.
pub trait CodecBuilder {
    type Codec;
    fn build(&self, table: FrequencyTable) -> std::result::Result<Self::Codec, Error>;
    fn release(&self, codec: Self::Codec) {
        drop(codec);
    }
}

/// Produces the table a directive asks for. `Ok(None)` for an empty
/// directive. The English corpus always comes back as a fresh copy.
pub fn build_table(directive: &EncodingDirective) -> Result<Option<FrequencyTable>> {
    match directive.source()? {
        None => Ok(None),
        Some(TableSource::English) => Ok(Some(english_table())),
        Some(TableSource::File { width, path }) => read_table_file(path, width).map(Some),
    }
}

pub fn build_codec<B: CodecBuilder + ?Sized>(
    builder: &B,
    directive: &EncodingDirective,
) -> Result<Option<B::Codec>> {
    match build_table(directive)? {
        None => Ok(None),
        Some(table) => builder
            .build(table)
            .map(Some)
            .map_err(HuffmanError::CodecBuild),
    }
}
