use crate::cli::{Cli, RootCommands, TableOutput};
use clap::Parser;
use dg_huffman::{
    build_table, validate, CodecBuilder, EncodingDirective, FrequencyTable, HuffmanCodecs,
    HuffmanConfig, StorageLayout, SymbolWidth,
};
use log::info;
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::fmt::Write;
use std::fs;
use std::io::Error;
use std::path::Path;

pub mod cli;

pub fn run_cli() -> Result<(), Error> {
    let cli = Cli::parse();
    SimpleLogger::new().env().init().unwrap_or_default();
    match cli.action {
        RootCommands::Check { key, value, layout } => {
            check_directives(&key, &value, layout)?;
            info!("Huffman configuration is valid for {layout} layout");
        }
        RootCommands::Dump { directive, output } => {
            print!("{}", dump_directive(&directive, output.unwrap_or_default())?);
        }
        RootCommands::Open { config, layout } => {
            print!("{}", open_config(Path::new(&config), layout)?);
        }
    }
    Ok(())
}

pub fn check_directives(key: &str, value: &str, layout: StorageLayout) -> Result<(), Error> {
    validate(
        &EncodingDirective::from(key),
        &EncodingDirective::from(value),
        layout,
    )
    .map_err(Error::from)
}

/// Text output is itself a valid table file.
pub fn dump_directive(directive: &str, output: TableOutput) -> Result<String, Error> {
    let directive = EncodingDirective::from(directive);
    validate(&directive, &EncodingDirective::none(), StorageLayout::Row)?;
    let Some(table) = build_table(&directive)? else {
        return Ok(String::new());
    };
    match output {
        TableOutput::Text => {
            let mut out = String::new();
            for entry in table.entries() {
                writeln!(out, "{entry}").map_err(Error::other)?;
            }
            Ok(out)
        }
        TableOutput::Json => {
            let mut out = serde_json::to_string_pretty(&table).map_err(Error::other)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// What the CLI builds in place of a real codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub entries: usize,
    pub symbol_width: SymbolWidth,
    pub total_frequency: u64,
}

#[derive(Default)]
pub struct SummaryBuilder;
impl CodecBuilder for SummaryBuilder {
    type Codec = TableSummary;

    fn build(&self, table: FrequencyTable) -> Result<TableSummary, Error> {
        Ok(TableSummary {
            entries: table.entry_count(),
            symbol_width: table.symbol_width(),
            total_frequency: table.total_frequency(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct OpenReport {
    pub layout: StorageLayout,
    pub key: Option<TableSummary>,
    pub value: Option<TableSummary>,
    pub value_shared: bool,
}

pub fn open_config(path: &Path, layout: StorageLayout) -> Result<String, Error> {
    let config: HuffmanConfig = serde_json::from_str(&fs::read_to_string(path)?)?;
    let mut codecs = HuffmanCodecs::new(SummaryBuilder);
    codecs.open(&config, layout)?;
    let report = OpenReport {
        layout,
        key: codecs.key_codec().cloned(),
        value: codecs.value_codec().cloned(),
        value_shared: codecs.value_is_shared(),
    };
    codecs.close();
    let mut out = serde_json::to_string_pretty(&report).map_err(Error::other)?;
    out.push('\n');
    Ok(out)
}
