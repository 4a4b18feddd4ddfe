pub mod builder;
pub mod config;
pub mod corpus;
pub mod directive;
pub mod error;
pub mod lifecycle;
pub mod table;
pub mod table_file;

pub use builder::{build_codec, build_table, CodecBuilder};
pub use config::{ConfigLookup, HuffmanConfig, HUFFMAN_KEY, HUFFMAN_VALUE};
pub use directive::{validate, Column, EncodingDirective, StorageLayout, TableSource};
pub use error::{HuffmanError, Result};
pub use lifecycle::{CodecSlot, HuffmanCodecs, LifecycleState, ValuePlan};
pub use table::{FrequencyEntry, FrequencyTable, SymbolWidth};

fn _version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
fn _pkg_name() -> &'static str {
    env!("CARGO_PKG_NAME")
}

pub fn version() -> String {
    format!("{}: {}", _pkg_name(), _version())
}

#[test]
fn test_version() {
    println!("{}", version());
}
