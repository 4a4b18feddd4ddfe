use crate::directive::EncodingDirective;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const HUFFMAN_KEY: &str = "huffman_key";
pub const HUFFMAN_VALUE: &str = "huffman_value";
const NONE_VALUE: &str = "none";

/// Read access to a table's open-time configuration.
pub trait ConfigLookup {
    fn get_str(&self, name: &str) -> Option<&str>;
}

impl ConfigLookup for HashMap<String, String> {
    fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// The Huffman options of a table's configuration. The storage layout is a
/// property of the table itself and is passed to `open` separately.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuffmanConfig {
    #[serde(default)]
    pub huffman_key: Option<String>,
    #[serde(default)]
    pub huffman_value: Option<String>,
}

impl ConfigLookup for HuffmanConfig {
    fn get_str(&self, name: &str) -> Option<&str> {
        match name {
            HUFFMAN_KEY => self.huffman_key.as_deref(),
            HUFFMAN_VALUE => self.huffman_value.as_deref(),
            _ => None,
        }
    }
}

impl EncodingDirective {
    /// A missing option and the literal `none` both come back empty.
    pub fn from_config<C: ConfigLookup + ?Sized>(config: &C, name: &str) -> Self {
        match config.get_str(name) {
            None | Some(NONE_VALUE) => EncodingDirective::none(),
            Some(raw) => EncodingDirective::new(raw),
        }
    }
}
