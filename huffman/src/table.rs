use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub symbol: u32,
    pub frequency: u32,
}
impl FrequencyEntry {
    #[must_use]
    pub const fn new(symbol: u32, frequency: u32) -> Self {
        Self { symbol, frequency }
    }
}
impl Display for FrequencyEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.symbol, self.frequency)
    }
}

/// Number of bytes per encoded symbol.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolWidth {
    Byte = 1,
    Wide = 2,
}
impl SymbolWidth {
    /// Largest symbol value, which is also the most entries a table file may hold.
    #[must_use]
    pub const fn max_symbol(self) -> u32 {
        match self {
            SymbolWidth::Byte => u8::MAX as u32,
            SymbolWidth::Wide => u16::MAX as u32,
        }
    }
}

/// Symbol/frequency pairs in construction order. Entries are not keyed or
/// sorted by symbol and duplicates are kept; what to make of them is up to
/// the codec the table is handed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
    symbol_width: SymbolWidth,
}
impl FrequencyTable {
    #[must_use]
    pub fn with_capacity(symbol_width: SymbolWidth, capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            symbol_width,
        }
    }
    #[must_use]
    pub fn from_entries(entries: Vec<FrequencyEntry>, symbol_width: SymbolWidth) -> Self {
        Self {
            entries,
            symbol_width,
        }
    }
    pub fn push(&mut self, entry: FrequencyEntry) {
        self.entries.push(entry);
    }
    #[must_use]
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }
    pub fn entries_mut(&mut self) -> &mut [FrequencyEntry] {
        &mut self.entries
    }
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    #[must_use]
    pub fn symbol_width(&self) -> SymbolWidth {
        self.symbol_width
    }
    #[must_use]
    pub fn total_frequency(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.frequency)).sum()
    }
}
