use crate::error::{HuffmanError, Result};
use crate::table::{FrequencyEntry, FrequencyTable, SymbolWidth};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Loads a frequency table file: one `symbol frequency` pair of unsigned
/// decimal integers per line, kept in file order.
///
/// At most `width.max_symbol()` entries are accepted and no symbol may exceed
/// that same value. Blank lines are only allowed at the end of the file. The
/// file is closed on every return path.
pub fn read_table_file(path: &Path, width: SymbolWidth) -> Result<FrequencyTable> {
    let file = File::open(path).map_err(|source| HuffmanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_table(BufReader::new(file), path, width)?;
    debug!(
        "Loaded {} Huffman table entries from {}",
        table.entry_count(),
        path.display()
    );
    Ok(table)
}

/// Same as [`read_table_file`] over any buffered reader; `path` only names
/// the source in errors.
pub fn read_table<R: BufRead>(
    reader: R,
    path: &Path,
    width: SymbolWidth,
) -> Result<FrequencyTable> {
    let max = width.max_symbol();
    let mut table = FrequencyTable::with_capacity(width, max as usize);
    let mut first_blank = None;
    for (index, line) in reader.split(b'\n').enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| HuffmanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let corrupt_at = |line: usize, reason: String| HuffmanError::CorruptTable {
            file: path.to_path_buf(),
            line,
            reason,
        };
        let corrupt = |reason: String| corrupt_at(line_no, reason);
        if line.iter().all(u8::is_ascii_whitespace) {
            first_blank.get_or_insert(line_no);
            continue;
        }
        if let Some(blank) = first_blank {
            return Err(corrupt_at(
                blank,
                "expected two unsigned integral values".to_string(),
            ));
        }
        if line_no > max as usize {
            return Err(corrupt(format!("more than {max} entries")));
        }
        let (symbol, frequency) = parse_line(&line)
            .ok_or_else(|| corrupt("expected two unsigned integral values".to_string()))?;
        if symbol > u64::from(max) {
            return Err(corrupt(format!(
                "symbol {symbol} larger than maximum value of {max}"
            )));
        }
        let frequency = u32::try_from(frequency).map_err(|_| {
            corrupt(format!(
                "frequency {frequency} larger than maximum value of {}",
                u32::MAX
            ))
        })?;
        #[allow(clippy::cast_possible_truncation)]
        table.push(FrequencyEntry::new(symbol as u32, frequency));
    }
    Ok(table)
}

fn parse_line(line: &[u8]) -> Option<(u64, u64)> {
    let line = std::str::from_utf8(line).ok()?;
    let mut fields = line.split_ascii_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(symbol), Some(frequency), None) => {
            Some((parse_unsigned(symbol)?, parse_unsigned(frequency)?))
        }
        _ => None,
    }
}

fn parse_unsigned(field: &str) -> Option<u64> {
    if field.bytes().all(|b| b.is_ascii_digit()) {
        field.parse().ok()
    } else {
        None
    }
}
