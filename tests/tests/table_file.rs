#[cfg(test)]
mod tests {
    use dg_huffman::table_file::read_table_file;
    use dg_huffman::{build_table, EncodingDirective, FrequencyEntry, HuffmanError, SymbolWidth};
    use dg_huffman_tests::{init_logger, utf16_directive, utf8_directive, write_table};
    use std::io::ErrorKind;
    use std::path::Path;

    #[test]
    fn test_symbol_above_byte_range() {
        init_logger();
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_table(dir.path(), "t", "5 100\n65 200\n300 50\n");
        match read_table_file(&path, SymbolWidth::Byte) {
            Err(HuffmanError::CorruptTable { file, line, .. }) => {
                assert_eq!(file, path);
                assert_eq!(line, 3);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_same_symbol_fits_wide_table() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_table(dir.path(), "t", "5 100\n65 200\n300 50\n");
        let table = build_table(&EncodingDirective::new(utf16_directive(&path)))
            .expect("valid table")
            .expect("non-empty directive");
        assert_eq!(table.symbol_width(), SymbolWidth::Wide);
        assert_eq!(
            table.entries(),
            &[
                FrequencyEntry::new(5, 100),
                FrequencyEntry::new(65, 200),
                FrequencyEntry::new(300, 50),
            ]
        );
    }

    #[test]
    fn test_frequency_above_u32() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_table(dir.path(), "t", "5 100\n7 4294967296\n");
        let err = read_table_file(&path, SymbolWidth::Byte).expect_err("corrupt table");
        assert!(matches!(err, HuffmanError::CorruptTable { line: 2, .. }));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_empty_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_table(dir.path(), "empty", "");
        let table = build_table(&EncodingDirective::new(utf8_directive(&path)))
            .expect("empty table")
            .expect("non-empty directive");
        assert_eq!(table.entry_count(), 0);
        assert_eq!(table.symbol_width(), SymbolWidth::Byte);
    }

    #[test]
    fn test_missing_file() {
        let err = read_table_file(Path::new("/no/such/file"), SymbolWidth::Byte)
            .expect_err("missing file");
        match err {
            HuffmanError::Io { path, source } => {
                assert_eq!(path, Path::new("/no/such/file"));
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_directive_without_file_name() {
        for raw in ["utf8", "UTF16"] {
            assert!(matches!(
                build_table(&EncodingDirective::from(raw)),
                Err(HuffmanError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_wide_table_entry_limit() {
        let dir = tempfile::tempdir().expect("temp dir");
        let full: String = (0..65535u32).map(|s| format!("{s} {}\n", s + 1)).collect();
        let path = write_table(dir.path(), "full", &full);
        let table = read_table_file(&path, SymbolWidth::Wide).expect("full table");
        assert_eq!(table.entry_count(), 65535);
        assert_eq!(table.entries()[65534], FrequencyEntry::new(65534, 65535));

        let path = write_table(dir.path(), "over", &format!("{full}1 1\n"));
        assert!(matches!(
            read_table_file(&path, SymbolWidth::Wide),
            Err(HuffmanError::CorruptTable { line: 65536, .. })
        ));
    }
}
