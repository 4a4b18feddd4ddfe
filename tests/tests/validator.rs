#[cfg(test)]
mod tests {
    use dg_huffman::{validate, EncodingDirective, HuffmanError, StorageLayout};

    fn check(key: &str, value: &str, layout: StorageLayout) -> Result<(), HuffmanError> {
        validate(
            &EncodingDirective::from(key),
            &EncodingDirective::from(value),
            layout,
        )
    }

    const VALID: [&str; 5] = ["english", "EnGlIsH", "utf8/tables/a", "UTF16/tables/b", "utf8"];

    #[test]
    fn test_empty_directives_pass_every_layout() {
        for layout in [
            StorageLayout::Row,
            StorageLayout::FixedColumn,
            StorageLayout::VariableColumn,
        ] {
            assert!(check("", "", layout).is_ok(), "{layout}");
        }
    }

    #[test]
    fn test_row_layout_accepts_all_tokens() {
        for key in VALID {
            for value in VALID {
                assert!(check(key, value, StorageLayout::Row).is_ok(), "{key} {value}");
            }
        }
    }

    #[test]
    fn test_unknown_tokens_rejected() {
        for bad in ["ascii", "englis", "english ", "utf-8/x", "/tmp/table"] {
            assert!(matches!(
                check(bad, "", StorageLayout::Row),
                Err(HuffmanError::InvalidConfig(msg)) if msg.contains("key")
            ));
            assert!(matches!(
                check("", bad, StorageLayout::Row),
                Err(HuffmanError::InvalidConfig(msg)) if msg.contains("value")
            ));
        }
    }

    #[test]
    fn test_fixed_layout_rejects_any_directive() {
        for directive in VALID {
            assert!(matches!(
                check(directive, "", StorageLayout::FixedColumn),
                Err(HuffmanError::InvalidConfig(_))
            ));
            assert!(matches!(
                check("", directive, StorageLayout::FixedColumn),
                Err(HuffmanError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_variable_layout_rejects_key_only() {
        for directive in VALID {
            assert!(matches!(
                check(directive, "", StorageLayout::VariableColumn),
                Err(HuffmanError::InvalidConfig(_))
            ));
            assert!(check("", directive, StorageLayout::VariableColumn).is_ok());
        }
    }
}
