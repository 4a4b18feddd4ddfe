//! 7-bit ASCII symbol frequencies for English text.
//!
//! Letter counts come from "Case-sensitive letter and bigram frequency counts
//! from large-scale English corpora" (Jones & Mewhort, Behavior Research
//! Methods, Instruments, & Computers 2004, 36 (3), 388-396). Space and tab are
//! added on top: space is the most common character where it occurs at all,
//! and tab shows up about as often as 'a' and 'n'.

use crate::table::{FrequencyEntry, FrequencyTable, SymbolWidth};

pub const ENGLISH_SYMBOL_WIDTH: SymbolWidth = SymbolWidth::Byte;

pub static ENGLISH_FREQUENCIES: [FrequencyEntry; 97] = [
    FrequencyEntry::new(0x00, 0), // escape
    FrequencyEntry::new(0x09, 5263779), // tab
    FrequencyEntry::new(0x20, 8000000), // space
    FrequencyEntry::new(0x21, 2178),
    FrequencyEntry::new(0x22, 284671),
    FrequencyEntry::new(0x23, 10),
    FrequencyEntry::new(0x24, 51572),
    FrequencyEntry::new(0x25, 1993),
    FrequencyEntry::new(0x26, 6523),
    FrequencyEntry::new(0x27, 204497),
    FrequencyEntry::new(0x28, 53398),
    FrequencyEntry::new(0x29, 53735),
    FrequencyEntry::new(0x2a, 20716),
    FrequencyEntry::new(0x2b, 309),
    FrequencyEntry::new(0x2c, 984969),
    FrequencyEntry::new(0x2d, 252302),
    FrequencyEntry::new(0x2e, 946136),
    FrequencyEntry::new(0x2f, 8161),
    FrequencyEntry::new(0x30, 546233),
    FrequencyEntry::new(0x31, 460946),
    FrequencyEntry::new(0x32, 333499),
    FrequencyEntry::new(0x33, 187606),
    FrequencyEntry::new(0x34, 192528),
    FrequencyEntry::new(0x35, 374413),
    FrequencyEntry::new(0x36, 153865),
    FrequencyEntry::new(0x37, 120094),
    FrequencyEntry::new(0x38, 182627),
    FrequencyEntry::new(0x39, 282364),
    FrequencyEntry::new(0x3a, 54036),
    FrequencyEntry::new(0x3b, 36727),
    FrequencyEntry::new(0x3c, 82),
    FrequencyEntry::new(0x3d, 22),
    FrequencyEntry::new(0x3e, 83),
    FrequencyEntry::new(0x3f, 12357),
    FrequencyEntry::new(0x40, 1),
    FrequencyEntry::new(0x41, 280937),
    FrequencyEntry::new(0x42, 169474),
    FrequencyEntry::new(0x43, 229363),
    FrequencyEntry::new(0x44, 129632),
    FrequencyEntry::new(0x45, 138443),
    FrequencyEntry::new(0x46, 100751),
    FrequencyEntry::new(0x47, 93212),
    FrequencyEntry::new(0x48, 123632),
    FrequencyEntry::new(0x49, 223312),
    FrequencyEntry::new(0x4a, 78706),
    FrequencyEntry::new(0x4b, 46580),
    FrequencyEntry::new(0x4c, 106984),
    FrequencyEntry::new(0x4d, 259474),
    FrequencyEntry::new(0x4e, 205409),
    FrequencyEntry::new(0x4f, 105700),
    FrequencyEntry::new(0x50, 144239),
    FrequencyEntry::new(0x51, 11659),
    FrequencyEntry::new(0x52, 146448),
    FrequencyEntry::new(0x53, 304971),
    FrequencyEntry::new(0x54, 325462),
    FrequencyEntry::new(0x55, 57488),
    FrequencyEntry::new(0x56, 31053),
    FrequencyEntry::new(0x57, 107195),
    FrequencyEntry::new(0x58, 7578),
    FrequencyEntry::new(0x59, 94297),
    FrequencyEntry::new(0x5a, 5610),
    FrequencyEntry::new(0x5b, 1),
    FrequencyEntry::new(0x5c, 1),
    FrequencyEntry::new(0x5d, 1),
    FrequencyEntry::new(0x5e, 1),
    FrequencyEntry::new(0x5f, 1),
    FrequencyEntry::new(0x60, 1),
    FrequencyEntry::new(0x61, 5263779),
    FrequencyEntry::new(0x62, 866156),
    FrequencyEntry::new(0x63, 1960412),
    FrequencyEntry::new(0x64, 2369820),
    FrequencyEntry::new(0x65, 7741842),
    FrequencyEntry::new(0x66, 1296925),
    FrequencyEntry::new(0x67, 1206747),
    FrequencyEntry::new(0x68, 2955858),
    FrequencyEntry::new(0x69, 4527332),
    FrequencyEntry::new(0x6a, 65856),
    FrequencyEntry::new(0x6b, 460788),
    FrequencyEntry::new(0x6c, 2553152),
    FrequencyEntry::new(0x6d, 1467376),
    FrequencyEntry::new(0x6e, 4535545),
    FrequencyEntry::new(0x6f, 4729266),
    FrequencyEntry::new(0x70, 1255579),
    FrequencyEntry::new(0x71, 54221),
    FrequencyEntry::new(0x72, 4137949),
    FrequencyEntry::new(0x73, 4186210),
    FrequencyEntry::new(0x74, 5507692),
    FrequencyEntry::new(0x75, 1613323),
    FrequencyEntry::new(0x76, 653370),
    FrequencyEntry::new(0x77, 1015656),
    FrequencyEntry::new(0x78, 123577),
    FrequencyEntry::new(0x79, 1062040),
    FrequencyEntry::new(0x7a, 66423),
    FrequencyEntry::new(0x7b, 1),
    FrequencyEntry::new(0x7c, 1),
    FrequencyEntry::new(0x7d, 1),
    FrequencyEntry::new(0x7e, 1),
];

/// Fresh, mutable copy of the English table. Codec construction is free to
/// reorder what it is given, so the static data never leaves this module.
pub fn english_table() -> FrequencyTable {
    FrequencyTable::from_entries(ENGLISH_FREQUENCIES.to_vec(), ENGLISH_SYMBOL_WIDTH)
}
