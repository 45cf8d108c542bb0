#![no_main]

use libfuzzer_sys::fuzz_target;
use cvnum::NatConverter;

fuzz_target!(|data: &[u8]| {
    // First two bytes pick the base, the rest are treated as decimal numerals
    if data.len() < 2 {
        return;
    }
    let base = u64::from(u16::from_le_bytes([data[0], data[1]]));
    let Ok(text) = std::str::from_utf8(&data[2..]) else {
        return;
    };
    let numerals: Vec<String> = text.chars().map(String::from).collect();

    let conv = NatConverter::default();
    if let Ok(numerals) = conv.numerals_to_base_numerals(&numerals, base) {
        let width = numerals.first().map_or(0, String::len);
        assert!(numerals.iter().all(|n| n.len() == width));
    }
});
