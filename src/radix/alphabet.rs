//! Digit alphabet shared by the decoder and the encoder.
//!
//! The alphabet is the ordered sequence `0-9a-z`. A symbol's value is its
//! position in that sequence, and a base-`b` numeral may only use the first
//! `b` symbols.
//!
//! # Design Choices
//! - **Two-way table**: `SYMBOLS` maps value → symbol and `VALUES` maps
//!   ASCII byte → value. Both are built at compile time and never mutated.
//! - **Case-insensitive lookup**: `A-Z` resolve to the same values as `a-z`.
//!   Encoding always emits lowercase.

/// Number of symbols in the alphabet, and therefore the largest supported base.
pub const ALPHABET_LEN: u32 = 36;

/// Value → symbol table.
pub const SYMBOLS: [u8; ALPHABET_LEN as usize] = *b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Marker for bytes that are not part of the alphabet.
const INVALID: u8 = 0xFF;

/// ASCII byte → value table. Non-alphabet bytes map to `INVALID`.
const VALUES: [u8; 256] = build_value_table();

const fn build_value_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < SYMBOLS.len() {
        let sym = SYMBOLS[i];
        table[sym as usize] = i as u8;
        // Uppercase twin for letters.
        if sym.is_ascii_lowercase() {
            table[sym.to_ascii_uppercase() as usize] = i as u8;
        }
        i += 1;
    }
    table
}

/// Returns the value of `c`, or `None` if `c` is not an alphabet symbol.
#[inline]
pub fn digit_value(c: char) -> Option<u32> {
    if !c.is_ascii() {
        return None;
    }
    match VALUES[c as usize] {
        INVALID => None,
        v => Some(v as u32),
    }
}

/// Returns the symbol for `value`, or `None` if `value >= ALPHABET_LEN`.
#[inline]
pub fn symbol(value: u32) -> Option<char> {
    SYMBOLS.get(value as usize).map(|&b| b as char)
}
