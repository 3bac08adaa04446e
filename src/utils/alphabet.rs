//! Nucleotide alphabet codec
//!
//! Maps the four bases (case-insensitive) and the reserved `$` terminator to
//! dense codes in `0..ALPHABET_SIZE`. Codes index the fixed-size child table
//! of every tree node, so the order here is also the order in which subtrees
//! are visited during leaf collection.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of distinct symbols, terminator included
pub const ALPHABET_SIZE: usize = 5;

/// Character appended to every inserted string
pub const TERMINATOR_CHAR: char = '$';

/// A single encoded symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Symbol {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
    Terminator = 4,
}

impl Symbol {
    /// All symbols in code order
    pub const ALL: [Symbol; ALPHABET_SIZE] = [
        Symbol::A,
        Symbol::C,
        Symbol::G,
        Symbol::T,
        Symbol::Terminator,
    ];

    /// Encode a character. Anything outside the alphabet yields `None`.
    #[inline]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'a' | 'A' => Some(Symbol::A),
            'c' | 'C' => Some(Symbol::C),
            'g' | 'G' => Some(Symbol::G),
            't' | 'T' => Some(Symbol::T),
            TERMINATOR_CHAR => Some(Symbol::Terminator),
            _ => None,
        }
    }

    #[inline]
    pub fn from_code(code: usize) -> Option<Self> {
        Self::ALL.get(code).copied()
    }

    /// Dense code in `0..ALPHABET_SIZE`
    #[inline]
    pub const fn code(self) -> usize {
        self as usize
    }

    /// Canonical (uppercase) character for this symbol
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Symbol::A => 'A',
            Symbol::C => 'C',
            Symbol::G => 'G',
            Symbol::T => 'T',
            Symbol::Terminator => TERMINATOR_CHAR,
        }
    }

    #[inline]
    pub const fn is_terminator(self) -> bool {
        matches!(self, Symbol::Terminator)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Map a character to its symbol code
pub fn encode(ch: char) -> Option<usize> {
    Symbol::from_char(ch).map(Symbol::code)
}

/// Map a symbol code back to its character
pub fn decode(code: usize) -> Option<char> {
    Symbol::from_code(code).map(Symbol::to_char)
}

/// Encode token text, rejecting the whole token on the first bad character.
///
/// The terminator is reserved: the tree appends it itself, so it is rejected
/// here as well.
pub fn encode_token(text: &str) -> Result<Vec<Symbol>> {
    let mut symbols = Vec::with_capacity(text.len() + 1);
    for (position, ch) in text.chars().enumerate() {
        match Symbol::from_char(ch) {
            Some(Symbol::Terminator) => return Err(Error::ReservedTerminator { position }),
            Some(symbol) => symbols.push(symbol),
            None => return Err(Error::InvalidSymbol { ch, position }),
        }
    }
    Ok(symbols)
}

/// Encode query text. Unlike tokens, queries may carry the terminator to
/// anchor a match at the end of a token.
pub fn encode_query(text: &str) -> Option<Vec<Symbol>> {
    text.chars().map(Symbol::from_char).collect()
}

/// Render symbols back to text
pub fn symbols_to_string(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.to_char()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_case_insensitive() {
        assert_eq!(encode('a'), Some(0));
        assert_eq!(encode('A'), Some(0));
        assert_eq!(encode('c'), Some(1));
        assert_eq!(encode('G'), Some(2));
        assert_eq!(encode('t'), Some(3));
        assert_eq!(encode('$'), Some(4));
    }

    #[test]
    fn test_encode_rejects_other_chars() {
        for ch in ['N', 'u', 'x', ' ', '#', '0', 'é'] {
            assert_eq!(encode(ch), None, "{ch:?} must not alias a valid code");
        }
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode(0), Some('A'));
        assert_eq!(decode(3), Some('T'));
        assert_eq!(decode(4), Some('$'));
        assert_eq!(decode(5), None);
        assert_eq!(decode(usize::MAX), None);
    }

    #[test]
    fn test_codes_are_dense() {
        for (i, symbol) in Symbol::ALL.iter().enumerate() {
            assert_eq!(symbol.code(), i);
            assert_eq!(encode(decode(i).unwrap()), Some(i));
        }
    }

    #[test]
    fn test_encode_token() {
        let symbols = encode_token("acGT").unwrap();
        assert_eq!(symbols, vec![Symbol::A, Symbol::C, Symbol::G, Symbol::T]);
        assert_eq!(symbols_to_string(&symbols), "ACGT");

        match encode_token("ACNT") {
            Err(Error::InvalidSymbol { ch, position }) => {
                assert_eq!(ch, 'N');
                assert_eq!(position, 2);
            }
            other => panic!("unexpected result: {other:?}"),
        }

        assert!(matches!(
            encode_token("AC$"),
            Err(Error::ReservedTerminator { position: 2 })
        ));
    }

    #[test]
    fn test_encode_query() {
        assert_eq!(
            encode_query("gt$"),
            Some(vec![Symbol::G, Symbol::T, Symbol::Terminator])
        );
        assert_eq!(encode_query("GX"), None);
        assert_eq!(encode_query(""), Some(vec![]));
    }
}
