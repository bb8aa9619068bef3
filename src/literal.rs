//! Literal classification and decoding into canonical bit strings.
//!
//! Ein Literal wird in fester Reihenfolge klassifiziert, first match wins:
//!
//! 1. Dezimal: optionales `+`/`-`, Ziffern ohne fuehrende Null
//! 2. Oktal: fuehrende `0` oder `0o`/`0O`, Ziffern 0-7
//! 3. Binaer: optionales `0b`/`0B` oder `b`/`B`, Ziffern 0/1
//! 4. Hexadezimal (Fallback): optionales `0x`/`0X`, Hex-Ziffern
//!
//! Die Tausender-Trenner `,` und `_` werden vor der Analyse entfernt.
//! Oktal- und Hex-Ziffern expandieren ueber feste 3-Bit/4-Bit-Tabellen,
//! die Dezimal-Dekodierung laeuft ueber native `u64`-Arithmetik.

use crate::{Error, Result};

/// Fixed 3-bit patterns for the octal digits 0-7, most significant bit first.
const OCTAL_BITS: [&str; 8] = ["000", "001", "010", "011", "100", "101", "110", "111"];

/// Fixed 4-bit patterns for the hex digits 0-f, most significant bit first.
const HEX_BITS: [&str; 16] = [
    "0000", "0001", "0010", "0011", "0100", "0101", "0110", "0111",
    "1000", "1001", "1010", "1011", "1100", "1101", "1110", "1111",
];

/// A literal decoded into its canonical bit representation.
///
/// `bits` holds the natural (minimal-width) form, most significant bit
/// first, with no implicit leading padding. Padding to the resolved
/// output width happens later in the renderer and produces a new string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedValue {
    /// The original literal text as given by the caller.
    pub text: String,
    /// Bits `'0'`/`'1'`, most significant first.
    pub bits: String,
    /// True for negative decimals; drives 1-fill sign extension.
    pub negative: bool,
}

impl ParsedValue {
    /// Natural bit width before any external padding.
    pub fn width(&self) -> usize {
        self.bits.len()
    }
}

/// Classifies and decodes a literal into a [`ParsedValue`].
///
/// Pure function of the input text; fails with
/// [`Error::UnrecognizedFormat`] when no grammar matches and with
/// [`Error::ValueTooLarge`] when a decimal exceeds the `u64` range.
pub fn parse_literal(text: &str) -> Result<ParsedValue> {
    let cleaned: String = text.chars().filter(|&c| c != ',' && c != '_').collect();

    let decoded = if let Some(result) = decimal_bits(&cleaned) {
        let (bits, negative) = result?;
        (bits, negative)
    } else if let Some(bits) = octal_bits(&cleaned) {
        (bits, false)
    } else if let Some(bits) = binary_bits(&cleaned) {
        (bits, false)
    } else if let Some(bits) = hex_bits(&cleaned) {
        (bits, false)
    } else {
        return Err(Error::UnrecognizedFormat(text.to_string()));
    };

    Ok(ParsedValue {
        text: text.to_string(),
        bits: decoded.0,
        negative: decoded.1,
    })
}

/// Minimal binary rendering of `v`; the value 0 maps to the empty string
/// so that the later sign/zero padding fully determines its digits.
fn minimal_bits(v: u64) -> String {
    if v == 0 {
        String::new()
    } else {
        format!("{v:b}")
    }
}

/// Decimal grammar: `^[+-]?[1-9][0-9]*$`.
///
/// Returns `None` when the pattern does not match (next grammar is tried)
/// and `Some(Err(..))` when it matches but the value does not fit `u64`.
fn decimal_bits(s: &str) -> Option<Result<(String, bool)>> {
    let (negative, digits) = match s.as_bytes().first()? {
        b'+' => (false, &s[1..]),
        b'-' => (true, &s[1..]),
        _ => (false, s),
    };
    let first = digits.as_bytes().first()?;
    if !(b'1'..=b'9').contains(first) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(decode_decimal(s, digits, negative))
}

fn decode_decimal(literal: &str, digits: &str, negative: bool) -> Result<(String, bool)> {
    let magnitude: u64 = digits
        .parse()
        .map_err(|_| Error::ValueTooLarge(literal.to_string()))?;
    // Round-Trip-Wache: re-encoden muss exakt den Ziffern-Text reproduzieren
    if magnitude.to_string() != digits {
        return Err(Error::ValueTooLarge(literal.to_string()));
    }
    if negative {
        // Minimal-width two's complement: render (magnitude - 1) and flip
        // each bit, so that later 1-fill padding sign-extends correctly.
        // -1 maps to the empty bit string (all padding).
        let flipped: String = minimal_bits(magnitude - 1)
            .chars()
            .map(|c| if c == '0' { '1' } else { '0' })
            .collect();
        Ok((flipped, true))
    } else {
        Ok((minimal_bits(magnitude), false))
    }
}

/// Octal grammar: leading `0` or `0o`/`0O`, then at least one digit 0-7.
fn octal_bits(s: &str) -> Option<String> {
    let digits = s
        .strip_prefix("0o")
        .or_else(|| s.strip_prefix("0O"))
        .or_else(|| s.strip_prefix('0'))?;
    if digits.is_empty() || !digits.bytes().all(|b| (b'0'..=b'7').contains(&b)) {
        return None;
    }
    Some(
        digits
            .bytes()
            .map(|b| OCTAL_BITS[(b - b'0') as usize])
            .collect(),
    )
}

/// Binary grammar: optional `0b`/`0B` or `b`/`B`, then digits 0/1.
fn binary_bits(s: &str) -> Option<String> {
    let digits = s
        .strip_prefix("0b")
        .or_else(|| s.strip_prefix("0B"))
        .or_else(|| s.strip_prefix('b'))
        .or_else(|| s.strip_prefix('B'))
        .unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    Some(digits.to_string())
}

/// Hexadecimal grammar (fallback): optional `0x`/`0X`, case-insensitive digits.
fn hex_bits(s: &str) -> Option<String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Some(
        digits
            .bytes()
            .map(|b| {
                let digit = match b {
                    b'0'..=b'9' => b - b'0',
                    b'a'..=b'f' => 10 + b - b'a',
                    _ => 10 + b - b'A',
                };
                HEX_BITS[usize::from(digit)]
            })
            .collect(),
    )
}
