//! Central error types for the bit rendering engine.
//!
//! Alle Fehler sind fatal fuer den gesamten Aufruf: das Rendering ist eine
//! reine Batch-Transformation ohne Partial-Failure-Modus. Jede Variante
//! traegt den fehlerhaften Literal- bzw. Spec-Text fuer die Diagnose.

use core::fmt;

/// All error conditions the rendering engine can report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A literal matches none of the numeric grammars (decimal, octal,
    /// binary, hexadecimal).
    UnrecognizedFormat(String),
    /// A decimal literal exceeds the native integer range, detected via
    /// round-trip mismatch between the parsed magnitude and the digit text.
    ValueTooLarge(String),
    /// An explicit output width is narrower than a value's natural width.
    WidthTooSmall {
        /// The literal whose natural width does not fit.
        literal: String,
        /// Bits the literal needs.
        needed: usize,
        /// The requested output width.
        width: usize,
    },
    /// A fixed group field is non-numeric or zero.
    InvalidGroupSize(String),
    /// More than one empty (variable-length) field in a group spec.
    MultipleVariableGroups(String),
    /// The group spec declares more bits than the bit string provides.
    InsufficientBits {
        /// The offending group spec text.
        spec: String,
        /// Length of the bit string being partitioned.
        len: usize,
    },
    /// Bits remain unconsumed after all group fields are placed.
    ExcessBits {
        /// The offending group spec text.
        spec: String,
        /// Length of the bit string being partitioned.
        len: usize,
        /// Number of unconsumed bits.
        excess: usize,
    },
    /// The bit numbering origin is negative.
    InvalidNumberFrom(i64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedFormat(literal) => {
                write!(f, "unrecognized numeric format '{literal}'")
            }
            Self::ValueTooLarge(literal) => {
                write!(f, "decimal value '{literal}' exceeds the native integer range")
            }
            Self::WidthTooSmall { literal, needed, width } => {
                write!(f, "width {width} too small: '{literal}' needs {needed} bits")
            }
            Self::InvalidGroupSize(spec) => {
                write!(f, "invalid group size in '{spec}': fields must be positive integers")
            }
            Self::MultipleVariableGroups(spec) => {
                write!(f, "group spec '{spec}' has more than one variable-length field")
            }
            Self::InsufficientBits { spec, len } => {
                write!(f, "group spec '{spec}' needs more than the {len} available bits")
            }
            Self::ExcessBits { spec, len, excess } => {
                write!(f, "group spec '{spec}' leaves {excess} of {len} bits unconsumed")
            }
            Self::InvalidNumberFrom(origin) => {
                write!(f, "numbering origin {origin} is negative")
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Erstellt einen `WidthTooSmall` Fehler mit Kontext.
    pub fn width_too_small(literal: impl Into<String>, needed: usize, width: usize) -> Self {
        Self::WidthTooSmall {
            literal: literal.into(),
            needed,
            width,
        }
    }

    /// Erstellt einen `InsufficientBits` Fehler mit Kontext.
    pub fn insufficient_bits(spec: impl Into<String>, len: usize) -> Self {
        Self::InsufficientBits { spec: spec.into(), len }
    }

    /// Erstellt einen `ExcessBits` Fehler mit Kontext.
    pub fn excess_bits(spec: impl Into<String>, len: usize, excess: usize) -> Self {
        Self::ExcessBits {
            spec: spec.into(),
            len,
            excess,
        }
    }
}

/// A convenience `Result` type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
