//! Grouping configuration and bit-string partitioning.
//!
//! Eine Gruppierung ist entweder uniform (alle `size` Bits eine Gruppe,
//! 0 = keine Gruppierung) oder eine Feldliste aus einem Doppelpunkt-Spec
//! wie `:6:3:5`. Ein leeres Feld markiert den variablen Slot, der alle
//! Bits aufnimmt, die kein festes Feld beansprucht; hoechstens ein Feld
//! darf variabel sein.
//!
//! Felder sind most-significant-first deklariert, werden beim Partitionieren
//! aber vom niederwertigen Ende her angewendet: ein Index-Cursor konsumiert
//! feste Slices vom Ende des unveraenderlichen Bit-Strings.

use colored::Colorize;

use crate::{Error, Result};

/// One declared group field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Consumes exactly this many bits.
    Fixed(usize),
    /// Consumes whatever the fixed fields leave over.
    Variable,
}

/// Grouping configuration, built once from user input and read-only
/// during rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupSpec {
    /// Group every `size` bits from the least-significant end; 0 disables
    /// grouping.
    Uniform(usize),
    /// Heterogeneous field list from a colon-separated spec.
    Fields {
        /// Declared most-significant-first.
        fields: Vec<Field>,
        /// Original spec text, kept for diagnostics.
        text: String,
    },
}

impl GroupSpec {
    /// Uniform grouping with the given chunk size.
    pub fn uniform(size: usize) -> Self {
        Self::Uniform(size)
    }

    /// Parses user grouping input: a single non-negative integer for
    /// uniform mode, otherwise a colon-separated field spec.
    pub fn parse(spec: &str) -> Result<Self> {
        if !spec.contains(':') {
            if spec.is_empty() {
                return Ok(Self::Uniform(0));
            }
            let size = spec
                .parse::<usize>()
                .map_err(|_| Error::InvalidGroupSize(spec.to_string()))?;
            return Ok(Self::Uniform(size));
        }

        let mut fields = Vec::new();
        let mut variables = 0usize;
        for part in spec.split(':') {
            if part.is_empty() {
                variables += 1;
                fields.push(Field::Variable);
            } else {
                let size = part
                    .parse::<usize>()
                    .map_err(|_| Error::InvalidGroupSize(spec.to_string()))?;
                if size == 0 {
                    return Err(Error::InvalidGroupSize(spec.to_string()));
                }
                fields.push(Field::Fixed(size));
            }
        }
        if variables > 1 {
            return Err(Error::MultipleVariableGroups(spec.to_string()));
        }
        Ok(Self::Fields {
            fields,
            text: spec.to_string(),
        })
    }

    /// Nominal total of the fixed field sizes (0 in uniform mode).
    pub fn fixed_total(&self) -> usize {
        match self {
            Self::Uniform(_) => 0,
            Self::Fields { fields, .. } => fields
                .iter()
                .map(|f| match f {
                    Field::Fixed(size) => *size,
                    Field::Variable => 0,
                })
                .sum(),
        }
    }

    /// Partitions `bits` (MSB first) into groups, ordered MSB first.
    ///
    /// Uniform mode chunks from the least-significant end; the leftmost
    /// chunk absorbs the remainder and may be shorter. Field mode walks
    /// the declared fields in reverse, consuming fixed slices from the
    /// tail; the variable field takes everything left when it is reached.
    pub fn split<'a>(&self, bits: &'a str) -> Result<Vec<&'a str>> {
        match self {
            Self::Uniform(0) => Ok(vec![bits]),
            Self::Uniform(size) => {
                let mut groups = Vec::with_capacity(bits.len() / size + 1);
                let mut end = bits.len();
                while end > *size {
                    groups.push(&bits[end - size..end]);
                    end -= size;
                }
                groups.push(&bits[..end]);
                groups.reverse();
                Ok(groups)
            }
            Self::Fields { fields, text } => {
                if self.fixed_total() > bits.len() {
                    return Err(Error::insufficient_bits(text.clone(), bits.len()));
                }
                let mut remaining = bits;
                let mut groups = Vec::with_capacity(fields.len());
                for field in fields.iter().rev() {
                    match field {
                        Field::Fixed(size) => {
                            if remaining.len() < *size {
                                return Err(Error::insufficient_bits(text.clone(), bits.len()));
                            }
                            let at = remaining.len() - size;
                            groups.push(&remaining[at..]);
                            remaining = &remaining[..at];
                        }
                        Field::Variable => {
                            groups.push(remaining);
                            remaining = "";
                        }
                    }
                }
                if !remaining.is_empty() {
                    return Err(Error::excess_bits(text.clone(), bits.len(), remaining.len()));
                }
                groups.reverse();
                Ok(groups)
            }
        }
    }
}

/// Joins groups into one rendered line.
///
/// Plain mode separates groups with single spaces. Color mode emits no
/// separator at all: each group is wrapped in one of two alternating
/// colors, the cycle anchored at the least-significant group. Empty
/// groups (a variable field that received nothing) are dropped.
pub fn render_groups(groups: &[&str], color: bool) -> String {
    let visible: Vec<&str> = groups.iter().copied().filter(|g| !g.is_empty()).collect();
    if !color {
        return visible.join(" ");
    }
    let count = visible.len();
    visible
        .iter()
        .enumerate()
        .map(|(i, group)| {
            // Parity relative to the LSB group keeps the cycle stable when
            // the leftmost group shrinks or disappears.
            if (count - 1 - i) % 2 == 0 {
                group.cyan().to_string()
            } else {
                group.yellow().to_string()
            }
        })
        .collect()
}
