//! Output width resolution.
//!
//! Ohne explizite Breite wird die kleinste Standard-Breite aus der Leiter
//! {8, 16, 32, 64} gewaehlt, die alle natuerlichen Breiten aufnimmt. Eine
//! explizite Breite wird unveraendert uebernommen, muss aber jede
//! natuerliche Breite abdecken.

use crate::literal::ParsedValue;
use crate::{Error, Result};

/// Ascending ladder of standard output widths.
pub const WIDTH_LADDER: [usize; 4] = [8, 16, 32, 64];

/// Picks the shared output width for all values.
///
/// With `explicit` set the ladder is skipped entirely; the request is
/// checked against every natural width and then used verbatim. Otherwise
/// the smallest ladder entry covering the widest value wins, falling back
/// to the raw maximum when even 64 bits do not suffice.
pub fn resolve_width(explicit: Option<usize>, values: &[ParsedValue]) -> Result<usize> {
    if let Some(width) = explicit {
        if let Some(v) = values.iter().find(|v| v.width() > width) {
            return Err(Error::width_too_small(v.text.clone(), v.width(), width));
        }
        return Ok(width);
    }

    let widest = values.iter().map(ParsedValue::width).max().unwrap_or(0);
    match WIDTH_LADDER.iter().find(|&&entry| entry >= widest) {
        Some(&entry) => Ok(entry),
        None => {
            log::warn!("Breiten-Leiter erschoepft, verwende {widest} Bits direkt");
            Ok(widest)
        }
    }
}
