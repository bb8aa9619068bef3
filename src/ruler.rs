//! Positional ruler lines above the rendered bits.
//!
//! Pro Dezimalstelle des hoechsten Bit-Index eine Ziffern-Zeile (MSB-Stelle
//! zuerst), darunter eine Trennzeile aus Strichen. Eine Ziffer erscheint
//! nur an runden Vielfachen ihrer Zehnerpotenz, plus an der allerersten
//! Spalte, wenn die Nummerierung oberhalb von 9 beginnt und der Leser den
//! Startwert sonst nicht ablesen koennte.
//!
//! Alle Zeilen werden mit derselben Gruppierung gerendert wie die
//! Bit-Zeilen, damit die Spalten ausgerichtet bleiben.

use crate::group::{render_groups, GroupSpec};
use crate::Result;

/// Builds the digit lines plus the dash separator line for `width` bit
/// columns numbered from `origin`.
///
/// By default the least-significant (rightmost) column carries `origin`
/// and indices ascend toward the most-significant end; with `reverse`
/// the most-significant (leftmost) column carries `origin` instead.
pub fn ruler_lines(
    width: usize,
    origin: u64,
    reverse: bool,
    spec: &GroupSpec,
    color: bool,
) -> Result<Vec<String>> {
    if width == 0 {
        return Ok(Vec::new());
    }

    let high = origin + width as u64 - 1;
    let places = if high == 0 { 1 } else { high.ilog10() as usize + 1 };

    let mut lines = Vec::with_capacity(places + 1);
    for place in (0..places).rev() {
        let pow = 10u64.pow(place as u32);
        let mut line = String::with_capacity(width);
        for col in 0..width {
            let index = if reverse {
                origin + col as u64
            } else {
                origin + (width - 1 - col) as u64
            };
            let shown = (index % pow == 0 && (index > 0 || place == 0))
                || (origin > 9 && index == origin);
            if shown {
                let digit = (index / pow) % 10;
                line.push((b'0' + digit as u8) as char);
            } else {
                line.push(' ');
            }
        }
        lines.push(render_groups(&spec.split(&line)?, color));
    }

    let dashes = "-".repeat(width);
    lines.push(render_groups(&spec.split(&dashes)?, color));
    Ok(lines)
}
